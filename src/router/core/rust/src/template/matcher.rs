/* src/router/core/rust/src/template/matcher.rs */

use super::decode_segment;
use super::parse::{Segment, Template};
use crate::href::{normalize_path, split_segments};
use crate::params::{ParamValue, RouteParams};

impl Template {
  /// Match a request path against this template, capturing parameters.
  ///
  /// Query and fragment are ignored, the path is normalized and each segment
  /// percent-decoded before comparison. Catch-alls capture their segments as
  /// `ParamValue::Many`, an optional catch-all may capture none.
  pub fn match_path(&self, path: &str) -> Option<RouteParams> {
    let path = path.find(['?', '#']).map_or(path, |end| &path[..end]);
    let normalized = normalize_path(path);
    let segments: Vec<String> = split_segments(&normalized).map(decode_segment).collect();

    let mut params = RouteParams::new();
    match_segments(self.segments(), &segments, &mut params).then_some(params)
  }

  pub fn is_match(&self, path: &str) -> bool {
    self.match_path(path).is_some()
  }
}

// Params are only inserted on the way back out of a successful match, so a
// failed branch never leaves partial captures behind.
fn match_segments(pattern: &[Segment], path: &[String], params: &mut RouteParams) -> bool {
  let Some((head, rest)) = pattern.split_first() else {
    return path.is_empty();
  };

  match head {
    Segment::Literal { decoded, .. } => match path.split_first() {
      Some((first, tail)) if first == decoded => match_segments(rest, tail, params),
      _ => false,
    },
    Segment::Dynamic(name) => {
      let Some((first, tail)) = path.split_first() else {
        return false;
      };
      if !match_segments(rest, tail, params) {
        return false;
      }
      params.insert(name.clone(), ParamValue::One(first.clone()));
      true
    }
    Segment::CatchAll(name) | Segment::OptionalCatchAll(name) => {
      let min = usize::from(matches!(head, Segment::CatchAll(_)));
      // Greedy: longest capture first.
      for take in (min..=path.len()).rev() {
        if match_segments(rest, &path[take..], params) {
          params.insert(name.clone(), ParamValue::Many(path[..take].to_vec()));
          return true;
        }
      }
      false
    }
  }
}
