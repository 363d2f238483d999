/* src/router/core/rust/src/template/parse.rs */

use std::sync::OnceLock;

use regex::Regex;

use super::decode_segment;
use crate::href::{normalize_path, split_segments};

fn token_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| {
    Regex::new(
      r"^(?::(?P<colon>[A-Za-z0-9_]+)(?P<modifier>[+*]?)|\[\[\.\.\.(?P<optional>[A-Za-z0-9_]+)\]\]|\[\.\.\.(?P<catchall>[A-Za-z0-9_]+)\]|\[(?P<dynamic>[A-Za-z0-9_]+)\])$",
    )
    .expect("route token pattern is valid")
  })
}

/// One path segment of a route template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
  /// `raw` as written in the template, `decoded` is what a request segment
  /// must equal after percent-decoding.
  Literal { raw: String, decoded: String },
  /// `:slug` / `[slug]`
  Dynamic(String),
  /// `:parts+` / `[...parts]`
  CatchAll(String),
  /// `:parts*` / `[[...parts]]`
  OptionalCatchAll(String),
}

/// Matching precedence class. Lower sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Specificity {
  Static,
  Dynamic,
  CatchAll,
  OptionalCatchAll,
}

impl Segment {
  pub fn specificity(&self) -> Specificity {
    match self {
      Self::Literal { .. } => Specificity::Static,
      Self::Dynamic(_) => Specificity::Dynamic,
      Self::CatchAll(_) => Specificity::CatchAll,
      Self::OptionalCatchAll(_) => Specificity::OptionalCatchAll,
    }
  }

  pub fn param_name(&self) -> Option<&str> {
    match self {
      Self::Literal { .. } => None,
      Self::Dynamic(name) | Self::CatchAll(name) | Self::OptionalCatchAll(name) => Some(name),
    }
  }
}

/// A parsed route template. Parsing never fails: anything that is not a
/// parameter token is a literal segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
  source: String,
  segments: Vec<Segment>,
}

impl Template {
  pub fn parse(source: &str) -> Self {
    let normalized = normalize_path(source);
    let segments = split_segments(&normalized).map(parse_segment).collect();
    Self { source: source.to_string(), segments }
  }

  /// The template exactly as given.
  pub fn source(&self) -> &str {
    &self.source
  }

  pub fn segments(&self) -> &[Segment] {
    &self.segments
  }

  /// The most general segment decides the class; `/` and literal-only
  /// templates are `Static`.
  pub fn specificity(&self) -> Specificity {
    self.segments.iter().map(Segment::specificity).max().unwrap_or(Specificity::Static)
  }

  pub fn param_names(&self) -> impl Iterator<Item = &str> {
    self.segments.iter().filter_map(Segment::param_name)
  }

  pub fn has_catch_all(&self) -> bool {
    self.specificity() >= Specificity::CatchAll
  }
}

fn parse_segment(segment: &str) -> Segment {
  let Some(caps) = token_re().captures(segment) else {
    return Segment::Literal { raw: segment.to_string(), decoded: decode_segment(segment) };
  };

  if let Some(name) = caps.name("colon") {
    let name = name.as_str().to_string();
    return match caps.name("modifier").map(|m| m.as_str()) {
      Some("+") => Segment::CatchAll(name),
      Some("*") => Segment::OptionalCatchAll(name),
      _ => Segment::Dynamic(name),
    };
  }
  if let Some(name) = caps.name("optional") {
    return Segment::OptionalCatchAll(name.as_str().to_string());
  }
  if let Some(name) = caps.name("catchall") {
    return Segment::CatchAll(name.as_str().to_string());
  }
  match caps.name("dynamic") {
    Some(name) => Segment::Dynamic(name.as_str().to_string()),
    None => Segment::Literal { raw: segment.to_string(), decoded: decode_segment(segment) },
  }
}
