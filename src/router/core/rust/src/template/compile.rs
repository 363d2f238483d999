/* src/router/core/rust/src/template/compile.rs */

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::parse::{Segment, Template};
use crate::params::{ParamValue, RouteParams};

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
  .remove(b'-')
  .remove(b'_')
  .remove(b'.')
  .remove(b'!')
  .remove(b'~')
  .remove(b'*')
  .remove(b'\'')
  .remove(b'(')
  .remove(b')');

pub(crate) fn encode_component(value: &str) -> String {
  utf8_percent_encode(value, COMPONENT).to_string()
}

/// Outcome of compiling a template. A template that cannot be filled in is
/// handed back verbatim so link rendering never has to handle an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compiled {
  Path(String),
  Fallback { raw: String, reason: FallbackReason },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
  /// Required segment parameter not supplied.
  MissingParam(String),
  /// A sequence given to a single-segment parameter.
  UnexpectedSequence(String),
  /// A catch-all sequence containing an empty element.
  EmptySegment(String),
}

impl fmt::Display for FallbackReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::MissingParam(name) => write!(f, "missing parameter \"{name}\""),
      Self::UnexpectedSequence(name) => write!(f, "parameter \"{name}\" does not accept a sequence"),
      Self::EmptySegment(name) => write!(f, "parameter \"{name}\" contains an empty segment"),
    }
  }
}

impl Compiled {
  pub fn as_str(&self) -> &str {
    match self {
      Self::Path(path) => path,
      Self::Fallback { raw, .. } => raw,
    }
  }

  pub fn into_string(self) -> String {
    match self {
      Self::Path(path) => path,
      Self::Fallback { raw, .. } => raw,
    }
  }

  pub fn is_fallback(&self) -> bool {
    matches!(self, Self::Fallback { .. })
  }
}

impl Template {
  /// Substitute `params` into the template, percent-encoding every value.
  /// Extra params are ignored; empty and null values count as missing.
  pub fn compile(&self, params: &RouteParams) -> Compiled {
    match self.render(params) {
      Ok(path) => Compiled::Path(path),
      Err(reason) => {
        tracing::debug!(template = %self.source(), %reason, "route template falls back to raw form");
        Compiled::Fallback { raw: self.source().to_string(), reason }
      }
    }
  }

  fn render(&self, params: &RouteParams) -> Result<String, FallbackReason> {
    if self.source().is_empty() {
      return Ok(String::new());
    }

    let mut path = String::new();
    for segment in self.segments() {
      match segment {
        Segment::Literal { raw, .. } => push_segment(&mut path, raw),
        Segment::Dynamic(name) => match lookup(params, name) {
          Some(ParamValue::One(value)) => push_segment(&mut path, &encode_component(value)),
          Some(_) => return Err(FallbackReason::UnexpectedSequence(name.clone())),
          None => return Err(FallbackReason::MissingParam(name.clone())),
        },
        Segment::CatchAll(name) => match lookup(params, name) {
          Some(value) if !is_empty_sequence(value) => push_catch_all(&mut path, name, value)?,
          _ => return Err(FallbackReason::MissingParam(name.clone())),
        },
        Segment::OptionalCatchAll(name) => {
          if let Some(value) = lookup(params, name)
            && !is_empty_sequence(value)
          {
            push_catch_all(&mut path, name, value)?;
          }
        }
      }
    }

    if path.is_empty() {
      path.push('/');
    }
    Ok(path)
  }
}

fn lookup<'a>(params: &'a RouteParams, name: &str) -> Option<&'a ParamValue> {
  params.get(name).filter(|v| !v.is_absent())
}

fn is_empty_sequence(value: &ParamValue) -> bool {
  matches!(value, ParamValue::Many(v) if v.is_empty())
}

fn push_segment(path: &mut String, segment: &str) {
  path.push('/');
  path.push_str(segment);
}

fn push_catch_all(path: &mut String, name: &str, value: &ParamValue) -> Result<(), FallbackReason> {
  match value {
    ParamValue::Many(parts) => {
      if parts.iter().any(String::is_empty) {
        return Err(FallbackReason::EmptySegment(name.to_string()));
      }
      for part in parts {
        push_segment(path, &encode_component(part));
      }
    }
    // A single string is encoded whole; its slashes come back through the formatter.
    ParamValue::One(value) => push_segment(path, &encode_component(value)),
    ParamValue::Null => return Err(FallbackReason::MissingParam(name.to_string())),
  }
  Ok(())
}
