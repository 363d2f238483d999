/* src/router/core/rust/src/params.rs */

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Segment parameters keyed by name.
pub type RouteParams = BTreeMap<String, ParamValue>;

/// A parameter value: one segment, a catch-all sequence, or nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
  Null,
  One(String),
  Many(Vec<String>),
}

impl ParamValue {
  /// Null and empty strings count as "not given".
  pub fn is_absent(&self) -> bool {
    match self {
      Self::Null => true,
      Self::One(s) => s.is_empty(),
      Self::Many(_) => false,
    }
  }

  pub fn as_str(&self) -> Option<&str> {
    match self {
      Self::One(s) => Some(s),
      _ => None,
    }
  }

  pub fn as_slice(&self) -> Option<&[String]> {
    match self {
      Self::Many(v) => Some(v),
      _ => None,
    }
  }
}

impl From<&str> for ParamValue {
  fn from(s: &str) -> Self {
    Self::One(s.to_string())
  }
}

impl From<String> for ParamValue {
  fn from(s: String) -> Self {
    Self::One(s)
  }
}

impl From<Vec<String>> for ParamValue {
  fn from(v: Vec<String>) -> Self {
    Self::Many(v)
  }
}

impl From<Vec<&str>> for ParamValue {
  fn from(v: Vec<&str>) -> Self {
    Self::Many(v.into_iter().map(String::from).collect())
  }
}

impl From<&[&str]> for ParamValue {
  fn from(v: &[&str]) -> Self {
    Self::Many(v.iter().map(|s| (*s).to_string()).collect())
  }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
  fn from(v: Option<T>) -> Self {
    v.map_or(Self::Null, Into::into)
  }
}

/// Drop entries whose value is absent so optional segments compile cleanly.
pub fn prune_params(params: &mut RouteParams) {
  params.retain(|_, v| !v.is_absent());
}
