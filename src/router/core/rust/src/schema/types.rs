/* src/router/core/rust/src/schema/types.rs */

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A named page and its href template in one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
  /// Shared by every locale's variant of the same page, e.g. `/auth/login`.
  pub name: String,
  /// Template such as `/cs/blog/:slug`.
  pub href: String,
}

impl Route {
  pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
    Self { name: name.into(), href: href.into() }
  }
}

/// Per-locale route tables plus the locale configuration they were built for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterSchema {
  pub routes: BTreeMap<String, Vec<Route>>,
  pub locales: Vec<String>,
  pub default_locale: String,
}

impl RouterSchema {
  pub fn new(locales: Vec<String>, default_locale: impl Into<String>) -> Self {
    Self { routes: BTreeMap::new(), locales, default_locale: default_locale.into() }
  }

  /// Append a route to `locale`'s table.
  pub fn with_route(mut self, locale: &str, name: &str, href: &str) -> Self {
    self.routes.entry(locale.to_string()).or_default().push(Route::new(name, href));
    self
  }

  pub fn routes_for(&self, locale: &str) -> &[Route] {
    self.routes.get(locale).map_or(&[], Vec::as_slice)
  }
}
