/* src/router/core/rust/src/schema/sanitize.rs */

use std::collections::HashSet;

use super::types::{Route, RouterSchema};
use crate::errors::ConfigError;
use crate::href::split_segments;
use crate::locale::LocaleExtractor;
use crate::template::Template;

/// Validate `schema` and order every locale's routes for matching.
///
/// Locales are de-duplicated, later routes repeating a name are dropped, and
/// routes are stable-sorted so literal templates come before dynamic ones,
/// dynamic before catch-all, and catch-all before optional catch-all.
pub fn sanitize_schema(mut schema: RouterSchema) -> Result<RouterSchema, ConfigError> {
  schema.locales = dedup_locales(std::mem::take(&mut schema.locales));

  if schema.locales.is_empty() {
    return Err(ConfigError::EmptyLocales);
  }
  if !schema.locales.contains(&schema.default_locale) {
    return Err(ConfigError::UnknownDefaultLocale {
      default_locale: schema.default_locale,
      locales: schema.locales,
    });
  }

  for (locale, routes) in &mut schema.routes {
    if !schema.locales.contains(locale) {
      tracing::debug!(%locale, "route table key is not a configured locale, keeping as compound key");
    }
    validate_hrefs(locale, routes)?;
    dedup_names(locale, routes);
    routes.sort_by_cached_key(|route| Template::parse(&route.href).specificity());
  }

  Ok(schema)
}

fn dedup_locales(locales: Vec<String>) -> Vec<String> {
  let mut seen = HashSet::new();
  let mut unique = Vec::with_capacity(locales.len());
  for locale in locales {
    if seen.insert(locale.clone()) {
      unique.push(locale);
    } else {
      tracing::warn!(%locale, "duplicate locale in schema ignored");
    }
  }
  unique
}

fn validate_hrefs(locale: &str, routes: &[Route]) -> Result<(), ConfigError> {
  match routes.iter().find(|r| !r.href.starts_with('/')) {
    Some(route) => Err(ConfigError::InvalidHref {
      locale: locale.to_string(),
      name: route.name.clone(),
      href: route.href.clone(),
    }),
    None => Ok(()),
  }
}

fn dedup_names(locale: &str, routes: &mut Vec<Route>) {
  let mut seen = HashSet::new();
  routes.retain(|route| {
    let first = seen.insert(route.name.clone());
    if !first {
      tracing::warn!(%locale, name = %route.name, href = %route.href, "duplicate route name ignored");
    }
    first
  });
}

/// Warn about routes whose href does not start with their locale's prefix.
/// Returns how many were found; never fails construction.
pub fn check_locale_prefixes(schema: &RouterSchema, extractor: &LocaleExtractor) -> usize {
  let mut mismatched = 0;
  for (locale, routes) in &schema.routes {
    let Some(prefix) = extractor.prefix_for(locale) else {
      continue;
    };
    if !schema.locales.contains(locale) {
      continue;
    }
    for route in routes {
      if split_segments(&route.href).next() != Some(prefix) {
        tracing::warn!(%locale, name = %route.name, href = %route.href, "route href lacks locale prefix");
        mismatched += 1;
      }
    }
  }
  mismatched
}
