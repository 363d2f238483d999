/* src/router/core/rust/src/locale.rs */

use crate::href::split_segments;

/// Locale encoded as the first path segment of `href`, else `default_locale`.
///
/// Non-default locales are assumed to carry their code as a prefix
/// (`/cs/o-nas`); unprefixed paths belong to the default locale.
pub fn extract_locale<'a>(href: &str, locales: &'a [String], default_locale: &'a str) -> &'a str {
  first_segment(href)
    .and_then(|first| locales.iter().find(|l| l.as_str() == first))
    .map_or(default_locale, String::as_str)
}

fn first_segment(href: &str) -> Option<&str> {
  let path = href.find(['?', '#']).map_or(href, |end| &href[..end]);
  split_segments(path).next()
}

/// Locale configuration bundled for repeated extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleExtractor {
  locales: Vec<String>,
  default_locale: String,
  prefix_default_locale: bool,
}

impl LocaleExtractor {
  pub fn new(locales: Vec<String>, default_locale: impl Into<String>) -> Self {
    Self { locales, default_locale: default_locale.into(), prefix_default_locale: false }
  }

  /// When set, default-locale hrefs are expected to carry their prefix too.
  pub fn with_prefix_default_locale(mut self, enabled: bool) -> Self {
    self.prefix_default_locale = enabled;
    self
  }

  pub fn extract<'a>(&'a self, href: &str) -> &'a str {
    extract_locale(href, &self.locales, &self.default_locale)
  }

  /// First path segment hrefs of `locale` are expected to start with.
  pub fn prefix_for<'a>(&self, locale: &'a str) -> Option<&'a str> {
    if locale == self.default_locale && !self.prefix_default_locale {
      None
    } else {
      Some(locale)
    }
  }

  pub fn locales(&self) -> &[String] {
    &self.locales
  }

  pub fn default_locale(&self) -> &str {
    &self.default_locale
  }

  pub fn prefix_default_locale(&self) -> bool {
    self.prefix_default_locale
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn locales() -> Vec<String> {
    vec!["en".into(), "cs".into()]
  }

  #[test]
  fn unprefixed_falls_back_to_default() {
    assert_eq!(extract_locale("/about", &locales(), "en"), "en");
    assert_eq!(extract_locale("/", &locales(), "en"), "en");
    assert_eq!(extract_locale("", &locales(), "en"), "en");
  }

  #[test]
  fn prefixed_locale_wins() {
    assert_eq!(extract_locale("/cs/about", &locales(), "en"), "cs");
    assert_eq!(extract_locale("/cs", &locales(), "en"), "cs");
    assert_eq!(extract_locale("//cs//o-nas/", &locales(), "en"), "cs");
    assert_eq!(extract_locale("/cs?x=1", &locales(), "en"), "cs");
  }

  #[test]
  fn match_is_case_sensitive() {
    assert_eq!(extract_locale("/CS/about", &locales(), "en"), "en");
  }

  #[test]
  fn partial_segment_does_not_match() {
    assert_eq!(extract_locale("/csx/about", &locales(), "en"), "en");
  }

  #[test]
  fn extractor_prefix_for() {
    let extractor = LocaleExtractor::new(locales(), "en");
    assert_eq!(extractor.prefix_for("en"), None);
    assert_eq!(extractor.prefix_for("cs"), Some("cs"));
    let extractor = extractor.with_prefix_default_locale(true);
    assert_eq!(extractor.prefix_for("en"), Some("en"));
    assert_eq!(extractor.extract("/en/about"), "en");
  }
}
