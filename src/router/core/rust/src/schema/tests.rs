/* src/router/core/rust/src/schema/tests.rs */

use std::io::Write;

use super::*;
use crate::errors::ConfigError;
use crate::locale::LocaleExtractor;

fn schema() -> RouterSchema {
  RouterSchema::new(vec!["en".into(), "cs".into()], "en")
}

fn hrefs(schema: &RouterSchema, locale: &str) -> Vec<String> {
  schema.routes_for(locale).iter().map(|r| r.href.clone()).collect()
}

// -- Sanitizing --

#[test]
fn literal_sorted_before_dynamic() {
  let sanitized = sanitize_schema(
    schema().with_route("en", "/users/[id]", "/users/:id").with_route(
      "en",
      "/users/settings",
      "/users/settings",
    ),
  )
  .unwrap();
  assert_eq!(hrefs(&sanitized, "en"), vec!["/users/settings", "/users/:id"]);
}

#[test]
fn full_specificity_order_is_stable() {
  let sanitized = sanitize_schema(
    schema()
      .with_route("en", "/opt", "/docs/:p*")
      .with_route("en", "/all", "/docs/:p+")
      .with_route("en", "/b", "/b/:id")
      .with_route("en", "/a", "/a/:id")
      .with_route("en", "/home", "/")
      .with_route("en", "/about", "/about"),
  )
  .unwrap();
  assert_eq!(
    hrefs(&sanitized, "en"),
    vec!["/", "/about", "/b/:id", "/a/:id", "/docs/:p+", "/docs/:p*"]
  );
}

#[test]
fn duplicate_names_keep_first() {
  let sanitized = sanitize_schema(
    schema().with_route("en", "/about", "/about").with_route("en", "/about", "/about-us"),
  )
  .unwrap();
  assert_eq!(hrefs(&sanitized, "en"), vec!["/about"]);
}

#[test]
fn duplicate_locales_removed_in_order() {
  let mut input = schema();
  input.locales = vec!["en".into(), "cs".into(), "en".into()];
  let sanitized = sanitize_schema(input).unwrap();
  assert_eq!(sanitized.locales, vec!["en", "cs"]);
}

#[test]
fn default_locale_must_be_listed() {
  let err = sanitize_schema(RouterSchema::new(vec!["en".into()], "de")).unwrap_err();
  assert_eq!(
    err,
    ConfigError::UnknownDefaultLocale { default_locale: "de".into(), locales: vec!["en".into()] }
  );
}

#[test]
fn empty_locales_rejected() {
  let err = sanitize_schema(RouterSchema::new(vec![], "en")).unwrap_err();
  assert_eq!(err, ConfigError::EmptyLocales);
}

#[test]
fn href_without_leading_slash_rejected() {
  let err = sanitize_schema(schema().with_route("cs", "/about", "cs/o-nas")).unwrap_err();
  assert!(matches!(err, ConfigError::InvalidHref { ref locale, .. } if locale == "cs"));
}

#[test]
fn empty_href_rejected() {
  let err = sanitize_schema(schema().with_route("en", "/about", "")).unwrap_err();
  assert!(matches!(err, ConfigError::InvalidHref { ref href, .. } if href.is_empty()));
}

#[test]
fn compound_locale_keys_are_kept() {
  let sanitized = sanitize_schema(schema().with_route("en_cs", "/about", "/about")).unwrap();
  assert_eq!(hrefs(&sanitized, "en_cs"), vec!["/about"]);
}

#[test]
fn prefix_check_counts_unprefixed_routes() {
  let input = schema()
    .with_route("en", "/about", "/about")
    .with_route("cs", "/about", "/cs/o-nas")
    .with_route("cs", "/contact", "/kontakt");
  let extractor = LocaleExtractor::new(input.locales.clone(), "en");
  assert_eq!(check_locale_prefixes(&input, &extractor), 1);

  let extractor = extractor.with_prefix_default_locale(true);
  assert_eq!(check_locale_prefixes(&input, &extractor), 2);
}

// -- Loading --

const SCHEMA_JSON: &str = r#"{
  "routes": {
    "en": [
      { "name": "/blog/[slug]", "href": "/blog/:slug" },
      { "name": "/blog/new", "href": "/blog/new" }
    ],
    "cs": [{ "name": "/blog/[slug]", "href": "/cs/blog/:slug" }]
  },
  "locales": ["en", "cs"],
  "defaultLocale": "en"
}"#;

#[test]
fn parse_schema_sanitizes() {
  let schema = parse_schema(SCHEMA_JSON).unwrap();
  assert_eq!(schema.default_locale, "en");
  assert_eq!(hrefs(&schema, "en"), vec!["/blog/new", "/blog/:slug"]);
}

#[test]
fn parse_schema_reports_config_error() {
  let json = r#"{ "routes": {}, "locales": ["en"], "defaultLocale": "cs" }"#;
  let err = parse_schema(json).unwrap_err();
  assert!(format!("{err:#}").contains("default locale \"cs\" is not in locales"));
}

#[test]
fn parse_schema_rejects_bad_json() {
  let err = parse_schema("{ \"routes\": [] }").unwrap_err();
  assert!(err.to_string().contains("invalid router schema JSON"));
}

#[test]
fn load_schema_from_file() {
  let mut file = tempfile::NamedTempFile::new().unwrap();
  file.write_all(SCHEMA_JSON.as_bytes()).unwrap();
  let schema = load_schema(file.path()).unwrap();
  assert_eq!(schema.locales, vec!["en", "cs"]);
}

#[test]
fn load_schema_missing_file_names_path() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("schema.json");
  let err = load_schema(&path).unwrap_err();
  assert!(err.to_string().contains("schema.json"));
}
