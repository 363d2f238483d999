/* src/router/core/rust/src/errors.rs */

use thiserror::Error;

/// Schema or configuration invariant violation.
///
/// Raised once while a schema is sanitized or a config is validated, never
/// from a lookup. A Router cannot be built from input that produces one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
  #[error("locales must not be empty")]
  EmptyLocales,

  #[error("default locale \"{default_locale}\" is not in locales {locales:?}")]
  UnknownDefaultLocale { default_locale: String, locales: Vec<String> },

  #[error("route \"{name}\" in locale \"{locale}\" has invalid href \"{href}\" (must start with \"/\")")]
  InvalidHref { locale: String, name: String, href: String },

  #[error("schema default locale \"{schema}\" does not match configured default locale \"{config}\"")]
  DefaultLocaleMismatch { schema: String, config: String },
}
