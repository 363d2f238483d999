/* src/router/core/rust/src/config.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::errors::ConfigError;

pub const CONFIG_FILE_NAME: &str = "roots.toml";

/// Locale settings shared by the route generator and the router.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouterConfig {
  pub locales: Vec<String>,
  /// Empty means the first entry of `locales`.
  #[serde(default)]
  pub default_locale: String,
  /// Default-locale hrefs carry their locale prefix like every other locale.
  #[serde(default)]
  pub prefix_default_locale: bool,
}

impl RouterConfig {
  pub fn new(locales: Vec<String>, default_locale: impl Into<String>) -> Self {
    Self { locales, default_locale: default_locale.into(), prefix_default_locale: false }
  }

  /// Fill in an omitted default locale from the locale list.
  pub fn resolved(mut self) -> Self {
    if self.default_locale.is_empty()
      && let Some(first) = self.locales.first()
    {
      self.default_locale = first.clone();
    }
    self
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.locales.is_empty() {
      return Err(ConfigError::EmptyLocales);
    }
    if !self.locales.contains(&self.default_locale) {
      return Err(ConfigError::UnknownDefaultLocale {
        default_locale: self.default_locale.clone(),
        locales: self.locales.clone(),
      });
    }
    Ok(())
  }
}

pub fn parse_router_config(content: &str) -> Result<RouterConfig> {
  let config: RouterConfig = toml::from_str(content).context("invalid router config")?;
  let config = config.resolved();
  config.validate()?;
  Ok(config)
}

pub fn load_router_config(path: &Path) -> Result<RouterConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  parse_router_config(&content).with_context(|| format!("failed to parse {}", path.display()))
}

/// Walk upward from `start` to the nearest `roots.toml`.
pub fn find_router_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("{CONFIG_FILE_NAME} not found (searched upward from {})", start.display());
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_full_config() {
    let config = parse_router_config(
      r#"
locales = ["en", "cs"]
default_locale = "cs"
prefix_default_locale = true
"#,
    )
    .unwrap();
    assert_eq!(config.locales, vec!["en", "cs"]);
    assert_eq!(config.default_locale, "cs");
    assert!(config.prefix_default_locale);
  }

  #[test]
  fn default_locale_falls_back_to_first() {
    let config = parse_router_config(r#"locales = ["de", "en"]"#).unwrap();
    assert_eq!(config.default_locale, "de");
    assert!(!config.prefix_default_locale);
  }

  #[test]
  fn default_locale_not_in_locales() {
    let err = parse_router_config(
      r#"
locales = ["en"]
default_locale = "ja"
"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("\"ja\""));
    assert!(err.to_string().contains("not in"));
  }

  #[test]
  fn empty_locales_rejected() {
    let err = parse_router_config("locales = []").unwrap_err();
    assert!(err.to_string().contains("must not be empty"));
  }

  #[test]
  fn missing_locales_is_parse_error() {
    let err = parse_router_config("default_locale = \"en\"").unwrap_err();
    assert!(err.to_string().contains("invalid router config"));
  }

  #[test]
  fn find_config_walks_upward() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "locales = [\"en\"]\n").unwrap();
    let nested = dir.path().join("app").join("pages");
    std::fs::create_dir_all(&nested).unwrap();

    let found = find_router_config(&nested).unwrap();
    assert_eq!(found, dir.path().canonicalize().unwrap().join(CONFIG_FILE_NAME));
    let config = load_router_config(&found).unwrap();
    assert_eq!(config.default_locale, "en");
  }

  #[test]
  fn load_missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_router_config(&dir.path().join(CONFIG_FILE_NAME)).unwrap_err();
    assert!(err.to_string().contains("failed to read"));
  }
}
