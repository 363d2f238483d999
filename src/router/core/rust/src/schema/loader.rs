/* src/router/core/rust/src/schema/loader.rs */

use std::path::Path;

use anyhow::{Context, Result};

use super::sanitize::sanitize_schema;
use super::types::RouterSchema;

/// Parse generator JSON (`routes`, `locales`, `defaultLocale`) and sanitize it.
pub fn parse_schema(json: &str) -> Result<RouterSchema> {
  let schema: RouterSchema = serde_json::from_str(json).context("invalid router schema JSON")?;
  let schema = sanitize_schema(schema).context("invalid router schema")?;
  Ok(schema)
}

/// Read and sanitize a schema file written by the route generator.
pub fn load_schema(path: &Path) -> Result<RouterSchema> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let schema = parse_schema(&content).with_context(|| format!("failed to load {}", path.display()))?;
  tracing::debug!(
    path = %path.display(),
    locales = schema.locales.len(),
    routes = schema.routes.values().map(Vec::len).sum::<usize>(),
    "router schema loaded"
  );
  Ok(schema)
}
