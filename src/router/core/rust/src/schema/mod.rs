/* src/router/core/rust/src/schema/mod.rs */

// Route schema: the per-locale route tables produced by the generator,
// validated and ordered before a Router uses them.

mod loader;
mod sanitize;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{load_schema, parse_schema};
pub use sanitize::{check_locale_prefixes, sanitize_schema};
pub use types::{Route, RouterSchema};
