/* src/router/core/rust/src/lib.rs */

//! Localized route resolution.
//!
//! A [`RouterSchema`] lists, per locale, the href template of every named
//! route. The [`Router`] turns a name into an href for a locale, and an
//! incoming href back into its locale and route.

pub mod config;
pub mod context;
pub mod errors;
pub mod href;
pub mod locale;
pub mod params;
pub mod router;
pub mod schema;
pub mod template;

// Re-exports for ergonomic use
pub use config::{RouterConfig, find_router_config, load_router_config, parse_router_config};
pub use context::{FixedLocale, LocaleContext, LocaleScope, NoLocale, ScopedLocale, locale_scope, with_locale};
pub use errors::ConfigError;
pub use href::format_href;
pub use locale::{LocaleExtractor, extract_locale};
pub use params::{ParamValue, RouteParams};
pub use router::{HrefParams, LocaleKey, RouteMatch, Router};
pub use schema::{Route, RouterSchema, load_schema, parse_schema, sanitize_schema};
pub use template::{Compiled, FallbackReason, Template, compile, match_path};
