/* src/router/core/rust/src/template/mod.rs */

// Route templates: parse once, then compile params into a path or match a
// path back into params. Literal, `:name` / `[name]`, `:name+` / `[...name]`
// and `:name*` / `[[...name]]` segments.

mod compile;
mod matcher;
mod parse;


use std::borrow::Cow;

use percent_encoding::percent_decode_str;

use crate::params::RouteParams;

pub use compile::{Compiled, FallbackReason};
pub use parse::{Segment, Specificity, Template};

/// Compile `template` with `params`. See [`Template::compile`].
pub fn compile(template: &str, params: &RouteParams) -> Compiled {
  Template::parse(template).compile(params)
}

/// Match `path` against `template`. See [`Template::match_path`].
pub fn match_path(template: &str, path: &str) -> Option<RouteParams> {
  Template::parse(template).match_path(path)
}

/// Percent-decode one segment; escapes that do not form UTF-8 leave it raw.
pub(crate) fn decode_segment(raw: &str) -> String {
  percent_decode_str(raw).decode_utf8().map_or_else(|_| raw.to_string(), Cow::into_owned)
}
