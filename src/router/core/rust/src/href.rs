/* src/router/core/rust/src/href.rs */

/// Join href segments into a canonical absolute path.
///
/// `%2F` produced by encoding a catch-all value is restored to `/`, runs of
/// `/` collapse into one, a trailing `/` is dropped and the result always
/// starts with a single `/`. Total: any input yields some path.
pub fn format_href<S: AsRef<str>>(segments: &[S]) -> String {
  let joined = segments.iter().map(AsRef::as_ref).collect::<Vec<_>>().join("/");
  normalize_path(&joined.replace("%2F", "/"))
}

/// Same normalization as [`format_href`] for a single path, minus `%2F`
/// restoration, so encoded slashes inside one segment stay inside it.
pub fn normalize_path(path: &str) -> String {
  let mut out = String::with_capacity(path.len() + 1);
  out.push('/');
  for segment in path.split('/').filter(|s| !s.is_empty()) {
    if out.len() > 1 {
      out.push('/');
    }
    out.push_str(segment);
  }
  out
}

/// Non-empty segments of a normalized path. `/` has none.
pub(crate) fn split_segments(path: &str) -> impl Iterator<Item = &str> {
  path.split('/').filter(|s| !s.is_empty())
}
