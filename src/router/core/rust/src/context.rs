/* src/router/core/rust/src/context.rs */

use std::cell::RefCell;
use std::marker::PhantomData;

/// Source of the locale used when a caller does not name one.
pub trait LocaleContext {
  fn current_locale(&self) -> Option<String>;
}

impl<F> LocaleContext for F
where
  F: Fn() -> Option<String>,
{
  fn current_locale(&self) -> Option<String> {
    self()
  }
}

/// Always the same locale. Suited to one router per request or per locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLocale(pub String);

impl FixedLocale {
  pub fn new(locale: impl Into<String>) -> Self {
    Self(locale.into())
  }
}

impl LocaleContext for FixedLocale {
  fn current_locale(&self) -> Option<String> {
    Some(self.0.clone())
  }
}

/// Never supplies a locale; lookups use the schema default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoLocale;

impl LocaleContext for NoLocale {
  fn current_locale(&self) -> Option<String> {
    None
  }
}

thread_local! {
  static SCOPED_LOCALE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Reads the locale installed by the innermost [`locale_scope`] on the
/// current thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScopedLocale;

impl LocaleContext for ScopedLocale {
  fn current_locale(&self) -> Option<String> {
    SCOPED_LOCALE.with(|cell| cell.borrow().clone())
  }
}

/// Guard returned by [`locale_scope`]. Restores the enclosing locale on drop.
#[must_use = "the locale is only in effect while the guard is alive"]
#[derive(Debug)]
pub struct LocaleScope {
  previous: Option<String>,
  // Bound to the thread whose slot it restores.
  _not_send: PhantomData<*const ()>,
}

/// Install `locale` for the current thread until the guard drops.
/// Scopes nest; dropping an inner guard brings back the outer locale.
pub fn locale_scope(locale: impl Into<String>) -> LocaleScope {
  let locale = locale.into();
  tracing::trace!(%locale, "entering locale scope");
  let previous = SCOPED_LOCALE.with(|cell| cell.replace(Some(locale)));
  LocaleScope { previous, _not_send: PhantomData }
}

impl Drop for LocaleScope {
  fn drop(&mut self) {
    let previous = self.previous.take();
    SCOPED_LOCALE.with(|cell| {
      cell.replace(previous);
    });
  }
}

/// Run `f` with `locale` as the scoped locale.
pub fn with_locale<R>(locale: impl Into<String>, f: impl FnOnce() -> R) -> R {
  let _scope = locale_scope(locale);
  f()
}
