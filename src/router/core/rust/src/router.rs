/* src/router/core/rust/src/router.rs */

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::RouterConfig;
use crate::context::{LocaleContext, ScopedLocale};
use crate::errors::ConfigError;
use crate::href::format_href;
use crate::locale::LocaleExtractor;
use crate::params::{ParamValue, RouteParams, prune_params};
use crate::schema::{Route, RouterSchema, check_locale_prefixes, sanitize_schema};
use crate::template::Template;

/// Locale selector for [`Router::get_href`]. Candidates are joined with `_`
/// into a single compound lookup key (`["en", "cs"]` looks up `en_cs`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocaleKey {
  One(String),
  Candidates(Vec<String>),
}

impl LocaleKey {
  pub fn key(&self) -> Cow<'_, str> {
    match self {
      Self::One(locale) => Cow::Borrowed(locale),
      Self::Candidates(candidates) => Cow::Owned(candidates.join("_")),
    }
  }
}

impl From<&str> for LocaleKey {
  fn from(locale: &str) -> Self {
    Self::One(locale.to_string())
  }
}

impl From<String> for LocaleKey {
  fn from(locale: String) -> Self {
    Self::One(locale)
  }
}

impl From<Vec<String>> for LocaleKey {
  fn from(candidates: Vec<String>) -> Self {
    Self::Candidates(candidates)
  }
}

impl From<&[&str]> for LocaleKey {
  fn from(candidates: &[&str]) -> Self {
    Self::Candidates(candidates.iter().map(|s| (*s).to_string()).collect())
  }
}

/// Arguments to [`Router::get_href`]: an optional locale plus segment params.
/// Deserializes from a flat object such as `{"locale": "cs", "slug": "x"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrefParams {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub locale: Option<LocaleKey>,
  #[serde(flatten)]
  pub params: RouteParams,
}

impl HrefParams {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn locale(mut self, locale: impl Into<LocaleKey>) -> Self {
    self.locale = Some(locale.into());
    self
  }

  pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
    self.params.insert(name.into(), value.into());
    self
  }
}

/// A route found for an href, with the locale it was looked up in and the
/// captured segment params.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
  pub route: &'a Route,
  pub locale: &'a str,
  pub params: RouteParams,
}

/// Resolves route names to hrefs and hrefs back to routes and locales.
///
/// Built once from a schema, which is sanitized and whose templates are
/// parsed up front. Lookups never fail: an unknown name links to `/`, an
/// unknown href yields `None`.
#[derive(Debug)]
pub struct Router<C = ScopedLocale> {
  schema: RouterSchema,
  // Parallel to `schema.routes`, same order.
  templates: BTreeMap<String, Vec<Template>>,
  extractor: LocaleExtractor,
  context: C,
}

impl Router<ScopedLocale> {
  /// Router whose implicit locale comes from the current [`locale_scope`].
  ///
  /// [`locale_scope`]: crate::context::locale_scope
  pub fn new(schema: RouterSchema) -> Result<Self, ConfigError> {
    Self::with_context(schema, ScopedLocale)
  }
}

impl<C: LocaleContext> Router<C> {
  pub fn with_context(schema: RouterSchema, context: C) -> Result<Self, ConfigError> {
    Self::build(schema, context, false)
  }

  /// Like [`Router::with_context`], checking the schema against `config` and
  /// taking its `prefix_default_locale` setting.
  pub fn from_config(
    schema: RouterSchema,
    config: &RouterConfig,
    context: C,
  ) -> Result<Self, ConfigError> {
    config.validate()?;
    if schema.default_locale != config.default_locale {
      return Err(ConfigError::DefaultLocaleMismatch {
        schema: schema.default_locale,
        config: config.default_locale.clone(),
      });
    }
    Self::build(schema, context, config.prefix_default_locale)
  }

  fn build(
    schema: RouterSchema,
    context: C,
    prefix_default_locale: bool,
  ) -> Result<Self, ConfigError> {
    let schema = sanitize_schema(schema)?;
    let templates = schema
      .routes
      .iter()
      .map(|(locale, routes)| {
        (locale.clone(), routes.iter().map(|route| Template::parse(&route.href)).collect())
      })
      .collect();
    let extractor = LocaleExtractor::new(schema.locales.clone(), schema.default_locale.clone())
      .with_prefix_default_locale(prefix_default_locale);
    check_locale_prefixes(&schema, &extractor);

    Ok(Self { schema, templates, extractor, context })
  }

  /// Href of route `name`, compiled with `params`.
  ///
  /// The locale is `params.locale`, else the context's current locale, else
  /// the default locale. Empty and null params are dropped first. A template
  /// that cannot be compiled is returned raw (formatted); an unknown name
  /// gives `/`.
  pub fn get_href(&self, name: &str, params: &HrefParams) -> String {
    let locale = self.resolve_locale(params.locale.as_ref());
    let mut segment_params = params.params.clone();
    prune_params(&mut segment_params);

    let compiled = match self.find_template(&locale, name) {
      Some(template) => template.compile(&segment_params).into_string(),
      None => {
        tracing::debug!(%name, %locale, "no route with this name, linking to root");
        String::new()
      }
    };
    format_href(&[compiled])
  }

  /// [`Router::get_href`] without params.
  pub fn href(&self, name: &str) -> String {
    self.get_href(name, &HrefParams::default())
  }

  pub fn get_locale_from_href(&self, href: &str) -> &str {
    self.extractor.extract(href)
  }

  pub fn get_route_from_href(&self, href: &str) -> Option<&Route> {
    self.match_href(href).map(|m| m.route)
  }

  /// First route of the href's locale whose template matches, in sanitized
  /// (most specific first) order.
  pub fn match_href(&self, href: &str) -> Option<RouteMatch<'_>> {
    let locale = self.get_locale_from_href(href);
    let templates = self.templates.get(locale)?;
    let found = self.schema.routes_for(locale).iter().zip(templates).find_map(|(route, template)| {
      template.match_path(href).map(|params| RouteMatch { route, locale, params })
    });
    tracing::trace!(%href, %locale, route = found.as_ref().map(|m| m.route.name.as_str()), "href resolved");
    found
  }

  pub fn find_route(&self, locale: &str, name: &str) -> Option<&Route> {
    self.schema.routes_for(locale).iter().find(|route| route.name == name)
  }

  /// Sanitized routes of `locale`; empty for an unknown locale.
  pub fn routes(&self, locale: &str) -> &[Route] {
    self.schema.routes_for(locale)
  }

  pub fn locales(&self) -> &[String] {
    &self.schema.locales
  }

  pub fn default_locale(&self) -> &str {
    &self.schema.default_locale
  }

  pub fn schema(&self) -> &RouterSchema {
    &self.schema
  }

  pub fn context(&self) -> &C {
    &self.context
  }

  fn resolve_locale(&self, explicit: Option<&LocaleKey>) -> String {
    match explicit {
      Some(key) => key.key().into_owned(),
      None => self.context.current_locale().unwrap_or_else(|| self.schema.default_locale.clone()),
    }
  }

  fn find_template(&self, locale: &str, name: &str) -> Option<&Template> {
    let position = self.schema.routes_for(locale).iter().position(|route| route.name == name)?;
    self.templates.get(locale)?.get(position)
  }
}
