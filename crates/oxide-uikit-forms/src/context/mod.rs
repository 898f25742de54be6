//! Request-scoped collaborators consulted while rendering.
//!
//! The renderer never reaches for globals. Everything it needs from the
//! surrounding web framework comes through these read-only traits, bundled
//! in a [`RequestContext`]. A missing collaborator behaves as if the request
//! carried nothing: no old input, no errors, untranslated text, plain URLs
//! and no token markup.

mod memory;
mod routes;

pub use memory::{OldInputMap, TokenFields, Translations};
pub use routes::RouteTable;

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Result;
use crate::value::FieldValue;

/// Emits the hidden markup a state-changing form needs.
pub trait FormTokens: Send + Sync {
    /// Returns the CSRF protection markup.
    fn csrf_field(&self) -> String;

    /// Returns the markup that overrides the HTTP method (PUT, DELETE, ...).
    fn method_field(&self, method: &str) -> String;
}

/// Values resubmitted by the previous request.
pub trait OldInput: Send + Sync {
    /// Returns whether the request carried any resubmitted values at all.
    fn has_any(&self) -> bool;

    /// Returns the resubmitted value for a field.
    fn get(&self, name: &str) -> Option<FieldValue>;
}

/// Validation errors flashed to the session.
pub trait ErrorLookup: Send + Sync {
    /// Returns the first error message for a field.
    fn first(&self, field: &str) -> Option<String>;
}

/// Localization lookup.
pub trait Translator: Send + Sync {
    /// Resolves a dotted key (`forms.email`) into display text.
    fn translate(&self, key: &str) -> String;
}

/// URL generation.
pub trait UrlGenerator: Send + Sync {
    /// Turns a relative path into an absolute URL.
    fn to(&self, path: &str) -> String;

    /// Builds the URL of a named route.
    fn route(&self, name: &str, params: &HashMap<String, String>) -> Result<String>;
}

/// The collaborators available to one request.
#[derive(Clone, Default)]
pub struct RequestContext {
    tokens: Option<Arc<dyn FormTokens>>,
    old_input: Option<Arc<dyn OldInput>>,
    errors: Option<Arc<dyn ErrorLookup>>,
    translator: Option<Arc<dyn Translator>>,
    urls: Option<Arc<dyn UrlGenerator>>,
}

impl std::fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContext")
            .field("tokens", &self.tokens.is_some())
            .field("old_input", &self.old_input.is_some())
            .field("errors", &self.errors.is_some())
            .field("translator", &self.translator.is_some())
            .field("urls", &self.urls.is_some())
            .finish()
    }
}

impl RequestContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the token markup generator.
    #[must_use]
    pub fn with_tokens(mut self, tokens: impl FormTokens + 'static) -> Self {
        self.tokens = Some(Arc::new(tokens));
        self
    }

    /// Sets the old input source.
    #[must_use]
    pub fn with_old_input(mut self, old_input: impl OldInput + 'static) -> Self {
        self.old_input = Some(Arc::new(old_input));
        self
    }

    /// Sets the validation error collection.
    #[must_use]
    pub fn with_errors(mut self, errors: impl ErrorLookup + 'static) -> Self {
        self.errors = Some(Arc::new(errors));
        self
    }

    /// Sets the translator.
    #[must_use]
    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Some(Arc::new(translator));
        self
    }

    /// Sets the URL generator.
    #[must_use]
    pub fn with_urls(mut self, urls: impl UrlGenerator + 'static) -> Self {
        self.urls = Some(Arc::new(urls));
        self
    }

    /// Returns the CSRF token source, if any.
    pub fn tokens(&self) -> Option<&dyn FormTokens> {
        self.tokens.as_deref()
    }

    /// Returns the resubmitted input, if any.
    pub fn old_input(&self) -> Option<&dyn OldInput> {
        self.old_input.as_deref()
    }

    /// Returns the validation errors, if any.
    pub fn errors(&self) -> Option<&dyn ErrorLookup> {
        self.errors.as_deref()
    }

    /// Returns the translator, if any.
    pub fn translator(&self) -> Option<&dyn Translator> {
        self.translator.as_deref()
    }

    /// Returns the URL generator, if any.
    pub fn urls(&self) -> Option<&dyn UrlGenerator> {
        self.urls.as_deref()
    }
}
