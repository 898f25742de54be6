//! Error types for forms.

use std::collections::HashMap;
use thiserror::Error;

use crate::context::ErrorLookup;

/// Form-specific errors.
///
/// Rendering itself never fails; these cover the edges around it such as
/// route lookups and configuration loading.
#[derive(Debug, Error)]
pub enum FormError {
    /// A render kind name did not match any known render.
    #[error("unknown render kind: {0}")]
    UnknownRender(String),

    /// Route name not registered.
    #[error("route not found: {0}")]
    RouteNotFound(String),

    /// A route pattern parameter was not supplied.
    #[error("missing parameter {param} for route {route}")]
    MissingRouteParam { route: String, param: String },

    /// Configuration or translation payload could not be decoded.
    #[error("failed to decode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Collection of validation errors by field.
///
/// This is the session-scoped error bag a request carries after a failed
/// submission; renders only ever look at the first message per field.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    /// Errors keyed by field name.
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    /// Adds an error for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Builder method to add an error.
    #[must_use]
    pub fn with(mut self, field: &str, message: impl Into<String>) -> Self {
        self.add(field, message);
        self
    }

    /// Returns the first error recorded for a field.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }
}

impl ErrorLookup for ValidationErrors {
    fn first(&self, field: &str) -> Option<String> {
        ValidationErrors::first(self, field).map(str::to_string)
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_wins() {
        let errors = ValidationErrors::new()
            .with("email", "The email field is required.")
            .with("email", "The email must be valid.");

        assert_eq!(errors.errors["email"].len(), 2);
        assert_eq!(errors.first("email"), Some("The email field is required."));
        assert_eq!(errors.first("name"), None);
    }

    #[test]
    fn test_error_lookup_trait() {
        let errors = ValidationErrors::new().with("name", "Too short.");
        let lookup: &dyn ErrorLookup = &errors;
        assert_eq!(lookup.first("name"), Some("Too short.".to_string()));
        assert!(lookup.first("email").is_none());
    }
}
