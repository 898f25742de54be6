//! In-memory collaborator implementations.

use std::collections::HashMap;

use serde_json::Value;

use super::{FormTokens, OldInput, Translator};
use crate::error::Result;
use crate::markup::Attributes;
use crate::value::FieldValue;

/// Hidden `_token` and `_method` inputs.
#[derive(Debug, Clone)]
pub struct TokenFields {
    token: String,
}

impl TokenFields {
    /// Name of the hidden CSRF token input.
    pub const TOKEN_FIELD: &'static str = "_token";
    /// Name of the hidden method override input.
    pub const METHOD_FIELD: &'static str = "_method";

    /// Creates token fields for the session's CSRF token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl FormTokens for TokenFields {
    fn csrf_field(&self) -> String {
        let attrs = Attributes::new()
            .with("type", "hidden")
            .with("name", Self::TOKEN_FIELD)
            .with("value", &self.token);
        format!("<input {}>", attrs.to_html())
    }

    fn method_field(&self, method: &str) -> String {
        let attrs = Attributes::new()
            .with("type", "hidden")
            .with("name", Self::METHOD_FIELD)
            .with("value", method.to_ascii_uppercase());
        format!("<input {}>", attrs.to_html())
    }
}

/// Old input held in a map.
#[derive(Debug, Clone, Default)]
pub struct OldInputMap {
    values: HashMap<String, FieldValue>,
}

impl OldInputMap {
    /// Creates an empty map; `has_any` is false until a value is added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a resubmitted value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder method to add a resubmitted value.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }
}

impl From<HashMap<String, String>> for OldInputMap {
    fn from(values: HashMap<String, String>) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k, FieldValue::Text(v)))
                .collect(),
        }
    }
}

impl OldInput for OldInputMap {
    fn has_any(&self) -> bool {
        !self.values.is_empty()
    }

    fn get(&self, name: &str) -> Option<FieldValue> {
        self.values.get(name).cloned()
    }
}

/// Flat translation table keyed by dotted paths.
///
/// Unknown keys translate to themselves.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    lines: HashMap<String, String>,
}

impl Translations {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a translation line.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.lines.insert(key.into(), text.into());
        self
    }

    /// Loads nested JSON, flattening objects into dotted keys.
    ///
    /// `{"forms": {"email": "E-mail"}}` yields `forms.email`.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let mut lines = HashMap::new();
        flatten("", &value, &mut lines);
        Ok(Self { lines })
    }

    /// Returns the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, out);
            }
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        Value::Null => {}
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}

impl Translator for Translations {
    fn translate(&self, key: &str) -> String {
        self.lines
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
