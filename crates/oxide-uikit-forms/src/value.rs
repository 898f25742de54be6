//! Field values and option lists.

use std::borrow::Cow;

use serde_json::Value;
use tracing::warn;

/// Label shown for option payloads that are not collections.
pub const NOT_ITERABLE: &str = "Must be iterable";

/// A value bound to a field, either configured, prefilled or resubmitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A single scalar value.
    Text(String),
    /// A boolean, as produced by `checked()`.
    Bool(bool),
    /// Several values, as posted by a multiple select.
    List(Vec<String>),
}

impl FieldValue {
    /// Returns whether the value counts as set for checkboxes.
    ///
    /// Empty strings, `"0"`, `false` and empty lists are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty() && s != "0",
            Self::Bool(b) => *b,
            Self::List(items) => !items.is_empty(),
        }
    }

    /// Returns the value as attribute text.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => Cow::Borrowed(s),
            Self::Bool(true) => Cow::Borrowed("1"),
            Self::Bool(false) => Cow::Borrowed(""),
            Self::List(items) => Cow::Owned(items.join(",")),
        }
    }

    /// Coerces the value into a list of selected keys.
    pub fn to_list(&self) -> Vec<String> {
        match self {
            Self::List(items) => items.clone(),
            other => vec![other.as_text().into_owned()],
        }
    }

    /// Converts a JSON value. `null` has no field value.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Number(n) => Some(Self::Text(n.to_string())),
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Array(items) => Some(Self::List(
                items
                    .iter()
                    .filter_map(Self::from_json)
                    .map(|v| v.as_text().into_owned())
                    .collect(),
            )),
            Value::Object(_) => Some(Self::Text(value.to_string())),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(str::to_string).collect())
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for FieldValue {
                fn from(n: $t) -> Self {
                    Self::Text(n.to_string())
                }
            }
        )*
    };
}

impl_from_number!(i32, i64, u32, u64, usize, f64);

/// Builds an ordered option list out of a JSON payload.
///
/// Objects keep their keys, arrays are keyed by position and anything else
/// collapses into a single placeholder entry.
pub fn options_from_json(value: &Value) -> Vec<(String, String)> {
    let label = |v: &Value| match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    match value {
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), label(v))).collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), label(v)))
            .collect(),
        other => {
            warn!(payload = %other, "select options are not iterable");
            vec![("0".to_string(), NOT_ITERABLE.to_string())]
        }
    }
}
