//! Low level markup helpers: attribute lists and escaping.

mod icon;

pub use icon::{Icon, IconSlot};

/// An ordered list of HTML attributes.
///
/// Keys keep the position of their first insertion; setting an existing key
/// overwrites its value in place. A `None` value renders as a bare token
/// (`required`, `hidden`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, Option<String>)>,
}

impl Attributes {
    /// Creates new empty attributes.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.insert(key.into(), Some(value.into()));
    }

    /// Sets a bare attribute without a value.
    pub fn flag(&mut self, key: impl Into<String>) {
        self.insert(key.into(), None);
    }

    fn insert(&mut self, key: String, value: Option<String>) {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Gets an attribute value. Bare attributes read as an empty string.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }

    /// Removes an attribute, returning whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| k != key);
        before != self.entries.len()
    }

    /// Overlays `other` on top of these attributes.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in &other.entries {
            self.insert(key.clone(), value.clone());
        }
    }

    /// Renders attributes as an HTML attribute string with escaped values.
    pub fn to_html(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| match v {
                Some(v) => format!(r#"{k}="{}""#, html_escape(v)),
                None => k.clone(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (key, value) in iter {
            attrs.set(key, value);
        }
        attrs
    }
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
