//! Builder configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Defaults applied when a field does not configure them itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormsConfig {
    /// Layout class of the `<form>` element.
    pub form_class: String,
    /// Button color used when none is set (`uk-button-<color>`).
    pub default_color: String,
    /// Rows of a textarea.
    pub textarea_rows: u32,
    /// Icon shown by the password visibility toggle.
    pub password_toggle_icon: String,
    /// `href` of anchors rendered without a URL.
    pub anchor_href: String,
    /// Range input defaults.
    pub range_min: String,
    pub range_max: String,
    pub range_step: String,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            form_class: "uk-form-stacked".to_string(),
            default_color: "default".to_string(),
            textarea_rows: 3,
            password_toggle_icon: "eye".to_string(),
            anchor_href: "javascript:void(0)".to_string(),
            range_min: "0".to_string(),
            range_max: "10".to_string(),
            range_step: "0.1".to_string(),
        }
    }
}

impl FormsConfig {
    /// Parses a JSON document; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FormsConfig::default();
        assert_eq!(config.form_class, "uk-form-stacked");
        assert_eq!(config.textarea_rows, 3);
        assert_eq!(config.default_color, "default");
    }

    #[test]
    fn test_partial_json() {
        let config = FormsConfig::from_json(r#"{"textarea_rows": 6, "default_color": "primary"}"#)
            .unwrap();
        assert_eq!(config.textarea_rows, 6);
        assert_eq!(config.default_color, "primary");
        assert_eq!(config.form_class, "uk-form-stacked");
    }

    #[test]
    fn test_invalid_json() {
        assert!(FormsConfig::from_json("[1, 2").is_err());
    }
}
