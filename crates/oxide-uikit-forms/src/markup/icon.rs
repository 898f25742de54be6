//! UIkit icons attached to inputs and buttons.

use super::Attributes;

/// Where an icon is placed, which decides its positioning classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSlot {
    /// Inside a form control, via `uk-form-icon`.
    Input,
    /// Next to a button caption.
    Button,
}

/// An icon descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    /// UIkit icon name (`user`, `mail`, ...).
    pub name: String,
    /// Places the icon after the content instead of before it.
    pub flip: bool,
    /// Renders input icons as links so they can receive clicks.
    pub clickable: bool,
    /// Extra attributes for the icon element. `class` is merged.
    pub attrs: Attributes,
}

impl Icon {
    /// Creates a new icon.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flip: false,
            clickable: false,
            attrs: Attributes::new(),
        }
    }

    /// Places the icon on the trailing side.
    #[must_use]
    pub fn flip(mut self) -> Self {
        self.flip = true;
        self
    }

    /// Makes an input icon clickable.
    #[must_use]
    pub fn clickable(mut self) -> Self {
        self.clickable = true;
        self
    }

    /// Sets an extra attribute on the icon element.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Renders the icon element for the given slot.
    pub fn render(&self, slot: IconSlot) -> String {
        let mut class = match (slot, self.flip) {
            (IconSlot::Input, false) => "uk-form-icon".to_string(),
            (IconSlot::Input, true) => "uk-form-icon uk-form-icon-flip".to_string(),
            (IconSlot::Button, false) => "uk-margin-small-right".to_string(),
            (IconSlot::Button, true) => "uk-margin-small-left".to_string(),
        };
        if let Some(extra) = self.attrs.get("class") {
            if !extra.is_empty() {
                class.push(' ');
                class.push_str(extra);
            }
        }

        let mut attrs = Attributes::new()
            .with("class", class)
            .with("uk-icon", &self.name);
        let mut extra = self.attrs.clone();
        extra.remove("class");
        attrs.merge(&extra);

        let tag = if self.clickable && slot == IconSlot::Input {
            "a"
        } else {
            "span"
        };
        format!("<{tag} {}></{tag}>", attrs.to_html())
    }
}

impl From<&str> for Icon {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Icon {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
