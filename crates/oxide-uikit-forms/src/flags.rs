//! Flag bags consumed by the renderer.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::FormError;
use crate::markup::{Attributes, Icon};
use crate::value::FieldValue;

/// The render operation selected for the next output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderKind {
    Open,
    Close,
    FieldsetOpen,
    FieldsetClose,
    Text,
    Email,
    Number,
    Password,
    Range,
    Hidden,
    File,
    Textarea,
    Select,
    Checkbox,
    Radio,
    Button,
    Submit,
    Reset,
    Anchor,
}

impl RenderKind {
    /// All render kinds, in declaration order.
    pub const ALL: [Self; 19] = [
        Self::Open,
        Self::Close,
        Self::FieldsetOpen,
        Self::FieldsetClose,
        Self::Text,
        Self::Email,
        Self::Number,
        Self::Password,
        Self::Range,
        Self::Hidden,
        Self::File,
        Self::Textarea,
        Self::Select,
        Self::Checkbox,
        Self::Radio,
        Self::Button,
        Self::Submit,
        Self::Reset,
        Self::Anchor,
    ];

    /// Returns the render name, which doubles as the input `type`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::FieldsetOpen => "fieldset_open",
            Self::FieldsetClose => "fieldset_close",
            Self::Text => "text",
            Self::Email => "email",
            Self::Number => "number",
            Self::Password => "password",
            Self::Range => "range",
            Self::Hidden => "hidden",
            Self::File => "file",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
            Self::Anchor => "anchor",
        }
    }

    /// Returns whether this renders a button or a button-styled anchor.
    pub const fn is_button(self) -> bool {
        matches!(
            self,
            Self::Button | Self::Submit | Self::Reset | Self::Anchor
        )
    }

    /// Returns whether this is a single-line `<input>` with decoration.
    pub const fn is_text_like(self) -> bool {
        matches!(
            self,
            Self::Text | Self::Email | Self::Number | Self::Password | Self::Range
        )
    }
}

impl fmt::Display for RenderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        let wanted = match wanted.as_str() {
            "fieldsetopen" => "fieldset_open",
            "fieldsetclose" => "fieldset_close",
            other => other,
        };
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| FormError::UnknownRender(s.to_string()))
    }
}

/// A field label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// Literal (or translatable) text. Empty text means no label.
    Text(String),
    /// Reuse the field name as the label.
    FromName,
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for Label {
    fn from(use_name: bool) -> Self {
        if use_name {
            Self::FromName
        } else {
            Self::Text(String::new())
        }
    }
}

/// Auxiliary per-type data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Meta {
    /// The fixed value a checkbox or radio submits.
    pub value: Option<String>,
    /// Legend of a fieldset.
    pub legend: Option<String>,
}

/// One-shot configuration for a single rendered element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldFlags {
    pub name: Option<String>,
    pub id: Option<String>,
    pub label: Option<Label>,
    pub kind: Option<RenderKind>,
    pub value: Option<FieldValue>,
    pub placeholder: Option<String>,
    /// Size modifier (`small`, `large`, ...).
    pub size: Option<String>,
    /// Button color; the configured default applies when unset.
    pub color: Option<String>,
    pub disabled: bool,
    pub readonly: bool,
    pub outline: bool,
    pub full: bool,
    pub multiple: bool,
    pub inline: bool,
    pub help: Option<String>,
    pub icon: Option<Icon>,
    /// Ordered select options (key, label).
    pub options: Vec<(String, String)>,
    /// Raw extra attributes.
    pub attrs: Attributes,
    pub meta: Meta,
    /// Link target or form action.
    pub url: Option<String>,
    /// Extra classes for the outer wrapper.
    pub form_group: Option<String>,
    pub password_toggle: bool,
}

/// Configuration persisting across every field of one form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFlags {
    /// Translation namespace for labels, help and captions.
    pub locale: Option<String>,
    /// Lowercase HTTP method.
    pub method: String,
    pub multipart: bool,
    /// Prefill data keyed by field name.
    pub data: HashMap<String, FieldValue>,
    /// Prefix applied to every derived id.
    pub id_prefix: String,
}

impl Default for FormFlags {
    fn default() -> Self {
        Self {
            locale: None,
            method: "post".to_string(),
            multipart: false,
            data: HashMap::new(),
            id_prefix: String::new(),
        }
    }
}

/// A single flag assignment, addressing one typed slot of a flag bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flag {
    Name(String),
    Id(String),
    Label(Label),
    Kind(RenderKind),
    Value(FieldValue),
    Placeholder(String),
    Size(String),
    Color(String),
    Disabled(bool),
    Readonly(bool),
    Outline(bool),
    Full(bool),
    Multiple(bool),
    Inline(bool),
    Help(String),
    Icon(Icon),
    Options(Vec<(String, String)>),
    Attrs(Attributes),
    Meta(Meta),
    Url(String),
    FormGroup(String),
    PasswordToggle(bool),
    Locale(String),
    Method(String),
    Multipart(bool),
    Fill(HashMap<String, FieldValue>),
    IdPrefix(String),
}

impl Flag {
    /// Returns the symbolic name of the slot this flag writes.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Id(_) => "id",
            Self::Label(_) => "label",
            Self::Kind(_) => "type",
            Self::Value(_) => "value",
            Self::Placeholder(_) => "placeholder",
            Self::Size(_) => "size",
            Self::Color(_) => "color",
            Self::Disabled(_) => "disabled",
            Self::Readonly(_) => "readonly",
            Self::Outline(_) => "outline",
            Self::Full(_) => "full",
            Self::Multiple(_) => "multiple",
            Self::Inline(_) => "inline",
            Self::Help(_) => "help",
            Self::Icon(_) => "icon",
            Self::Options(_) => "options",
            Self::Attrs(_) => "attrs",
            Self::Meta(_) => "meta",
            Self::Url(_) => "url",
            Self::FormGroup(_) => "form_group",
            Self::PasswordToggle(_) => "password_toggle",
            Self::Locale(_) => "locale",
            Self::Method(_) => "method",
            Self::Multipart(_) => "multipart",
            Self::Fill(_) => "fill",
            Self::IdPrefix(_) => "id_prefix",
        }
    }

    /// Returns whether the flag belongs to the form rather than the field.
    pub const fn is_form_level(&self) -> bool {
        matches!(
            self,
            Self::Locale(_) | Self::Method(_) | Self::Multipart(_) | Self::Fill(_) | Self::IdPrefix(_)
        )
    }
}

impl FieldFlags {
    /// Writes a field-level flag. Form-level flags are ignored here.
    pub fn apply(&mut self, flag: Flag) {
        match flag {
            Flag::Name(v) => self.name = Some(v),
            Flag::Id(v) => self.id = Some(v),
            Flag::Label(v) => self.label = Some(v),
            Flag::Kind(v) => self.kind = Some(v),
            Flag::Value(v) => self.value = Some(v),
            Flag::Placeholder(v) => self.placeholder = Some(v),
            Flag::Size(v) => self.size = Some(v),
            Flag::Color(v) => self.color = Some(v),
            Flag::Disabled(v) => self.disabled = v,
            Flag::Readonly(v) => self.readonly = v,
            Flag::Outline(v) => self.outline = v,
            Flag::Full(v) => self.full = v,
            Flag::Multiple(v) => self.multiple = v,
            Flag::Inline(v) => self.inline = v,
            Flag::Help(v) => self.help = Some(v),
            Flag::Icon(v) => self.icon = Some(v),
            Flag::Options(v) => self.options = v,
            Flag::Attrs(v) => self.attrs = v,
            Flag::Meta(v) => self.meta = v,
            Flag::Url(v) => self.url = Some(v),
            Flag::FormGroup(v) => self.form_group = Some(v),
            Flag::PasswordToggle(v) => self.password_toggle = v,
            Flag::Locale(_)
            | Flag::Method(_)
            | Flag::Multipart(_)
            | Flag::Fill(_)
            | Flag::IdPrefix(_) => {}
        }
    }
}

impl FormFlags {
    /// Writes a form-level flag. Field-level flags are ignored here.
    pub fn apply(&mut self, flag: Flag) {
        match flag {
            Flag::Locale(v) => self.locale = Some(v),
            Flag::Method(v) => self.method = v.to_ascii_lowercase(),
            Flag::Multipart(v) => self.multipart = v,
            Flag::Fill(v) => self.data = v,
            Flag::IdPrefix(v) => self.id_prefix = v,
            _ => {}
        }
    }
}
