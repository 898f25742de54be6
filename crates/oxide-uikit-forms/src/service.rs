//! Fluent configuration facade over [`FormBuilder`].

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::builder::FormBuilder;
use crate::config::FormsConfig;
use crate::context::RequestContext;
use crate::flags::{Flag, Label, Meta, RenderKind};
use crate::markup::{Attributes, Icon};
use crate::value::{options_from_json, FieldValue};

/// Chainable form markup service.
///
/// Configuration calls write flags into the underlying builder and select
/// the render to run. Nothing is rendered until [`FormService::to_html`]:
///
/// ```rust
/// use oxide_uikit_forms::FormService;
///
/// let mut forms = FormService::new();
/// let html = forms
///     .text("email", "Email")
///     .placeholder("you@example.com")
///     .value("ada@example.com")
///     .to_html();
/// assert!(html.contains(r#"value="ada@example.com""#));
/// assert!(html.contains(r#"class="uk-input""#));
///
/// // The selector is consumed: nothing is pending anymore.
/// assert_eq!(forms.to_html(), "");
/// ```
#[derive(Debug, Default)]
pub struct FormService {
    builder: FormBuilder,
    pending: Option<RenderKind>,
}

impl FormService {
    /// Creates a service with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service with the given configuration.
    pub fn with_config(config: FormsConfig) -> Self {
        Self {
            builder: FormBuilder::with_config(config),
            pending: None,
        }
    }

    /// Builder method to attach a request context.
    #[must_use]
    pub fn with_context(mut self, context: RequestContext) -> Self {
        self.builder.set_context(context);
        self
    }

    /// Replaces the request context, e.g. at the start of a new request.
    pub fn set_context(&mut self, context: RequestContext) -> &mut Self {
        self.builder.set_context(context);
        self
    }

    /// Returns the underlying builder.
    pub fn builder(&self) -> &FormBuilder {
        &self.builder
    }

    /// Returns the render that `to_html` would run.
    pub fn pending(&self) -> Option<RenderKind> {
        self.pending
    }

    /// Renders the pending construct and clears the selection.
    ///
    /// Returns an empty string when nothing is pending, including on a second
    /// call without new configuration.
    pub fn to_html(&mut self) -> String {
        match self.pending.take() {
            Some(kind) => self.builder.render(kind),
            None => String::new(),
        }
    }

    fn set(&mut self, flag: Flag) -> &mut Self {
        self.builder.set(flag);
        self
    }

    // Render selection

    /// Selects the render to run on `to_html`. The last selection wins.
    pub fn render(&mut self, kind: RenderKind) -> &mut Self {
        self.pending = Some(kind);
        self
    }

    /// Selects a render by name. Unknown names clear the selection, so the
    /// next `to_html` yields nothing.
    pub fn render_named(&mut self, name: &str) -> &mut Self {
        match name.parse::<RenderKind>() {
            Ok(kind) => self.render(kind),
            Err(err) => {
                warn!(%err, "ignoring render selection");
                self.pending = None;
                self
            }
        }
    }

    /// Sets the element type and selects the matching render.
    pub fn type_(&mut self, kind: RenderKind) -> &mut Self {
        self.set(Flag::Kind(kind)).render(kind)
    }

    // Field flags

    /// Sets the field name.
    pub fn name(&mut self, name: &str) -> &mut Self {
        self.set(Flag::Name(name.to_string()))
    }

    /// Sets an explicit element id.
    pub fn id(&mut self, id: &str) -> &mut Self {
        self.set(Flag::Id(id.to_string()))
    }

    /// Sets the label. An empty label renders no `<label>`.
    pub fn label(&mut self, label: impl Into<Label>) -> &mut Self {
        self.set(Flag::Label(label.into()))
    }

    /// Uses the field name as label text.
    pub fn label_from_name(&mut self) -> &mut Self {
        self.set(Flag::Label(Label::FromName))
    }

    /// Sets the configured value.
    pub fn value(&mut self, value: impl Into<FieldValue>) -> &mut Self {
        self.set(Flag::Value(value.into()))
    }

    /// Flags a checkbox or radio as checked.
    ///
    /// A radio is checked by value equality, so `true` stores the radio's own
    /// fixed value rather than a boolean.
    pub fn checked(&mut self, checked: bool) -> &mut Self {
        let field = self.builder.field();
        if checked && field.kind == Some(RenderKind::Radio) {
            if let Some(fixed) = field.meta.value.clone() {
                return self.value(fixed);
            }
        }
        self.value(checked)
    }

    /// Sets the placeholder text.
    pub fn placeholder(&mut self, placeholder: &str) -> &mut Self {
        self.set(Flag::Placeholder(placeholder.to_string()))
    }

    /// Sets the size modifier (`small`, `large`, `width-medium`, ...).
    pub fn size(&mut self, size: &str) -> &mut Self {
        self.set(Flag::Size(size.to_string()))
    }

    /// Sets the button color (`primary`, `secondary`, `danger`, ...).
    pub fn color(&mut self, color: &str) -> &mut Self {
        self.set(Flag::Color(color.to_string()))
    }

    /// Disables the control.
    pub fn disabled(&mut self, disabled: bool) -> &mut Self {
        self.set(Flag::Disabled(disabled))
    }

    /// Makes the control read-only.
    pub fn readonly(&mut self, readonly: bool) -> &mut Self {
        self.set(Flag::Readonly(readonly))
    }

    /// Uses the outline button style.
    pub fn outline(&mut self, outline: bool) -> &mut Self {
        self.set(Flag::Outline(outline))
    }

    /// Makes a button span the full width.
    pub fn full(&mut self, full: bool) -> &mut Self {
        self.set(Flag::Full(full))
    }

    /// Allows several selected options.
    pub fn multiple(&mut self, multiple: bool) -> &mut Self {
        self.set(Flag::Multiple(multiple))
    }

    /// Lays a checkbox or radio out inline.
    pub fn inline(&mut self, inline: bool) -> &mut Self {
        self.set(Flag::Inline(inline))
    }

    /// Sets the help text shown below the control.
    pub fn help(&mut self, text: &str) -> &mut Self {
        self.set(Flag::Help(text.to_string()))
    }

    /// Attaches an icon: `icon("user")` or `icon(Icon::new("user").flip())`.
    pub fn icon(&mut self, icon: impl Into<Icon>) -> &mut Self {
        self.set(Flag::Icon(icon.into()))
    }

    /// Sets the ordered select options.
    pub fn options<I, K, L>(&mut self, options: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, L)>,
        K: Into<String>,
        L: Into<String>,
    {
        let options = options
            .into_iter()
            .map(|(k, l)| (k.into(), l.into()))
            .collect();
        self.set(Flag::Options(options))
    }

    /// Sets select options from a JSON object or array.
    pub fn options_from_json(&mut self, options: &Value) -> &mut Self {
        self.set(Flag::Options(options_from_json(options)))
    }

    /// Replaces the extra attributes.
    pub fn attrs<I, K, V>(&mut self, attrs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.set(Flag::Attrs(attrs.into_iter().collect()))
    }

    /// Adds one extra attribute.
    pub fn attr(&mut self, key: &str, value: &str) -> &mut Self {
        let mut attrs = self.builder.field().attrs.clone();
        attrs.set(key, value);
        self.set(Flag::Attrs(attrs))
    }

    /// Sets the link target or form action to an absolute URL.
    pub fn url(&mut self, path: &str) -> &mut Self {
        let url = match self.builder.context().urls() {
            Some(urls) => urls.to(path),
            None => path.to_string(),
        };
        self.set(Flag::Url(url))
    }

    /// Sets the link target or form action from a named route.
    ///
    /// An unresolvable route is logged and leaves the URL unset.
    pub fn route(&mut self, name: &str, params: &[(&str, &str)]) -> &mut Self {
        let params: HashMap<String, String> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let Some(urls) = self.builder.context().urls() else {
            warn!(route = name, "no url generator configured");
            return self;
        };

        let resolved = urls.route(name, &params);
        match resolved {
            Ok(url) => self.set(Flag::Url(url)),
            Err(err) => {
                warn!(route = name, %err, "failed to resolve route");
                self
            }
        }
    }

    /// Adds classes to the outer wrapper of the next field.
    pub fn form_group(&mut self, classes: &str) -> &mut Self {
        self.set(Flag::FormGroup(classes.to_string()))
    }

    /// Adds a visibility toggle to a password field.
    pub fn password_toggle(&mut self, enabled: bool) -> &mut Self {
        self.set(Flag::PasswordToggle(enabled))
    }

    /// Sets the legend of a fieldset.
    pub fn legend(&mut self, legend: &str) -> &mut Self {
        let meta = Meta {
            legend: Some(legend.to_string()),
            ..self.builder.field().meta.clone()
        };
        self.set(Flag::Meta(meta))
    }

    // Form flags

    /// Sets the translation namespace for labels, help texts and captions.
    pub fn locale(&mut self, namespace: &str) -> &mut Self {
        self.set(Flag::Locale(namespace.to_string()))
    }

    /// Sets the HTTP method of the form.
    pub fn method(&mut self, method: &str) -> &mut Self {
        self.set(Flag::Method(method.to_string()))
    }

    /// Enables multipart encoding for file uploads.
    pub fn multipart(&mut self, multipart: bool) -> &mut Self {
        self.set(Flag::Multipart(multipart))
    }

    /// Prefills fields from any serializable record.
    ///
    /// Anything that does not serialize into a JSON object yields no data.
    pub fn fill<T: Serialize>(&mut self, data: &T) -> &mut Self {
        let data = match serde_json::to_value(data) {
            Ok(Value::Object(map)) => map
                .iter()
                .filter_map(|(k, v)| FieldValue::from_json(v).map(|v| (k.clone(), v)))
                .collect(),
            Ok(other) => {
                debug!(payload = %other, "fill data is not an object");
                HashMap::new()
            }
            Err(err) => {
                warn!(%err, "failed to serialize fill data");
                HashMap::new()
            }
        };
        self.set(Flag::Fill(data))
    }

    /// Sets a prefix applied to every derived id.
    pub fn id_prefix(&mut self, prefix: &str) -> &mut Self {
        self.set(Flag::IdPrefix(prefix.to_string()))
    }

    // Constructors

    /// Opens a form.
    pub fn open(&mut self) -> &mut Self {
        self.render(RenderKind::Open)
    }

    /// Closes the form and forgets all form flags.
    pub fn close(&mut self) -> &mut Self {
        self.render(RenderKind::Close)
    }

    /// Opens a fieldset with an optional legend.
    pub fn fieldset_open(&mut self, legend: Option<&str>) -> &mut Self {
        if let Some(legend) = legend {
            self.legend(legend);
        }
        self.render(RenderKind::FieldsetOpen)
    }

    /// Closes a fieldset.
    pub fn fieldset_close(&mut self) -> &mut Self {
        self.render(RenderKind::FieldsetClose)
    }

    fn field(&mut self, kind: RenderKind, name: &str, label: &str) -> &mut Self {
        self.type_(kind).name(name).label(label)
    }

    /// A text input.
    pub fn text(&mut self, name: &str, label: &str) -> &mut Self {
        self.field(RenderKind::Text, name, label)
    }

    /// An email input.
    pub fn email(&mut self, name: &str, label: &str) -> &mut Self {
        self.field(RenderKind::Email, name, label)
    }

    /// A number input.
    pub fn number(&mut self, name: &str, label: &str) -> &mut Self {
        self.field(RenderKind::Number, name, label)
    }

    /// A password input.
    pub fn password(&mut self, name: &str, label: &str) -> &mut Self {
        self.field(RenderKind::Password, name, label)
    }

    /// A range input with the configured min, max and step.
    pub fn range(&mut self, name: &str, label: &str) -> &mut Self {
        let config = self.builder.config();
        let bounds = Attributes::new()
            .with("min", &config.range_min)
            .with("max", &config.range_max)
            .with("step", &config.range_step);
        self.field(RenderKind::Range, name, label)
            .set(Flag::Attrs(bounds))
    }

    /// A textarea.
    pub fn textarea(&mut self, name: &str, label: &str) -> &mut Self {
        self.field(RenderKind::Textarea, name, label)
    }

    /// A file input.
    pub fn file(&mut self, name: &str, label: &str) -> &mut Self {
        self.field(RenderKind::File, name, label)
    }

    /// A bare hidden input.
    pub fn hidden(&mut self, name: &str, value: Option<&str>) -> &mut Self {
        self.type_(RenderKind::Hidden).name(name);
        if let Some(value) = value {
            self.value(value);
        }
        self
    }

    /// A select over ordered `(key, label)` options.
    pub fn select<I, K, L>(&mut self, name: &str, label: &str, options: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, L)>,
        K: Into<String>,
        L: Into<String>,
    {
        self.field(RenderKind::Select, name, label).options(options)
    }

    /// A checkbox submitting `value` (the name when `None`).
    pub fn checkbox(
        &mut self,
        name: &str,
        label: &str,
        value: Option<&str>,
        checked: bool,
    ) -> &mut Self {
        self.checkable(RenderKind::Checkbox, name, label, value, checked)
    }

    /// A radio submitting `value` (the name when `None`).
    pub fn radio(
        &mut self,
        name: &str,
        label: &str,
        value: Option<&str>,
        checked: bool,
    ) -> &mut Self {
        self.checkable(RenderKind::Radio, name, label, value, checked)
    }

    fn checkable(
        &mut self,
        kind: RenderKind,
        name: &str,
        label: &str,
        value: Option<&str>,
        checked: bool,
    ) -> &mut Self {
        let fixed = value.unwrap_or(name).to_string();
        self.set(Flag::Meta(Meta {
            value: Some(fixed.clone()),
            legend: None,
        }))
        .field(kind, name, label);
        if checked {
            self.value(fixed);
        }
        self
    }

    /// A plain button.
    pub fn button(&mut self, text: &str) -> &mut Self {
        self.type_(RenderKind::Button).value(text)
    }

    /// A submit button.
    pub fn submit(&mut self, text: &str) -> &mut Self {
        self.type_(RenderKind::Submit).value(text)
    }

    /// A reset button.
    pub fn reset(&mut self, text: &str) -> &mut Self {
        self.type_(RenderKind::Reset).value(text)
    }

    /// A button-styled link.
    pub fn anchor(&mut self, text: &str, url: Option<&str>) -> &mut Self {
        if let Some(url) = url {
            self.url(url);
        }
        self.type_(RenderKind::Anchor).value(text)
    }
}
