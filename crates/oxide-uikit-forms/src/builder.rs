//! The renderer: turns flag bags into UIkit markup.

use ironhtml::html;
use ironhtml_elements::Div;
use tracing::{debug, trace};

use crate::config::FormsConfig;
use crate::context::RequestContext;
use crate::flags::{FieldFlags, Flag, FormFlags, Label, RenderKind};
use crate::markup::{html_escape, Attributes, IconSlot};
use crate::value::FieldValue;

/// Renders form constructs from the flags configured on it.
///
/// Every render consumes the field flags and leaves a default bag behind,
/// so nothing configured for one field can leak into the next. Form flags
/// live until the form is closed.
#[derive(Debug, Default)]
pub struct FormBuilder {
    field: FieldFlags,
    form: FormFlags,
    context: RequestContext,
    config: FormsConfig,
}

impl FormBuilder {
    /// Creates a builder with default configuration and an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with the given configuration.
    pub fn with_config(config: FormsConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Replaces the request context.
    pub fn set_context(&mut self, context: RequestContext) {
        self.context = context;
    }

    /// Returns the pending field flags.
    pub fn field(&self) -> &FieldFlags {
        &self.field
    }

    /// Returns the current form flags.
    pub fn form(&self) -> &FormFlags {
        &self.form
    }

    /// Returns the request context.
    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    /// Returns the configuration.
    pub fn config(&self) -> &FormsConfig {
        &self.config
    }

    /// Writes one flag into the field or form bag.
    pub fn set(&mut self, flag: Flag) {
        trace!(flag = flag.key(), form_level = flag.is_form_level(), "setting flag");
        if flag.is_form_level() {
            self.form.apply(flag);
        } else {
            self.field.apply(flag);
        }
    }

    /// Renders one construct, consuming the pending field flags.
    pub fn render(&mut self, kind: RenderKind) -> String {
        let field = std::mem::take(&mut self.field);
        debug!(
            render = %kind,
            name = field.name.as_deref().unwrap_or_default(),
            "rendering form element"
        );

        match kind {
            RenderKind::Open => self.open(&field),
            RenderKind::Close => self.close(),
            RenderKind::FieldsetOpen => self.fieldset_open(&field),
            RenderKind::FieldsetClose => "</fieldset>".to_string(),
            RenderKind::Text
            | RenderKind::Email
            | RenderKind::Number
            | RenderKind::Password
            | RenderKind::Range => self.input(kind, &field),
            RenderKind::Hidden => self.hidden(&field),
            RenderKind::File => self.file(&field),
            RenderKind::Textarea => self.textarea(&field),
            RenderKind::Select => self.select(&field),
            RenderKind::Checkbox | RenderKind::Radio => self.checkbox_or_radio(kind, &field),
            RenderKind::Button | RenderKind::Submit | RenderKind::Reset | RenderKind::Anchor => {
                self.button_or_anchor(kind, &field)
            }
        }
    }

    fn open(&self, field: &FieldFlags) -> String {
        let method = self.form.method.as_str();
        let mut props = Attributes::new();
        if let Some(url) = &field.url {
            props.set("action", url);
        }
        props.set("class", &self.config.form_class);
        props.set("method", if method == "get" { "get" } else { "post" });
        if self.form.multipart {
            props.set("enctype", "multipart/form-data");
        }

        let mut html = format!(
            "<form {}>",
            self.build_attrs(RenderKind::Open, field, props)
        );

        if method != "get" {
            if let Some(tokens) = self.context.tokens() {
                html.push_str(&tokens.csrf_field());
                if method != "post" {
                    html.push_str(&tokens.method_field(method));
                }
            }
        }

        debug!(method, multipart = self.form.multipart, "opened form");
        html
    }

    fn close(&mut self) -> String {
        self.form = FormFlags::default();
        debug!("closed form");
        "</form>".to_string()
    }

    fn fieldset_open(&self, field: &FieldFlags) -> String {
        let props = Attributes::new().with("class", "uk-fieldset");
        let mut html = format!(
            "<fieldset {}>",
            self.build_attrs(RenderKind::FieldsetOpen, field, props)
        );
        if let Some(legend_text) = field.meta.legend.as_deref() {
            if !legend_text.is_empty() {
                let text = self.translate(Some(legend_text), field);
                html.push_str(&html! { legend.class("uk-legend") { #text } }.render());
            }
        }
        html
    }

    fn input(&self, kind: RenderKind, field: &FieldFlags) -> String {
        let mut props = Attributes::new();
        if let Some(value) = self.resolve_value(field) {
            props.set("value", value.as_text());
        }
        props.set("type", kind.as_str());
        let control = format!("<input {}>", self.build_attrs(kind, field, props));
        self.decorate(kind, field, &control)
    }

    fn hidden(&self, field: &FieldFlags) -> String {
        let mut props = Attributes::new();
        if let Some(value) = self.resolve_value(field) {
            props.set("value", value.as_text());
        }
        props.set("type", "hidden");
        format!(
            "<input {}>",
            self.build_attrs(RenderKind::Hidden, field, props)
        )
    }

    fn file(&self, field: &FieldFlags) -> String {
        let props = Attributes::new().with("type", "file");
        let control = format!("<input {}>", self.build_attrs(RenderKind::File, field, props));
        self.decorate(RenderKind::File, field, &control)
    }

    fn textarea(&self, field: &FieldFlags) -> String {
        let props = Attributes::new().with("rows", self.config.textarea_rows.to_string());
        let content = self
            .resolve_value(field)
            .map(|v| html_escape(&v.as_text()))
            .unwrap_or_default();
        let control = format!(
            "<textarea {}>{content}</textarea>",
            self.build_attrs(RenderKind::Textarea, field, props)
        );
        self.decorate(RenderKind::Textarea, field, &control)
    }

    fn select(&self, field: &FieldFlags) -> String {
        let attrs = self.build_attrs(RenderKind::Select, field, Attributes::new());
        let value = self.resolve_value(field);

        let chosen: Vec<String> = match value {
            Some(value) if field.multiple => value.to_list(),
            Some(value) => vec![value.as_text().into_owned()],
            None => Vec::new(),
        };

        let options: String = field
            .options
            .iter()
            .map(|(key, label)| {
                let selected = if chosen.contains(key) { " selected" } else { "" };
                format!(
                    r#"<option value="{}"{selected}>{}</option>"#,
                    html_escape(key),
                    html_escape(label)
                )
            })
            .collect();

        let control = format!("<select {attrs}>{options}</select>");
        self.decorate(RenderKind::Select, field, &control)
    }

    fn checkbox_or_radio(&self, kind: RenderKind, field: &FieldFlags) -> String {
        let mut props = Attributes::new().with("type", kind.as_str());
        if let Some(value) = &field.meta.value {
            props.set("value", value);
        }
        let input = format!("<input {}>", self.build_attrs(kind, field, props));

        let explicit = match &field.label {
            Some(Label::Text(text)) if !text.is_empty() => Some(text.as_str()),
            _ => None,
        };
        let caption = format!(" {}", self.translate(explicit, field));
        let target = self.field_id(kind, field).unwrap_or_default();
        let label_el = html! { label.for_(#target) }.raw(&input).text(&caption);

        let mut classes = vec!["uk-margin"];
        if field.inline {
            classes.push("uk-inline");
        }
        if let Some(group) = field.form_group.as_deref() {
            if !group.is_empty() {
                classes.push(group);
            }
        }
        let wrapper_class = classes.join(" ");

        html! { div.class(#wrapper_class) }
            .raw(label_el.render())
            .raw(&self.error_html(field))
            .render()
    }

    fn button_or_anchor(&self, kind: RenderKind, field: &FieldFlags) -> String {
        let caption_key = field.value.as_ref().map(|v| v.as_text().into_owned());
        let caption = html_escape(&self.translate(caption_key.as_deref(), field));
        let content = match &field.icon {
            Some(icon) if icon.flip => format!("{caption}{}", icon.render(IconSlot::Button)),
            Some(icon) => format!("{}{caption}", icon.render(IconSlot::Button)),
            None => caption,
        };

        let color = field
            .color
            .as_deref()
            .unwrap_or(self.config.default_color.as_str());
        let mut classes = vec!["uk-button".to_string()];
        if field.outline {
            classes.push("uk-button-outline".to_string());
        }
        classes.push(format!("uk-button-{color}"));
        if let Some(size) = &field.size {
            classes.push(format!("uk-button-{size}"));
        }
        if field.full {
            classes.push("uk-width-1-1".to_string());
        }

        let element = if kind == RenderKind::Anchor {
            if field.disabled {
                classes.push("uk-disabled".to_string());
            }
            let mut props = Attributes::new()
                .with("class", classes.join(" "))
                .with(
                    "href",
                    field.url.as_deref().unwrap_or(&self.config.anchor_href),
                )
                .with("role", "button");
            if field.disabled {
                props.set("aria-disabled", "true");
            }
            format!("<a {}>{content}</a>", self.build_attrs(kind, field, props))
        } else {
            let props = Attributes::new()
                .with("class", classes.join(" "))
                .with("type", kind.as_str());
            format!(
                "<button {}>{content}</button>",
                self.build_attrs(kind, field, props)
            )
        };

        html! { div.class("uk-margin") }.raw(&element).render()
    }

    /// Wraps a control with its label, icon, toggle, help text and error.
    fn decorate(&self, kind: RenderKind, field: &FieldFlags, control: &str) -> String {
        let id = self.field_id(kind, field);
        let label = self.label_html(field, id.as_deref());
        let icon = field
            .icon
            .as_ref()
            .map(|icon| icon.render(IconSlot::Input));
        let toggle = (kind == RenderKind::Password && field.password_toggle)
            .then(|| self.password_toggle_html(id.as_deref()));
        let help = self.help_html(field, id.as_deref());
        let error = self.error_html(field);

        let mut classes = vec!["uk-margin"];
        if let Some(icon) = &field.icon {
            classes.push(if icon.flip {
                "uk-form-with-icon-flip"
            } else {
                "uk-form-with-icon"
            });
        }
        if let Some(group) = field.form_group.as_deref() {
            if !group.is_empty() {
                classes.push(group);
            }
        }
        let wrapper_class = classes.join(" ");

        let mut wrapper = html! { div.class(#wrapper_class) }.raw(&label);
        if icon.is_some() || toggle.is_some() {
            let icon = icon.unwrap_or_default();
            let toggle = toggle.unwrap_or_default();
            wrapper = wrapper.child::<Div, _>(|inline| {
                inline
                    .class("uk-inline uk-width-1-1")
                    .raw(&icon)
                    .raw(control)
                    .raw(&toggle)
            });
        } else {
            wrapper = wrapper.raw(control);
        }

        wrapper.raw(&help).raw(&error).render()
    }

    fn label_html(&self, field: &FieldFlags, id: Option<&str>) -> String {
        let text = match &field.label {
            Some(Label::FromName) => field.name.as_deref(),
            Some(Label::Text(text)) if !text.is_empty() => Some(text.as_str()),
            _ => None,
        };
        let Some(text) = text else {
            return String::new();
        };

        let text = self.translate(Some(text), field);
        let target = id.unwrap_or_default().to_string();
        html! { label.for_(#target).class("uk-form-label") { #text } }.render()
    }

    fn help_html(&self, field: &FieldFlags, id: Option<&str>) -> String {
        let Some(help) = field.help.as_deref() else {
            return String::new();
        };
        let mut attrs = Attributes::new();
        if let Some(id) = id {
            attrs.set("id", help_id(id));
        }
        attrs.set("class", "uk-text-muted");
        format!(
            "<small {}>{}</small>",
            attrs.to_html(),
            html_escape(&self.translate(Some(help), field))
        )
    }

    fn error_html(&self, field: &FieldFlags) -> String {
        let Some(message) = self.error_message(field) else {
            return String::new();
        };
        format!(
            r#"<span class="uk-label uk-label-danger"><small>{}</small></span>"#,
            html_escape(&message)
        )
    }

    fn password_toggle_html(&self, id: Option<&str>) -> String {
        let mut attrs = Attributes::new()
            .with("href", "#")
            .with("class", "uk-form-icon uk-form-icon-flip")
            .with("uk-icon", &self.config.password_toggle_icon)
            .with("aria-label", "Toggle password visibility");
        if let Some(id) = id {
            attrs.set("data-password-toggle", id);
        }
        format!("<a {}></a>", attrs.to_html())
    }

    /// Builds the attribute string of a control.
    ///
    /// `props` carries what the caller computed (type, value, class, ...).
    /// Name and id lead, followed by `props`. Extra attributes configured on
    /// the field come first; computed attributes overwrite them on key
    /// collision. Caller classes are appended rather than overwritten.
    fn build_attrs(&self, kind: RenderKind, field: &FieldFlags, props: Attributes) -> String {
        let id = self.field_id(kind, field);
        let mut computed = Attributes::new();

        if let Some(name) = field.name.as_deref().filter(|n| !n.is_empty()) {
            if kind == RenderKind::Select && field.multiple {
                computed.set("name", format!("{name}[]"));
            } else {
                computed.set("name", name);
            }
            if takes_autocomplete(kind) {
                computed.set("autocomplete", name);
            }
        }

        if let Some(id) = &id {
            computed.set("id", id);
            if field.help.is_some() {
                computed.set("aria-describedby", help_id(id));
            }
        }

        if let Some(placeholder) = field.placeholder.as_deref() {
            computed.set("placeholder", self.translate(Some(placeholder), field));
        }

        computed.merge(&props);

        if kind == RenderKind::Hidden {
            match field.attrs.get("class").filter(|c| !c.is_empty()) {
                Some(extra) => computed.set("class", extra),
                None => {
                    computed.remove("class");
                }
            }
        } else {
            let class = self.compose_class(kind, field, computed.get("class"));
            if class.is_empty() {
                computed.remove("class");
            } else {
                computed.set("class", class);
            }
        }

        let mut out = Attributes::new();
        if field.disabled && kind != RenderKind::Anchor {
            out.flag("disabled");
        }
        if kind == RenderKind::Select && field.multiple {
            out.flag("multiple");
        }
        if field.readonly {
            out.flag("readonly");
        }
        if self.is_checked(kind, field) {
            out.flag("checked");
        }

        let mut keyed = field.attrs.clone();
        keyed.remove("class");
        keyed.merge(&computed);
        out.merge(&keyed);
        out.to_html()
    }

    fn compose_class(&self, kind: RenderKind, field: &FieldFlags, preset: Option<&str>) -> String {
        let mut classes: Vec<String> = Vec::new();

        match preset.filter(|c| !c.is_empty()) {
            Some(preset) => classes.push(preset.to_string()),
            None => classes.extend(default_class(kind)),
        }

        if let Some(size) = &field.size {
            if !kind.is_button() {
                classes.push(format!("uk-form-{size}"));
            }
        }

        if self.error_message(field).is_some() {
            classes.push("uk-form-danger".to_string());
        }

        if let Some(extra) = field.attrs.get("class").filter(|c| !c.is_empty()) {
            classes.push(extra.to_string());
        }

        classes.join(" ")
    }

    fn is_checked(&self, kind: RenderKind, field: &FieldFlags) -> bool {
        if !matches!(kind, RenderKind::Checkbox | RenderKind::Radio) {
            return false;
        }
        match self.resolve_value(field) {
            Some(value) if value.is_truthy() => {
                kind == RenderKind::Checkbox
                    || field.meta.value.as_deref() == Some(value.as_text().as_ref())
            }
            _ => false,
        }
    }

    /// Derives the element id: explicit id, else the name (plus a slug of
    /// the fixed value for radios), prefixed with the form's id prefix.
    fn field_id(&self, kind: RenderKind, field: &FieldFlags) -> Option<String> {
        let id = match (field.id.as_deref(), field.name.as_deref()) {
            (Some(id), _) if !id.is_empty() => id.to_string(),
            (_, Some(name)) if !name.is_empty() => {
                let mut id = name.to_string();
                if kind == RenderKind::Radio {
                    if let Some(value) = &field.meta.value {
                        id.push('-');
                        id.push_str(&slug::slugify(value));
                    }
                }
                id
            }
            _ => return None,
        };
        Some(format!("{}{id}", self.form.id_prefix))
    }

    /// Resolves the value to display: old input when the request carries
    /// any, else the configured value, else the form's prefill data.
    fn resolve_value(&self, field: &FieldFlags) -> Option<FieldValue> {
        let name = field.name.as_deref();

        if let Some(old) = self.context.old_input().filter(|old| old.has_any()) {
            return name.and_then(|n| old.get(n));
        }

        if let Some(value) = &field.value {
            return Some(value.clone());
        }

        name.and_then(|n| self.form.data.get(n).cloned())
    }

    /// Resolves display text through the locale namespace, if one is set.
    /// Without text the field name is used as key.
    fn translate(&self, text: Option<&str>, field: &FieldFlags) -> String {
        let key = text
            .filter(|t| !t.is_empty())
            .or(field.name.as_deref())
            .unwrap_or_default();

        match &self.form.locale {
            Some(namespace) => {
                let full = format!("{namespace}.{key}");
                match self.context.translator() {
                    Some(translator) => translator.translate(&full),
                    None => full,
                }
            }
            None => key.to_string(),
        }
    }

    fn error_message(&self, field: &FieldFlags) -> Option<String> {
        let name = field.name.as_deref().filter(|n| !n.is_empty())?;
        self.context.errors()?.first(name)
    }
}

fn help_id(id: &str) -> String {
    format!("help-{id}")
}

fn takes_autocomplete(kind: RenderKind) -> bool {
    kind.is_text_like()
        || matches!(
            kind,
            RenderKind::File
                | RenderKind::Textarea
                | RenderKind::Select
                | RenderKind::Checkbox
                | RenderKind::Radio
        )
}

fn default_class(kind: RenderKind) -> Option<String> {
    match kind {
        RenderKind::Text | RenderKind::Email | RenderKind::Number | RenderKind::Password => {
            Some("uk-input".to_string())
        }
        RenderKind::Range
        | RenderKind::File
        | RenderKind::Textarea
        | RenderKind::Select
        | RenderKind::Checkbox
        | RenderKind::Radio => Some(format!("uk-{}", kind.as_str())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{OldInputMap, TokenFields, Translations};
    use crate::error::ValidationErrors;
    use crate::flags::Meta;
    use crate::markup::Icon;

    fn builder_with(flags: Vec<Flag>) -> FormBuilder {
        let mut builder = FormBuilder::new();
        for flag in flags {
            builder.set(flag);
        }
        builder
    }

    #[test]
    fn test_hidden_input() {
        let mut builder = builder_with(vec![
            Flag::Name("token".into()),
            Flag::Value("abc".into()),
            Flag::Attrs(Attributes::new().with("class", "js-token")),
        ]);
        let html = builder.render(RenderKind::Hidden);
        assert_eq!(
            html,
            r#"<input name="token" id="token" value="abc" type="hidden" class="js-token">"#
        );

        builder.set(Flag::Name("token".into()));
        let html = builder.render(RenderKind::Hidden);
        assert_eq!(html, r#"<input name="token" id="token" type="hidden">"#);
    }

    #[test]
    fn test_text_input_with_label() {
        let mut builder = builder_with(vec![
            Flag::Name("email".into()),
            Flag::Label("Email".into()),
        ]);
        let html = builder.render(RenderKind::Email);
        assert!(html.contains(
            r#"<input name="email" autocomplete="email" id="email" type="email" class="uk-input">"#
        ));
        assert!(html.contains("uk-form-label"));
        assert!(html.contains("Email</label>"));
        assert!(html.contains("uk-margin"));
    }

    #[test]
    fn test_render_resets_field_flags() {
        let mut builder = builder_with(vec![
            Flag::Name("email".into()),
            Flag::Size("large".into()),
            Flag::Disabled(true),
        ]);
        builder.render(RenderKind::Text);
        assert_eq!(builder.field(), &FieldFlags::default());

        let html = builder.render(RenderKind::Text);
        assert!(!html.contains("disabled"));
        assert!(!html.contains("uk-form-large"));
    }

    #[test]
    fn test_open_spoofs_method() {
        let mut builder = FormBuilder::new();
        builder.set_context(RequestContext::new().with_tokens(TokenFields::new("s3cr3t")));
        builder.set(Flag::Method("PUT".into()));
        builder.set(Flag::Url("/posts/1".into()));

        let html = builder.render(RenderKind::Open);
        assert!(html.starts_with(
            r#"<form action="/posts/1" class="uk-form-stacked" method="post">"#
        ));
        assert!(html.contains(r#"<input type="hidden" name="_token" value="s3cr3t">"#));
        assert!(html.contains(r#"<input type="hidden" name="_method" value="PUT">"#));
    }

    #[test]
    fn test_open_get_has_no_tokens() {
        let mut builder = FormBuilder::new();
        builder.set_context(RequestContext::new().with_tokens(TokenFields::new("s3cr3t")));
        builder.set(Flag::Method("get".into()));

        let html = builder.render(RenderKind::Open);
        assert_eq!(html, r#"<form class="uk-form-stacked" method="get">"#);
    }

    #[test]
    fn test_open_multipart() {
        let mut builder = builder_with(vec![Flag::Multipart(true)]);
        let html = builder.render(RenderKind::Open);
        assert!(html.contains(r#"enctype="multipart/form-data""#));
        assert!(!html.contains("_token"));
    }

    #[test]
    fn test_close_resets_form_flags() {
        let mut builder = builder_with(vec![
            Flag::Method("delete".into()),
            Flag::IdPrefix("user-".into()),
            Flag::Locale("forms".into()),
        ]);
        assert_eq!(builder.render(RenderKind::Close), "</form>");
        assert_eq!(builder.form(), &FormFlags::default());
    }

    #[test]
    fn test_validation_error_markup() {
        let mut builder = FormBuilder::new();
        builder.set_context(
            RequestContext::new().with_errors(ValidationErrors::new().with("email", "Required <b>")),
        );
        builder.set(Flag::Name("email".into()));
        let html = builder.render(RenderKind::Email);
        assert!(html.contains(r#"class="uk-input uk-form-danger""#));
        assert!(html.contains(
            r#"<span class="uk-label uk-label-danger"><small>Required &lt;b&gt;</small></span>"#
        ));

        builder.set(Flag::Name("name".into()));
        let html = builder.render(RenderKind::Text);
        assert!(!html.contains("uk-form-danger"));
        assert!(!html.contains("uk-label-danger"));
    }

    #[test]
    fn test_extra_attributes_precedence() {
        let extra = Attributes::new()
            .with("id", "custom")
            .with("data-x", "1")
            .with("class", "wide");
        let mut builder = builder_with(vec![Flag::Name("q".into()), Flag::Attrs(extra)]);
        let html = builder.render(RenderKind::Text);
        assert!(html.contains(
            r#"<input id="q" data-x="1" name="q" autocomplete="q" type="text" class="uk-input wide">"#
        ));
    }

    #[test]
    fn test_bare_tokens_lead() {
        let mut builder = builder_with(vec![
            Flag::Name("n".into()),
            Flag::Disabled(true),
            Flag::Readonly(true),
            Flag::Size("small".into()),
        ]);
        let html = builder.render(RenderKind::Number);
        assert!(html.contains(
            r#"<input disabled readonly name="n" autocomplete="n" id="n" type="number" class="uk-input uk-form-small">"#
        ));
    }

    #[test]
    fn test_radio_id_and_checked() {
        let mut builder = builder_with(vec![
            Flag::IdPrefix("user-".into()),
            Flag::Name("color".into()),
            Flag::Meta(Meta {
                value: Some("Red Apple".into()),
                legend: None,
            }),
            Flag::Value("Red Apple".into()),
        ]);
        let html = builder.render(RenderKind::Radio);
        assert!(html.contains(r#"id="user-color-red-apple""#));
        assert!(html.contains("<input checked "));
        assert!(html.contains(r#"class="uk-radio""#));

        builder.set(Flag::Name("color".into()));
        builder.set(Flag::Meta(Meta {
            value: Some("blue".into()),
            legend: None,
        }));
        builder.set(Flag::Value("red".into()));
        let html = builder.render(RenderKind::Radio);
        assert!(!html.contains("checked"));
    }

    #[test]
    fn test_checkbox_truthiness() {
        let mut builder = builder_with(vec![
            Flag::Name("terms".into()),
            Flag::Value(FieldValue::Bool(true)),
            Flag::Inline(true),
        ]);
        let html = builder.render(RenderKind::Checkbox);
        assert!(html.contains("<input checked "));
        assert!(html.contains("uk-inline"));

        builder.set(Flag::Name("terms".into()));
        builder.set(Flag::Value("0".into()));
        let html = builder.render(RenderKind::Checkbox);
        assert!(!html.contains("checked"));
    }

    #[test]
    fn test_multiple_select() {
        let mut builder = builder_with(vec![
            Flag::Name("tags".into()),
            Flag::Multiple(true),
            Flag::Options(vec![
                ("a".into(), "A".into()),
                ("b".into(), "B".into()),
                ("c".into(), "C".into()),
            ]),
            Flag::Value(vec!["a", "c"].into()),
        ]);
        let html = builder.render(RenderKind::Select);
        assert!(html.contains(r#"<select multiple name="tags[]""#));
        assert!(html.contains(r#"<option value="a" selected>A</option>"#));
        assert!(html.contains(r#"<option value="b">B</option>"#));
        assert!(html.contains(r#"<option value="c" selected>C</option>"#));
    }

    #[test]
    fn test_single_select_matches_exactly() {
        let mut builder = builder_with(vec![
            Flag::Name("n".into()),
            Flag::Options(vec![("1".into(), "One".into()), ("10".into(), "Ten".into())]),
            Flag::Value(10_i32.into()),
        ]);
        let html = builder.render(RenderKind::Select);
        assert!(html.contains(r#"<option value="1">One</option>"#));
        assert!(html.contains(r#"<option value="10" selected>Ten</option>"#));
    }

    #[test]
    fn test_textarea_content_is_escaped() {
        let mut builder = builder_with(vec![
            Flag::Name("bio".into()),
            Flag::Value("<p>hi</p>".into()),
        ]);
        let html = builder.render(RenderKind::Textarea);
        assert!(html.contains(r#"rows="3""#));
        assert!(html.contains(">&lt;p&gt;hi&lt;/p&gt;</textarea>"));
    }

    #[test]
    fn test_help_text() {
        let mut builder = builder_with(vec![
            Flag::Name("bio".into()),
            Flag::Help("Tell us".into()),
        ]);
        let html = builder.render(RenderKind::Text);
        assert!(html.contains(r#"aria-describedby="help-bio""#));
        assert!(html.contains(r#"<small id="help-bio" class="uk-text-muted">Tell us</small>"#));
    }

    #[test]
    fn test_icon_and_password_toggle() {
        let mut builder = builder_with(vec![
            Flag::Name("secret".into()),
            Flag::Icon(Icon::new("lock")),
            Flag::PasswordToggle(true),
        ]);
        let html = builder.render(RenderKind::Password);
        assert!(html.contains("uk-form-with-icon"));
        assert!(html.contains(r#"<span class="uk-form-icon" uk-icon="lock"></span>"#));
        assert!(html.contains(r#"data-password-toggle="secret""#));
        assert!(html.contains("uk-inline uk-width-1-1"));
    }

    #[test]
    fn test_submit_button() {
        let mut builder = builder_with(vec![
            Flag::Value("Save".into()),
            Flag::Color("primary".into()),
            Flag::Size("small".into()),
            Flag::Full(true),
        ]);
        let html = builder.render(RenderKind::Submit);
        assert!(html.contains(
            r#"<button class="uk-button uk-button-primary uk-button-small uk-width-1-1" type="submit">Save</button>"#
        ));
    }

    #[test]
    fn test_button_icon_flip() {
        let mut builder = builder_with(vec![
            Flag::Value("Next".into()),
            Flag::Icon(Icon::new("arrow-right").flip()),
            Flag::Outline(true),
        ]);
        let html = builder.render(RenderKind::Button);
        assert!(html.contains(
            r#"<button class="uk-button uk-button-outline uk-button-default" type="button">Next<span class="uk-margin-small-left" uk-icon="arrow-right"></span></button>"#
        ));
    }

    #[test]
    fn test_disabled_anchor() {
        let mut builder = builder_with(vec![Flag::Value("Go".into()), Flag::Disabled(true)]);
        let html = builder.render(RenderKind::Anchor);
        assert!(html.contains(
            r#"<a class="uk-button uk-button-default uk-disabled" href="javascript:void(0)" role="button" aria-disabled="true">Go</a>"#
        ));
    }

    #[test]
    fn test_locale_translates_label() {
        let mut builder = FormBuilder::new();
        builder.set_context(
            RequestContext::new().with_translator(Translations::new().with("forms.email", "E-mail")),
        );
        builder.set(Flag::Locale("forms".into()));
        builder.set(Flag::Name("email".into()));
        builder.set(Flag::Label(Label::FromName));
        let html = builder.render(RenderKind::Email);
        assert!(html.contains("E-mail</label>"));
    }

    #[test]
    fn test_old_input_wins() {
        let mut builder = FormBuilder::new();
        builder.set_context(
            RequestContext::new().with_old_input(OldInputMap::new().with("title", "old")),
        );
        builder.set(Flag::Fill([("title".to_string(), FieldValue::from("prefill"))].into()));
        builder.set(Flag::Name("title".into()));
        builder.set(Flag::Value("explicit".into()));
        let html = builder.render(RenderKind::Text);
        assert!(html.contains(r#"value="old""#));

        // Old input for another field still shadows the configured value.
        builder.set(Flag::Name("subtitle".into()));
        builder.set(Flag::Value("explicit".into()));
        let html = builder.render(RenderKind::Text);
        assert!(!html.contains("value="));
    }

    #[test]
    fn test_prefill_fallback() {
        let mut builder = builder_with(vec![
            Flag::Fill([("title".to_string(), FieldValue::from("x"))].into()),
            Flag::Name("title".into()),
        ]);
        let html = builder.render(RenderKind::Text);
        assert!(html.contains(r#"value="x""#));
    }

    #[test]
    fn test_fieldset_with_legend() {
        let mut builder = builder_with(vec![Flag::Meta(Meta {
            value: None,
            legend: Some("Account".into()),
        })]);
        let html = builder.render(RenderKind::FieldsetOpen);
        assert!(html.starts_with(r#"<fieldset class="uk-fieldset">"#));
        assert!(html.contains("Account</legend>"));
        assert_eq!(builder.render(RenderKind::FieldsetClose), "</fieldset>");
    }
}
