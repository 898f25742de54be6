//! # oxide-uikit-forms
//!
//! Fluent HTML form markup for the UIkit 3 CSS framework.
//!
//! This crate provides:
//! - A renderer turning per-field and per-form flags into UIkit markup
//! - A chainable service configuring one element at a time
//! - Validation error display, old input repopulation and prefill data
//! - Icons, help texts, password toggles and fieldsets
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_uikit_forms::FormService;
//!
//! let mut forms = FormService::new();
//!
//! let mut html = forms.open().to_html();
//! html += &forms.email("email", "Email").placeholder("you@example.com").to_html();
//! html += &forms.password("password", "Password").password_toggle(true).to_html();
//! html += &forms.submit("Sign in").color("primary").to_html();
//! html += &forms.close().to_html();
//!
//! assert!(html.contains(r#"name="email""#));
//! assert!(html.contains(r#"type="password""#));
//! assert!(html.ends_with("</form>"));
//! ```
//!
//! ## Request Context
//!
//! Old input, validation errors, CSRF tokens, translations and URLs come from
//! collaborators bundled in a [`RequestContext`]:
//!
//! ```rust
//! use oxide_uikit_forms::context::{OldInputMap, TokenFields};
//! use oxide_uikit_forms::{FormService, RequestContext, ValidationErrors};
//!
//! let context = RequestContext::new()
//!     .with_tokens(TokenFields::new("s3cr3t"))
//!     .with_old_input(OldInputMap::new().with("email", "ada@example"))
//!     .with_errors(ValidationErrors::new().with("email", "Invalid address."));
//!
//! let mut forms = FormService::new().with_context(context);
//!
//! let open = forms.open().method("put").to_html();
//! assert!(open.contains(r#"name="_method" value="PUT""#));
//!
//! let field = forms.email("email", "Email").to_html();
//! assert!(field.contains(r#"value="ada@example""#));
//! assert!(field.contains("uk-form-danger"));
//! ```
//!
//! ## Render Kinds
//!
//! - `open`, `close`, `fieldset_open`, `fieldset_close`
//! - `text`, `email`, `number`, `password`, `range`, `hidden`, `file`
//! - `textarea`, `select`, `checkbox`, `radio`
//! - `button`, `submit`, `reset`, `anchor`

mod builder;
pub mod config;
pub mod context;
mod error;
pub mod flags;
pub mod markup;
mod service;
pub mod value;

pub use builder::FormBuilder;
pub use config::FormsConfig;
pub use context::{ErrorLookup, FormTokens, OldInput, RequestContext, Translator, UrlGenerator};
pub use error::{FormError, Result, ValidationErrors};
pub use flags::{FieldFlags, Flag, FormFlags, Label, Meta, RenderKind};
pub use markup::{html_escape, Attributes, Icon};
pub use service::FormService;
pub use value::FieldValue;
