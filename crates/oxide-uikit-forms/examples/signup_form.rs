//! Renders a sign-up form after a failed submission.
//!
//! Run with `-v` to see the render log.

use oxide_uikit_forms::context::{OldInputMap, RouteTable, TokenFields, Translations};
use oxide_uikit_forms::{FormService, RequestContext, ValidationErrors};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

const TRANSLATIONS: &str = r#"{
    "signup": {
        "username": "Username",
        "email": "E-mail address",
        "password": "Password",
        "plan": "Plan",
        "terms": "I accept the terms",
        "submit": "Create account",
        "cancel": "Cancel",
        "hint": "Between 3 and 20 characters"
    }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let verbose = std::env::args().any(|arg| arg == "-v" || arg == "--verbose");
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let routes = RouteTable::new("https://example.com")
        .with_route("signup.store", "/signup")
        .with_route("home", "/");

    let context = RequestContext::new()
        .with_tokens(TokenFields::new("9f8e7d6c5b4a"))
        .with_old_input(
            OldInputMap::new()
                .with("username", "ada")
                .with("email", "ada@")
                .with("plan", "pro"),
        )
        .with_errors(ValidationErrors::new().with("email", "The e-mail address is invalid."))
        .with_translator(Translations::from_json(TRANSLATIONS)?)
        .with_urls(routes);

    let mut forms = FormService::new().with_context(context);
    let mut html = Vec::new();

    html.push(
        forms
            .open()
            .route("signup.store", &[])
            .locale("signup")
            .id_prefix("signup-")
            .to_html(),
    );
    html.push(forms.fieldset_open(Some("username")).to_html());
    html.push(
        forms
            .text("username", "username")
            .icon("user")
            .help("hint")
            .to_html(),
    );
    html.push(forms.email("email", "email").icon("mail").to_html());
    html.push(
        forms
            .password("password", "password")
            .password_toggle(true)
            .to_html(),
    );
    html.push(forms.fieldset_close().to_html());
    html.push(
        forms
            .select("plan", "plan", [("free", "Free"), ("pro", "Pro")])
            .to_html(),
    );
    html.push(forms.checkbox("terms", "terms", Some("1"), false).to_html());
    html.push(forms.submit("submit").color("primary").to_html());
    html.push(forms.anchor("cancel", None).route("home", &[]).to_html());
    html.push(forms.close().to_html());

    info!(elements = html.len(), "rendered sign-up form");
    println!("{}", html.join("\n"));
    Ok(())
}
