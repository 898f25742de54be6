#![allow(dead_code)]

use oxide_uikit_forms::context::{OldInputMap, RouteTable, TokenFields, Translations};
use oxide_uikit_forms::{FormService, RequestContext, ValidationErrors};

pub const TOKEN: &str = "s3cr3t";

pub fn forms() -> FormService {
    FormService::new()
}

pub fn forms_with(context: RequestContext) -> FormService {
    FormService::new().with_context(context)
}

pub fn with_tokens() -> RequestContext {
    RequestContext::new().with_tokens(TokenFields::new(TOKEN))
}

pub fn with_old_input(pairs: &[(&str, &str)]) -> RequestContext {
    let mut old = OldInputMap::new();
    for (name, value) in pairs {
        old.insert(*name, *value);
    }
    RequestContext::new().with_old_input(old)
}

pub fn with_errors(pairs: &[(&str, &str)]) -> RequestContext {
    let mut errors = ValidationErrors::new();
    for (field, message) in pairs {
        errors.add(field, *message);
    }
    RequestContext::new().with_errors(errors)
}

pub fn with_translations(json: &str) -> RequestContext {
    let translations = Translations::from_json(json)
        .unwrap_or_else(|e| panic!("Invalid translations: {json}\nError: {e}"));
    RequestContext::new().with_translator(translations)
}

pub fn routes() -> RouteTable {
    RouteTable::new("https://example.com")
        .with_route("posts.update", "/posts/{id}")
        .with_route("posts.index", "/posts")
}

/// Counts non-overlapping occurrences of `needle`.
pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}
