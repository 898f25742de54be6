//! Named routes and absolute URLs.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use regex::Regex;

use super::UrlGenerator;
use crate::error::{FormError, Result};

static ABSOLUTE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z][a-zA-Z0-9+.-]*:|//|#)").expect("valid absolute url pattern")
});

/// Characters escaped inside a path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'/')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A segment in a route pattern.
#[derive(Debug, Clone)]
enum Segment {
    /// A literal string segment.
    Literal(String),
    /// A parameter segment (e.g., {id}).
    Param(String),
    /// A wildcard segment (e.g., {*path}).
    Wildcard(String),
}

/// A parsed route pattern that can be filled with parameters.
#[derive(Debug, Clone)]
struct RoutePattern {
    segments: Vec<Segment>,
}

impl RoutePattern {
    fn new(pattern: &str) -> Self {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|part| {
                match part.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                    Some(param) => match param.strip_prefix('*') {
                        Some(name) => Segment::Wildcard(name.to_string()),
                        None => Segment::Param(param.to_string()),
                    },
                    None => Segment::Literal(part.to_string()),
                }
            })
            .collect();

        Self { segments }
    }

    /// Fills the pattern. Parameters that are not part of the pattern are
    /// appended as a query string, sorted by key.
    ///
    /// Parameter values are percent-encoded; a wildcard keeps its `/`
    /// separators.
    fn reverse(&self, route: &str, params: &HashMap<String, String>) -> Result<String> {
        let mut path = String::new();
        let mut used = Vec::new();

        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Literal(s) => path.push_str(s),
                Segment::Param(name) | Segment::Wildcard(name) => {
                    let value = params.get(name).ok_or_else(|| FormError::MissingRouteParam {
                        route: route.to_string(),
                        param: name.clone(),
                    })?;
                    if matches!(segment, Segment::Wildcard(_)) {
                        let parts: Vec<String> = value
                            .split('/')
                            .map(|part| utf8_percent_encode(part, SEGMENT).to_string())
                            .collect();
                        path.push_str(&parts.join("/"));
                    } else {
                        path.extend(utf8_percent_encode(value, SEGMENT));
                    }
                    used.push(name.as_str());
                }
            }
        }

        if path.is_empty() {
            path.push('/');
        }

        let query: BTreeMap<&str, &str> = params
            .iter()
            .filter(|(k, _)| !used.contains(&k.as_str()))
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        if !query.is_empty() {
            let encoded = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(query)
                .finish();
            path.push('?');
            path.push_str(&encoded);
        }

        Ok(path)
    }
}

/// A table of named routes rooted at a base URL.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    base_url: String,
    routes: HashMap<String, RoutePattern>,
}

impl RouteTable {
    /// Creates a table generating URLs below `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            routes: HashMap::new(),
        }
    }

    /// Registers a named route pattern such as `/posts/{id}/edit`.
    #[must_use]
    pub fn with_route(mut self, name: impl Into<String>, pattern: &str) -> Self {
        self.routes.insert(name.into(), RoutePattern::new(pattern));
        self
    }
}

impl UrlGenerator for RouteTable {
    fn to(&self, path: &str) -> String {
        if ABSOLUTE_URL.is_match(path) {
            return path.to_string();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn route(&self, name: &str, params: &HashMap<String, String>) -> Result<String> {
        let pattern = self
            .routes
            .get(name)
            .ok_or_else(|| FormError::RouteNotFound(name.to_string()))?;
        let path = pattern.reverse(name, params)?;
        Ok(self.to(&path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_to_relative_and_absolute() {
        let urls = RouteTable::new("https://example.com/");
        assert_eq!(urls.to("/login"), "https://example.com/login");
        assert_eq!(urls.to("login"), "https://example.com/login");
        assert_eq!(urls.to("https://other.org/x"), "https://other.org/x");
        assert_eq!(urls.to("mailto:a@b.c"), "mailto:a@b.c");
    }

    #[test]
    fn test_named_route() {
        let urls = RouteTable::new("https://example.com").with_route("posts.update", "/posts/{id}");
        let url = urls.route("posts.update", &params(&[("id", "7")])).unwrap();
        assert_eq!(url, "https://example.com/posts/7");
    }

    #[test]
    fn test_extra_params_become_query() {
        let urls = RouteTable::new("").with_route("search", "/search");
        let url = urls
            .route("search", &params(&[("q", "rust"), ("page", "2")]))
            .unwrap();
        assert_eq!(url, "/search?page=2&q=rust");
    }

    #[test]
    fn test_wildcard_route() {
        let urls = RouteTable::new("").with_route("files", "/files/{*path}");
        let url = urls
            .route("files", &params(&[("path", "docs/readme.md")]))
            .unwrap();
        assert_eq!(url, "/files/docs/readme.md");
    }

    #[test]
    fn test_missing_route() {
        let urls = RouteTable::new("");
        let err = urls.route("nope", &HashMap::new()).unwrap_err();
        assert!(matches!(err, FormError::RouteNotFound(name) if name == "nope"));
    }

    #[test]
    fn test_missing_param() {
        let urls = RouteTable::new("").with_route("posts.show", "/posts/{id}");
        let err = urls.route("posts.show", &HashMap::new()).unwrap_err();
        assert!(matches!(err, FormError::MissingRouteParam { param, .. } if param == "id"));
    }

    #[test]
    fn test_path_params_are_encoded() {
        let urls = RouteTable::new("").with_route("posts.show", "/posts/{slug}");
        let url = urls
            .route("posts.show", &params(&[("slug", "a/b?c d")]))
            .unwrap();
        assert_eq!(url, "/posts/a%2Fb%3Fc%20d");
    }

    #[test]
    fn test_query_is_form_encoded() {
        let urls = RouteTable::new("").with_route("search", "/search");
        let url = urls
            .route("search", &params(&[("q", "fish & chips"), ("tag", "a=b")]))
            .unwrap();
        assert_eq!(url, "/search?q=fish+%26+chips&tag=a%3Db");
    }

    #[test]
    fn test_wildcard_segments_are_encoded() {
        let urls = RouteTable::new("").with_route("files", "/files/{*path}");
        let url = urls
            .route("files", &params(&[("path", "my docs/a#b.md")]))
            .unwrap();
        assert_eq!(url, "/files/my%20docs/a%23b.md");
    }
}
