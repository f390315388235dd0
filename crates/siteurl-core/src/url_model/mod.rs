//! URL modeling: parsing, classification and rewriting.
//!
//! Everything here is a pure function over strings. Base URLs and request
//! data are passed in explicitly; [`crate::toolkit::UrlToolkit`] binds them
//! from configuration.

mod classify;
mod normalize;
mod query;
mod rewrite;

pub use classify::{
    is_document, is_external, is_file, is_new_window, DEFAULT_DOCUMENT_EXTENSIONS,
    DEFAULT_FILE_EXTENSIONS,
};
pub use normalize::{add_protocol, directory, relative, relative_to_full_url, DEFAULT_PROTOCOL};
pub use query::{modify, QueryParams};
pub use rewrite::replace_base;

/// Components of an absolute URL.
///
/// `query` keeps parameter order; `fragment` is kept verbatim and never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    pub host: String,
    pub port: Option<u16>,
    pub path: String,
    pub query: QueryParams,
    pub fragment: Option<String>,
}

impl UrlParts {
    pub fn has_fragment(&self) -> bool {
        self.fragment.is_some()
    }

    /// Reassembles the URL. The query is re-encoded the same way [`modify`] encodes it.
    pub fn to_url_string(&self) -> String {
        let mut out = format!("{}://{}", self.scheme, self.host);
        if let Some(port) = self.port {
            out.push_str(&format!(":{port}"));
        }
        out.push_str(&self.path);
        let query = self.query.to_query_string();
        if !query.is_empty() {
            out.push('?');
            out.push_str(&query);
        }
        if let Some(fragment) = &self.fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }
}

/// Splits an absolute URL into its components.
///
/// Returns `None` for anything that is not an absolute URL with a host
/// (relative paths, anchors, `mailto:` and the like).
pub fn parse(url: &str) -> Option<UrlParts> {
    let parsed = url::Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_string();
    Some(UrlParts {
        scheme: parsed.scheme().to_string(),
        host,
        port: parsed.port(),
        path: parsed.path().to_string(),
        query: parsed.query().map(QueryParams::parse).unwrap_or_default(),
        fragment: parsed.fragment().map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_url() {
        let parts = parse("https://example.com:8443/contact/?go=there&test=you#form").unwrap();
        assert_eq!(parts.scheme, "https");
        assert_eq!(parts.host, "example.com");
        assert_eq!(parts.port, Some(8443));
        assert_eq!(parts.path, "/contact/");
        assert_eq!(parts.query.get("go"), Some("there"));
        assert_eq!(parts.query.get("test"), Some("you"));
        assert!(parts.has_fragment());
        assert_eq!(parts.fragment.as_deref(), Some("form"));
    }

    #[test]
    fn parse_without_query_or_fragment() {
        let parts = parse("http://example.com").unwrap();
        assert_eq!(parts.path, "/");
        assert!(parts.query.is_empty());
        assert!(!parts.has_fragment());
        assert_eq!(parts.port, None);
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(parse("user/login").is_none());
        assert!(parse("#anchor").is_none());
        assert!(parse("").is_none());
        assert!(parse("mailto:someone@example.com").is_none());
        assert!(parse("http://").is_none());
    }

    #[test]
    fn reassembled_url_parses_back() {
        let original = "http://example.com:8080/a/b?x=1&y=two+words#top";
        let parts = parse(original).unwrap();
        let rebuilt = parts.to_url_string();
        assert_eq!(rebuilt, original);
        assert_eq!(parse(&rebuilt).unwrap(), parts);
    }
}
