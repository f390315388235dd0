//! The in-flight request as supplied by the host web server.

use std::collections::HashMap;

use crate::error::ToolkitError;

/// What the host knows about the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub is_secure: bool,
    /// Server protocol label, e.g. `HTTP/1.1`.
    pub protocol_label: String,
    /// Host header value, including a port if one was sent.
    pub host: String,
    /// Request path including the query string, e.g. `/test/?param=b`.
    pub request_uri: String,
}

impl RequestContext {
    pub fn new(
        is_secure: bool,
        protocol_label: impl Into<String>,
        host: impl Into<String>,
        request_uri: impl Into<String>,
    ) -> Self {
        Self {
            is_secure,
            protocol_label: protocol_label.into(),
            host: host.into(),
            request_uri: request_uri.into(),
        }
    }

    /// Builds a context from CGI-style server variables.
    ///
    /// Reads `HTTPS` (secure iff `on`), `SERVER_PROTOCOL` (default `HTTP/1.1`),
    /// `HTTP_HOST` (required) and `REQUEST_URI` (default `/`).
    pub fn from_server_vars(vars: &HashMap<String, String>) -> Result<Self, ToolkitError> {
        let host = vars
            .get("HTTP_HOST")
            .filter(|h| !h.is_empty())
            .ok_or(ToolkitError::MissingServerVar("HTTP_HOST"))?;
        let is_secure = vars
            .get("HTTPS")
            .is_some_and(|v| v.eq_ignore_ascii_case("on"));
        let protocol_label = vars
            .get("SERVER_PROTOCOL")
            .map_or("HTTP/1.1", String::as_str);
        let request_uri = vars.get("REQUEST_URI").map_or("/", String::as_str);
        Ok(Self::new(is_secure, protocol_label, host.as_str(), request_uri))
    }

    /// Lowercased protocol name (text before the first `/`), plus `s` when secure.
    pub fn scheme(&self) -> String {
        let label = self.protocol_label.to_ascii_lowercase();
        let name = label.split_once('/').map_or(label.as_str(), |(name, _)| name);
        if self.is_secure {
            format!("{name}s")
        } else {
            name.to_string()
        }
    }

    /// Full URL of the request with all parameters.
    pub fn current_url(&self) -> String {
        format!("{}://{}{}", self.scheme(), self.host, self.request_uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn current_url_plain_http() {
        let ctx = RequestContext::new(false, "HTTP/1.1", "domain.com", "/test/?param=b&me=you");
        assert_eq!(ctx.scheme(), "http");
        assert_eq!(ctx.current_url(), "http://domain.com/test/?param=b&me=you");
    }

    #[test]
    fn current_url_secure() {
        let ctx = RequestContext::new(true, "HTTP/2.0", "domain.com:8443", "/");
        assert_eq!(ctx.current_url(), "https://domain.com:8443/");
    }

    #[test]
    fn label_without_slash_is_used_whole() {
        let ctx = RequestContext::new(false, "HTTP", "d", "/");
        assert_eq!(ctx.scheme(), "http");
    }

    #[test]
    fn from_server_vars_reads_cgi_names() {
        let ctx = RequestContext::from_server_vars(&vars(&[
            ("HTTPS", "on"),
            ("SERVER_PROTOCOL", "HTTP/1.1"),
            ("HTTP_HOST", "project.com"),
            ("REQUEST_URI", "/contact/?go=there"),
        ]))
        .unwrap();
        assert!(ctx.is_secure);
        assert_eq!(ctx.current_url(), "https://project.com/contact/?go=there");
    }

    #[test]
    fn from_server_vars_defaults() {
        let ctx = RequestContext::from_server_vars(&vars(&[
            ("HTTPS", "off"),
            ("HTTP_HOST", "project.com"),
        ]))
        .unwrap();
        assert!(!ctx.is_secure);
        assert_eq!(ctx.current_url(), "http://project.com/");
    }

    #[test]
    fn from_server_vars_requires_host() {
        assert_eq!(
            RequestContext::from_server_vars(&vars(&[("REQUEST_URI", "/")])),
            Err(ToolkitError::MissingServerVar("HTTP_HOST"))
        );
        assert_eq!(
            RequestContext::from_server_vars(&vars(&[("HTTP_HOST", "")])),
            Err(ToolkitError::MissingServerVar("HTTP_HOST"))
        );
    }
}
