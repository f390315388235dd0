//! Relative/absolute normalization.

use regex::Regex;
use std::sync::LazyLock;

/// Protocol used by [`add_protocol`] callers that have no preference.
pub const DEFAULT_PROTOCOL: &str = "http://";

// Also matches ftp:// and ftps://.
static PROTOCOL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:f|ht)tps?://").expect("protocol prefix pattern"));

/// Makes a root-relative `url` absolute by prefixing `root_url` and a slash.
///
/// URLs starting with `http` (any case) or `#` are returned as-is.
///
/// # Examples
///
/// - `relative_to_full_url("user/login", "http://domain.com")` → `"http://domain.com/user/login"`
/// - `relative_to_full_url("#something", "http://domain.com")` → `"#something"`
pub fn relative_to_full_url(url: &str, root_url: &str) -> String {
    let has_http = url
        .get(..4)
        .is_some_and(|head| head.eq_ignore_ascii_case("http"));
    if has_http || url.starts_with('#') {
        url.to_string()
    } else {
        format!("{root_url}/{url}")
    }
}

/// Prefixes `protocol` unless `url` already starts with `http(s)://` or `ftp(s)://`.
pub fn add_protocol(url: &str, protocol: &str) -> String {
    if PROTOCOL_PREFIX.is_match(url) {
        url.to_string()
    } else {
        format!("{protocol}{url}")
    }
}

/// Strips every occurrence of `root_url` followed by a slash, leaving a root-relative path.
pub fn relative(url: &str, root_url: &str) -> String {
    url.replace(&format!("{root_url}/"), "")
}

/// Returns `url` without its query string (everything from the first `?`).
pub fn directory(url: &str) -> &str {
    url.split_once('?').map_or(url, |(dir, _)| dir)
}
