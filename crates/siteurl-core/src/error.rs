//! Toolkit error type.

use thiserror::Error;

/// Errors returned by [`crate::toolkit::UrlToolkit`] and [`crate::request::RequestContext`].
///
/// Classification helpers never return these; they degrade to `false` instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToolkitError {
    /// `live_url` is absent or blank. The host should stop handling the current
    /// request and surface this to an operator.
    #[error("live_url is not configured; set live_url in config.toml")]
    MissingLiveUrl,
    /// The operation needed the current URL but no request context was supplied.
    #[error("no request context available to resolve the current URL")]
    NoRequestContext,
    /// A required server variable was not present.
    #[error("missing server variable {0}")]
    MissingServerVar(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert!(ToolkitError::MissingLiveUrl.to_string().contains("live_url"));
        assert_eq!(
            ToolkitError::MissingServerVar("HTTP_HOST").to_string(),
            "missing server variable HTTP_HOST"
        );
    }
}
