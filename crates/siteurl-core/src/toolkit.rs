//! URL helper bound to a site configuration and, optionally, the current request.
//!
//! [`UrlToolkit`] borrows a [`SiteConfig`] and an optional [`RequestContext`]
//! and exposes the [`crate::url_model`] functions with the installation's
//! base URLs filled in. Operations that take `url: Option<&str>` fall back
//! to the current request URL when given `None` or an empty string.

use std::borrow::Cow;

use crate::config::SiteConfig;
use crate::error::ToolkitError;
use crate::request::RequestContext;
use crate::url_model::{self, UrlParts};

#[derive(Debug, Clone, Copy)]
pub struct UrlToolkit<'a> {
    config: &'a SiteConfig,
    request: Option<&'a RequestContext>,
}

impl<'a> UrlToolkit<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            config,
            request: None,
        }
    }

    pub fn with_request(mut self, request: &'a RequestContext) -> Self {
        self.request = Some(request);
        self
    }

    pub fn config(&self) -> &'a SiteConfig {
        self.config
    }

    pub fn root_url(&self) -> &'a str {
        &self.config.root_url
    }

    /// Live base URL. Missing configuration is fatal for the caller's request.
    pub fn live_url(&self) -> Result<&'a str, ToolkitError> {
        self.config.live_url()
    }

    /// The current request URL with all parameters.
    pub fn current_url(&self) -> Result<String, ToolkitError> {
        self.request
            .map(RequestContext::current_url)
            .ok_or(ToolkitError::NoRequestContext)
    }

    fn resolve<'u>(&self, url: Option<&'u str>) -> Result<Cow<'u, str>, ToolkitError> {
        match url.filter(|u| !u.is_empty()) {
            Some(u) => Ok(Cow::Borrowed(u)),
            None => self.current_url().map(Cow::Owned),
        }
    }

    pub fn parse(&self, url: &str) -> Option<UrlParts> {
        url_model::parse(url)
    }

    /// See [`url_model::is_external`]. `base` defaults to the root URL.
    pub fn is_external(&self, url: &str, base: Option<&str>) -> bool {
        let base = base.filter(|b| !b.is_empty()).unwrap_or(self.root_url());
        url_model::is_external(url, base)
    }

    /// `extensions` replaces [`url_model::DEFAULT_FILE_EXTENSIONS`] when given.
    pub fn is_file(&self, url: &str, extensions: Option<&[&str]>) -> bool {
        url_model::is_file(url, extensions.unwrap_or(url_model::DEFAULT_FILE_EXTENSIONS))
    }

    /// `extensions` replaces [`url_model::DEFAULT_DOCUMENT_EXTENSIONS`] when given.
    pub fn is_document(&self, url: &str, extensions: Option<&[&str]>) -> bool {
        url_model::is_document(
            url,
            extensions.unwrap_or(url_model::DEFAULT_DOCUMENT_EXTENSIONS),
        )
    }

    pub fn is_new_window(&self, url: &str) -> bool {
        url_model::is_new_window(url, self.root_url())
    }

    /// Replaces every root URL in `text` with the live URL.
    pub fn to_live(&self, text: &str) -> Result<String, ToolkitError> {
        let live = self.live_url()?;
        tracing::debug!(from = self.root_url(), to = live, "rewriting to live");
        Ok(url_model::replace_base(text, self.root_url(), live))
    }

    /// Replaces every live URL in `text` with the root URL.
    pub fn from_live(&self, text: &str) -> Result<String, ToolkitError> {
        let live = self.live_url()?;
        tracing::debug!(from = live, to = self.root_url(), "rewriting from live");
        Ok(url_model::replace_base(text, live, self.root_url()))
    }

    /// Filesystem path under `root_dir` to its public URL.
    pub fn from_path(&self, path: &str) -> String {
        url_model::replace_base(path, &self.config.root_dir, self.root_url())
    }

    /// URL under the root URL to its filesystem path.
    pub fn to_path(&self, url: &str) -> String {
        url_model::replace_base(url, self.root_url(), &self.config.root_dir)
    }

    pub fn relative_to_full_url(&self, url: &str) -> String {
        url_model::relative_to_full_url(url, self.root_url())
    }

    /// `protocol` defaults to [`url_model::DEFAULT_PROTOCOL`].
    pub fn add_protocol(&self, url: &str, protocol: Option<&str>) -> String {
        url_model::add_protocol(url, protocol.unwrap_or(url_model::DEFAULT_PROTOCOL))
    }

    /// Root-relative form of `url`, e.g. `test/?param=b&me=you`.
    pub fn relative(&self, url: Option<&str>) -> Result<String, ToolkitError> {
        let url = self.resolve(url)?;
        Ok(url_model::relative(&url, self.root_url()))
    }

    /// `url` without its query string.
    pub fn directory(&self, url: Option<&str>) -> Result<String, ToolkitError> {
        let url = self.resolve(url)?;
        Ok(url_model::directory(&url).to_string())
    }

    /// Adds/overwrites then removes query parameters. See [`url_model::modify`].
    pub fn modify(
        &self,
        url: Option<&str>,
        to_add: &[(&str, &str)],
        to_remove: &[&str],
    ) -> Result<String, ToolkitError> {
        let url = self.resolve(url)?;
        let modified = url_model::modify(&url, to_add, to_remove);
        tracing::debug!(
            url = %url,
            added = to_add.len(),
            removed = to_remove.len(),
            result = %modified,
            "modified query"
        );
        Ok(modified)
    }

    pub fn add_parameter(
        &self,
        to_add: &[(&str, &str)],
        url: Option<&str>,
    ) -> Result<String, ToolkitError> {
        self.modify(url, to_add, &[])
    }

    pub fn remove_parameter(
        &self,
        names: &[&str],
        url: Option<&str>,
    ) -> Result<String, ToolkitError> {
        self.modify(url, &[], names)
    }
}
