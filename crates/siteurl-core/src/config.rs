use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ToolkitError;

/// Site configuration loaded from `~/.config/siteurl/config.toml`.
///
/// `root_url` and `root_dir` describe the installation ("system" universe);
/// `live_url` is the public base URL of the deployed site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL of this installation, without trailing slash (e.g. `http://localhost/ProjectCom`).
    pub root_url: String,
    /// Filesystem directory that `root_url` is served from.
    pub root_dir: String,
    /// Public base URL. Optional on disk, required by the live rewrites.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root_url: "http://localhost".to_string(),
            root_dir: "/var/www/html".to_string(),
            live_url: None,
        }
    }
}

impl SiteConfig {
    pub fn new(root_url: impl Into<String>, root_dir: impl Into<String>) -> Self {
        Self {
            root_url: root_url.into(),
            root_dir: root_dir.into(),
            live_url: None,
        }
    }

    pub fn with_live_url(mut self, live_url: impl Into<String>) -> Self {
        self.live_url = Some(live_url.into());
        self
    }

    /// Parse a config from TOML text.
    pub fn from_toml_str(data: &str) -> Result<Self> {
        let cfg: SiteConfig = toml::from_str(data).context("invalid siteurl config")?;
        Ok(cfg)
    }

    /// Returns the live base URL, or [`ToolkitError::MissingLiveUrl`] when it is
    /// absent or blank.
    pub fn live_url(&self) -> Result<&str, ToolkitError> {
        match self.live_url.as_deref() {
            Some(live) if !live.trim().is_empty() => Ok(live),
            _ => {
                tracing::error!("live_url must be defined in the siteurl config");
                Err(ToolkitError::MissingLiveUrl)
            }
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("siteurl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SiteConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SiteConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<SiteConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    SiteConfig::from_toml_str(&data).with_context(|| format!("in {}", path.display()))
}
