use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root every lookup URL is built from unless overridden.
pub const DEFAULT_BASE_URL: &str = "https://xkcd.com";

/// Which resolver strategy turns a comic reference into preview data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolverBackend {
    /// Structured `info.0.json` endpoint.
    #[default]
    Json,
    /// Scrape the rendered comic page for its image.
    Html,
}

/// Plugin configuration loaded from `~/.config/comiclink/config.toml` or handed
/// over by the host on a configuration change.
///
/// Snapshots are immutable once installed in a [`crate::config_store::ConfigStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Only trigger when the whole message is the comic URL.
    #[serde(alias = "StrictTrigger")]
    pub strict_trigger: bool,
    /// Emit per-message debug lines.
    #[serde(alias = "Debug")]
    pub debug: bool,
    /// Resolver strategy: "json" (default) or "html".
    pub resolver: ResolverBackend,
    /// Scheme and host the lookup URLs are built from.
    pub base_url: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            strict_trigger: false,
            debug: false,
            resolver: ResolverBackend::Json,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl PluginConfig {
    /// Rejects settings the resolvers cannot work with.
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.base_url)
            .with_context(|| format!("invalid base_url: {}", self.base_url))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            anyhow::bail!("base_url must be http or https, got {}", parsed.scheme());
        }
        if parsed.host_str().is_none() {
            anyhow::bail!("base_url has no host: {}", self.base_url);
        }
        Ok(())
    }
}

/// Host-side loader invoked when the plugin configuration changes.
pub trait ConfigSource {
    fn load_plugin_configuration(&self) -> Result<PluginConfig>;
}

/// Reads configuration from a TOML file on every change notification.
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    pub path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigSource for FileConfigSource {
    fn load_plugin_configuration(&self) -> Result<PluginConfig> {
        load_from(&self.path)
    }
}

impl ConfigSource for PluginConfig {
    fn load_plugin_configuration(&self) -> Result<PluginConfig> {
        self.validate()?;
        Ok(self.clone())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("comiclink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load and validate configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<PluginConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config file: {}", path.display()))?;
    let cfg: PluginConfig = toml::from_str(&data)
        .with_context(|| format!("parse config file: {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PluginConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PluginConfig::default();
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
