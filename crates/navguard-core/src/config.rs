use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Classifier endpoint used when the config does not name one (local development server).
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/predict";

/// What to do with a navigation when the classifier cannot produce a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Fail open: let the navigation proceed unmodified.
    #[default]
    Allow,
    /// Fail closed: send the tab to the warning page.
    Warn,
}

/// Where the bundled warning page lives (`[warning_page]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningPageConfig {
    /// Base locator of the extension package, e.g. `chrome-extension://<id>/`.
    pub extension_base: String,
    /// Path of the warning page inside the package.
    pub resource: String,
}

impl Default for WarningPageConfig {
    fn default() -> Self {
        Self {
            extension_base: "chrome-extension://navguard/".to_string(),
            resource: "warning.html".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/navguard/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Phishing classifier endpoint receiving `POST {"url": ...}`.
    pub endpoint: String,
    /// Policy applied when the classifier is unreachable or answers garbage.
    #[serde(default)]
    pub on_error: FailurePolicy,
    #[serde(default)]
    pub warning_page: WarningPageConfig,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            on_error: FailurePolicy::default(),
            warning_page: WarningPageConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("navguard")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GuardConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<GuardConfig> {
    if !path.exists() {
        let default_cfg = GuardConfig::default();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, render(&default_cfg)?)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(path)
}

/// Parse an existing config file.
pub fn load_from(path: &Path) -> Result<GuardConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: GuardConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}

/// Serialize a config the way it is written to disk.
pub fn render(cfg: &GuardConfig) -> Result<String> {
    Ok(toml::to_string_pretty(cfg)?)
}
