//! Locating the warning page bundled with the extension.
//!
//! The redirect target is not a network URL: it is a resource inside the
//! extension package, addressed relative to the package's base locator the
//! host hands out at runtime (`runtime.getURL` in a browser).

use anyhow::{Context, Result};
use url::Url;

use crate::config::WarningPageConfig;

/// Host mechanism turning a packaged resource path into a loadable locator.
pub trait ResourceResolver: Send + Sync {
    fn get_url(&self, resource: &str) -> Result<String>;
}

/// Resolves resources by joining them onto the extension's base locator.
#[derive(Debug, Clone)]
pub struct ExtensionBase {
    base: Url,
}

impl ExtensionBase {
    pub fn new(base: &str) -> Result<Self> {
        let mut base =
            Url::parse(base).with_context(|| format!("invalid extension base {base:?}"))?;
        if base.cannot_be_a_base() {
            anyhow::bail!("extension base {base} cannot hold resources");
        }
        // Join replaces the last segment unless the base ends in '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base })
    }
}

impl ResourceResolver for ExtensionBase {
    fn get_url(&self, resource: &str) -> Result<String> {
        let url = self
            .base
            .join(resource.trim_start_matches('/'))
            .with_context(|| format!("cannot resolve resource {resource:?} against {}", self.base))?;
        Ok(url.into())
    }
}

/// Resolved locator of the warning page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarningPage {
    locator: String,
}

impl WarningPage {
    pub fn resolve(resolver: &dyn ResourceResolver, resource: &str) -> Result<Self> {
        let locator = resolver.get_url(resource)?;
        Ok(Self { locator })
    }

    pub fn from_config(cfg: &WarningPageConfig) -> Result<Self> {
        let base = ExtensionBase::new(&cfg.extension_base)?;
        Self::resolve(&base, &cfg.resource)
    }

    pub fn locator(&self) -> &str {
        &self.locator
    }
}
