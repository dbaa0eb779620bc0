//! Catalog file loading
//!
//! A catalog file is TOML with optional `[routes]`, `[categories]`,
//! `[applications]`, `[pages]`, `[products]` and `[display]` tables. Every
//! table merges over the built-in catalog, so a file only has to name what
//! it changes.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::core::catalog::Catalog;
use crate::core::config::{CONFIG_DIR_NAME, CONFIG_ENV_VAR, CONFIG_FILE_NAME, DEFAULT_BASE_URL, DEFAULT_SEPARATOR};
use crate::utils::{is_valid_slug, sanitize_label};

/// Raw contents of a catalog file
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogFile {
    pub routes: BTreeMap<String, String>,
    pub categories: BTreeMap<String, String>,
    pub applications: BTreeMap<String, String>,
    pub pages: BTreeMap<String, String>,
    pub products: BTreeMap<String, String>,
    pub display: DisplaySettings,
}

/// `[display]` table
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplaySettings {
    pub max_items: Option<usize>,
    pub separator: Option<String>,
    pub base_url: Option<String>,
}

impl DisplaySettings {
    pub fn separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

/// A loaded catalog together with display preferences
#[derive(Debug, Clone)]
pub struct Settings {
    pub catalog: Catalog,
    pub display: DisplaySettings,
    /// File the settings came from; `None` for built-in defaults
    pub source: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: Catalog::builtin().clone(),
            display: DisplaySettings::default(),
            source: None,
        }
    }
}

impl CatalogFile {
    /// Layers this file over `base`, producing a new catalog
    pub fn merge_into(&self, base: &Catalog) -> Catalog {
        let mut catalog = base.clone();
        for (name, path) in &self.routes {
            catalog.routes.insert(name.as_str(), path.as_str());
        }
        for (slug, label) in &self.categories {
            catalog.categories.insert(slug.as_str(), sanitize_label(label));
        }
        for (slug, label) in &self.applications {
            catalog.applications.insert(slug.as_str(), sanitize_label(label));
        }
        for (slug, label) in &self.pages {
            catalog.pages.insert(slug.as_str(), sanitize_label(label));
        }
        for (slug, label) in &self.products {
            catalog.products.insert(slug.as_str(), sanitize_label(label));
        }
        catalog
    }
}

/// Parses catalog TOML without validating it
pub fn parse_catalog_file(content: &str) -> Result<CatalogFile> {
    toml::from_str(content).context("Failed to parse catalog file")
}

/// Checks a parsed catalog file for values the builder cannot use
pub fn validate_catalog_file(file: &CatalogFile) -> Result<()> {
    for (name, path) in &file.routes {
        if name.trim().is_empty() {
            return Err(anyhow::anyhow!("Route name cannot be empty"));
        }
        if !path.starts_with('/') {
            return Err(anyhow::anyhow!(
                "Route '{}' has path '{}' which does not start with '/'",
                name,
                path
            ));
        }
    }

    let labelled = [
        ("categories", &file.categories),
        ("applications", &file.applications),
        ("pages", &file.pages),
        ("products", &file.products),
    ];
    for (table, entries) in labelled {
        for (slug, label) in entries {
            if !is_valid_slug(slug) {
                return Err(anyhow::anyhow!("Invalid slug in [{}]: '{}'", table, slug));
            }
            if sanitize_label(label).is_empty() {
                return Err(anyhow::anyhow!("Label for '{}' in [{}] cannot be empty", slug, table));
            }
        }
    }

    if file.display.max_items == Some(0) {
        return Err(anyhow::anyhow!("[display] max_items must be at least 1"));
    }
    if let Some(base_url) = &file.display.base_url {
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(anyhow::anyhow!("Invalid base_url: {}", base_url));
        }
    }

    Ok(())
}

/// Reads, validates and merges a catalog file over the built-in catalog
pub fn load_settings(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
    let file = parse_catalog_file(&content)
        .with_context(|| format!("Invalid catalog file {}", path.display()))?;
    validate_catalog_file(&file)
        .with_context(|| format!("Invalid catalog file {}", path.display()))?;

    let catalog = file.merge_into(Catalog::builtin());
    tracing::info!(
        path = %path.display(),
        routes = catalog.routes.len(),
        categories = catalog.categories.len(),
        applications = catalog.applications.len(),
        products = catalog.products.len(),
        "loaded catalog file"
    );

    Ok(Settings {
        catalog,
        display: file.display,
        source: Some(path.to_path_buf()),
    })
}

/// Finds the catalog file to use
///
/// Priority order:
/// 1. explicit path (--config)
/// 2. STOREFRONT_TRAIL_CONFIG env var
/// 3. <config dir>/storefront-trail/config.toml, if it exists
pub fn locate_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(from_env) = std::env::var(CONFIG_ENV_VAR) {
        if !from_env.trim().is_empty() {
            return Some(PathBuf::from(from_env));
        }
    }

    let default_path = dirs::config_dir()?.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
    default_path.is_file().then_some(default_path)
}

/// Loads the located catalog file, or the built-in defaults when none exists
pub fn load_or_default(explicit: Option<&Path>) -> Result<Settings> {
    match locate_config_file(explicit) {
        Some(path) => load_settings(&path),
        None => {
            tracing::debug!("no catalog file found, using built-in catalog");
            Ok(Settings::default())
        }
    }
}
