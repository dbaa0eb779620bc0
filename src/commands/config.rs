//! Catalog file check command implementation
//!
//! Loads a catalog file the same way every other command does and reports
//! what it contributes, so a broken file is caught before it is deployed.

use anyhow::Result;
use std::path::Path;

use crate::core::{load_settings, locate_config_file, Settings, DEFAULT_MAX_ITEMS};

/// Summarises loaded settings for the terminal
pub fn summarize_settings(settings: &Settings) -> String {
    let catalog = &settings.catalog;
    let source = match &settings.source {
        Some(path) => path.display().to_string(),
        None => "built-in catalog".to_string(),
    };

    let mut lines = vec![format!("✅ {source}")];
    lines.push(format!("   routes:       {}", catalog.routes.len()));
    lines.push(format!("   categories:   {}", catalog.categories.len()));
    lines.push(format!("   applications: {}", catalog.applications.len()));
    lines.push(format!("   pages:        {}", catalog.pages.len()));
    lines.push(format!("   products:     {}", catalog.products.len()));
    lines.push(format!(
        "   max items:    {}",
        settings.display.max_items.unwrap_or(DEFAULT_MAX_ITEMS)
    ));
    lines.push(format!("   separator:    {:?}", settings.display.separator()));
    lines.push(format!("   base url:     {}", settings.display.base_url()));
    lines.join("\n")
}

/// Handles `trail check-config [PATH]`
///
/// Fails when the file is missing, unparsable or invalid.
pub fn handle_check_config_command(path: Option<&Path>) -> Result<()> {
    let settings = match locate_config_file(path) {
        Some(path) => load_settings(&path)?,
        None => {
            println!("No catalog file found; using built-in catalog");
            Settings::default()
        }
    };

    println!("{}", summarize_settings(&settings));
    Ok(())
}
