//! Test fixtures and builders

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use storefront_trail::trail::TrailItem;

/// Builds a trail whose ids and display names are the given strings
///
/// The last item is marked active, as the builder would.
pub fn named_trail(names: &[&str]) -> Vec<TrailItem> {
    let last = names.len().saturating_sub(1);
    names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let item = TrailItem::new(*name, *name);
            if index == last {
                item.active()
            } else {
                item.with_route(*name)
            }
        })
        .collect()
}

pub fn ids(trail: &[TrailItem]) -> Vec<&str> {
    trail.iter().map(|item| item.id.as_str()).collect()
}

pub fn names(trail: &[TrailItem]) -> Vec<&str> {
    trail.iter().map(|item| item.display_name.as_str()).collect()
}

/// A catalog file in a temporary directory with automatic cleanup
pub struct CatalogFileBuilder {
    sections: Vec<(String, Vec<(String, String)>)>,
}

impl CatalogFileBuilder {
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// Add a `key = "value"` entry to `[section]`
    pub fn with_entry(mut self, section: &str, key: &str, value: &str) -> Self {
        match self.sections.iter_mut().find(|(name, _)| name == section) {
            Some((_, entries)) => entries.push((key.to_string(), format!("{value:?}"))),
            None => self
                .sections
                .push((section.to_string(), vec![(key.to_string(), format!("{value:?}"))])),
        }
        self
    }

    /// Add a raw (unquoted) value, e.g. an integer
    pub fn with_raw_entry(mut self, section: &str, key: &str, raw: &str) -> Self {
        match self.sections.iter_mut().find(|(name, _)| name == section) {
            Some((_, entries)) => entries.push((key.to_string(), raw.to_string())),
            None => self
                .sections
                .push((section.to_string(), vec![(key.to_string(), raw.to_string())])),
        }
        self
    }

    pub fn to_toml(&self) -> String {
        let mut content = String::new();
        for (section, entries) in &self.sections {
            content.push_str(&format!("[{section}]\n"));
            for (key, value) in entries {
                content.push_str(&format!("{key:?} = {value}\n"));
            }
            content.push('\n');
        }
        content
    }

    /// Writes `config.toml` into a fresh temporary directory
    pub fn write(&self) -> Result<(TempDir, PathBuf)> {
        let dir = TempDir::new()?;
        let path = write_file(dir.path(), "config.toml", &self.to_toml())?;
        Ok((dir, path))
    }
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, content)?;
    Ok(path)
}
