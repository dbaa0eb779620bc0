//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality including:
//! - Route and label lookup tables
//! - Catalog file loading
//! - Display defaults
//!
//! Internal implementation details are not exposed through this API.

// Lookup tables
pub use super::catalog::{Catalog, LabelTable, RouteTable};

// Catalog files
pub use super::settings::{
    load_or_default, load_settings, locate_config_file, parse_catalog_file,
    validate_catalog_file, CatalogFile, DisplaySettings, Settings,
};

// Configuration
pub use super::config::get_max_items;
pub use super::config::{CONFIG_ENV_VAR, DEFAULT_MAX_ITEMS, DEFAULT_SEPARATOR, HOME_ID, HOME_LABEL};
