//! Trail command implementations
//!
//! These commands build a trail (from a location or a page description),
//! fit it into the display budget and print it as text, JSON or JSON-LD.

use anyhow::{Context, Result};
use serde::Serialize;
use std::str::FromStr;

use crate::core::{get_max_items, Settings};
use crate::trail::{
    render_truncated, to_json_ld, truncate, BreadcrumbTrailBuilder, PageKind, TrailItem,
};
use crate::utils::split_location;

/// How command output is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    JsonLd,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "json-ld" => Ok(OutputFormat::JsonLd),
            other => Err(anyhow::anyhow!("Unknown output format: {}", other)),
        }
    }
}

/// Flags shared by every trail command
#[derive(Debug, Clone, Default)]
pub struct TrailOptions {
    pub format: OutputFormat,
    /// --max-items override
    pub max_items: Option<usize>,
}

/// Visible item with its resolved link
#[derive(Serialize)]
struct RenderedItem<'a> {
    #[serde(flatten)]
    item: &'a TrailItem,
    href: Option<String>,
}

#[derive(Serialize)]
struct RenderedTrail<'a> {
    trail: &'a [TrailItem],
    visible: Vec<RenderedItem<'a>>,
    hidden: &'a [TrailItem],
    collapsed: bool,
    max_items: usize,
}

/// Formats a trail according to the options and display settings
pub fn format_trail(trail: &[TrailItem], settings: &Settings, options: &TrailOptions) -> Result<String> {
    let max_items = get_max_items(options.max_items, settings.display.max_items);
    let routes = &settings.catalog.routes;

    match options.format {
        OutputFormat::Text => {
            let result = truncate(trail, max_items);
            Ok(render_truncated(&result, settings.display.separator()))
        }
        OutputFormat::Json => {
            let result = truncate(trail, max_items);
            let rendered = RenderedTrail {
                trail,
                visible: result
                    .visible
                    .iter()
                    .map(|item| RenderedItem {
                        item,
                        href: routes.href_for(item),
                    })
                    .collect(),
                hidden: &result.hidden,
                collapsed: result.collapsed,
                max_items,
            };
            serde_json::to_string_pretty(&rendered).context("Failed to serialize trail")
        }
        OutputFormat::JsonLd => {
            // Structured data always describes the full trail
            let value = to_json_ld(trail, routes, settings.display.base_url());
            serde_json::to_string_pretty(&value).context("Failed to serialize JSON-LD")
        }
    }
}

/// Handles `trail location <PATH>`
pub fn handle_location_command(location: &str, settings: &Settings, options: &TrailOptions) -> Result<()> {
    let segments = split_location(location);
    tracing::debug!(location, ?segments, "building trail for location");

    let builder = BreadcrumbTrailBuilder::new(&settings.catalog);
    let trail = builder.build_for_location(&segments);
    println!("{}", format_trail(&trail, settings, options)?);
    Ok(())
}

/// Handles `trail product|application|category|page`
pub fn handle_page_command(page: &PageKind, settings: &Settings, options: &TrailOptions) -> Result<()> {
    tracing::debug!(?page, "building trail for page");

    let builder = BreadcrumbTrailBuilder::new(&settings.catalog);
    let trail = builder.build(page);
    println!("{}", format_trail(&trail, settings, options)?);
    Ok(())
}

/// Formats the result of a route lookup
pub fn format_resolved(route_name: &str, path: Option<&str>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(match path {
            Some(path) => path.to_string(),
            None => format!("{route_name}: no route (rendered as text)"),
        }),
        OutputFormat::Json | OutputFormat::JsonLd => {
            let value = serde_json::json!({ "route": route_name, "path": path });
            serde_json::to_string_pretty(&value).context("Failed to serialize route")
        }
    }
}

/// Handles `trail resolve <ROUTE_NAME>`
///
/// An unknown route is a normal answer, not a failure.
pub fn handle_resolve_command(route_name: &str, settings: &Settings, format: OutputFormat) -> Result<()> {
    let path = settings.catalog.resolve_route_path(route_name);
    println!("{}", format_resolved(route_name, path, format)?);
    Ok(())
}
