//! String forms of a trail for terminals and structured-data consumers

use serde_json::{json, Value};

use crate::core::catalog::RouteTable;
use crate::core::config::COLLAPSED_MARKER;

use super::truncate::TruncationResult;
use super::TrailItem;

/// Joins display names with `separator`
pub fn render_text(trail: &[TrailItem], separator: &str) -> String {
    trail
        .iter()
        .map(|item| item.display_name.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Like [`render_text`], with a marker standing in for hidden items
pub fn render_truncated(result: &TruncationResult, separator: &str) -> String {
    if !result.collapsed {
        return render_text(&result.visible, separator);
    }

    let mut parts: Vec<&str> = result
        .visible
        .iter()
        .map(|item| item.display_name.as_str())
        .collect();
    // Hidden items always come from between the last kept middle item and the tail
    let marker_at = parts.len().saturating_sub(1);
    parts.insert(marker_at, COLLAPSED_MARKER);
    parts.join(separator)
}

/// schema.org `BreadcrumbList` for the trail
///
/// Items that resolve to a link carry an absolute `item` URL; the active
/// item and non-navigable items carry only their name.
pub fn to_json_ld(trail: &[TrailItem], routes: &RouteTable, base_url: &str) -> Value {
    let base_url = base_url.trim_end_matches('/');

    let elements: Vec<Value> = trail
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let mut element = json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": item.display_name,
            });
            if let Some(href) = routes.href_for(item) {
                element["item"] = Value::String(format!("{base_url}{href}"));
            }
            element
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}
