//! Breadcrumb trails: data model, construction, truncation and rendering

mod builder;
mod item;
mod render;
mod truncate;


pub use builder::{BreadcrumbTrailBuilder, PageKind};
pub use item::TrailItem;
pub use render::{render_text, render_truncated, to_json_ld};
pub use truncate::{truncate, TruncationResult};

/// Ordered items from the root to the current page
pub type Trail = Vec<TrailItem>;
