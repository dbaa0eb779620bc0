//! # storefront-trail
//!
//! `storefront-trail` derives breadcrumb trails for the pro-audio storefront.
//! It powers the `trail` CLI tool.
//!
//! ## Core Features
//!
//! - **Location trails**: Map a location such as `/products/line-array/toa-hx5b` to an ordered trail.
//! - **Page constructors**: Build trails for product, application, category and generic pages.
//! - **Truncation**: Collapse long trails while keeping the home and current-page anchors.
//! - **Route lookup**: Resolve symbolic route names to paths, or report them as plain text.
//! - **Catalog files**: Override labels and routes from TOML without rebuilding.
//!
//! ## Example
//!
//! ```rust
//! use storefront_trail::trail::{render_text, BreadcrumbTrailBuilder};
//!
//! let builder = BreadcrumbTrailBuilder::default();
//! let trail = builder.build_for_location(&["products", "line-array", "toa-hx5b"]);
//! assert_eq!(render_text(&trail, " / "), "Home / Products / Line Array / Toa Hx5b");
//!
//! let shown = builder.truncate(&trail, 3);
//! assert!(shown.collapsed);
//! ```

pub mod commands;
pub mod core;
pub mod trail;
pub mod utils;
