//! Static lookup tables consumed by the trail builder
//!
//! The built-in catalog is created once per process and never mutated. A
//! catalog file (see [`crate::core::settings`]) produces a new, equally
//! immutable catalog layered over the built-in one.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::core::config::{
    APPLICATIONS_SEGMENT, CATEGORY_ROUTE, HOME_ROUTE, PRODUCTS_SEGMENT, PRODUCT_ROUTE,
    ROUTE_PARAM_PREFIX,
};
use crate::trail::TrailItem;

static BUILTIN_CATALOG: OnceLock<Catalog> = OnceLock::new();

const BUILTIN_ROUTES: &[(&str, &str)] = &[
    (HOME_ROUTE, "/"),
    (PRODUCTS_SEGMENT, "/products"),
    (CATEGORY_ROUTE, "/products/:category"),
    (PRODUCT_ROUTE, "/products/:category/:product"),
    (APPLICATIONS_SEGMENT, "/applications"),
    // Application nodes route by slug; unregistered applications render as text
    ("live-sound", "/applications/live-sound"),
    ("touring", "/applications/touring"),
    ("installation", "/applications/installation"),
    ("houses-of-worship", "/applications/houses-of-worship"),
    ("corporate-events", "/applications/corporate-events"),
    ("stadiums", "/applications/stadiums"),
    ("about", "/about"),
    ("contact", "/contact"),
    ("cart", "/cart"),
    ("wishlist", "/wishlist"),
];

const BUILTIN_CATEGORIES: &[(&str, &str)] = &[
    ("line-array", "Line Array"),
    ("subwoofers", "Subwoofers"),
    ("point-source", "Point Source"),
    ("stage-monitors", "Stage Monitors"),
    ("amplifiers", "Amplifiers"),
    ("rigging", "Rigging Hardware"),
    ("accessories", "Accessories"),
];

const BUILTIN_APPLICATIONS: &[(&str, &str)] = &[
    ("live-sound", "Live Sound"),
    ("touring", "Touring"),
    ("installation", "Fixed Installation"),
    ("houses-of-worship", "Houses of Worship"),
    ("corporate-events", "Corporate Events"),
    ("stadiums", "Stadiums & Arenas"),
];

const BUILTIN_PAGES: &[(&str, &str)] = &[("about", "About Us"), ("contact", "Contact Us")];

/// Maps route names to concrete paths
///
/// A path may contain `:name` placeholder segments which are filled, in
/// order, from an item's route parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: BTreeMap<String, String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, route_name: impl Into<String>, path: impl Into<String>) {
        self.routes.insert(route_name.into(), path.into());
    }

    /// Looks up the path for a route name; `None` means "render as text"
    pub fn resolve(&self, route_name: &str) -> Option<&str> {
        self.routes.get(route_name).map(String::as_str)
    }

    /// Builds the link target for an item
    ///
    /// Active items never link. Items with no route, an unknown route, or a
    /// parameter count that does not match the path's placeholders are
    /// rendered as plain text.
    pub fn href_for(&self, item: &TrailItem) -> Option<String> {
        if !item.is_navigable() {
            return None;
        }
        let path = self.resolve(item.route_name.as_deref()?)?;
        fill_placeholders(path, &item.route_params)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

fn fill_placeholders(path: &str, params: &[String]) -> Option<String> {
    let mut params = params.iter();
    let filled: Option<Vec<&str>> = path
        .split('/')
        .map(|segment| {
            if segment.starts_with(ROUTE_PARAM_PREFIX) {
                params.next().map(String::as_str)
            } else {
                Some(segment)
            }
        })
        .collect();

    // Leftover parameters mean the item was built for a different route shape
    if params.next().is_some() {
        return None;
    }
    filled.map(|segments| segments.join("/"))
}

/// Slug → label lookup with verbatim fallback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    labels: BTreeMap<String, String>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, slug: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(slug.into(), label.into());
    }

    pub fn get(&self, slug: &str) -> Option<&str> {
        self.labels.get(slug).map(String::as_str)
    }

    /// Returns the label for `slug`, or the slug itself when unknown
    pub fn label_or_slug<'a>(&'a self, slug: &'a str) -> &'a str {
        match self.get(slug) {
            Some(label) => label,
            None => {
                tracing::debug!(slug, "no label registered, using raw slug");
                slug
            }
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for LabelTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut table = LabelTable::new();
        for (slug, label) in iter {
            table.insert(slug, label);
        }
        table
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for RouteTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut table = RouteTable::new();
        for (name, path) in iter {
            table.insert(name, path);
        }
        table
    }
}

/// All lookup data the builder reads
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub routes: RouteTable,
    pub categories: LabelTable,
    pub applications: LabelTable,
    pub pages: LabelTable,
    /// Real product names keyed by slug; preferred over the title-case fallback
    pub products: LabelTable,
}

impl Catalog {
    /// The process-wide built-in catalog
    pub fn builtin() -> &'static Catalog {
        BUILTIN_CATALOG.get_or_init(Catalog::defaults)
    }

    /// Builds a fresh copy of the built-in tables
    pub fn defaults() -> Self {
        Self {
            routes: BUILTIN_ROUTES.iter().copied().collect(),
            categories: BUILTIN_CATEGORIES.iter().copied().collect(),
            applications: BUILTIN_APPLICATIONS.iter().copied().collect(),
            pages: BUILTIN_PAGES.iter().copied().collect(),
            products: LabelTable::new(),
        }
    }

    /// Convenience wrapper around [`RouteTable::resolve`]
    pub fn resolve_route_path(&self, route_name: &str) -> Option<&str> {
        self.routes.resolve(route_name)
    }
}
