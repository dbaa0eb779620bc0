//! Breadcrumb trail construction
//!
//! Every constructor here is total: any input, however malformed, produces a
//! non-empty trail whose only active item is the last one.

use crate::core::catalog::Catalog;
use crate::core::config::{
    APPLICATIONS_LABEL, APPLICATIONS_SEGMENT, APPLICATION_ID_PREFIX, CATEGORY_ROUTE, HOME_ID,
    HOME_LABEL, HOME_ROUTE, PAGE_ID_PREFIX, PRODUCTS_LABEL, PRODUCTS_SEGMENT, PRODUCT_ROUTE,
    STANDALONE_PAGES,
};
use crate::utils::{sanitize_label, slug_to_title};

use super::truncate::{truncate, TruncationResult};
use super::{Trail, TrailItem};

/// Page types with a dedicated trail shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageKind {
    Product {
        name: String,
        id: String,
        category: String,
    },
    Application {
        name: String,
        slug: String,
    },
    Category {
        name: String,
        slug: String,
        parent: Option<String>,
    },
    Page {
        name: String,
        id: String,
    },
}

/// Builds breadcrumb trails against a catalog
#[derive(Debug, Clone, Copy)]
pub struct BreadcrumbTrailBuilder<'a> {
    catalog: &'a Catalog,
}

impl Default for BreadcrumbTrailBuilder<'static> {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl<'a> BreadcrumbTrailBuilder<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Derives the trail for the current location
    ///
    /// `segments` are the already-split, non-empty path segments. Shapes
    /// that match no rule degrade to the home-only trail.
    pub fn build_for_location<S: AsRef<str>>(&self, segments: &[S]) -> Trail {
        let segments: Vec<&str> = segments.iter().map(AsRef::as_ref).collect();

        let trail = match segments.as_slice() {
            [] => None,
            [PRODUCTS_SEGMENT, rest @ ..] => self.products_trail(rest),
            [APPLICATIONS_SEGMENT, rest @ ..] => self.applications_trail(rest),
            [page] if STANDALONE_PAGES.contains(page) => {
                Some(vec![self.home(), self.page_item(page).active()])
            }
            _ => None,
        };

        trail.unwrap_or_else(|| {
            if !segments.is_empty() {
                tracing::debug!(?segments, "unrecognised location, using home trail");
            }
            self.home_only()
        })
    }

    fn products_trail(&self, rest: &[&str]) -> Option<Trail> {
        let section = self.products_item();
        match rest {
            [] => Some(vec![self.home(), section.active()]),
            [category] => Some(vec![self.home(), section, self.category_item(category).active()]),
            [category, product] => {
                let label = self.product_label(product);
                Some(vec![
                    self.home(),
                    section,
                    self.category_item(category),
                    product_item(product, &label, category).active(),
                ])
            }
            _ => None,
        }
    }

    fn applications_trail(&self, rest: &[&str]) -> Option<Trail> {
        let section = self.applications_item();
        match rest {
            [] => Some(vec![self.home(), section.active()]),
            [application] => Some(vec![
                self.home(),
                section,
                self.application_item(application).active(),
            ]),
            [application, leaf] => Some(vec![
                self.home(),
                section,
                self.application_item(application),
                TrailItem::new(
                    format!("{APPLICATION_ID_PREFIX}:{application}:{leaf}"),
                    self.product_label(leaf),
                )
                .active(),
            ]),
            _ => None,
        }
    }

    /// `[Home, Products, <category>, <product>]`
    ///
    /// A blank category omits the category node. With no usable label the
    /// home-only trail is returned.
    pub fn build_for_product(&self, product_name: &str, product_id: &str, category: &str) -> Trail {
        let category = category.trim();
        let Some(label) = label_or_title(product_name, product_id) else {
            return self.home_only();
        };

        let mut trail = vec![self.home(), self.products_item()];
        if !category.is_empty() {
            trail.push(self.category_item(category));
        }
        trail.push(product_item(product_id, &label, category).active());
        trail
    }

    /// `[Home, Applications, <application>]`
    pub fn build_for_application(&self, application_name: &str, application_slug: &str) -> Trail {
        let Some(label) = label_or_title(application_name, application_slug) else {
            return self.home_only();
        };
        vec![
            self.home(),
            self.applications_item(),
            application_node(application_slug, &label).active(),
        ]
    }

    /// `[Home, Products, <parent>?, <category>]`
    ///
    /// The parent is skipped when it is blank or names the category itself.
    pub fn build_for_category(
        &self,
        category_name: &str,
        category_slug: &str,
        parent_category: Option<&str>,
    ) -> Trail {
        let Some(label) = label_or_title(category_name, category_slug) else {
            return self.home_only();
        };

        let mut trail = vec![self.home(), self.products_item()];
        if let Some(parent) = parent_category.map(str::trim) {
            if !parent.is_empty() && parent != category_slug {
                trail.push(self.category_item(parent));
            }
        }
        trail.push(category_node(category_slug, &label).active());
        trail
    }

    /// `[Home, <page>]`, or the home-only trail for the home page itself
    ///
    /// The page links only when its id is a registered route name.
    pub fn build_for_page(&self, page_name: &str, page_id: &str) -> Trail {
        if page_id == HOME_ID {
            return self.home_only();
        }
        let Some(label) = label_or_title(page_name, page_id) else {
            return self.home_only();
        };
        let mut page = TrailItem::new(format!("{PAGE_ID_PREFIX}:{page_id}"), label).active();
        if self.catalog.routes.resolve(page_id).is_some() {
            page.route_name = Some(page_id.to_string());
        }
        vec![self.home(), page]
    }

    /// Dispatches to the constructor for `page`
    pub fn build(&self, page: &PageKind) -> Trail {
        match page {
            PageKind::Product { name, id, category } => self.build_for_product(name, id, category),
            PageKind::Application { name, slug } => self.build_for_application(name, slug),
            PageKind::Category { name, slug, parent } => {
                self.build_for_category(name, slug, parent.as_deref())
            }
            PageKind::Page { name, id } => self.build_for_page(name, id),
        }
    }

    /// Collapses `trail` to `max_items`; see [`truncate`]
    pub fn truncate(&self, trail: &[TrailItem], max_items: usize) -> TruncationResult {
        truncate(trail, max_items)
    }

    pub fn resolve_route_path(&self, route_name: &str) -> Option<&'a str> {
        self.catalog.routes.resolve(route_name)
    }

    fn home(&self) -> TrailItem {
        TrailItem::new(HOME_ID, HOME_LABEL).with_route(HOME_ROUTE)
    }

    fn home_only(&self) -> Trail {
        vec![self.home().active()]
    }

    fn products_item(&self) -> TrailItem {
        TrailItem::new(PRODUCTS_SEGMENT, PRODUCTS_LABEL).with_route(PRODUCTS_SEGMENT)
    }

    fn applications_item(&self) -> TrailItem {
        TrailItem::new(APPLICATIONS_SEGMENT, APPLICATIONS_LABEL).with_route(APPLICATIONS_SEGMENT)
    }

    fn category_item(&self, slug: &str) -> TrailItem {
        category_node(slug, self.catalog.categories.label_or_slug(slug))
    }

    fn application_item(&self, slug: &str) -> TrailItem {
        application_node(slug, self.catalog.applications.label_or_slug(slug))
    }

    fn page_item(&self, slug: &str) -> TrailItem {
        let label = self.catalog.pages.label_or_slug(slug);
        TrailItem::new(format!("{PAGE_ID_PREFIX}:{slug}"), label).with_route(slug)
    }

    /// Catalog product name when known, otherwise the title-cased slug
    ///
    /// A slug made only of dashes title-cases to blanks and is kept verbatim.
    fn product_label(&self, slug: &str) -> String {
        if let Some(label) = self.catalog.products.get(slug) {
            return label.to_string();
        }
        let title = slug_to_title(slug);
        if title.trim().is_empty() {
            slug.to_string()
        } else {
            title
        }
    }
}

// Slug-derived ids are namespaced so a category named "products" cannot
// collide with the section item. Applications route by their own slug, so
// only registered applications link.
fn category_node(slug: &str, label: &str) -> TrailItem {
    TrailItem::new(format!("{CATEGORY_ROUTE}:{slug}"), label)
        .with_route(CATEGORY_ROUTE)
        .with_params([slug])
}

fn application_node(slug: &str, label: &str) -> TrailItem {
    TrailItem::new(format!("{APPLICATION_ID_PREFIX}:{slug}"), label).with_route(slug)
}

fn product_item(product_id: &str, label: &str, category: &str) -> TrailItem {
    TrailItem::new(format!("{PRODUCT_ROUTE}:{product_id}"), label)
        .with_route(PRODUCT_ROUTE)
        .with_params([category, product_id])
}

/// Sanitized name, else the title-cased slug; `None` when both are blank
fn label_or_title(name: &str, fallback_slug: &str) -> Option<String> {
    let label = sanitize_label(name);
    if !label.is_empty() {
        return Some(label);
    }
    let title = slug_to_title(fallback_slug);
    if title.trim().is_empty() {
        tracing::debug!(fallback_slug, "no usable label, using home trail");
        None
    } else {
        Some(title)
    }
}
