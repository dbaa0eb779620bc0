//! Integration tests for location and page trails
//!
//! Covers the documented scenarios plus the structural guarantees every
//! trail constructor makes:
//! - totality: any segment list yields a non-empty trail
//! - exactly one active item, always last
//! - the home anchor comes first

mod common;
use common::names;

use storefront_trail::core::Catalog;
use storefront_trail::trail::{BreadcrumbTrailBuilder, PageKind, TrailItem};
use storefront_trail::utils::{split_location, validate_trail};

fn assert_well_formed(trail: &[TrailItem], context: &str) {
    assert!(!trail.is_empty(), "empty trail for {context}");
    assert_eq!(trail[0].id, "home", "first item is not home for {context}");
    let active: Vec<usize> = trail
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_active)
        .map(|(index, _)| index)
        .collect();
    assert_eq!(active, vec![trail.len() - 1], "active items for {context}");
    for item in trail {
        assert!(
            !item.display_name.trim().is_empty(),
            "blank label on {} for {context}",
            item.id
        );
    }
    validate_trail(trail).unwrap_or_else(|e| panic!("{context}: {e}"));
}

// ==============================================================================
// DOCUMENTED SCENARIOS
// ==============================================================================

#[test]
fn test_scenario_home() {
    let builder = BreadcrumbTrailBuilder::default();
    let trail = builder.build_for_location::<String>(&[]);
    assert_eq!(trail.len(), 1);
    assert_eq!(trail[0].id, "home");
    assert_eq!(trail[0].display_name, "Home");
    assert_eq!(trail[0].route_name.as_deref(), Some("home"));
    assert!(trail[0].is_active);
}

#[test]
fn test_scenario_products() {
    let builder = BreadcrumbTrailBuilder::default();
    let trail = builder.build_for_location(&split_location("/products"));
    assert_eq!(names(&trail), ["Home", "Products"]);
    assert!(trail[1].is_active);
}

#[test]
fn test_scenario_category() {
    let builder = BreadcrumbTrailBuilder::default();
    let trail = builder.build_for_location(&split_location("/products/line-array"));
    assert_eq!(names(&trail), ["Home", "Products", "Line Array"]);
    assert!(trail[2].is_active);
}

#[test]
fn test_scenario_product() {
    let builder = BreadcrumbTrailBuilder::default();
    let trail = builder.build_for_location(&split_location("/products/line-array/toa-hx5b"));
    assert_eq!(names(&trail), ["Home", "Products", "Line Array", "Toa Hx5b"]);
    assert!(!trail[2].is_active);
    assert!(trail[3].is_active);
}

// ==============================================================================
// STRUCTURAL GUARANTEES
// ==============================================================================

#[test]
fn test_every_location_yields_well_formed_trail() {
    let builder = BreadcrumbTrailBuilder::default();
    let vocabulary = [
        "products",
        "applications",
        "about",
        "contact",
        "line-array",
        "touring",
        "toa-hx5b",
        "HOME",
        "%20",
        "ünïcode",
        "-",
    ];

    // Every sequence of up to four segments drawn from the vocabulary
    let mut locations: Vec<Vec<&str>> = vec![Vec::new()];
    let mut frontier: Vec<Vec<&str>> = vec![Vec::new()];
    for _ in 0..4 {
        let mut next = Vec::new();
        for prefix in &frontier {
            for segment in vocabulary {
                let mut location = prefix.clone();
                location.push(segment);
                next.push(location);
            }
        }
        locations.extend(next.iter().cloned());
        frontier = next;
    }

    for location in &locations {
        let trail = builder.build_for_location(location);
        assert_well_formed(&trail, &format!("{location:?}"));
    }
}

#[test]
fn test_every_page_kind_yields_well_formed_trail() {
    let builder = BreadcrumbTrailBuilder::default();
    let inputs = ["", "  ", "-", " -- ", "home", "products", "line-array", "TOA HX-5B", "a--b"];

    for name in inputs {
        for slug in inputs {
            let pages = [
                PageKind::Product {
                    name: name.to_string(),
                    id: slug.to_string(),
                    category: "line-array".to_string(),
                },
                PageKind::Application {
                    name: name.to_string(),
                    slug: slug.to_string(),
                },
                PageKind::Category {
                    name: name.to_string(),
                    slug: slug.to_string(),
                    parent: Some("subwoofers".to_string()),
                },
                PageKind::Page {
                    name: name.to_string(),
                    id: slug.to_string(),
                },
            ];
            for page in &pages {
                assert_well_formed(&builder.build(page), &format!("{page:?}"));
            }
        }
    }
}

#[test]
fn test_location_trail_links_resolve() {
    let builder = BreadcrumbTrailBuilder::default();
    let routes = &Catalog::builtin().routes;
    let trail = builder.build_for_location(&split_location("/applications/live-sound"));

    let hrefs: Vec<Option<String>> = trail.iter().map(|item| routes.href_for(item)).collect();
    assert_eq!(
        hrefs,
        vec![Some("/".to_string()), Some("/applications".to_string()), None]
    );
}

#[test]
fn test_custom_catalog_labels() {
    let mut catalog = Catalog::defaults();
    catalog.categories.insert("line-array", "Line Arrays");
    catalog.applications.insert("touring", "Touring & Rental");

    let builder = BreadcrumbTrailBuilder::new(&catalog);
    assert_eq!(
        names(&builder.build_for_location(&["products", "line-array"])),
        ["Home", "Products", "Line Arrays"]
    );
    assert_eq!(
        names(&builder.build_for_location(&["applications", "touring"])),
        ["Home", "Applications", "Touring & Rental"]
    );
}
