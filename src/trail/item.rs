//! Trail item data model

use serde::{Deserialize, Serialize};

/// One entry in a breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailItem {
    /// Unique within one trail
    pub id: String,
    pub display_name: String,
    /// Symbolic route; `None` marks a non-navigable item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_name: Option<String>,
    /// Values for the `:placeholder` segments of the route path, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub route_params: Vec<String>,
    /// Opaque icon handle, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl TrailItem {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            route_name: None,
            route_params: Vec::new(),
            icon: None,
            is_active: false,
        }
    }

    pub fn with_route(mut self, route_name: impl Into<String>) -> Self {
        self.route_name = Some(route_name.into());
        self
    }

    pub fn with_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.route_params = params.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Marks this item as the current page
    pub fn active(mut self) -> Self {
        self.is_active = true;
        self
    }

    /// Whether a renderer may turn this item into a link
    pub fn is_navigable(&self) -> bool {
        !self.is_active && self.route_name.is_some()
    }
}
