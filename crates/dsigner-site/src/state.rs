//! Per-request page state read from the query string.

use dsigner_catalog::prelude::*;
use dsigner_core::QueryParams;

use crate::html::with_query;

/// Interaction state carried in the URL.
///
/// Every field is parsed fail-soft: unknown or malformed values fall back
/// to their defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    /// Designer category tab (`?category=`).
    pub designer: FilterSortState<DesignerCategory>,
    /// Escort style tab and sort order (`?style=`, `?sort=`).
    pub escort: FilterSortState<EscortStyle>,
    /// Raw `?selected=` value, resolved against the Designer catalog.
    pub selected: Option<String>,
    /// Testimonial slide (`?slide=`).
    pub slide: usize,
}

impl PageState {
    pub fn from_query(query: &QueryParams) -> Self {
        Self {
            designer: FilterSortState::from_query(query.get("category"), None),
            escort: FilterSortState::from_query(query.get("style"), query.get("sort")),
            selected: query.get("selected").map(str::to_string),
            slide: query
                .get("slide")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(0),
        }
    }

    /// Resolve the detail selection against the Designer catalog.
    pub fn selection(&self, catalog: &Catalog<DesignerProduct>) -> Selection {
        Selection::resolve(catalog, self.selected.as_deref())
    }

    /// Designer URL for a category tab, with the detail view closed.
    pub fn designer_url(state: &FilterSortState<DesignerCategory>) -> String {
        with_query("/designer", &state.to_query("category"))
    }

    /// Designer URL with `selection` applied on top of the current tab.
    pub fn designer_url_with(&self, selection: Selection) -> String {
        let mut query = self.designer.to_query("category");
        if let Some(id) = selection.selected_id() {
            if !query.is_empty() {
                query.push('&');
            }
            query.push_str(&format!("selected={}", id));
        }
        with_query("/designer", &query)
    }

    /// Escort URL for a style tab and sort order.
    pub fn escort_url(state: &FilterSortState<EscortStyle>) -> String {
        with_query("/escort", &state.to_query("style"))
    }
}
