//! Derived catalog views.
//!
//! A view is the catalog filtered by the active category and stably sorted by
//! the sort key, restricted to what the product line supports.

mod filter;
mod sort;

pub use filter::CategoryFilter;
pub use sort::SortKey;

use crate::catalog::{Catalog, CatalogItem, CategoryKey};

/// Filter and sort selections for one catalog page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSortState<C> {
    pub active_category: CategoryFilter<C>,
    pub sort_key: SortKey,
}

impl<C> Default for FilterSortState<C> {
    fn default() -> Self {
        Self {
            active_category: CategoryFilter::All,
            sort_key: SortKey::default(),
        }
    }
}

impl<C: CategoryKey> FilterSortState<C> {
    /// Build from raw query values. Unknown values keep the defaults.
    pub fn from_query(category: Option<&str>, sort: Option<&str>) -> Self {
        Self {
            active_category: category.map(CategoryFilter::parse).unwrap_or_default(),
            sort_key: sort.and_then(SortKey::parse).unwrap_or_default(),
        }
    }

    /// Select a category.
    pub fn set_category(mut self, category: CategoryFilter<C>) -> Self {
        self.active_category = category;
        self
    }

    /// Select a sort key.
    pub fn set_sort(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self
    }

    /// Query string that reproduces this state, omitting defaults.
    pub fn to_query(&self, category_param: &str) -> String {
        let mut parts = Vec::new();
        if let CategoryFilter::Only(c) = self.active_category {
            parts.push(format!("{}={}", category_param, c.as_str()));
        }
        if self.sort_key != SortKey::default() {
            parts.push(format!("sort={}", self.sort_key.as_str()));
        }
        parts.join("&")
    }
}

/// Derive the visible product list.
///
/// The catalog is never mutated. Equal sort keys keep catalog order.
pub fn derive<'a, T: CatalogItem>(
    catalog: &'a Catalog<T>,
    state: &FilterSortState<T::Category>,
) -> Vec<&'a T> {
    let caps = T::CAPABILITIES;

    let mut items: Vec<&T> = catalog
        .list()
        .iter()
        .filter(|p| !caps.filters || state.active_category.matches(p.category()))
        .collect();

    if caps.sorts {
        state.sort_key.sort(&mut items);
    }

    items
}
