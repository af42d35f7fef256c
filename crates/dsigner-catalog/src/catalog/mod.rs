//! Product catalogs.
//!
//! Each product line is a fixed, ordered list. The order is the display
//! order and the tie-breaker for every sort.

mod designer;
mod escort;
mod image;

pub use designer::{designer_catalog, DesignerCategory, DesignerProduct, StrapMaterial};
pub use escort::{escort_catalog, EscortProduct, EscortStyle};
pub use image::ImageRef;

use std::collections::HashSet;

use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::money::Money;

/// A category value that can be selected from a query string.
pub trait CategoryKey: Copy + Eq + 'static {
    /// Every value, in display order.
    const ALL: &'static [Self];

    /// Query-string token.
    fn as_str(&self) -> &'static str;

    /// Parse a query-string token (case-insensitive).
    fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
    }
}

/// Which view operations a catalog supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewCapabilities {
    /// Category filtering changes the result.
    pub filters: bool,
    /// Sort keys change the result.
    pub sorts: bool,
}

/// Field access needed to filter and sort a product.
pub trait CatalogItem {
    /// Category type selectable for this product line.
    type Category: CategoryKey;

    /// What the view controller applies for this product line.
    const CAPABILITIES: ViewCapabilities;

    fn id(&self) -> ProductId;
    fn name(&self) -> &str;
    fn price(&self) -> Money;
    fn image(&self) -> &ImageRef;

    /// Category of this product, if the line is categorized per product.
    fn category(&self) -> Option<Self::Category>;

    /// Popularity score, higher is more popular.
    fn popularity(&self) -> u32 {
        0
    }
}

/// An ordered, read-only product list.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<T> {
    items: Vec<T>,
}

impl<T: CatalogItem> Catalog<T> {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(items: Vec<T>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(CatalogError::DuplicateId(item.id()));
            }
        }
        Ok(Self { items })
    }

    /// All products in catalog order.
    pub fn list(&self) -> &[T] {
        &self.items
    }

    /// Find a product by id.
    pub fn find(&self, id: ProductId) -> Option<&T> {
        self.items.iter().find(|p| p.id() == id)
    }

    /// Get a product by id.
    pub fn get(&self, id: ProductId) -> Result<&T, CatalogError> {
        self.find(id).ok_or(CatalogError::ProductNotFound(id))
    }

    /// Whether a product with this id exists.
    pub fn contains(&self, id: ProductId) -> bool {
        self.find(id).is_some()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Count products in a category.
    pub fn count_in(&self, category: T::Category) -> usize {
        self.items
            .iter()
            .filter(|p| p.category() == Some(category))
            .count()
    }
}

impl<T> Catalog<T> {
    /// Seed lists are known to be unique.
    pub(crate) fn from_seed(items: Vec<T>) -> Self {
        Self { items }
    }
}
