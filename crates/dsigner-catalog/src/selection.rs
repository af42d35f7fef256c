//! Detail-view selection.

use crate::catalog::{Catalog, CatalogItem};
use crate::ids::ProductId;

/// Which product, if any, is open in the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Closed,
    Open(ProductId),
}

impl Selection {
    /// Resolve a raw `selected` value against a catalog.
    ///
    /// Missing, malformed, or unknown ids give `Closed`.
    pub fn resolve<T: CatalogItem>(catalog: &Catalog<T>, raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse::<ProductId>().ok())
            .filter(|id| catalog.contains(*id))
            .map(Selection::Open)
            .unwrap_or(Selection::Closed)
    }

    /// Open a product, replacing any current selection.
    pub fn select(self, id: ProductId) -> Self {
        Selection::Open(id)
    }

    /// Close the detail view.
    pub fn dismiss(self) -> Self {
        Selection::Closed
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }

    /// Id of the open product.
    pub fn selected_id(&self) -> Option<ProductId> {
        match self {
            Selection::Open(id) => Some(*id),
            Selection::Closed => None,
        }
    }

    /// The open product, looked up in a catalog.
    pub fn product<'a, T: CatalogItem>(&self, catalog: &'a Catalog<T>) -> Option<&'a T> {
        self.selected_id().and_then(|id| catalog.find(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::designer_catalog;

    #[test]
    fn test_select_replaces() {
        let s = Selection::Closed
            .select(ProductId::new(1))
            .select(ProductId::new(2));
        assert_eq!(s, Selection::Open(ProductId::new(2)));
    }

    #[test]
    fn test_dismiss() {
        let s = Selection::Closed.select(ProductId::new(3)).dismiss();
        assert_eq!(s, Selection::Closed);
        assert!(!s.is_open());
        assert_eq!(Selection::Closed.dismiss(), Selection::Closed);
    }

    #[test]
    fn test_resolve() {
        let catalog = designer_catalog();
        assert_eq!(
            Selection::resolve(&catalog, Some("3")),
            Selection::Open(ProductId::new(3))
        );
        assert_eq!(Selection::resolve(&catalog, Some("104")), Selection::Closed);
        assert_eq!(Selection::resolve(&catalog, Some("x")), Selection::Closed);
        assert_eq!(Selection::resolve(&catalog, None), Selection::Closed);
    }

    #[test]
    fn test_product_lookup() {
        let catalog = designer_catalog();
        let s = Selection::Open(ProductId::new(6));
        assert_eq!(s.product(&catalog).map(|p| p.name.as_str()), Some("Elite Midnight"));
        assert!(Selection::Closed.product(&catalog).is_none());
    }
}
