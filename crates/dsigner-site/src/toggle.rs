//! Wishlist toggle endpoint.
//!
//! Product cards post `id` and `return_to` as a form. The workload applies
//! the toggle and answers with a 303 back to `return_to`.

use dsigner_cache::{CacheError, KeyValueStore, WishlistStore};
use dsigner_catalog::prelude::*;
use dsigner_core::QueryParams;

use crate::error::SiteError;

/// Path the wishlist forms post to.
pub const TOGGLE_PATH: &str = "/wishlist";

/// A parsed wishlist toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleRequest {
    pub id: ProductId,
    /// Sanitized redirect target.
    pub return_to: String,
}

impl ToggleRequest {
    /// Parse an urlencoded form body.
    ///
    /// The id must name a product in either catalog. `return_to` never
    /// fails; an unsafe or missing value becomes `/`.
    pub fn from_form(body: &str) -> Result<Self, SiteError> {
        let params = QueryParams::parse(body);
        let raw = params
            .get("id")
            .ok_or_else(|| SiteError::InvalidForm("missing id".to_string()))?;
        let id: ProductId = raw.parse()?;

        if !designer_catalog().contains(id) && !escort_catalog().contains(id) {
            return Err(CatalogError::ProductNotFound(id).into());
        }

        Ok(Self {
            id,
            return_to: safe_return_path(params.get("return_to")),
        })
    }
}

/// Restrict a redirect target to a same-origin path.
pub fn safe_return_path(raw: Option<&str>) -> String {
    match raw {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.chars().any(char::is_control) =>
        {
            path.to_string()
        }
        _ => "/".to_string(),
    }
}

/// Apply a toggle. Returns whether the product is now liked.
pub fn apply_toggle<S: KeyValueStore>(
    store: &WishlistStore<S>,
    request: &ToggleRequest,
) -> Result<bool, CacheError> {
    let wishlist = store.toggle(request.id)?;
    Ok(wishlist.contains(request.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsigner_cache::{Cache, MemoryStore};

    fn store() -> WishlistStore<MemoryStore> {
        WishlistStore::new(Cache::new(MemoryStore::new()), "wishlist")
    }

    #[test]
    fn test_parse_form() {
        let req =
            ToggleRequest::from_form("id=104&return_to=%2Fescort%3Fsort%3Dprice-low%23product-104")
                .unwrap();
        assert_eq!(req.id, ProductId::new(104));
        assert_eq!(req.return_to, "/escort?sort=price-low#product-104");
    }

    #[test]
    fn test_rejects_unknown_or_bad_id() {
        assert!(matches!(
            ToggleRequest::from_form("id=999"),
            Err(SiteError::Catalog(CatalogError::ProductNotFound(_)))
        ));
        assert!(matches!(
            ToggleRequest::from_form("id=abc"),
            Err(SiteError::Catalog(CatalogError::InvalidProductId(_)))
        ));
        assert!(matches!(
            ToggleRequest::from_form("return_to=%2F"),
            Err(SiteError::InvalidForm(_))
        ));
    }

    #[test]
    fn test_return_path_is_same_origin() {
        assert_eq!(safe_return_path(Some("/designer?selected=3")), "/designer?selected=3");
        assert_eq!(safe_return_path(Some("//evil.example")), "/");
        assert_eq!(safe_return_path(Some("https://evil.example")), "/");
        assert_eq!(safe_return_path(Some("/\\evil.example")), "/");
        assert_eq!(safe_return_path(Some("/a\r\nSet-Cookie: x")), "/");
        assert_eq!(safe_return_path(None), "/");
    }

    #[test]
    fn test_toggle_twice_restores() {
        let store = store();
        let req = ToggleRequest::from_form("id=3").unwrap();
        assert!(apply_toggle(&store, &req).unwrap());
        assert!(!apply_toggle(&store, &req).unwrap());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_toggle_is_shared_across_lines() {
        let store = store();
        apply_toggle(&store, &ToggleRequest::from_form("id=3").unwrap()).unwrap();
        apply_toggle(&store, &ToggleRequest::from_form("id=104").unwrap()).unwrap();
        let raw = store.cache().get_raw("wishlist").unwrap().unwrap();
        assert_eq!(raw, b"[3,104]");
    }

    #[test]
    fn test_write_failure_surfaces() {
        let store = WishlistStore::new(Cache::new(MemoryStore::read_only()), "wishlist");
        let req = ToggleRequest::from_form("id=3").unwrap();
        assert!(apply_toggle(&store, &req).is_err());
    }
}
