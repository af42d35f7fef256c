//! Wishlist storage for the workload.
//!
//! On `wasm32` the wishlist lives in Spin's key-value store. Native builds
//! use an in-memory store, so local runs start empty every request.

use dsigner_cache::{Cache, CacheError, KeyValueStore, Wishlist, WishlistStore};
use dsigner_core::StorageConfig;
use dsigner_observability::StructuredLogger;

#[cfg(target_arch = "wasm32")]
use dsigner_cache::SpinStore;

#[cfg(not(target_arch = "wasm32"))]
use dsigner_cache::MemoryStore;

#[cfg(target_arch = "wasm32")]
pub(crate) fn open_wishlist(
    config: &StorageConfig,
) -> Result<WishlistStore<SpinStore>, CacheError> {
    Ok(WishlistStore::new(
        Cache::open(&config.store)?,
        config.wishlist_key.clone(),
    ))
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn open_wishlist(
    config: &StorageConfig,
) -> Result<WishlistStore<MemoryStore>, CacheError> {
    Ok(WishlistStore::new(
        Cache::new(MemoryStore::new()),
        config.wishlist_key.clone(),
    ))
}

/// Read the wishlist for rendering. Failures are logged and read as empty.
pub(crate) fn load_wishlist<S: KeyValueStore>(
    opened: Result<WishlistStore<S>, CacheError>,
    logger: &StructuredLogger,
) -> Wishlist {
    let result = opened.and_then(|store| store.try_load());
    match result {
        Ok(wishlist) => wishlist,
        Err(e) => {
            logger
                .warn_builder("wishlist read failed, rendering empty")
                .field("error", e.to_string())
                .emit();
            Wishlist::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsigner_cache::MemoryStore;
    use dsigner_catalog::ProductId;
    use dsigner_core::RequestId;

    fn logger() -> StructuredLogger {
        StructuredLogger::new(RequestId::from_string("test"))
    }

    fn store(raw: &[u8]) -> WishlistStore<MemoryStore> {
        WishlistStore::new(Cache::new(MemoryStore::new().with_raw("wishlist", raw)), "wishlist")
    }

    #[test]
    fn test_loads_stored_ids() {
        let wishlist = load_wishlist(Ok(store(b"[101,104]")), &logger());
        assert!(wishlist.contains(ProductId::new(104)));
        assert_eq!(wishlist.len(), 2);
    }

    #[test]
    fn test_corrupt_value_reads_empty() {
        let wishlist = load_wishlist(Ok(store(b"not json")), &logger());
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_open_failure_reads_empty() {
        let opened: Result<WishlistStore<MemoryStore>, CacheError> =
            Err(CacheError::OpenError("no such store".to_string()));
        assert!(load_wishlist(opened, &logger()).is_empty());
    }

    #[test]
    fn test_native_store_uses_configured_key() {
        let store = open_wishlist(&StorageConfig::default()).unwrap();
        assert_eq!(store.key(), "wishlist");
    }
}
