//! Typed key-value storage for the storefront.
//!
//! Values are stored as JSON. On `wasm32` the backing store is Spin's
//! key-value store; elsewhere an in-memory store stands in.
//!
//! # Example
//!
//! ```rust
//! use dsigner_cache::{Cache, MemoryStore, WishlistStore};
//! use dsigner_catalog::ProductId;
//!
//! let store = WishlistStore::new(Cache::new(MemoryStore::new()), "wishlist");
//! let wishlist = store.toggle(ProductId::new(101)).unwrap();
//! assert!(wishlist.contains(ProductId::new(101)));
//! ```

mod error;
mod kv;
mod wishlist;

pub use error::CacheError;
pub use kv::{Cache, KeyValueStore, MemoryStore};
#[cfg(target_arch = "wasm32")]
pub use kv::SpinStore;
pub use wishlist::{Wishlist, WishlistStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, KeyValueStore, MemoryStore, Wishlist, WishlistStore};
}
