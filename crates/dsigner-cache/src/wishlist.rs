//! Liked-product wishlist.

use dsigner_catalog::ProductId;
use serde::{Deserialize, Serialize};

use crate::kv::{Cache, KeyValueStore};
use crate::CacheError;

/// Ordered set of liked product ids.
///
/// Insertion order is kept; stale ids are tolerated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wishlist {
    ids: Vec<ProductId>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored ids, dropping repeats.
    pub fn from_ids(ids: impl IntoIterator<Item = ProductId>) -> Self {
        let mut wishlist = Self::new();
        for id in ids {
            if !wishlist.contains(id) {
                wishlist.ids.push(id);
            }
        }
        wishlist
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    /// Flip membership. Returns whether the id is now liked.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if let Some(pos) = self.ids.iter().position(|x| *x == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Wishlist persisted under a single key.
///
/// Every page reads the same key; the last write wins.
pub struct WishlistStore<S> {
    cache: Cache<S>,
    key: String,
}

impl<S: KeyValueStore> WishlistStore<S> {
    /// Bind a cache and storage key.
    pub fn new(cache: Cache<S>, key: impl Into<String>) -> Self {
        Self {
            cache,
            key: key.into(),
        }
    }

    /// Storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the stored wishlist. A missing key is an empty wishlist.
    pub fn try_load(&self) -> Result<Wishlist, CacheError> {
        let ids: Option<Vec<ProductId>> = self.cache.get(&self.key)?;
        Ok(ids.map(Wishlist::from_ids).unwrap_or_default())
    }

    /// Read the stored wishlist, treating unreadable data as empty.
    pub fn load(&self) -> Wishlist {
        self.try_load().unwrap_or_default()
    }

    /// Flip membership of `id` and write the result through.
    ///
    /// Unparseable stored data is replaced. A failed read returns the error
    /// without writing, so the stored list is never overwritten blind.
    pub fn toggle(&self, id: ProductId) -> Result<Wishlist, CacheError> {
        let mut wishlist = match self.try_load() {
            Ok(wishlist) => wishlist,
            Err(CacheError::SerializeError(_)) => Wishlist::new(),
            Err(e) => return Err(e),
        };
        wishlist.toggle(id);
        self.save(&wishlist)?;
        Ok(wishlist)
    }

    /// Write the full wishlist.
    pub fn save(&self, wishlist: &Wishlist) -> Result<(), CacheError> {
        self.cache.set(&self.key, wishlist)
    }

    /// Underlying cache.
    pub fn cache(&self) -> &Cache<S> {
        &self.cache
    }
}
