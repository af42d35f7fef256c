//! Catalog domain for the DSIGNER'S storefront.
//!
//! - **Catalog**: the two fixed product lines (Designer and Escort)
//! - **View**: category filtering and stable sorting over a catalog
//! - **Selection**: which product, if any, is open in the detail view
//!
//! # Example
//!
//! ```rust
//! use dsigner_catalog::prelude::*;
//!
//! let catalog = escort_catalog();
//! let state = FilterSortState::default().set_sort(SortKey::PriceAsc);
//! let view = derive(&catalog, &state);
//! assert_eq!(view[0].id, ProductId::new(101));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod selection;
pub mod view;

pub use error::CatalogError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    pub use crate::catalog::{
        designer_catalog, escort_catalog, Catalog, CatalogItem, CategoryKey, DesignerCategory,
        DesignerProduct, EscortProduct, EscortStyle, ImageRef, StrapMaterial, ViewCapabilities,
    };
    pub use crate::selection::Selection;
    pub use crate::view::{derive, CategoryFilter, FilterSortState, SortKey};
}
