//! Catalog error types.

use thiserror::Error;

use crate::ids::ProductId;

/// Errors that can occur in catalog operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Two products share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateId(ProductId),

    /// A product id could not be parsed.
    #[error("Invalid product id: {0:?}")]
    InvalidProductId(String),
}
