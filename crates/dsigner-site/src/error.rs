//! Site errors.

use dsigner_catalog::CatalogError;
use dsigner_motion::MotionError;
use thiserror::Error;

/// Errors raised while composing a page or reading a wishlist form.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Animation setup failed: {0}")]
    Motion(#[from] MotionError),

    #[error("Failed to serialize motion manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("Invalid wishlist form: {0}")]
    InvalidForm(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
