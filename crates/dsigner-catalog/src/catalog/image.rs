//! Product image references.

use serde::{Deserialize, Serialize};

/// Path of a product image under the site's static assets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Create an image reference.
    pub fn new(src: impl Into<String>) -> Self {
        Self(src.into())
    }

    /// Image source path.
    pub fn src(&self) -> &str {
        &self.0
    }

    /// Whether this image is already the fallback, so a load error cannot loop.
    pub fn is_fallback(&self, fallback: &str) -> bool {
        self.0 == fallback
    }
}

impl From<&str> for ImageRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
