//! Product identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Identifier of a product, unique within its catalog.
///
/// Serializes as a bare integer so stored wishlists are plain `[101, 104]` arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Create an id from its integer value.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Integer value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for ProductId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| CatalogError::InvalidProductId(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("104".parse::<ProductId>(), Ok(ProductId::new(104)));
        assert_eq!(" 3 ".parse::<ProductId>(), Ok(ProductId::new(3)));
        assert!(matches!(
            "abc".parse::<ProductId>(),
            Err(CatalogError::InvalidProductId(_))
        ));
    }

    #[test]
    fn test_serializes_as_integer() {
        let ids = vec![ProductId::new(101), ProductId::new(104)];
        assert_eq!(serde_json::to_string(&ids).unwrap(), "[101,104]");
        let back: Vec<ProductId> = serde_json::from_str("[7]").unwrap();
        assert_eq!(back, vec![ProductId::new(7)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(ProductId::new(42).to_string(), "42");
    }
}
