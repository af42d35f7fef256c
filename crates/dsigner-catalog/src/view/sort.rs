//! Sort keys.

use std::cmp::Reverse;

use crate::catalog::CatalogItem;

/// Sort order for a catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Most popular first.
    #[default]
    PopularityDesc,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
}

impl SortKey {
    /// Every key, in the order the sort control lists them.
    pub const ALL: [SortKey; 3] = [SortKey::PopularityDesc, SortKey::PriceAsc, SortKey::PriceDesc];

    /// Parse a query token. Accepts `price-asc`/`price-desc` as aliases.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "popularity" => Some(SortKey::PopularityDesc),
            "price-low" | "price-asc" => Some(SortKey::PriceAsc),
            "price-high" | "price-desc" => Some(SortKey::PriceDesc),
            _ => None,
        }
    }

    /// Query token.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PopularityDesc => "popularity",
            SortKey::PriceAsc => "price-low",
            SortKey::PriceDesc => "price-high",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::PopularityDesc => "Popularity",
            SortKey::PriceAsc => "Price: Low",
            SortKey::PriceDesc => "Price: High",
        }
    }

    /// Stable sort in place.
    pub fn sort<T: CatalogItem>(&self, items: &mut [&T]) {
        match self {
            SortKey::PopularityDesc => items.sort_by_key(|p| Reverse(p.popularity())),
            SortKey::PriceAsc => items.sort_by_key(|p| p.price().amount),
            SortKey::PriceDesc => items.sort_by_key(|p| Reverse(p.price().amount)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::parse("price-asc"), Some(SortKey::PriceAsc));
        assert_eq!(SortKey::parse("newest"), None);
    }
}
