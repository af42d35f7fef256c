//! Escort product line.

use serde::{Deserialize, Serialize};

use super::{Catalog, CatalogItem, CategoryKey, ImageRef, ViewCapabilities};
use crate::ids::ProductId;
use crate::money::Money;

/// Style tab on the Escort page.
///
/// Escort products carry no style, so the tab only re-arms the grid reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscortStyle {
    Leather,
    Steel,
    Sport,
}

impl CategoryKey for EscortStyle {
    const ALL: &'static [Self] = &[Self::Leather, Self::Steel, Self::Sport];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Leather => "leather",
            Self::Steel => "steel",
            Self::Sport => "sport",
        }
    }
}

/// A product of the Escort line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscortProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub image: ImageRef,
    pub popularity: u32,
}

impl CatalogItem for EscortProduct {
    type Category = EscortStyle;

    const CAPABILITIES: ViewCapabilities = ViewCapabilities {
        filters: false,
        sorts: true,
    };

    fn id(&self) -> ProductId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Money {
        self.price
    }

    fn image(&self) -> &ImageRef {
        &self.image
    }

    fn category(&self) -> Option<EscortStyle> {
        None
    }

    fn popularity(&self) -> u32 {
        self.popularity
    }
}

fn product(id: i64, name: &str, price: i64, image: &str, popularity: u32) -> EscortProduct {
    EscortProduct {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Money::inr(price),
        image: ImageRef::new(image),
        popularity,
    }
}

/// The Escort catalog.
pub fn escort_catalog() -> Catalog<EscortProduct> {
    Catalog::from_seed(vec![
        product(101, "Escort Classic White", 4999, "/watch-hero-silver.png", 95),
        product(102, "Escort Sport Blue", 5499, "/watch-hero-black.png", 88),
        product(103, "Escort Urban Steel", 6999, "/watch-hero-silver.png", 92),
        product(104, "Escort Rose Gold", 8999, "/watch-hero-gold.png", 98),
        product(105, "Escort Active Black", 5999, "/watch-hero-black.png", 85),
        product(106, "Escort Minimalist", 4999, "/watch-hero-silver.png", 90),
        product(107, "Escort Executive", 7999, "/watch-hero-gold.png", 82),
        product(108, "Escort Weekend", 5499, "/watch-hero-silver.png", 87),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let catalog = escort_catalog();
        assert_eq!(catalog.len(), 8);
        assert!(catalog.list().iter().all(|p| p.category().is_none()));
    }

    #[test]
    fn test_escort_sorts_but_does_not_filter() {
        assert!(!EscortProduct::CAPABILITIES.filters);
        assert!(EscortProduct::CAPABILITIES.sorts);
    }
}
