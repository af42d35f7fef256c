//! Designer product line.

use serde::{Deserialize, Serialize};

use super::{Catalog, CatalogItem, CategoryKey, ImageRef, ViewCapabilities};
use crate::ids::ProductId;
use crate::money::Money;

/// Designer series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignerCategory {
    Chrono,
    Heritage,
    Elite,
}

impl CategoryKey for DesignerCategory {
    const ALL: &'static [Self] = &[Self::Chrono, Self::Heritage, Self::Elite];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Chrono => "chrono",
            Self::Heritage => "heritage",
            Self::Elite => "elite",
        }
    }
}

/// Strap material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrapMaterial {
    Leather,
    Steel,
    Gold,
}

impl StrapMaterial {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Leather => "Leather",
            Self::Steel => "Steel",
            Self::Gold => "Gold",
        }
    }
}

/// A product of the Designer line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignerProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub category: DesignerCategory,
    pub strap: StrapMaterial,
    pub image: ImageRef,
    pub description: String,
}

impl CatalogItem for DesignerProduct {
    type Category = DesignerCategory;

    const CAPABILITIES: ViewCapabilities = ViewCapabilities {
        filters: true,
        sorts: false,
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

    fn category(&self) -> Option<DesignerCategory> {
        Some(self.category)
    }
}

fn product(
    id: i64,
    name: &str,
    price: i64,
    category: DesignerCategory,
    strap: StrapMaterial,
    image: &str,
    description: &str,
) -> DesignerProduct {
    DesignerProduct {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Money::inr(price),
        category,
        strap,
        image: ImageRef::new(image),
        description: description.to_string(),
    }
}

/// The Designer catalog.
pub fn designer_catalog() -> Catalog<DesignerProduct> {
    use DesignerCategory::*;
    use StrapMaterial::*;

    Catalog::from_seed(vec![
        product(1, "Chrono X7 Onyx", 74999, Chrono, Steel, "/watch-hero-black.png",
            "Precision engineered with a black onyx dial and surgical grade steel."),
        product(2, "Heritage Silver", 109999, Heritage, Leather, "/watch-hero-silver.png",
            "Timeless silver finish with hand-stitched Italian leather strap."),
        product(3, "Elite Gold", 299999, Elite, Gold, "/watch-hero-gold.png",
            "Pure 18k gold casing with an intricate mechanical movement."),
        product(4, "Chrono X7 Silver", 74999, Chrono, Steel, "/watch-hero-silver.png",
            "Classic silver chrono with triple sub-dial functionality."),
        product(5, "Heritage Gold", 124999, Heritage, Gold, "/watch-hero-gold.png",
            "Vintage inspired gold heritage piece for formal occasions."),
        product(6, "Elite Midnight", 349999, Elite, Leather, "/watch-hero-black.png",
            "Stealth black elite series with sapphire crystal glass."),
        product(7, "Chrono X7 Gold", 84999, Chrono, Gold, "/watch-hero-gold.png",
            "The bold statement of gold meets the precision of the X7 series."),
        product(8, "Heritage Classic", 99999, Heritage, Leather, "/watch-hero-silver.png",
            "The essential heritage timepiece for the modern enthusiast."),
    ])
}
