//! Category filter.

use crate::catalog::CategoryKey;

/// Category selection: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        Self::All
    }
}

impl<C: CategoryKey> CategoryFilter<C> {
    /// Parse a query token; "all" and unknown values select everything.
    pub fn parse(s: &str) -> Self {
        C::parse(s).map(Self::Only).unwrap_or(Self::All)
    }

    /// Query token for this selection.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(c) => c.as_str(),
        }
    }

    /// Every selectable tab, "all" first.
    pub fn tabs() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(C::ALL.iter().copied().map(Self::Only))
            .collect()
    }

    /// Whether a product with this category passes.
    pub fn matches(&self, category: Option<C>) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => category == Some(*c),
        }
    }
}
