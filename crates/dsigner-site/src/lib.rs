//! Pages of the DSIGNER'S storefront.
//!
//! Rendering is pure: a page is built from the site configuration, static
//! content, the request's query state and the visitor's wishlist, and comes
//! back as a shell plus ordered sections for the streaming sink.
//!
//! - **Content**: copy and imagery for every page
//! - **Sections**: reusable HTML blocks (navigation, hero, product grid, ...)
//! - **Pages**: per-route composition and animation registration
//! - **Toggle**: the wishlist form endpoint
//!
//! # Example
//!
//! ```rust
//! use dsigner_cache::Wishlist;
//! use dsigner_core::{QueryParams, Route, SiteConfig};
//! use dsigner_site::prelude::*;
//!
//! let config = SiteConfig::default();
//! let content = SiteContent::default();
//! let state = PageState::from_query(&QueryParams::parse("category=heritage"));
//! let wishlist = Wishlist::new();
//!
//! let ctx = RenderContext::new(&config, &content, &state, &wishlist);
//! let page = build_page(Some(Route::Designer), &ctx).unwrap();
//! assert_eq!(page.status, 200);
//! assert!(page.render().contains("Heritage Gold"));
//! ```

pub mod content;
pub mod error;
pub mod motion;
pub mod pages;
pub mod sections;
pub mod shell;
pub mod state;
pub mod toggle;

mod html;
mod styles;

pub use error::SiteError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::content::SiteContent;
    pub use crate::error::SiteError;
    pub use crate::pages::{build_page, Page, RenderContext};
    pub use crate::state::PageState;
    pub use crate::toggle::{apply_toggle, safe_return_path, ToggleRequest, TOGGLE_PATH};
}
