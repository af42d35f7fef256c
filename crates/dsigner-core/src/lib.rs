//! Core abstractions for the DSIGNER'S storefront.
//!
//! This crate provides the fundamental types shared by every page:
//! - `RequestContext` - Typed request parameters
//! - `Route` - The site's page routes and navigation entries
//! - `SiteConfig` - Site configuration loaded from TOML
//! - `LifecyclePhase` - Request lifecycle tracking

mod config;
mod context;
mod lifecycle;
mod route;

pub use config::*;
pub use context::*;
pub use lifecycle::*;
pub use route::*;
