//! Page motion for the storefront.
//!
//! Pages describe their animations on the server: a `RevealCoordinator`
//! collects triggers and serializes them to a `RevealManifest`, which the
//! generated client runtime plays back with IntersectionObserver and the
//! Web Animations API. The same trigger semantics are implemented here so
//! they can be exercised without a browser. Pointer effects (hero tilt,
//! magnetic buttons) ride along in the same manifest.

mod carousel;
mod error;
mod pointer;
mod reveal;
mod runtime;
mod threshold;
mod tween;

pub use carousel::*;
pub use error::*;
pub use pointer::*;
pub use reveal::*;
pub use runtime::*;
pub use threshold::*;
pub use tween::*;
