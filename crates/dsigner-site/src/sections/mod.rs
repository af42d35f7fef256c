//! Section renderers.

mod catalog;
mod collections;
mod cta;
mod detail;
mod features;
mod footer;
mod hero;
mod info;
mod navigation;
mod parallax;
mod showcase;
mod testimonials;

pub use catalog::*;
pub use collections::*;
pub use cta::*;
pub use detail::*;
pub use features::*;
pub use footer::*;
pub use hero::*;
pub use info::*;
pub use navigation::*;
pub use parallax::*;
pub use showcase::*;
pub use testimonials::*;
