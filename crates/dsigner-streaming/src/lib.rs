//! Streaming primitives for shell-first SSR.
//!
//! - `Shell` - document skeleton flushed before any content
//! - `Section` - a named, rendered part of the page
//! - `StreamingSink` - enforces shell, then sections, then completion

mod error;
mod section;
mod shell;
mod sink;

pub use error::*;
pub use section::*;
pub use shell::*;
pub use sink::*;
