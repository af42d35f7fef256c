//! Motion errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MotionError {
    #[error("Invalid threshold {0:?}: expected \"<edge> <offset>\", e.g. \"top 70%\"")]
    InvalidThreshold(String),

    #[error("Invalid tween: {0}")]
    InvalidTween(String),

    #[error("Coordinator has been torn down")]
    TornDown,

    #[error("Carousel needs at least one slide")]
    EmptyCarousel,
}
