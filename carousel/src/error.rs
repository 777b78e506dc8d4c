//! Validation errors for the carousel engines.
//!
//! The state machines themselves never fail: invalid navigation is a no-op.
//! These errors surface only from the `try_*` entry points and from config
//! validation, so callers that care can find out why input was rejected.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CarouselError {
    #[error("image sequence is empty")]
    EmptySequence,
    #[error("index {index} out of range for a sequence of {len} images")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("{0} is not a valid image index")]
    NotAnIndex(f64),
    #[error("autoplay interval must be at least 1 ms, got {0}")]
    InvalidInterval(u64),
    #[error("swipe threshold must be a positive finite distance, got {0}")]
    InvalidThreshold(f64),
}
