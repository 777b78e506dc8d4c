//! Slider configuration.
//!
//! Deserializable so a host can ship it as JSON/TOML next to its content;
//! every field falls back to its default when absent.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{DEFAULT_INTERVAL_MS, DEFAULT_SWIPE_THRESHOLD_PX};
use crate::error::CarouselError;
use crate::gesture::ViewportClass;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Autoplay period in milliseconds.
    pub interval_ms: u64,
    /// Minimum horizontal travel for a swipe, in pixels.
    pub swipe_threshold_px: f64,
    /// Viewport class captured once when the slider mounts.
    pub viewport: ViewportClass,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            viewport: ViewportClass::default(),
        }
    }
}

impl SliderConfig {
    #[must_use]
    pub fn with_interval(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    #[must_use]
    pub fn with_swipe_threshold(mut self, threshold_px: f64) -> Self {
        self.swipe_threshold_px = threshold_px;
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: ViewportClass) -> Self {
        self.viewport = viewport;
        self
    }

    /// Reject values the engine cannot run with.
    ///
    /// # Errors
    ///
    /// [`CarouselError::InvalidInterval`] for a zero interval,
    /// [`CarouselError::InvalidThreshold`] for a non-positive or non-finite threshold.
    pub fn validate(self) -> Result<Self, CarouselError> {
        if self.interval_ms == 0 {
            return Err(CarouselError::InvalidInterval(self.interval_ms));
        }
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px <= 0.0 {
            return Err(CarouselError::InvalidThreshold(self.swipe_threshold_px));
        }
        Ok(self)
    }
}
