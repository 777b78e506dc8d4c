//! Gesture model: touch swipes, desktop click zones, and viewport class.
//!
//! Swipes are named by the direction the finger DRAGS the content.
//! [`Swipe::Left`] drags content leftward, revealing the next image, so it
//! maps to [`NavCommand::Next`]. [`Swipe::Right`] maps to
//! [`NavCommand::Previous`]. That mapping lives only in [`Swipe::command`].

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use serde::Deserialize;

use crate::consts::{CLICK_ZONE_COUNT, DEFAULT_SWIPE_THRESHOLD_PX, MOBILE_MAX_WIDTH_PX};

/// A point in screen space (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A discrete navigation command derived from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
}

/// Resolved horizontal swipe, named by drag direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Swipe {
    /// Too short, or predominantly vertical.
    #[default]
    None,
    /// Content dragged leftward.
    Left,
    /// Content dragged rightward.
    Right,
}

impl Swipe {
    /// The navigation this swipe asks for, if any.
    #[must_use]
    pub fn command(self) -> Option<NavCommand> {
        match self {
            Self::None => None,
            Self::Left => Some(NavCommand::Next),
            Self::Right => Some(NavCommand::Previous),
        }
    }
}

/// Start and end of one touch interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub start: Point,
    pub end: Point,
}

impl GestureSample {
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// `(start - end)` on each axis; positive `dx` means the finger moved left.
    #[must_use]
    pub fn delta(&self) -> (f64, f64) {
        (self.start.x - self.end.x, self.start.y - self.end.y)
    }

    #[must_use]
    pub fn resolve(&self, threshold_px: f64) -> Swipe {
        let (dx, dy) = self.delta();
        if dx.abs() <= dy.abs() {
            return Swipe::None;
        }
        if dx > threshold_px {
            Swipe::Left
        } else if dx < -threshold_px {
            Swipe::Right
        } else {
            Swipe::None
        }
    }
}

/// Resolve a completed touch from its endpoints.
#[must_use]
pub fn resolve_swipe(start: Point, end: Point, threshold_px: f64) -> Swipe {
    GestureSample::new(start, end).resolve(threshold_px)
}

/// Tracks one touch from start to end and resolves it to a [`Swipe`].
///
/// Holds nothing between gestures: [`SwipeDetector::finish`] always returns
/// the detector to its empty state.
#[derive(Debug, Clone, Copy)]
pub struct SwipeDetector {
    threshold_px: f64,
    start: Option<Point>,
    last: Option<Point>,
}

impl Default for SwipeDetector {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

impl SwipeDetector {
    /// A detector with the given threshold. A non-positive or non-finite
    /// threshold falls back to [`DEFAULT_SWIPE_THRESHOLD_PX`].
    #[must_use]
    pub fn new(threshold_px: f64) -> Self {
        let threshold_px = if threshold_px.is_finite() && threshold_px > 0.0 {
            threshold_px
        } else {
            log::debug!("swipe threshold {threshold_px} rejected, using default");
            DEFAULT_SWIPE_THRESHOLD_PX
        };
        Self { threshold_px, start: None, last: None }
    }

    #[must_use]
    pub fn threshold_px(&self) -> f64 {
        self.threshold_px
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Touch start. Discards any half-finished gesture.
    pub fn begin(&mut self, point: Point) {
        self.start = Some(point);
        self.last = None;
    }

    /// Touch move. Ignored when no gesture is in progress.
    pub fn track(&mut self, point: Point) {
        if self.start.is_some() {
            self.last = Some(point);
        }
    }

    /// Touch cancel: drop the gesture without resolving it.
    pub fn cancel(&mut self) {
        self.start = None;
        self.last = None;
    }

    /// Touch end. A touch that never moved is a tap and resolves to [`Swipe::None`].
    pub fn finish(&mut self) -> Swipe {
        let start = self.start.take();
        let last = self.last.take();
        match (start, last) {
            (Some(start), Some(end)) => resolve_swipe(start, end, self.threshold_px),
            _ => Swipe::None,
        }
    }
}

/// Coarse viewport classification, injected by the host at mount time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportClass {
    /// Width at or below the mobile breakpoint: taps open the viewer.
    Mobile,
    /// Wider than the breakpoint: clicks resolve through [`ClickZone`]s.
    #[default]
    Desktop,
}

impl ViewportClass {
    /// Classify a viewport width in CSS pixels. Widths above 768px are desktop.
    #[must_use]
    pub fn from_width(width_px: f64) -> Self {
        if width_px > MOBILE_MAX_WIDTH_PX { Self::Desktop } else { Self::Mobile }
    }

    #[must_use]
    pub fn uses_click_zones(self) -> bool {
        matches!(self, Self::Desktop)
    }
}

/// One of the three equal horizontal thirds of a desktop slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickZone {
    Previous,
    Open,
    Next,
}

/// Map a click's x offset within a slider of `width_px` to a zone.
///
/// Returns `None` for a degenerate width. Offsets outside the element are
/// clamped to the nearest edge zone.
#[must_use]
pub fn click_zone(x: f64, width_px: f64) -> Option<ClickZone> {
    if !width_px.is_finite() || width_px <= 0.0 || !x.is_finite() {
        return None;
    }
    let zone = width_px / CLICK_ZONE_COUNT;
    if x < zone {
        Some(ClickZone::Previous)
    } else if x > width_px - zone {
        Some(ClickZone::Next)
    } else {
        Some(ClickZone::Open)
    }
}
