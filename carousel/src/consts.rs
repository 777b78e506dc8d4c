//! Shared numeric constants for the carousel crate.

// ── Timing ──────────────────────────────────────────────────────

/// Default autoplay period in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 5_000;

/// Crossfade duration between slides in milliseconds. Presentation only; no
/// state transition waits on it.
pub const CROSSFADE_MS: u64 = 500;

// ── Gestures ────────────────────────────────────────────────────

/// Minimum horizontal travel, in screen pixels, for a touch drag to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Widest viewport, in CSS pixels, still classified as mobile.
pub const MOBILE_MAX_WIDTH_PX: f64 = 768.0;

/// Number of equal horizontal click zones on a desktop slider.
pub const CLICK_ZONE_COUNT: f64 = 3.0;
