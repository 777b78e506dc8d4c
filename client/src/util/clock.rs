//! Wall-clock access for timers and the footer year.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Year shown when no browser clock is available.
pub const FALLBACK_YEAR: u32 = 2025;

/// Milliseconds since the epoch, as fed to the carousel timers.
pub fn now_ms() -> u64 {
    #[cfg(feature = "csr")]
    {
        millis_to_u64(js_sys::Date::now())
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}

/// Current calendar year for the footer.
pub fn current_year() -> u32 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::new_0().get_full_year()
    }
    #[cfg(not(feature = "csr"))]
    {
        FALLBACK_YEAR
    }
}

/// Clamp a JS timestamp into the timer domain. Negative and NaN map to zero.
pub fn millis_to_u64(millis: f64) -> u64 {
    if millis.is_finite() && millis > 0.0 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            millis as u64
        }
    } else {
        0
    }
}
