//! Viewport classification and element geometry.
//!
//! The slider reads the viewport class once when it mounts; resizing
//! afterwards does not reclassify it.

use carousel::gesture::ViewportClass;

/// Classify the current window width.
pub fn viewport_class() -> ViewportClass {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .map_or(ViewportClass::Desktop, ViewportClass::from_width)
    }
    #[cfg(not(feature = "csr"))]
    {
        ViewportClass::Desktop
    }
}

/// Vertical scroll offset of the window.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}
