//! Capability traits the engines report to.
//!
//! Engines never call UI callbacks directly. They hold a boxed sink and
//! invoke it synchronously, inside the same call that produced the event.
//! Every method has a no-op default, and `()` implements both traits, so a
//! host only overrides what it listens for.

/// Navigation notifications and requests from a slider.
///
/// In self-driven mode the slider moves itself and reports the new position
/// through [`NavigationSink::index_changed`]. In controlled mode it moves
/// nothing: timer ticks and dot clicks arrive as `index_changed` proposals,
/// arrows and swipes as `previous_requested` / `next_requested`, and the
/// owner answers by reconciling the index.
pub trait NavigationSink {
    fn index_changed(&mut self, _index: usize) {}
    fn previous_requested(&mut self) {}
    fn next_requested(&mut self) {}
}

/// Selection of an image, typically to open it in the modal viewer.
pub trait SelectionSink {
    fn image_clicked(&mut self, _index: usize) {}
}

impl NavigationSink for () {}

impl SelectionSink for () {}
