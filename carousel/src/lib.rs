//! Headless image-browsing engine: an autoplaying, gesture-navigable slider and
//! a full-screen modal viewer.
//!
//! Nothing in this crate touches the DOM. The host UI layer (the Leptos
//! `client` crate) wires pointer, touch, keyboard and timer events into the
//! engines and renders whatever state they expose. Keeping the state machines
//! here lets them be driven with simulated time and recording sinks in plain
//! unit tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`sequence`] | Immutable [`sequence::ImageSequence`] and wraparound index arithmetic |
//! | [`gesture`] | Swipe detection, click zones and viewport classification |
//! | [`timer`] | Autoplay timer model with generation tokens |
//! | [`slider`] | [`slider::SliderEngine`]: autoplay, navigation, controlled mode |
//! | [`modal`] | [`modal::ModalViewer`]: open/close state machine and keyboard binding flag |
//! | [`sink`] | Capability traits the engines report to |
//! | [`config`] | Serde-backed slider configuration |
//! | [`error`] | Validation errors |
//! | [`consts`] | Shared numeric constants (timing, thresholds, breakpoints) |

pub mod config;
pub mod consts;
pub mod error;
pub mod gesture;
pub mod modal;
pub mod sequence;
pub mod sink;
pub mod slider;
pub mod timer;
