//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and the image viewers. Stateful behaviour
//! lives in the `carousel` engines; components translate DOM events into
//! engine calls and forward results through callbacks.

pub mod category_chips;
pub mod image_modal;
pub mod image_slider;
pub mod layout;
pub mod page_banner;
