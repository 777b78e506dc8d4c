//! Client-side presentation state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain structs held in `RwSignal`s by pages and the layout. Kept free of
//! browser types so they can be unit tested natively.

pub mod gallery;
pub mod nav;
pub mod showcase;
