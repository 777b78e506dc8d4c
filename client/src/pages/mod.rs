//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state (selected category, modal viewer,
//! slide index) and delegates rendering details to `components`.

pub mod attractions;
pub mod contact;
pub mod gallery;
pub mod home;
pub mod not_found;
