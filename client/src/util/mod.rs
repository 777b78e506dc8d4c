//! Browser environment helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each helper has a `csr` branch that talks to the browser and a native
//! branch with a fixed answer, so components compile and test off-browser.

pub mod clock;
pub mod viewport;
