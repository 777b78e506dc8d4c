//! Browser client for the "Odpoczniesz tu" vacation-rental site.
//!
//! ARCHITECTURE
//! ============
//! A client-side rendered Leptos app. The `csr` feature pulls in the browser
//! stack (timers, DOM bindings, console logging); without it the crate builds
//! natively so pure state and content logic can be unit tested.
//!
//! | Module       | Responsibility                                   |
//! |--------------|--------------------------------------------------|
//! | `app`        | Route table and site shell                       |
//! | `components` | Slider, modal, chips, banner, layout             |
//! | `content`    | Static catalogs (gallery, attractions, contact)  |
//! | `pages`      | Route-level screens                              |
//! | `state`      | Page state held in signals                       |
//! | `util`       | Clock and viewport access                        |

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"console logger already installed".into());
    }
    log::info!("mounting site");
    leptos::mount::mount_to_body(app::App);
}
