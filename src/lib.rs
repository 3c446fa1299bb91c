//! BunkMate - landing site
//!
//! Server-rendered with Leptos and hydrated in the browser, where each
//! section plays its own scroll-triggered animations.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    use crate::core::config::SiteConfig;
    use leptos::logging::{log, warn};

    console_error_panic_hook::set_once();

    match SiteConfig::from_document() {
        Ok(config) => {
            let missing = config.install().missing();
            if !missing.is_empty() {
                log!("site config is missing {}", missing.join(", "));
            }
        }
        Err(err) => warn!("{err}; using build-time site config"),
    }

    leptos::mount::hydrate_body(App);
}
