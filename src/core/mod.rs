//! Page content, configuration, and the animation model.
//!
//! Nothing in here touches the DOM, so all of it runs (and is tested) on the
//! server as well as in the browser.

pub mod config;
pub mod content;
pub mod layout;
pub mod motion;

pub use config::{SiteConfig, use_site_config};
