//! Components and the browser glue behind them.

pub mod deferred;
pub mod loading_screen;
pub mod motion;
pub mod pages;
pub mod rich_text;
pub mod sections;
pub mod viewport;
pub mod wavy_divider;
#[cfg(all(test, feature = "ssr"))]
mod tests;

pub use deferred::Deferred;
pub use loading_screen::LoadingScreen;
