//! Page sections, in the order they appear.
//!
//! Each section renders its markup and exposes the [`Scene`](crate::core::motion::Scene)
//! that animates it, so the animation can be checked without a browser.

pub mod about;
pub mod contribute;
pub mod download;
pub mod features;
pub mod hero;
pub mod navbar;

pub use about::About;
pub use contribute::Contribute;
pub use download::Download;
pub use features::Features;
pub use hero::Hero;
pub use navbar::Navbar;
