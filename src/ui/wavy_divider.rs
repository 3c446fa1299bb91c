//! Hand-drawn wavy rule between content blocks.

use leptos::prelude::*;

const WAVE_PATH: &str =
    "M0,10 C50,0 100,20 150,10 C200,0 250,20 300,10 C350,0 400,20 450,10 L500,10";

/// Selector a section's scene uses to find its dividers
pub const DIVIDER: &str = "[data-divider]";

/// The path is normalised to `pathLength="1"`, so a draw animation only has
/// to move `stroke-dashoffset` from 1 to 0.
#[component]
pub fn WavyDivider() -> impl IntoView {
    view! {
        <svg class="wavy-divider" data-divider="" viewBox="0 0 500 20" preserveAspectRatio="none" aria-hidden="true">
            <path class="wavy-divider-path" d=WAVE_PATH pathLength="1" />
        </svg>
    }
}
