//! Full-screen loading indicator.

use leptos::prelude::*;

/// Covers the viewport with a centred spinner. Shown while deferred content
/// is still being prepared, when a page opts into it.
#[component]
pub fn LoadingScreen(
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Loading".to_string());
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-spinner" aria-hidden="true"></div>
            <span class="sr-only">{label}</span>
        </div>
    }
}
