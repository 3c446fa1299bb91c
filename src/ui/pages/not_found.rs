//! Not found page
//!
//! Shown for any path other than the landing page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1 class="not-found-code">"404"</h1>
            <h2 class="not-found-title">"Nothing to bunk here"</h2>
            <p class="not-found-text">"The page you're looking for doesn't exist."</p>
            <A href="/" attr:class="not-found-home">"Back to BunkMate"</A>
        </div>
    }
}
