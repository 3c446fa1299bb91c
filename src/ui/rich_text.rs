//! Rendering for static rich-text copy.

use leptos::prelude::*;

use crate::core::content::{Fragment, RichText};

/// Render one fragment. Highlights become `<strong>` carrying their tone class.
pub fn fragment_view(fragment: Fragment) -> AnyView {
    match fragment {
        Fragment::Text(text) => text.into_any(),
        Fragment::Strong(text) => view! { <strong>{text}</strong> }.into_any(),
        Fragment::Em(text) => view! { <em>{text}</em> }.into_any(),
        Fragment::Mark(tone, text) => view! { <strong class=tone.to_string()>{text}</strong> }.into_any(),
        Fragment::Break => view! { <br /> }.into_any(),
    }
}

/// Inline rendering of a rich-text block
#[component]
pub fn Fragments(text: RichText) -> impl IntoView {
    text.iter().copied().map(fragment_view).collect_view()
}
