//! Content rendered only once the page is live in the browser.

use leptos::prelude::*;

/// Render `children` after hydration.
///
/// The server sends `fallback` in their place (nothing by default), which
/// keeps the first response down to the parts above the fold. There is no
/// retry and no error state: the children are static.
#[component]
pub fn Deferred(
    #[prop(optional, into)] fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    let ready = RwSignal::new(false);

    // effects only run in the browser, after the first render
    Effect::new(move |_| ready.set(true));

    view! {
        <Show when=move || ready.get() fallback=fallback>
            {children()}
        </Show>
    }
}
