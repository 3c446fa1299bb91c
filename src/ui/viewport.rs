//! Reactive window measurements.
//!
//! Both signals start at server-side defaults so the hydrated markup matches
//! what was rendered, then pick up the real values once mounted.

use leptos::prelude::*;

use crate::core::layout::{BodyScroll, SERVER_VIEWPORT_WIDTH};

#[cfg(not(feature = "ssr"))]
fn window_metric(read: impl Fn(&leptos::web_sys::Window) -> Option<f64>) -> Option<f64> {
    leptos::web_sys::window().and_then(|window| read(&window))
}

/// Inner width of the window, updated on resize
pub fn use_viewport_width() -> ReadSignal<f64> {
    let (width, set_width) = signal(SERVER_VIEWPORT_WIDTH);

    #[cfg(not(feature = "ssr"))]
    {
        let measure = move || {
            if let Some(w) = window_metric(|w| w.inner_width().ok()?.as_f64()) {
                set_width.set(w);
            }
        };
        Effect::new(move |_| measure());
        let handle = window_event_listener(leptos::ev::resize, move |_| measure());
        on_cleanup(move || handle.remove());
    }
    #[cfg(feature = "ssr")]
    let _ = set_width;

    width
}

/// Vertical scroll offset of the page
pub fn use_scroll_y() -> ReadSignal<f64> {
    let (scroll_y, set_scroll_y) = signal(0.0);

    #[cfg(not(feature = "ssr"))]
    {
        let measure = move || {
            if let Some(y) = window_metric(|w| w.scroll_y().ok()) {
                set_scroll_y.set(y);
            }
        };
        Effect::new(move |_| measure());
        let handle = window_event_listener(leptos::ev::scroll, move |_| measure());
        on_cleanup(move || handle.remove());
    }
    #[cfg(feature = "ssr")]
    let _ = set_scroll_y;

    scroll_y
}

/// Apply `state` to the document body
pub fn set_body_scroll(state: BodyScroll) {
    #[cfg(not(feature = "ssr"))]
    {
        let body = leptos::web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body());
        if let Some(body) = body {
            let _ = body.style().set_property("overflow", state.overflow());
        }
    }
    #[cfg(feature = "ssr")]
    let _ = state;
}
