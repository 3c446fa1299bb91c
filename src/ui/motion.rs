//! Plays [`Scene`]s in the browser.
//!
//! Elements are styled inline with CSS transitions. Scroll bindings are handed
//! to a [`ScrollDriver`](crate::core::motion::ScrollDriver) that re-checks them
//! on every window scroll, and re-measures their layout on resize and once the
//! page has finished loading. Listeners live as long as the effect that
//! created them: rebuilding the scene or disposing the owning component
//! removes them.

use leptos::html::ElementType;
use leptos::prelude::*;
use leptos::wasm_bindgen::JsCast;

use crate::core::motion::Scene;

#[cfg(not(feature = "ssr"))]
mod dom {
    use std::cell::RefCell;
    use std::rc::Rc;

    use leptos::ev;
    use leptos::prelude::window_event_listener;
    use leptos::wasm_bindgen::JsCast;
    use leptos::web_sys::{self, Element, HtmlElement};

    use crate::core::motion::{Binding, ScrollDriver, Span, Stage};

    impl Stage for Element {
        fn select_all(&self, selector: &str) -> Vec<Self> {
            let Ok(list) = self.query_selector_all(selector) else {
                return Vec::new();
            };
            (0..list.length())
                .filter_map(|i| list.item(i))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .collect()
        }

        fn set_style(&self, property: &str, value: &str) {
            let style = if let Some(html) = self.dyn_ref::<HtmlElement>() {
                html.style()
            } else if let Some(svg) = self.dyn_ref::<web_sys::SvgElement>() {
                svg.style()
            } else {
                return;
            };
            let _ = style.set_property(property, value);
        }

        fn reflow(&self) {
            // reading layout forces pending styles to apply
            let _ = self.get_bounding_client_rect();
        }

        fn layout_span(&self) -> Span {
            let Some(html) = self.dyn_ref::<HtmlElement>() else {
                // svg has no offsets, and nothing transforms the svg triggers
                let rect = self.get_bounding_client_rect();
                let (scroll_y, _) = window_position();
                return Span::new(rect.top() + scroll_y, rect.bottom() + scroll_y);
            };

            // offsets skip transforms on the element and its ancestors alike
            let mut top = 0.0;
            let mut current = Some(html.clone());
            while let Some(element) = current {
                top += f64::from(element.offset_top());
                current = element
                    .offset_parent()
                    .and_then(|parent| parent.dyn_into::<HtmlElement>().ok());
            }
            Span::new(top, top + f64::from(html.offset_height()))
        }
    }

    /// Scroll offset and inner height of the window
    fn window_position() -> (f64, f64) {
        let Some(window) = web_sys::window() else {
            return (0.0, 0.0);
        };
        let scroll_y = window.scroll_y().unwrap_or_default();
        let height = window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or_default();
        (scroll_y, height)
    }

    /// A driver kept alive together with the listeners feeding it.
    pub struct Driven {
        _driver: Rc<RefCell<ScrollDriver<Element>>>,
        removers: Vec<Box<dyn FnOnce()>>,
    }

    impl Drop for Driven {
        fn drop(&mut self) {
            for remove in self.removers.drain(..) {
                remove();
            }
        }
    }

    /// Start following the scroll position. `None` if nothing is scroll-triggered.
    pub fn drive(bindings: Vec<Binding<Element>>) -> Option<Driven> {
        let driver = ScrollDriver::new(bindings);
        if driver.is_empty() {
            return None;
        }
        let driver = Rc::new(RefCell::new(driver));

        let sync = {
            let driver = Rc::clone(&driver);
            move || {
                let (scroll_y, height) = window_position();
                driver.borrow_mut().sync(scroll_y, height);
            }
        };
        let remeasure = {
            let driver = Rc::clone(&driver);
            let sync = sync.clone();
            move || {
                driver.borrow_mut().refresh();
                sync();
            }
        };

        // elements already on screen play straight away
        sync();

        let on_scroll = window_event_listener(ev::scroll, {
            let sync = sync.clone();
            move |_| sync()
        });
        let on_resize = window_event_listener(ev::resize, {
            let remeasure = remeasure.clone();
            move |_| remeasure()
        });
        let on_load = window_event_listener(ev::load, move |_| remeasure());

        Some(Driven {
            _driver: driver,
            removers: vec![
                Box::new(move || on_scroll.remove()),
                Box::new(move || on_resize.remove()),
                Box::new(move || on_load.remove()),
            ],
        })
    }
}

/// Bind the scene built by `build` to the element behind `scope`.
///
/// Runs after mount. The scene is rebuilt, and its previous listeners
/// removed, whenever a signal read inside `build` changes. Until the element
/// exists nothing is registered.
pub fn use_scene<E>(scope: NodeRef<E>, build: impl Fn() -> Scene + 'static)
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::web_sys::Element;

        use crate::core::motion::bind;

        Effect::new(move |previous: Option<Option<dom::Driven>>| {
            // stop the old listeners before parking elements again
            drop(previous);

            let scene = build();
            let root: Option<Element> = scope.get().map(|el| el.unchecked_into());
            if root.is_none() && !scene.is_empty() {
                leptos::logging::debug_warn!("scene scope not mounted; skipping {} cues", scene.len());
            }

            dom::drive(bind(root.as_ref(), &scene))
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (scope, build);
    }
}
