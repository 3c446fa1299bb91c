//! Fixed header with in-page links and the mobile overlay menu.

use leptos::html;
use leptos::prelude::*;

use crate::core::content::NAV_ITEMS;
use crate::core::layout::{BodyScroll, MobileMenu, is_scrolled};
use crate::core::motion::{At, Cue, Ease, Pose, Scene, Target, Timeline, Trigger};
use crate::ui::motion::use_scene;
use crate::ui::viewport::{set_body_scroll, use_scroll_y, use_viewport_width};

/// Drop-in of the whole bar on first paint
pub fn entrance_scene() -> Scene {
    let mut scene = Scene::new();
    scene.push(
        Cue::tween(
            Target::Scope,
            Pose::new().opacity(0.0).y(-30.0),
            Pose::shown(),
            0.7,
            Ease::Power3Out,
        )
        .delay(0.1),
    );
    scene
}

/// Links sliding in one after another once the overlay has opened
pub fn menu_scene() -> Scene {
    let cues = Timeline::new(Ease::Power3Out)
        .stagger(
            Target::each("[data-menu-link]", NAV_ITEMS.len()),
            Pose::new().opacity(0.0).x(40.0),
            Pose::shown(),
            0.4,
            0.08,
            Ease::Power3Out,
            At::Time(0.15),
        )
        .into_cues(Trigger::Mount);

    let mut scene = Scene::new();
    scene.extend(cues);
    scene
}

/// Reactive handle on the mobile overlay.
///
/// Owns the open state and derives the body scroll lock from it. Signals are
/// only written when a transition actually changes the state.
#[derive(Clone, Copy, Debug)]
pub struct MenuControl {
    menu: RwSignal<MobileMenu>,
    body: Memo<BodyScroll>,
}

impl MenuControl {
    pub fn new() -> Self {
        let menu = RwSignal::new(MobileMenu::new());
        let body = Memo::new(move |_| menu.get().body_scroll());
        Self { menu, body }
    }

    pub fn is_open(&self) -> bool {
        self.menu.get().is_open()
    }

    pub fn button_label(&self) -> &'static str {
        self.menu.get().button_label()
    }

    pub fn body_scroll(&self) -> BodyScroll {
        self.body.get()
    }

    fn apply(&self, transition: impl FnOnce(&mut MobileMenu) -> bool) -> bool {
        let mut next = self.menu.get_untracked();
        let changed = transition(&mut next);
        if changed {
            self.menu.set(next);
        }
        changed
    }

    pub fn toggle(&self) -> bool {
        self.apply(MobileMenu::toggle)
    }

    pub fn link_activated(&self) -> bool {
        self.apply(MobileMenu::link_activated)
    }

    /// Widening past the desktop breakpoint closes the overlay
    pub fn viewport_resized(&self, width: f64) -> bool {
        self.apply(|menu| menu.viewport_resized(width))
    }
}

impl Default for MenuControl {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let nav_ref = NodeRef::<html::Nav>::new();
    let menu_ref = NodeRef::<html::Div>::new();
    let menu = MenuControl::new();
    let scroll_y = use_scroll_y();
    let width = use_viewport_width();

    Effect::new(move |_| {
        menu.viewport_resized(width.get());
    });

    Effect::new(move |_| set_body_scroll(menu.body_scroll()));
    on_cleanup(|| set_body_scroll(BodyScroll::Free));

    use_scene(nav_ref, entrance_scene);
    use_scene(menu_ref, move || {
        if menu.is_open() {
            menu_scene()
        } else {
            Scene::new()
        }
    });

    let desktop_links = NAV_ITEMS
        .iter()
        .filter(|item| !item.is_cta())
        .enumerate()
        .map(|(i, item)| {
            view! {
                {(i > 0).then(|| view! { <span class="nav-separator">"|"</span> })}
                <a href=item.href() class="nav-link">{item.label}</a>
            }
        })
        .collect_view();

    let desktop_cta = NAV_ITEMS
        .iter()
        .filter(|item| item.is_cta())
        .map(|item| view! { <a href=item.href() class="nav-cta">{item.label}</a> })
        .collect_view();

    let mobile_links = NAV_ITEMS
        .iter()
        .map(|item| {
            let class = if item.is_cta() { "mobile-cta" } else { "mobile-nav-link" };
            view! {
                <a
                    href=item.href()
                    class=class
                    data-menu-link=""
                    on:click=move |_| {
                        menu.link_activated();
                    }
                >
                    {item.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <nav
            node_ref=nav_ref
            id="main-navbar"
            class="navbar"
            class:scrolled=move || is_scrolled(scroll_y.get())
        >
            <div class="nav-inner">
                <a href="#hero" class="nav-logo">
                    "Bunk"<span class="logo-accent">"Mate"</span>
                </a>

                <div id="desktop-nav" class="nav-desktop">
                    <div class="nav-links">{desktop_links}</div>
                    {desktop_cta}
                </div>

                <button
                    class="menu-btn"
                    class:open=move || menu.is_open()
                    aria-label=move || menu.button_label()
                    aria-expanded=move || menu.is_open().to_string()
                    aria-controls="mobile-menu"
                    on:click=move |_| {
                        menu.toggle();
                    }
                >
                    <span class="menu-line"></span>
                    <span class="menu-line"></span>
                    <span class="menu-line"></span>
                </button>
            </div>
        </nav>

        <div
            node_ref=menu_ref
            id="mobile-menu"
            class="mobile-menu"
            class:open=move || menu.is_open()
        >
            {mobile_links}
        </div>
    }
}
