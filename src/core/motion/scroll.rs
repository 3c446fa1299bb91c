//! Scroll-position triggers.
//!
//! Trigger positions come from layout, so they ignore whatever transform the
//! animation has applied. They are measured once and again whenever the
//! layout changes. Scrolling then only compares the offset against those
//! fixed positions, and an element animating its own box cannot re-trigger
//! itself.

use super::stage::{Binding, Stage};
use super::trigger::{TriggerStart, Zone};

/// Top and bottom edge of an element in document coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Span {
    pub top: f64,
    pub bottom: f64,
}

impl Span {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Zone of an element spanning `self` with the page scrolled to `scroll_y`
    pub fn zone(&self, scroll_y: f64, viewport_height: f64, start: TriggerStart) -> Zone {
        Zone::locate(
            self.top - scroll_y,
            self.bottom - scroll_y,
            viewport_height,
            start,
        )
    }
}

#[derive(Debug)]
struct Watched<N> {
    binding: Binding<N>,
    span: Span,
}

fn measure<N: Stage>(binding: &Binding<N>) -> Span {
    binding
        .observed()
        .map(|(node, _)| node.layout_span())
        .unwrap_or_default()
}

/// Scroll bindings together with their measured trigger positions.
#[derive(Debug)]
pub struct ScrollDriver<N> {
    watched: Vec<Watched<N>>,
}

impl<N: Stage> ScrollDriver<N> {
    /// Measure every scroll binding. Mount bindings are dropped, they have
    /// already played.
    pub fn new(bindings: impl IntoIterator<Item = Binding<N>>) -> Self {
        let watched = bindings
            .into_iter()
            .filter(Binding::is_scroll)
            .map(|binding| Watched {
                span: measure(&binding),
                binding,
            })
            .collect();
        Self { watched }
    }

    pub fn len(&self) -> usize {
        self.watched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watched.is_empty()
    }

    /// Re-measure every trigger after the layout moved.
    pub fn refresh(&mut self) {
        for watched in &mut self.watched {
            watched.span = measure(&watched.binding);
        }
    }

    /// Bring every binding up to date with the scroll position. Returns the
    /// number of crossings that fired.
    pub fn sync(&mut self, scroll_y: f64, viewport_height: f64) -> usize {
        let mut fired = 0;
        for watched in &mut self.watched {
            let Some(start) = watched.binding.observed().map(|(_, start)| start) else {
                continue;
            };
            let zone = watched.span.zone(scroll_y, viewport_height, start);
            fired += watched.binding.update(zone).len();
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::motion::fake::FakeNode;
    use crate::core::motion::{Cue, Ease, Pose, Scene, Target, bind};

    const START: TriggerStart = TriggerStart::top(80.0);
    const VIEWPORT: f64 = 1000.0;

    fn zoom_in() -> Scene {
        let mut scene = Scene::new();
        scene.push(
            Cue::tween(
                Target::all("[data-card]"),
                Pose::new().opacity(0.0).scale(2.5),
                Pose::new().opacity(1.0).scale(1.0),
                0.8,
                Ease::Power4Out,
            )
            .when_visible(START),
        );
        scene
    }

    #[test]
    fn test_span_zone_follows_scroll() {
        let span = Span::new(900.0, 1300.0);
        assert_eq!(span.zone(0.0, VIEWPORT, START), Zone::Before);
        assert_eq!(span.zone(150.0, VIEWPORT, START), Zone::Active);
        assert_eq!(span.zone(1300.0, VIEWPORT, START), Zone::After);
    }

    #[test]
    fn test_mount_bindings_are_not_watched() {
        let scope = FakeNode::new(&["section"]);
        scope.child(FakeNode::new(&["h2"]));
        let mut scene = Scene::new();
        scene.push(Cue::tween(
            Target::all("h2"),
            Pose::new().opacity(0.0),
            Pose::new().opacity(1.0),
            0.5,
            Ease::Power2Out,
        ));
        let driver = ScrollDriver::new(bind(Some(&scope), &scene));
        assert!(driver.is_empty());
    }

    #[test]
    fn test_sync_fires_once_per_crossing() {
        let scope = FakeNode::new(&["section"]);
        let card = scope.child(FakeNode::new(&["[data-card]"]).at(900.0, 1300.0));
        let mut driver = ScrollDriver::new(bind(Some(&scope), &zoom_in()));
        assert_eq!(driver.len(), 1);

        assert_eq!(driver.sync(0.0, VIEWPORT), 0);
        assert_eq!(card.style("opacity").as_deref(), Some("0"));

        assert_eq!(driver.sync(150.0, VIEWPORT), 1);
        assert_eq!(card.style("opacity").as_deref(), Some("1"));
        for _ in 0..5 {
            assert_eq!(driver.sync(150.0, VIEWPORT), 0);
        }

        assert_eq!(driver.sync(0.0, VIEWPORT), 1);
        assert_eq!(card.style("opacity").as_deref(), Some("0"));
    }

    #[test]
    fn test_refresh_picks_up_moved_layout() {
        let scope = FakeNode::new(&["section"]);
        let card = scope.child(FakeNode::new(&["[data-card]"]).at(900.0, 1300.0));
        let mut driver = ScrollDriver::new(bind(Some(&scope), &zoom_in()));
        assert_eq!(driver.sync(0.0, VIEWPORT), 0);

        // an image above finished loading and pushed the card up
        card.place(500.0, 900.0);
        assert_eq!(driver.sync(0.0, VIEWPORT), 0);
        driver.refresh();
        assert_eq!(driver.sync(0.0, VIEWPORT), 1);
        assert_eq!(card.style("opacity").as_deref(), Some("1"));
    }
}
