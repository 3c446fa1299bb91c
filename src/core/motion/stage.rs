//! Binding a [`Scene`] to mounted elements.
//!
//! [`Stage`] is the seam between the animation model and whatever renders it:
//! the browser DOM in the hydrated app, a recording fake in tests. Binding
//! resolves every cue's target and trigger, parks targets in their start pose,
//! plays mount cues, and groups scroll cues per trigger element.

use super::pose::Pose;
use super::scene::{Cue, Motion, Scene, Target, Trigger};
use super::scroll::Span;
use super::trigger::{Action, Crossing, TriggerStart, TriggerState, Zone};

/// An element that can be queried and styled.
pub trait Stage: Clone {
    /// Descendants matching a CSS selector, in document order
    fn select_all(&self, selector: &str) -> Vec<Self>;

    /// Set one inline style property
    fn set_style(&self, property: &str, value: &str);

    /// Flush pending style changes so the next change transitions from them
    fn reflow(&self) {}

    /// Vertical extent in document coordinates, ignoring any CSS transform
    fn layout_span(&self) -> Span;
}

/// Resolve `target` against `scope`. Unmatched selectors resolve to nothing.
pub fn resolve<N: Stage>(scope: &N, target: &Target) -> Vec<N> {
    match target {
        Target::Scope => vec![scope.clone()],
        Target::All(selector) => scope.select_all(selector),
        Target::Nth(selector, index) => scope
            .select_all(selector)
            .into_iter()
            .nth(*index)
            .into_iter()
            .collect(),
        Target::Within(parent, selector) => resolve(scope, parent)
            .iter()
            .flat_map(|node| node.select_all(selector))
            .collect(),
        Target::NthWithin(parent, selector, index) => resolve(scope, parent)
            .iter()
            .filter_map(|node| node.select_all(selector).into_iter().nth(*index))
            .collect(),
    }
}

/// A cue resolved to one concrete element.
#[derive(Clone, Debug)]
pub struct Track<N> {
    pub node: N,
    pub cue: Cue,
}

impl<N: Stage> Track<N> {
    fn park(&self) {
        if let Motion::Tween { from, .. } = &self.cue.motion {
            self.node.set_style("transition", "none");
            write_pose(&self.node, from);
        }
    }

    /// Carry out `action` on this element.
    pub fn perform(&self, action: Action) {
        let timing = &self.cue.timing;
        match (&self.cue.motion, action) {
            (_, Action::None) => {}
            (Motion::Tween { to, .. }, Action::Play) => {
                let transition = transition(to, timing.duration, &timing.ease.css(), timing.delay);
                self.node.set_style("transition", &transition);
                write_pose(&self.node, to);
            }
            (Motion::Tween { from, .. }, Action::Reverse) => {
                let transition = transition(
                    from,
                    timing.duration,
                    &timing.ease.css_reversed(),
                    timing.reverse_delay,
                );
                self.node.set_style("transition", &transition);
                write_pose(&self.node, from);
            }
            // a transition can't be frozen mid-flight, let it finish
            (Motion::Tween { .. }, Action::Pause | Action::Resume) => {}
            (Motion::Loop { keyframes }, Action::Play | Action::Resume) => {
                let animation = format!(
                    "{keyframes} {}s {} {}s infinite alternate",
                    secs(timing.duration),
                    timing.ease.css(),
                    secs(timing.delay)
                );
                self.node.set_style("animation", &animation);
                self.node.set_style("animation-play-state", "running");
            }
            (Motion::Loop { .. }, Action::Pause | Action::Reverse) => {
                self.node.set_style("animation-play-state", "paused");
            }
        }
    }
}

fn write_pose<N: Stage>(node: &N, pose: &Pose) {
    for (property, value) in pose.declarations() {
        node.set_style(property, &value);
    }
}

/// `transition` shorthand covering every property `pose` animates
pub fn transition(pose: &Pose, duration: f64, ease: &str, delay: f64) -> String {
    let (duration, delay) = (secs(duration), secs(delay));
    pose.transition_properties()
        .into_iter()
        .map(|property| format!("{property} {duration}s {ease} {delay}s"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Millisecond precision, enough for CSS and free of float noise like 0.20000000000000007
fn secs(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[derive(Clone, Debug)]
pub enum Cause<N> {
    Mount,
    Scroll { node: N, start: TriggerStart },
}

/// Tracks that share one trigger.
#[derive(Clone, Debug)]
pub struct Binding<N> {
    pub cause: Cause<N>,
    pub tracks: Vec<Track<N>>,
    state: TriggerState,
}

impl<N: Stage> Binding<N> {
    /// The element and start line to observe, for scroll bindings
    pub fn observed(&self) -> Option<(&N, TriggerStart)> {
        match &self.cause {
            Cause::Mount => None,
            Cause::Scroll { node, start } => Some((node, *start)),
        }
    }

    pub fn is_scroll(&self) -> bool {
        self.observed().is_some()
    }

    /// Carry out `action` on every track, regardless of toggle actions.
    pub fn apply(&self, action: Action) {
        for track in &self.tracks {
            track.perform(action);
        }
    }

    /// Apply each track's response to `crossing`.
    pub fn cross(&self, crossing: Crossing) {
        for track in &self.tracks {
            track.perform(track.cue.toggle.action(crossing));
        }
    }

    /// Feed a fresh observation of the trigger element and react to it.
    pub fn update(&mut self, zone: Zone) -> Vec<Crossing> {
        let crossings = self.state.advance(zone);
        for crossing in &crossings {
            self.cross(*crossing);
        }
        crossings
    }
}

/// Resolve `scene` against `scope` and start it.
///
/// Returns the scroll bindings still waiting for their triggers. Mount cues
/// have already been played. A missing scope, or a cue whose target or
/// trigger element is not in the tree, is skipped without error.
pub fn bind<N: Stage>(scope: Option<&N>, scene: &Scene) -> Vec<Binding<N>> {
    let Some(scope) = scope else {
        return Vec::new();
    };

    let mut groups: Vec<(Option<(Target, TriggerStart)>, Binding<N>)> = Vec::new();

    for cue in scene.cues() {
        let nodes = resolve(scope, &cue.target);
        if nodes.is_empty() {
            continue;
        }

        let (key, cause) = match &cue.trigger {
            Trigger::Mount => (None, Cause::Mount),
            Trigger::Scroll { element, start } => {
                let Some(node) = resolve(scope, element).into_iter().next() else {
                    continue;
                };
                (
                    Some((element.clone(), *start)),
                    Cause::Scroll {
                        node,
                        start: *start,
                    },
                )
            }
        };

        let tracks = nodes.into_iter().map(|node| Track {
            node,
            cue: cue.clone(),
        });

        match groups.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, binding)) => binding.tracks.extend(tracks),
            None => groups.push((
                key,
                Binding {
                    cause,
                    tracks: tracks.collect(),
                    state: TriggerState::new(),
                },
            )),
        }
    }

    for (_, binding) in &groups {
        for track in &binding.tracks {
            track.park();
        }
    }
    if !groups.is_empty() {
        scope.reflow();
    }

    let mut pending = Vec::with_capacity(groups.len());
    for (_, binding) in groups {
        if binding.is_scroll() {
            pending.push(binding);
        } else {
            binding.apply(Action::Play);
        }
    }
    pending
}


#[cfg(test)]
mod tests {
    use super::fake::FakeNode;
    use super::*;
    use crate::core::motion::{At, Ease, Pose, Timeline, ToggleActions};

    const START: TriggerStart = TriggerStart::top(85.0);

    fn fade_in(target: Target) -> Cue {
        Cue::tween(
            target,
            Pose::new().opacity(0.0).y(40.0),
            Pose::new().opacity(1.0).y(0.0),
            0.6,
            Ease::Power2Out,
        )
    }

    fn tree() -> (FakeNode, FakeNode, FakeNode) {
        let scope = FakeNode::new(&["section"]);
        let title = scope.child(FakeNode::new(&["h2"]));
        let body = scope.child(FakeNode::new(&["p"]));
        (scope, title, body)
    }

    #[test]
    fn test_missing_scope_binds_nothing() {
        let mut scene = Scene::new();
        scene.push(fade_in(Target::all("h2")).when_visible(START));
        let bindings = bind::<FakeNode>(None, &scene);
        assert!(bindings.is_empty());
    }

    #[test]
    fn test_missing_trigger_element_binds_nothing() {
        let (scope, title, _) = tree();
        let mut scene = Scene::new();
        scene.push(fade_in(Target::all("h2")).when(Target::all("[data-absent]"), START));

        let bindings = bind(Some(&scope), &scene);
        assert!(bindings.is_empty());
        assert!(title.writes().is_empty());
    }

    #[test]
    fn test_missing_target_is_skipped() {
        let (scope, _, body) = tree();
        let mut scene = Scene::new();
        scene
            .push(fade_in(Target::all("img")).when_visible(START))
            .push(fade_in(Target::all("p")).when_visible(START));

        let bindings = bind(Some(&scope), &scene);
        assert_eq!(bindings.len(), 1);
        assert!(bindings[0].tracks[0].node.same(&body));
    }

    #[test]
    fn test_bind_parks_targets_in_start_pose() {
        let (scope, title, _) = tree();
        let mut scene = Scene::new();
        scene.push(fade_in(Target::all("h2")).when_visible(START));

        let _bindings = bind(Some(&scope), &scene);
        assert_eq!(title.style("transition").as_deref(), Some("none"));
        assert_eq!(title.style("opacity").as_deref(), Some("0"));
        assert_eq!(scope.reflows(), 1);
    }

    #[test]
    fn test_mount_cues_play_immediately() {
        let (scope, title, _) = tree();
        let mut scene = Scene::new();
        scene.push(fade_in(Target::all("h2")).delay(0.1));

        let pending = bind(Some(&scope), &scene);
        assert!(pending.is_empty());
        assert_eq!(title.style("opacity").as_deref(), Some("1"));
        let transition = title.style("transition").unwrap();
        assert!(transition.contains("opacity 0.6s"));
        assert!(transition.ends_with("0.1s"));
    }

    #[test]
    fn test_cues_sharing_a_trigger_share_a_binding() {
        let (scope, _, _) = tree();
        let mut scene = Scene::new();
        scene
            .push(fade_in(Target::all("h2")).when(Target::Scope, START))
            .push(fade_in(Target::all("p")).when(Target::Scope, START))
            .push(fade_in(Target::all("p")).when(Target::Scope, TriggerStart::top(70.0)));

        let bindings = bind(Some(&scope), &scene);
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[0].tracks.len(), 2);
        assert!(bindings[0].observed().unwrap().0.same(&scope));
    }

    #[test]
    fn test_enter_plays_and_leave_back_reverses() {
        let (scope, title, _) = tree();
        let mut scene = Scene::new();
        scene.push(fade_in(Target::all("h2")).when_visible(START));
        let mut bindings = bind(Some(&scope), &scene);
        let binding = &mut bindings[0];

        assert!(binding.update(Zone::Before).is_empty());
        assert_eq!(title.style("opacity").as_deref(), Some("0"));

        assert_eq!(binding.update(Zone::Active), vec![Crossing::Enter]);
        assert_eq!(title.style("opacity").as_deref(), Some("1"));

        // scrolling on past the window keeps the end state
        binding.update(Zone::After);
        assert_eq!(title.style("opacity").as_deref(), Some("1"));

        binding.update(Zone::Active);
        binding.update(Zone::Before);
        assert_eq!(title.style("opacity").as_deref(), Some("0"));
        assert_eq!(
            title.style("transform").as_deref(),
            Some("translate(0px, 40px)")
        );

        // re-entering replays from the start pose
        binding.update(Zone::Active);
        assert_eq!(title.style("opacity").as_deref(), Some("1"));
    }

    #[test]
    fn test_reverse_uses_reverse_delay_and_mirrored_ease() {
        let (scope, title, body) = tree();
        let mut scene = Scene::new();
        scene.extend(
            Timeline::new(Ease::Power3Out)
                .from(Target::all("h2"), Pose::new().opacity(0.0), 0.8, Ease::Power3Out, At::End)
                .from(Target::all("p"), Pose::new().opacity(0.0), 0.8, Ease::Power3Out, At::Overlap(0.6))
                .into_cues(Trigger::scroll(Target::Scope, START)),
        );
        let mut bindings = bind(Some(&scope), &scene);
        bindings[0].update(Zone::Active);
        assert_eq!(
            body.style("transition").as_deref(),
            Some("opacity 0.8s cubic-bezier(0.165, 0.84, 0.44, 1) 0.2s")
        );

        bindings[0].update(Zone::Before);
        let reverse = title.style("transition").unwrap();
        assert!(reverse.contains(&Ease::Power3Out.css_reversed()));
        assert!(reverse.ends_with("0.2s"));
        assert!(body.style("transition").unwrap().ends_with(" 0s"));
    }

    #[test]
    fn test_loop_pauses_off_screen() {
        let (scope, title, _) = tree();
        let mut scene = Scene::new();
        scene.push(
            Cue::looped(Target::all("h2"), "alarm-ring", 0.15, Ease::Power1InOut)
                .delay(1.0)
                .when(Target::Scope, START),
        );
        let mut bindings = bind(Some(&scope), &scene);
        // loops have no start pose
        assert!(title.writes().is_empty());

        bindings[0].update(Zone::Active);
        assert!(title.style("animation").unwrap().starts_with("alarm-ring 0.15s"));
        assert_eq!(title.style("animation-play-state").as_deref(), Some("running"));

        bindings[0].update(Zone::After);
        assert_eq!(title.style("animation-play-state").as_deref(), Some("paused"));

        bindings[0].update(Zone::Active);
        assert_eq!(title.style("animation-play-state").as_deref(), Some("running"));
    }

    #[test]
    fn test_within_resolves_descendants_of_each_parent() {
        let scope = FakeNode::new(&["section"]);
        let first = scope.child(FakeNode::new(&["[data-line]"]));
        let second = scope.child(FakeNode::new(&["[data-line]"]));
        let mark = second.child(FakeNode::new(&[".highlight"]));
        first.child(FakeNode::new(&["em"]));

        let found = resolve(&scope, &Target::nth("[data-line]", 1).find(".highlight, .highlight-red"));
        assert_eq!(found.len(), 1);
        assert!(found[0].same(&mark));
        assert!(resolve(&scope, &Target::nth("[data-line]", 5)).is_empty());
    }

    #[test]
    fn test_nth_within_picks_per_parent() {
        let scope = FakeNode::new(&["section"]);
        let card = scope.child(FakeNode::new(&["[data-card]"]));
        card.child(FakeNode::new(&["[data-text]"]));
        let second = card.child(FakeNode::new(&["[data-text]"]));

        let found = resolve(&scope, &Target::nth("[data-card]", 0).find_nth("[data-text]", 1));
        assert_eq!(found.len(), 1);
        assert!(found[0].same(&second));
        assert!(resolve(&scope, &Target::all("[data-card]").find_nth("[data-text]", 2)).is_empty());
    }

    #[test]
    fn test_apply_ignores_toggle_actions() {
        let (scope, title, body) = tree();
        let mut scene = Scene::new();
        scene
            .push(fade_in(Target::all("h2")).when(Target::Scope, START))
            .push(
                fade_in(Target::all("p"))
                    .when(Target::Scope, START)
                    .toggle(ToggleActions::WHILE_VISIBLE),
            );
        let bindings = bind(Some(&scope), &scene);

        bindings[0].apply(Action::Play);
        assert_eq!(title.style("opacity").as_deref(), Some("1"));
        assert_eq!(body.style("opacity").as_deref(), Some("1"));

        bindings[0].apply(Action::Reverse);
        assert_eq!(title.style("opacity").as_deref(), Some("0"));
        assert_eq!(body.style("opacity").as_deref(), Some("0"));
    }

    #[test]
    fn test_toggle_none_leaves_element_alone() {
        let (scope, title, _) = tree();
        let mut scene = Scene::new();
        scene.push(
            fade_in(Target::all("h2"))
                .when_visible(START)
                .toggle(ToggleActions {
                    on_leave_back: Action::None,
                    ..ToggleActions::REVERSIBLE
                }),
        );
        let mut bindings = bind(Some(&scope), &scene);
        bindings[0].update(Zone::Active);
        bindings[0].update(Zone::Before);
        assert_eq!(title.style("opacity").as_deref(), Some("1"));
    }
}
