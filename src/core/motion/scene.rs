//! Declarative description of a section's animations.
//!
//! A [`Scene`] is plain data: which elements move, between which poses, with
//! what timing, and what sets them off. Building one touches no DOM, so every
//! section's scene can be inspected in tests. [`super::bind`] resolves it
//! against a mounted subtree.

use super::ease::Ease;
use super::pose::Pose;
use super::trigger::{ToggleActions, TriggerStart};

/// Which element(s) a cue addresses, relative to the scene's scope element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// The scope element itself
    Scope,
    /// Every descendant matching a selector
    All(&'static str),
    /// The nth descendant matching a selector
    Nth(&'static str, usize),
    /// Descendants matching a selector, inside each element of another target
    Within(Box<Target>, &'static str),
    /// The nth matching descendant inside each element of another target
    NthWithin(Box<Target>, &'static str, usize),
}

impl Target {
    pub fn all(selector: &'static str) -> Self {
        Target::All(selector)
    }

    pub fn nth(selector: &'static str, index: usize) -> Self {
        Target::Nth(selector, index)
    }

    /// Narrow this target to its descendants matching `selector`
    pub fn find(self, selector: &'static str) -> Self {
        Target::Within(Box::new(self), selector)
    }

    /// Narrow this target to its nth descendant matching `selector`
    pub fn find_nth(self, selector: &'static str, index: usize) -> Self {
        Target::NthWithin(Box::new(self), selector, index)
    }

    /// One `Nth` target per index, for staggering a known number of siblings
    pub fn each(selector: &'static str, count: usize) -> Vec<Target> {
        (0..count).map(|i| Target::Nth(selector, i)).collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Trigger {
    /// Plays as soon as the scene is bound
    Mount,
    /// Plays when `element` crosses `start`
    Scroll { element: Target, start: TriggerStart },
}

impl Trigger {
    pub fn scroll(element: Target, start: TriggerStart) -> Self {
        Trigger::Scroll { element, start }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Motion {
    /// Transition between two poses
    Tween { from: Pose, to: Pose },
    /// Infinite alternating keyframe animation declared in the style sheet
    Loop { keyframes: &'static str },
}

/// Seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub duration: f64,
    pub delay: f64,
    /// Delay before playing backwards, so a reversed timeline unwinds as a unit
    pub reverse_delay: f64,
    pub ease: Ease,
}

impl Timing {
    pub fn new(duration: f64, ease: Ease) -> Self {
        Self {
            duration,
            delay: 0.0,
            reverse_delay: 0.0,
            ease,
        }
    }
}

/// One animated target.
#[derive(Clone, Debug, PartialEq)]
pub struct Cue {
    pub target: Target,
    pub motion: Motion,
    pub timing: Timing,
    pub trigger: Trigger,
    pub toggle: ToggleActions,
}

impl Cue {
    /// Tween `target` from `from` to `to`, playing on mount until a trigger is set.
    pub fn tween(target: Target, from: Pose, to: Pose, duration: f64, ease: Ease) -> Self {
        let (from, to) = Pose::pair(from, to);
        Self {
            target,
            motion: Motion::Tween { from, to },
            timing: Timing::new(duration, ease),
            trigger: Trigger::Mount,
            toggle: ToggleActions::REVERSIBLE,
        }
    }

    /// Alternating keyframe loop, paused whenever its trigger is off screen
    pub fn looped(target: Target, keyframes: &'static str, duration: f64, ease: Ease) -> Self {
        Self {
            target,
            motion: Motion::Loop { keyframes },
            timing: Timing::new(duration, ease),
            trigger: Trigger::Mount,
            toggle: ToggleActions::WHILE_VISIBLE,
        }
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        self.timing.delay = seconds;
        self
    }

    /// Reveal on visibility: play when `element` crosses `start`, reverse when
    /// scrolled back above it.
    pub fn when(mut self, element: Target, start: TriggerStart) -> Self {
        self.trigger = Trigger::scroll(element, start);
        self
    }

    /// Shorthand for a cue triggered by its own target
    pub fn when_visible(self, start: TriggerStart) -> Self {
        let element = self.target.clone();
        self.when(element, start)
    }

    pub fn toggle(mut self, toggle: ToggleActions) -> Self {
        self.toggle = toggle;
        self
    }

    pub fn is_scroll_triggered(&self) -> bool {
        matches!(self.trigger, Trigger::Scroll { .. })
    }
}

/// All cues of one section.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    cues: Vec<Cue>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cue: Cue) -> &mut Self {
        self.cues.push(cue);
        self
    }

    pub fn extend(&mut self, cues: impl IntoIterator<Item = Cue>) -> &mut Self {
        self.cues.extend(cues);
        self
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Cues addressing exactly `target`
    #[cfg(test)]
    pub fn cues_for<'a>(&'a self, target: &Target) -> impl Iterator<Item = &'a Cue> + use<'a> {
        let target = target.clone();
        self.cues.iter().filter(move |cue| cue.target == target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_pairs_poses() {
        let cue = Cue::tween(
            Target::Scope,
            Pose::new().opacity(0.0).y(50.0),
            Pose::new().opacity(1.0),
            0.8,
            Ease::Power3Out,
        );
        match cue.motion {
            Motion::Tween { to, .. } => assert_eq!(to.y, Some(0.0)),
            Motion::Loop { .. } => panic!("expected a tween"),
        }
        assert_eq!(cue.trigger, Trigger::Mount);
    }

    #[test]
    fn test_when_visible_uses_own_target() {
        let target = Target::nth("[data-line]", 2);
        let cue = Cue::tween(target.clone(), Pose::new(), Pose::shown(), 0.5, Ease::Power2Out)
            .when_visible(TriggerStart::top(85.0));
        assert_eq!(
            cue.trigger,
            Trigger::scroll(target, TriggerStart::top(85.0))
        );
        assert!(cue.is_scroll_triggered());
    }

    #[test]
    fn test_each_and_find() {
        let targets = Target::each("[data-word]", 3);
        assert_eq!(targets.len(), 3);
        assert_eq!(targets[2], Target::Nth("[data-word]", 2));

        let nested = Target::nth("[data-card]", 1).find("[data-img]");
        assert_eq!(
            nested,
            Target::Within(Box::new(Target::Nth("[data-card]", 1)), "[data-img]")
        );

        let text = Target::nth("[data-card]", 1).find_nth("[data-text]", 2);
        assert_eq!(
            text,
            Target::NthWithin(Box::new(Target::Nth("[data-card]", 1)), "[data-text]", 2)
        );
    }

    #[test]
    fn test_looped_defaults_to_pause_off_screen() {
        let cue = Cue::looped(Target::all("img"), "alarm-ring", 0.15, Ease::Power1InOut);
        assert_eq!(cue.toggle, ToggleActions::WHILE_VISIBLE);
    }
}
