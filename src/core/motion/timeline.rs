//! Sequenced tweens sharing one trigger.
//!
//! Steps are placed on a time axis the same way a GSAP timeline places them:
//! by default at the current end, or relative to it (`-=0.35`, `+=0.2`), or
//! at an absolute time. Once built, the timeline flattens into cues whose
//! delays reproduce the sequence, and whose reverse delays make the whole
//! group unwind backwards when the trigger is left.

use super::ease::Ease;
use super::pose::Pose;
use super::scene::{Cue, Motion, Target, Timing, Trigger};
use super::trigger::ToggleActions;

/// Where the next step starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum At {
    /// At the current end of the timeline
    End,
    /// `-=seconds` before the current end
    Overlap(f64),
    /// `+=seconds` after the current end
    Gap(f64),
    /// At an absolute time
    Time(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub target: Target,
    pub from: Pose,
    pub to: Pose,
    pub start: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl Step {
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    steps: Vec<Step>,
    ease: Ease,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(Ease::Power3Out)
    }
}

impl Timeline {
    /// Empty timeline whose steps default to `ease`
    pub fn new(ease: Ease) -> Self {
        Self {
            steps: Vec::new(),
            ease,
        }
    }

    /// Current end of the timeline in seconds
    pub fn duration(&self) -> f64 {
        self.steps.iter().map(Step::end).fold(0.0, f64::max)
    }

    #[cfg(test)]
    fn steps(&self) -> &[Step] {
        &self.steps
    }

    fn resolve(&self, at: At) -> f64 {
        let end = self.duration();
        match at {
            At::End => end,
            At::Overlap(s) => (end - s).max(0.0),
            At::Gap(s) => end + s,
            At::Time(t) => t.max(0.0),
        }
    }

    /// Add a step with the timeline's default ease.
    pub fn add(self, target: Target, from: Pose, to: Pose, duration: f64, at: At) -> Self {
        let ease = self.ease;
        self.add_eased(target, from, to, duration, ease, at)
    }

    pub fn add_eased(
        mut self,
        target: Target,
        from: Pose,
        to: Pose,
        duration: f64,
        ease: Ease,
        at: At,
    ) -> Self {
        let start = self.resolve(at);
        let (from, to) = Pose::pair(from, to);
        self.steps.push(Step {
            target,
            from,
            to,
            start,
            duration,
            ease,
        });
        self
    }

    /// Animate from `from` to the element's natural state
    pub fn from(self, target: Target, from: Pose, duration: f64, ease: Ease, at: At) -> Self {
        self.add_eased(target, from, Pose::new(), duration, ease, at)
    }

    /// Add one step per target, each starting `each` seconds after the previous.
    pub fn stagger(
        mut self,
        targets: impl IntoIterator<Item = Target>,
        from: Pose,
        to: Pose,
        duration: f64,
        each: f64,
        ease: Ease,
        at: At,
    ) -> Self {
        let start = self.resolve(at);
        let (from, to) = Pose::pair(from, to);
        for (i, target) in targets.into_iter().enumerate() {
            self.steps.push(Step {
                target,
                from: from.clone(),
                to: to.clone(),
                start: start + each * i as f64,
                duration,
                ease,
            });
        }
        self
    }

    /// Flatten into cues sharing `trigger`.
    pub fn into_cues(self, trigger: Trigger) -> Vec<Cue> {
        let total = self.duration();
        self.steps
            .into_iter()
            .map(|step| {
                let reverse_delay = (total - step.end()).max(0.0);
                Cue {
                    timing: Timing {
                        duration: step.duration,
                        delay: step.start,
                        reverse_delay,
                        ease: step.ease,
                    },
                    target: step.target,
                    motion: Motion::Tween {
                        from: step.from,
                        to: step.to,
                    },
                    trigger: trigger.clone(),
                    toggle: ToggleActions::REVERSIBLE,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::motion::TriggerStart;

    fn fade() -> (Pose, Pose) {
        (Pose::new().opacity(0.0), Pose::new().opacity(1.0))
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_sequential_placement() {
        let (from, to) = fade();
        let tl = Timeline::default()
            .add(Target::nth("p", 0), from.clone(), to.clone(), 0.7, At::End)
            .add(Target::nth("p", 1), from, to, 0.5, At::End);
        assert!(approx(tl.steps()[1].start, 0.7));
        assert!(approx(tl.duration(), 1.2));
    }

    #[test]
    fn test_overlap_and_gap() {
        let (from, to) = fade();
        let tl = Timeline::default()
            .add(Target::Scope, from.clone(), to.clone(), 0.7, At::End)
            .add(Target::Scope, from.clone(), to.clone(), 0.7, At::Overlap(0.35))
            .add(Target::Scope, from, to, 0.5, At::Gap(0.1));
        assert!(approx(tl.steps()[1].start, 0.35));
        assert!(approx(tl.steps()[2].start, 1.15));
    }

    #[test]
    fn test_overlap_never_goes_negative() {
        let (from, to) = fade();
        let tl = Timeline::default().add(Target::Scope, from, to, 0.5, At::Overlap(2.0));
        assert_eq!(tl.steps()[0].start, 0.0);
    }

    #[test]
    fn test_stagger_spreads_starts() {
        let (from, to) = fade();
        let tl = Timeline::default().stagger(
            Target::each(".step", 3),
            from,
            to,
            0.5,
            0.15,
            Ease::Power2Out,
            At::Time(0.4),
        );
        let starts: Vec<f64> = tl.steps().iter().map(|s| s.start).collect();
        assert!(approx(starts[0], 0.4));
        assert!(approx(starts[1], 0.55));
        assert!(approx(starts[2], 0.7));
        assert!(approx(tl.duration(), 1.2));
    }

    #[test]
    fn test_from_animates_to_natural_state() {
        let tl = Timeline::default().from(
            Target::Scope,
            Pose::new().x(-50.0).opacity(0.0),
            0.8,
            Ease::Power3Out,
            At::End,
        );
        let step = &tl.steps()[0];
        assert_eq!(step.to.opacity, Some(1.0));
        assert_eq!(step.to.transform().unwrap(), "translate(0px, 0px)");
    }

    #[test]
    fn test_cues_reverse_as_a_unit() {
        let (from, to) = fade();
        let cues = Timeline::default()
            .add(Target::nth("p", 0), from.clone(), to.clone(), 0.8, At::End)
            .add(Target::nth("p", 1), from, to, 0.8, At::Overlap(0.6))
            .into_cues(Trigger::scroll(Target::Scope, TriggerStart::top(70.0)));

        assert_eq!(cues.len(), 2);
        // the last step to finish is the first to reverse
        assert!(approx(cues[1].timing.reverse_delay, 0.0));
        assert!(approx(cues[0].timing.reverse_delay, 0.2));
        assert!(approx(cues[1].timing.delay, 0.2));
        assert!(cues.iter().all(|c| c.is_scroll_triggered()));
    }
}
