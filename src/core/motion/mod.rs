//! Scroll-triggered animation model.
//!
//! Sections describe their animations as a [`Scene`]: cues that move an
//! element between two [`Pose`]s with a given [`Ease`], either on mount or when
//! a trigger element crosses a [`TriggerStart`] line. [`Timeline`] places
//! sequenced steps on a shared clock. [`bind`] resolves a scene against any
//! [`Stage`] and returns the scroll bindings, which a [`ScrollDriver`] keeps in
//! step with the page's scroll position.

mod ease;
mod pose;
mod scene;
mod scroll;
mod stage;
mod timeline;
mod trigger;

pub use ease::{Ease, LINEAR_SAMPLES};
pub use pose::{Offset, Pose};
pub use scene::{Cue, Motion, Scene, Target, Timing, Trigger};
pub use scroll::{ScrollDriver, Span};
pub use stage::{Binding, Cause, Stage, Track, bind, resolve, transition};
pub use timeline::{At, Step, Timeline};
pub use trigger::{Action, Crossing, ToggleActions, TriggerEnd, TriggerStart, TriggerState, Zone};

#[cfg(test)]
pub(crate) use stage::fake;
