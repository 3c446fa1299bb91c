//! Viewport triggers: where an element sits relative to its start line, and
//! what to do when it crosses it.

use derive_more::Display;

/// `top N%`: the trigger fires when the element's top edge rises above
/// `N%` of the viewport height.
#[derive(Clone, Copy, Debug, PartialEq, Display)]
#[display("top {viewport_percent}%")]
pub struct TriggerStart {
    pub viewport_percent: f64,
}

impl TriggerStart {
    pub const fn top(viewport_percent: f64) -> Self {
        Self { viewport_percent }
    }

    /// Start line in pixels from the top of a viewport `viewport_height` tall
    pub fn line(&self, viewport_height: f64) -> f64 {
        viewport_height * self.viewport_percent / 100.0
    }
}

/// `bottom top`: the window closes once the element's bottom edge has left
/// through the top of the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
#[display("bottom top")]
pub struct TriggerEnd;

impl TriggerEnd {
    pub fn passed(&self, bottom: f64) -> bool {
        bottom <= 0.0
    }
}

/// Where an element is relative to its trigger window.
///
/// The window opens when the element's top crosses the start line and closes
/// when its bottom leaves through the top of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    Before,
    Active,
    After,
}

impl Zone {
    /// Classify an element from its bounding box, in viewport coordinates.
    pub fn locate(top: f64, bottom: f64, viewport_height: f64, start: TriggerStart) -> Zone {
        if top >= start.line(viewport_height) {
            Zone::Before
        } else if TriggerEnd.passed(bottom) {
            Zone::After
        } else {
            Zone::Active
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crossing {
    /// Scrolling down into the window
    Enter,
    /// Scrolling down out of the window
    Leave,
    /// Scrolling up back into the window
    EnterBack,
    /// Scrolling up back out of the window
    LeaveBack,
}

/// Tracks the last known zone and reports the crossings between updates.
#[derive(Clone, Debug, Default)]
pub struct TriggerState {
    zone: Option<Zone>,
}

impl TriggerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to `zone` and return every crossing passed on the way.
    ///
    /// The first observation counts as arriving from `Before`, so an element
    /// that is already on screen (or already scrolled past) at load still
    /// plays its entrance.
    pub fn advance(&mut self, zone: Zone) -> Vec<Crossing> {
        use Crossing::*;
        use Zone::*;

        let previous = self.zone.replace(zone).unwrap_or(Before);
        match (previous, zone) {
            (Before, Active) => vec![Enter],
            (Before, After) => vec![Enter, Leave],
            (Active, After) => vec![Leave],
            (Active, Before) => vec![LeaveBack],
            (After, Active) => vec![EnterBack],
            (After, Before) => vec![EnterBack, LeaveBack],
            (Before, Before) | (Active, Active) | (After, After) => Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    None,
    Play,
    Pause,
    Resume,
    Reverse,
}

/// What happens on each crossing, in the order enter, leave, enter-back,
/// leave-back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: Action,
    pub on_leave: Action,
    pub on_enter_back: Action,
    pub on_leave_back: Action,
}

impl ToggleActions {
    /// `play none none reverse`: play on the way in, undo when scrolled back above
    pub const REVERSIBLE: Self = Self {
        on_enter: Action::Play,
        on_leave: Action::None,
        on_enter_back: Action::None,
        on_leave_back: Action::Reverse,
    };

    /// `play pause resume pause`: run only while the window is on screen
    pub const WHILE_VISIBLE: Self = Self {
        on_enter: Action::Play,
        on_leave: Action::Pause,
        on_enter_back: Action::Resume,
        on_leave_back: Action::Pause,
    };

    pub fn action(&self, crossing: Crossing) -> Action {
        match crossing {
            Crossing::Enter => self.on_enter,
            Crossing::Leave => self.on_leave,
            Crossing::EnterBack => self.on_enter_back,
            Crossing::LeaveBack => self.on_leave_back,
        }
    }
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self::REVERSIBLE
    }
}
