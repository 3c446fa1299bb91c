//! Easing curves.
//!
//! Names and formulas follow the conventions of GSAP's ease catalogue so the
//! timings read the same as the motion designs they come from. Every curve
//! renders to a CSS `<easing-function>`: cubic-bezier approximations for the
//! polynomial and exponential families, and a sampled `linear()` curve for
//! curves that overshoot (`back`, `elastic`).

use std::f64::consts::TAU;

/// Number of segments used when sampling an overshooting curve into `linear()`
pub const LINEAR_SAMPLES: usize = 40;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Ease {
    Linear,
    Power1InOut,
    Power2Out,
    Power2InOut,
    #[default]
    Power3Out,
    Power4Out,
    ExpoOut,
    /// `back.out(overshoot)`, GSAP's default overshoot is 1.70158
    BackOut(f64),
    /// `elastic.out(amplitude, period)`
    ElasticOut(f64, f64),
}

impl Ease {
    pub const fn back(overshoot: f64) -> Self {
        Ease::BackOut(overshoot)
    }

    pub const fn elastic(amplitude: f64, period: f64) -> Self {
        Ease::ElasticOut(amplitude, period)
    }

    /// Progress at time `t`, with `t` clamped to `0..=1`.
    pub fn value(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Ease::Linear => t,
            Ease::Power1InOut => in_out(t, 2),
            Ease::Power2Out => out(t, 3),
            Ease::Power2InOut => in_out(t, 3),
            Ease::Power3Out => out(t, 4),
            Ease::Power4Out => out(t, 5),
            Ease::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
            Ease::BackOut(overshoot) => {
                let p = 1.0 - t;
                1.0 - p * p * ((overshoot + 1.0) * p - overshoot)
            }
            Ease::ElasticOut(amplitude, period) => {
                if t <= 0.0 || t >= 1.0 {
                    return t;
                }
                let amp = amplitude.max(1.0);
                let period = period / amplitude.min(1.0);
                let shift = period / TAU * (1.0 / amp).asin();
                amp * 2f64.powf(-10.0 * t) * ((t - shift) * TAU / period).sin() + 1.0
            }
        }
    }

    #[cfg(test)]
    fn overshoots(&self) -> bool {
        matches!(self, Ease::BackOut(_) | Ease::ElasticOut(..))
    }

    /// CSS timing function for this curve.
    pub fn css(&self) -> String {
        match self.bezier() {
            Some([x1, y1, x2, y2]) => format!("cubic-bezier({x1}, {y1}, {x2}, {y2})"),
            None if *self == Ease::Linear => "linear".to_string(),
            None => self.sampled(LINEAR_SAMPLES, |t| self.value(t)),
        }
    }

    /// Timing function for playing this curve backwards.
    ///
    /// Transitioning back to the start pose with the mirrored curve retraces
    /// the forward motion, the way a reversed tween does.
    pub fn css_reversed(&self) -> String {
        match self.bezier() {
            Some([x1, y1, x2, y2]) => format!(
                "cubic-bezier({}, {}, {}, {})",
                round(1.0 - x2),
                round(1.0 - y2),
                round(1.0 - x1),
                round(1.0 - y1)
            ),
            None if *self == Ease::Linear => "linear".to_string(),
            None => self.sampled(LINEAR_SAMPLES, |t| 1.0 - self.value(1.0 - t)),
        }
    }

    fn bezier(&self) -> Option<[f64; 4]> {
        let points = match self {
            Ease::Power1InOut => [0.455, 0.03, 0.515, 0.955],
            Ease::Power2Out => [0.215, 0.61, 0.355, 1.0],
            Ease::Power2InOut => [0.645, 0.045, 0.355, 1.0],
            Ease::Power3Out => [0.165, 0.84, 0.44, 1.0],
            Ease::Power4Out => [0.23, 1.0, 0.32, 1.0],
            Ease::ExpoOut => [0.19, 1.0, 0.22, 1.0],
            Ease::Linear | Ease::BackOut(_) | Ease::ElasticOut(..) => return None,
        };
        Some(points)
    }

    /// `linear(...)` approximation of `curve` with `segments` evenly spaced stops
    fn sampled(&self, segments: usize, curve: impl Fn(f64) -> f64) -> String {
        let segments = segments.max(1);
        let stops: Vec<String> = (0..=segments)
            .map(|i| format!("{}", round(curve(i as f64 / segments as f64))))
            .collect();
        format!("linear({})", stops.join(", "))
    }
}

fn round(v: f64) -> f64 {
    let r = (v * 10_000.0).round() / 10_000.0;
    // collapse -0 so it prints as "0"
    if r == 0.0 { 0.0 } else { r }
}

fn out(t: f64, power: i32) -> f64 {
    1.0 - (1.0 - t).powi(power)
}

fn in_out(t: f64, power: i32) -> f64 {
    if t < 0.5 {
        (2.0 * t).powi(power) / 2.0
    } else {
        1.0 - (2.0 * (1.0 - t)).powi(power) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 9] = [
        Ease::Linear,
        Ease::Power1InOut,
        Ease::Power2Out,
        Ease::Power2InOut,
        Ease::Power3Out,
        Ease::Power4Out,
        Ease::ExpoOut,
        Ease::BackOut(1.7),
        Ease::ElasticOut(1.0, 0.5),
    ];

    #[test]
    fn test_endpoints() {
        for ease in ALL {
            assert!(ease.value(0.0).abs() < 1e-9, "{ease:?} at 0");
            assert!((ease.value(1.0) - 1.0).abs() < 1e-9, "{ease:?} at 1");
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(Ease::Power3Out.value(-1.0), 0.0);
        assert_eq!(Ease::Power3Out.value(2.0), 1.0);
    }

    #[test]
    fn test_in_out_is_symmetric() {
        let ease = Ease::Power2InOut;
        assert!((ease.value(0.5) - 0.5).abs() < 1e-9);
        assert!((ease.value(0.25) + ease.value(0.75) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_out_curves_front_load_progress() {
        for ease in [Ease::Power2Out, Ease::Power3Out, Ease::Power4Out, Ease::ExpoOut] {
            assert!(ease.value(0.25) > 0.25, "{ease:?}");
        }
        assert!(Ease::Power4Out.value(0.2) > Ease::Power2Out.value(0.2));
    }

    #[test]
    fn test_back_overshoots_then_settles() {
        let ease = Ease::back(2.0);
        let peak = (1..100)
            .map(|i| ease.value(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
        assert!(ease.overshoots());
    }

    #[test]
    fn test_elastic_oscillates_around_target() {
        let ease = Ease::elastic(1.0, 0.4);
        let samples: Vec<f64> = (1..100).map(|i| ease.value(i as f64 / 100.0)).collect();
        assert!(samples.iter().any(|v| *v > 1.0));
        assert!(samples.iter().any(|v| *v < 1.0));
        assert!((ease.value(0.99) - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_css_bezier_for_power_curves() {
        assert_eq!(Ease::Power3Out.css(), "cubic-bezier(0.165, 0.84, 0.44, 1)");
        assert_eq!(Ease::Linear.css(), "linear");
    }

    #[test]
    fn test_css_reversed_mirrors_bezier() {
        assert_eq!(
            Ease::Power2Out.css_reversed(),
            "cubic-bezier(0.645, 0, 0.785, 0.39)"
        );
        assert_eq!(Ease::Linear.css_reversed(), "linear");
    }

    #[test]
    fn test_css_reversed_sampled_curve_keeps_endpoints() {
        let css = Ease::elastic(1.0, 0.5).css_reversed();
        assert!(css.starts_with("linear(0, "));
        assert!(css.ends_with(", 1)"));
    }

    #[test]
    fn test_css_linear_for_overshooting_curves() {
        let css = Ease::back(1.7).css();
        assert!(css.starts_with("linear(0, "));
        assert!(css.ends_with(", 1)"));
        assert_eq!(css.matches(',').count(), LINEAR_SAMPLES);
    }
}
