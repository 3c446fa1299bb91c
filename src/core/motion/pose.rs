//! Style states an element animates between.

use derive_more::Display;

/// Horizontal offset, either in pixels or viewport widths
#[derive(Clone, Copy, Debug, PartialEq, Display)]
pub enum Offset {
    #[display("{_0}px")]
    Px(f64),
    #[display("{_0}vw")]
    Vw(f64),
}

impl Default for Offset {
    fn default() -> Self {
        Offset::Px(0.0)
    }
}

/// A partial style state. Unset properties are left untouched.
///
/// A pose only covers what the page animates: opacity, a composed transform,
/// blur, a circular clip, the highlight sweep (`background-size`), width,
/// and an SVG stroke draw (`stroke-dashoffset` against `pathLength="1"`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pose {
    pub opacity: Option<f64>,
    pub x: Option<Offset>,
    pub y: Option<f64>,
    pub scale: Option<f64>,
    pub scale_x: Option<f64>,
    pub rotate: Option<f64>,
    pub rotate_x: Option<f64>,
    pub rotate_y: Option<f64>,
    pub skew_x: Option<f64>,
    pub perspective: Option<f64>,
    pub origin: Option<&'static str>,
    pub blur: Option<f64>,
    pub clip_circle: Option<f64>,
    pub sweep: Option<f64>,
    pub width: Option<f64>,
    pub dash_offset: Option<f64>,
}

impl Pose {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, value: f64) -> Self {
        self.opacity = Some(value);
        self
    }

    /// Horizontal offset in pixels
    pub fn x(mut self, px: f64) -> Self {
        self.x = Some(Offset::Px(px));
        self
    }

    /// Horizontal offset in viewport widths
    pub fn x_vw(mut self, vw: f64) -> Self {
        self.x = Some(Offset::Vw(vw));
        self
    }

    pub fn y(mut self, px: f64) -> Self {
        self.y = Some(px);
        self
    }

    pub fn scale(mut self, value: f64) -> Self {
        self.scale = Some(value);
        self
    }

    pub fn scale_x(mut self, value: f64) -> Self {
        self.scale_x = Some(value);
        self
    }

    /// Rotation in degrees
    pub fn rotate(mut self, deg: f64) -> Self {
        self.rotate = Some(deg);
        self
    }

    pub fn rotate_x(mut self, deg: f64) -> Self {
        self.rotate_x = Some(deg);
        self
    }

    pub fn rotate_y(mut self, deg: f64) -> Self {
        self.rotate_y = Some(deg);
        self
    }

    pub fn skew_x(mut self, deg: f64) -> Self {
        self.skew_x = Some(deg);
        self
    }

    pub fn perspective(mut self, px: f64) -> Self {
        self.perspective = Some(px);
        self
    }

    pub fn origin(mut self, origin: &'static str) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn blur(mut self, px: f64) -> Self {
        self.blur = Some(px);
        self
    }

    /// `clip-path: circle(N% at 50% 50%)`
    pub fn clip_circle(mut self, percent: f64) -> Self {
        self.clip_circle = Some(percent);
        self
    }

    /// Highlight sweep, the horizontal `background-size` in percent
    pub fn sweep(mut self, percent: f64) -> Self {
        self.sweep = Some(percent);
        self
    }

    /// Width in percent of the containing block
    pub fn width(mut self, percent: f64) -> Self {
        self.width = Some(percent);
        self
    }

    /// Stroke dash offset for paths drawn with `pathLength="1"`
    pub fn dash_offset(mut self, offset: f64) -> Self {
        self.dash_offset = Some(offset);
        self
    }

    /// Fully visible and untransformed
    pub fn shown() -> Self {
        Self::new().opacity(1.0).x(0.0).y(0.0)
    }

    /// Make `from` and `to` carry the same set of properties.
    ///
    /// A property present on only one side is filled in on the other with its
    /// identity value, so both sides render the same transform function list
    /// and CSS interpolates them component by component.
    pub fn pair(from: Pose, to: Pose) -> (Pose, Pose) {
        let identity = Pose::identity();
        let filled_from = from.clone().filled(&to, &identity);
        (filled_from, to.filled(&from, &identity))
    }

    fn identity() -> Pose {
        Pose {
            opacity: Some(1.0),
            x: Some(Offset::Px(0.0)),
            y: Some(0.0),
            scale: Some(1.0),
            scale_x: Some(1.0),
            rotate: Some(0.0),
            rotate_x: Some(0.0),
            rotate_y: Some(0.0),
            skew_x: Some(0.0),
            perspective: None,
            origin: None,
            blur: Some(0.0),
            clip_circle: Some(75.0),
            sweep: Some(100.0),
            width: Some(100.0),
            dash_offset: Some(0.0),
        }
    }

    fn filled(mut self, other: &Pose, identity: &Pose) -> Pose {
        macro_rules! fill {
            ($($field:ident),*) => {
                $(
                    if self.$field.is_none() && other.$field.is_some() {
                        self.$field = identity.$field;
                    }
                )*
            };
        }
        fill!(
            opacity, x, y, scale, scale_x, rotate, rotate_x, rotate_y, skew_x, blur,
            clip_circle, sweep, width, dash_offset
        );
        // perspective and origin are static context, copy them across verbatim
        if self.perspective.is_none() {
            self.perspective = other.perspective;
        }
        if self.origin.is_none() {
            self.origin = other.origin;
        }
        // a vw offset interpolates against 0vw, not 0px
        if let (Some(Offset::Px(v)), Some(Offset::Vw(_))) = (self.x, other.x) {
            if v == 0.0 {
                self.x = Some(Offset::Vw(0.0));
            }
        }
        self
    }

    /// The composed `transform` value, or `None` if no transform is set
    pub fn transform(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(p) = self.perspective {
            parts.push(format!("perspective({p}px)"));
        }
        if self.x.is_some() || self.y.is_some() {
            let x = self.x.unwrap_or_default();
            let y = self.y.unwrap_or(0.0);
            parts.push(format!("translate({x}, {y}px)"));
        }
        if let Some(r) = self.rotate {
            parts.push(format!("rotate({r}deg)"));
        }
        if let Some(r) = self.rotate_x {
            parts.push(format!("rotateX({r}deg)"));
        }
        if let Some(r) = self.rotate_y {
            parts.push(format!("rotateY({r}deg)"));
        }
        if let Some(s) = self.skew_x {
            parts.push(format!("skewX({s}deg)"));
        }
        if let Some(s) = self.scale {
            parts.push(format!("scale({s})"));
        }
        if let Some(s) = self.scale_x {
            parts.push(format!("scaleX({s})"));
        }
        (!parts.is_empty()).then(|| parts.join(" "))
    }

    /// Inline style declarations for this pose, in a stable order.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(o) = self.opacity {
            out.push(("opacity", format!("{o}")));
        }
        if let Some(t) = self.transform() {
            out.push(("transform", t));
        }
        if let Some(origin) = self.origin {
            out.push(("transform-origin", origin.to_string()));
        }
        if let Some(b) = self.blur {
            out.push(("filter", format!("blur({b}px)")));
        }
        if let Some(c) = self.clip_circle {
            out.push(("clip-path", format!("circle({c}% at 50% 50%)")));
        }
        if let Some(s) = self.sweep {
            out.push(("background-size", format!("{s}% 100%")));
        }
        if let Some(w) = self.width {
            out.push(("width", format!("{w}%")));
        }
        if let Some(d) = self.dash_offset {
            out.push(("stroke-dasharray", "1".to_string()));
            out.push(("stroke-dashoffset", format!("{d}")));
        }
        out
    }

    /// Properties the transition has to cover to animate into this pose
    pub fn transition_properties(&self) -> Vec<&'static str> {
        self.declarations()
            .into_iter()
            .map(|(property, _)| property)
            .filter(|property| !matches!(*property, "transform-origin" | "stroke-dasharray"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pose_has_no_declarations() {
        assert!(Pose::new().declarations().is_empty());
        assert!(Pose::new().transform().is_none());
    }

    #[test]
    fn test_transform_composition_order() {
        let pose = Pose::new()
            .perspective(800.0)
            .y(-60.0)
            .rotate_x(90.0)
            .scale(0.5);
        assert_eq!(
            pose.transform().unwrap(),
            "perspective(800px) translate(0px, -60px) rotateX(90deg) scale(0.5)"
        );
    }

    #[test]
    fn test_vw_offset() {
        let pose = Pose::new().x_vw(-25.0);
        assert_eq!(pose.transform().unwrap(), "translate(-25vw, 0px)");
    }

    #[test]
    fn test_pair_fills_identity_values() {
        let (from, to) = Pose::pair(
            Pose::new().opacity(0.0).y(30.0).scale(0.5),
            Pose::new().opacity(1.0),
        );
        assert_eq!(to.y, Some(0.0));
        assert_eq!(to.scale, Some(1.0));
        assert_eq!(from.opacity, Some(0.0));
        assert_eq!(from.transform().is_some(), to.transform().is_some());
    }

    #[test]
    fn test_pair_fills_both_sides() {
        let (from, to) = Pose::pair(Pose::new().scale(0.6), Pose::new().y(20.0).rotate(-2.0));
        assert_eq!(from.y, Some(0.0));
        assert_eq!(from.rotate, Some(0.0));
        assert_eq!(from.scale, Some(0.6));
        assert_eq!(to.scale, Some(1.0));
        assert_eq!(to.y, Some(20.0));
        // neither side picks up properties nobody asked for
        assert_eq!(from.opacity, None);
        assert_eq!(to.opacity, None);
    }

    #[test]
    fn test_pair_copies_static_context() {
        let (_, to) = Pose::pair(
            Pose::new().rotate_y(-40.0).perspective(1200.0).origin("left center"),
            Pose::new().rotate_y(0.0),
        );
        assert_eq!(to.perspective, Some(1200.0));
        assert_eq!(to.origin, Some("left center"));
    }

    #[test]
    fn test_pair_matches_viewport_units() {
        let (from, to) = Pose::pair(Pose::new().opacity(0.0), Pose::new().x_vw(-25.0));
        assert_eq!(from.x, Some(Offset::Vw(0.0)));
        assert_eq!(to.x, Some(Offset::Vw(-25.0)));
    }

    #[test]
    fn test_declarations_for_draw_and_sweep() {
        let decls = Pose::new().dash_offset(1.0).sweep(0.0).declarations();
        assert!(decls.contains(&("background-size", "0% 100%".to_string())));
        assert!(decls.contains(&("stroke-dasharray", "1".to_string())));
        assert!(decls.contains(&("stroke-dashoffset", "1".to_string())));
    }

    #[test]
    fn test_transition_properties_skip_static_values() {
        let props = Pose::new()
            .opacity(0.0)
            .origin("top center")
            .dash_offset(0.0)
            .transition_properties();
        assert_eq!(props, vec!["opacity", "stroke-dashoffset"]);
    }
}
