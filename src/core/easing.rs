/// Reshapes linear progress into a smoother curve.
///
/// Every variant maps 0 to 0 and 1 to 1 and never decreases on [0, 1].
/// Inputs outside that range are clamped first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    CubicOut,
    QuadIn,
}

impl Easing {
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::CubicOut => cubic_ease_out(t),
            Easing::QuadIn => quad_ease_in(t),
        }
    }
}

/// `1 - (1 - t)^3`
#[inline]
pub fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// `t^2`
#[inline]
pub fn quad_ease_in(t: f64) -> f64 {
    t * t
}

/// Linear interpolation from `start` covering `span` at fraction `t`.
#[inline]
pub fn lerp_span(start: f32, span: f32, t: f64) -> f32 {
    start + span * t as f32
}
