/// Trait for types that can be animated by interpolating between values
pub trait Animatable: Clone + PartialEq + 'static {
    /// Linear interpolation between two values
    /// t = 0.0 returns `from`, t = 1.0 returns `to`
    fn lerp(from: &Self, to: &Self, t: f32) -> Self;
}

impl Animatable for f32 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

/// Vector payloads interpolate component-wise, e.g. a coupled
/// `[rotation, scale]` keyframe.
impl<const N: usize> Animatable for [f32; N] {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let mut out = *from;
        for (i, value) in out.iter_mut().enumerate() {
            *value = from[i] + (to[i] - from[i]) * t;
        }
        out
    }
}
