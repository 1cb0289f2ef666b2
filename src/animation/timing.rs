//! Timing functions (easing curves) for animation segments.
//!
//! Timing functions map normalized time `t` in `[0, 1]` to an interpolation
//! factor. Segments evaluate their curve once per tick and lerp between their
//! start and end values with the result.
//!
//! ## Built-in Easing Functions
//!
//! - [`TimingFunction::Linear`] - Constant speed (no easing)
//! - [`TimingFunction::Decelerate`] - Starts fast, ends slow. Used for ripple and
//!   emit-point radius growth so the expansion visibly settles.
//!
//! ## Advanced Options
//!
//! - [`TimingFunction::Custom`] - User-defined function
//!
//! ## Example
//!
//! ```ignore
//! let grow = Segment::new(6.0, 16.0, Duration::from_millis(400), TimingFunction::Decelerate, on_radius);
//! ```

use std::sync::Arc;

/// Timing function that controls the animation curve
#[derive(Clone, Default)]
pub enum TimingFunction {
    /// Linear interpolation (constant speed)
    #[default]
    Linear,
    /// Starts fast, ends slow: `1 - (1 - t)^2`
    Decelerate,
    /// Custom timing function
    Custom(Arc<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl TimingFunction {
    /// Evaluate the timing function at time t (0.0 to 1.0)
    ///
    /// `t` is clamped to `[0, 1]` before the curve is applied.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimingFunction::Linear => t,
            TimingFunction::Decelerate => decelerate(t),
            TimingFunction::Custom(f) => f(t),
        }
    }

    /// Create a custom timing function from a closure
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        TimingFunction::Custom(Arc::new(f))
    }
}

impl std::fmt::Debug for TimingFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimingFunction::Linear => write!(f, "Linear"),
            TimingFunction::Decelerate => write!(f, "Decelerate"),
            TimingFunction::Custom(_) => write!(f, "Custom"),
        }
    }
}

// Easing functions

fn decelerate(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv
}
