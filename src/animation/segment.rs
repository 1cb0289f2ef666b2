use std::time::Duration;

use super::{Animatable, TimingFunction};

type UpdateFn<G> = Box<dyn FnMut(f32, &mut G)>;

/// One timed interpolation inside a [`Sequence`](super::Sequence).
///
/// A segment holds no playback state: the owning sequence tells it how far
/// into its duration it is and the segment pushes
/// `from + timing(elapsed / duration) * (to - from)` to its update callback,
/// together with the target the sequence is driving. Running the same segment
/// again simply replays it.
pub struct Segment<G> {
    duration: Duration,
    timing: TimingFunction,
    update: UpdateFn<G>,
}

impl<G> Segment<G> {
    /// Create a segment interpolating `from` → `to` over `duration`.
    pub fn new<T, F>(
        from: T,
        to: T,
        duration: Duration,
        timing: TimingFunction,
        mut on_update: F,
    ) -> Self
    where
        T: Animatable,
        F: FnMut(T, &mut G) + 'static,
    {
        Self {
            duration,
            timing,
            update: Box::new(move |eased, target| on_update(T::lerp(&from, &to, eased), target)),
        }
    }

    /// Shorthand for a linear segment
    pub fn linear<T, F>(from: T, to: T, duration: Duration, on_update: F) -> Self
    where
        T: Animatable,
        F: FnMut(T, &mut G) + 'static,
    {
        Self::new(from, to, duration, TimingFunction::Linear, on_update)
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn timing(&self) -> &TimingFunction {
        &self.timing
    }

    /// Normalized progress at `elapsed`, clamped to `[0, 1]`.
    /// Zero-length segments are always complete.
    pub fn progress_at(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_nanos() as f64 / self.duration.as_nanos() as f64).min(1.0) as f32
    }

    /// Push the value at `elapsed` to the update callback.
    /// Returns true once the segment has reached its end value.
    pub(crate) fn apply(&mut self, elapsed: Duration, target: &mut G) -> bool {
        let t = self.progress_at(elapsed);
        (self.update)(self.timing.evaluate(t), target);
        t >= 1.0
    }
}

impl<G> std::fmt::Debug for Segment<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segment")
            .field("duration", &self.duration)
            .field("timing", &self.timing)
            .finish_non_exhaustive()
    }
}
