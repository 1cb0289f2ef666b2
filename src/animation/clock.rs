use std::time::{Duration, Instant};

/// Turns frame timestamps into the Δt fed to [`Sequence::tick`](super::Sequence::tick).
///
/// The first frame after a (re)start yields a zero delta so a sequence
/// started between frames does not jump ahead.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the previous call
    pub fn advance(&mut self, now: Instant) -> Duration {
        let delta = self
            .last
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last = Some(now);
        delta
    }

    /// Forget the previous frame (e.g. after the animation loop went idle)
    pub fn reset(&mut self) {
        self.last = None;
    }
}
