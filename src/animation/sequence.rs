use std::time::Duration;

use super::Segment;

type Hook<G> = Box<dyn FnMut(&mut G)>;

/// How the segments of a [`Sequence`] are played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    /// Segment `i + 1` starts once segment `i` has reached its end value
    Sequential,
    /// All segments start together; the sequence ends when the longest ends
    Parallel,
}

/// A cancellable composition of [`Segment`]s driven by host ticks.
///
/// The sequence owns no clock. The host calls [`Sequence::tick`] with the
/// time elapsed since the previous frame and the target the segments write
/// into. Lifecycle hooks follow these rules:
///
/// - `on_start` fires once per [`start`](Sequence::start), before any segment
///   receives a value.
/// - `on_end` fires once when the last segment (or all segments, in parallel
///   playback) completes, and never after a cancel.
/// - `on_cancel` fires once when a running sequence is cancelled. Cancelling
///   a sequence that is not running does nothing.
pub struct Sequence<G> {
    name: &'static str,
    playback: Playback,
    segments: Vec<Segment<G>>,
    running: bool,
    /// Sequential: index of the segment being played
    current: usize,
    /// Sequential: time spent in the current segment. Parallel: total time.
    elapsed: Duration,
    /// Parallel: segments that already delivered their end value
    finished: Vec<bool>,
    on_start: Option<Hook<G>>,
    on_end: Option<Hook<G>>,
    on_cancel: Option<Hook<G>>,
}

impl<G> Sequence<G> {
    pub fn new(name: &'static str, playback: Playback, segments: Vec<Segment<G>>) -> Self {
        let finished = vec![false; segments.len()];
        Self {
            name,
            playback,
            segments,
            running: false,
            current: 0,
            elapsed: Duration::ZERO,
            finished,
            on_start: None,
            on_end: None,
            on_cancel: None,
        }
    }

    pub fn sequential(name: &'static str, segments: Vec<Segment<G>>) -> Self {
        Self::new(name, Playback::Sequential, segments)
    }

    pub fn parallel(name: &'static str, segments: Vec<Segment<G>>) -> Self {
        Self::new(name, Playback::Parallel, segments)
    }

    /// Set the hook fired when the sequence starts
    pub fn on_start(mut self, hook: impl FnMut(&mut G) + 'static) -> Self {
        self.on_start = Some(Box::new(hook));
        self
    }

    /// Set the hook fired when the sequence completes naturally
    pub fn on_end(mut self, hook: impl FnMut(&mut G) + 'static) -> Self {
        self.on_end = Some(Box::new(hook));
        self
    }

    /// Set the hook fired when a running sequence is cancelled
    pub fn on_cancel(mut self, hook: impl FnMut(&mut G) + 'static) -> Self {
        self.on_cancel = Some(Box::new(hook));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn segments(&self) -> &[Segment<G>] {
        &self.segments
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Length of one full run
    pub fn total_duration(&self) -> Duration {
        let durations = self.segments.iter().map(Segment::duration);
        match self.playback {
            Playback::Sequential => durations.sum(),
            Playback::Parallel => durations.max().unwrap_or(Duration::ZERO),
        }
    }

    /// Start (or restart) the sequence from its first segment.
    ///
    /// Restarting a running sequence cancels the current run first.
    pub fn start(&mut self, target: &mut G) {
        if self.running {
            self.cancel(target);
        }
        self.running = true;
        self.current = 0;
        self.elapsed = Duration::ZERO;
        self.finished.iter_mut().for_each(|done| *done = false);
        log::debug!("{}: start ({:?})", self.name, self.total_duration());
        if let Some(hook) = self.on_start.as_mut() {
            hook(target);
        }
    }

    /// Cancel a running sequence. Returns whether anything was cancelled.
    pub fn cancel(&mut self, target: &mut G) -> bool {
        if !self.halt() {
            return false;
        }
        log::debug!("{}: cancelled", self.name);
        if let Some(hook) = self.on_cancel.as_mut() {
            hook(target);
        }
        true
    }

    /// Stop a running sequence without firing any hook.
    pub fn halt(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }

    /// Advance by `dt`. Returns true while the sequence is still running.
    pub fn tick(&mut self, dt: Duration, target: &mut G) -> bool {
        if !self.running {
            return false;
        }

        let complete = match self.playback {
            Playback::Sequential => self.advance_sequential(dt, target),
            Playback::Parallel => self.advance_parallel(dt, target),
        };
        log::trace!("{}: tick {:?} (complete: {})", self.name, dt, complete);

        if complete {
            self.running = false;
            log::debug!("{}: end", self.name);
            if let Some(hook) = self.on_end.as_mut() {
                hook(target);
            }
        }
        self.running
    }

    fn advance_sequential(&mut self, dt: Duration, target: &mut G) -> bool {
        let mut budget = dt;
        while let Some(segment) = self.segments.get_mut(self.current) {
            let available = self.elapsed + budget;
            if available < segment.duration() {
                self.elapsed = available;
                segment.apply(available, target);
                return false;
            }
            // Land exactly on the end value, carry the rest into the next segment
            segment.apply(segment.duration(), target);
            budget = available - segment.duration();
            self.elapsed = Duration::ZERO;
            self.current += 1;
        }
        true
    }

    fn advance_parallel(&mut self, dt: Duration, target: &mut G) -> bool {
        self.elapsed += dt;
        for (segment, done) in self.segments.iter_mut().zip(self.finished.iter_mut()) {
            if !*done {
                *done = segment.apply(self.elapsed.min(segment.duration()), target);
            }
        }
        self.finished.iter().all(|done| *done)
    }
}

impl<G> std::fmt::Debug for Sequence<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequence")
            .field("name", &self.name)
            .field("playback", &self.playback)
            .field("segments", &self.segments)
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Probe {
        a: f32,
        b: f32,
        log: Vec<&'static str>,
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn two_step(playback: Playback) -> Sequence<Probe> {
        Sequence::new(
            "probe",
            playback,
            vec![
                Segment::linear(0.0, 10.0, ms(100), |v: f32, p: &mut Probe| p.a = v),
                Segment::linear(0.0, 20.0, ms(200), |v: f32, p: &mut Probe| p.b = v),
            ],
        )
        .on_start(|p: &mut Probe| p.log.push("start"))
        .on_end(|p: &mut Probe| p.log.push("end"))
        .on_cancel(|p: &mut Probe| p.log.push("cancel"))
    }

    #[test]
    fn test_sequential_plays_in_order() {
        let mut probe = Probe::default();
        let mut seq = two_step(Playback::Sequential);
        seq.start(&mut probe);
        assert_eq!(probe.log, ["start"]);

        seq.tick(ms(50), &mut probe);
        assert_eq!(probe.a, 5.0);
        assert_eq!(probe.b, 0.0);

        // Leftover time flows into the second segment
        seq.tick(ms(150), &mut probe);
        assert_eq!(probe.a, 10.0);
        assert_eq!(probe.b, 10.0);

        assert!(!seq.tick(ms(100), &mut probe));
        assert_eq!(probe.b, 20.0);
        assert_eq!(probe.log, ["start", "end"]);
        assert!(!seq.is_running());
    }

    #[test]
    fn test_parallel_runs_together() {
        let mut probe = Probe::default();
        let mut seq = two_step(Playback::Parallel);
        assert_eq!(seq.total_duration(), ms(200));
        seq.start(&mut probe);

        seq.tick(ms(50), &mut probe);
        assert_eq!(probe.a, 5.0);
        assert_eq!(probe.b, 5.0);

        assert!(seq.tick(ms(100), &mut probe));
        assert_eq!(probe.a, 10.0);
        assert_eq!(probe.b, 15.0);

        assert!(!seq.tick(ms(50), &mut probe));
        assert_eq!(probe.b, 20.0);
        assert_eq!(probe.log, ["start", "end"]);
    }

    #[test]
    fn test_cancel_fires_once_and_suppresses_end() {
        let mut probe = Probe::default();
        let mut seq = two_step(Playback::Sequential);
        seq.start(&mut probe);
        seq.tick(ms(120), &mut probe);

        assert!(seq.cancel(&mut probe));
        assert!(!seq.cancel(&mut probe));
        let b = probe.b;
        assert!(!seq.tick(ms(500), &mut probe));
        assert_eq!(probe.b, b);
        assert_eq!(probe.log, ["start", "cancel"]);
    }

    #[test]
    fn test_cancel_when_idle_is_noop() {
        let mut probe = Probe::default();
        let mut seq = two_step(Playback::Sequential);
        assert!(!seq.cancel(&mut probe));
        assert!(probe.log.is_empty());
    }

    #[test]
    fn test_restart_cancels_previous_run() {
        let mut probe = Probe::default();
        let mut seq = two_step(Playback::Sequential);
        seq.start(&mut probe);
        seq.tick(ms(50), &mut probe);
        seq.start(&mut probe);
        assert_eq!(probe.log, ["start", "cancel", "start"]);

        seq.tick(ms(300), &mut probe);
        assert_eq!(probe.log, ["start", "cancel", "start", "end"]);
    }

    #[test]
    fn test_halt_is_silent() {
        let mut probe = Probe::default();
        let mut seq = two_step(Playback::Sequential);
        seq.start(&mut probe);
        assert!(seq.halt());
        assert!(!seq.is_running());
        assert_eq!(probe.log, ["start"]);
    }

    #[test]
    fn test_single_large_tick_completes() {
        let mut probe = Probe::default();
        let mut seq = two_step(Playback::Sequential);
        seq.start(&mut probe);
        assert!(!seq.tick(Duration::from_secs(10), &mut probe));
        assert_eq!((probe.a, probe.b), (10.0, 20.0));
        assert_eq!(probe.log, ["start", "end"]);
    }
}
