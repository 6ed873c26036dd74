use std::time::Duration;

use super::easing::{ease, Easing};

/// Result of advancing a [`Transition`] by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionStep {
    /// Not running.
    Idle,
    /// Still running; `progress` is eased and in `0..1`.
    Running { progress: f32 },
    /// Reached the end during this advance. Returned once per `start`.
    Finished,
}

/// Timing controller for a single animated change.
///
/// Time is fed in by the owner (`advance(dt)`), so a transition never reads
/// the wall clock and behaves identically in tests and at runtime.
#[derive(Debug, Clone)]
pub struct Transition {
    duration: Duration,
    easing: Easing,
    elapsed: f32,
    running: bool,
}

impl Transition {
    pub fn new(duration: Duration) -> Self {
        Self { duration, easing: Easing::default(), elapsed: 0.0, running: false }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start from zero progress.
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.running = true;
    }

    /// Eased progress of the running transition, `None` when idle.
    pub fn progress(&self) -> Option<f32> {
        self.running.then(|| ease(self.easing, self.raw_progress()))
    }

    /// Advance by `dt` seconds.
    pub fn advance(&mut self, dt: f32) -> TransitionStep {
        if !self.running {
            return TransitionStep::Idle;
        }

        self.elapsed += dt.max(0.0);
        let raw = self.raw_progress();
        if raw >= 1.0 {
            self.running = false;
            self.elapsed = 0.0;
            return TransitionStep::Finished;
        }

        TransitionStep::Running { progress: ease(self.easing, raw) }
    }

    fn raw_progress(&self) -> f32 {
        let total = self.duration.as_secs_f32();
        if total <= 0.0 {
            1.0
        } else {
            (self.elapsed / total).min(1.0)
        }
    }
}
