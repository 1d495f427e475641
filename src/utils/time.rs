#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

use crate::animation::FrameTiming;

/// Timer for tracking frame timing and elapsed time.
///
/// The external render loop calls [`FrameTimer::tick`] once per frame, then
/// feeds [`FrameTimer::timing`] to the animation drivers. Elapsed time is
/// measured from creation, so a remounted scene starts back at zero with a
/// fresh timer.
pub struct FrameTimer {
    start_time: Instant,
    last_update: Instant,
    /// Time since last tick
    pub delta: Duration,
    /// Total elapsed time since creation
    pub elapsed: Duration,
    /// Total number of ticks
    pub frame_count: u64,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimer {
    /// Creates a new timer starting from now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_update: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Updates the timer (called by the render loop each frame).
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.delta = now - self.last_update;
        self.elapsed = now - self.start_time;
        self.last_update = now;
        self.frame_count += 1;
    }

    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// The timing snapshot consumed by [`crate::animation::Playbook::advance`].
    #[must_use]
    pub fn timing(&self) -> FrameTiming {
        FrameTiming {
            elapsed: self.elapsed_seconds(),
            delta: self.dt_seconds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_advances_monotonically() {
        let mut timer = FrameTimer::new();
        timer.tick();
        let first = timer.elapsed_seconds();
        timer.tick();
        let second = timer.elapsed_seconds();

        assert!(first >= 0.0);
        assert!(second >= first);
        assert_eq!(timer.frame_count, 2);
    }

    #[test]
    fn timing_snapshot_matches_accessors() {
        let mut timer = FrameTimer::new();
        timer.tick();
        let timing = timer.timing();
        assert_eq!(timing.elapsed, timer.elapsed_seconds());
        assert_eq!(timing.delta, timer.dt_seconds());
    }
}
