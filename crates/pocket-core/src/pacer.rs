//! Frame pacing.

use std::time::{Duration, Instant};

/// Sleeps out the remainder of each frame period.
#[derive(Debug)]
pub struct FramePacer {
    period: Duration,
    frame_start: Instant,
}

impl FramePacer {
    /// `target_fps` of zero is treated as one frame per second.
    pub fn new(target_fps: u32) -> Self {
        Self {
            period: Self::period_for(target_fps),
            frame_start: Instant::now(),
        }
    }

    pub fn period_for(target_fps: u32) -> Duration {
        Duration::from_secs(1) / target_fps.max(1)
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left in the current frame, never more than one period.
    pub fn remaining(&self) -> Duration {
        self.period.saturating_sub(self.frame_start.elapsed())
    }

    /// Sleep until the current frame period has elapsed, then start the
    /// next frame. Returns how long it slept.
    pub fn wait(&mut self) -> Duration {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.frame_start = Instant::now();
        remaining
    }
}
