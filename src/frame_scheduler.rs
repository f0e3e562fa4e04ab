//! Frame pacing for the run loop
//!
//! The scheduler only computes deadlines; the caller decides how to wait.

use embassy_time::{Duration, Instant};

/// Default time between ticks (50 FPS)
pub const DEFAULT_REFRESH_DELAY: Duration = Duration::from_millis(20);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Fixed-rate deadline tracker with drift correction
///
/// If the loop falls more than two frames behind, the schedule restarts
/// from now instead of bursting through the backlog.
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    next_frame: Option<Instant>,
    frame_duration: Duration,
}

impl FrameScheduler {
    pub const fn new(frame_duration: Duration) -> Self {
        Self {
            next_frame: None,
            frame_duration,
        }
    }

    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    pub fn set_frame_duration(&mut self, frame_duration: Duration) {
        self.frame_duration = frame_duration;
    }

    /// Register a finished frame at `now` and compute the next deadline
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let max_drift = self.frame_duration + self.frame_duration;
        let scheduled = match self.next_frame {
            Some(deadline) if now <= deadline + max_drift => deadline,
            _ => now,
        };

        let next_frame = scheduled + self.frame_duration;
        self.next_frame = Some(next_frame);

        let sleep_duration = if next_frame > now {
            next_frame - now
        } else {
            Duration::from_ticks(0)
        };

        FrameResult {
            next_deadline: next_frame,
            sleep_duration,
        }
    }

    /// Forget the schedule so the next tick starts fresh
    pub fn reset(&mut self) {
        self.next_frame = None;
    }
}
