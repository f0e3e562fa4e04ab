//! Merge: both halves of the pattern flow into the middle

use super::{Countdown, Frame, Function, Setup};
use crate::bounds::center_of;

const MAX_RANDOM_DELAY: u32 = 4;

#[derive(Debug, Clone, Copy, Default)]
pub struct MergeOptions {
    pub step: Option<usize>,
    pub delay: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct MergeFunction {
    step: usize,
    delay: Countdown,
}

impl MergeFunction {
    pub const fn new(step: usize, delay: u32) -> Self {
        Self {
            step,
            delay: Countdown::new(delay),
        }
    }

    pub fn from_options(options: MergeOptions, setup: &mut Setup<'_>) -> Self {
        let delay = options
            .delay
            .unwrap_or_else(|| setup.rng.u32(1..=MAX_RANDOM_DELAY));
        Self::new(options.step.unwrap_or(1), delay)
    }
}

impl Function for MergeFunction {
    fn update(&mut self, frame: &mut Frame<'_>) {
        if frame.leds.len() < 2 || !self.delay.tick() {
            return;
        }

        let center = center_of(frame.leds);
        let (left, right) = frame.leds.split_at_mut(center);
        left.rotate_right(self.step % left.len());
        right.rotate_left(self.step % right.len());
    }
}
