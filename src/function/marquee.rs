//! Marquee: shifts the whole pattern along the strip, wrapping at the ends

use super::{Countdown, Frame, Function, Setup};
use crate::bounds::Direction;

const MAX_RANDOM_STEP: usize = 3;
const MAX_RANDOM_DELAY: u32 = 4;

#[derive(Debug, Clone, Copy, Default)]
pub struct MarqueeOptions {
    /// Slots shifted per move
    pub step: Option<usize>,
    /// Ticks between moves
    pub delay: Option<u32>,
    pub direction: Option<Direction>,
    /// Reverse after this many shifted slots
    pub bounce_distance: Option<usize>,
}

#[derive(Debug, Clone, Copy)]
struct Bounce {
    distance: usize,
    travelled: usize,
}

#[derive(Debug, Clone)]
pub struct MarqueeFunction {
    step: usize,
    direction: Direction,
    delay: Countdown,
    bounce: Option<Bounce>,
}

impl MarqueeFunction {
    pub const fn new(step: usize, direction: Direction, delay: u32) -> Self {
        Self {
            step,
            direction,
            delay: Countdown::new(delay),
            bounce: None,
        }
    }

    /// Reverse direction every `distance` shifted slots
    #[must_use]
    pub const fn with_bounce(mut self, distance: usize) -> Self {
        self.bounce = Some(Bounce {
            distance,
            travelled: 0,
        });
        self
    }

    pub fn from_options(options: MarqueeOptions, setup: &mut Setup<'_>) -> Self {
        let rng = &mut *setup.rng;
        let step = options.step.unwrap_or_else(|| rng.usize(1..=MAX_RANDOM_STEP));
        let delay = options.delay.unwrap_or_else(|| rng.u32(1..=MAX_RANDOM_DELAY));
        let direction = options.direction.unwrap_or_else(|| Direction::random(rng));
        let function = Self::new(step, direction, delay);
        match options.bounce_distance {
            Some(distance) => function.with_bounce(distance),
            None => function,
        }
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

impl Function for MarqueeFunction {
    fn update(&mut self, frame: &mut Frame<'_>) {
        let len = frame.leds.len();
        if len == 0 || !self.delay.tick() {
            return;
        }

        let shift = self.step % len;
        match self.direction {
            Direction::Forward => frame.leds.rotate_right(shift),
            Direction::Backward => frame.leds.rotate_left(shift),
        }

        if let Some(bounce) = &mut self.bounce {
            bounce.travelled += self.step;
            if bounce.travelled >= bounce.distance {
                bounce.travelled = 0;
                self.direction = self.direction.flip();
            }
        }
    }
}
