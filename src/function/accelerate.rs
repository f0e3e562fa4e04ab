//! Accelerate: a head that speeds up, holds top speed, then starts over

use super::{Countdown, Frame, Function, Setup, paint_tail};
use crate::bounds::{Direction, wrap_index};
use crate::color::{ColorSequence, Rgb};

const MAX_RANDOM_SIZE: usize = 6;
const MAX_RANDOM_STEP: usize = 8;
const MAX_RANDOM_DELAY: u32 = 10;
const DEFAULT_HOLD_TICKS: u32 = 40;

#[derive(Debug, Clone, Copy, Default)]
pub struct AccelerateOptions {
    pub size: Option<usize>,
    /// Top speed in slots per tick
    pub step_max: Option<usize>,
    /// Ticks between speed increments
    pub delay: Option<u32>,
    /// Ticks spent at top speed before restarting
    pub hold: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct AccelerateFunction {
    index: usize,
    step: usize,
    step_max: usize,
    delay: Countdown,
    hold: u32,
    held: u32,
    direction: Direction,
    size: usize,
    color: Rgb,
    colors: ColorSequence,
}

impl AccelerateFunction {
    pub fn new(size: usize, step_max: usize, delay: u32, hold: u32, mut colors: ColorSequence) -> Self {
        let color = colors.next_color();
        Self {
            index: 0,
            step: 1,
            step_max: step_max.max(1),
            delay: Countdown::new(delay),
            hold,
            held: 0,
            direction: Direction::Forward,
            size,
            color,
            colors,
        }
    }

    pub fn from_options(options: AccelerateOptions, setup: &mut Setup<'_>) -> Self {
        let rng = &mut *setup.rng;
        let size = options.size.unwrap_or_else(|| rng.usize(1..=MAX_RANDOM_SIZE));
        let step_max = options.step_max.unwrap_or_else(|| rng.usize(2..=MAX_RANDOM_STEP));
        let delay = options.delay.unwrap_or_else(|| rng.u32(2..=MAX_RANDOM_DELAY));
        let hold = options.hold.unwrap_or(DEFAULT_HOLD_TICKS);
        let mut function = Self::new(size, step_max, delay, hold, setup.colors.clone());
        function.direction = Direction::random(rng);
        function
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn step(&self) -> usize {
        self.step
    }
}

impl Function for AccelerateFunction {
    #[allow(clippy::cast_possible_wrap)]
    fn update(&mut self, frame: &mut Frame<'_>) {
        let len = frame.leds.len();
        if len == 0 {
            return;
        }

        if self.step < self.step_max {
            if self.delay.tick() {
                self.step += 1;
            }
        } else {
            self.held += 1;
            if self.held >= self.hold {
                self.held = 0;
                self.step = 1;
                self.color = self.colors.next_color();
                self.direction = Direction::random(frame.rng);
            }
        }

        let position = self.index as isize + self.step as isize * self.direction.sign();
        self.index = wrap_index(position, len);
        // Faster heads draw longer streaks.
        let length = self.size + self.step / 2;
        paint_tail(frame.leds, self.index as isize, length, self.direction, self.color, true);
    }

    fn set_colors(&mut self, colors: &ColorSequence) {
        self.colors = colors.clone();
        self.color = self.colors.next_color();
    }
}
