//! Cylon: an eye that sweeps back and forth between the strip ends

use super::{Frame, Function, Setup, paint_tail};
use crate::bounds::{Direction, bounce_index};
use crate::color::{ColorSequence, Rgb};

const MAX_RANDOM_SIZE: usize = 6;
const MAX_RANDOM_STEP: usize = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct CylonOptions {
    /// Width of the eye in pixels
    pub size: Option<usize>,
    pub step: Option<usize>,
    pub color: Option<Rgb>,
}

#[derive(Debug, Clone)]
pub struct CylonFunction {
    index: usize,
    step: usize,
    direction: Direction,
    size: usize,
    color: Rgb,
}

impl CylonFunction {
    pub const fn new(size: usize, step: usize, color: Rgb) -> Self {
        Self {
            index: 0,
            step,
            direction: Direction::Forward,
            size,
            color,
        }
    }

    pub fn from_options(options: CylonOptions, setup: &mut Setup<'_>) -> Self {
        let rng = &mut *setup.rng;
        let size = options.size.unwrap_or_else(|| rng.usize(2..=MAX_RANDOM_SIZE));
        let step = options.step.unwrap_or_else(|| rng.usize(1..=MAX_RANDOM_STEP));
        let color = options.color.unwrap_or_else(|| setup.colors.current());
        Self::new(size, step, color)
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

impl Function for CylonFunction {
    #[allow(clippy::cast_possible_wrap)]
    fn update(&mut self, frame: &mut Frame<'_>) {
        let len = frame.leds.len();
        if len == 0 {
            return;
        }

        let position = self.index as isize + self.step as isize * self.direction.sign();
        let (index, hit) = bounce_index(position, len);
        self.index = index;
        if hit {
            self.direction = self.direction.flip();
        }

        // The eye trails behind the direction it was travelling in.
        let travel = if hit { self.direction.flip() } else { self.direction };
        paint_tail(frame.leds, self.index as isize, self.size, travel, self.color, false);
    }

    fn set_colors(&mut self, colors: &ColorSequence) {
        self.color = colors.current();
    }
}
