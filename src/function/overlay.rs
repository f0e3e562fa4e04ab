//! Effects drawn on the overlay, so they never leave residue in the buffer

use super::{Countdown, Frame, Function, Setup};
use crate::color::ColorSequence;

const DEFAULT_TWINKLE_CHANCE: f32 = 0.02;
const MAX_RANDOM_BLINK_DELAY: u32 = 60;
const DEFAULT_BLINK_DURATION: u32 = 3;

#[derive(Debug, Clone, Copy, Default)]
pub struct TwinkleOptions {
    /// Probability (0.0-1.0) per LED per tick of a twinkle
    pub chance: Option<f32>,
}

/// Random LEDs flash a sequence color for a single tick
#[derive(Debug, Clone)]
pub struct TwinkleFunction {
    chance: f32,
    colors: ColorSequence,
}

impl TwinkleFunction {
    pub fn new(chance: f32, colors: ColorSequence) -> Self {
        Self {
            chance: chance.clamp(0.0, 1.0),
            colors,
        }
    }

    pub fn from_options(options: TwinkleOptions, setup: &mut Setup<'_>) -> Self {
        Self::new(
            options.chance.unwrap_or(DEFAULT_TWINKLE_CHANCE),
            setup.colors.clone(),
        )
    }
}

impl Function for TwinkleFunction {
    fn update(&mut self, frame: &mut Frame<'_>) {
        for index in 0..frame.leds.len() {
            if frame.rng.f32() < self.chance {
                frame.overlay.set(index, self.colors.random(frame.rng));
            }
        }
    }

    fn set_colors(&mut self, colors: &ColorSequence) {
        self.colors = colors.clone();
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BlinkOptions {
    /// Ticks between blinks
    pub delay: Option<u32>,
    /// Ticks the strip stays dark
    pub duration: Option<u32>,
}

/// The whole strip goes dark for a few ticks at a fixed interval
#[derive(Debug, Clone)]
pub struct BlinkFunction {
    delay: Countdown,
    duration: u32,
    remaining: u32,
}

impl BlinkFunction {
    pub const fn new(delay: u32, duration: u32) -> Self {
        Self {
            delay: Countdown::new(delay),
            duration,
            remaining: 0,
        }
    }

    pub fn from_options(options: BlinkOptions, setup: &mut Setup<'_>) -> Self {
        let delay = options
            .delay
            .unwrap_or_else(|| setup.rng.u32(10..=MAX_RANDOM_BLINK_DELAY));
        Self::new(delay, options.duration.unwrap_or(DEFAULT_BLINK_DURATION))
    }
}

impl Function for BlinkFunction {
    fn update(&mut self, frame: &mut Frame<'_>) {
        if self.remaining == 0 && self.delay.tick() {
            self.remaining = self.duration;
        }
        if self.remaining > 0 {
            self.remaining -= 1;
            for index in 0..frame.leds.len() {
                frame.overlay.set(index, frame.background);
            }
        }
    }
}
