//! Raindrops: ripples that spread out from random points and fade
//!
//! Every drop is either waiting for its chance to fall or spreading. A
//! spreading drop draws a ring `step` pixels away from its center each tick
//! until it reaches its size, then goes back to waiting.

use alloc::vec::Vec;

use super::{Frame, Function, Setup};
use crate::bounds::wrap_index;
use crate::color::{ColorSequence, Rgb, scale_color};

const MAX_RANDOM_COUNT: usize = 6;
const MAX_RANDOM_SIZE: usize = 8;
const DEFAULT_ACTIVE_CHANCE: f32 = 0.05;

#[derive(Debug, Clone, Copy, Default)]
pub struct RaindropsOptions {
    pub count: Option<usize>,
    /// Largest ripple radius
    pub max_size: Option<usize>,
    /// Probability (0.0-1.0) per tick that a waiting drop falls
    pub active_chance: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropState {
    Inactive,
    Active,
}

#[derive(Debug, Clone, Copy)]
struct Raindrop {
    state: DropState,
    index: usize,
    size: usize,
    step: usize,
    color: Rgb,
}

#[derive(Debug, Clone)]
pub struct RaindropsFunction {
    drops: Vec<Raindrop>,
    max_size: usize,
    active_chance: f32,
    colors: ColorSequence,
}

impl RaindropsFunction {
    pub fn new(count: usize, max_size: usize, active_chance: f32, colors: ColorSequence) -> Self {
        let idle = Raindrop {
            state: DropState::Inactive,
            index: 0,
            size: 1,
            step: 0,
            color: colors.current(),
        };
        Self {
            drops: alloc::vec![idle; count],
            max_size: max_size.max(1),
            active_chance: active_chance.clamp(0.0, 1.0),
            colors,
        }
    }

    pub fn from_options(options: RaindropsOptions, setup: &mut Setup<'_>) -> Self {
        let rng = &mut *setup.rng;
        let count = options.count.unwrap_or_else(|| rng.usize(2..=MAX_RANDOM_COUNT));
        let max_size = options.max_size.unwrap_or_else(|| rng.usize(3..=MAX_RANDOM_SIZE));
        let chance = options.active_chance.unwrap_or(DEFAULT_ACTIVE_CHANCE);
        Self::new(count, max_size, chance, setup.colors.clone())
    }

    /// States of all drops, in creation order
    pub fn states(&self) -> impl Iterator<Item = DropState> + '_ {
        self.drops.iter().map(|drop| drop.state)
    }
}

impl Function for RaindropsFunction {
    #[allow(clippy::cast_possible_wrap, clippy::cast_precision_loss)]
    fn update(&mut self, frame: &mut Frame<'_>) {
        let len = frame.leds.len();
        if len == 0 {
            return;
        }

        for drop in &mut self.drops {
            match drop.state {
                DropState::Inactive => {
                    if frame.rng.f32() < self.active_chance {
                        drop.state = DropState::Active;
                        drop.index = frame.rng.usize(..len);
                        drop.size = frame.rng.usize(1..=self.max_size);
                        drop.step = 0;
                        drop.color = self.colors.next_color();
                    }
                }
                DropState::Active => {
                    let fade = 1.0 - drop.step as f32 / (drop.size + 1) as f32;
                    let color = scale_color(drop.color, fade);
                    let center = drop.index as isize;
                    let offset = drop.step as isize;
                    frame.leds[wrap_index(center - offset, len)] = color;
                    frame.leds[wrap_index(center + offset, len)] = color;

                    drop.step += 1;
                    if drop.step > drop.size {
                        drop.state = DropState::Inactive;
                    }
                }
            }
        }
    }

    fn set_colors(&mut self, colors: &ColorSequence) {
        self.colors = colors.clone();
    }
}
