//! Alive: creatures that wander, change pace and size, and shift color

use alloc::vec::Vec;

use super::{Frame, Function, Setup, paint_tail};
use crate::bounds::{Direction, wrap_index};
use crate::color::{ColorSequence, Rgb, step_toward};

const MAX_RANDOM_COUNT: usize = 4;
const MAX_RANDOM_SIZE: usize = 6;
const MAX_RANDOM_STEP: usize = 3;
const DEFAULT_CHANGE_CHANCE: f32 = 0.05;
const DEFAULT_FADE_STEP: u8 = 8;

#[derive(Debug, Clone, Copy, Default)]
pub struct AliveOptions {
    pub count: Option<usize>,
    pub max_size: Option<usize>,
    pub max_step: Option<usize>,
    /// Probability (0.0-1.0) per tick of each behavior change
    pub change_chance: Option<f32>,
    /// Per-channel color change per tick
    pub fade_step: Option<u8>,
}

#[derive(Debug, Clone, Copy)]
struct Creature {
    index: usize,
    direction: Direction,
    step: usize,
    size: usize,
    color: Rgb,
    target: Rgb,
}

#[derive(Debug, Clone)]
pub struct AliveFunction {
    creatures: Vec<Creature>,
    max_size: usize,
    max_step: usize,
    change_chance: f32,
    fade_step: u8,
    colors: ColorSequence,
}

impl AliveFunction {
    pub fn from_options(options: AliveOptions, setup: &mut Setup<'_>) -> Self {
        let mut colors = setup.colors.clone();
        let rng = &mut *setup.rng;
        let count = options.count.unwrap_or_else(|| rng.usize(1..=MAX_RANDOM_COUNT));
        let max_size = options.max_size.unwrap_or(MAX_RANDOM_SIZE).max(1);
        let max_step = options.max_step.unwrap_or(MAX_RANDOM_STEP).max(1);

        let creatures = (0..count)
            .map(|_| {
                let color = colors.next_color();
                Creature {
                    index: if setup.len == 0 { 0 } else { rng.usize(..setup.len) },
                    direction: Direction::random(rng),
                    step: rng.usize(1..=max_step),
                    size: rng.usize(1..=max_size),
                    color,
                    target: color,
                }
            })
            .collect();

        Self {
            creatures,
            max_size,
            max_step,
            change_chance: options
                .change_chance
                .unwrap_or(DEFAULT_CHANGE_CHANCE)
                .clamp(0.0, 1.0),
            fade_step: options.fade_step.unwrap_or(DEFAULT_FADE_STEP).max(1),
            colors,
        }
    }
}

impl Function for AliveFunction {
    #[allow(clippy::cast_possible_wrap)]
    fn update(&mut self, frame: &mut Frame<'_>) {
        let len = frame.leds.len();
        if len == 0 {
            return;
        }
        let chance = self.change_chance;

        for creature in &mut self.creatures {
            if frame.rng.f32() < chance {
                creature.direction = creature.direction.flip();
            }
            if frame.rng.f32() < chance {
                creature.step = frame.rng.usize(1..=self.max_step);
            }
            if frame.rng.f32() < chance {
                creature.size = if frame.rng.bool() {
                    (creature.size + 1).min(self.max_size)
                } else {
                    creature.size.saturating_sub(1).max(1)
                };
            }

            creature.color = step_toward(creature.color, creature.target, self.fade_step);
            if creature.color == creature.target {
                creature.target = self.colors.next_color();
            }

            let position = creature.index as isize + creature.step as isize * creature.direction.sign();
            creature.index = wrap_index(position, len);
            paint_tail(
                frame.leds,
                creature.index as isize,
                creature.size,
                creature.direction,
                creature.color,
                true,
            );
        }
    }

    fn set_colors(&mut self, colors: &ColorSequence) {
        self.colors = colors.clone();
        for creature in &mut self.creatures {
            creature.target = self.colors.next_color();
        }
    }
}
