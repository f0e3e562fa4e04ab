//! Sprites: blobs that enter from either end and travel across the strip

use alloc::vec::Vec;

use super::{Frame, Function, Setup, paint_tail};
use crate::bounds::Direction;
use crate::color::{ColorSequence, Rgb};

const MAX_RANDOM_COUNT: usize = 4;
const MAX_RANDOM_SIZE: usize = 5;
const MAX_RANDOM_STEP: usize = 2;
const DEFAULT_ACTIVE_CHANCE: f32 = 0.03;

#[derive(Debug, Clone, Copy, Default)]
pub struct SpritesOptions {
    pub count: Option<usize>,
    pub max_size: Option<usize>,
    pub max_step: Option<usize>,
    /// Probability (0.0-1.0) per tick that an idle sprite launches
    pub active_chance: Option<f32>,
}

#[derive(Debug, Clone, Copy)]
struct Sprite {
    active: bool,
    /// Head position; may sit past either end while the tail is visible
    head: isize,
    step: usize,
    direction: Direction,
    size: usize,
    color: Rgb,
}

impl Sprite {
    /// True once no part of the sprite is inside `0..len`
    #[allow(clippy::cast_possible_wrap)]
    const fn is_gone(&self, len: usize) -> bool {
        let size = self.size as isize;
        match self.direction {
            Direction::Forward => self.head - size + 1 >= len as isize,
            Direction::Backward => self.head + size - 1 < 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpritesFunction {
    sprites: Vec<Sprite>,
    max_size: usize,
    max_step: usize,
    active_chance: f32,
    colors: ColorSequence,
}

impl SpritesFunction {
    pub fn new(
        count: usize,
        max_size: usize,
        max_step: usize,
        active_chance: f32,
        colors: ColorSequence,
    ) -> Self {
        let idle = Sprite {
            active: false,
            head: 0,
            step: 1,
            direction: Direction::Forward,
            size: 1,
            color: colors.current(),
        };
        Self {
            sprites: alloc::vec![idle; count],
            max_size: max_size.max(1),
            max_step: max_step.max(1),
            active_chance: active_chance.clamp(0.0, 1.0),
            colors,
        }
    }

    pub fn from_options(options: SpritesOptions, setup: &mut Setup<'_>) -> Self {
        let rng = &mut *setup.rng;
        let count = options.count.unwrap_or_else(|| rng.usize(1..=MAX_RANDOM_COUNT));
        let max_size = options.max_size.unwrap_or(MAX_RANDOM_SIZE);
        let max_step = options.max_step.unwrap_or(MAX_RANDOM_STEP);
        let chance = options.active_chance.unwrap_or(DEFAULT_ACTIVE_CHANCE);
        Self::new(count, max_size, max_step, chance, setup.colors.clone())
    }

    pub fn active_count(&self) -> usize {
        self.sprites.iter().filter(|sprite| sprite.active).count()
    }
}

impl Function for SpritesFunction {
    #[allow(clippy::cast_possible_wrap)]
    fn update(&mut self, frame: &mut Frame<'_>) {
        let len = frame.leds.len();
        if len == 0 {
            return;
        }

        for sprite in &mut self.sprites {
            if !sprite.active {
                if frame.rng.f32() < self.active_chance {
                    sprite.active = true;
                    sprite.direction = Direction::random(frame.rng);
                    sprite.head = match sprite.direction {
                        Direction::Forward => 0,
                        Direction::Backward => len as isize - 1,
                    };
                    sprite.size = frame.rng.usize(1..=self.max_size);
                    sprite.step = frame.rng.usize(1..=self.max_step);
                    sprite.color = self.colors.next_color();
                } else {
                    continue;
                }
            } else {
                sprite.head += sprite.step as isize * sprite.direction.sign();
            }

            if sprite.is_gone(len) {
                sprite.active = false;
                continue;
            }
            paint_tail(
                frame.leds,
                sprite.head,
                sprite.size,
                sprite.direction,
                sprite.color,
                false,
            );
        }
    }

    fn set_colors(&mut self, colors: &ColorSequence) {
        self.colors = colors.clone();
    }
}
