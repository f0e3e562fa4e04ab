//! Meteors: heads with fading tails travelling along the strip
//!
//! [`MeteorsFunction`] wraps around the ends and picks the next color on
//! every lap. [`BouncyMeteorsFunction`] bounces off the ends and lets
//! meteors collide with each other, optionally bursting into an explosion.

use alloc::vec::Vec;

use fastrand::Rng;

use super::{Frame, Function, Setup, paint_tail};
use crate::bounds::{Direction, Span, bounce_index, wrap_index};
use crate::color::{ColorSequence, Rgb, blend_colors, scale_color};

const MAX_RANDOM_COUNT: usize = 4;
const MAX_RANDOM_SIZE: usize = 6;
const MAX_RANDOM_STEP: usize = 3;
const DEFAULT_COLLIDE_CHANCE: f32 = 0.8;
const DEFAULT_EXPLOSION_RADIUS: usize = 6;

/// One moving head
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meteor {
    pub index: usize,
    pub step: usize,
    pub direction: Direction,
    pub size: usize,
    pub color: Rgb,
}

impl Meteor {
    #[allow(clippy::cast_possible_wrap)]
    const fn target(&self) -> isize {
        self.index as isize + self.step as isize * self.direction.sign()
    }

    fn random(len: usize, max_size: usize, max_step: usize, color: Rgb, rng: &mut Rng) -> Self {
        Self {
            index: if len == 0 { 0 } else { rng.usize(..len) },
            step: rng.usize(1..=max_step.max(1)),
            direction: Direction::random(rng),
            size: rng.usize(1..=max_size.max(1)),
            color,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MeteorsOptions {
    pub count: Option<usize>,
    pub max_size: Option<usize>,
    pub max_step: Option<usize>,
    /// Take the next sequence color every time a meteor wraps
    pub cycle_colors: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct MeteorsFunction {
    meteors: Vec<Meteor>,
    colors: ColorSequence,
    cycle_colors: bool,
}

fn spawn(
    setup: &mut Setup<'_>,
    count: Option<usize>,
    max_size: Option<usize>,
    max_step: Option<usize>,
) -> (Vec<Meteor>, ColorSequence) {
    let mut colors = setup.colors.clone();
    let rng = &mut *setup.rng;
    let count = count.unwrap_or_else(|| rng.usize(1..=MAX_RANDOM_COUNT));
    let max_size = max_size.unwrap_or(MAX_RANDOM_SIZE);
    let max_step = max_step.unwrap_or(MAX_RANDOM_STEP);
    let meteors = (0..count)
        .map(|_| Meteor::random(setup.len, max_size, max_step, colors.next_color(), rng))
        .collect();
    (meteors, colors)
}

impl MeteorsFunction {
    pub fn new(meteors: Vec<Meteor>, colors: ColorSequence, cycle_colors: bool) -> Self {
        Self {
            meteors,
            colors,
            cycle_colors,
        }
    }

    pub fn from_options(options: MeteorsOptions, setup: &mut Setup<'_>) -> Self {
        let (meteors, colors) = spawn(setup, options.count, options.max_size, options.max_step);
        Self::new(meteors, colors, options.cycle_colors.unwrap_or(true))
    }

    pub fn meteors(&self) -> &[Meteor] {
        &self.meteors
    }
}

impl Function for MeteorsFunction {
    #[allow(clippy::cast_possible_wrap)]
    fn update(&mut self, frame: &mut Frame<'_>) {
        let len = frame.leds.len();
        if len == 0 {
            return;
        }

        for meteor in &mut self.meteors {
            let target = meteor.target();
            meteor.index = wrap_index(target, len);
            let lapped = target < 0 || target >= len as isize;
            if lapped && self.cycle_colors {
                meteor.color = self.colors.next_color();
            }
            paint_tail(
                frame.leds,
                meteor.index as isize,
                meteor.size,
                meteor.direction,
                meteor.color,
                true,
            );
        }
    }

    fn set_colors(&mut self, colors: &ColorSequence) {
        self.colors = colors.clone();
        for meteor in &mut self.meteors {
            meteor.color = self.colors.next_color();
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BouncyMeteorsOptions {
    pub count: Option<usize>,
    pub max_size: Option<usize>,
    pub max_step: Option<usize>,
    /// Probability (0.0-1.0) that two meeting meteors collide
    pub collide_chance: Option<f32>,
    /// Emit an explosion on collision
    pub explode: Option<bool>,
    pub explosion_radius: Option<usize>,
}

/// Expanding ring left behind by a collision
#[derive(Debug, Clone, Copy)]
struct Explosion {
    center: usize,
    radius: usize,
    max_radius: usize,
    color: Rgb,
}

#[derive(Debug, Clone)]
pub struct BouncyMeteorsFunction {
    meteors: Vec<Meteor>,
    colors: ColorSequence,
    collide_chance: f32,
    explode: bool,
    explosion_radius: usize,
    explosions: Vec<Explosion>,
}

impl BouncyMeteorsFunction {
    pub fn new(meteors: Vec<Meteor>, colors: ColorSequence) -> Self {
        Self {
            meteors,
            colors,
            collide_chance: DEFAULT_COLLIDE_CHANCE,
            explode: true,
            explosion_radius: DEFAULT_EXPLOSION_RADIUS,
            explosions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_collisions(mut self, chance: f32, explode: bool, radius: usize) -> Self {
        self.collide_chance = chance.clamp(0.0, 1.0);
        self.explode = explode;
        self.explosion_radius = radius;
        self
    }

    pub fn from_options(options: BouncyMeteorsOptions, setup: &mut Setup<'_>) -> Self {
        let (meteors, colors) = spawn(setup, options.count, options.max_size, options.max_step);
        Self::new(meteors, colors).with_collisions(
            options.collide_chance.unwrap_or(DEFAULT_COLLIDE_CHANCE),
            options.explode.unwrap_or(true),
            options.explosion_radius.unwrap_or(DEFAULT_EXPLOSION_RADIUS),
        )
    }

    pub fn meteors(&self) -> &[Meteor] {
        &self.meteors
    }

    /// Number of explosions still expanding
    pub fn active_explosions(&self) -> usize {
        self.explosions.len()
    }

    /// Resolve pairwise collisions between the moves of this tick
    ///
    /// Two meteors collide when their swept spans overlap and they swapped
    /// order or landed on the same pixel. Colliding meteors go back to where
    /// they started the tick and exchange velocities.
    fn collide(&mut self, previous: &[usize], rng: &mut Rng) {
        let count = self.meteors.len();
        let spans: Vec<Span> = previous
            .iter()
            .zip(&self.meteors)
            .map(|(from, meteor)| Span::between(*from, meteor.index))
            .collect();

        for a in 0..count {
            for b in (a + 1)..count {
                if !spans[a].overlaps(spans[b]) {
                    continue;
                }
                let (from_a, from_b) = (previous[a], previous[b]);
                let (to_a, to_b) = (self.meteors[a].index, self.meteors[b].index);
                let crossed = (from_a < from_b) != (to_a < to_b) || to_a == to_b;
                if !crossed || rng.f32() >= self.collide_chance {
                    continue;
                }

                let (first, second) = self.meteors.split_at_mut(b);
                let (ma, mb) = (&mut first[a], &mut second[0]);
                ma.index = from_a;
                mb.index = from_b;
                core::mem::swap(&mut ma.step, &mut mb.step);
                core::mem::swap(&mut ma.direction, &mut mb.direction);

                if self.explode && self.explosion_radius > 0 {
                    self.explosions.push(Explosion {
                        center: spans[a].meeting_point(spans[b]),
                        radius: 0,
                        max_radius: self.explosion_radius,
                        color: blend_colors(ma.color, mb.color, 128),
                    });
                }
            }
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn draw_explosions(&mut self, leds: &mut [Rgb]) {
        let len = leds.len();
        for explosion in &mut self.explosions {
            let fade = 1.0 - explosion.radius as f32 / (explosion.max_radius + 1) as f32;
            let color = scale_color(explosion.color, fade);
            let left = explosion.center.checked_sub(explosion.radius);
            let right = Some(explosion.center + explosion.radius);
            for index in [left, right].into_iter().flatten() {
                if let Some(led) = leds.get_mut(index) {
                    *led = color;
                }
            }
            explosion.radius += 1;
        }
        // The buffer may have shrunk since the collision.
        self.explosions
            .retain(|e| e.radius <= e.max_radius && e.center < len);
    }
}

impl Function for BouncyMeteorsFunction {
    #[allow(clippy::cast_possible_wrap)]
    fn update(&mut self, frame: &mut Frame<'_>) {
        let len = frame.leds.len();
        if len == 0 {
            return;
        }

        let previous: Vec<usize> = self.meteors.iter().map(|m| m.index.min(len - 1)).collect();
        for meteor in &mut self.meteors {
            let (index, hit) = bounce_index(meteor.target(), len);
            meteor.index = index;
            if hit {
                meteor.direction = meteor.direction.flip();
            }
        }

        self.collide(&previous, frame.rng);

        for meteor in &self.meteors {
            paint_tail(
                frame.leds,
                meteor.index as isize,
                meteor.size,
                meteor.direction,
                meteor.color,
                false,
            );
        }
        self.draw_explosions(frame.leds);
    }

    fn set_colors(&mut self, colors: &ColorSequence) {
        self.colors = colors.clone();
        for meteor in &mut self.meteors {
            meteor.color = self.colors.next_color();
        }
    }
}
