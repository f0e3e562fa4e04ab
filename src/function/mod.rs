//! Animation functions with compile-time known variants
//!
//! Each effect keeps only the state it needs and implements [`Function`].
//! The controller stores them in [`FunctionSlot`] and lends each one the
//! virtual buffer through a [`Frame`] once per tick.

mod accelerate;
mod alive;
mod cylon;
mod fade;
mod marquee;
mod merge;
mod meteors;
mod overlay;
mod raindrops;
mod sprites;

use alloc::collections::BTreeMap;

use fastrand::Rng;

pub use accelerate::{AccelerateFunction, AccelerateOptions};
pub use alive::{AliveFunction, AliveOptions};
pub use cylon::{CylonFunction, CylonOptions};
pub use fade::{
    FadeFunction, FadeOptions, RandomChangeFunction, RandomChangeOptions,
    SolidColorCycleFunction, SolidColorCycleOptions,
};
pub use marquee::{MarqueeFunction, MarqueeOptions};
pub use merge::{MergeFunction, MergeOptions};
pub use meteors::{
    BouncyMeteorsFunction, BouncyMeteorsOptions, Meteor, MeteorsFunction, MeteorsOptions,
};
pub use overlay::{BlinkFunction, BlinkOptions, TwinkleFunction, TwinkleOptions};
pub use raindrops::{DropState, RaindropsFunction, RaindropsOptions};
pub use sprites::{SpritesFunction, SpritesOptions};

use crate::bounds::{Direction, wrap_index};
use crate::color::{ColorSequence, Rgb};

/// Everything a function may touch during one tick
pub struct Frame<'a> {
    /// Virtual LED buffer
    pub leds: &'a mut [Rgb],
    /// Colors applied to the output only, cleared after every tick
    pub overlay: &'a mut Overlay,
    /// Color of an "off" LED
    pub background: Rgb,
    pub rng: &'a mut Rng,
}

/// Inputs used to build a function from its options
pub struct Setup<'a> {
    /// Length of the virtual buffer
    pub len: usize,
    /// Current color sequence; functions keep their own copy
    pub colors: &'a ColorSequence,
    pub rng: &'a mut Rng,
}

pub trait Function {
    /// Advance one tick, mutating the buffer in place
    fn update(&mut self, frame: &mut Frame<'_>);

    /// Replace the colors this function draws with
    fn set_colors(&mut self, _colors: &ColorSequence) {}
}

/// Transient index to color map drawn over the device buffer
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    colors: BTreeMap<usize, Rgb>,
}

impl Overlay {
    pub fn set(&mut self, index: usize, color: Rgb) {
        self.colors.insert(index, color);
    }

    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(&index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, Rgb)> + '_ {
        self.colors.iter().map(|(index, color)| (*index, *color))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn clear(&mut self) {
        self.colors.clear();
    }
}

/// Fires once every `period` ticks
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    count: u32,
    period: u32,
}

impl Countdown {
    /// A period of 0 or 1 fires on every tick
    pub const fn new(period: u32) -> Self {
        Self { count: 0, period }
    }

    pub fn tick(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.period {
            self.count = 0;
            true
        } else {
            false
        }
    }
}

/// Paint `size` pixels ending at `head`, trailing against `direction`
///
/// Brightness falls off toward the tail. With `wrap` the tail continues
/// from the other end of the buffer, otherwise pixels past an end are
/// skipped.
#[allow(
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub(crate) fn paint_tail(
    leds: &mut [Rgb],
    head: isize,
    size: usize,
    direction: Direction,
    color: Rgb,
    wrap: bool,
) {
    let len = leds.len();
    if len == 0 {
        return;
    }
    for offset in 0..size {
        let position = head - offset as isize * direction.sign();
        let index = if wrap {
            wrap_index(position, len)
        } else if position >= 0 && (position as usize) < len {
            position as usize
        } else {
            continue;
        };
        let level = (size - offset) * 255 / size;
        leds[index] = crate::color::dim_color(color, level as u8);
    }
}

/// Function slot - enum containing all possible functions
#[derive(Debug, Clone)]
pub enum FunctionSlot {
    /// Leaves the buffer untouched
    None,
    /// Fills the buffer with the background color
    Off,
    Marquee(MarqueeFunction),
    Cylon(CylonFunction),
    Meteors(MeteorsFunction),
    BouncyMeteors(BouncyMeteorsFunction),
    Accelerate(AccelerateFunction),
    Raindrops(RaindropsFunction),
    Sprites(SpritesFunction),
    Alive(AliveFunction),
    Twinkle(TwinkleFunction),
    Blink(BlinkFunction),
    Fade(FadeFunction),
    Merge(MergeFunction),
    RandomChange(RandomChangeFunction),
    SolidColorCycle(SolidColorCycleFunction),
}

impl FunctionSlot {
    /// Run the current function for one tick
    pub fn update(&mut self, frame: &mut Frame<'_>) {
        match self {
            Self::None => {}
            Self::Off => frame.leds.fill(frame.background),
            Self::Marquee(function) => function.update(frame),
            Self::Cylon(function) => function.update(frame),
            Self::Meteors(function) => function.update(frame),
            Self::BouncyMeteors(function) => function.update(frame),
            Self::Accelerate(function) => function.update(frame),
            Self::Raindrops(function) => function.update(frame),
            Self::Sprites(function) => function.update(frame),
            Self::Alive(function) => function.update(frame),
            Self::Twinkle(function) => function.update(frame),
            Self::Blink(function) => function.update(frame),
            Self::Fade(function) => function.update(frame),
            Self::Merge(function) => function.update(frame),
            Self::RandomChange(function) => function.update(frame),
            Self::SolidColorCycle(function) => function.update(frame),
        }
    }

    /// Hand a new color sequence to the function
    pub fn set_colors(&mut self, colors: &ColorSequence) {
        match self {
            Self::None | Self::Off => {}
            Self::Marquee(function) => function.set_colors(colors),
            Self::Cylon(function) => function.set_colors(colors),
            Self::Meteors(function) => function.set_colors(colors),
            Self::BouncyMeteors(function) => function.set_colors(colors),
            Self::Accelerate(function) => function.set_colors(colors),
            Self::Raindrops(function) => function.set_colors(colors),
            Self::Sprites(function) => function.set_colors(colors),
            Self::Alive(function) => function.set_colors(colors),
            Self::Twinkle(function) => function.set_colors(colors),
            Self::Blink(function) => function.set_colors(colors),
            Self::Fade(function) => function.set_colors(colors),
            Self::Merge(function) => function.set_colors(colors),
            Self::RandomChange(function) => function.set_colors(colors),
            Self::SolidColorCycle(function) => function.set_colors(colors),
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Off => "off",
            Self::Marquee(_) => "marquee",
            Self::Cylon(_) => "cylon",
            Self::Meteors(_) => "meteors",
            Self::BouncyMeteors(_) => "bouncy_meteors",
            Self::Accelerate(_) => "accelerate",
            Self::Raindrops(_) => "raindrops",
            Self::Sprites(_) => "sprites",
            Self::Alive(_) => "alive",
            Self::Twinkle(_) => "twinkle",
            Self::Blink(_) => "blink",
            Self::Fade(_) => "fade",
            Self::Merge(_) => "merge",
            Self::RandomChange(_) => "random_change",
            Self::SolidColorCycle(_) => "solid_color_cycle",
        }
    }
}
