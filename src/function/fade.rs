//! Effects built on per-channel step-toward blending
//!
//! All of them move each channel toward a target by a fixed step per tick
//! and stop exactly on the target.

use alloc::vec::Vec;

use super::{Countdown, Frame, Function, Setup};
use crate::color::{ColorSequence, Rgb, step_toward};

const DEFAULT_FADE_STEP: u8 = 24;
const DEFAULT_CHANGE_CHANCE: f32 = 0.01;
const DEFAULT_CYCLE_DELAY: u32 = 100;

#[derive(Debug, Clone, Copy, Default)]
pub struct FadeOptions {
    /// Per-channel change per fade
    pub step: Option<u8>,
    /// Ticks between fades
    pub delay: Option<u32>,
}

/// Fades every LED toward the background, leaving comet trails
#[derive(Debug, Clone)]
pub struct FadeFunction {
    step: u8,
    delay: Countdown,
}

impl FadeFunction {
    /// A step of zero is raised to one so the fade always terminates
    pub fn new(step: u8, delay: u32) -> Self {
        Self {
            step: step.max(1),
            delay: Countdown::new(delay),
        }
    }

    pub fn from_options(options: FadeOptions, _setup: &mut Setup<'_>) -> Self {
        Self::new(
            options.step.unwrap_or(DEFAULT_FADE_STEP),
            options.delay.unwrap_or(1),
        )
    }
}

impl Function for FadeFunction {
    fn update(&mut self, frame: &mut Frame<'_>) {
        if !self.delay.tick() {
            return;
        }
        let background = frame.background;
        for led in frame.leds.iter_mut() {
            *led = step_toward(*led, background, self.step);
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomChangeOptions {
    /// Probability (0.0-1.0) per LED per tick of picking a new color
    pub chance: Option<f32>,
    pub fade_step: Option<u8>,
}

/// LEDs pick new sequence colors at random and blend into them
#[derive(Debug, Clone)]
pub struct RandomChangeFunction {
    targets: Vec<Option<Rgb>>,
    chance: f32,
    fade_step: u8,
    colors: ColorSequence,
}

impl RandomChangeFunction {
    pub fn new(chance: f32, fade_step: u8, colors: ColorSequence) -> Self {
        Self {
            targets: Vec::new(),
            chance: chance.clamp(0.0, 1.0),
            fade_step: fade_step.max(1),
            colors,
        }
    }

    pub fn from_options(options: RandomChangeOptions, setup: &mut Setup<'_>) -> Self {
        Self::new(
            options.chance.unwrap_or(DEFAULT_CHANGE_CHANCE),
            options.fade_step.unwrap_or(DEFAULT_FADE_STEP),
            setup.colors.clone(),
        )
    }
}

impl Function for RandomChangeFunction {
    fn update(&mut self, frame: &mut Frame<'_>) {
        self.targets.resize(frame.leds.len(), None);

        for (led, target) in frame.leds.iter_mut().zip(self.targets.iter_mut()) {
            if frame.rng.f32() < self.chance {
                *target = Some(self.colors.random(frame.rng));
            }
            if let Some(color) = *target {
                *led = step_toward(*led, color, self.fade_step);
                if *led == color {
                    *target = None;
                }
            }
        }
    }

    fn set_colors(&mut self, colors: &ColorSequence) {
        self.colors = colors.clone();
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SolidColorCycleOptions {
    /// Ticks spent on each color
    pub delay: Option<u32>,
    pub fade_step: Option<u8>,
}

/// The whole strip fades from one sequence color to the next
#[derive(Debug, Clone)]
pub struct SolidColorCycleFunction {
    target: Rgb,
    delay: Countdown,
    fade_step: u8,
    colors: ColorSequence,
}

impl SolidColorCycleFunction {
    pub fn new(delay: u32, fade_step: u8, mut colors: ColorSequence) -> Self {
        Self {
            target: colors.next_color(),
            delay: Countdown::new(delay),
            fade_step: fade_step.max(1),
            colors,
        }
    }

    pub fn from_options(options: SolidColorCycleOptions, setup: &mut Setup<'_>) -> Self {
        Self::new(
            options.delay.unwrap_or(DEFAULT_CYCLE_DELAY),
            options.fade_step.unwrap_or(DEFAULT_FADE_STEP),
            setup.colors.clone(),
        )
    }

    pub const fn target(&self) -> Rgb {
        self.target
    }
}

impl Function for SolidColorCycleFunction {
    fn update(&mut self, frame: &mut Frame<'_>) {
        if self.delay.tick() {
            self.target = self.colors.next_color();
        }
        for led in frame.leds.iter_mut() {
            *led = step_toward(*led, self.target, self.fade_step);
        }
    }

    fn set_colors(&mut self, colors: &ColorSequence) {
        self.colors = colors.clone();
        self.target = self.colors.next_color();
    }
}
