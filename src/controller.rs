//! Controller - owns the virtual buffer and drives the tick loop
//!
//! Configure a mode with one `use_color_*` call and one or more
//! `use_function_*` calls, then [`Controller::run`] it. Call
//! [`Controller::reset`] before configuring the next mode.

use alloc::boxed::Box;
use alloc::vec::Vec;

use embassy_time::{Duration, Instant, block_for};
use fastrand::Rng;
use log::{debug, error, info, warn};

use crate::channel::{ControlIntent, ControlReceiver};
use crate::color::{BLACK, ColorSequence, DEFAULT_PALETTE, Rgb};
use crate::driver::LedDriver;
use crate::error::Result;
use crate::frame_scheduler::{DEFAULT_REFRESH_DELAY, FrameScheduler};
use crate::function::{
    AccelerateFunction, AccelerateOptions, AliveFunction, AliveOptions, BlinkFunction,
    BlinkOptions, BouncyMeteorsFunction, BouncyMeteorsOptions, CylonFunction, CylonOptions,
    FadeFunction, FadeOptions, Frame, FunctionSlot, MarqueeFunction, MarqueeOptions,
    MergeFunction, MergeOptions, MeteorsFunction, MeteorsOptions, Overlay,
    RaindropsFunction, RaindropsOptions, RandomChangeFunction, RandomChangeOptions, Setup,
    SolidColorCycleFunction, SolidColorCycleOptions, SpritesFunction, SpritesOptions,
    TwinkleFunction, TwinkleOptions,
};
use crate::light_string::LightString;
use crate::pattern;
use crate::registry::{ColorMode, FunctionMode};

const DEFAULT_SECONDS_PER_MODE: u64 = 30;
const DEFAULT_SEED: u64 = 0x5EED_1ED5;
const TRAIL_FADE_STEPS: core::ops::RangeInclusive<u8> = 8..=48;

/// Called with the device buffer after every refresh
pub type RefreshCallback<'a> = Box<dyn FnMut(&[Rgb]) + 'a>;

/// Configuration for the controller
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Time between ticks
    pub refresh_delay: Duration,
    /// How long `run` plays one mode
    pub seconds_per_mode: Duration,
    /// Ignore the mode deadline and run until stopped
    pub loop_forever: bool,
    /// Tick as fast as possible without sleeping
    pub simulate: bool,
    /// Color of an "off" LED
    pub background: Rgb,
    /// Seed for every random choice the controller makes
    pub seed: u64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            refresh_delay: DEFAULT_REFRESH_DELAY,
            seconds_per_mode: Duration::from_secs(DEFAULT_SECONDS_PER_MODE),
            loop_forever: false,
            simulate: false,
            background: BLACK,
            seed: DEFAULT_SEED,
        }
    }
}

pub struct Controller<'a, D: LedDriver> {
    light_string: LightString<D>,
    virtual_leds: Vec<Rgb>,
    functions: Vec<FunctionSlot>,
    colors: ColorSequence,
    background: Rgb,
    overlay: Overlay,
    rng: Rng,
    config: ControllerConfig,
    scheduler: FrameScheduler,
    control: Option<ControlReceiver<'a>>,
    on_refresh: Option<RefreshCallback<'a>>,
    stopped: bool,
}

impl<'a, D: LedDriver> Controller<'a, D> {
    pub fn new(driver: D, config: ControllerConfig) -> Self {
        let light_string = LightString::new(driver);
        let led_count = light_string.len();
        Self {
            light_string,
            virtual_leds: alloc::vec![config.background; led_count],
            functions: Vec::new(),
            colors: ColorSequence::new(DEFAULT_PALETTE.to_vec()),
            background: config.background,
            overlay: Overlay::default(),
            rng: Rng::with_seed(config.seed),
            scheduler: FrameScheduler::new(config.refresh_delay),
            config,
            control: None,
            on_refresh: None,
            stopped: false,
        }
    }

    /// Accept control intents from `receiver` while running
    #[must_use]
    pub fn with_control(mut self, receiver: ControlReceiver<'a>) -> Self {
        self.control = Some(receiver);
        self
    }

    pub fn set_refresh_callback(&mut self, callback: impl FnMut(&[Rgb]) + 'a) {
        self.on_refresh = Some(Box::new(callback));
    }

    /// Number of physical LEDs
    pub fn led_count(&self) -> usize {
        self.light_string.len()
    }

    pub fn virtual_leds(&self) -> &[Rgb] {
        &self.virtual_leds
    }

    /// Replace the virtual buffer, padding with background up to the LED count
    pub fn set_virtual_leds(&mut self, colors: &[Rgb]) {
        let len = colors.len().max(self.led_count());
        self.virtual_leds.clear();
        self.virtual_leds.extend_from_slice(colors);
        self.virtual_leds.resize(len, self.background);
    }

    pub fn functions(&self) -> &[FunctionSlot] {
        &self.functions
    }

    pub fn color_sequence(&self) -> &ColorSequence {
        &self.colors
    }

    pub const fn background(&self) -> Rgb {
        self.background
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ControllerConfig {
        &mut self.config
    }

    pub fn light_string(&self) -> &LightString<D> {
        &self.light_string
    }

    pub fn light_string_mut(&mut self) -> &mut LightString<D> {
        &mut self.light_string
    }

    /// True once a stop intent was received during the last run
    pub const fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Drop all functions and clear the buffer before configuring a new mode
    pub fn reset(&mut self) {
        self.functions.clear();
        self.overlay.clear();
        self.virtual_leds.clear();
        self.virtual_leds.resize(self.led_count(), self.background);
    }

    /// Turn every LED off
    pub fn off(&mut self) -> Result<()> {
        self.light_string.off()?;
        Ok(())
    }

    pub fn set_background(&mut self, color: Rgb) {
        self.background = color;
    }

    pub fn use_color_single(&mut self, color: Rgb) {
        debug!("color: single {:?}", color);
        self.colors = ColorSequence::single(color);
    }

    pub fn use_color_sequence(&mut self, colors: Vec<Rgb>) -> Result<()> {
        if colors.is_empty() {
            return Err(crate::PatternError::EmptySequence.into());
        }
        debug!("color: sequence of {}", colors.len());
        self.colors = ColorSequence::new(colors);
        Ok(())
    }

    /// Every LED set to `color`
    pub fn use_color_solid(&mut self, color: Rgb) {
        debug!("color: solid {:?}", color);
        self.use_pattern(pattern::solid(self.led_count(), color));
    }

    /// Gradient through `colors`, `length` slots long (defaults to the LED count)
    pub fn use_color_transition(
        &mut self,
        colors: &[Rgb],
        wrap: bool,
        length: Option<usize>,
    ) -> Result<()> {
        let length = length.unwrap_or(self.led_count());
        debug!("color: transition of {} over {}", colors.len(), length);
        self.use_pattern(pattern::transition(length, colors, wrap)?);
        Ok(())
    }

    pub fn use_color_rainbow(&mut self, length: Option<usize>) {
        let length = length.unwrap_or(self.led_count());
        debug!("color: rainbow over {}", length);
        self.use_pattern(pattern::rainbow(length, true));
    }

    pub fn use_color_repeating_rainbow(&mut self, segment_length: usize) -> Result<()> {
        debug!("color: repeating rainbow every {}", segment_length);
        self.use_pattern(pattern::repeating_rainbow(self.led_count(), segment_length)?);
        Ok(())
    }

    pub fn use_color_repeating_sequence(&mut self, colors: &[Rgb]) -> Result<()> {
        debug!("color: repeating sequence of {}", colors.len());
        self.use_pattern(pattern::repeating_sequence(self.led_count(), colors)?);
        Ok(())
    }

    pub fn use_color_reflect(&mut self, colors: &[Rgb], fold_length: usize) -> Result<()> {
        debug!("color: reflect {} folded every {}", colors.len(), fold_length);
        self.use_pattern(pattern::reflect(self.led_count(), colors, fold_length)?);
        Ok(())
    }

    pub fn use_color_random(&mut self) {
        debug!("color: random");
        let colors = pattern::random(self.led_count(), &mut self.rng);
        self.use_pattern(colors);
    }

    /// Colors drawn from `palette`, or from the default palette
    pub fn use_color_pseudo_random(&mut self, palette: Option<&[Rgb]>) -> Result<()> {
        debug!("color: pseudo random");
        let palette = palette.unwrap_or(&DEFAULT_PALETTE);
        let colors = pattern::pseudo_random(self.led_count(), palette, &mut self.rng)?;
        self.use_pattern(colors);
        Ok(())
    }

    /// Use a generated pattern as both color sequence and buffer contents
    fn use_pattern(&mut self, colors: Vec<Rgb>) {
        self.set_virtual_leds(&colors);
        self.colors = ColorSequence::new(colors);
    }

    fn setup(&mut self) -> Setup<'_> {
        Setup {
            len: self.virtual_leds.len(),
            colors: &self.colors,
            rng: &mut self.rng,
        }
    }

    fn push_function(&mut self, function: FunctionSlot) {
        debug!("function: {}", function.name());
        self.functions.push(function);
    }

    /// Make sure a fade runs before any effect that relies on comet trails
    fn ensure_trail_fade(&mut self) {
        if self
            .functions
            .iter()
            .any(|function| matches!(function, FunctionSlot::Fade(_)))
        {
            return;
        }
        let step = self.rng.u8(TRAIL_FADE_STEPS);
        self.functions
            .insert(0, FunctionSlot::Fade(FadeFunction::new(step, 1)));
    }

    pub fn use_function_none(&mut self) {
        self.push_function(FunctionSlot::None);
    }

    pub fn use_function_off(&mut self) {
        self.push_function(FunctionSlot::Off);
    }

    pub fn use_function_marquee(&mut self, options: MarqueeOptions) {
        let function = MarqueeFunction::from_options(options, &mut self.setup());
        self.push_function(FunctionSlot::Marquee(function));
    }

    pub fn use_function_cylon(&mut self, options: CylonOptions) {
        self.ensure_trail_fade();
        let function = CylonFunction::from_options(options, &mut self.setup());
        self.push_function(FunctionSlot::Cylon(function));
    }

    pub fn use_function_meteors(&mut self, options: MeteorsOptions) {
        self.ensure_trail_fade();
        let function = MeteorsFunction::from_options(options, &mut self.setup());
        self.push_function(FunctionSlot::Meteors(function));
    }

    pub fn use_function_bouncy_meteors(&mut self, options: BouncyMeteorsOptions) {
        self.ensure_trail_fade();
        let function = BouncyMeteorsFunction::from_options(options, &mut self.setup());
        self.push_function(FunctionSlot::BouncyMeteors(function));
    }

    pub fn use_function_accelerate(&mut self, options: AccelerateOptions) {
        self.ensure_trail_fade();
        let function = AccelerateFunction::from_options(options, &mut self.setup());
        self.push_function(FunctionSlot::Accelerate(function));
    }

    pub fn use_function_raindrops(&mut self, options: RaindropsOptions) {
        self.ensure_trail_fade();
        let function = RaindropsFunction::from_options(options, &mut self.setup());
        self.push_function(FunctionSlot::Raindrops(function));
    }

    pub fn use_function_sprites(&mut self, options: SpritesOptions) {
        self.ensure_trail_fade();
        let function = SpritesFunction::from_options(options, &mut self.setup());
        self.push_function(FunctionSlot::Sprites(function));
    }

    pub fn use_function_alive(&mut self, options: AliveOptions) {
        self.ensure_trail_fade();
        let function = AliveFunction::from_options(options, &mut self.setup());
        self.push_function(FunctionSlot::Alive(function));
    }

    pub fn use_function_twinkle(&mut self, options: TwinkleOptions) {
        let function = TwinkleFunction::from_options(options, &mut self.setup());
        self.push_function(FunctionSlot::Twinkle(function));
    }

    pub fn use_function_blink(&mut self, options: BlinkOptions) {
        let function = BlinkFunction::from_options(options, &mut self.setup());
        self.push_function(FunctionSlot::Blink(function));
    }

    pub fn use_function_fade(&mut self, options: FadeOptions) {
        let function = FadeFunction::from_options(options, &mut self.setup());
        self.push_function(FunctionSlot::Fade(function));
    }

    pub fn use_function_merge(&mut self, options: MergeOptions) {
        let function = MergeFunction::from_options(options, &mut self.setup());
        self.push_function(FunctionSlot::Merge(function));
    }

    pub fn use_function_random_change(&mut self, options: RandomChangeOptions) {
        let function = RandomChangeFunction::from_options(options, &mut self.setup());
        self.push_function(FunctionSlot::RandomChange(function));
    }

    pub fn use_function_solid_color_cycle(&mut self, options: SolidColorCycleOptions) {
        let function = SolidColorCycleFunction::from_options(options, &mut self.setup());
        self.push_function(FunctionSlot::SolidColorCycle(function));
    }

    /// Configure colors for `mode` with randomized parameters
    pub fn apply_color_mode(&mut self, mode: ColorMode) -> Result<()> {
        let led_count = self.led_count();
        match mode {
            ColorMode::Single => {
                let color = DEFAULT_PALETTE[self.rng.usize(..DEFAULT_PALETTE.len())];
                self.use_color_single(color);
            }
            ColorMode::Palette => self.use_color_sequence(DEFAULT_PALETTE.to_vec())?,
            ColorMode::Transition => {
                let colors = self.random_palette_colors();
                let wrap = self.rng.bool();
                self.use_color_transition(&colors, wrap, None)?;
            }
            ColorMode::Rainbow => self.use_color_rainbow(None),
            ColorMode::RepeatingRainbow => {
                let segment = self.rng.usize(7..=led_count.max(8));
                self.use_color_repeating_rainbow(segment)?;
            }
            ColorMode::RepeatingSequence => {
                let colors = self.random_palette_colors();
                self.use_color_repeating_sequence(&colors)?;
            }
            ColorMode::Reflect => {
                let colors = self.random_palette_colors();
                let fold = self.rng.usize(2..=(led_count / 2).max(3));
                let gradient = pattern::transition(fold, &colors, false)?;
                self.use_color_reflect(&gradient, fold)?;
            }
            ColorMode::Random => self.use_color_random(),
            ColorMode::PseudoRandom => self.use_color_pseudo_random(None)?,
        }
        Ok(())
    }

    /// Configure `mode` with randomized parameters
    pub fn apply_function_mode(&mut self, mode: FunctionMode) {
        match mode {
            FunctionMode::None => self.use_function_none(),
            FunctionMode::Off => self.use_function_off(),
            FunctionMode::Marquee => self.use_function_marquee(MarqueeOptions::default()),
            FunctionMode::Cylon => self.use_function_cylon(CylonOptions::default()),
            FunctionMode::Meteors => self.use_function_meteors(MeteorsOptions::default()),
            FunctionMode::BouncyMeteors => {
                self.use_function_bouncy_meteors(BouncyMeteorsOptions::default());
            }
            FunctionMode::Accelerate => {
                self.use_function_accelerate(AccelerateOptions::default());
            }
            FunctionMode::Raindrops => self.use_function_raindrops(RaindropsOptions::default()),
            FunctionMode::Sprites => self.use_function_sprites(SpritesOptions::default()),
            FunctionMode::Alive => self.use_function_alive(AliveOptions::default()),
            FunctionMode::Twinkle => self.use_function_twinkle(TwinkleOptions::default()),
            FunctionMode::Blink => self.use_function_blink(BlinkOptions::default()),
            FunctionMode::Fade => self.use_function_fade(FadeOptions::default()),
            FunctionMode::Merge => self.use_function_merge(MergeOptions::default()),
            FunctionMode::RandomChange => {
                self.use_function_random_change(RandomChangeOptions::default());
            }
            FunctionMode::SolidColorCycle => {
                self.use_function_solid_color_cycle(SolidColorCycleOptions::default());
            }
        }
    }

    fn random_palette_colors(&mut self) -> Vec<Rgb> {
        let count = self.rng.usize(2..=5);
        (0..count)
            .map(|_| DEFAULT_PALETTE[self.rng.usize(..DEFAULT_PALETTE.len())])
            .collect()
    }

    /// Run one iteration: update functions, copy to the strip, refresh
    pub fn tick(&mut self) -> Result<()> {
        self.process_control();

        let mut frame = Frame {
            leds: &mut self.virtual_leds,
            overlay: &mut self.overlay,
            background: self.background,
            rng: &mut self.rng,
        };
        for function in &mut self.functions {
            function.update(&mut frame);
        }

        // The virtual buffer may be longer than the strip; the rest is not shown.
        let device = self.light_string.pixels_mut();
        for (led, color) in device.iter_mut().zip(&self.virtual_leds) {
            *led = *color;
        }
        for (index, color) in self.overlay.iter() {
            if let Some(led) = device.get_mut(index) {
                *led = color;
            }
        }
        self.overlay.clear();

        self.light_string.refresh()?;

        if let Some(callback) = &mut self.on_refresh {
            callback(self.light_string.pixels());
        }
        Ok(())
    }

    /// Play the configured mode until its deadline passes or a stop arrives
    pub fn run(&mut self) -> Result<()> {
        let deadline = Instant::now() + self.config.seconds_per_mode;
        self.stopped = false;
        self.scheduler.reset();
        info!(
            "running {} functions over {} LEDs",
            self.functions.len(),
            self.virtual_leds.len()
        );

        loop {
            if let Err(e) = self.tick() {
                error!("animation stopped: {}", e);
                return Err(e);
            }
            if self.stopped {
                info!("stop requested");
                break;
            }

            let now = Instant::now();
            if !self.config.loop_forever && now >= deadline {
                break;
            }
            if !self.config.simulate {
                block_for(self.scheduler.tick(now).sleep_duration);
            }
        }
        Ok(())
    }

    /// Play `modes` random color/function pairs
    pub fn demo(&mut self, modes: usize) -> Result<()> {
        for _ in 0..modes {
            let color = ColorMode::ALL[self.rng.usize(..ColorMode::ALL.len())];
            let function = FunctionMode::ALL[self.rng.usize(..FunctionMode::ALL.len())];
            self.play(color, function)?;
            if self.stopped {
                break;
            }
        }
        Ok(())
    }

    /// Play every color/function pair once
    pub fn test(&mut self) -> Result<()> {
        for color in ColorMode::ALL {
            for function in FunctionMode::ALL {
                self.play(color, function)?;
                if self.stopped {
                    return Ok(());
                }
            }
        }
        Ok(())
    }

    fn play(&mut self, color: ColorMode, function: FunctionMode) -> Result<()> {
        info!("mode: {} + {}", color.as_str(), function.as_str());
        self.reset();
        self.apply_color_mode(color)?;
        self.apply_function_mode(function);
        self.run()
    }

    fn process_control(&mut self) {
        let Some(receiver) = self.control else {
            return;
        };
        while let Some(intent) = receiver.try_receive() {
            match intent {
                ControlIntent::Stop => self.stopped = true,
                ControlIntent::SetColor(color) => {
                    self.replace_colors(ColorSequence::single(color));
                }
                ControlIntent::SetColors(colors) => {
                    if colors.is_empty() {
                        warn!("ignoring empty color list");
                    } else {
                        self.replace_colors(ColorSequence::new(colors));
                    }
                }
                ControlIntent::SetBackground(color) => self.background = color,
                ControlIntent::SetRefreshDelay(delay) => {
                    self.config.refresh_delay = delay;
                    self.scheduler.set_frame_duration(delay);
                }
            }
        }
    }

    fn replace_colors(&mut self, colors: ColorSequence) {
        self.colors = colors;
        for function in &mut self.functions {
            function.set_colors(&self.colors);
        }
    }
}
