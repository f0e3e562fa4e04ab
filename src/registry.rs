//! Named color and function modes
//!
//! These are the entries `demo()` and `test()` iterate over. Each mode has
//! a stable name and numeric id so front-ends can select them.

const COLOR_NAME_SINGLE: &str = "single";
const COLOR_NAME_PALETTE: &str = "palette";
const COLOR_NAME_TRANSITION: &str = "transition";
const COLOR_NAME_RAINBOW: &str = "rainbow";
const COLOR_NAME_REPEATING_RAINBOW: &str = "repeating_rainbow";
const COLOR_NAME_REPEATING_SEQUENCE: &str = "repeating_sequence";
const COLOR_NAME_REFLECT: &str = "reflect";
const COLOR_NAME_RANDOM: &str = "random";
const COLOR_NAME_PSEUDO_RANDOM: &str = "pseudo_random";

/// Ways of choosing the color sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ColorMode {
    Single = 0,
    Palette = 1,
    Transition = 2,
    Rainbow = 3,
    RepeatingRainbow = 4,
    RepeatingSequence = 5,
    Reflect = 6,
    Random = 7,
    PseudoRandom = 8,
}

impl ColorMode {
    pub const ALL: [Self; 9] = [
        Self::Single,
        Self::Palette,
        Self::Transition,
        Self::Rainbow,
        Self::RepeatingRainbow,
        Self::RepeatingSequence,
        Self::Reflect,
        Self::Random,
        Self::PseudoRandom,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => COLOR_NAME_SINGLE,
            Self::Palette => COLOR_NAME_PALETTE,
            Self::Transition => COLOR_NAME_TRANSITION,
            Self::Rainbow => COLOR_NAME_RAINBOW,
            Self::RepeatingRainbow => COLOR_NAME_REPEATING_RAINBOW,
            Self::RepeatingSequence => COLOR_NAME_REPEATING_SEQUENCE,
            Self::Reflect => COLOR_NAME_REFLECT,
            Self::Random => COLOR_NAME_RANDOM,
            Self::PseudoRandom => COLOR_NAME_PSEUDO_RANDOM,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == s)
    }
}

/// Animation functions selectable by name
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum FunctionMode {
    None = 0,
    Off = 1,
    Marquee = 2,
    Cylon = 3,
    Meteors = 4,
    BouncyMeteors = 5,
    Accelerate = 6,
    Raindrops = 7,
    Sprites = 8,
    Alive = 9,
    Twinkle = 10,
    Blink = 11,
    Fade = 12,
    Merge = 13,
    RandomChange = 14,
    SolidColorCycle = 15,
}

impl FunctionMode {
    pub const ALL: [Self; 16] = [
        Self::None,
        Self::Off,
        Self::Marquee,
        Self::Cylon,
        Self::Meteors,
        Self::BouncyMeteors,
        Self::Accelerate,
        Self::Raindrops,
        Self::Sprites,
        Self::Alive,
        Self::Twinkle,
        Self::Blink,
        Self::Fade,
        Self::Merge,
        Self::RandomChange,
        Self::SolidColorCycle,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }

    /// Same names as [`FunctionSlot::name`](crate::FunctionSlot::name)
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Off => "off",
            Self::Marquee => "marquee",
            Self::Cylon => "cylon",
            Self::Meteors => "meteors",
            Self::BouncyMeteors => "bouncy_meteors",
            Self::Accelerate => "accelerate",
            Self::Raindrops => "raindrops",
            Self::Sprites => "sprites",
            Self::Alive => "alive",
            Self::Twinkle => "twinkle",
            Self::Blink => "blink",
            Self::Fade => "fade",
            Self::Merge => "merge",
            Self::RandomChange => "random_change",
            Self::SolidColorCycle => "solid_color_cycle",
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == s)
    }
}
