//! Error types
//!
//! Each layer has its own small error enum; [`Error`] unifies them for the
//! controller so the run loop is the only place that has to report them.

use core::fmt;

/// Errors raised while building a [`Pixel`](crate::Pixel)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelError {
    /// A channel value was outside `0..=255`
    ChannelOutOfRange(i64),
    /// A packed value was larger than `0xFFFFFF`
    PackedOutOfRange(u32),
    /// A channel list did not hold exactly three values
    ChannelCount(usize),
}

/// Errors raised by pattern generators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
    /// The color sequence was empty
    EmptySequence,
    /// A tile or segment length of zero was requested
    ZeroLength,
}

/// Errors reported by an [`LedDriver`](crate::LedDriver)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverError {
    /// The driver failed to push data to the strip
    Write,
    /// The driver was asked to address a pixel it does not have
    PixelOutOfRange(usize),
}

/// Errors raised by the [`LightString`](crate::LightString) facade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightStringError {
    IndexOutOfRange { index: usize, len: usize },
    Driver(DriverError),
}

/// Library error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    Pixel(PixelError),
    Pattern(PatternError),
    LightString(LightStringError),
}

pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for PixelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChannelOutOfRange(value) => {
                write!(f, "channel value {value} is outside 0..=255")
            }
            Self::PackedOutOfRange(value) => {
                write!(f, "packed color {value:#X} is larger than 0xFFFFFF")
            }
            Self::ChannelCount(count) => write!(f, "expected 3 channels, got {count}"),
        }
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySequence => f.write_str("color sequence is empty"),
            Self::ZeroLength => f.write_str("segment length must be at least 1"),
        }
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Write => f.write_str("failed to write to the LED strip"),
            Self::PixelOutOfRange(index) => write!(f, "driver has no pixel {index}"),
        }
    }
}

impl fmt::Display for LightStringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for {len} LEDs")
            }
            Self::Driver(e) => write!(f, "driver error: {e}"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixel(e) => write!(f, "pixel: {e}"),
            Self::Pattern(e) => write!(f, "pattern: {e}"),
            Self::LightString(e) => write!(f, "light string: {e}"),
        }
    }
}

impl core::error::Error for PixelError {}
impl core::error::Error for PatternError {}
impl core::error::Error for DriverError {}
impl core::error::Error for LightStringError {}
impl core::error::Error for Error {}

impl From<PixelError> for Error {
    fn from(e: PixelError) -> Self {
        Self::Pixel(e)
    }
}

impl From<PatternError> for Error {
    fn from(e: PatternError) -> Self {
        Self::Pattern(e)
    }
}

impl From<LightStringError> for Error {
    fn from(e: LightStringError) -> Self {
        Self::LightString(e)
    }
}

impl From<DriverError> for LightStringError {
    fn from(e: DriverError) -> Self {
        Self::Driver(e)
    }
}

impl From<DriverError> for Error {
    fn from(e: DriverError) -> Self {
        Self::LightString(LightStringError::Driver(e))
    }
}
