//! Single LED value with an explicit channel order
//!
//! The order only matters when a pixel is packed into (or read from) a
//! 24-bit integer, which is what the strip hardware consumes. Channel
//! accessors always report red, green, blue.

use core::fmt;

use super::Rgb;
use crate::error::PixelError;

/// Byte layout of a packed pixel, most significant byte first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelOrder {
    /// `0xRRGGBB`
    #[default]
    Rgb,
    /// `0xGGRRBB`, the native layout of WS2812 LEDs
    Grb,
}

impl ChannelOrder {
    /// Pack red, green and blue into an integer using this order
    pub const fn pack(self, color: Rgb) -> u32 {
        let (hi, mid) = match self {
            Self::Rgb => (color.r, color.g),
            Self::Grb => (color.g, color.r),
        };
        ((hi as u32) << 16) | ((mid as u32) << 8) | color.b as u32
    }

    /// Unpack an integer laid out in this order
    pub const fn unpack(self, packed: u32) -> Rgb {
        let hi = ((packed >> 16) & 0xFF) as u8;
        let mid = ((packed >> 8) & 0xFF) as u8;
        let b = (packed & 0xFF) as u8;
        match self {
            Self::Rgb => Rgb { r: hi, g: mid, b },
            Self::Grb => Rgb { r: mid, g: hi, b },
        }
    }
}

/// An immutable RGB value bound to a channel order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    color: Rgb,
    order: ChannelOrder,
}

impl Pixel {
    /// Black in the given order
    pub const fn black(order: ChannelOrder) -> Self {
        Self {
            color: Rgb { r: 0, g: 0, b: 0 },
            order,
        }
    }

    pub const fn new(r: u8, g: u8, b: u8, order: ChannelOrder) -> Self {
        Self {
            color: Rgb { r, g, b },
            order,
        }
    }

    pub const fn from_rgb(color: Rgb, order: ChannelOrder) -> Self {
        Self { color, order }
    }

    /// Read a packed integer laid out in `order`
    pub const fn from_packed(value: u32, order: ChannelOrder) -> Result<Self, PixelError> {
        if value > 0xFF_FFFF {
            return Err(PixelError::PackedOutOfRange(value));
        }
        Ok(Self {
            color: order.unpack(value),
            order,
        })
    }

    /// Build from a list of exactly three red, green, blue values
    pub fn from_channels(channels: &[i64], order: ChannelOrder) -> Result<Self, PixelError> {
        let [r, g, b] = channels else {
            return Err(PixelError::ChannelCount(channels.len()));
        };
        Ok(Self {
            color: Rgb {
                r: channel(*r)?,
                g: channel(*g)?,
                b: channel(*b)?,
            },
            order,
        })
    }

    /// Copy of this pixel with a different channel order
    #[must_use]
    pub const fn with_order(self, order: ChannelOrder) -> Self {
        Self {
            color: self.color,
            order,
        }
    }

    pub const fn rgb(self) -> Rgb {
        self.color
    }

    pub const fn order(self) -> ChannelOrder {
        self.order
    }

    pub const fn array(self) -> [u8; 3] {
        [self.color.r, self.color.g, self.color.b]
    }

    pub const fn tuple(self) -> (u8, u8, u8) {
        (self.color.r, self.color.g, self.color.b)
    }

    /// Packed value in this pixel's channel order
    pub const fn to_packed(self) -> u32 {
        self.order.pack(self.color)
    }

    /// `0x`-prefixed six digit hex string in this pixel's channel order
    pub fn hex_string(self) -> alloc::string::String {
        alloc::format!("{self}")
    }
}

fn channel(value: i64) -> Result<u8, PixelError> {
    u8::try_from(value).map_err(|_| PixelError::ChannelOutOfRange(value))
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:06X}", self.to_packed())
    }
}

impl From<Pixel> for Rgb {
    fn from(pixel: Pixel) -> Self {
        pixel.color
    }
}

impl From<Pixel> for [u8; 3] {
    fn from(pixel: Pixel) -> Self {
        pixel.array()
    }
}

impl From<Pixel> for (u8, u8, u8) {
    fn from(pixel: Pixel) -> Self {
        pixel.tuple()
    }
}
