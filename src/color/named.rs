//! Named colors and palettes

use super::{Rgb, rgb_from_u32};

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),*) => {
        [
            $(rgb_from_u32($color)),*
        ]
    };
}

pub const BLACK: Rgb = rgb_from_u32(0x00_0000);
pub const WHITE: Rgb = rgb_from_u32(0xFF_FFFF);
pub const RED: Rgb = rgb_from_u32(0xFF_0000);
pub const ORANGE: Rgb = rgb_from_u32(0xFF_7F00);
pub const YELLOW: Rgb = rgb_from_u32(0xFF_FF00);
pub const GREEN: Rgb = rgb_from_u32(0x00_FF00);
pub const BLUE: Rgb = rgb_from_u32(0x00_00FF);
pub const INDIGO: Rgb = rgb_from_u32(0x4B_0082);
pub const VIOLET: Rgb = rgb_from_u32(0x8B_00FF);
pub const CYAN: Rgb = rgb_from_u32(0x00_FFFF);
pub const MAGENTA: Rgb = rgb_from_u32(0xFF_00FF);
pub const PINK: Rgb = rgb_from_u32(0xFF_4080);

/// Red, orange, yellow, green, blue, indigo, violet
pub const ROYGBIV: [Rgb; 7] = [RED, ORANGE, YELLOW, GREEN, BLUE, INDIGO, VIOLET];

/// Palette used by pseudo-random patterns when none is given
#[allow(clippy::unreadable_literal)]
pub const DEFAULT_PALETTE: [Rgb; 12] = hex_palette![
    0xFF0000, // Red
    0xFF7F00, // Orange
    0xFFFF00, // Yellow
    0x00FF00, // Green
    0x00FFFF, // Cyan
    0x0000FF, // Blue
    0x4B0082, // Indigo
    0x8B00FF, // Violet
    0xFF00FF, // Magenta
    0xFF4080, // Pink
    0xFFB347, // Amber
    0x40E0D0  // Turquoise
];
