use crate::{
    color::Rgb,
    math8::{blend8, scale8, step8},
};

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Scale every channel by `scale` (0-255 = 0.0-1.0)
#[inline]
pub const fn dim_color(color: Rgb, scale: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, scale),
        g: scale8(color.g, scale),
        b: scale8(color.b, scale),
    }
}

/// Scale every channel by `factor`, clamped to `0.0..=1.0`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scale_color(color: Rgb, factor: f32) -> Rgb {
    let factor = factor.clamp(0.0, 1.0);
    let scale = |c: u8| libm::roundf(f32::from(c) * factor).clamp(0.0, 255.0) as u8;
    Rgb {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
    }
}

/// Move each channel of `color` toward `target` by at most `step`
///
/// Repeated application reaches `target` after at most `ceil(255 / step)`
/// calls and never overshoots it. A step of zero leaves the color as is.
#[inline]
pub fn step_toward(color: Rgb, target: Rgb, step: u8) -> Rgb {
    Rgb {
        r: step8(color.r, target.r, step),
        g: step8(color.g, target.g, step),
        b: step8(color.b, target.b, step),
    }
}
