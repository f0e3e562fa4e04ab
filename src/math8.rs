/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

/// Move `value` toward `target` by at most `step`, never past it
#[inline]
pub const fn step8(value: u8, target: u8, step: u8) -> u8 {
    if value < target {
        let next = value.saturating_add(step);
        if next > target { target } else { next }
    } else {
        let next = value.saturating_sub(step);
        if next < target { target } else { next }
    }
}

/// Linear interpolation between `a` and `b` at `num / den`, rounded
///
/// Exact at both ends: `num == 0` yields `a`, `num == den` yields `b`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn lerp8(a: u8, b: u8, num: usize, den: usize) -> u8 {
    if den == 0 {
        return a;
    }
    let num = if num > den { den } else { num } as u64;
    let den = den as u64;
    ((a as u64 * (den - num) + b as u64 * num + den / 2) / den) as u8
}
