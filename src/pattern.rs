//! Static color arrays used to seed or drive animations
//!
//! Every generator returns exactly `length` colors and runs in O(length).

use alloc::vec::Vec;

use fastrand::Rng;

use crate::color::{ROYGBIV, Rgb};
use crate::error::PatternError;
use crate::math8::lerp8;

/// Every slot set to `color`
pub fn solid(length: usize, color: Rgb) -> Vec<Rgb> {
    alloc::vec![color; length]
}

/// Smooth per-channel gradient through `colors`
///
/// Without `wrap` the first slot is `colors[0]` and the last slot is the last
/// color. With `wrap` the gradient continues from the last color back toward
/// the first one, so the array can be rotated seamlessly.
pub fn transition(length: usize, colors: &[Rgb], wrap: bool) -> Result<Vec<Rgb>, PatternError> {
    if colors.is_empty() {
        return Err(PatternError::EmptySequence);
    }
    if colors.len() == 1 || length < 2 {
        return Ok(solid(length, colors[0]));
    }

    let count = colors.len();
    // Slots between the first and last boundary; with wrap the last boundary
    // is one past the end and holds `colors[0]` again.
    let (segments, span) = if wrap {
        (count, length)
    } else {
        (count - 1, length - 1)
    };
    // Split the span into per-segment runs, spreading the remainder over the
    // first ones, so every input color sits exactly on its boundary slot.
    let base = span / segments;
    let extra = span % segments;

    let mut out = Vec::with_capacity(length);
    for segment in 0..segments {
        let run = base + usize::from(segment < extra);
        let from = colors[segment];
        let to = colors[(segment + 1) % count];
        for step in 0..run {
            out.push(Rgb {
                r: lerp8(from.r, to.r, step, run),
                g: lerp8(from.g, to.g, step, run),
                b: lerp8(from.b, to.b, step, run),
            });
        }
    }
    if !wrap {
        out.push(colors[count - 1]);
    }
    Ok(out)
}

/// Gradient through red, orange, yellow, green, blue, indigo, violet
pub fn rainbow(length: usize, wrap: bool) -> Vec<Rgb> {
    transition(length, &ROYGBIV, wrap).unwrap_or_default()
}

/// Rainbows of `segment_length` slots laid end to end
pub fn repeating_rainbow(length: usize, segment_length: usize) -> Result<Vec<Rgb>, PatternError> {
    if segment_length == 0 {
        return Err(PatternError::ZeroLength);
    }
    let segment = rainbow(segment_length, true);
    repeating_sequence(length, &segment)
}

/// `colors` tiled to fill `length` slots, the last tile truncated
pub fn repeating_sequence(length: usize, colors: &[Rgb]) -> Result<Vec<Rgb>, PatternError> {
    if colors.is_empty() {
        return Err(PatternError::EmptySequence);
    }
    Ok(colors.iter().copied().cycle().take(length).collect())
}

/// Mirrored tiles of `fold_length` slots
///
/// Each tile is `colors` repeated to `fold_length`; even tiles run forward
/// and odd tiles run backward, which builds symmetric patterns.
pub fn reflect(
    length: usize,
    colors: &[Rgb],
    fold_length: usize,
) -> Result<Vec<Rgb>, PatternError> {
    if fold_length == 0 {
        return Err(PatternError::ZeroLength);
    }
    let tile = repeating_sequence(fold_length, colors)?;

    let mut out = Vec::with_capacity(length);
    let mut forward = true;
    while out.len() < length {
        let remaining = length - out.len();
        if forward {
            out.extend(tile.iter().copied().take(remaining));
        } else {
            out.extend(tile.iter().rev().copied().take(remaining));
        }
        forward = !forward;
    }
    Ok(out)
}

/// Uniformly random colors
///
/// Channels are drawn from `0..255`, so no slot is ever pure white.
pub fn random(length: usize, rng: &mut Rng) -> Vec<Rgb> {
    (0..length)
        .map(|_| Rgb {
            r: rng.u8(..255),
            g: rng.u8(..255),
            b: rng.u8(..255),
        })
        .collect()
}

/// Colors drawn uniformly from `palette`
pub fn pseudo_random(
    length: usize,
    palette: &[Rgb],
    rng: &mut Rng,
) -> Result<Vec<Rgb>, PatternError> {
    if palette.is_empty() {
        return Err(PatternError::EmptySequence);
    }
    Ok((0..length)
        .map(|_| palette[rng.usize(..palette.len())])
        .collect())
}
