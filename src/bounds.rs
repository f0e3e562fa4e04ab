//! Index arithmetic shared by the moving effects
//!
//! Every index an effect writes goes through [`wrap_index`] or
//! [`bounce_index`], which keeps it inside `0..len`.

use fastrand::Rng;

/// Travel direction along the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub const fn sign(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    pub fn random(rng: &mut Rng) -> Self {
        if rng.bool() { Self::Forward } else { Self::Backward }
    }
}

/// Wrap a signed position onto `0..len`
///
/// Returns 0 for an empty buffer.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub const fn wrap_index(position: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    position.rem_euclid(len as isize) as usize
}

/// Clamp a signed position onto `0..len`, reporting whether it hit a bound
///
/// Returns `(index, hit)`; `hit` is true when the position was at or past
/// either end, which is the moment a bouncing effect flips direction.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub const fn bounce_index(position: isize, len: usize) -> (usize, bool) {
    if len == 0 {
        return (0, true);
    }
    let last = len as isize - 1;
    if position <= 0 {
        (0, true)
    } else if position >= last {
        (last as usize, true)
    } else {
        (position as usize, false)
    }
}

/// Inclusive range of indices swept by a moving object during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Span between two positions, in either order
    pub const fn between(a: usize, b: usize) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub const fn overlaps(self, other: Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Middle of the shared part of two overlapping spans
    pub const fn meeting_point(self, other: Self) -> usize {
        let start = if self.start > other.start { self.start } else { other.start };
        let end = if self.end < other.end { self.end } else { other.end };
        start + end.saturating_sub(start) / 2
    }
}

/// Get the center of the array
pub const fn center_of<T>(arr: &[T]) -> usize {
    let count = arr.len();
    let mut center_len = count / 2;
    if !count.is_multiple_of(2) {
        center_len += 1;
    }

    if center_len <= count {
        return center_len;
    }
    count
}
