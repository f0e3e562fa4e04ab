use alloc::vec::Vec;

use fastrand::Rng;

use super::{BLACK, Rgb};

/// Ordered, cyclic list of colors consumed round-robin
///
/// An empty sequence yields black from every accessor so effects never have
/// to special-case it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorSequence {
    colors: Vec<Rgb>,
    cursor: usize,
}

impl ColorSequence {
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self { colors, cursor: 0 }
    }

    pub fn single(color: Rgb) -> Self {
        Self::new(alloc::vec![color])
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.colors
    }

    /// Color under the cursor
    pub fn current(&self) -> Rgb {
        self.colors.get(self.cursor).copied().unwrap_or(BLACK)
    }

    /// Return the color under the cursor and advance, wrapping at the end
    pub fn next_color(&mut self) -> Rgb {
        let color = self.current();
        if !self.colors.is_empty() {
            self.cursor = (self.cursor + 1) % self.colors.len();
        }
        color
    }

    /// Pick a color uniformly at random without moving the cursor
    pub fn random(&self, rng: &mut Rng) -> Rgb {
        if self.colors.is_empty() {
            return BLACK;
        }
        self.colors[rng.usize(..self.colors.len())]
    }

    /// Move the cursor to a random position
    pub fn shuffle_cursor(&mut self, rng: &mut Rng) {
        if !self.colors.is_empty() {
            self.cursor = rng.usize(..self.colors.len());
        }
    }
}
