//! Index-addressable view over the physical strip
//!
//! Writes land in a local buffer; [`LightString::refresh`] packs them with
//! the driver's channel order and transmits them.

use alloc::vec::Vec;
use core::ops::Range;

use crate::color::{BLACK, ChannelOrder, Pixel, Rgb};
use crate::driver::LedDriver;
use crate::error::LightStringError;

pub struct LightString<D: LedDriver> {
    driver: D,
    pixels: Vec<Rgb>,
}

impl<D: LedDriver> LightString<D> {
    pub fn new(driver: D) -> Self {
        let count = driver.num_pixels();
        Self {
            driver,
            pixels: alloc::vec![BLACK; count],
        }
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn order(&self) -> ChannelOrder {
        self.driver.channel_order()
    }

    pub fn get(&self, index: usize) -> Result<Pixel, LightStringError> {
        self.pixels
            .get(index)
            .map(|color| Pixel::from_rgb(*color, self.order()))
            .ok_or(self.out_of_range(index))
    }

    pub fn set(&mut self, index: usize, color: impl Into<Rgb>) -> Result<(), LightStringError> {
        let len = self.pixels.len();
        let slot = self
            .pixels
            .get_mut(index)
            .ok_or(LightStringError::IndexOutOfRange { index, len })?;
        *slot = color.into();
        Ok(())
    }

    pub fn get_range(&self, range: Range<usize>) -> Result<&[Rgb], LightStringError> {
        let end = range.end;
        self.pixels.get(range).ok_or(self.out_of_range(end))
    }

    /// Copy `colors` into the buffer starting at `start`
    pub fn set_range(&mut self, start: usize, colors: &[Rgb]) -> Result<(), LightStringError> {
        let len = self.pixels.len();
        let end = start + colors.len();
        let target = self
            .pixels
            .get_mut(start..end)
            .ok_or(LightStringError::IndexOutOfRange { index: end, len })?;
        target.copy_from_slice(colors);
        Ok(())
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// Push the buffer to the driver and transmit it
    pub fn refresh(&mut self) -> Result<(), LightStringError> {
        let order = self.driver.channel_order();
        for (index, color) in self.pixels.iter().enumerate() {
            self.driver.set_pixel_color(index, order.pack(*color))?;
        }
        self.driver.show()?;
        Ok(())
    }

    /// Turn every LED off
    pub fn off(&mut self) -> Result<(), LightStringError> {
        self.fill(BLACK);
        self.refresh()
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    fn out_of_range(&self, index: usize) -> LightStringError {
        LightStringError::IndexOutOfRange {
            index,
            len: self.pixels.len(),
        }
    }
}

impl<D: LedDriver> Drop for LightString<D> {
    fn drop(&mut self) {
        self.driver.cleanup();
    }
}
