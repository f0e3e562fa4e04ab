//! LED driver seam
//!
//! [`LedDriver`] is the whole capability set the engine needs from the
//! hardware: a pixel count, a packed-color setter, a blocking `show` and a
//! cleanup hook. Implement it for a native binding, or wrap any
//! `smart-leds` writer with [`SmartLedsDriver`].

use alloc::vec::Vec;

use smart_leds::{SmartLedsWrite, brightness};

use crate::color::{BLACK, ChannelOrder, Rgb};
use crate::error::DriverError;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The light string is generic over this trait.
pub trait LedDriver {
    /// Number of physical pixels on the strip
    fn num_pixels(&self) -> usize;

    /// Byte layout the strip expects for packed colors
    fn channel_order(&self) -> ChannelOrder {
        ChannelOrder::Grb
    }

    /// Buffer one packed color; nothing is sent until [`LedDriver::show`]
    fn set_pixel_color(&mut self, index: usize, packed: u32) -> Result<(), DriverError>;

    /// Transmit the buffered colors to the strip
    fn show(&mut self) -> Result<(), DriverError>;

    /// Release hardware resources
    fn cleanup(&mut self) {}
}

/// Hardware parameters of a WS281x strip
///
/// [`SmartLedsDriver`] and [`MemoryDriver`] only read `led_count`,
/// `brightness` and `order`. The signal fields (`pin`, `dma`,
/// `frequency_hz`, `channel`, `invert`) are carried for native
/// [`LedDriver`] implementations that configure the peripheral themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripConfig {
    /// Number of LEDs on the strip
    pub led_count: usize,
    /// GPIO pin the data line is attached to
    pub pin: u8,
    /// DMA channel used to generate the signal
    pub dma: u8,
    /// Signal frequency in Hz
    pub frequency_hz: u32,
    /// PWM channel
    pub channel: u8,
    /// Global brightness (0-255)
    pub brightness: u8,
    /// Invert the signal (for level shifters that invert)
    pub invert: bool,
    /// Channel layout of the LEDs
    pub order: ChannelOrder,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            led_count: 60,
            pin: 18,
            dma: 10,
            frequency_hz: 800_000,
            channel: 0,
            brightness: 255,
            invert: false,
            order: ChannelOrder::Grb,
        }
    }
}

/// Adapter from any `smart-leds` writer to [`LedDriver`]
///
/// Packed colors are unpacked with the configured order before they reach
/// the writer, which does its own wire encoding.
pub struct SmartLedsDriver<W> {
    writer: W,
    pixels: Vec<Rgb>,
    brightness: u8,
    order: ChannelOrder,
}

impl<W> SmartLedsDriver<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    pub fn new(writer: W, config: &StripConfig) -> Self {
        Self {
            writer,
            pixels: alloc::vec![BLACK; config.led_count],
            brightness: config.brightness,
            order: config.order,
        }
    }

    pub fn set_brightness(&mut self, value: u8) {
        self.brightness = value;
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> LedDriver for SmartLedsDriver<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn num_pixels(&self) -> usize {
        self.pixels.len()
    }

    fn channel_order(&self) -> ChannelOrder {
        self.order
    }

    fn set_pixel_color(&mut self, index: usize, packed: u32) -> Result<(), DriverError> {
        let pixel = self
            .pixels
            .get_mut(index)
            .ok_or(DriverError::PixelOutOfRange(index))?;
        *pixel = self.order.unpack(packed);
        Ok(())
    }

    fn show(&mut self) -> Result<(), DriverError> {
        self.writer
            .write(brightness(self.pixels.iter().copied(), self.brightness))
            .map_err(|_| DriverError::Write)
    }

    fn cleanup(&mut self) {
        self.pixels.fill(BLACK);
        let _ = self.show();
    }
}

/// In-memory strip used for simulation, previews and tests
#[derive(Debug, Clone)]
pub struct MemoryDriver {
    packed: Vec<u32>,
    shown: Vec<Rgb>,
    order: ChannelOrder,
    show_count: usize,
    fail_writes: bool,
}

impl MemoryDriver {
    pub fn new(led_count: usize) -> Self {
        Self::with_order(led_count, ChannelOrder::Grb)
    }

    pub fn with_order(led_count: usize, order: ChannelOrder) -> Self {
        Self {
            packed: alloc::vec![0; led_count],
            shown: alloc::vec![BLACK; led_count],
            order,
            show_count: 0,
            fail_writes: false,
        }
    }

    pub fn from_config(config: &StripConfig) -> Self {
        Self::with_order(config.led_count, config.order)
    }

    /// Colors transmitted by the most recent `show`
    pub fn shown(&self) -> &[Rgb] {
        &self.shown
    }

    /// Packed values currently buffered
    pub fn packed(&self) -> &[u32] {
        &self.packed
    }

    pub const fn show_count(&self) -> usize {
        self.show_count
    }

    /// Make every following `show` fail, to exercise error paths
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl LedDriver for MemoryDriver {
    fn num_pixels(&self) -> usize {
        self.packed.len()
    }

    fn channel_order(&self) -> ChannelOrder {
        self.order
    }

    fn set_pixel_color(&mut self, index: usize, packed: u32) -> Result<(), DriverError> {
        let slot = self
            .packed
            .get_mut(index)
            .ok_or(DriverError::PixelOutOfRange(index))?;
        *slot = packed;
        Ok(())
    }

    fn show(&mut self) -> Result<(), DriverError> {
        if self.fail_writes {
            return Err(DriverError::Write);
        }
        for (shown, packed) in self.shown.iter_mut().zip(&self.packed) {
            *shown = self.order.unpack(*packed);
        }
        self.show_count += 1;
        Ok(())
    }
}
