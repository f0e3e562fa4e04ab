//! Control channel for a running controller
//!
//! The run loop owns the buffer and the function list, so other contexts
//! talk to it through this bounded queue. It is drained at the start of
//! every tick; nothing in it blocks.

use alloc::vec::Vec;
use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::color::Rgb;
use crate::Duration;

/// Number of intents that can wait between two ticks
pub const CONTROL_CHANNEL_SIZE: usize = 8;

/// Requests a running controller honors between ticks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlIntent {
    /// Leave the run loop after the current tick
    Stop,
    /// Replace the color sequence with a single color
    SetColor(Rgb),
    /// Replace the color sequence
    SetColors(Vec<Rgb>),
    /// Change the color of "off" LEDs
    SetBackground(Rgb),
    /// Change the time between ticks
    SetRefreshDelay(Duration),
}

/// A bounded queue of [`ControlIntent`]s guarded by a critical section
pub struct ControlChannel {
    inner: Mutex<RefCell<Deque<ControlIntent, CONTROL_CHANNEL_SIZE>>>,
}

impl ControlChannel {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> ControlSender<'_> {
        ControlSender { channel: self }
    }

    pub const fn receiver(&self) -> ControlReceiver<'_> {
        ControlReceiver { channel: self }
    }

    /// Queue an intent; hands it back if the queue is full
    pub fn try_send(&self, intent: ControlIntent) -> Result<(), ControlIntent> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().push_back(intent))
    }

    pub fn try_receive(&self) -> Option<ControlIntent> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }
}

impl Default for ControlChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending half of a [`ControlChannel`]
#[derive(Clone, Copy)]
pub struct ControlSender<'a> {
    channel: &'a ControlChannel,
}

impl ControlSender<'_> {
    pub fn try_send(&self, intent: ControlIntent) -> Result<(), ControlIntent> {
        self.channel.try_send(intent)
    }

    pub fn stop(&self) -> Result<(), ControlIntent> {
        self.try_send(ControlIntent::Stop)
    }
}

/// Receiving half of a [`ControlChannel`]
#[derive(Clone, Copy)]
pub struct ControlReceiver<'a> {
    channel: &'a ControlChannel,
}

impl ControlReceiver<'_> {
    pub fn try_receive(&self) -> Option<ControlIntent> {
        self.channel.try_receive()
    }
}
