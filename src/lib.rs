#![no_std]

extern crate alloc;

pub mod bounds;
pub mod channel;
pub mod color;
pub mod controller;
pub mod driver;
pub mod error;
pub mod frame_scheduler;
pub mod function;
pub mod light_string;
pub mod math8;
pub mod pattern;
pub mod registry;

pub use channel::{ControlChannel, ControlIntent, ControlReceiver, ControlSender};
pub use color::{ChannelOrder, ColorSequence, Pixel, Rgb};
pub use controller::{Controller, ControllerConfig};
pub use driver::{LedDriver, MemoryDriver, SmartLedsDriver, StripConfig};
pub use error::{DriverError, Error, LightStringError, PatternError, PixelError};
pub use frame_scheduler::FrameScheduler;
pub use function::{Frame, Function, FunctionSlot};
pub use light_string::LightString;
pub use registry::{ColorMode, FunctionMode};

pub use embassy_time::{Duration, Instant};
