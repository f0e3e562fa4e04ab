mod named;
mod pixel;
mod sequence;
mod utils;

use smart_leds::RGB8;

pub use named::*;
pub use pixel::{ChannelOrder, Pixel};
pub use sequence::ColorSequence;
pub use utils::{blend_colors, dim_color, rgb_from_u32, scale_color, step_toward};

pub type Rgb = RGB8;
