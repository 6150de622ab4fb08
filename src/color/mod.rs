mod hex;
mod hsv;

pub use hex::{parse_hex_color, to_css_hex, to_hex};
pub use hsv::{hsv_to_rgb, scale};
pub use smart_leds::RGB8 as Rgb;

/// Pure red, the default selected color.
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
/// All channels off.
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
