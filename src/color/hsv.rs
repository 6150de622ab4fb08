//! Floating point HSV conversion.
//!
//! Hue, saturation and value are all in `[0, 1]`. Hue wraps, so `1.0` is the
//! same red as `0.0`.

use crate::color::Rgb;

/// Convert an HSV triple into an 8-bit RGB color.
///
/// Out of range saturation and value are clamped, hue is wrapped.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::many_single_char_names
)]
pub fn hsv_to_rgb(hue: f32, sat: f32, val: f32) -> Rgb {
    let h = hue - libm::floorf(hue);
    let s = sat.clamp(0.0, 1.0);
    let v = val.clamp(0.0, 1.0);

    let sector = h * 6.0;
    let i = libm::floorf(sector);
    let f = sector - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (i as u32) % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
    }
}

/// Scale every channel of a color by `factor` in `[0, 1]`.
pub fn scale(color: Rgb, factor: f32) -> Rgb {
    let factor = factor.clamp(0.0, 1.0);
    Rgb {
        r: to_channel(f32::from(color.r) / 255.0 * factor),
        g: to_channel(f32::from(color.g) / 255.0 * factor),
        b: to_channel(f32::from(color.b) / 255.0 * factor),
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(unit: f32) -> u8 {
    libm::roundf(unit.clamp(0.0, 1.0) * 255.0) as u8
}
