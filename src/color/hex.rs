use crate::{Error, Result, color::Rgb};

/// Parse `#rrggbb` or `rrggbb` into a color.
pub fn parse_hex_color(input: &str) -> Result<Rgb> {
    let digits = input.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidColor(input.to_owned()));
    }

    let channel = |range: core::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| Error::InvalidColor(input.to_owned()))
    };
    Ok(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Six lowercase hex digits, the matrix wire token for one cell.
pub fn to_hex(color: Rgb) -> String {
    format!("{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

/// `#rrggbb`, as a color picker reports it.
pub fn to_css_hex(color: Rgb) -> String {
    format!("#{}", to_hex(color))
}
