//! State document parsing.
//!
//! The board renders `/state.shtml` through SSI: every value sits inside an
//! element tagged with an `id`, preceded by the SSI comment that produced
//! it, e.g. `<span id="joyx"><!--#joyx-->2048</span>`. Fields are read by
//! id and any missing or malformed field falls back to its default.

/// Element id of button A.
pub const BUTTON_A_FIELD: &str = "btna";
/// Element id of button B.
pub const BUTTON_B_FIELD: &str = "btnb";
pub const JOYSTICK_X_FIELD: &str = "joyx";
pub const JOYSTICK_Y_FIELD: &str = "joyy";
pub const JOYSTICK_BUTTON_FIELD: &str = "joybtn";
pub const UPTIME_FIELD: &str = "uptime";
pub const TEMPERATURE_FIELD: &str = "temp";

/// Mid-scale of the 12-bit joystick ADC, used when an axis is missing.
pub const JOYSTICK_CENTER: u16 = 2048;
/// Raw value the firmware reports for a pressed (active low) input.
pub const PRESSED_VALUE: &str = "0";
/// Text label some firmware builds report for a pressed button.
pub const PRESSED_LABEL: &str = "Pressionado";

/// Joystick readback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoystickState {
    /// X axis in ADC units, `0..=4095`
    pub x: u16,
    /// Y axis in ADC units, `0..=4095`
    pub y: u16,
    pub pressed: bool,
}

impl Default for JoystickState {
    fn default() -> Self {
        Self {
            x: JOYSTICK_CENTER,
            y: JOYSTICK_CENTER,
            pressed: false,
        }
    }
}

/// Last successfully parsed device state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeviceSnapshot {
    pub button_a: bool,
    pub button_b: bool,
    pub joystick: JoystickState,
    /// Uptime as the board formats it, if reported
    pub uptime: Option<String>,
    /// Temperature in device units, if reported
    pub temperature: Option<f32>,
}

/// Parse a state document, defaulting every missing field.
pub fn parse_state_document(document: &str) -> DeviceSnapshot {
    let text = |id: &str| field_text(document, id);

    DeviceSnapshot {
        button_a: text(BUTTON_A_FIELD).is_some_and(|value| is_button_pressed(&value)),
        button_b: text(BUTTON_B_FIELD).is_some_and(|value| is_button_pressed(&value)),
        joystick: JoystickState {
            x: text(JOYSTICK_X_FIELD)
                .and_then(|value| leading_u16(&value))
                .unwrap_or(JOYSTICK_CENTER),
            y: text(JOYSTICK_Y_FIELD)
                .and_then(|value| leading_u16(&value))
                .unwrap_or(JOYSTICK_CENTER),
            pressed: text(JOYSTICK_BUTTON_FIELD).is_some_and(|value| value == PRESSED_VALUE),
        },
        uptime: text(UPTIME_FIELD).filter(|value| !value.is_empty()),
        temperature: text(TEMPERATURE_FIELD)
            .and_then(|value| value.parse::<f32>().ok())
            .filter(|value| value.is_finite()),
    }
}

/// Buttons accept both encodings: the raw active-low `0` and the text label.
pub fn is_button_pressed(value: &str) -> bool {
    value == PRESSED_VALUE || value == PRESSED_LABEL
}

/// Text content of the element with the given `id`, markup stripped and
/// trimmed.
pub fn field_text(document: &str, id: &str) -> Option<String> {
    element_content(document, id).map(|content| strip_markup(content).trim().to_owned())
}

fn element_content<'a>(document: &'a str, id: &str) -> Option<&'a str> {
    for quote in ['"', '\''] {
        let needle = format!("id={quote}{id}{quote}");
        for (at, _) in document.match_indices(needle.as_str()) {
            // Skip `data-id="..."` and friends.
            let is_attribute_start = document[..at]
                .chars()
                .next_back()
                .is_some_and(char::is_whitespace);
            if !is_attribute_start {
                continue;
            }

            let rest = &document[at + needle.len()..];
            let content = &rest[rest.find('>')? + 1..];
            let end = content.find("</").unwrap_or(content.len());
            return Some(&content[..end]);
        }
    }
    None
}

/// Drop comments and tags, keep text.
fn strip_markup(content: &str) -> String {
    let mut text = String::with_capacity(content.len());
    let mut rest = content;
    while let Some(open) = rest.find('<') {
        text.push_str(&rest[..open]);
        let markup = &rest[open..];
        let close = if markup.starts_with("<!--") {
            markup.find("-->").map(|end| end + 3)
        } else {
            markup.find('>').map(|end| end + 1)
        };
        match close {
            Some(close) => rest = &markup[close..],
            None => return text,
        }
    }
    text.push_str(rest);
    text
}

/// Leading decimal digits as a number, the way a lenient integer parse
/// reads `"2048 "` or `"2048mV"`.
fn leading_u16(value: &str) -> Option<u16> {
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    value[..end].parse().ok()
}
