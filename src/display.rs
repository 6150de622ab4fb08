//! Display bindings for polled device state.

use crate::{color::Rgb, poller::JOYSTICK_CENTER};

/// Largest joystick knob offset from center, in pixels.
pub const MAX_STICK_OFFSET_PX: f32 = 35.0;

/// Gauge full scale.
pub const GAUGE_MAX: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    A,
    B,
}

impl Button {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

/// Temperature fill bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatLevel {
    /// Below 30
    Cool,
    /// 30 up to 50
    Warm,
    /// 50 up to 70
    Hot,
    /// 70 and above
    VeryHot,
}

impl HeatLevel {
    /// Bucket of a raw, unclamped reading.
    pub fn from_temperature(temperature: f32) -> Self {
        if temperature < 30.0 {
            Self::Cool
        } else if temperature < 50.0 {
            Self::Warm
        } else if temperature < 70.0 {
            Self::Hot
        } else {
            Self::VeryHot
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cool => "cool",
            Self::Warm => "warm",
            Self::Hot => "hot",
            Self::VeryHot => "very hot",
        }
    }

    /// Fill color of the bucket.
    pub const fn color(self) -> Rgb {
        match self {
            Self::Cool => Rgb {
                r: 0x4c,
                g: 0xaf,
                b: 0x50,
            },
            Self::Warm => Rgb {
                r: 0xff,
                g: 0xc1,
                b: 0x07,
            },
            Self::Hot => Rgb {
                r: 0xff,
                g: 0x98,
                b: 0x00,
            },
            Self::VeryHot => Rgb {
                r: 0xf4,
                g: 0x43,
                b: 0x36,
            },
        }
    }
}

/// Half-dial gauge reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureGauge {
    pub temperature: f32,
    /// Needle angle in degrees, -90 at zero and +90 at full scale
    pub needle_deg: f32,
    pub level: HeatLevel,
}

impl TemperatureGauge {
    pub fn new(temperature: f32) -> Self {
        let fraction = temperature.clamp(0.0, GAUGE_MAX) / GAUGE_MAX;
        Self {
            temperature,
            needle_deg: -90.0 + fraction * 180.0,
            level: HeatLevel::from_temperature(temperature),
        }
    }
}

/// Knob offset from the joystick center in pixels, per axis.
///
/// `value` is a raw ADC reading; center maps to 0 and the extremes to
/// roughly `±max_offset`.
pub fn joystick_offset(value: u16, max_offset: f32) -> f32 {
    let center = f32::from(JOYSTICK_CENTER);
    (f32::from(value) - center) / center * max_offset
}

/// Receives reconciled device state.
///
/// Every successful poll calls `update_button` for both buttons and
/// `update_joystick` once. `update_uptime` and `update_temperature` are only
/// called when the device reported the field.
pub trait DisplayBindings {
    fn update_button(&mut self, button: Button, pressed: bool);

    fn update_joystick(&mut self, x: u16, y: u16, pressed: bool);

    fn update_uptime(&mut self, uptime: &str);

    fn update_temperature(&mut self, gauge: TemperatureGauge);
}

/// Bindings that log every change of state.
///
/// Repeated identical updates are not logged again.
#[derive(Debug, Default)]
pub struct LogDisplay {
    buttons: [Option<bool>; 2],
    joystick: Option<(u16, u16, bool)>,
    uptime: Option<String>,
    level: Option<HeatLevel>,
}

impl LogDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplayBindings for LogDisplay {
    fn update_button(&mut self, button: Button, pressed: bool) {
        let slot = &mut self.buttons[button as usize];
        if slot.replace(pressed) != Some(pressed) {
            let state = if pressed { "pressed" } else { "released" };
            log::info!("Button {}: {state}", button.as_str());
        }
    }

    fn update_joystick(&mut self, x: u16, y: u16, pressed: bool) {
        if self.joystick.replace((x, y, pressed)) != Some((x, y, pressed)) {
            log::info!(
                "Joystick: x={x} y={y} offset=({:.1}, {:.1})px pressed={pressed}",
                joystick_offset(x, MAX_STICK_OFFSET_PX),
                joystick_offset(y, MAX_STICK_OFFSET_PX),
            );
        }
    }

    fn update_uptime(&mut self, uptime: &str) {
        if self.uptime.as_deref() != Some(uptime) {
            log::info!("Uptime: {uptime}");
            self.uptime = Some(uptime.to_owned());
        }
    }

    fn update_temperature(&mut self, gauge: TemperatureGauge) {
        if self.level.replace(gauge.level) != Some(gauge.level) {
            log::info!(
                "Temperature: {:.1} ({}, needle {:.0} deg)",
                gauge.temperature,
                gauge.level.as_str(),
                gauge.needle_deg
            );
        } else {
            log::debug!("Temperature: {:.1}", gauge.temperature);
        }
    }
}
