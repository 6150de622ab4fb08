//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum so the scheduler can own one without
//! boxing. Each effect implements the `Effect` trait: it renders its current
//! phase into a cleared frame, and the scheduler advances the phase once per
//! tick.

mod breathing;
mod color_wheel;
mod disco;
mod fire;
mod gradient;
mod lava_lamp;
mod matrix_rain;
mod ocean;
mod rings;
mod sparkle;
mod wave;

use core::str::FromStr;
use std::time::Duration;

pub use breathing::{BREATH_PERIOD, BreathingEffect};
pub use color_wheel::{ColorWheelEffect, WHEEL_PERIOD};
pub use disco::DiscoEffect;
pub use fire::FireEffect;
pub use gradient::{GRADIENT_PERIOD, GradientEffect};
pub use lava_lamp::{Blob, LavaLampEffect};
pub use matrix_rain::{MatrixRainEffect, TRAIL_LEN, rain_green};
pub use ocean::{OCEAN_PERIOD, OceanWavesEffect};
pub use rings::{RINGS, RingsEffect};
pub use sparkle::{MAX_SPARKS, MIN_SPARKS, SparkleEffect};
pub use wave::{WaveDirection, WaveEffect};

use crate::{Error, color::Rgb, frame::ColorBuffer};

const EFFECT_NAME_WAVE_TOP_BOTTOM: &str = "wave_top_bottom";
const EFFECT_NAME_WAVE_BOTTOM_TOP: &str = "wave_bottom_top";
const EFFECT_NAME_WAVE_LEFT_RIGHT: &str = "wave_left_right";
const EFFECT_NAME_WAVE_RIGHT_LEFT: &str = "wave_right_left";
const EFFECT_NAME_WAVE_EXPAND: &str = "wave_expand";
const EFFECT_NAME_GRADIENT: &str = "gradient";
const EFFECT_NAME_COLOR_WHEEL: &str = "color_wheel";
const EFFECT_NAME_BREATHING: &str = "breathing";
const EFFECT_NAME_LAVA_LAMP: &str = "lava_lamp";
const EFFECT_NAME_OCEAN_WAVES: &str = "ocean_waves";
const EFFECT_NAME_FIRE: &str = "fire";
const EFFECT_NAME_SPARKLE: &str = "sparkle";
const EFFECT_NAME_DISCO: &str = "disco";
const EFFECT_NAME_MATRIX_RAIN: &str = "matrix_rain";

const EFFECT_ID_WAVE_TOP_BOTTOM: u8 = 0;
const EFFECT_ID_WAVE_BOTTOM_TOP: u8 = 1;
const EFFECT_ID_WAVE_LEFT_RIGHT: u8 = 2;
const EFFECT_ID_WAVE_RIGHT_LEFT: u8 = 3;
const EFFECT_ID_WAVE_EXPAND: u8 = 4;
const EFFECT_ID_GRADIENT: u8 = 5;
const EFFECT_ID_COLOR_WHEEL: u8 = 6;
const EFFECT_ID_BREATHING: u8 = 7;
const EFFECT_ID_LAVA_LAMP: u8 = 8;
const EFFECT_ID_OCEAN_WAVES: u8 = 9;
const EFFECT_ID_FIRE: u8 = 10;
const EFFECT_ID_SPARKLE: u8 = 11;
const EFFECT_ID_DISCO: u8 = 12;
const EFFECT_ID_MATRIX_RAIN: u8 = 13;

pub trait Effect {
    /// Default timer period between two frames
    const INTERVAL: Duration;

    /// Render the current phase into a cleared frame
    fn render(&mut self, frame: &mut ColorBuffer);

    /// Advance the phase by one step, wrapping at the effect period
    fn advance(&mut self);

    /// Reset effect state
    fn reset(&mut self) {}
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// A single row or column sweeping across the matrix
    Wave(WaveEffect),
    /// Rings expanding from the center cell
    Rings(RingsEffect),
    /// Diagonal rainbow drifting across the grid
    Gradient(GradientEffect),
    /// Hue wheel rotating around the center
    ColorWheel(ColorWheelEffect),
    /// Selected color fading in and out
    Breathing(BreathingEffect),
    /// Warm blobs drifting around
    LavaLamp(LavaLampEffect),
    /// Blue ripples from the center
    OceanWaves(OceanWavesEffect),
    /// Random flames, hotter at the bottom
    Fire(FireEffect),
    /// A few random cells twinkling
    Sparkle(SparkleEffect),
    /// Every cell a random hue
    Disco(DiscoEffect),
    /// Green trails falling down the columns
    MatrixRain(MatrixRainEffect),
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EffectId {
    WaveTopBottom = EFFECT_ID_WAVE_TOP_BOTTOM,
    WaveBottomTop = EFFECT_ID_WAVE_BOTTOM_TOP,
    WaveLeftRight = EFFECT_ID_WAVE_LEFT_RIGHT,
    WaveRightLeft = EFFECT_ID_WAVE_RIGHT_LEFT,
    WaveExpand = EFFECT_ID_WAVE_EXPAND,
    Gradient = EFFECT_ID_GRADIENT,
    ColorWheel = EFFECT_ID_COLOR_WHEEL,
    Breathing = EFFECT_ID_BREATHING,
    LavaLamp = EFFECT_ID_LAVA_LAMP,
    OceanWaves = EFFECT_ID_OCEAN_WAVES,
    Fire = EFFECT_ID_FIRE,
    Sparkle = EFFECT_ID_SPARKLE,
    Disco = EFFECT_ID_DISCO,
    MatrixRain = EFFECT_ID_MATRIX_RAIN,
}

impl EffectId {
    /// Every effect, in id order.
    pub const ALL: [Self; 14] = [
        Self::WaveTopBottom,
        Self::WaveBottomTop,
        Self::WaveLeftRight,
        Self::WaveRightLeft,
        Self::WaveExpand,
        Self::Gradient,
        Self::ColorWheel,
        Self::Breathing,
        Self::LavaLamp,
        Self::OceanWaves,
        Self::Fire,
        Self::Sparkle,
        Self::Disco,
        Self::MatrixRain,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_WAVE_TOP_BOTTOM => Self::WaveTopBottom,
            EFFECT_ID_WAVE_BOTTOM_TOP => Self::WaveBottomTop,
            EFFECT_ID_WAVE_LEFT_RIGHT => Self::WaveLeftRight,
            EFFECT_ID_WAVE_RIGHT_LEFT => Self::WaveRightLeft,
            EFFECT_ID_WAVE_EXPAND => Self::WaveExpand,
            EFFECT_ID_GRADIENT => Self::Gradient,
            EFFECT_ID_COLOR_WHEEL => Self::ColorWheel,
            EFFECT_ID_BREATHING => Self::Breathing,
            EFFECT_ID_LAVA_LAMP => Self::LavaLamp,
            EFFECT_ID_OCEAN_WAVES => Self::OceanWaves,
            EFFECT_ID_FIRE => Self::Fire,
            EFFECT_ID_SPARKLE => Self::Sparkle,
            EFFECT_ID_DISCO => Self::Disco,
            EFFECT_ID_MATRIX_RAIN => Self::MatrixRain,
            _ => return None,
        })
    }

    /// Build a fresh effect. `color` is the selected color at start time.
    pub fn to_slot(self, color: Rgb) -> EffectSlot {
        match self {
            Self::WaveTopBottom => {
                EffectSlot::Wave(WaveEffect::new(WaveDirection::TopToBottom, color))
            }
            Self::WaveBottomTop => {
                EffectSlot::Wave(WaveEffect::new(WaveDirection::BottomToTop, color))
            }
            Self::WaveLeftRight => {
                EffectSlot::Wave(WaveEffect::new(WaveDirection::LeftToRight, color))
            }
            Self::WaveRightLeft => {
                EffectSlot::Wave(WaveEffect::new(WaveDirection::RightToLeft, color))
            }
            Self::WaveExpand => EffectSlot::Rings(RingsEffect::new(color)),
            Self::Gradient => EffectSlot::Gradient(GradientEffect::new()),
            Self::ColorWheel => EffectSlot::ColorWheel(ColorWheelEffect::new()),
            Self::Breathing => EffectSlot::Breathing(BreathingEffect::new(color)),
            Self::LavaLamp => EffectSlot::LavaLamp(LavaLampEffect::new()),
            Self::OceanWaves => EffectSlot::OceanWaves(OceanWavesEffect::new()),
            Self::Fire => EffectSlot::Fire(FireEffect::new()),
            Self::Sparkle => EffectSlot::Sparkle(SparkleEffect::new()),
            Self::Disco => EffectSlot::Disco(DiscoEffect::new()),
            Self::MatrixRain => EffectSlot::MatrixRain(MatrixRainEffect::new()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WaveTopBottom => EFFECT_NAME_WAVE_TOP_BOTTOM,
            Self::WaveBottomTop => EFFECT_NAME_WAVE_BOTTOM_TOP,
            Self::WaveLeftRight => EFFECT_NAME_WAVE_LEFT_RIGHT,
            Self::WaveRightLeft => EFFECT_NAME_WAVE_RIGHT_LEFT,
            Self::WaveExpand => EFFECT_NAME_WAVE_EXPAND,
            Self::Gradient => EFFECT_NAME_GRADIENT,
            Self::ColorWheel => EFFECT_NAME_COLOR_WHEEL,
            Self::Breathing => EFFECT_NAME_BREATHING,
            Self::LavaLamp => EFFECT_NAME_LAVA_LAMP,
            Self::OceanWaves => EFFECT_NAME_OCEAN_WAVES,
            Self::Fire => EFFECT_NAME_FIRE,
            Self::Sparkle => EFFECT_NAME_SPARKLE,
            Self::Disco => EFFECT_NAME_DISCO,
            Self::MatrixRain => EFFECT_NAME_MATRIX_RAIN,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }

    /// Default timer period of the effect.
    pub const fn default_interval(self) -> Duration {
        match self {
            Self::WaveTopBottom
            | Self::WaveBottomTop
            | Self::WaveLeftRight
            | Self::WaveRightLeft => WaveEffect::INTERVAL,
            Self::WaveExpand => RingsEffect::INTERVAL,
            Self::Gradient => GradientEffect::INTERVAL,
            Self::ColorWheel => ColorWheelEffect::INTERVAL,
            Self::Breathing => BreathingEffect::INTERVAL,
            Self::LavaLamp => LavaLampEffect::INTERVAL,
            Self::OceanWaves => OceanWavesEffect::INTERVAL,
            Self::Fire => FireEffect::INTERVAL,
            Self::Sparkle => SparkleEffect::INTERVAL,
            Self::Disco => DiscoEffect::INTERVAL,
            Self::MatrixRain => MatrixRainEffect::INTERVAL,
        }
    }

    /// Whether frames depend on a random source.
    pub const fn is_randomized(self) -> bool {
        matches!(
            self,
            Self::Fire | Self::Sparkle | Self::Disco | Self::MatrixRain
        )
    }
}

impl FromStr for EffectId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_from_str(s).ok_or_else(|| Error::UnknownEffect(s.to_owned()))
    }
}

impl core::fmt::Display for EffectId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EffectSlot {
    /// Render the current phase into `frame`
    pub fn render(&mut self, frame: &mut ColorBuffer) {
        match self {
            Self::Wave(effect) => effect.render(frame),
            Self::Rings(effect) => effect.render(frame),
            Self::Gradient(effect) => effect.render(frame),
            Self::ColorWheel(effect) => effect.render(frame),
            Self::Breathing(effect) => effect.render(frame),
            Self::LavaLamp(effect) => effect.render(frame),
            Self::OceanWaves(effect) => effect.render(frame),
            Self::Fire(effect) => effect.render(frame),
            Self::Sparkle(effect) => effect.render(frame),
            Self::Disco(effect) => effect.render(frame),
            Self::MatrixRain(effect) => effect.render(frame),
        }
    }

    /// Advance the effect phase
    pub fn advance(&mut self) {
        match self {
            Self::Wave(effect) => effect.advance(),
            Self::Rings(effect) => effect.advance(),
            Self::Gradient(effect) => effect.advance(),
            Self::ColorWheel(effect) => effect.advance(),
            Self::Breathing(effect) => effect.advance(),
            Self::LavaLamp(effect) => effect.advance(),
            Self::OceanWaves(effect) => effect.advance(),
            Self::Fire(effect) => effect.advance(),
            Self::Sparkle(effect) => effect.advance(),
            Self::Disco(effect) => effect.advance(),
            Self::MatrixRain(effect) => effect.advance(),
        }
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        match self {
            Self::Wave(effect) => Effect::reset(effect),
            Self::Rings(effect) => Effect::reset(effect),
            Self::Gradient(effect) => Effect::reset(effect),
            Self::ColorWheel(effect) => Effect::reset(effect),
            Self::Breathing(effect) => Effect::reset(effect),
            Self::LavaLamp(effect) => Effect::reset(effect),
            Self::OceanWaves(effect) => Effect::reset(effect),
            Self::Fire(effect) => Effect::reset(effect),
            Self::Sparkle(effect) => Effect::reset(effect),
            Self::Disco(effect) => Effect::reset(effect),
            Self::MatrixRain(effect) => Effect::reset(effect),
        }
    }

    /// Render the current phase into a fresh frame and advance.
    ///
    /// This is one scheduler tick without the transmission.
    pub fn next_frame(&mut self) -> ColorBuffer {
        let mut frame = ColorBuffer::new();
        self.render(&mut frame);
        self.advance();
        frame
    }

    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::Wave(effect) => match effect.direction() {
                WaveDirection::TopToBottom => EffectId::WaveTopBottom,
                WaveDirection::BottomToTop => EffectId::WaveBottomTop,
                WaveDirection::LeftToRight => EffectId::WaveLeftRight,
                WaveDirection::RightToLeft => EffectId::WaveRightLeft,
            },
            Self::Rings(_) => EffectId::WaveExpand,
            Self::Gradient(_) => EffectId::Gradient,
            Self::ColorWheel(_) => EffectId::ColorWheel,
            Self::Breathing(_) => EffectId::Breathing,
            Self::LavaLamp(_) => EffectId::LavaLamp,
            Self::OceanWaves(_) => EffectId::OceanWaves,
            Self::Fire(_) => EffectId::Fire,
            Self::Sparkle(_) => EffectId::Sparkle,
            Self::Disco(_) => EffectId::Disco,
            Self::MatrixRain(_) => EffectId::MatrixRain,
        }
    }
}
