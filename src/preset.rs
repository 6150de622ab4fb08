//! Static matrix patterns.
//!
//! Patterns are listed as logical indices (as drawn on the grid) and get
//! flipped like any other frame when they are sent.

use core::str::FromStr;

use crate::{Error, color::Rgb, frame::ColorBuffer};

/// Named one-shot patterns
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    Heart,
    Smile,
    X,
    Check,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Square,
    Diamond,
    Plus,
}

impl Preset {
    pub const ALL: [Self; 11] = [
        Self::Heart,
        Self::Smile,
        Self::X,
        Self::Check,
        Self::ArrowUp,
        Self::ArrowDown,
        Self::ArrowLeft,
        Self::ArrowRight,
        Self::Square,
        Self::Diamond,
        Self::Plus,
    ];

    /// Logical indices lit by the pattern.
    pub const fn indices(self) -> &'static [u8] {
        match self {
            // Symbols
            Self::Heart => &[1, 3, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 16, 18, 22],
            Self::Smile => &[6, 8, 11, 13, 15, 19, 21, 22, 23],
            Self::X => &[0, 4, 6, 8, 12, 16, 18, 20, 24],
            Self::Check => &[4, 8, 12, 16, 20],
            // Arrows
            Self::ArrowUp => &[2, 6, 7, 8, 12, 17, 22],
            Self::ArrowDown => &[2, 7, 12, 16, 17, 18, 22],
            Self::ArrowLeft => &[2, 6, 10, 11, 12, 13, 14, 16, 22],
            Self::ArrowRight => &[2, 8, 10, 11, 12, 13, 14, 18, 22],
            // Shapes
            Self::Square => &[0, 1, 2, 3, 4, 5, 9, 10, 14, 15, 19, 20, 21, 22, 23, 24],
            Self::Diamond => &[2, 6, 8, 10, 14, 16, 18, 22],
            Self::Plus => &[2, 7, 10, 11, 12, 13, 14, 17, 22],
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Heart => "heart",
            Self::Smile => "smile",
            Self::X => "x",
            Self::Check => "check",
            Self::ArrowUp => "arrow_up",
            Self::ArrowDown => "arrow_down",
            Self::ArrowLeft => "arrow_left",
            Self::ArrowRight => "arrow_right",
            Self::Square => "square",
            Self::Diamond => "diamond",
            Self::Plus => "plus",
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.as_str() == s)
    }

    /// Render the pattern in `color`, every other cell off.
    pub fn to_frame(self, color: Rgb) -> ColorBuffer {
        ColorBuffer::from_indices(self.indices(), color)
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_from_str(s).ok_or_else(|| Error::UnknownPreset(s.to_owned()))
    }
}

impl core::fmt::Display for Preset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
