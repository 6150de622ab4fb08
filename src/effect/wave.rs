//! Sweeping line effects
//!
//! One full row (or column) is lit in the selected color and moves by one
//! cell per tick, wrapping around the matrix edge.

use std::time::Duration;

use super::Effect;
use crate::{
    color::Rgb,
    frame::ColorBuffer,
    geometry::{COLUMNS, ROWS},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveDirection {
    TopToBottom,
    BottomToTop,
    LeftToRight,
    RightToLeft,
}

impl WaveDirection {
    /// Line the wave starts from.
    const fn start(self) -> usize {
        match self {
            Self::TopToBottom => 0,
            Self::BottomToTop => ROWS - 1,
            Self::LeftToRight => 0,
            Self::RightToLeft => COLUMNS - 1,
        }
    }

    const fn is_vertical(self) -> bool {
        matches!(self, Self::TopToBottom | Self::BottomToTop)
    }
}

/// A lit line moving across the matrix
#[derive(Debug, Clone)]
pub struct WaveEffect {
    color: Rgb,
    direction: WaveDirection,
    /// Row or column currently lit
    position: usize,
}

impl WaveEffect {
    pub const fn new(direction: WaveDirection, color: Rgb) -> Self {
        Self {
            color,
            direction,
            position: direction.start(),
        }
    }

    pub const fn direction(&self) -> WaveDirection {
        self.direction
    }

    /// Row or column that the next frame lights.
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl Effect for WaveEffect {
    const INTERVAL: Duration = Duration::from_millis(200);

    fn render(&mut self, frame: &mut ColorBuffer) {
        if self.direction.is_vertical() {
            for col in 0..COLUMNS {
                frame.set_at(self.position, col, Some(self.color));
            }
        } else {
            for row in 0..ROWS {
                frame.set_at(row, self.position, Some(self.color));
            }
        }
    }

    fn advance(&mut self) {
        // Both axes have five lines, so backward is "+4 mod 5".
        let len = if self.direction.is_vertical() { ROWS } else { COLUMNS };
        self.position = match self.direction {
            WaveDirection::TopToBottom | WaveDirection::LeftToRight => (self.position + 1) % len,
            WaveDirection::BottomToTop | WaveDirection::RightToLeft => {
                (self.position + len - 1) % len
            }
        };
    }

    fn reset(&mut self) {
        self.position = self.direction.start();
    }
}
