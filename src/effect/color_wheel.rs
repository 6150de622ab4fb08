//! Color wheel rotating around the center cell
//!
//! Each cell takes its hue from its angle around `(2, 2)`. The center has
//! no angle and shows the wheel's base hue.

use core::f32::consts::TAU;
use std::time::Duration;

use super::Effect;
use crate::{
    color::hsv_to_rgb,
    frame::ColorBuffer,
    geometry::{CENTER, COLUMNS, ROWS},
};

/// Ticks for one full rotation.
pub const WHEEL_PERIOD: u32 = 36;

#[derive(Debug, Clone, Default)]
pub struct ColorWheelEffect {
    phase: u32,
}

impl ColorWheelEffect {
    pub const fn new() -> Self {
        Self { phase: 0 }
    }

    pub const fn phase(&self) -> u32 {
        self.phase
    }

    /// Hue of a cell at the current phase.
    #[allow(clippy::cast_precision_loss)]
    pub fn hue_at(&self, row: usize, col: usize) -> f32 {
        let dy = row as f32 - CENTER as f32;
        let dx = col as f32 - CENTER as f32;
        let angle = libm::atan2f(dy, dx) / TAU;
        let hue = angle + self.phase as f32 / WHEEL_PERIOD as f32;
        hue - libm::floorf(hue)
    }
}

impl Effect for ColorWheelEffect {
    const INTERVAL: Duration = Duration::from_millis(80);

    fn render(&mut self, frame: &mut ColorBuffer) {
        for row in 0..ROWS {
            for col in 0..COLUMNS {
                let color = hsv_to_rgb(self.hue_at(row, col), 1.0, 1.0);
                frame.set_at(row, col, Some(color));
            }
        }
    }

    fn advance(&mut self) {
        self.phase = (self.phase + 1) % WHEEL_PERIOD;
    }

    fn reset(&mut self) {
        self.phase = 0;
    }
}
