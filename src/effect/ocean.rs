//! Ocean waves
//!
//! Ripples travel outwards from the center. Hue stays in the blue band and
//! brightness follows a sine of the distance to the center.

use core::f32::consts::TAU;
use std::time::Duration;

use super::Effect;
use crate::{
    color::hsv_to_rgb,
    frame::ColorBuffer,
    geometry::{CENTER, COLUMNS, ROWS},
};

/// Ticks for one ripple to pass a cell.
pub const OCEAN_PERIOD: u32 = 24;
/// Radians of ripple per cell of distance.
const WAVE_NUMBER: f32 = 1.6;
const BASE_HUE: f32 = 0.52;
const HUE_SPREAD: f32 = 0.12;
/// Troughs stay dimly lit.
const MIN_VALUE: f32 = 0.2;

#[derive(Debug, Clone, Default)]
pub struct OceanWavesEffect {
    phase: u32,
}

impl OceanWavesEffect {
    pub const fn new() -> Self {
        Self { phase: 0 }
    }

    /// Wave height in `[0, 1]` of a cell at the current phase.
    #[allow(clippy::cast_precision_loss)]
    pub fn height_at(&self, row: usize, col: usize) -> f32 {
        let dy = row as f32 - CENTER as f32;
        let dx = col as f32 - CENTER as f32;
        let distance = libm::sqrtf(dx * dx + dy * dy);
        let offset = TAU * self.phase as f32 / OCEAN_PERIOD as f32;
        (0.5 + 0.5 * libm::sinf(distance * WAVE_NUMBER - offset)).clamp(0.0, 1.0)
    }
}

impl Effect for OceanWavesEffect {
    const INTERVAL: Duration = Duration::from_millis(100);

    fn render(&mut self, frame: &mut ColorBuffer) {
        for row in 0..ROWS {
            for col in 0..COLUMNS {
                let height = self.height_at(row, col);
                let hue = BASE_HUE + HUE_SPREAD * height;
                let value = MIN_VALUE + (1.0 - MIN_VALUE) * height;
                frame.set_at(row, col, Some(hsv_to_rgb(hue, 1.0, value)));
            }
        }
    }

    fn advance(&mut self) {
        self.phase = (self.phase + 1) % OCEAN_PERIOD;
    }

    fn reset(&mut self) {
        self.phase = 0;
    }
}
