//! Diagonal rainbow gradient
//!
//! Hue grows by 1/8 per step along the row+column diagonal, so the whole
//! grid spans one full turn of the color wheel. The pattern drifts by one
//! `GRADIENT_PERIOD`-th of a turn per tick.

use std::time::Duration;

use super::Effect;
use crate::{
    color::hsv_to_rgb,
    frame::ColorBuffer,
    geometry::{COLUMNS, ROWS},
};

/// Ticks for one full hue turn.
pub const GRADIENT_PERIOD: u32 = 20;
/// Diagonal steps per hue turn (`(ROWS - 1) + (COLUMNS - 1)`).
const DIAGONAL_SPAN: f32 = 8.0;

#[derive(Debug, Clone, Default)]
pub struct GradientEffect {
    phase: u32,
}

impl GradientEffect {
    pub const fn new() -> Self {
        Self { phase: 0 }
    }

    pub const fn phase(&self) -> u32 {
        self.phase
    }

    /// Hue of a cell at the current phase.
    #[allow(clippy::cast_precision_loss)]
    pub fn hue_at(&self, row: usize, col: usize) -> f32 {
        let diagonal = (row + col) as f32 / DIAGONAL_SPAN;
        let shift = self.phase as f32 / GRADIENT_PERIOD as f32;
        let hue = diagonal + shift;
        hue - libm::floorf(hue)
    }
}

impl Effect for GradientEffect {
    const INTERVAL: Duration = Duration::from_millis(100);

    fn render(&mut self, frame: &mut ColorBuffer) {
        for row in 0..ROWS {
            for col in 0..COLUMNS {
                let color = hsv_to_rgb(self.hue_at(row, col), 1.0, 1.0);
                frame.set_at(row, col, Some(color));
            }
        }
    }

    fn advance(&mut self) {
        self.phase = (self.phase + 1) % GRADIENT_PERIOD;
    }

    fn reset(&mut self) {
        self.phase = 0;
    }
}
