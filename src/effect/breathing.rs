//! Breathing effect
//!
//! The whole matrix shows the selected color, fading between off and full
//! brightness on a raised cosine.

use core::f32::consts::TAU;
use std::time::Duration;

use super::Effect;
use crate::{
    color::{Rgb, scale},
    frame::ColorBuffer,
};

/// Ticks for one breath.
pub const BREATH_PERIOD: u32 = 40;

#[derive(Debug, Clone)]
pub struct BreathingEffect {
    color: Rgb,
    phase: u32,
}

impl BreathingEffect {
    pub const fn new(color: Rgb) -> Self {
        Self { color, phase: 0 }
    }

    /// Brightness factor in `[0, 1]` at the current phase.
    #[allow(clippy::cast_precision_loss)]
    pub fn brightness(&self) -> f32 {
        let angle = TAU * self.phase as f32 / BREATH_PERIOD as f32;
        ((1.0 - libm::cosf(angle)) / 2.0).clamp(0.0, 1.0)
    }
}

impl Effect for BreathingEffect {
    const INTERVAL: Duration = Duration::from_millis(50);

    fn render(&mut self, frame: &mut ColorBuffer) {
        frame.fill(scale(self.color, self.brightness()));
    }

    fn advance(&mut self) {
        self.phase = (self.phase + 1) % BREATH_PERIOD;
    }

    fn reset(&mut self) {
        self.phase = 0;
    }
}
