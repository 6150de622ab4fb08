//! Disco effect: every cell picks a random hue each frame.

use std::time::Duration;

use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::Effect;
use crate::{color::hsv_to_rgb, frame::ColorBuffer, geometry::LED_COUNT};

#[derive(Debug, Clone)]
pub struct DiscoEffect {
    rng: SmallRng,
}

impl Default for DiscoEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl DiscoEffect {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Effect for DiscoEffect {
    const INTERVAL: Duration = Duration::from_millis(250);

    fn render(&mut self, frame: &mut ColorBuffer) {
        for cell in 0..LED_COUNT {
            let hue = self.rng.random::<f32>();
            frame.set(cell, Some(hsv_to_rgb(hue, 1.0, 1.0)));
        }
    }

    fn advance(&mut self) {}
}
