//! Sparkle effect: a handful of random cells light up in random hues.

use std::time::Duration;

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::index};

use super::Effect;
use crate::{color::hsv_to_rgb, frame::ColorBuffer, geometry::LED_COUNT};

/// Fewest cells lit per frame.
pub const MIN_SPARKS: usize = 3;
/// Most cells lit per frame.
pub const MAX_SPARKS: usize = 5;

#[derive(Debug, Clone)]
pub struct SparkleEffect {
    rng: SmallRng,
}

impl Default for SparkleEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl SparkleEffect {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Sparkle with a reproducible random source.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Effect for SparkleEffect {
    const INTERVAL: Duration = Duration::from_millis(150);

    fn render(&mut self, frame: &mut ColorBuffer) {
        let count = self.rng.random_range(MIN_SPARKS..=MAX_SPARKS);
        let picks = index::sample(&mut self.rng, LED_COUNT, count);
        for cell in picks {
            let hue = self.rng.random::<f32>();
            frame.set(cell, Some(hsv_to_rgb(hue, 1.0, 1.0)));
        }
    }

    fn advance(&mut self) {}
}
