//! Fire effect
//!
//! Every tick each cell gets a random heat, scaled up towards the bottom
//! row. Heat maps to hue (red to yellow) and brightness at once.

use std::time::Duration;

use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::Effect;
use crate::{
    color::hsv_to_rgb,
    frame::ColorBuffer,
    geometry::{COLUMNS, ROWS},
};

/// Cells below this heat stay off.
const EMBER_THRESHOLD: f32 = 0.08;
/// Hue reached at full heat (yellow-orange).
const MAX_HUE: f32 = 0.12;

#[derive(Debug, Clone)]
pub struct FireEffect {
    rng: SmallRng,
}

impl Default for FireEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl FireEffect {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Fire with a reproducible random source.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Effect for FireEffect {
    const INTERVAL: Duration = Duration::from_millis(80);

    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, frame: &mut ColorBuffer) {
        for row in 0..ROWS {
            // Row 0 is the top of the grid, flames rise from row 4.
            let fuel = (row + 1) as f32 / ROWS as f32;
            for col in 0..COLUMNS {
                let heat = self.rng.random::<f32>() * fuel;
                if heat >= EMBER_THRESHOLD {
                    frame.set_at(row, col, Some(hsv_to_rgb(heat * MAX_HUE, 1.0, heat)));
                }
            }
        }
    }

    fn advance(&mut self) {
        // Flames are drawn fresh every frame.
    }
}
