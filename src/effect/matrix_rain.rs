//! Matrix rain effect
//!
//! Each column carries one falling drop with a fading green trail. When a
//! trail leaves the bottom edge the drop respawns above the top after a
//! random delay.

use std::time::Duration;

use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::Effect;
use crate::{
    color::Rgb,
    frame::ColorBuffer,
    geometry::{COLUMNS, ROWS},
};

/// Cells in a trail, head included.
pub const TRAIL_LEN: usize = 3;
/// Longest wait (in ticks) above the top edge before a drop falls again.
const MAX_RESPAWN_DELAY: i32 = 4;

/// Green level of a trail cell from its brightness factor in `[0, 1]`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rain_green(brightness: f32) -> u8 {
    libm::roundf(brightness.clamp(0.0, 1.0) * 255.0) as u8
}

#[derive(Debug, Clone)]
pub struct MatrixRainEffect {
    rng: SmallRng,
    /// Row of each column's drop head, negative while waiting above the grid
    heads: [i32; COLUMNS],
}

impl Default for MatrixRainEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixRainEffect {
    pub fn new() -> Self {
        Self::from_rng(SmallRng::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: SmallRng) -> Self {
        let mut heads = [0; COLUMNS];
        for head in &mut heads {
            *head = Self::spawn_row(&mut rng);
        }
        Self { rng, heads }
    }

    fn spawn_row(rng: &mut SmallRng) -> i32 {
        -rng.random_range(0..=MAX_RESPAWN_DELAY)
    }

    pub const fn heads(&self) -> &[i32; COLUMNS] {
        &self.heads
    }
}

impl Effect for MatrixRainEffect {
    const INTERVAL: Duration = Duration::from_millis(120);

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn render(&mut self, frame: &mut ColorBuffer) {
        for (col, &head) in self.heads.iter().enumerate() {
            for offset in 0..TRAIL_LEN {
                let row = head - offset as i32;
                if !(0..ROWS as i32).contains(&row) {
                    continue;
                }
                let brightness = 1.0 - offset as f32 / TRAIL_LEN as f32;
                let green = rain_green(brightness);
                frame.set_at(row as usize, col, Some(Rgb { r: 0, g: green, b: 0 }));
            }
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn advance(&mut self) {
        // Last head row whose trail still touches the grid.
        let last_visible = (ROWS + TRAIL_LEN) as i32 - 2;
        for head in &mut self.heads {
            *head += 1;
            if *head > last_visible {
                *head = Self::spawn_row(&mut self.rng);
            }
        }
    }
}
