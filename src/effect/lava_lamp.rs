//! Lava lamp effect
//!
//! Three warm blobs drift around the grid and bounce off its edges. A cell
//! takes the hue of the closest blob and fades out linearly with distance.

use std::time::Duration;

use super::Effect;
use crate::{
    color::hsv_to_rgb,
    frame::ColorBuffer,
    geometry::{COLUMNS, ROWS},
};

/// Blob coordinates are bounded to `[0, EDGE]` on both axes.
#[allow(clippy::cast_precision_loss)]
const EDGE: f32 = (COLUMNS - 1) as f32;
/// Distance at which a blob stops lighting cells.
const RADIUS: f32 = 2.0;

const INITIAL_BLOBS: [Blob; 3] = [
    Blob {
        x: 1.0,
        y: 1.0,
        vx: 0.3,
        vy: 0.2,
        hue: 0.0,
    }, // Red
    Blob {
        x: 3.0,
        y: 2.0,
        vx: -0.25,
        vy: 0.35,
        hue: 0.08,
    }, // Orange
    Blob {
        x: 2.0,
        y: 3.5,
        vx: 0.2,
        vy: -0.3,
        hue: 0.9,
    }, // Magenta
];

/// A moving light source. `x` is the column axis, `y` the row axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blob {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub hue: f32,
}

impl Blob {
    /// Move one step, reflecting off the grid bounds.
    fn step(&mut self) {
        (self.x, self.vx) = bounce(self.x + self.vx, self.vx);
        (self.y, self.vy) = bounce(self.y + self.vy, self.vy);
    }

    /// Light intensity in `[0, 1]` this blob casts on `(row, col)`.
    #[allow(clippy::cast_precision_loss)]
    fn intensity_at(&self, row: usize, col: usize) -> f32 {
        let dx = col as f32 - self.x;
        let dy = row as f32 - self.y;
        let distance = libm::sqrtf(dx * dx + dy * dy);
        (1.0 - distance / RADIUS).max(0.0)
    }
}

fn bounce(position: f32, velocity: f32) -> (f32, f32) {
    if position < 0.0 {
        ((-position).min(EDGE), -velocity)
    } else if position > EDGE {
        ((2.0 * EDGE - position).max(0.0), -velocity)
    } else {
        (position, velocity)
    }
}

#[derive(Debug, Clone)]
pub struct LavaLampEffect {
    blobs: [Blob; 3],
}

impl Default for LavaLampEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl LavaLampEffect {
    pub const fn new() -> Self {
        Self {
            blobs: INITIAL_BLOBS,
        }
    }

    pub const fn blobs(&self) -> &[Blob; 3] {
        &self.blobs
    }
}

impl Effect for LavaLampEffect {
    const INTERVAL: Duration = Duration::from_millis(100);

    fn render(&mut self, frame: &mut ColorBuffer) {
        for row in 0..ROWS {
            for col in 0..COLUMNS {
                let brightest = self
                    .blobs
                    .iter()
                    .map(|blob| (blob.hue, blob.intensity_at(row, col)))
                    .fold((0.0, 0.0), |best, candidate| {
                        if candidate.1 > best.1 { candidate } else { best }
                    });

                let (hue, intensity) = brightest;
                if intensity > 0.0 {
                    frame.set_at(row, col, Some(hsv_to_rgb(hue, 1.0, intensity)));
                }
            }
        }
    }

    fn advance(&mut self) {
        for blob in &mut self.blobs {
            blob.step();
        }
    }

    fn reset(&mut self) {
        self.blobs = INITIAL_BLOBS;
    }
}
