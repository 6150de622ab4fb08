//! Rings expanding from the center cell

use std::time::Duration;

use super::Effect;
use crate::{color::Rgb, frame::ColorBuffer};

/// Logical indices of each ring, from the center outwards.
pub const RINGS: [&[u8]; 3] = [
    &[12],
    &[6, 7, 8, 11, 13, 16, 17, 18],
    &[0, 1, 2, 3, 4, 5, 9, 10, 14, 15, 19, 20, 21, 22, 23, 24],
];

/// One ring lit at a time, cycling center to border
#[derive(Debug, Clone)]
pub struct RingsEffect {
    color: Rgb,
    ring: usize,
}

impl RingsEffect {
    pub const fn new(color: Rgb) -> Self {
        Self { color, ring: 0 }
    }

    /// Ring that the next frame lights.
    pub const fn ring(&self) -> usize {
        self.ring
    }
}

impl Effect for RingsEffect {
    const INTERVAL: Duration = Duration::from_millis(300);

    fn render(&mut self, frame: &mut ColorBuffer) {
        for &index in RINGS[self.ring] {
            frame.set(usize::from(index), Some(self.color));
        }
    }

    fn advance(&mut self) {
        self.ring = (self.ring + 1) % RINGS.len();
    }

    fn reset(&mut self) {
        self.ring = 0;
    }
}
