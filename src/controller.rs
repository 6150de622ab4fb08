//! The owned controller behind every user operation.

use std::time::Duration;

use crate::{
    Error, MatrixSink, PeripheralSink, Result,
    color::{RED, Rgb},
    device::BuzzerTone,
    effect::EffectId,
    frame::ColorBuffer,
    geometry::LED_COUNT,
    oled::OledPreview,
    preset::Preset,
    scheduler::AnimationScheduler,
};

/// Matrix, selected color, animation and OLED preview of one board.
///
/// Manual edits (`toggle_cell`, `clear`, `fill`) only change the local frame;
/// call [`Controller::send_matrix`] to push it.
#[derive(Debug)]
pub struct Controller<T: MatrixSink + PeripheralSink> {
    scheduler: AnimationScheduler<T>,
    selected_color: Rgb,
    oled: OledPreview,
}

impl<T: MatrixSink + PeripheralSink> Controller<T> {
    pub fn new(transmitter: T) -> Self {
        Self {
            scheduler: AnimationScheduler::new(transmitter),
            selected_color: RED,
            oled: OledPreview::new(),
        }
    }

    /// Foreground color for manual edits and newly started effects.
    ///
    /// A running effect keeps the color it was started with.
    pub fn select_color(&mut self, color: Rgb) {
        self.selected_color = color;
    }

    pub const fn selected_color(&self) -> Rgb {
        self.selected_color
    }

    /// Light a cell in the selected color, or turn it off if lit.
    pub fn toggle_cell(&mut self, index: usize) -> Result<()> {
        if index >= LED_COUNT {
            return Err(Error::CellOutOfRange(index));
        }
        let color = self.selected_color;
        self.scheduler.update_frame(|frame| {
            let next = match frame.get(index) {
                Some(_) => None,
                None => Some(color),
            };
            frame.set(index, next);
        });
        Ok(())
    }

    /// Stop any animation and turn every cell off.
    pub fn clear(&mut self) {
        self.scheduler.stop();
        self.scheduler.update_frame(ColorBuffer::clear);
    }

    /// Stop any animation and light every cell in the selected color.
    pub fn fill(&mut self) {
        self.scheduler.stop();
        let color = self.selected_color;
        self.scheduler.update_frame(|frame| frame.fill(color));
    }

    /// Push the current frame to the board.
    pub fn send_matrix(&self) {
        self.scheduler.send_current();
    }

    /// Stop any animation, draw the preset in the selected color and send it.
    pub fn set_preset(&mut self, preset: Preset) {
        self.scheduler.stop();
        self.scheduler
            .replace_frame(preset.to_frame(self.selected_color));
        log::info!("Preset {preset}");
        self.scheduler.send_current();
    }

    /// Start an effect at its default interval.
    pub fn start_effect(&mut self, effect: EffectId) {
        self.start_effect_with_interval(effect, effect.default_interval());
    }

    /// Start an effect, replacing any running one.
    pub fn start_effect_with_interval(&mut self, effect: EffectId, interval: Duration) {
        self.scheduler
            .start(effect.to_slot(self.selected_color), interval);
    }

    /// Stop the animation, keeping the last frame. Returns whether one ran.
    pub fn stop_animation(&mut self) -> bool {
        self.scheduler.stop()
    }

    pub fn is_animating(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn active_effect(&self) -> Option<EffectId> {
        self.scheduler.active_effect()
    }

    /// Snapshot of the current frame.
    pub fn matrix(&self) -> ColorBuffer {
        self.scheduler.current_frame()
    }

    pub fn scheduler(&self) -> &AnimationScheduler<T> {
        &self.scheduler
    }

    /// Append the text to the OLED preview and send it.
    ///
    /// The text is trimmed; blank text is ignored. Returns whether it was
    /// sent.
    pub fn send_oled_text(&mut self, text: &str) -> bool {
        match self.oled.push(text) {
            Some(line) => {
                self.scheduler.sink().show_text(line);
                true
            }
            None => false,
        }
    }

    /// OLED preview lines, oldest first.
    pub fn oled_lines(&self) -> impl Iterator<Item = &str> {
        self.oled.lines()
    }

    pub fn play_buzzer(&self, tone: &BuzzerTone) {
        self.scheduler.sink().beep(tone);
    }

    pub fn send_rgb(&self, color: Rgb) {
        self.scheduler.sink().set_rgb(color);
    }
}
