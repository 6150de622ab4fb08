pub mod color;
pub mod config;
pub mod controller;
pub mod device;
pub mod display;
pub mod effect;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod oled;
pub mod poller;
pub mod preset;
pub mod scheduler;
pub mod transmitter;

pub use color::Rgb;
pub use config::DeviceConfig;
pub use controller::Controller;
pub use device::{BuzzerTone, DeviceClient};
pub use display::{Button, DisplayBindings, HeatLevel, LogDisplay, TemperatureGauge};
pub use effect::{EffectId, EffectSlot};
pub use error::{Error, Result};
pub use frame::{ColorBuffer, WireBuffer};
pub use poller::{DeviceSnapshot, StatePoller, StateSource};
pub use preset::Preset;
pub use scheduler::AnimationScheduler;
pub use transmitter::DeviceTransmitter;

/// Destination of rendered matrix frames
///
/// Implement this trait to deliver frames somewhere other than the board.
/// The scheduler is generic over this trait and clones it into its timer
/// task.
pub trait MatrixSink: Clone + Send + 'static {
    /// Deliver a frame, without waiting for the delivery to finish
    fn send(&self, frame: &ColorBuffer);
}

/// Fire-and-forget access to the board peripherals besides the matrix
pub trait PeripheralSink {
    /// Show a line of text on the OLED
    fn show_text(&self, text: &str);

    /// Play a buzzer tone
    fn beep(&self, tone: &BuzzerTone);

    /// Set the RGB LED
    fn set_rgb(&self, color: Rgb);
}
