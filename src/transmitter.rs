//! Frame serialization and fire-and-forget delivery.
//!
//! Every send spawns its own request task and returns immediately. A failed
//! request is logged and dropped; for animations the next tick is the retry.

use crate::{
    MatrixSink, PeripheralSink,
    color::{Rgb, to_hex},
    device::{BuzzerTone, DeviceClient},
    frame::ColorBuffer,
    geometry::LED_COUNT,
};

/// Wire token of an off cell.
pub const OFF_TOKEN: &str = "000000";

/// Serialize a frame into the matrix payload.
///
/// Cells are flipped into physical order and written as six hex digits,
/// comma separated. Off cells become [`OFF_TOKEN`].
pub fn encode_frame(frame: &ColorBuffer) -> String {
    let mut payload = String::with_capacity(LED_COUNT * 7);
    for (index, cell) in frame.to_wire().iter().enumerate() {
        if index > 0 {
            payload.push(',');
        }
        match cell {
            Some(color) => payload.push_str(&to_hex(color)),
            None => payload.push_str(OFF_TOKEN),
        }
    }
    payload
}

/// Sends frames and peripheral commands to the board.
///
/// Must be used from within a tokio runtime.
#[derive(Debug, Clone)]
pub struct DeviceTransmitter {
    device: DeviceClient,
}

impl DeviceTransmitter {
    pub const fn new(device: DeviceClient) -> Self {
        Self { device }
    }

    pub fn device(&self) -> &DeviceClient {
        &self.device
    }
}

impl MatrixSink for DeviceTransmitter {
    fn send(&self, frame: &ColorBuffer) {
        let payload = encode_frame(frame);
        let device = self.device.clone();
        tokio::spawn(async move {
            match device.post_matrix(&payload).await {
                Ok(()) => log::debug!("Matrix updated"),
                Err(err) => log::warn!("Matrix send error: {err}"),
            }
        });
    }
}

impl PeripheralSink for DeviceTransmitter {
    fn show_text(&self, text: &str) {
        let text = text.to_owned();
        let device = self.device.clone();
        tokio::spawn(async move {
            match device.post_oled(&text).await {
                Ok(()) => log::debug!("OLED text sent: {text:?}"),
                Err(err) => log::warn!("OLED send error: {err}"),
            }
        });
    }

    fn beep(&self, tone: &BuzzerTone) {
        let tone = tone.clone();
        let device = self.device.clone();
        tokio::spawn(async move {
            match device.post_buzzer(&tone).await {
                Ok(()) => log::debug!(
                    "Buzzer [{}]: {}Hz, {}ms",
                    tone.channel,
                    tone.frequency,
                    tone.duration_ms
                ),
                Err(err) => log::warn!("Buzzer send error: {err}"),
            }
        });
    }

    fn set_rgb(&self, color: Rgb) {
        let device = self.device.clone();
        tokio::spawn(async move {
            match device.post_rgb(color).await {
                Ok(()) => log::debug!("RGB updated to {},{},{}", color.r, color.g, color.b),
                Err(err) => log::warn!("RGB send error: {err}"),
            }
        });
    }
}
