use std::time::Duration;

use bitdog_composer::{
    BuzzerTone, ColorBuffer, Controller, DeviceClient, DeviceConfig, DeviceTransmitter, EffectId,
    LogDisplay, Preset, Rgb, StatePoller,
    color::{parse_hex_color, to_css_hex},
    config::DEFAULT_BASE_URL,
    transmitter::encode_frame,
};
use clap::{Parser, Subcommand};

/// BitDogLab matrix composer
///
/// A command line application for playing effects on the 5x5 LED matrix of a
/// BitDogLab board and watching its inputs over WiFi
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board address
    #[arg(short, long, env = "BITDOG_ADDRESS", default_value = DEFAULT_BASE_URL)]
    address: String,
    /// Timeout of a single request
    #[arg(long, default_value = "2000", value_name = "MS")]
    timeout_ms: u64,
    /// Device state polling period
    #[arg(long, default_value = "200", value_name = "MS")]
    poll_ms: u64,
    /// Actual command
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List available effects
    Effects,
    /// List available presets
    Presets,
    /// Play an effect on the matrix while watching the device state
    Animate {
        /// Effect name
        effect: EffectId,
        /// Foreground color
        #[arg(short, long, default_value = "#ff0000", value_parser = parse_hex_color)]
        color: Rgb,
        /// Override the effect frame period
        #[arg(short, long, value_name = "MS")]
        interval_ms: Option<u64>,
        /// Stop after this many seconds instead of waiting for ctrl-c
        #[arg(short, long, value_name = "SECONDS")]
        duration_s: Option<u64>,
    },
    /// Draw a static pattern
    Preset {
        /// Preset name
        preset: Preset,
        /// Foreground color
        #[arg(short, long, default_value = "#ff0000", value_parser = parse_hex_color)]
        color: Rgb,
    },
    /// Light the whole matrix
    Fill {
        /// Foreground color
        #[arg(short, long, default_value = "#ff0000", value_parser = parse_hex_color)]
        color: Rgb,
    },
    /// Turn the whole matrix off
    Clear,
    /// Print a line on the OLED
    Oled {
        /// Text to print
        text: String,
    },
    /// Play a buzzer tone
    Buzzer {
        /// Frequency
        #[arg(short, long, default_value = "1000", value_name = "HZ")]
        freq: u32,
        /// Duration
        #[arg(short, long, default_value = "200", value_name = "MS")]
        dur: u32,
        /// Buzzer channel
        #[arg(long, default_value = "both")]
        channel: String,
    },
    /// Set the RGB LED
    Rgb { r: u8, g: u8, b: u8 },
    /// Log device state changes
    Watch {
        /// Stop after this many seconds instead of waiting for ctrl-c
        #[arg(short, long, value_name = "SECONDS")]
        duration_s: Option<u64>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = DeviceConfig {
        base_url: cli.address,
        request_timeout: Duration::from_millis(cli.timeout_ms),
        poll_interval: Duration::from_millis(cli.poll_ms),
    };
    let device = DeviceClient::new(config)?;
    let address = device.config().base_url.clone();

    match cli.command {
        Command::Effects => list_effects(),
        Command::Presets => list_presets(),
        Command::Animate {
            effect,
            color,
            interval_ms,
            duration_s,
        } => {
            let mut controller = Controller::new(DeviceTransmitter::new(device.clone()));
            controller.select_color(color);
            match interval_ms {
                Some(ms) => {
                    controller.start_effect_with_interval(effect, Duration::from_millis(ms));
                }
                None => controller.start_effect(effect),
            }

            let poller = spawn_poller(device);
            wait_for_exit(duration_s.map(Duration::from_secs)).await?;
            poller.abort();
            controller.stop_animation();
        }
        // One-shot commands await the device client directly instead of going
        // through `Controller`, whose sends are fire-and-forget: the process
        // would exit before the request is made and errors would be lost.
        Command::Preset { preset, color } => {
            log::info!("Drawing {preset} in {} on {address}", to_css_hex(color));
            device
                .post_matrix(&encode_frame(&preset.to_frame(color)))
                .await?;
        }
        Command::Fill { color } => {
            log::info!("Filling the matrix on {address} with {}", to_css_hex(color));
            device
                .post_matrix(&encode_frame(&ColorBuffer::filled(color)))
                .await?;
        }
        Command::Clear => {
            log::info!("Clearing the matrix on {address}");
            device
                .post_matrix(&encode_frame(&ColorBuffer::new()))
                .await?;
        }
        Command::Oled { text } => {
            let text = text.trim();
            if text.is_empty() {
                anyhow::bail!("OLED text is empty");
            }
            device.post_oled(text).await?;
            log::info!("Sent {text:?} to the OLED on {address}");
        }
        Command::Buzzer { freq, dur, channel } => {
            let tone = BuzzerTone {
                frequency: freq,
                duration_ms: dur,
                channel,
            };
            device.post_buzzer(&tone).await?;
            log::info!("Buzzer [{}] played {freq}Hz for {dur}ms", tone.channel);
        }
        Command::Rgb { r, g, b } => {
            let color = Rgb { r, g, b };
            device.post_rgb(color).await?;
            log::info!("RGB LED on {address} set to {}", to_css_hex(color));
        }
        Command::Watch { duration_s } => {
            log::info!("Watching device state on {address}");
            let poller = spawn_poller(device);
            wait_for_exit(duration_s.map(Duration::from_secs)).await?;
            poller.abort();
        }
    }

    Ok(())
}

fn spawn_poller(device: DeviceClient) -> tokio::task::JoinHandle<()> {
    let interval = device.config().poll_interval;
    let poller = StatePoller::new(device, LogDisplay::new()).with_interval(interval);
    tokio::spawn(poller.run())
}

async fn wait_for_exit(duration: Option<Duration>) -> anyhow::Result<()> {
    let deadline = async {
        match duration {
            Some(duration) => tokio::time::sleep(duration).await,
            None => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        () = deadline => {}
        result = tokio::signal::ctrl_c() => result?,
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
fn list_effects() {
    for effect in EffectId::ALL {
        println!(
            "{:<16} {:>4}ms{}",
            effect.as_str(),
            effect.default_interval().as_millis(),
            if effect.is_randomized() {
                "  (random)"
            } else {
                ""
            }
        );
    }
}

#[allow(clippy::print_stdout)]
fn list_presets() {
    for preset in Preset::ALL {
        println!("{preset}");
    }
}
