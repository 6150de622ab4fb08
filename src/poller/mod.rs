//! Device state polling.
//!
//! The poller runs its own timer, independent from any animation. Every tick
//! spawns one fetch and moves on; responses are reconciled in arrival order,
//! so a slow response may land after a newer one.

mod parser;

use std::time::Duration;

use tokio::{
    sync::mpsc,
    time::{self, MissedTickBehavior},
};

pub use self::parser::{
    BUTTON_A_FIELD, BUTTON_B_FIELD, DeviceSnapshot, JOYSTICK_BUTTON_FIELD, JOYSTICK_CENTER,
    JOYSTICK_X_FIELD, JOYSTICK_Y_FIELD, JoystickState, PRESSED_LABEL, PRESSED_VALUE,
    TEMPERATURE_FIELD, UPTIME_FIELD, field_text, is_button_pressed, parse_state_document,
};
use crate::{
    Result,
    config::DEFAULT_POLL_INTERVAL,
    display::{Button, DisplayBindings, TemperatureGauge},
    scheduler::MIN_INTERVAL,
};

/// Where state documents come from.
pub trait StateSource: Clone + Send + Sync + 'static {
    /// Fetch the raw state document.
    ///
    /// Transport errors, non-success statuses and undecodable bodies are all
    /// reported as `Err`.
    fn fetch_state(&self) -> impl Future<Output = Result<String>> + Send;
}

/// Periodically fetches device state and applies it to display bindings.
#[derive(Debug)]
pub struct StatePoller<S, B> {
    source: S,
    bindings: B,
    interval: Duration,
    snapshot: Option<DeviceSnapshot>,
}

impl<S: StateSource, B: DisplayBindings> StatePoller<S, B> {
    pub fn new(source: S, bindings: B) -> Self {
        Self {
            source,
            bindings,
            interval: DEFAULT_POLL_INTERVAL,
            snapshot: None,
        }
    }

    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval.max(MIN_INTERVAL);
        self
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Last successfully parsed state, `None` until the first success.
    pub fn snapshot(&self) -> Option<&DeviceSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn bindings(&self) -> &B {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut B {
        &mut self.bindings
    }

    pub fn into_bindings(self) -> B {
        self.bindings
    }

    /// Parse a state document, dispatch it and keep it as the snapshot.
    pub fn reconcile(&mut self, document: &str) -> &DeviceSnapshot {
        let snapshot = parse_state_document(document);
        dispatch(&snapshot, &mut self.bindings);
        self.snapshot.insert(snapshot)
    }

    /// Fetch and reconcile once. Returns whether the fetch succeeded.
    pub async fn poll_once(&mut self) -> bool {
        let result = self.source.fetch_state().await;
        self.apply(result)
    }

    /// Poll forever: first fetch immediately, then once per interval.
    ///
    /// Must be spawned on, or awaited within, a tokio runtime. Cancel it by
    /// dropping the future or aborting its task.
    pub async fn run(mut self) {
        let (results_tx, mut results_rx) = mpsc::unbounded_channel();
        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        log::info!("Polling device state every {}ms", self.interval.as_millis());
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let source = self.source.clone();
                    let results_tx = results_tx.clone();
                    tokio::spawn(async move {
                        // The poller is gone if the channel is closed.
                        let _ = results_tx.send(source.fetch_state().await);
                    });
                }
                Some(result) = results_rx.recv() => {
                    self.apply(result);
                }
            }
        }
    }

    fn apply(&mut self, result: Result<String>) -> bool {
        match result {
            Ok(document) => {
                self.reconcile(&document);
                true
            }
            Err(err) => {
                log::trace!("State poll failed: {err}");
                false
            }
        }
    }
}

fn dispatch<B: DisplayBindings>(snapshot: &DeviceSnapshot, bindings: &mut B) {
    bindings.update_button(Button::A, snapshot.button_a);
    bindings.update_button(Button::B, snapshot.button_b);

    let joystick = snapshot.joystick;
    bindings.update_joystick(joystick.x, joystick.y, joystick.pressed);

    if let Some(uptime) = &snapshot.uptime {
        bindings.update_uptime(uptime);
    }
    if let Some(temperature) = snapshot.temperature {
        bindings.update_temperature(TemperatureGauge::new(temperature));
    }
}
