//! Animation scheduling.
//!
//! The scheduler is a two-state machine: `Idle` or `Running` exactly one
//! timer task bound to one effect. Starting an effect always cancels the
//! previous task first, so two timers never write the matrix at once.

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};

use crate::{
    MatrixSink,
    effect::{EffectId, EffectSlot},
    frame::ColorBuffer,
};

/// Shortest accepted timer period.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// The timer task currently driving the matrix.
///
/// Dropping it cancels the task.
#[derive(Debug)]
pub struct ActiveAnimation {
    effect: EffectId,
    interval: Duration,
    task: JoinHandle<()>,
}

impl ActiveAnimation {
    pub const fn effect(&self) -> EffectId {
        self.effect
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }
}

impl Drop for ActiveAnimation {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[derive(Debug, Default)]
enum SchedulerState {
    #[default]
    Idle,
    Running(ActiveAnimation),
}

/// Owns the current matrix frame and at most one animation timer.
///
/// The frame lives in a [`watch`] channel: the animation task publishes
/// each rendered frame, and owners of the scheduler read or edit it while
/// no animation runs.
#[derive(Debug)]
pub struct AnimationScheduler<S: MatrixSink> {
    sink: S,
    frames: Arc<watch::Sender<ColorBuffer>>,
    state: SchedulerState,
}

impl<S: MatrixSink> AnimationScheduler<S> {
    pub fn new(sink: S) -> Self {
        let (frames, _) = watch::channel(ColorBuffer::new());
        Self {
            sink,
            frames: Arc::new(frames),
            state: SchedulerState::Idle,
        }
    }

    /// Bind `effect` to a new timer firing every `interval`.
    ///
    /// Any running animation is cancelled before the new timer is installed.
    /// The first frame is rendered one interval after this call. Must be
    /// called from within a tokio runtime.
    pub fn start(&mut self, mut effect: EffectSlot, interval: Duration) {
        self.stop();

        let interval = interval.max(MIN_INTERVAL);
        let id = effect.id();
        effect.reset();

        let task = tokio::spawn(run_animation(
            effect,
            interval,
            Arc::clone(&self.frames),
            self.sink.clone(),
        ));
        log::info!("Started {id} animation every {}ms", interval.as_millis());

        self.state = SchedulerState::Running(ActiveAnimation {
            effect: id,
            interval,
            task,
        });
    }

    /// Cancel the running animation, if any.
    ///
    /// The frame keeps whatever was rendered last. Returns whether an
    /// animation was running.
    pub fn stop(&mut self) -> bool {
        match core::mem::take(&mut self.state) {
            SchedulerState::Running(active) => {
                log::info!("Stopped {} animation", active.effect());
                // Dropping the handle aborts the task.
                drop(active);
                true
            }
            SchedulerState::Idle => false,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, SchedulerState::Running(_))
    }

    pub fn active(&self) -> Option<&ActiveAnimation> {
        match &self.state {
            SchedulerState::Running(active) => Some(active),
            SchedulerState::Idle => None,
        }
    }

    pub fn active_effect(&self) -> Option<EffectId> {
        self.active().map(ActiveAnimation::effect)
    }

    /// Latest frame, either edited locally or rendered by the animation.
    pub fn current_frame(&self) -> ColorBuffer {
        *self.frames.borrow()
    }

    /// Edit the current frame in place.
    pub fn update_frame(&self, edit: impl FnOnce(&mut ColorBuffer)) {
        self.frames.send_modify(edit);
    }

    /// Replace the current frame.
    pub fn replace_frame(&self, frame: ColorBuffer) {
        self.frames.send_replace(frame);
    }

    /// Watch every frame the scheduler publishes.
    pub fn subscribe(&self) -> watch::Receiver<ColorBuffer> {
        self.frames.subscribe()
    }

    /// Push the current frame to the sink once.
    pub fn send_current(&self) {
        self.sink.send(&self.current_frame());
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

/// Timer loop of one animation.
///
/// If the loop falls behind, missed ticks are skipped instead of rendered in
/// a burst.
async fn run_animation<S: MatrixSink>(
    mut effect: EffectSlot,
    interval: Duration,
    frames: Arc<watch::Sender<ColorBuffer>>,
    sink: S,
) {
    let mut ticker = time::interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;

        // Render, publish, advance, then hand off. Sending never fails here:
        // the sink logs and drops its own errors.
        let frame = effect.next_frame();
        frames.send_replace(frame);
        sink.send(&frame);
    }
}
