//! Playback controller
//!
//! The controller is the single owner of playback state: which step is
//! shown, whether auto-play is running, how fast it runs, and which dataset
//! the steps are replayed against. Everything else (renderers, overlays,
//! the input panel) reads from it.
//!
//! # Invariants
//! - `0 <= current_step_index <= last_index` after every operation
//! - At most one timer is armed, and only while playing
//! - Manual navigation always pauses before moving
//! - Swapping the dataset never renumbers or regenerates steps
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod timer;

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, trace, warn};
use serde::Serialize;

pub use self::timer::{ManualGuard, ManualTimer, TimerBackend, TimerId, TokioTimer, TokioTimerGuard};

use crate::config::VisualizerConfig;
use crate::input::ExtraParams;
use crate::trace::{Step, TraceData, VisualizationKind, VisualizationTrace};

/// Result of delivering a timer tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Moved to the given step and keeps playing
    Advanced(usize),
    /// Reached (or already sat on) the terminal step; playback stopped
    Completed(usize),
    /// Tick from a cancelled timer, or nothing armed
    Ignored,
}

/// Point-in-time copy of the controller's observable state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackState {
    pub current_step_index: usize,
    pub is_playing: bool,
    pub speed_ms: u64,
    pub custom_data: Option<TraceData>,
    pub completed: bool,
}

struct ArmedTimer<G> {
    id: TimerId,
    period: Duration,
    _guard: G,
}

/// Authoritative playback state machine
pub struct PlaybackController<B: TimerBackend> {
    trace: Arc<VisualizationTrace>,
    current: usize,
    playing: bool,
    speed: Duration,
    default_speed: Duration,
    speed_bounds: (u64, u64),
    custom_data: Option<TraceData>,
    extra: ExtraParams,
    backend: B,
    timer: Option<ArmedTimer<B::Guard>>,
    next_timer_id: u64,
}

impl<B: TimerBackend> PlaybackController<B> {
    /// Controller with default settings (1500 ms interval)
    pub fn new(trace: Arc<VisualizationTrace>, backend: B) -> Self {
        Self::with_config(trace, backend, &VisualizerConfig::default())
    }

    pub fn with_config(trace: Arc<VisualizationTrace>, backend: B, config: &VisualizerConfig) -> Self {
        info!(
            "Loaded {} trace with {} steps over {} data cells",
            trace.kind(),
            trace.len(),
            trace.data().len()
        );
        let (min, max) = (config.min_speed_ms.max(1), config.max_speed_ms.max(1));
        let default_speed = Duration::from_millis(config.default_speed_ms.max(min).min(max));
        Self {
            trace,
            current: 0,
            playing: false,
            speed: default_speed,
            default_speed,
            speed_bounds: (min, max),
            custom_data: None,
            extra: ExtraParams::default(),
            backend,
            timer: None,
            next_timer_id: 0,
        }
    }

    // ---- read side -------------------------------------------------------

    pub fn trace(&self) -> &Arc<VisualizationTrace> {
        &self.trace
    }

    pub fn kind(&self) -> &VisualizationKind {
        self.trace.kind()
    }

    pub fn current_step_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &Step {
        &self.trace.steps()[self.current]
    }

    pub fn step_count(&self) -> usize {
        self.trace.len()
    }

    pub fn last_index(&self) -> usize {
        self.trace.last_index()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed(&self) -> Duration {
        self.speed
    }

    pub fn speed_ms(&self) -> u64 {
        self.speed.as_millis() as u64
    }

    /// Dataset the steps are currently replayed against
    pub fn active_data(&self) -> &TraceData {
        self.custom_data.as_ref().unwrap_or_else(|| self.trace.data())
    }

    pub fn has_custom_data(&self) -> bool {
        self.custom_data.is_some()
    }

    /// Auxiliary parameters supplied with the custom dataset
    pub fn extra_params(&self) -> &ExtraParams {
        &self.extra
    }

    pub fn is_at_start(&self) -> bool {
        self.current == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.current == self.last_index()
    }

    /// Resting on the terminal step with auto-play stopped
    pub fn is_completed(&self) -> bool {
        self.is_at_end() && !self.playing
    }

    /// Id of the armed timer, if any
    pub fn armed_timer(&self) -> Option<TimerId> {
        self.timer.as_ref().map(|t| t.id)
    }

    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            current_step_index: self.current,
            is_playing: self.playing,
            speed_ms: self.speed_ms(),
            custom_data: self.custom_data.clone(),
            completed: self.is_completed(),
        }
    }

    // ---- transport -------------------------------------------------------

    /// Starts auto-play; from the terminal step it replays from the start
    pub fn play(&mut self) {
        if self.step_count() <= 1 {
            debug!("Ignoring play on a single-step trace");
            return;
        }
        if self.playing {
            return;
        }
        if self.is_at_end() {
            debug!("Play from terminal step: rewinding to step 0");
            self.current = 0;
        }
        self.playing = true;
        info!("Playback started at step {} ({} ms/step)", self.current, self.speed_ms());
        self.rearm();
    }

    pub fn pause(&mut self) {
        if !self.playing {
            return;
        }
        self.playing = false;
        info!("Playback paused at step {}", self.current);
        self.rearm();
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn step_forward(&mut self) {
        self.pause();
        self.current = (self.current + 1).min(self.last_index());
        trace!("Step forward to {}", self.current);
    }

    pub fn step_backward(&mut self) {
        self.pause();
        self.current = self.current.saturating_sub(1);
        trace!("Step backward to {}", self.current);
    }

    /// Jumps to `index`, clamped into range
    pub fn seek(&mut self, index: i64) {
        self.pause();
        let last = self.last_index() as i64;
        self.current = index.clamp(0, last) as usize;
        trace!("Seek to {} (requested {})", self.current, index);
    }

    /// Back to step 0, paused; custom data is kept
    pub fn reset(&mut self) {
        self.playing = false;
        self.current = 0;
        self.rearm();
        debug!("Playback reset");
    }

    /// Replays the existing steps against `values`
    pub fn set_custom_data(&mut self, values: Vec<f64>, extra: ExtraParams) {
        info!("Custom data applied: {} values, target={:?}", values.len(), extra.target);
        self.custom_data = Some(TraceData::numbers(&values));
        self.extra = extra;
        self.reset();
    }

    /// Drops any custom dataset and returns to the trace's own data
    pub fn restore_default_data(&mut self) {
        if self.custom_data.is_some() {
            info!("Restored default trace data");
        }
        self.custom_data = None;
        self.extra = ExtraParams::default();
        self.reset();
    }

    /// Changes the auto-advance interval for subsequent ticks
    pub fn set_speed_ms(&mut self, ms: u64) {
        if ms == 0 {
            warn!("Ignoring zero playback interval");
            return;
        }
        let (min, max) = self.speed_bounds;
        let speed = Duration::from_millis(ms.max(min).min(max));
        if speed == self.speed {
            return;
        }
        debug!("Playback interval {} ms -> {} ms", self.speed_ms(), speed.as_millis());
        self.speed = speed;
        if self.playing {
            self.rearm();
        }
    }

    /// Switches to a different trace, resetting all playback state
    pub fn load_trace(&mut self, trace: Arc<VisualizationTrace>) {
        info!("Switching to {} trace with {} steps", trace.kind(), trace.len());
        self.trace = trace;
        self.custom_data = None;
        self.extra = ExtraParams::default();
        self.speed = self.default_speed;
        self.reset();
    }

    // ---- timer -----------------------------------------------------------

    /// Fires the currently armed timer, if any
    pub fn tick(&mut self) -> TickOutcome {
        match self.armed_timer() {
            Some(id) => self.on_timer(id),
            None => TickOutcome::Ignored,
        }
    }

    /// Delivers a tick from timer `id`
    pub fn on_timer(&mut self, id: TimerId) -> TickOutcome {
        if self.armed_timer() != Some(id) || !self.playing {
            trace!("Dropping stale tick from {}", id);
            return TickOutcome::Ignored;
        }
        if self.current < self.last_index() {
            self.current += 1;
            if !self.is_at_end() {
                return TickOutcome::Advanced(self.current);
            }
        }
        self.playing = false;
        self.rearm();
        info!("Playback completed at step {}", self.current);
        TickOutcome::Completed(self.current)
    }

    /// Cancels any armed timer, then arms a fresh one if playing
    fn rearm(&mut self) {
        if let Some(old) = self.timer.take() {
            trace!("Released {} ({} ms)", old.id, old.period.as_millis());
            drop(old);
        }
        if !self.playing {
            return;
        }
        self.next_timer_id += 1;
        let id = TimerId(self.next_timer_id);
        let guard = self.backend.arm(id, self.speed);
        trace!("Armed {} every {} ms", id, self.speed_ms());
        self.timer = Some(ArmedTimer {
            id,
            period: self.speed,
            _guard: guard,
        });
    }
}

impl<B: TimerBackend> Drop for PlaybackController<B> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            debug!("Controller dropped; releasing {}", timer.id);
        }
    }
}
