//! Repeating auto-advance timer
//!
//! The controller owns at most one armed timer. Arming returns a guard and
//! dropping the guard cancels the timer, so every path that discards the
//! guard (pause, speed change, reset, controller drop) releases it. Each
//! arming gets a fresh [`TimerId`]; ticks carry that id so a tick already in
//! flight from a cancelled timer can be recognised and ignored.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt::{self, Display};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::trace;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Identity of one arming of the playback timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

impl Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Source of repeating timers
pub trait TimerBackend {
    /// Live timer; dropping it cancels the timer
    type Guard;

    /// Starts a timer that fires `id` every `period` until its guard drops
    fn arm(&mut self, id: TimerId, period: Duration) -> Self::Guard;
}

/// Deterministic backend: records armings, never fires on its own
///
/// Ticks are delivered by calling [`PlaybackController::tick`] directly,
/// which is how tests and headless rendering step through auto-play.
///
/// [`PlaybackController::tick`]: super::PlaybackController::tick
#[derive(Debug, Clone, Default)]
pub struct ManualTimer {
    live: Arc<AtomicUsize>,
    armed: Arc<Mutex<Vec<(TimerId, Duration)>>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of guards currently alive
    pub fn live_timers(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Total armings so far
    pub fn arm_count(&self) -> usize {
        self.armed.lock().map(|armed| armed.len()).unwrap_or(0)
    }

    pub fn last_armed(&self) -> Option<(TimerId, Duration)> {
        self.armed.lock().ok().and_then(|armed| armed.last().copied())
    }
}

/// Guard for [`ManualTimer`]
#[derive(Debug)]
pub struct ManualGuard {
    live: Arc<AtomicUsize>,
}

impl Drop for ManualGuard {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

impl TimerBackend for ManualTimer {
    type Guard = ManualGuard;

    fn arm(&mut self, id: TimerId, period: Duration) -> ManualGuard {
        if let Ok(mut armed) = self.armed.lock() {
            armed.push((id, period));
        }
        self.live.fetch_add(1, Ordering::SeqCst);
        ManualGuard { live: Arc::clone(&self.live) }
    }
}

/// Shortest period a [`TokioTimer`] will arm; `tokio::time::interval` rejects zero
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Tokio-driven backend delivering ticks on a channel
///
/// Every armed timer is a spawned task; its first tick comes one full
/// period after arming.
#[derive(Debug, Clone)]
pub struct TokioTimer {
    runtime: Handle,
    ticks: mpsc::UnboundedSender<TimerId>,
}

impl TokioTimer {
    pub fn new(runtime: Handle, ticks: mpsc::UnboundedSender<TimerId>) -> Self {
        Self { runtime, ticks }
    }

    /// Backend bound to the current runtime, plus the receiving end of its ticks
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<TimerId>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(Handle::current(), tx), rx)
    }
}

/// Guard for [`TokioTimer`]; aborts the ticking task on drop
#[derive(Debug)]
pub struct TokioTimerGuard {
    id: TimerId,
    task: JoinHandle<()>,
}

impl Drop for TokioTimerGuard {
    fn drop(&mut self) {
        trace!("Cancelling {}", self.id);
        self.task.abort();
    }
}

impl TimerBackend for TokioTimer {
    type Guard = TokioTimerGuard;

    fn arm(&mut self, id: TimerId, period: Duration) -> TokioTimerGuard {
        let ticks = self.ticks.clone();
        let task = self.runtime.spawn(async move {
            let period = period.max(MIN_PERIOD);
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if ticks.send(id).is_err() {
                    break;
                }
            }
        });
        TokioTimerGuard { id, task }
    }
}
