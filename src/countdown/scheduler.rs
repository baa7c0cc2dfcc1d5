//! Periodic countdown towards a fixed launch instant.
//!
//! A run is a spawned tokio task that wakes on a fixed interval,
//! recomputes the remaining time against a target fixed at start, stores it
//! in a `watch` channel and hands it to the caller's callback. The
//! `CountdownHandle` owns the task: stopping or dropping it cancels the
//! task. Each tick checks the cancellation flag and delivers its breakdown
//! while holding the delivery lock, and `stop` sets the flag under the same
//! lock, so once `stop` returns no tick is in flight and none can start.
//!
//! The callback must not stop its own handle; that would wait on the lock
//! the tick is holding.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::breakdown::TimeBreakdown;
use super::clock::{Clock, SystemClock};

/// Reference cadence: once per second
pub const DEFAULT_TICK_MS: u64 = 1_000;

/// Scheduler settings
#[derive(Debug, Clone)]
pub struct CountdownConfig {
    /// Tick cadence in milliseconds
    pub tick_interval_ms: u64,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_MS,
        }
    }
}

impl CountdownConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

/// A named timer shown on the site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchTimer {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub days_from_now: u32,
}

impl LaunchTimer {
    pub fn new(title: impl Into<String>, days_from_now: u32) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            days_from_now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Lifecycle of a scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Never started; breakdown is zero
    Idle,
    /// A run is ticking
    Running,
    /// The last run was cancelled
    Stopped,
}

/// Owner of one running countdown.
///
/// Dropping the handle stops the run.
pub struct CountdownHandle {
    day_offset: u32,
    target: DateTime<Utc>,
    cancelled: Arc<Mutex<bool>>,
    breakdown_rx: watch::Receiver<TimeBreakdown>,
    task: Option<JoinHandle<()>>,
}

impl CountdownHandle {
    /// Fix the target at `now + day_offset` days and spawn the tick task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(day_offset: u32, config: &CountdownConfig, clock: Arc<dyn Clock>, on_tick: F) -> Self
    where
        F: Fn(TimeBreakdown) + Send + 'static,
    {
        let now = clock.now();
        let target = now + chrono::Duration::days(i64::from(day_offset));
        let initial = TimeBreakdown::until(target, now);

        let (breakdown_tx, breakdown_rx) = watch::channel(initial);
        let cancelled = Arc::new(Mutex::new(false));
        let period = config.tick_interval();

        tracing::info!(
            "Countdown started: {} day(s), target {}",
            day_offset,
            target.to_rfc3339()
        );

        let task = tokio::spawn(run_ticks(
            target,
            period,
            clock,
            breakdown_tx,
            Arc::clone(&cancelled),
            on_tick,
        ));

        Self {
            day_offset,
            target,
            cancelled,
            breakdown_rx,
            task: Some(task),
        }
    }

    /// The breakdown computed by the most recent tick
    pub fn current_breakdown(&self) -> TimeBreakdown {
        *self.breakdown_rx.borrow()
    }

    /// Receiver that observes every breakdown update
    pub fn subscribe(&self) -> watch::Receiver<TimeBreakdown> {
        self.breakdown_rx.clone()
    }

    /// Resolve once the breakdown reaches zero (or the run is stopped)
    pub async fn wait_until_zero(&self) {
        let mut rx = self.breakdown_rx.clone();
        if let Err(e) = rx.wait_for(|b| b.is_zero()).await {
            tracing::debug!("Countdown ended before reaching zero: {}", e);
        };
    }

    pub fn day_offset(&self) -> u32 {
        self.day_offset
    }

    /// The fixed launch instant
    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    /// Launch date in long form, e.g. "January 15, 2024"
    pub fn launch_date_display(&self) -> String {
        self.target.format("%B %-d, %Y").to_string()
    }

    pub fn is_stopped(&self) -> bool {
        self.task.is_none()
    }

    /// Cancel the tick task. Calling it again is a no-op.
    ///
    /// Blocks until a tick that is already delivering has finished.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            *lock_flag(&self.cancelled) = true;
            task.abort();
            tracing::info!("Countdown stopped ({} day(s))", self.day_offset);
        }
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for CountdownHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountdownHandle")
            .field("day_offset", &self.day_offset)
            .field("target", &self.target)
            .field("stopped", &self.is_stopped())
            .finish()
    }
}

/// The flag stays meaningful if a callback panicked while holding the lock
fn lock_flag(flag: &Mutex<bool>) -> MutexGuard<'_, bool> {
    flag.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Tick loop; runs until the handle cancels it
async fn run_ticks<F>(
    target: DateTime<Utc>,
    period: Duration,
    clock: Arc<dyn Clock>,
    breakdown_tx: watch::Sender<TimeBreakdown>,
    cancelled: Arc<Mutex<bool>>,
    on_tick: F,
) where
    F: Fn(TimeBreakdown) + Send + 'static,
{
    // First tick one period after start, like a browser interval
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut announced = false;

    loop {
        ticker.tick().await;

        // Held until the callback returns; no await below this point
        let guard = lock_flag(&cancelled);
        if *guard {
            break;
        }

        let distance_ms = (target - clock.now()).num_milliseconds();
        let breakdown = TimeBreakdown::from_millis(distance_ms);

        if distance_ms <= 0 && !announced {
            tracing::info!("Countdown reached zero (target {})", target.to_rfc3339());
            announced = true;
        }

        breakdown_tx.send_replace(breakdown);
        on_tick(breakdown);
        drop(guard);
    }
}

/// Start a countdown on the system clock with the default cadence
pub fn start_countdown<F>(day_offset: u32, on_tick: F) -> CountdownHandle
where
    F: Fn(TimeBreakdown) + Send + 'static,
{
    CountdownHandle::spawn(day_offset, &CountdownConfig::default(), Arc::new(SystemClock), on_tick)
}

/// Keeps at most one countdown running and restarts it when the offset changes.
pub struct CountdownScheduler {
    config: CountdownConfig,
    clock: Arc<dyn Clock>,
    run: Option<CountdownHandle>,
}

impl CountdownScheduler {
    /// Scheduler on the system clock with default settings
    pub fn new() -> Self {
        Self::with_config(CountdownConfig::default())
    }

    pub fn with_config(config: CountdownConfig) -> Self {
        Self {
            config,
            clock: Arc::new(SystemClock),
            run: None,
        }
    }

    /// Replace the clock (takes effect on the next start)
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &CountdownConfig {
        &self.config
    }

    /// Start counting down `day_offset` days from now.
    ///
    /// A running countdown with the same offset is left alone (the callback
    /// passed here is then dropped). Any other offset stops the current run
    /// and starts a new one against a freshly computed target.
    pub fn start<F>(&mut self, day_offset: u32, on_tick: F) -> &CountdownHandle
    where
        F: Fn(TimeBreakdown) + Send + 'static,
    {
        match self.run.take() {
            Some(run) if !run.is_stopped() && run.day_offset() == day_offset => {
                tracing::debug!("Countdown already running with {} day(s)", day_offset);
                &*self.run.insert(run)
            }
            previous => {
                if let Some(mut run) = previous {
                    run.stop();
                }
                let handle = CountdownHandle::spawn(day_offset, &self.config, Arc::clone(&self.clock), on_tick);
                &*self.run.insert(handle)
            }
        }
    }

    /// Stop the current run, if any. Idempotent.
    pub fn stop(&mut self) {
        if let Some(run) = self.run.as_mut() {
            run.stop();
        }
    }

    pub fn state(&self) -> SchedulerState {
        match &self.run {
            None => SchedulerState::Idle,
            Some(run) if run.is_stopped() => SchedulerState::Stopped,
            Some(_) => SchedulerState::Running,
        }
    }

    /// Latest breakdown; zero while idle
    pub fn breakdown(&self) -> TimeBreakdown {
        self.run
            .as_ref()
            .map(CountdownHandle::current_breakdown)
            .unwrap_or(TimeBreakdown::ZERO)
    }

    pub fn handle(&self) -> Option<&CountdownHandle> {
        self.run.as_ref()
    }
}

impl Default for CountdownScheduler {
    fn default() -> Self {
        Self::new()
    }
}
