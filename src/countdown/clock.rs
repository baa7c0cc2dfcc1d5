//! Wall-clock sources for the scheduler.

use chrono::{DateTime, Duration, Utc};

/// Source of "now"
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Wall clock driven by the tokio time source.
///
/// Anchored to a wall-clock instant at construction and advanced by
/// `tokio::time::Instant`, so a paused runtime (`tokio::time::pause`,
/// `start_paused`) moves it together with the tick timer.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeClock {
    wall_origin: DateTime<Utc>,
    origin: tokio::time::Instant,
}

impl RuntimeClock {
    pub fn new() -> Self {
        Self::anchored(Utc::now())
    }

    /// Start counting from an explicit wall-clock instant
    pub fn anchored(wall_origin: DateTime<Utc>) -> Self {
        Self {
            wall_origin,
            origin: tokio::time::Instant::now(),
        }
    }
}

impl Default for RuntimeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for RuntimeClock {
    fn now(&self) -> DateTime<Utc> {
        let elapsed = self.origin.elapsed();
        self.wall_origin + Duration::milliseconds(elapsed.as_millis() as i64)
    }
}
