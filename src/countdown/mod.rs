//! Launch countdowns.
//!
//! - `TimeBreakdown`: days/hours/minutes/seconds left, zero once passed
//! - `Clock`: where "now" comes from (system, or tokio-driven for tests)
//! - `CountdownScheduler` / `CountdownHandle`: cancellable once-per-tick
//!   recomputation against a target fixed at start

pub mod breakdown;
pub mod clock;
pub mod scheduler;

pub use breakdown::TimeBreakdown;
pub use clock::{Clock, RuntimeClock, SystemClock};
pub use scheduler::{
    start_countdown, CountdownConfig, CountdownHandle, CountdownScheduler, LaunchTimer, SchedulerState,
    DEFAULT_TICK_MS,
};
