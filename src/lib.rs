//! folio - Content discovery and launch countdowns for a portfolio site
//!
//! The site itself is static markup; this crate holds the little logic
//! behind it.
//!
//! # Modules
//!
//! - `catalog`: Immutable article index (ContentItem, ContentIndex)
//! - `discovery`: Search and category filtering (FilterState, filter, BlogView)
//! - `countdown`: Cancellable launch timers (TimeBreakdown, CountdownScheduler)
//! - `config`: Layered configuration
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Search the blog
//! folio posts --search terraform
//!
//! # Narrow to one category
//! folio posts --category Kubernetes
//!
//! # Count down to the configured launches
//! folio countdown
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod countdown;
pub mod discovery;

// Re-export main types at crate root for convenience
pub use catalog::{CatalogError, ContentId, ContentIndex, ContentItem};
pub use countdown::{
    start_countdown, CountdownHandle, CountdownScheduler, SchedulerState, TimeBreakdown,
};
pub use discovery::{filter, BlogView, FilterEngine, FilterState};
