//! Content discovery.
//!
//! Narrows the catalog down to what a reader is looking for:
//! - `filter`: free-text search AND exact category selection
//! - `FilterEngine`: the same, memoized on the last input pair
//! - `BlogView`: featured articles, filtered results and category chips

pub mod filter;
pub mod view;

pub use filter::{filter, FilterEngine, FilterState};
pub use view::BlogView;
