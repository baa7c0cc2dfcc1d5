//! Composed blog page model.

use serde::Serialize;

use super::filter::{filter, FilterState};
use crate::catalog::{ContentIndex, ContentItem};

/// What the blog page renders for a given filter state.
///
/// Featured articles are never filtered. The result list is the filtered
/// catalog with featured articles removed, so a featured article that
/// matches the search still counts towards `has_no_matches` without being
/// listed twice.
#[derive(Debug, Clone, Serialize)]
pub struct BlogView<'a> {
    pub featured: Vec<&'a ContentItem>,
    pub results: Vec<&'a ContentItem>,
    pub categories: Vec<&'a str>,
    pub state: FilterState,
    match_count: usize,
}

impl<'a> BlogView<'a> {
    /// Build the view, offering the first `top_categories` categories as chips
    pub fn build(index: &'a ContentIndex, state: &FilterState, top_categories: usize) -> Self {
        let matched = filter(index.items(), state);
        let match_count = matched.len();
        let results = matched.into_iter().filter(|item| !item.featured).collect();

        Self {
            featured: index.featured(),
            results,
            categories: index.top_categories(top_categories),
            state: state.clone(),
            match_count,
        }
    }

    /// Number of catalog items matching the filters, featured included
    pub fn match_count(&self) -> usize {
        self.match_count
    }

    /// The "no articles found" state
    pub fn has_no_matches(&self) -> bool {
        self.match_count == 0
    }
}
