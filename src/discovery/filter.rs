//! Search and category filtering.
//!
//! `filter` is a pure function of its inputs. `FilterEngine` wraps it with
//! a one-entry cache for callers that re-render on every input event.

use serde::{Deserialize, Serialize};

use crate::catalog::ContentItem;

/// Current search / category selection for one view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text search; empty means no search constraint
    #[serde(default)]
    pub search_term: String,

    /// Exact category label; `None` means no category constraint
    #[serde(default)]
    pub selected_category: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.selected_category = Some(category.into());
        self
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn select_category(&mut self, category: Option<String>) {
        self.selected_category = category;
    }

    /// Reset both inputs
    pub fn clear(&mut self) {
        self.search_term.clear();
        self.selected_category = None;
    }

    /// Whether any predicate is in effect
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty() || self.selected_category.is_some()
    }
}

/// Case-insensitive substring match against title, excerpt and categories.
///
/// `needle` must already be lowercased.
fn matches_search(item: &ContentItem, needle: &str) -> bool {
    item.title.to_lowercase().contains(needle)
        || item.excerpt.to_lowercase().contains(needle)
        || item
            .categories
            .iter()
            .any(|c| c.to_lowercase().contains(needle))
}

/// Retain the items that satisfy every active predicate, in input order
pub fn filter<'a>(items: &'a [ContentItem], state: &FilterState) -> Vec<&'a ContentItem> {
    matching_positions(items, state)
        .into_iter()
        .map(|i| &items[i])
        .collect()
}

fn matching_positions(items: &[ContentItem], state: &FilterState) -> Vec<usize> {
    let needle = state.search_term.to_lowercase();
    let category = state.selected_category.as_deref();

    items
        .iter()
        .enumerate()
        .filter(|(_, item)| needle.is_empty() || matches_search(item, &needle))
        .filter(|(_, item)| category.map_or(true, |c| item.has_category(c)))
        .map(|(i, _)| i)
        .collect()
}

/// Memoizing wrapper around [`filter`].
///
/// Remembers the last `(items, state)` pair by value and the positions it
/// produced; an unchanged pair is answered without re-scanning.
#[derive(Debug, Default)]
pub struct FilterEngine {
    last: Option<CachedResult>,
}

#[derive(Debug)]
struct CachedResult {
    items: Vec<ContentItem>,
    state: FilterState,
    positions: Vec<usize>,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same contract as [`filter`]
    pub fn apply<'a>(&mut self, items: &'a [ContentItem], state: &FilterState) -> Vec<&'a ContentItem> {
        if let Some(cached) = &self.last {
            if cached.state == *state && cached.items.as_slice() == items {
                tracing::debug!("Filter cache hit ({} results)", cached.positions.len());
                return cached.positions.iter().map(|&i| &items[i]).collect();
            }
        }

        let positions = matching_positions(items, state);
        let result: Vec<&ContentItem> = positions.iter().map(|&i| &items[i]).collect();

        tracing::debug!(
            "Filtered {} items to {} (search={:?}, category={:?})",
            items.len(),
            result.len(),
            state.search_term,
            state.selected_category
        );

        self.last = Some(CachedResult {
            items: items.to_vec(),
            state: state.clone(),
            positions,
        });

        result
    }

    /// Drop the cached result
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}
