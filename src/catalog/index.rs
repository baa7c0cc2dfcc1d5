//! Immutable, ordered article index.
//!
//! The index owns the seed list. Every view it hands out is a fresh
//! `Vec` of borrowed items, so callers can never reorder or mutate the
//! catalog. Insertion order is the only ordering the index knows about.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;
use tokio::fs;

use super::item::{ContentId, ContentItem};
use super::seed;

/// Invariant violations detected while building an index
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate content id: {0}")]
    DuplicateId(ContentId),

    #[error("Duplicate slug: {0}")]
    DuplicateSlug(String),

    #[error("Item {0} has no categories")]
    NoCategories(ContentId),

    #[error("Item {id} lists category '{category}' more than once")]
    DuplicateCategory { id: ContentId, category: String },
}

/// Ordered, read-only collection of articles
#[derive(Debug, Clone)]
pub struct ContentIndex {
    items: Vec<ContentItem>,
}

impl ContentIndex {
    /// Build an index, validating item invariants
    pub fn new(items: Vec<ContentItem>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();

        for item in &items {
            if !ids.insert(&item.id) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
            if !slugs.insert(item.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(item.slug.clone()));
            }
            if item.categories.is_empty() {
                return Err(CatalogError::NoCategories(item.id.clone()));
            }

            let mut seen = HashSet::new();
            for category in &item.categories {
                if !seen.insert(category.as_str()) {
                    return Err(CatalogError::DuplicateCategory {
                        id: item.id.clone(),
                        category: category.clone(),
                    });
                }
            }
        }

        Ok(Self { items })
    }

    /// The built-in article list
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::new(seed::articles())
    }

    /// Load an index from a YAML (`.yaml`/`.yml`) or JSON catalog file
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
            .unwrap_or(false);

        let items: Vec<ContentItem> = if is_yaml {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse catalog YAML: {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse catalog JSON: {}", path.display()))?
        };

        let index = Self::new(items)
            .with_context(|| format!("Invalid catalog: {}", path.display()))?;

        tracing::debug!("Loaded {} articles from {}", index.len(), path.display());
        Ok(index)
    }

    /// All items in seed order
    pub fn all(&self) -> Vec<&ContentItem> {
        self.items.iter().collect()
    }

    /// All items as a slice, for feeding the filter engine
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Items flagged as featured, in seed order
    pub fn featured(&self) -> Vec<&ContentItem> {
        self.items.iter().filter(|item| item.featured).collect()
    }

    /// Items not flagged as featured, in seed order
    pub fn general(&self) -> Vec<&ContentItem> {
        self.items.iter().filter(|item| !item.featured).collect()
    }

    /// Distinct category labels in first-occurrence order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();

        self.items
            .iter()
            .flat_map(|item| item.categories.iter())
            .map(String::as_str)
            .filter(|category| seen.insert(*category))
            .collect()
    }

    /// The first `limit` distinct categories
    pub fn top_categories(&self, limit: usize) -> Vec<&str> {
        let mut categories = self.categories();
        categories.truncate(limit);
        categories
    }

    /// Get an item by ID
    pub fn get(&self, id: &ContentId) -> Option<&ContentItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Get an item by slug
    pub fn find_by_slug(&self, slug: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.slug == slug)
    }

    /// Get the number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
