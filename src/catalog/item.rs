//! Article records.
//!
//! A `ContentItem` is one entry of the catalog. Items are built once and
//! never mutated afterwards; the builder methods consume `self`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Opaque article identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

impl ContentId {
    /// Wrap an explicit identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive an identifier from a slug (SHA256(slug)[0:8], hex encoded)
    pub fn from_slug(slug: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(slug.as_bytes());
        let result = hasher.finalize();

        Self(hex::encode(&result[..8]))
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single article in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Unique identifier
    pub id: ContentId,

    /// Headline, searched case-insensitively
    pub title: String,

    /// URL key for the article page
    pub slug: String,

    /// Short summary, searched case-insensitively
    pub excerpt: String,

    /// Category labels in display order (first one is the primary badge)
    pub categories: Vec<String>,

    /// Publication date (display only)
    pub published_at: NaiveDate,

    /// Featured items are always shown, regardless of filters
    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub read_time_minutes: u32,

    #[serde(default)]
    pub image: Option<String>,

    /// Full article body; the excerpt stands in when absent
    #[serde(default)]
    pub content: Option<String>,
}

impl ContentItem {
    /// Create a new item; slug and id are derived from the title
    pub fn new(title: impl Into<String>, excerpt: impl Into<String>, published_at: NaiveDate) -> Self {
        let title = title.into();
        let slug = slugify(&title);

        Self {
            id: ContentId::from_slug(&slug),
            title,
            slug,
            excerpt: excerpt.into(),
            categories: Vec::new(),
            published_at,
            featured: false,
            author: String::new(),
            read_time_minutes: 0,
            image: None,
            content: None,
        }
    }

    /// Override the derived identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = ContentId::new(id);
        self
    }

    /// Override the derived slug (the id is left untouched)
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Add a category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Add multiple categories
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.categories.extend(categories.into_iter().map(Into::into));
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_read_time(mut self, minutes: u32) -> Self {
        self.read_time_minutes = minutes;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Article body, falling back to the excerpt
    pub fn body(&self) -> &str {
        self.content.as_deref().unwrap_or(&self.excerpt)
    }

    /// Mark the item as featured
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Primary category (the badge shown on cards)
    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }

    /// Whether the item carries exactly this category label
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Publication date in long form, e.g. "January 15, 2024"
    pub fn published_display(&self) -> String {
        self.published_at.format("%B %-d, %Y").to_string()
    }
}

/// Lowercase the input and join its alphanumeric runs with '-'
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_content_id_from_slug() {
        let id1 = ContentId::from_slug("terraform-guide");
        let id2 = ContentId::from_slug("terraform-guide");
        let id3 = ContentId::from_slug("k8s-security");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1.as_str().len(), 16); // 8 bytes = 16 hex chars
    }

    #[test]
    fn test_slugify() {
        assert_eq!(
            slugify("Infrastructure as Code: Terraform Best Practices"),
            "infrastructure-as-code-terraform-best-practices"
        );
        assert_eq!(slugify("Building CI/CD Pipelines"), "building-ci-cd-pipelines");
        assert_eq!(slugify("  --  "), "");
    }

    #[test]
    fn test_item_builder() {
        let item = ContentItem::new("Terraform Guide", "State and modules", date(2024, 1, 15))
            .with_categories(["Terraform", "AWS"])
            .with_author("Ops Team")
            .with_read_time(12)
            .featured();

        assert_eq!(item.slug, "terraform-guide");
        assert_eq!(item.id, ContentId::from_slug("terraform-guide"));
        assert_eq!(item.primary_category(), Some("Terraform"));
        assert!(item.has_category("AWS"));
        assert!(!item.has_category("aws"));
        assert!(item.featured);
        assert_eq!(item.read_time_minutes, 12);
    }

    #[test]
    fn test_explicit_id_survives_slug_override() {
        let item = ContentItem::new("Title", "Excerpt", date(2024, 1, 1))
            .with_id("1")
            .with_slug("custom");

        assert_eq!(item.id.as_str(), "1");
        assert_eq!(item.slug, "custom");
    }

    #[test]
    fn test_published_display() {
        let item = ContentItem::new("Title", "Excerpt", date(2024, 1, 5));
        assert_eq!(item.published_display(), "January 5, 2024");
    }

    #[test]
    fn test_item_deserializes_with_defaults() {
        let json = r#"{
            "id": "7",
            "title": "SLOs",
            "slug": "slos",
            "excerpt": "Error budgets",
            "categories": ["SRE"],
            "published_at": "2023-12-10"
        }"#;

        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id.as_str(), "7");
        assert_eq!(item.published_at, date(2023, 12, 10));
        assert!(!item.featured);
        assert!(item.image.is_none());
        assert!(item.content.is_none());
        assert_eq!(item.body(), "Error budgets");
    }

    #[test]
    fn test_body_prefers_content() {
        let item = ContentItem::new("Title", "Short", date(2024, 1, 1)).with_content("Long form");
        assert_eq!(item.body(), "Long form");
    }
}
