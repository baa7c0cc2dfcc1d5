//! Article catalog.
//!
//! Holds the canonical, immutable list of articles and the derived views
//! the site needs (distinct categories, featured articles, lookup by slug).
//!
//! # Catalog file format
//!
//! ```yaml
//! - id: "1"
//!   title: "Infrastructure as Code: Terraform Best Practices"
//!   slug: infrastructure-as-code-terraform-best-practices
//!   excerpt: Master Infrastructure as Code with Terraform...
//!   categories: [Terraform, IaC, AWS]
//!   published_at: 2024-01-15
//!   featured: true
//! ```

pub mod index;
pub mod item;
pub mod seed;

pub use index::{CatalogError, ContentIndex};
pub use item::{slugify, ContentId, ContentItem};
