//! Catalog Integration Tests
//!
//! Tests for the built-in catalog and loading catalogs from disk.

use folio::catalog::{CatalogError, ContentId, ContentIndex};
use tempfile::TempDir;

#[test]
fn test_seeded_catalog() {
    let index = ContentIndex::seeded().unwrap();

    assert_eq!(index.len(), 12);
    assert_eq!(index.featured().len(), 2);
    assert_eq!(index.general().len(), 10);

    let all = index.all();
    let first = all[0];
    assert_eq!(first.id, ContentId::new("1"));
    assert_eq!(first.published_display(), "January 15, 2024");
}

#[test]
fn test_seeded_categories_are_distinct_and_stable() {
    let index = ContentIndex::seeded().unwrap();
    let categories = index.categories();

    let mut deduped = categories.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), categories.len());

    assert_eq!(&categories[..4], &["Terraform", "IaC", "AWS", "CI/CD"]);
    assert_eq!(index.categories(), categories);
}

#[test]
fn test_find_by_slug() {
    let index = ContentIndex::seeded().unwrap();

    let item = index
        .find_by_slug("infrastructure-as-code-terraform-best-practices")
        .unwrap();
    assert_eq!(item.id.as_str(), "1");
    assert!(item.featured);

    assert!(index.find_by_slug("does-not-exist").is_none());
}

#[test]
fn test_seeded_article_body() {
    let index = ContentIndex::seeded().unwrap();

    let terraform = index
        .find_by_slug("infrastructure-as-code-terraform-best-practices")
        .unwrap();
    let content = terraform.content.as_deref().unwrap();
    assert!(content.starts_with("Infrastructure as Code (IaC) has revolutionized"));
    assert!(content.contains("dynamodb_table = \"terraform-locks\""));
    assert_eq!(terraform.body(), content);

    // Articles without a body fall back to their excerpt
    let kubernetes = index.find_by_slug("kubernetes-security-hardening-clusters").unwrap();
    assert!(kubernetes.content.is_none());
    assert_eq!(kubernetes.body(), kubernetes.excerpt);
}

#[test]
fn test_views_do_not_share_storage() {
    let index = ContentIndex::seeded().unwrap();

    let mut featured = index.featured();
    featured.clear();

    assert_eq!(index.featured().len(), 2);
}

#[tokio::test]
async fn test_load_yaml_catalog() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("posts.yaml");

    tokio::fs::write(
        &path,
        r#"
- id: "a"
  title: Terraform Guide
  slug: terraform-guide
  excerpt: Modules and state
  categories: [Terraform, AWS]
  published_at: 2024-01-15
  featured: true
  content: |
    Remote state first.
    Then modules.
- id: "b"
  title: K8s Security
  slug: k8s-security
  excerpt: RBAC
  categories: [Kubernetes]
  published_at: 2024-01-05
"#,
    )
    .await
    .unwrap();

    let index = ContentIndex::load(&path).await.unwrap();
    assert_eq!(index.len(), 2);
    assert_eq!(index.featured().len(), 1);
    assert_eq!(index.categories(), vec!["Terraform", "AWS", "Kubernetes"]);

    let guide = index.find_by_slug("terraform-guide").unwrap();
    assert_eq!(guide.content.as_deref(), Some("Remote state first.\nThen modules.\n"));
    assert!(index.find_by_slug("k8s-security").unwrap().content.is_none());
}

#[tokio::test]
async fn test_load_json_catalog() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("posts.json");

    let seeded = ContentIndex::seeded().unwrap();
    let json = serde_json::to_string(seeded.items()).unwrap();
    tokio::fs::write(&path, json).await.unwrap();

    let index = ContentIndex::load(&path).await.unwrap();
    assert_eq!(index.items(), seeded.items());
    assert!(index.all()[0].content.is_some());
}

#[tokio::test]
async fn test_load_rejects_invalid_catalog() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("posts.yaml");

    tokio::fs::write(
        &path,
        r#"
- id: "a"
  title: One
  slug: one
  excerpt: ""
  categories: []
  published_at: 2024-01-15
"#,
    )
    .await
    .unwrap();

    let err = ContentIndex::load(&path).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CatalogError>(),
        Some(CatalogError::NoCategories(_))
    ));
}

#[tokio::test]
async fn test_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let result = ContentIndex::load(&temp.path().join("missing.yaml")).await;

    assert!(result.is_err());
}
