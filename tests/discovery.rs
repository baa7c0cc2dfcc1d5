//! Discovery Integration Tests
//!
//! Filtering properties over fixture catalogs and the built-in one.

use chrono::NaiveDate;
use folio::catalog::{ContentIndex, ContentItem};
use folio::discovery::{filter, BlogView, FilterEngine, FilterState};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

/// The two-article fixture used throughout
fn fixture() -> Vec<ContentItem> {
    vec![
        ContentItem::new("Terraform Guide", "State management and modules", date())
            .with_id("1")
            .with_categories(["Terraform", "AWS"]),
        ContentItem::new("K8s Security", "RBAC and network policies", date())
            .with_id("2")
            .with_categories(["Kubernetes"]),
    ]
}

fn ids(items: &[&ContentItem]) -> Vec<String> {
    items.iter().map(|i| i.id.to_string()).collect()
}

#[test]
fn test_search_only() {
    let items = fixture();
    let state = FilterState::new().with_search("terra");

    assert_eq!(ids(&filter(&items, &state)), vec!["1"]);
}

#[test]
fn test_category_only() {
    let items = fixture();
    let state = FilterState::new().with_category("Kubernetes");

    assert_eq!(ids(&filter(&items, &state)), vec!["2"]);
}

#[test]
fn test_conjunction_can_be_empty() {
    let items = fixture();
    let state = FilterState::new()
        .with_search("terra")
        .with_category("Kubernetes");

    assert!(filter(&items, &state).is_empty());
}

#[test]
fn test_inactive_filter_is_identity() {
    let items = fixture();
    let result = filter(&items, &FilterState::default());

    assert_eq!(result.len(), items.len());
    for (filtered, original) in result.iter().zip(&items) {
        assert!(std::ptr::eq(*filtered, original));
    }

    let index = ContentIndex::seeded().unwrap();
    assert_eq!(filter(index.items(), &FilterState::new()), index.all());
}

#[test]
fn test_empty_items() {
    let state = FilterState::new().with_search("anything").with_category("AWS");
    assert!(filter(&[], &state).is_empty());
    assert!(filter(&[], &FilterState::new()).is_empty());
}

#[test]
fn test_search_membership_matches_definition() {
    let items = fixture();
    let terms = ["", "TERRA", "guide", "rbac", "aws", "kube", "policies", "zzz", "s s", "k8s"];

    for term in terms {
        let needle = term.to_lowercase();
        for item in &items {
            let expected = item.title.to_lowercase().contains(&needle)
                || item.excerpt.to_lowercase().contains(&needle)
                || item.categories.iter().any(|c| c.to_lowercase().contains(&needle));

            let single = std::slice::from_ref(item);
            let found = !filter(single, &FilterState::new().with_search(term)).is_empty();
            assert_eq!(found, expected, "term {:?} on {:?}", term, item.title);
        }
    }
}

#[test]
fn test_category_results_always_carry_category() {
    let index = ContentIndex::seeded().unwrap();

    for category in index.categories() {
        let state = FilterState::new().with_category(category);
        let result = filter(index.items(), &state);

        assert!(!result.is_empty(), "category {} should match its own items", category);
        assert!(result.iter().all(|item| item.categories.iter().any(|c| c == category)));
    }
}

#[test]
fn test_order_is_preserved() {
    let index = ContentIndex::seeded().unwrap();
    let result = filter(index.items(), &FilterState::new().with_category("AWS"));

    // Articles 1, 5 and 11 carry AWS, in seed order
    assert_eq!(ids(&result), vec!["1", "5", "11"]);
}

#[test]
fn test_unknown_category_is_empty_not_error() {
    let index = ContentIndex::seeded().unwrap();
    let state = FilterState::new().with_category("Mainframes");

    assert!(filter(index.items(), &state).is_empty());
}

#[test]
fn test_engine_agrees_with_filter() {
    let index = ContentIndex::seeded().unwrap();
    let mut engine = FilterEngine::new();

    let states = [
        FilterState::new(),
        FilterState::new().with_search("security"),
        FilterState::new().with_search("security"),
        FilterState::new().with_search("security").with_category("DevSecOps"),
        FilterState::new().with_category("Monitoring"),
    ];

    for state in &states {
        assert_eq!(engine.apply(index.items(), state), filter(index.items(), state));
    }
}

#[test]
fn test_blog_view_keeps_featured_unfiltered() {
    let index = ContentIndex::seeded().unwrap();
    let state = FilterState::new().with_category("Kubernetes");

    let view = BlogView::build(&index, &state, 6);

    // Featured articles don't carry Kubernetes but are still shown
    assert_eq!(ids(&view.featured), vec!["1", "2"]);
    assert_eq!(ids(&view.results), vec!["3", "6"]);
    assert_eq!(view.categories.len(), 6);
}

#[test]
fn test_blog_view_clear_restores_everything() {
    let index = ContentIndex::seeded().unwrap();
    let mut state = FilterState::new().with_search("nothing matches this");

    assert!(BlogView::build(&index, &state, 6).has_no_matches());

    state.clear();
    let view = BlogView::build(&index, &state, 6);
    assert!(!view.has_no_matches());
    assert_eq!(view.results.len(), index.general().len());
}
