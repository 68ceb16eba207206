// tests/unit_reviews.rs
use std::fs;

use larder_core::reviews::{Rating, Review, ReviewLog};

fn rating(v: i64) -> Rating {
    Rating::try_from(v).unwrap()
}

#[test]
fn test_missing_log_reads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let log = ReviewLog::new(dir.path().join("reviews.csv"));
    assert!(log.read().unwrap().is_empty());
    assert!(log.aggregate().unwrap().is_empty());
}

#[test]
fn test_append_writes_header_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("reviews.csv");
    let log = ReviewLog::new(&path);

    log.append(&Review::new("Soup", rating(5), "lovely")).unwrap();
    log.append(&Review::new("Soup", rating(2), "too salty, honestly")).unwrap();
    log.append(&Review::new("Salad", rating(4), "")).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.matches("Recipe,Rating,Review").count(), 1);
    assert!(text.starts_with("Recipe,Rating,Review\n"));

    let reviews = log.read().unwrap();
    assert_eq!(reviews.len(), 3);
    assert_eq!(reviews[1].comment, "too salty, honestly");
    assert_eq!(reviews[2].recipe, "Salad");
}

#[test]
fn test_aggregate_means_from_log() {
    let dir = tempfile::tempdir().unwrap();
    let log = ReviewLog::new(dir.path().join("reviews.csv"));
    for (title, r) in [("Soup", 5), ("Soup", 4), ("Soup", 3), ("Salad", 1)] {
        log.append(&Review::new(title, rating(r), "")).unwrap();
    }

    let agg = log.aggregate().unwrap();
    assert_eq!(agg.mean("Soup"), Some(4.0));
    assert_eq!(agg.count("Soup"), 3);
    assert_eq!(agg.mean("Salad"), Some(1.0));
    assert_eq!(agg.mean("Stew"), None);
}

#[test]
fn test_existing_log_without_comment_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reviews.csv");
    fs::write(&path, "Recipe,Rating,Review\nSoup,3,\n").unwrap();
    let reviews = ReviewLog::new(&path).read().unwrap();
    assert_eq!(reviews, vec![Review::new("Soup", rating(3), "")]);
}

#[test]
fn test_corrupt_log_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reviews.csv");
    fs::write(&path, "Recipe,Rating,Review\nSoup,ten,\n").unwrap();
    let err = ReviewLog::new(&path).read().unwrap_err();
    assert!(err.to_string().contains("reviews.csv"), "{err}");
}
