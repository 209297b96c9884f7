//! Services over marks loaded from GPX files.

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::time::{Duration, SystemTime};

use markcalc::models::{CourseMarkRef, MarkTag, Rounding};
use markcalc::services::{build_course, calculate_pair, combined_tags, total_distance, CalculationError};
use markcalc::store::{self, GpxFileStore, InMemoryMarkStore, MarkStore, ReloadPolicy};

mod support;

#[tokio::test]
async fn test_fixture_loads_in_file_order() {
    let marks = support::fixture_store().load().await.unwrap();

    let ids: Vec<&str> = marks.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["1A", "2A", "3A", "2B", "4E", "4W"]);
    assert_eq!(marks[5].symbol.code(), "");
}

#[tokio::test]
async fn test_zone_queries_over_fixture() {
    let marks = support::fixture_store().load().await.unwrap();

    let zones: Vec<char> = store::zones(&marks).into_iter().collect();
    assert_eq!(zones, vec!['1', '2', '3', '4']);

    assert!(store::filter_by_zone(&marks, &BTreeSet::new()).is_empty());

    let selected: BTreeSet<char> = ['1', '2'].into_iter().collect();
    let filtered = store::filter_by_zone(&marks, &selected);
    assert_eq!(filtered.len(), 3);
    assert!(filtered.iter().all(|m| m.id.starts_with('1') || m.id.starts_with('2')));
}

#[tokio::test]
async fn test_pair_and_course_agree() {
    let marks = support::fixture_store().load().await.unwrap();

    let pair = calculate_pair(&marks, "2A", "3A").unwrap();
    let legs = build_course(
        &marks,
        &[CourseMarkRef::new("2A", Rounding::Port), CourseMarkRef::starboard("3A")],
    )
    .unwrap();

    assert_eq!(legs[0].bearing, pair.bearing);
    assert_eq!(legs[0].distance, pair.distance);
    assert_eq!(legs[0].from.rounding, Rounding::Port);
    assert_eq!(legs[0].to.rounding, Rounding::Starboard);
}

#[tokio::test]
async fn test_course_over_every_fixture_mark() {
    let marks = support::fixture_store().load().await.unwrap();
    let course: Vec<CourseMarkRef> = marks.iter().map(|m| CourseMarkRef::starboard(m.id.clone())).collect();

    let legs = build_course(&marks, &course).unwrap();
    assert_eq!(legs.len(), marks.len() - 1);
    assert!(legs.iter().all(|l| (0.0..360.0).contains(&l.bearing)));
    assert!(legs.iter().all(|l| l.distance >= 0.0));

    let tags = combined_tags(&legs);
    assert_eq!(tags.get("1A"), Some(&MarkTag::Start));
    assert_eq!(tags.get("4W"), Some(&MarkTag::Finish));

    let sum: f64 = legs.iter().map(|l| l.distance).sum();
    assert!((total_distance(&legs) - sum).abs() < 0.01);
}

#[tokio::test]
async fn test_missing_mark_is_named() {
    let marks = support::fixture_store().load().await.unwrap();
    let err = build_course(&marks, &[CourseMarkRef::starboard("1a"), CourseMarkRef::starboard("2A")]).unwrap_err();

    // ids are case-sensitive
    assert_eq!(err, CalculationError::MarkNotFound("1a".to_string()));
}

#[tokio::test]
async fn test_reload_always_sees_edits() {
    let file = support::write_gpx(&support::gpx_document(&[("1A", 50.0, -1.0)]));
    let store = GpxFileStore::new(file.path(), ReloadPolicy::Always);
    assert_eq!(store.load().await.unwrap().len(), 1);

    fs::write(
        file.path(),
        support::gpx_document(&[("1A", 50.0, -1.0), ("1B", 50.1, -1.0)]),
    )
    .unwrap();
    assert_eq!(store.load().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_reload_on_change_follows_modification_time() {
    let file = support::write_gpx(&support::gpx_document(&[("1A", 50.0, -1.0)]));
    let store = GpxFileStore::new(file.path(), ReloadPolicy::OnChange);
    assert_eq!(store.load().await.unwrap().len(), 1);

    fs::write(
        file.path(),
        support::gpx_document(&[("1A", 50.0, -1.0), ("1B", 50.1, -1.0)]),
    )
    .unwrap();
    File::options()
        .write(true)
        .open(file.path())
        .unwrap()
        .set_modified(SystemTime::now() + Duration::from_secs(60))
        .unwrap();

    let marks = store.load().await.unwrap();
    assert_eq!(marks.len(), 2);
    assert_eq!(marks[1].id, "1B");
}

#[tokio::test]
async fn test_in_memory_store_matches_file_store() {
    let from_file = support::fixture_store().load().await.unwrap();
    let memory = InMemoryMarkStore::new(from_file.clone());

    assert_eq!(memory.load().await.unwrap(), from_file);
}
