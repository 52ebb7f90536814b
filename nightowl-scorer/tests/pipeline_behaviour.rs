//! Behaviour checks for the full search pipeline: inclusion, partial
//! failure tolerance, ordering, and cache integration.

use geo::Coord;
use nightowl_core::{
    Category, HoursData, MemoryCache, Place, SearchCache, SearchQuery,
    test_support::StaticSource,
};
use nightowl_scorer::{SearchError, SearchPipeline};
use rstest::{fixture, rstest};
use std::time::Duration;

const TODAY: u8 = 4;

#[fixture]
fn pipeline() -> SearchPipeline {
    SearchPipeline::new()
}

#[fixture]
fn query() -> SearchQuery {
    SearchQuery {
        origin: Coord {
            x: -122.4194,
            y: 37.7749,
        },
        radius_miles: 5.0,
    }
}

fn nearby(id: &str, name: &str, offset: f64) -> Place {
    // One hundredth of a degree of latitude is roughly 0.7 miles.
    Place::new(id, name, 37.7749 + offset, -122.4194)
}

fn all_night(id: &str, name: &str, offset: f64) -> Place {
    let mut place = nearby(id, name, offset);
    place.hours = Some(HoursData::from_display("Open 24 hours"));
    place
}

#[rstest]
fn gas_category_forces_inclusion_despite_unknown_hours(
    pipeline: SearchPipeline,
    query: SearchQuery,
) {
    let station = nearby("gas1", "Joe's Shell Station", 0.01);
    assert!(station.hours.is_none());
    let source = StaticSource::new().with_places(Category::Gas, vec![station]);
    let results = pipeline
        .run(&source, &query, TODAY, &[Category::Gas])
        .unwrap();
    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert!(!result.is_late_night);
    assert!(result.safety_rating >= 4);
    assert_eq!(result.todays_hours.display, "Hours unknown");
}

#[rstest]
fn daytime_food_without_evidence_is_filtered_out(
    pipeline: SearchPipeline,
    query: SearchQuery,
) {
    let mut cafe = nearby("food1", "Lunch Spot", 0.01);
    cafe.hours = Some(HoursData::from_display("Mon-Fri 11 AM - 3 PM"));
    // A display status other than CheckHours keeps the record, so use a
    // schedule-only daytime place for the negative case.
    let mut strictly_daytime = nearby("food2", "Morning Counter", 0.01);
    strictly_daytime.hours = None;
    let source = StaticSource::new()
        .with_places(Category::Food, vec![cafe, strictly_daytime]);
    let results = pipeline
        .run(&source, &query, TODAY, &[Category::Food])
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "food1");
}

#[rstest]
fn records_beyond_the_radius_are_dropped(pipeline: SearchPipeline, query: SearchQuery) {
    let faraway = all_night("far1", "Distant Diner", 2.0);
    let source = StaticSource::new().with_places(Category::Food, vec![faraway]);
    let results = pipeline
        .run(&source, &query, TODAY, &[Category::Food])
        .unwrap();
    assert!(results.is_empty());
}

#[rstest]
fn invalid_coordinates_drop_the_record_without_failing_the_run(
    pipeline: SearchPipeline,
    query: SearchQuery,
) {
    let mut broken = all_night("bad1", "Phantom Cafe", 0.0);
    broken.location.lat = Some(f64::NAN);
    broken.location.lng = Some(f64::NAN);
    let fine = all_night("ok1", "Real Cafe", 0.01);
    let source = StaticSource::new().with_places(Category::Coffee, vec![broken, fine]);
    let results = pipeline
        .run(&source, &query, TODAY, &[Category::Coffee])
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "ok1");
}

#[rstest]
fn equal_scores_sort_by_distance(pipeline: SearchPipeline, query: SearchQuery) {
    let farther = all_night("a", "Diner A", 0.03);
    let nearer = all_night("b", "Diner B", 0.01);
    let source = StaticSource::new().with_places(Category::Food, vec![farther, nearer]);
    let results = pipeline
        .run(&source, &query, TODAY, &[Category::Food])
        .unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].late_night_score, results[1].late_night_score);
    assert_eq!(results[0].id, "b");
    assert!(results[0].distance_miles < results[1].distance_miles);
}

#[rstest]
fn higher_scores_sort_first(pipeline: SearchPipeline, query: SearchQuery) {
    // The gas station outranks the entertainment venue on category base
    // alone, despite being farther away.
    let venue = all_night("venue", "Night Cinema", 0.01);
    let station = all_night("station", "Fuel Stop", 0.03);
    let source = StaticSource::new()
        .with_places(Category::Entertainment, vec![venue])
        .with_places(Category::Gas, vec![station]);
    let results = pipeline
        .run(
            &source,
            &query,
            TODAY,
            &[Category::Entertainment, Category::Gas],
        )
        .unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, "station");
}

#[rstest]
fn one_failed_category_does_not_abort_the_search(
    pipeline: SearchPipeline,
    query: SearchQuery,
) {
    let source = StaticSource::new()
        .with_places(Category::Food, vec![all_night("ok", "All Night Diner", 0.01)])
        .with_failure(Category::Pharmacy);
    let results = pipeline
        .run(&source, &query, TODAY, &[Category::Food, Category::Pharmacy])
        .unwrap();
    assert_eq!(results.len(), 1);
}

#[rstest]
fn all_failed_categories_surface_an_error(pipeline: SearchPipeline, query: SearchQuery) {
    let source = StaticSource::new()
        .with_failure(Category::Food)
        .with_failure(Category::Gas);
    let err = pipeline
        .run(&source, &query, TODAY, &[Category::Food, Category::Gas])
        .unwrap_err();
    assert_eq!(err, SearchError::AllCategoriesFailed { failed: 2 });
}

#[rstest]
fn empty_category_list_is_rejected(pipeline: SearchPipeline, query: SearchQuery) {
    let source = StaticSource::new();
    assert_eq!(
        pipeline.run(&source, &query, TODAY, &[]).unwrap_err(),
        SearchError::NoCategories,
    );
}

#[rstest]
fn zero_matches_with_a_successful_fetch_is_ok(pipeline: SearchPipeline, query: SearchQuery) {
    let source = StaticSource::new();
    let results = pipeline
        .run(&source, &query, TODAY, &[Category::Food])
        .unwrap();
    assert!(results.is_empty());
}

#[rstest]
fn cached_runs_skip_the_source(pipeline: SearchPipeline, query: SearchQuery) {
    let mut cache = MemoryCache::new();
    let source = StaticSource::new()
        .with_places(Category::Food, vec![all_night("ok", "All Night Diner", 0.01)]);
    let first = pipeline
        .run_cached(&mut cache, &source, &query, TODAY, &[Category::Food])
        .unwrap();
    assert_eq!(first.len(), 1);

    // A source that now fails everywhere proves the hit came from cache.
    let failing = StaticSource::new().with_failure(Category::Food);
    let second = pipeline
        .run_cached(&mut cache, &failing, &query, TODAY, &[Category::Food])
        .unwrap();
    assert_eq!(second, first);
}

#[rstest]
fn expired_cache_entries_fall_through_to_the_source(
    pipeline: SearchPipeline,
    query: SearchQuery,
) {
    let mut cache = MemoryCache::with_ttl(Duration::ZERO);
    let source = StaticSource::new()
        .with_places(Category::Food, vec![all_night("ok", "All Night Diner", 0.01)]);
    pipeline
        .run_cached(&mut cache, &source, &query, TODAY, &[Category::Food])
        .unwrap();

    let failing = StaticSource::new().with_failure(Category::Food);
    let err = pipeline
        .run_cached(&mut cache, &failing, &query, TODAY, &[Category::Food])
        .unwrap_err();
    assert_eq!(err, SearchError::AllCategoriesFailed { failed: 1 });
}

#[rstest]
fn record_category_codes_override_the_fetch_category(
    pipeline: SearchPipeline,
    query: SearchQuery,
) {
    // Foursquare code 17069 is the gas taxonomy entry.
    let mut station = all_night("mix1", "Corner Fuel", 0.01);
    station.category_ids = vec!["17069".to_owned()];
    let source = StaticSource::new().with_places(Category::Food, vec![station]);
    let results = pipeline
        .run(&source, &query, TODAY, &[Category::Food])
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].category, Category::Gas);
}
