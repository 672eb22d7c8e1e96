use dictation_analytics::analytics::{
    Analytics, QueryParams, TryBucket, distinct_categories, select, success_rate,
};
use dictation_analytics::dashboard::{DashboardState, DashboardView};
use dictation_analytics::error::AnalyticsError;
use dictation_analytics::store::AnalyticsStore;
use dictation_analytics::time_format::format_duration;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

fn names(selected: &[&dictation_analytics::word::WordRecord]) -> Vec<String> {
    selected.iter().map(|w| w.word.clone()).collect()
}

#[test]
fn test_end_to_end_search_category_difficulty_sort() {
    let store = AnalyticsStore::sample();
    let params = QueryParams::parse("e", "academic", "medium", "totalOccurrences", "desc").unwrap();

    let selected = select(store.words(), &params);

    // necessary also contains "e" but is hard
    assert_eq!(
        names(&selected),
        vec!["development", "technology", "environment"]
    );
}

#[test]
fn test_filter_emptiness() {
    let store = AnalyticsStore::sample();
    let params = QueryParams::parse("zzz-no-match", "all", "all", "word", "asc").unwrap();
    assert!(select(store.words(), &params).is_empty());
}

#[test]
fn test_duration_literal_cases() {
    assert_eq!(format_duration(8640).unwrap(), "2h 24m");
    assert_eq!(format_duration(420).unwrap(), "7m");
    assert_eq!(format_duration(0).unwrap(), "0m");
    assert!(matches!(
        format_duration(-60),
        Err(AnalyticsError::InvalidDuration(-60))
    ));
}

#[test]
fn test_store_durations_render() {
    let store = AnalyticsStore::sample();
    assert_eq!(
        format_duration(store.overall_stats().total_study_time as i64).unwrap(),
        "2h 24m"
    );
    let lesson_times: Vec<String> = store
        .lessons()
        .iter()
        .map(|l| format_duration(l.time_spent as i64).unwrap())
        .collect();
    assert_eq!(lesson_times, vec!["7m", "11m", "9m", "8m"]);
}

#[test]
fn test_success_rate_for_the() {
    let store = AnalyticsStore::sample();
    let the = store.find_word("the").unwrap();
    let rate = success_rate(the, TryBucket::First).unwrap();
    assert!((rate - 77.8).abs() < 0.1);
}

#[test]
fn test_sample_fixture_invariants() {
    let store = AnalyticsStore::sample();
    for word in store.words() {
        assert_eq!(
            word.total_occurrences,
            word.correct_on_first_try
                + word.correct_on_second_try
                + word.correct_on_third_try
                + word.correct_after_multiple_tries,
            "partition mismatch for {}",
            word.word
        );
    }
    for lesson in store.lessons() {
        assert!(lesson.correct_words <= lesson.total_words);
        assert!(lesson.is_consistent());
    }
}

#[test]
fn test_categories_cover_every_word() {
    let store = AnalyticsStore::sample();
    let categories: HashSet<&str> = distinct_categories(store.words()).into_iter().collect();
    assert!(
        store
            .words()
            .iter()
            .all(|w| categories.contains(w.category.as_str()))
    );
    assert_eq!(categories.len(), 5);
}

#[test]
fn test_dashboard_flow() {
    let store = AnalyticsStore::sample();
    let mut state = DashboardState::new();

    state.switch_view(DashboardView::Words);
    state.set_params(QueryParams::parse("", "academic", "all", "word", "asc").unwrap());
    assert_eq!(
        names(&state.visible_words(&store)),
        vec!["development", "environment", "necessary", "technology"]
    );

    state.open_word(&store, "necessary").unwrap();
    let record = state.selected_record(&store).unwrap();
    assert_eq!(record.correct_on_first_try, 5);

    state.close_word();
    state.switch_view(DashboardView::Lessons);
    assert_eq!(state.active_view(), DashboardView::Lessons);
    assert!(state.selected_word().is_none());
}

#[test]
fn test_store_is_shareable_across_threads() {
    let store = Arc::new(AnalyticsStore::sample());
    let expected = names(&Analytics::new(&store).select(&QueryParams::default()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || names(&select(store.words(), &QueryParams::default())))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
