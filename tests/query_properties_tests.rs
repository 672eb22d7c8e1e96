use dictation_analytics::analytics::{
    CategoryFilter, DifficultyFilter, QueryParams, SortField, SortOrder, select,
};
use dictation_analytics::fixtures::synthetic_words;
use dictation_analytics::word::{Difficulty, WordRecord};
use std::cmp::Ordering;

const SEEDS: [u64; 5] = [1, 7, 42, 1234, 98765];

fn parameter_grid() -> Vec<QueryParams> {
    let searches = ["", "a", "KA", "de", "zzz-no-match"];
    let categories = [
        CategoryFilter::All,
        CategoryFilter::Only("academic".to_string()),
        CategoryFilter::Only("travel".to_string()),
    ];
    let difficulties = [
        DifficultyFilter::All,
        DifficultyFilter::Only(Difficulty::Easy),
        DifficultyFilter::Only(Difficulty::Hard),
    ];

    let mut grid = Vec::new();
    for search in searches {
        for category in &categories {
            for difficulty in difficulties {
                for field in SortField::ALL {
                    for order in [SortOrder::Asc, SortOrder::Desc] {
                        grid.push(QueryParams {
                            search_term: search.to_string(),
                            category: category.clone(),
                            difficulty,
                            sort_field: field,
                            sort_order: order,
                        });
                    }
                }
            }
        }
    }
    grid
}

fn position(records: &[WordRecord], record: &WordRecord) -> usize {
    records
        .iter()
        .position(|r| r.word == record.word)
        .expect("selected record must come from the input")
}

#[test]
fn test_every_selected_record_passes_all_predicates() {
    for seed in SEEDS {
        let words = synthetic_words(seed, 60);
        for params in parameter_grid() {
            for record in select(&words, &params) {
                let search = params.search_term.to_lowercase();
                assert!(record.word.to_lowercase().contains(&search));
                match &params.category {
                    CategoryFilter::All => {}
                    CategoryFilter::Only(c) => assert_eq!(&record.category, c),
                }
                match params.difficulty {
                    DifficultyFilter::All => {}
                    DifficultyFilter::Only(d) => assert_eq!(record.difficulty, d),
                }
            }
        }
    }
}

#[test]
fn test_no_matching_record_is_dropped() {
    for seed in SEEDS {
        let words = synthetic_words(seed, 60);
        for params in parameter_grid() {
            let expected = words.iter().filter(|r| params.matches(r)).count();
            assert_eq!(select(&words, &params).len(), expected);
        }
    }
}

#[test]
fn test_adjacent_pairs_are_ordered_and_ties_are_stable() {
    for seed in SEEDS {
        let words = synthetic_words(seed, 60);
        for params in parameter_grid() {
            let selected = select(&words, &params);
            for pair in selected.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                let ordering = params.sort_field.compare(a, b);
                match params.sort_order {
                    SortOrder::Asc => assert_ne!(ordering, Ordering::Greater),
                    SortOrder::Desc => assert_ne!(ordering, Ordering::Less),
                }
                if ordering == Ordering::Equal {
                    assert!(position(&words, a) < position(&words, b));
                }
            }
        }
    }
}

/// Sort key read straight off the record, without going through `SortField::compare`.
enum Key<'a> {
    Number(f64),
    Text(&'a [u8]),
}

fn key<'a>(field: SortField, record: &'a WordRecord) -> Key<'a> {
    match field {
        SortField::Word => Key::Text(record.word.as_bytes()),
        SortField::Category => Key::Text(record.category.as_bytes()),
        SortField::TotalOccurrences => Key::Number(f64::from(record.total_occurrences)),
        SortField::CorrectOnFirstTry => Key::Number(f64::from(record.correct_on_first_try)),
        SortField::CorrectOnSecondTry => Key::Number(f64::from(record.correct_on_second_try)),
        SortField::CorrectOnThirdTry => Key::Number(f64::from(record.correct_on_third_try)),
        SortField::CorrectAfterMultipleTries => {
            Key::Number(f64::from(record.correct_after_multiple_tries))
        }
        SortField::AverageTriesToCorrect => Key::Number(record.average_tries_to_correct),
        SortField::LastEncountered => Key::Number(record.last_encountered.timestamp() as f64),
    }
}

/// Whether `a` may precede `b`, and whether the two keys tie.
fn in_order(field: SortField, order: SortOrder, a: &WordRecord, b: &WordRecord) -> (bool, bool) {
    match (key(field, a), key(field, b)) {
        (Key::Number(x), Key::Number(y)) => {
            let ordered = match order {
                SortOrder::Asc => x <= y,
                SortOrder::Desc => x >= y,
            };
            (ordered, x == y)
        }
        (Key::Text(x), Key::Text(y)) => {
            let ordered = match order {
                SortOrder::Asc => x <= y,
                SortOrder::Desc => x >= y,
            };
            (ordered, x == y)
        }
        _ => unreachable!("both records share one sort field"),
    }
}

#[test]
fn test_adjacent_pairs_are_ordered_by_raw_field_values() {
    for seed in SEEDS {
        let words = synthetic_words(seed, 60);
        for params in parameter_grid() {
            let selected = select(&words, &params);
            for pair in selected.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                let (ordered, tied) = in_order(params.sort_field, params.sort_order, a, b);
                assert!(
                    ordered,
                    "{:?} {:?}: '{}' placed before '{}'",
                    params.sort_field, params.sort_order, a.word, b.word
                );
                if tied {
                    assert!(position(&words, a) < position(&words, b));
                }
            }
        }
    }
}

#[test]
fn test_total_occurrences_desc_is_non_increasing() {
    for seed in SEEDS {
        let words = synthetic_words(seed, 60);
        let counts: Vec<u32> = select(&words, &QueryParams::default())
            .iter()
            .map(|w| w.total_occurrences)
            .collect();
        assert_eq!(counts.len(), words.len());
        assert!(counts.windows(2).all(|pair| pair[0] >= pair[1]));
    }
}

#[test]
fn test_select_is_idempotent() {
    for seed in SEEDS {
        let words = synthetic_words(seed, 60);
        for params in parameter_grid() {
            assert_eq!(select(&words, &params), select(&words, &params));
        }
    }
}

#[test]
fn test_no_match_search_is_always_empty() {
    for seed in SEEDS {
        let words = synthetic_words(seed, 60);
        let params = QueryParams {
            search_term: "zzz-no-match".to_string(),
            ..QueryParams::default()
        };
        assert!(select(&words, &params).is_empty());
    }
}
