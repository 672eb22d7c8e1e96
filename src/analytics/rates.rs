use crate::error::{AnalyticsError, Result};
use crate::word::WordRecord;

/// Number of attempts a word needed before it was written correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TryBucket {
    First,
    Second,
    Third,
    MoreThanThree,
}

impl TryBucket {
    pub const ALL: [TryBucket; 4] = [
        TryBucket::First,
        TryBucket::Second,
        TryBucket::Third,
        TryBucket::MoreThanThree,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TryBucket::First => "1",
            TryBucket::Second => "2",
            TryBucket::Third => "3",
            TryBucket::MoreThanThree => "3+",
        }
    }

    pub fn count_for(&self, record: &WordRecord) -> u32 {
        match self {
            TryBucket::First => record.correct_on_first_try,
            TryBucket::Second => record.correct_on_second_try,
            TryBucket::Third => record.correct_on_third_try,
            TryBucket::MoreThanThree => record.correct_after_multiple_tries,
        }
    }
}

/// Percentage (0-100) of a word's occurrences that fell into `tries`.
///
/// Undefined for a word with no occurrences.
pub fn success_rate(record: &WordRecord, tries: TryBucket) -> Result<f64> {
    if record.total_occurrences == 0 {
        return Err(AnalyticsError::DivisionUndefined {
            word: record.word.clone(),
        });
    }
    Ok(tries.count_for(record) as f64 / record.total_occurrences as f64 * 100.0)
}

/// Success rate for every bucket, in bucket order.
pub fn success_breakdown(record: &WordRecord) -> Result<Vec<(TryBucket, f64)>> {
    TryBucket::ALL
        .iter()
        .map(|bucket| success_rate(record, *bucket).map(|rate| (*bucket, rate)))
        .collect()
}
