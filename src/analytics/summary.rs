use crate::analytics::rates::{TryBucket, success_rate};
use crate::analytics::streak::streak_days;
use crate::lesson::LessonRecord;
use crate::stats::OverallStats;
use crate::word::{ImprovementTrend, WordRecord};
use chrono::NaiveDate;

/// First-try success rate at which a word counts as mastered.
pub const MASTERY_THRESHOLD_PERCENT: f64 = 80.0;

pub fn is_mastered(record: &WordRecord) -> bool {
    success_rate(record, TryBucket::First)
        .map(|rate| rate >= MASTERY_THRESHOLD_PERCENT)
        .unwrap_or(false)
}

/// Computes an [`OverallStats`] view from the collections instead of taking
/// the independently supplied value.
///
/// Empty collections yield zero rates rather than undefined ones.
pub fn derive_overall_stats(
    words: &[WordRecord],
    lessons: &[LessonRecord],
    today: NaiveDate,
) -> OverallStats {
    let lesson_total_words: u64 = lessons.iter().map(|l| l.total_words as u64).sum();
    let lesson_correct_words: u64 = lessons.iter().map(|l| l.correct_words as u64).sum();
    let overall_accuracy = if lesson_total_words > 0 {
        lesson_correct_words as f64 / lesson_total_words as f64 * 100.0
    } else {
        0.0
    };

    let occurrences: u64 = words.iter().map(|w| w.total_occurrences as u64).sum();
    let weighted_tries: f64 = words
        .iter()
        .map(|w| w.average_tries_to_correct * w.total_occurrences as f64)
        .sum();
    let average_tries_per_word = if occurrences > 0 {
        weighted_tries / occurrences as f64
    } else {
        0.0
    };

    let count_trend = |trend: ImprovementTrend| {
        words.iter().filter(|w| w.improvement_trend == trend).count() as u32
    };

    OverallStats {
        total_words_encountered: words.len() as u32,
        total_lessons_completed: lessons.len() as u32,
        overall_accuracy,
        average_tries_per_word,
        total_study_time: lessons.iter().map(|l| l.time_spent as u64).sum(),
        improving_words: count_trend(ImprovementTrend::Improving),
        struggling_words: count_trend(ImprovementTrend::Declining),
        mastered_words: words.iter().filter(|w| is_mastered(w)).count() as u32,
        streak_days: streak_days(lessons.iter().map(|l| l.completed_at.date_naive()), today),
        last_study_date: lessons.iter().map(|l| l.completed_at).max(),
    }
}
