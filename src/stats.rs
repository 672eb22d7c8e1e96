use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate snapshot of lifetime learning progress.
///
/// Supplied independently of the word and lesson collections; see
/// `analytics::summary::derive_overall_stats` for a view computed from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    pub total_words_encountered: u32,
    pub total_lessons_completed: u32,
    pub overall_accuracy: f64,
    pub average_tries_per_word: f64,
    /// Seconds.
    pub total_study_time: u64,
    pub improving_words: u32,
    pub struggling_words: u32,
    pub mastered_words: u32,
    pub streak_days: u32,
    #[serde(default)]
    pub last_study_date: Option<DateTime<Utc>>,
}
