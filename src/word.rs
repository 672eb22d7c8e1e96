use crate::error::AnalyticsError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(AnalyticsError::InvalidDifficulty(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImprovementTrend {
    Improving,
    Stable,
    Declining,
}

impl ImprovementTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImprovementTrend::Improving => "improving",
            ImprovementTrend::Stable => "stable",
            ImprovementTrend::Declining => "declining",
        }
    }
}

/// Performance statistics for one vocabulary word across all practice attempts.
///
/// `total_occurrences` is expected to equal the sum of the four
/// `correct_*` counters; see [`WordRecord::is_partition_consistent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRecord {
    pub word: String,
    pub total_occurrences: u32,
    pub correct_on_first_try: u32,
    pub correct_on_second_try: u32,
    pub correct_on_third_try: u32,
    pub correct_after_multiple_tries: u32,
    pub average_tries_to_correct: f64,
    pub difficulty: Difficulty,
    pub category: String,
    pub last_encountered: DateTime<Utc>,
    pub improvement_trend: ImprovementTrend,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

impl WordRecord {
    /// Sum of the per-attempt counters, widened so large counters cannot overflow.
    pub fn attempts_total(&self) -> u64 {
        u64::from(self.correct_on_first_try)
            + u64::from(self.correct_on_second_try)
            + u64::from(self.correct_on_third_try)
            + u64::from(self.correct_after_multiple_tries)
    }

    pub fn is_partition_consistent(&self) -> bool {
        u64::from(self.total_occurrences) == self.attempts_total()
    }
}
