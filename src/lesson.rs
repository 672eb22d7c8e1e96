use crate::word::Difficulty;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Allowed gap between the stored accuracy and the one recomputed from the
/// counters. Fixture values are rounded independently.
const ACCURACY_TOLERANCE: f64 = 1.0;

/// Summary statistics for one completed practice session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonRecord {
    pub lesson_id: String,
    pub lesson_title: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub completed_at: DateTime<Utc>,
    pub total_words: u32,
    pub correct_words: u32,
    pub accuracy: f64,
    pub average_tries_per_word: f64,
    pub time_spent: u32,
}

impl LessonRecord {
    /// Accuracy recomputed from the counters, `None` for an empty lesson.
    pub fn computed_accuracy(&self) -> Option<f64> {
        if self.total_words == 0 {
            None
        } else {
            Some(self.correct_words as f64 / self.total_words as f64 * 100.0)
        }
    }

    pub fn is_consistent(&self) -> bool {
        if self.correct_words > self.total_words {
            return false;
        }
        match self.computed_accuracy() {
            Some(computed) => (computed - self.accuracy).abs() <= ACCURACY_TOLERANCE,
            None => self.accuracy == 0.0,
        }
    }
}
