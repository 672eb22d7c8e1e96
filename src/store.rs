use crate::error::Result;
use crate::fixtures;
use crate::lesson::LessonRecord;
use crate::stats::OverallStats;
use crate::word::WordRecord;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk layout of a fixture snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub words: Vec<WordRecord>,
    pub lessons: Vec<LessonRecord>,
    pub overall_stats: OverallStats,
}

/// Immutable, fully populated analytics snapshot.
///
/// Built once and shared by reference; there is no mutation API.
#[derive(Debug, Clone)]
pub struct AnalyticsStore {
    words: Vec<WordRecord>,
    lessons: Vec<LessonRecord>,
    overall: OverallStats,
}

impl AnalyticsStore {
    pub fn new(words: Vec<WordRecord>, lessons: Vec<LessonRecord>, overall: OverallStats) -> Self {
        for record in words.iter().filter(|w| !w.is_partition_consistent()) {
            warn!(
                "Word '{}' has {} occurrences but its attempt counters sum to {}",
                record.word,
                record.total_occurrences,
                record.attempts_total()
            );
        }
        for record in lessons.iter().filter(|l| !l.is_consistent()) {
            warn!(
                "Lesson '{}' is inconsistent: {}/{} correct, accuracy {:.1}%",
                record.lesson_id, record.correct_words, record.total_words, record.accuracy
            );
        }

        debug!(
            "Analytics store loaded with {} words and {} lessons",
            words.len(),
            lessons.len()
        );

        AnalyticsStore {
            words,
            lessons,
            overall,
        }
    }

    /// The mock snapshot shipped with the dashboard.
    pub fn sample() -> Self {
        Self::new(
            fixtures::sample_words(),
            fixtures::sample_lessons(),
            fixtures::sample_overall_stats(),
        )
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self::new(snapshot.words, snapshot.lessons, snapshot.overall_stats)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading fixture snapshot from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            words: self.words.clone(),
            lessons: self.lessons.clone(),
            overall_stats: self.overall.clone(),
        }
    }

    /// Word records in fixture order.
    pub fn words(&self) -> &[WordRecord] {
        &self.words
    }

    /// Lesson records in fixture order.
    pub fn lessons(&self) -> &[LessonRecord] {
        &self.lessons
    }

    pub fn overall_stats(&self) -> &OverallStats {
        &self.overall
    }

    pub fn find_word(&self, word: &str) -> Option<&WordRecord> {
        self.words.iter().find(|w| w.word == word)
    }
}
