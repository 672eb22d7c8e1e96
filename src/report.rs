//! Plain-text rendering of the dashboard views.

use crate::analytics::rates::{TryBucket, success_breakdown, success_rate};
use crate::error::Result;
use crate::lesson::LessonRecord;
use crate::stats::OverallStats;
use crate::time_format::{format_duration, format_time_since};
use crate::word::{Difficulty, ImprovementTrend, WordRecord};
use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use std::fmt::Write;

/// Placeholder for a rate that cannot be computed.
pub const UNDEFINED_RATE: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccuracyBand {
    Strong,
    Fair,
    Weak,
}

impl AccuracyBand {
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 80.0 {
            AccuracyBand::Strong
        } else if percent >= 60.0 {
            AccuracyBand::Fair
        } else {
            AccuracyBand::Weak
        }
    }

    fn paint(&self, text: &str) -> ColoredString {
        match self {
            AccuracyBand::Strong => text.green(),
            AccuracyBand::Fair => text.yellow(),
            AccuracyBand::Weak => text.red(),
        }
    }
}

fn paint_difficulty(difficulty: Difficulty, text: &str) -> ColoredString {
    match difficulty {
        Difficulty::Easy => text.green(),
        Difficulty::Medium => text.yellow(),
        Difficulty::Hard => text.red(),
    }
}

fn paint_trend(trend: ImprovementTrend) -> ColoredString {
    match trend {
        ImprovementTrend::Improving => format!("↑ {}", trend.as_str()).green(),
        ImprovementTrend::Stable => format!("→ {}", trend.as_str()).normal(),
        ImprovementTrend::Declining => format!("↓ {}", trend.as_str()).red(),
    }
}

fn duration_label(seconds: u64) -> Result<String> {
    format_duration(i64::try_from(seconds).unwrap_or(i64::MAX))
}

fn rate_label(record: &WordRecord, tries: TryBucket) -> String {
    success_rate(record, tries)
        .map(|rate| format!("{:.1}%", rate))
        .unwrap_or_else(|_| UNDEFINED_RATE.to_string())
}

pub fn render_overview(stats: &OverallStats, now: DateTime<Utc>) -> Result<String> {
    let mut out = String::new();
    let accuracy = format!("{:.1}%", stats.overall_accuracy);

    let _ = writeln!(out, "{}", "Study Overview".bold());
    let _ = writeln!(out, "{}", "=".repeat(60));
    let _ = writeln!(out, "Words encountered:    {}", stats.total_words_encountered);
    let _ = writeln!(out, "Lessons completed:    {}", stats.total_lessons_completed);
    let _ = writeln!(
        out,
        "Overall accuracy:     {}",
        AccuracyBand::from_percent(stats.overall_accuracy).paint(&accuracy)
    );
    let _ = writeln!(out, "Average tries/word:   {:.1}", stats.average_tries_per_word);
    let _ = writeln!(
        out,
        "Total study time:     {}",
        duration_label(stats.total_study_time)?
    );
    let _ = writeln!(out, "Current streak:       {} days", stats.streak_days);
    let _ = writeln!(
        out,
        "Words: {} improving, {} struggling, {} mastered",
        stats.improving_words.to_string().green(),
        stats.struggling_words.to_string().red(),
        stats.mastered_words.to_string().cyan()
    );
    if let Some(last) = stats.last_study_date {
        let _ = writeln!(out, "Last studied:         {}", format_time_since(now, last));
    }

    Ok(out)
}

pub fn render_word_table(words: &[&WordRecord], total: usize, now: DateTime<Utc>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", format!("Words ({} of {})", words.len(), total).bold());
    let _ = writeln!(
        out,
        "{:<14}{:<14}{:<8}{:>6}{:>9}{:>7}  {:<14}{}",
        "WORD", "CATEGORY", "LEVEL", "SEEN", "1ST TRY", "TRIES", "LAST SEEN", "TREND"
    );

    if words.is_empty() {
        let _ = writeln!(out, "No words match the current filters.");
        return out;
    }

    for record in words {
        let first_try = format!("{:>9}", rate_label(record, TryBucket::First));
        let first_try = match success_rate(record, TryBucket::First) {
            Ok(rate) => AccuracyBand::from_percent(rate).paint(&first_try),
            Err(_) => first_try.normal(),
        };
        let level = format!("{:<8}", record.difficulty.as_str());

        let _ = writeln!(
            out,
            "{:<14}{:<14}{}{:>6}{}{:>7.1}  {:<14}{}",
            record.word,
            record.category,
            paint_difficulty(record.difficulty, &level),
            record.total_occurrences,
            first_try,
            record.average_tries_to_correct,
            format_time_since(now, record.last_encountered),
            paint_trend(record.improvement_trend)
        );
    }

    out
}

pub fn render_lesson_table(lessons: &[LessonRecord]) -> Result<String> {
    let mut out = String::new();

    let _ = writeln!(out, "{}", format!("Lessons ({})", lessons.len()).bold());
    let _ = writeln!(
        out,
        "{:<12}{:<32}{:<8}{:>7}{:>10}{:>8}  {}",
        "DATE", "TITLE", "LEVEL", "WORDS", "ACCURACY", "TRIES", "TIME"
    );

    for lesson in lessons {
        let accuracy = format!("{:>10}", format!("{:.1}%", lesson.accuracy));
        let level = format!("{:<8}", lesson.difficulty.as_str());

        let _ = writeln!(
            out,
            "{:<12}{:<32}{}{:>7}{}{:>8.1}  {}",
            lesson.completed_at.format("%Y-%m-%d").to_string(),
            lesson.lesson_title,
            paint_difficulty(lesson.difficulty, &level),
            format!("{}/{}", lesson.correct_words, lesson.total_words),
            AccuracyBand::from_percent(lesson.accuracy).paint(&accuracy),
            lesson.average_tries_per_word,
            duration_label(lesson.time_spent as u64)?
        );
    }

    Ok(out)
}

pub fn render_word_detail(record: &WordRecord, now: DateTime<Utc>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", record.word.bold());
    if let Some(phonetic) = &record.phonetic {
        let _ = writeln!(out, "{}", phonetic);
    }
    if let Some(definition) = &record.definition {
        let _ = writeln!(out, "{}", definition);
    }
    let _ = writeln!(out, "{}", "-".repeat(60));
    let _ = writeln!(
        out,
        "Category: {} | Difficulty: {} | Trend: {}",
        record.category,
        paint_difficulty(record.difficulty, record.difficulty.as_str()),
        paint_trend(record.improvement_trend)
    );
    let _ = writeln!(
        out,
        "Seen {} times, {:.1} tries on average, last {}",
        record.total_occurrences,
        record.average_tries_to_correct,
        format_time_since(now, record.last_encountered)
    );

    match success_breakdown(record) {
        Ok(breakdown) => {
            for (bucket, rate) in breakdown {
                let _ = writeln!(
                    out,
                    "  Correct on try {:<3} {:>4}  ({:.1}%)",
                    bucket.as_str(),
                    bucket.count_for(record),
                    rate
                );
            }
        }
        Err(_) => {
            for bucket in TryBucket::ALL {
                let _ = writeln!(
                    out,
                    "  Correct on try {:<3} {:>4}  ({})",
                    bucket.as_str(),
                    bucket.count_for(record),
                    UNDEFINED_RATE
                );
            }
        }
    }

    out
}
