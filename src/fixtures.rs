//! Mock snapshot shipped with the dashboard, plus seeded synthetic data.

use crate::lesson::LessonRecord;
use crate::stats::OverallStats;
use crate::word::{Difficulty, ImprovementTrend, WordRecord};
use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn word(
    word: &str,
    counts: [u32; 4],
    average_tries_to_correct: f64,
    difficulty: Difficulty,
    category: &str,
    last_encountered: DateTime<Utc>,
    improvement_trend: ImprovementTrend,
    phonetic: &str,
    definition: &str,
) -> WordRecord {
    WordRecord {
        word: word.to_string(),
        total_occurrences: counts.iter().sum(),
        correct_on_first_try: counts[0],
        correct_on_second_try: counts[1],
        correct_on_third_try: counts[2],
        correct_after_multiple_tries: counts[3],
        average_tries_to_correct,
        difficulty,
        category: category.to_string(),
        last_encountered,
        improvement_trend,
        phonetic: Some(phonetic.to_string()),
        definition: Some(definition.to_string()),
    }
}

pub fn sample_words() -> Vec<WordRecord> {
    use Difficulty::*;
    use ImprovementTrend::*;

    vec![
        word(
            "the",
            [35, 7, 2, 1],
            1.3,
            Easy,
            "articles",
            at(2024, 1, 15, 14, 30),
            Improving,
            "/ðə/",
            "Definite article used before nouns",
        ),
        word(
            "beautiful",
            [6, 3, 2, 1],
            1.8,
            Medium,
            "adjectives",
            at(2024, 1, 14, 16, 45),
            Improving,
            "/ˈbjuːtɪfəl/",
            "Pleasing the senses or mind aesthetically",
        ),
        word(
            "development",
            [10, 4, 3, 1],
            1.7,
            Medium,
            "academic",
            at(2024, 1, 15, 11, 20),
            Stable,
            "/dɪˈveləpmənt/",
            "The process of growing or changing",
        ),
        word(
            "technology",
            [9, 3, 2, 1],
            1.7,
            Medium,
            "academic",
            at(2024, 1, 13, 9, 15),
            Improving,
            "/tekˈnɒlədʒi/",
            "Application of scientific knowledge for practical purposes",
        ),
        word(
            "environment",
            [4, 3, 2, 1],
            2.0,
            Medium,
            "academic",
            at(2024, 1, 12, 18, 5),
            Declining,
            "/ɪnˈvaɪrənmənt/",
            "The surroundings in which a person or thing lives",
        ),
        word(
            "necessary",
            [5, 4, 3, 2],
            2.1,
            Hard,
            "academic",
            at(2024, 1, 15, 13, 0),
            Stable,
            "/ˈnesəsəri/",
            "Required to be done or achieved",
        ),
        word(
            "government",
            [3, 3, 2, 1],
            2.1,
            Hard,
            "politics",
            at(2024, 1, 11, 10, 40),
            Declining,
            "/ˈɡʌvənmənt/",
            "The group of people with authority to govern",
        ),
        word(
            "and",
            [34, 3, 1, 0],
            1.1,
            Easy,
            "conjunctions",
            at(2024, 1, 15, 14, 35),
            Stable,
            "/ænd/",
            "Used to connect words of the same part of speech",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn lesson(
    lesson_id: &str,
    lesson_title: &str,
    category: &str,
    difficulty: Difficulty,
    completed_at: DateTime<Utc>,
    total_words: u32,
    correct_words: u32,
    accuracy: f64,
    average_tries_per_word: f64,
    time_spent: u32,
) -> LessonRecord {
    LessonRecord {
        lesson_id: lesson_id.to_string(),
        lesson_title: lesson_title.to_string(),
        category: category.to_string(),
        difficulty,
        completed_at,
        total_words,
        correct_words,
        accuracy,
        average_tries_per_word,
        time_spent,
    }
}

pub fn sample_lessons() -> Vec<LessonRecord> {
    use Difficulty::*;

    vec![
        lesson(
            "lesson-1",
            "Daily Conversation Basics",
            "conversation",
            Easy,
            at(2024, 1, 15, 14, 30),
            25,
            22,
            88.0,
            1.2,
            420,
        ),
        lesson(
            "lesson-2",
            "Academic Vocabulary",
            "academic",
            Medium,
            at(2024, 1, 14, 16, 45),
            30,
            24,
            80.0,
            1.5,
            680,
        ),
        lesson(
            "lesson-3",
            "News and Current Affairs",
            "politics",
            Hard,
            at(2024, 1, 13, 9, 15),
            20,
            13,
            65.0,
            2.1,
            540,
        ),
        lesson(
            "lesson-4",
            "Describing People and Places",
            "adjectives",
            Medium,
            at(2024, 1, 12, 18, 5),
            28,
            23,
            82.1,
            1.4,
            510,
        ),
    ]
}

pub fn sample_overall_stats() -> OverallStats {
    OverallStats {
        total_words_encountered: 156,
        total_lessons_completed: 23,
        overall_accuracy: 82.5,
        average_tries_per_word: 1.6,
        total_study_time: 8640,
        improving_words: 45,
        struggling_words: 12,
        mastered_words: 89,
        streak_days: 7,
        last_study_date: Some(at(2024, 1, 15, 14, 30)),
    }
}

const SYNTHETIC_CATEGORIES: [&str; 5] =
    ["articles", "adjectives", "academic", "politics", "travel"];
const SYNTHETIC_SYLLABLES: [&str; 10] =
    ["ka", "lo", "me", "ri", "tu", "sa", "ne", "vo", "pi", "de"];

/// Deterministic pseudo-random word records. Every record has a consistent
/// attempt partition and a unique word key.
pub fn synthetic_words(seed: u64, count: usize) -> Vec<WordRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let base = at(2024, 1, 1, 0, 0);

    (0..count)
        .map(|i| {
            let syllables = rng.gen_range(1..4);
            let mut stem = String::new();
            for _ in 0..syllables {
                stem.push_str(SYNTHETIC_SYLLABLES.choose(&mut rng).copied().unwrap_or("ka"));
            }

            let counts = [
                rng.gen_range(0..40),
                rng.gen_range(0..10),
                rng.gen_range(0..6),
                rng.gen_range(0..4),
            ];
            let difficulty = *[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
                .choose(&mut rng)
                .unwrap_or(&Difficulty::Medium);
            let trend = *[
                ImprovementTrend::Improving,
                ImprovementTrend::Stable,
                ImprovementTrend::Declining,
            ]
            .choose(&mut rng)
            .unwrap_or(&ImprovementTrend::Stable);

            WordRecord {
                word: format!("{}{}", stem, i),
                total_occurrences: counts.iter().sum(),
                correct_on_first_try: counts[0],
                correct_on_second_try: counts[1],
                correct_on_third_try: counts[2],
                correct_after_multiple_tries: counts[3],
                // Whole tenths so ties show up in sort tests
                average_tries_to_correct: rng.gen_range(10..40) as f64 / 10.0,
                difficulty,
                category: SYNTHETIC_CATEGORIES
                    .choose(&mut rng)
                    .copied()
                    .unwrap_or("academic")
                    .to_string(),
                last_encountered: base + Duration::minutes(rng.gen_range(0..60 * 24 * 30)),
                improvement_trend: trend,
                phonetic: None,
                definition: None,
            }
        })
        .collect()
}
