use crate::error::AnalyticsError;
use crate::word::{Difficulty, WordRecord};
use log::debug;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::str::FromStr;

/// Closed set of sortable word fields, each with its own comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Word,
    Category,
    TotalOccurrences,
    CorrectOnFirstTry,
    CorrectOnSecondTry,
    CorrectOnThirdTry,
    CorrectAfterMultipleTries,
    AverageTriesToCorrect,
    LastEncountered,
}

impl SortField {
    pub const ALL: [SortField; 9] = [
        SortField::Word,
        SortField::Category,
        SortField::TotalOccurrences,
        SortField::CorrectOnFirstTry,
        SortField::CorrectOnSecondTry,
        SortField::CorrectOnThirdTry,
        SortField::CorrectAfterMultipleTries,
        SortField::AverageTriesToCorrect,
        SortField::LastEncountered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Word => "word",
            SortField::Category => "category",
            SortField::TotalOccurrences => "totalOccurrences",
            SortField::CorrectOnFirstTry => "correctOnFirstTry",
            SortField::CorrectOnSecondTry => "correctOnSecondTry",
            SortField::CorrectOnThirdTry => "correctOnThirdTry",
            SortField::CorrectAfterMultipleTries => "correctAfterMultipleTries",
            SortField::AverageTriesToCorrect => "averageTriesToCorrect",
            SortField::LastEncountered => "lastEncountered",
        }
    }

    /// Ascending comparison of two records on this field.
    pub fn compare(&self, a: &WordRecord, b: &WordRecord) -> Ordering {
        match self {
            SortField::Word => a.word.cmp(&b.word),
            SortField::Category => a.category.cmp(&b.category),
            SortField::TotalOccurrences => a.total_occurrences.cmp(&b.total_occurrences),
            SortField::CorrectOnFirstTry => a.correct_on_first_try.cmp(&b.correct_on_first_try),
            SortField::CorrectOnSecondTry => a.correct_on_second_try.cmp(&b.correct_on_second_try),
            SortField::CorrectOnThirdTry => a.correct_on_third_try.cmp(&b.correct_on_third_try),
            SortField::CorrectAfterMultipleTries => a
                .correct_after_multiple_tries
                .cmp(&b.correct_after_multiple_tries),
            SortField::AverageTriesToCorrect => a
                .average_tries_to_correct
                .total_cmp(&b.average_tries_to_correct),
            SortField::LastEncountered => a.last_encountered.cmp(&b.last_encountered),
        }
    }
}

impl FromStr for SortField {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s {
            "word" => SortField::Word,
            "category" => SortField::Category,
            "totalOccurrences" | "total_occurrences" => SortField::TotalOccurrences,
            "correctOnFirstTry" | "correct_on_first_try" => SortField::CorrectOnFirstTry,
            "correctOnSecondTry" | "correct_on_second_try" => SortField::CorrectOnSecondTry,
            "correctOnThirdTry" | "correct_on_third_try" => SortField::CorrectOnThirdTry,
            "correctAfterMultipleTries" | "correct_after_multiple_tries" => {
                SortField::CorrectAfterMultipleTries
            }
            "averageTriesToCorrect" | "average_tries_to_correct" => {
                SortField::AverageTriesToCorrect
            }
            "lastEncountered" | "last_encountered" => SortField::LastEncountered,
            _ => return Err(AnalyticsError::InvalidSortField(s.to_string())),
        };
        Ok(field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(AnalyticsError::InvalidSortOrder(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, record: &WordRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => record.category == *category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        if s == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(s.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    pub fn matches(&self, record: &WordRecord) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(difficulty) => record.difficulty == *difficulty,
        }
    }
}

impl FromStr for DifficultyFilter {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(DifficultyFilter::All)
        } else {
            s.parse().map(DifficultyFilter::Only)
        }
    }
}

/// Filter and sort parameters for [`select`].
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParams {
    pub search_term: String,
    pub category: CategoryFilter,
    pub difficulty: DifficultyFilter,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

impl Default for QueryParams {
    fn default() -> Self {
        QueryParams {
            search_term: String::new(),
            category: CategoryFilter::All,
            difficulty: DifficultyFilter::All,
            sort_field: SortField::TotalOccurrences,
            sort_order: SortOrder::Desc,
        }
    }
}

impl QueryParams {
    /// Builds parameters from their textual form, failing on the first
    /// unrecognized value.
    pub fn parse(
        search_term: &str,
        category: &str,
        difficulty: &str,
        sort_field: &str,
        sort_order: &str,
    ) -> Result<Self, AnalyticsError> {
        Ok(QueryParams {
            search_term: search_term.to_string(),
            category: CategoryFilter::from(category),
            difficulty: difficulty.parse()?,
            sort_field: sort_field.parse()?,
            sort_order: sort_order.parse()?,
        })
    }

    /// True when `record` passes the search, category and difficulty predicates.
    pub fn matches(&self, record: &WordRecord) -> bool {
        matches_search(&self.search_term, record)
            && self.category.matches(record)
            && self.difficulty.matches(record)
    }
}

fn matches_search(search_term: &str, record: &WordRecord) -> bool {
    search_term.is_empty()
        || record
            .word
            .to_lowercase()
            .contains(&search_term.to_lowercase())
}

/// Filtered, sorted view over `records`.
///
/// The sort is stable in both directions: records comparing equal keep their
/// relative input order.
pub fn select<'a>(records: &'a [WordRecord], params: &QueryParams) -> Vec<&'a WordRecord> {
    let mut selected: Vec<&WordRecord> = records.iter().filter(|r| params.matches(r)).collect();

    let field = params.sort_field;
    match params.sort_order {
        SortOrder::Asc => selected.sort_by(|a, b| field.compare(a, b)),
        SortOrder::Desc => selected.sort_by(|a, b| field.compare(b, a)),
    }

    debug!(
        "Selected {} of {} words (sort: {} {})",
        selected.len(),
        records.len(),
        field.as_str(),
        params.sort_order.as_str()
    );

    selected
}

/// Each category appearing in `records`, once, in order of first appearance.
pub fn distinct_categories(records: &[WordRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|r| r.category.as_str())
        .filter(|category| seen.insert(*category))
        .collect()
}
