use thiserror::Error;

/// Errors raised by the analytics store, queries and formatting helpers.
///
/// Every variant is local and recoverable; callers decide how to degrade
/// (for example rendering "—" for an undefined rate).
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("invalid sort field: '{0}'")]
    InvalidSortField(String),

    #[error("invalid sort order: '{0}' (expected 'asc' or 'desc')")]
    InvalidSortOrder(String),

    #[error("invalid difficulty: '{0}' (expected 'all', 'easy', 'medium' or 'hard')")]
    InvalidDifficulty(String),

    #[error("invalid duration: {0}s is negative")]
    InvalidDuration(i64),

    #[error("success rate undefined for '{word}': no occurrences recorded")]
    DivisionUndefined { word: String },

    #[error("unknown word: '{0}'")]
    UnknownWord(String),

    #[error("failed to read fixture: {0}")]
    FixtureIo(#[from] std::io::Error),

    #[error("malformed fixture: {0}")]
    FixtureFormat(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
