use crate::analytics::query::QueryParams;
use crate::dashboard::DashboardView;
use crate::error::Result;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Learning analytics dashboard for dictation practice
#[derive(Parser, Debug, Clone)]
#[command(name = "Dictation Analytics")]
#[command(about = "Explore word and lesson statistics from dictation practice", long_about = None)]
#[command(version)]
pub struct Args {
    /// Load the snapshot from a JSON fixture instead of the built-in sample
    #[arg(long, value_name = "PATH")]
    pub fixture: Option<PathBuf>,

    /// Dashboard view to render
    #[arg(long, default_value = "overview", value_parser = clap::value_parser!(DashboardView))]
    pub view: DashboardView,

    /// Case-insensitive substring to look for in words
    #[arg(long, default_value = "")]
    pub search: String,

    /// Category to keep, or "all"
    #[arg(long, default_value = "all")]
    pub category: String,

    /// Difficulty to keep: all, easy, medium or hard
    #[arg(long, default_value = "all")]
    pub difficulty: String,

    /// Field to sort words by (e.g. totalOccurrences, word, averageTriesToCorrect)
    #[arg(long, default_value = "totalOccurrences")]
    pub sort: String,

    /// Sort order: asc or desc
    #[arg(long, default_value = "desc")]
    pub order: String,

    /// Show the detail panel for a single word
    #[arg(long, value_name = "WORD")]
    pub word: Option<String>,

    /// Compute overall stats from the word and lesson records
    #[arg(long)]
    pub derived: bool,

    /// Override the current date (YYYY-MM-DD format)
    #[arg(long, value_name = "DATE")]
    pub today: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Parse an optional `--today` override in YYYY-MM-DD format
pub fn parse_today(today: Option<&str>) -> std::result::Result<Option<NaiveDate>, String> {
    match today {
        Some(date_str) => NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                format!(
                    "Invalid date format for --today: '{}'. Expected YYYY-MM-DD",
                    date_str
                )
            }),
        None => Ok(None),
    }
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Validate the today argument if provided
    pub fn validate_today(&self) -> std::result::Result<Option<NaiveDate>, String> {
        parse_today(self.today.as_deref())
    }

    /// Word query described by the filter and sort flags
    pub fn query_params(&self) -> Result<QueryParams> {
        QueryParams::parse(
            &self.search,
            &self.category,
            &self.difficulty,
            &self.sort,
            &self.order,
        )
    }
}
