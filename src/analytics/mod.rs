pub mod query;
pub mod rates;
pub mod streak;
pub mod summary;

use crate::stats::OverallStats;
use crate::store::AnalyticsStore;
use crate::word::WordRecord;
use chrono::NaiveDate;

pub use query::{
    CategoryFilter, DifficultyFilter, QueryParams, SortField, SortOrder, distinct_categories,
    select,
};
pub use rates::{TryBucket, success_breakdown, success_rate};
pub use summary::derive_overall_stats;

/// Analytics facade over a borrowed store
pub struct Analytics<'a> {
    pub store: &'a AnalyticsStore,
}

impl<'a> Analytics<'a> {
    pub fn new(store: &'a AnalyticsStore) -> Self {
        Analytics { store }
    }

    pub fn select(&self, params: &QueryParams) -> Vec<&'a WordRecord> {
        select(self.store.words(), params)
    }

    pub fn categories(&self) -> Vec<&'a str> {
        distinct_categories(self.store.words())
    }

    pub fn derived_stats(&self, today: NaiveDate) -> OverallStats {
        derive_overall_stats(self.store.words(), self.store.lessons(), today)
    }
}
