use crate::analytics::query::{
    CategoryFilter, DifficultyFilter, QueryParams, SortField, SortOrder, select,
};
use crate::error::{AnalyticsError, Result};
use crate::store::AnalyticsStore;
use crate::word::WordRecord;
use log::debug;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardView {
    #[default]
    Overview,
    Words,
    Lessons,
}

impl DashboardView {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardView::Overview => "overview",
            DashboardView::Words => "words",
            DashboardView::Lessons => "lessons",
        }
    }
}

impl FromStr for DashboardView {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "overview" => Ok(DashboardView::Overview),
            "words" => Ok(DashboardView::Words),
            "lessons" => Ok(DashboardView::Lessons),
            _ => Err(format!(
                "Invalid view '{}'. Expected overview, words or lessons",
                s
            )),
        }
    }
}

/// UI state owned by the presentation layer: active tab, the word shown in
/// the detail panel, and the current word query.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    active_view: DashboardView,
    selected_word: Option<String>,
    params: QueryParams,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_view(&self) -> DashboardView {
        self.active_view
    }

    pub fn selected_word(&self) -> Option<&str> {
        self.selected_word.as_deref()
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    pub fn switch_view(&mut self, view: DashboardView) {
        debug!("Switching view to {}", view.as_str());
        self.active_view = view;
    }

    /// Opens the detail panel for `word`, which must exist in `store`.
    pub fn open_word(&mut self, store: &AnalyticsStore, word: &str) -> Result<()> {
        if store.find_word(word).is_none() {
            return Err(AnalyticsError::UnknownWord(word.to_string()));
        }
        self.selected_word = Some(word.to_string());
        Ok(())
    }

    pub fn close_word(&mut self) {
        self.selected_word = None;
    }

    pub fn selected_record<'a>(&self, store: &'a AnalyticsStore) -> Option<&'a WordRecord> {
        self.selected_word
            .as_deref()
            .and_then(|word| store.find_word(word))
    }

    pub fn set_search_term(&mut self, search_term: impl Into<String>) {
        self.params.search_term = search_term.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.params.category = category;
    }

    pub fn set_difficulty(&mut self, difficulty: DifficultyFilter) {
        self.params.difficulty = difficulty;
    }

    pub fn set_sort(&mut self, field: SortField, order: SortOrder) {
        self.params.sort_field = field;
        self.params.sort_order = order;
    }

    pub fn set_params(&mut self, params: QueryParams) {
        self.params = params;
    }

    /// Words to render for the current parameters.
    pub fn visible_words<'a>(&self, store: &'a AnalyticsStore) -> Vec<&'a WordRecord> {
        select(store.words(), &self.params)
    }
}
