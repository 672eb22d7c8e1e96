pub mod analytics;
pub mod cli;
pub mod dashboard;
pub mod date_provider;
pub mod error;
pub mod fixtures;
pub mod lesson;
pub mod report;
pub mod stats;
pub mod store;
pub mod store_factory;
pub mod time_format;
pub mod word;
