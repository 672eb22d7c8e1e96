use crate::cli::Args;
use crate::error::Result;
use crate::store::AnalyticsStore;
use log::info;
use std::path::PathBuf;

/// Where the analytics snapshot comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StoreSource {
    /// Built-in mock data
    #[default]
    Sample,
    /// JSON fixture file
    File(PathBuf),
}

/// Store configuration
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    pub source: StoreSource,
}

impl StoreConfig {
    pub fn from_args(args: &Args) -> Self {
        let source = match &args.fixture {
            Some(path) => StoreSource::File(path.clone()),
            None => StoreSource::Sample,
        };
        StoreConfig { source }
    }
}

/// Factory for creating AnalyticsStore instances
pub struct StoreFactory;

impl StoreFactory {
    pub fn create(config: &StoreConfig) -> Result<AnalyticsStore> {
        match &config.source {
            StoreSource::Sample => {
                info!("Using built-in sample snapshot");
                Ok(AnalyticsStore::sample())
            }
            StoreSource::File(path) => {
                info!("Using fixture snapshot {}", path.display());
                AnalyticsStore::from_path(path)
            }
        }
    }
}
