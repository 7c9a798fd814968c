use std::env;
use std::path::PathBuf;

use crate::datasets::BuiltinDataset;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";

/// Settings for the classification service and the command line tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Address the service listens on and the client connects to
    pub listen_addr: String,
    /// Built-in dataset to train on when no local file is given
    pub dataset: BuiltinDataset,
    /// Local tab-separated dataset; takes precedence over `dataset`
    pub dataset_path: Option<PathBuf>,
    /// Discard any cached copy of the dataset before training
    pub fresh: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            dataset: BuiltinDataset::Spam01,
            dataset_path: None,
            fresh: false,
        }
    }
}

impl ServiceConfig {
    /// Defaults overridden by `SPAMFILTER_ADDR`, `SPAMFILTER_DATASET` and
    /// `SPAMFILTER_DATASET_PATH`
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(addr) = env::var("SPAMFILTER_ADDR") {
            config.listen_addr = addr;
        }
        if let Ok(name) = env::var("SPAMFILTER_DATASET") {
            match name.parse() {
                Ok(dataset) => config.dataset = dataset,
                Err(e) => log::warn!("Ignoring SPAMFILTER_DATASET: {}", e),
            }
        }
        if let Ok(path) = env::var("SPAMFILTER_DATASET_PATH") {
            config.dataset_path = Some(PathBuf::from(path));
        }
        config
    }
}
