//! Configuration schema definitions
//!
//! Every field carries a serde default so a partial (or absent) file
//! still yields a fully-populated configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// Search and pagination tuning
    #[serde(default)]
    pub search: SearchConfig,

    /// Compare-set storage
    #[serde(default)]
    pub compare: CompareConfig,
}

/// Search and pagination configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Results materialized per page of infinite scroll
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Debounce interval for the main search box, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Debounce interval for the quick-suggestions box, in milliseconds
    #[serde(default = "default_suggest_debounce_ms")]
    pub suggest_debounce_ms: u64,

    /// Suggestions returned per keystroke
    #[serde(default = "default_suggest_limit")]
    pub suggest_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            debounce_ms: default_debounce_ms(),
            suggest_debounce_ms: default_suggest_debounce_ms(),
            suggest_limit: default_suggest_limit(),
        }
    }
}

fn default_page_size() -> usize {
    12
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_suggest_debounce_ms() -> u64 {
    180
}

fn default_suggest_limit() -> usize {
    5
}

/// Compare-set storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CompareConfig {
    /// Override for the persisted compare-set file.
    ///
    /// Defaults to `<platform data dir>/find7/compare.json` when unset.
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
}

impl CompareConfig {
    /// Resolve the storage path, falling back to the platform data dir.
    pub fn resolved_storage_path(&self) -> PathBuf {
        self.storage_path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from(".find7"))
                .join("find7")
                .join("compare.json")
        })
    }
}
