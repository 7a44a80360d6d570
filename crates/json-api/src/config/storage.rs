//! Storage Config

use std::path::PathBuf;

use clap::Args;

/// Inventory document settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Path of the JSON document holding products and categories
    #[arg(long, env = "DATA_FILE", default_value = "data/inventory.json")]
    pub data_file: PathBuf,
}
