//! Storage Config

use std::path::PathBuf;

use clap::Args;

/// Product storage settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// JSON file holding the product catalogue; seeded when missing
    #[arg(long, env = "PRODUCTS_FILE", default_value = "data/products.json")]
    pub products_file: PathBuf,
}
