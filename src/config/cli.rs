use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-cart")]
#[command(about = "A small shopping cart manager backed by a catalog/stock API")]
pub struct CliConfig {
    /// Base URL of the catalog/stock API
    #[arg(long, default_value = "http://localhost:3333")]
    pub api_endpoint: String,

    /// Directory the cart snapshot is persisted under
    #[arg(long, default_value = "./cart-data")]
    pub storage_path: String,

    /// Per-request timeout for catalog reads, in seconds
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Load endpoint/storage settings from a TOML file instead of flags
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum CartCommand {
    /// Print the current cart
    Show,
    /// Add one unit of a product to the cart
    Add { product_id: u64 },
    /// Remove a product from the cart entirely
    Remove { product_id: u64 },
    /// Set the amount of a product already in the cart
    #[command(allow_negative_numbers = true)]
    Set { product_id: u64, amount: i64 },
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn storage_path(&self) -> &str {
        &self.storage_path
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_endpoint", &self.api_endpoint)?;
        validation::validate_path("storage_path", &self.storage_path)?;

        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number("timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}
