use clap::{Parser, ValueEnum};

use crate::estimator::{EstimatorConfig, SortOrder, BLOCK_SIZE_BYTES};

/// Mempool fee level estimator CLI arguments
#[derive(Debug, Parser)]
#[command(
    name = "mempool-fee-levels",
    version,
    about = "Per-block fee-rate percentiles from a Bitcoin Core mempool"
)]
pub struct Cli {
    /// Simulated block capacity in bytes
    #[arg(long, default_value_t = BLOCK_SIZE_BYTES)]
    pub block_size: u64,

    /// Bucket fill order; descending puts the highest fee rates in block 0
    #[arg(long, value_enum, default_value_t = SortOrderArg::Descending)]
    pub sort_order: SortOrderArg,

    /// Accept zero-fee transactions instead of skipping them
    #[arg(long)]
    pub allow_zero_fee: bool,

    /// Maximum number of concurrent transaction fetches
    #[arg(long, default_value_t = 8)]
    pub fetch_concurrency: usize,

    /// Emit a JSON array instead of the text table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrderArg {
    Descending,
    Ascending,
}

impl From<SortOrderArg> for SortOrder {
    fn from(arg: SortOrderArg) -> Self {
        match arg {
            SortOrderArg::Descending => SortOrder::Descending,
            SortOrderArg::Ascending => SortOrder::Ascending,
        }
    }
}

impl Cli {
    pub fn estimator_config(&self) -> EstimatorConfig {
        EstimatorConfig {
            block_capacity: self.block_size,
            sort_order: self.sort_order.into(),
            allow_zero_fee: self.allow_zero_fee,
            fetch_concurrency: self.fetch_concurrency,
        }
    }
}
