//! Mempool fee estimation pipeline
//!
//! Turns the mempool of a Bitcoin Core node into per-block fee-rate
//! percentiles: fee extraction from decoded transactions, greedy
//! capacity bucketing into simulated blocks, and p10/p50/p90
//! aggregation per bucket.

pub mod bucketer;
pub mod engine;
pub mod error;
pub mod extractor;
pub mod percentile;
pub mod provider;
pub mod types;

pub use bucketer::SortOrder;
pub use engine::{EstimatorConfig, FeeLevelEngine};
pub use error::{EstimatorError, FetchError};
pub use provider::MempoolSource;
pub use types::*;
