//! Fee level engine: orchestrates extraction, bucketing and summarizing

use std::sync::Arc;

use crate::estimator::bucketer::{bucket_by_capacity, SortOrder};
use crate::estimator::error::EstimatorError;
use crate::estimator::extractor::FeeExtractor;
use crate::estimator::percentile::summarize;
use crate::estimator::provider::MempoolSource;
use crate::estimator::types::{PercentileSummary, BLOCK_SIZE_BYTES};

/// Tunable pipeline parameters.
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    /// Simulated block capacity in bytes.
    pub block_capacity: u64,
    /// Bucket fill order; descending models miner behavior.
    pub sort_order: SortOrder,
    /// Accept zero-fee transactions instead of skipping them.
    pub allow_zero_fee: bool,
    /// Maximum number of concurrent transaction fetches.
    pub fetch_concurrency: usize,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            block_capacity: BLOCK_SIZE_BYTES,
            sort_order: SortOrder::Descending,
            allow_zero_fee: false,
            fetch_concurrency: 8,
        }
    }
}

/// Runs the full mempool-to-fee-levels pipeline against one source.
pub struct FeeLevelEngine {
    source: Arc<dyn MempoolSource + Send + Sync>,
    config: EstimatorConfig,
}

impl FeeLevelEngine {
    pub fn new(source: Arc<dyn MempoolSource + Send + Sync>, config: EstimatorConfig) -> Self {
        Self { source, config }
    }

    /// Run the pipeline once over the current mempool snapshot.
    ///
    /// Returns one `PercentileSummary` per simulated block, index 0 =
    /// next block. An empty or fully-skipped mempool yields an empty
    /// sequence rather than fabricated numbers.
    pub async fn estimate(&self) -> Result<Vec<PercentileSummary>, EstimatorError> {
        let extractor = FeeExtractor::new(
            Arc::clone(&self.source),
            self.config.fetch_concurrency,
            self.config.allow_zero_fee,
        );

        let records = extractor.extract_all().await?;
        if records.is_empty() {
            tracing::warn!(
                "No usable transactions from {}; nothing to estimate",
                self.source.source_name()
            );
            return Ok(Vec::new());
        }

        tracing::info!(
            "Derived {} fee records from {}",
            records.len(),
            self.source.source_name()
        );

        let buckets = bucket_by_capacity(
            records,
            self.config.block_capacity,
            self.config.sort_order,
        );

        let mut summaries = Vec::with_capacity(buckets.len());
        for bucket in &buckets {
            summaries.push(summarize(bucket)?);
        }

        tracing::info!("Estimated fee levels for {} block(s)", summaries.len());
        Ok(summaries)
    }
}
