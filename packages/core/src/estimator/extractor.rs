//! Fee extraction from mempool transactions
//!
//! For each mempool transaction: sum its output values, resolve each
//! input's spent value by looking up the referenced prior transaction,
//! and derive `fee = inputs - outputs` in satoshis plus a per-byte fee
//! rate. Any per-transaction failure is logged and skipped so one
//! malformed or evicted entry never aborts the whole run.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::estimator::error::{EstimatorError, FetchError};
use crate::estimator::provider::MempoolSource;
use crate::estimator::types::{FeeRecord, TxInput, SATS_PER_BTC};

/// Derives `FeeRecord`s for every resolvable mempool transaction.
pub struct FeeExtractor {
    source: Arc<dyn MempoolSource + Send + Sync>,
    fetch_concurrency: usize,
    allow_zero_fee: bool,
}

impl FeeExtractor {
    pub fn new(
        source: Arc<dyn MempoolSource + Send + Sync>,
        fetch_concurrency: usize,
        allow_zero_fee: bool,
    ) -> Self {
        Self {
            source,
            fetch_concurrency,
            allow_zero_fee,
        }
    }

    /// Run extraction over the current mempool.
    ///
    /// The initial mempool listing is the only fatal call. Every
    /// per-transaction failure is logged at `warn` and skipped, so the
    /// output may hold fewer records than the mempool holds
    /// transactions. Fetches run under a bounded worker pool; record
    /// order is not significant (the bucketer re-sorts).
    pub async fn extract_all(&self) -> Result<Vec<FeeRecord>, EstimatorError> {
        let txids = self
            .source
            .mempool_txids()
            .await
            .map_err(|source| EstimatorError::MempoolListing { source })?;

        tracing::info!("Mempool holds {} transactions", txids.len());

        let semaphore = Arc::new(Semaphore::new(self.fetch_concurrency.max(1)));
        let mut tasks = JoinSet::new();

        for txid in txids {
            let source = Arc::clone(&self.source);
            let semaphore = Arc::clone(&semaphore);
            let allow_zero_fee = self.allow_zero_fee;
            tasks.spawn(async move {
                // The semaphore is never closed, so acquisition only
                // fails at shutdown; proceeding unthrottled is safe then.
                let _permit = semaphore.acquire_owned().await.ok();
                let result = extract_one(source.as_ref(), &txid, allow_zero_fee).await;
                (txid, result)
            });
        }

        let mut records = Vec::new();
        let mut skipped = 0usize;
        while let Some(joined) = tasks.join_next().await {
            let Ok((txid, result)) = joined else {
                skipped += 1;
                continue;
            };
            match result {
                Ok(record) => records.push(record),
                Err(err) => {
                    skipped += 1;
                    tracing::warn!("Skipping transaction {}: {}", txid, err);
                }
            }
        }

        if skipped > 0 {
            tracing::info!("{} transaction(s) skipped during extraction", skipped);
        }

        Ok(records)
    }
}

/// Derive the fee record for a single transaction.
async fn extract_one(
    source: &(dyn MempoolSource + Send + Sync),
    txid: &str,
    allow_zero_fee: bool,
) -> Result<FeeRecord, FetchError> {
    let tx = source.decoded_transaction(txid).await?;

    if tx.size == 0 {
        return Err(FetchError::decode(format!(
            "transaction {} has zero size",
            tx.txid
        )));
    }

    let output_btc: f64 = tx.vout.iter().map(|out| out.value).sum();

    let mut input_btc = 0.0_f64;
    for input in &tx.vin {
        input_btc += resolve_input_value(source, input).await?;
    }

    let fee_btc = input_btc - output_btc;
    let fee_acceptable = if allow_zero_fee {
        fee_btc >= 0.0
    } else {
        fee_btc > 0.0
    };
    if !fee_acceptable {
        return Err(FetchError::FeeInvariant {
            txid: tx.txid,
            input_btc,
            output_btc,
        });
    }

    // Sum in BTC and convert once, so float noise below one satoshi
    // cannot accumulate into the integer fee.
    let fee = (fee_btc * SATS_PER_BTC).round() as u64;
    let fee_rate = fee as f64 / tx.size as f64;

    Ok(FeeRecord {
        txid: tx.txid,
        fee,
        fee_rate,
        size: tx.size,
    })
}

/// Value in BTC of the prior output spent by `input`.
async fn resolve_input_value(
    source: &(dyn MempoolSource + Send + Sync),
    input: &TxInput,
) -> Result<f64, FetchError> {
    let prior = source.decoded_transaction(&input.txid).await?;
    prior
        .vout
        .iter()
        .find(|out| out.n == input.vout)
        .map(|out| out.value)
        .ok_or_else(|| FetchError::MissingReference {
            txid: input.txid.clone(),
            vout: input.vout,
        })
}
