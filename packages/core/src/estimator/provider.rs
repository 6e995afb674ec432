//! Mempool data source abstraction
//!
//! Keeps the pipeline independent of the concrete node transport so
//! tests can drive it with an in-memory source.

use async_trait::async_trait;

use crate::estimator::error::FetchError;
use crate::estimator::types::DecodedTransaction;

/// A read-only view of a node's mempool and transaction store.
#[async_trait]
pub trait MempoolSource {
    /// Transaction ids currently in the mempool.
    async fn mempool_txids(&self) -> Result<Vec<String>, FetchError>;

    /// Fetch and decode one transaction by id.
    ///
    /// Also used to resolve the prior transactions referenced by inputs.
    /// Those may already be confirmed, so sources must not restrict the
    /// lookup to the mempool itself.
    async fn decoded_transaction(&self, txid: &str)
        -> Result<DecodedTransaction, FetchError>;

    /// Name of this source for logging.
    fn source_name(&self) -> &str;
}
