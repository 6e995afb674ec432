//! Core data types for the fee estimation pipeline

use serde::{Deserialize, Serialize};

/// Satoshis per bitcoin; converts the node's decimal BTC amounts into
/// integer satoshis.
pub const SATS_PER_BTC: f64 = 100_000_000.0;

/// Default simulated block capacity in bytes.
pub const BLOCK_SIZE_BYTES: u64 = 1_000_000;

/// A transaction as returned by `decoderawtransaction`, validated and
/// typed once at the RPC boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct DecodedTransaction {
    pub txid: String,
    pub size: u64,
    pub vin: Vec<TxInput>,
    pub vout: Vec<TxOutput>,
}

/// One input, referencing the prior output it spends.
#[derive(Debug, Clone, Deserialize)]
pub struct TxInput {
    pub txid: String,
    pub vout: u32,
}

/// One output of a decoded transaction. `value` is in BTC.
#[derive(Debug, Clone, Deserialize)]
pub struct TxOutput {
    pub n: u32,
    pub value: f64,
}

/// Fee data derived for one mempool transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeRecord {
    pub txid: String,
    /// Absolute fee in satoshis.
    pub fee: u64,
    /// Satoshis per byte.
    pub fee_rate: f64,
    /// Serialized size in bytes.
    pub size: u64,
}

/// Fee rates of the transactions filling one simulated block.
pub type Bucket = Vec<f64>;

/// Percentile fee rates for one simulated block.
///
/// In the engine's output, index 0 is the next block under the
/// configured fill order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercentileSummary {
    pub p10: f64,
    pub p50: f64,
    pub p90: f64,
}
