//! Error types for the fee estimation pipeline

use thiserror::Error;

/// Per-transaction failures during fee extraction.
///
/// Every variant maps to a skip: the offending transaction is dropped
/// from the record set and the run continues. Only the initial mempool
/// listing promotes a `Transport` failure to a fatal error.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("transport error: {message}")]
    Transport { message: String },

    #[error("decode error: {message}")]
    Decode { message: String },

    #[error("missing reference: output {vout} of {txid} not resolvable")]
    MissingReference { txid: String, vout: u32 },

    #[error("fee invariant violated for {txid}: inputs {input_btc} BTC, outputs {output_btc} BTC")]
    FeeInvariant {
        txid: String,
        input_btc: f64,
        output_btc: f64,
    },
}

/// Failures that escape the pipeline to the caller.
#[derive(Error, Debug)]
pub enum EstimatorError {
    #[error("cannot compute percentiles over an empty bucket")]
    EmptyBucket,

    #[error("mempool listing failed: {source}")]
    MempoolListing {
        #[source]
        source: FetchError,
    },
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}
