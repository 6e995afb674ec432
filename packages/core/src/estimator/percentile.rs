//! Linear-interpolation percentiles over bucket fee rates

use std::cmp::Ordering;

use crate::estimator::error::EstimatorError;
use crate::estimator::types::PercentileSummary;

/// The `p`-th percentile of `values` (0 to 100) using linear
/// interpolation between the two nearest ranks.
///
/// Input order is irrelevant; a sorted copy is taken internally.
/// Empty input is undefined and returns `EmptyBucket`.
pub fn percentile(values: &[f64], p: f64) -> Result<f64, EstimatorError> {
    if values.is_empty() {
        return Err(EstimatorError::EmptyBucket);
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let rank = p.clamp(0.0, 100.0) / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return Ok(sorted[lower]);
    }

    let weight = rank - lower as f64;
    Ok(sorted[lower] + (sorted[upper] - sorted[lower]) * weight)
}

/// p10/p50/p90 summary of one bucket's fee rates.
pub fn summarize(bucket: &[f64]) -> Result<PercentileSummary, EstimatorError> {
    Ok(PercentileSummary {
        p10: percentile(bucket, 10.0)?,
        p50: percentile(bucket, 50.0)?,
        p90: percentile(bucket, 90.0)?,
    })
}
