//! Greedy block bucketing of fee records
//!
//! Models the next N blocks by sorting records on fee rate and filling
//! simulated blocks of a fixed byte capacity in order.

use std::cmp::Ordering;

use crate::estimator::types::{Bucket, FeeRecord};

/// Direction records are sorted before the greedy fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Highest fee rate first: bucket 0 models the next mined block.
    Descending,
    /// Lowest fee rate first, kept for parity with older tooling that
    /// filled blocks from the cheap end.
    Ascending,
}

/// Partition `records` into simulated blocks of at most `capacity` bytes.
///
/// Records are sorted by fee rate, then filled greedily: a record that
/// would push the running byte counter past `capacity` closes the
/// current bucket and opens a new one. The byte counter restarts at
/// zero for every bucket. A single record larger than `capacity` gets a
/// bucket of its own. The final bucket may be under capacity, and empty
/// input produces no buckets.
pub fn bucket_by_capacity(
    mut records: Vec<FeeRecord>,
    capacity: u64,
    order: SortOrder,
) -> Vec<Bucket> {
    records.sort_unstable_by(|a, b| {
        let by_rate = a
            .fee_rate
            .partial_cmp(&b.fee_rate)
            .unwrap_or(Ordering::Equal);
        match order {
            SortOrder::Ascending => by_rate,
            SortOrder::Descending => by_rate.reverse(),
        }
    });

    let mut buckets: Vec<Bucket> = Vec::new();
    let mut current = Bucket::new();
    let mut bytes_used = 0u64;

    for record in records {
        let would_overflow = bytes_used > capacity || bytes_used + record.size > capacity;
        if would_overflow && !current.is_empty() {
            buckets.push(std::mem::take(&mut current));
            bytes_used = 0;
        }
        bytes_used += record.size;
        current.push(record.fee_rate);
    }

    if !current.is_empty() {
        buckets.push(current);
    }

    buckets
}
