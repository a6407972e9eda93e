//! Phase 1: Partition Enumeration
//!
//! This is the first phase of the generation pipeline. For one arity `k` it
//! yields every way of marking the `k` constructor positions as explicit or
//! injected.
//!
//! ## Process
//!
//! The partitions are produced by counting from `0` to `2^k - 1` and reading
//! each value as a `k`-bit marker sequence, most significant bit first. This
//! fixes a canonical order: the all-injected partition comes first, the
//! all-explicit partition last, and the artifact built from it is
//! byte-for-byte reproducible.
//!
//! The sequence is lazy. Only the counter is held in memory, so callers can
//! stream even the largest arities.

use std::iter::FusedIterator;

use super::{Partition, MAX_PARTITION_ARITY};

/// Lazy, canonical-order sequence of every partition of one arity.
#[derive(Debug, Clone)]
pub struct Partitions {
    arity: usize,
    next: u64,
    end: u64,
}

impl Iterator for Partitions {
    type Item = Partition;

    fn next(&mut self) -> Option<Partition> {
        if self.next >= self.end {
            return None;
        }
        let partition = Partition::new(self.arity, self.next as u32);
        self.next += 1;
        Some(partition)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Partitions {}

impl FusedIterator for Partitions {}

/// Execute Phase 1: enumerate every partition of `arity`.
///
/// Yields exactly `2^arity` partitions. Arity 0 yields the single empty
/// partition.
///
/// # Panics
///
/// Panics if `arity` exceeds [`MAX_PARTITION_ARITY`].
pub fn execute(arity: usize) -> Partitions {
    assert!(
        arity <= MAX_PARTITION_ARITY,
        "arity {} exceeds the partition limit of {}",
        arity,
        MAX_PARTITION_ARITY
    );
    Partitions {
        arity,
        next: 0,
        end: 1u64 << arity,
    }
}

/// Number of partitions of `arity`.
pub fn count(arity: usize) -> u64 {
    1u64 << arity
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_phase1_arity_zero_yields_single_empty_partition() {
        let partitions: Vec<Partition> = execute(0).collect();
        assert_eq!(partitions.len(), 1);
        assert_eq!(partitions[0].arity(), 0);
        assert_eq!(partitions[0].explicit_count(), 0);
    }

    #[test]
    fn test_phase1_arity_two_canonical_order() {
        let patterns: Vec<String> = execute(2).map(|p| p.pattern()).collect();
        assert_eq!(patterns, vec!["00", "01", "10", "11"]);
    }

    #[test]
    fn test_phase1_first_and_last_partitions() {
        let partitions: Vec<Partition> = execute(5).collect();
        assert_eq!(partitions.first().unwrap().explicit_count(), 0);
        assert_eq!(partitions.last().unwrap().explicit_count(), 5);
    }

    #[test]
    fn test_phase1_counts_and_uniqueness() {
        for arity in 0..=12 {
            let partitions: HashSet<Partition> = execute(arity).collect();
            assert_eq!(partitions.len() as u64, count(arity), "arity {}", arity);
            assert!(partitions.iter().all(|p| p.arity() == arity));
        }
    }

    #[test]
    fn test_phase1_exact_size() {
        let mut partitions = execute(4);
        assert_eq!(partitions.len(), 16);
        partitions.next();
        assert_eq!(partitions.len(), 15);
    }

    #[test]
    fn test_phase1_fused_after_exhaustion() {
        let mut partitions = execute(1);
        assert!(partitions.next().is_some());
        assert!(partitions.next().is_some());
        assert!(partitions.next().is_none());
        assert!(partitions.next().is_none());
    }

    #[test]
    fn test_phase1_streams_large_arity() {
        // Only the first few items are materialized.
        let first: Vec<String> = execute(20).take(3).map(|p| p.pattern()).collect();
        assert_eq!(first[0], "0".repeat(20));
        assert_eq!(first[2], format!("{}10", "0".repeat(18)));
    }

    #[test]
    #[should_panic(expected = "exceeds the partition limit")]
    fn test_phase1_rejects_oversized_arity() {
        let _ = execute(MAX_PARTITION_ARITY + 1);
    }
}
