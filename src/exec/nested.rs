//! # Two-level fan-out.
//!
//! [`run_nested`] composes the thread-backed executor twice: the batch is
//! split into ordered chunks, an outer pool of `outer_workers` threads maps
//! over the chunks, and each outer worker runs an inner pool of
//! `inner_workers` threads over its chunk's elements. Per-chunk results are
//! flattened in chunk order then intra-chunk order, so the final vector is
//! aligned with the original input.
//!
//! Only the outer level reports progress (one tick per finished chunk);
//! inner reporting is disabled to avoid interleaved signals.
//!
//! This shape scales past a single pool dimension: the outer pool spreads
//! CPU-bound chunks across cores while each inner pool overlaps the
//! blocking sub-steps (e.g. downloads) of one chunk.

use crate::exec::chunk::chunked;
use crate::exec::thread::run_threads;

/// Maps `func` over `items` with an outer thread pool over chunks of
/// `chunk_size` and an inner thread pool per chunk, returning outputs in
/// input order.
///
/// An empty batch returns an empty vector without spawning any worker.
///
/// # Panics
/// Panics if `outer_workers`, `inner_workers` or `chunk_size` is zero, or
/// propagates a panic raised by `func`.
///
/// # Example
/// ```rust
/// use batchkit::run_nested;
///
/// let out = run_nested((1u32..=10).collect(), |n| n * n, 2, 2, 3, false);
/// assert_eq!(out, vec![1, 4, 9, 16, 25, 36, 49, 64, 81, 100]);
/// ```
pub fn run_nested<I, O, F>(
    items: Vec<I>,
    func: F,
    outer_workers: usize,
    inner_workers: usize,
    chunk_size: usize,
    progress: bool,
) -> Vec<O>
where
    I: Send,
    O: Send,
    F: Fn(I) -> O + Sync,
{
    assert!(outer_workers >= 1, "outer_workers must be >= 1");
    assert!(inner_workers >= 1, "inner_workers must be >= 1");
    let chunks: Vec<Vec<I>> = chunked(items, chunk_size).collect();

    run_threads(
        chunks,
        |chunk| run_threads(chunk, &func, inner_workers, false),
        outer_workers,
        progress,
    )
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[test]
    fn test_flattening_preserves_input_order() {
        // ceil(10 / 3) = 4 chunks behind 2x2 workers.
        let out = run_nested(
            (1u64..=10).collect(),
            |n| {
                std::thread::sleep(Duration::from_millis(11 - n));
                n * 10
            },
            2,
            2,
            3,
            false,
        );
        assert_eq!(out, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
    }

    #[test]
    fn test_every_item_is_visited_once() {
        let calls = AtomicUsize::new(0);
        let out = run_nested(
            (0..23).collect(),
            |n: usize| {
                calls.fetch_add(1, Ordering::SeqCst);
                n
            },
            3,
            2,
            4,
            false,
        );
        assert_eq!(out, (0..23).collect::<Vec<_>>());
        assert_eq!(calls.load(Ordering::SeqCst), 23);
    }

    #[test]
    fn test_empty_batch_spawns_nothing() {
        let out = run_nested(Vec::<u8>::new(), |n| n, 2, 2, 3, false);
        assert!(out.is_empty());
    }

    #[test]
    fn test_chunk_smaller_than_batch_still_flattens() {
        let out = run_nested(vec![1, 2], |n| n + 1, 4, 4, 10, false);
        assert_eq!(out, vec![2, 3]);
    }

    #[test]
    #[should_panic(expected = "chunk size")]
    fn test_zero_chunk_size_is_a_contract_violation() {
        let _ = run_nested(vec![1], |n| n, 1, 1, 0, false);
    }

    #[test]
    #[should_panic(expected = "outer_workers")]
    fn test_zero_outer_workers_is_a_contract_violation() {
        let _ = run_nested(vec![1], |n| n, 0, 1, 1, false);
    }

    #[test]
    #[should_panic(expected = "inner_workers")]
    fn test_zero_inner_workers_is_a_contract_violation() {
        let _ = run_nested(vec![1], |n| n, 1, 0, 1, false);
    }
}
