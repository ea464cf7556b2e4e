//! # Thread-backed bounded map.
//!
//! [`run_threads`] applies a function to every element of a batch using a
//! pool of `n_workers` OS threads. Workers share memory and are preemptive,
//! which suits blocking I/O as well as CPU-bound work.
//!
//! ## Rules
//! - At most `n_workers` invocations of `func` are active at any instant.
//! - Results come back **in input order** regardless of completion order:
//!   each worker pulls the next `(index, item)` pair off a shared queue and
//!   stores its output in the slot for that index.
//! - `std::thread::scope` joins every worker before the call returns, so no
//!   thread outlives the batch (including on panic unwinding).
//!
//! ## Failure semantics
//! [`run_threads`] maps an infallible function. For a fallible one, either
//! wrap it with [`RetryPolicy::wrap_sync`](crate::RetryPolicy::wrap_sync) to
//! get per-item `Option<O>` sentinels, or use [`try_run_threads`], which
//! fails the whole batch with the smallest-index error it observed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::exec::progress::Progress;

/// Applies `func` to every item on a pool of `n_workers` OS threads,
/// returning outputs in input order.
///
/// An empty batch returns an empty vector without spawning any thread.
/// When `progress` is true, a shared counter of completed items advances as
/// workers finish and emits a `debug`-level trace line per item.
///
/// # Panics
/// Panics if `n_workers` is zero, or propagates a panic raised by `func`.
///
/// # Example
/// ```rust
/// use batchkit::run_threads;
///
/// let squares = run_threads(vec![1u64, 2, 3, 4, 5], |n| n * n, 3, false);
/// assert_eq!(squares, vec![1, 4, 9, 16, 25]);
/// ```
pub fn run_threads<I, O, F>(items: Vec<I>, func: F, n_workers: usize, progress: bool) -> Vec<O>
where
    I: Send,
    O: Send,
    F: Fn(I) -> O + Sync,
{
    assert!(n_workers >= 1, "n_workers must be >= 1");
    if items.is_empty() {
        return Vec::new();
    }

    let total = items.len();
    let workers = n_workers.min(total);
    let source = Mutex::new(items.into_iter().enumerate());
    let slots: Mutex<Vec<Option<O>>> = Mutex::new((0..total).map(|_| None).collect());
    let progress = Progress::new(total, progress);

    std::thread::scope(|scope| {
        for _ in 0..workers {
            scope.spawn(|| loop {
                let next = source.lock().unwrap().next();
                let Some((index, item)) = next else { break };
                let output = func(item);
                slots.lock().unwrap()[index] = Some(output);
                progress.tick();
            });
        }
    });

    slots
        .into_inner()
        .unwrap()
        .into_iter()
        .map(|slot| slot.expect("every index is filled once all workers join"))
        .collect()
}

/// Fallible variant of [`run_threads`].
///
/// On failure the batch returns an error instead of a result vector: the
/// error with the smallest input index among the invocations that actually
/// ran. A stop flag keeps unstarted items from launching once a failure is
/// observed; items already in flight finish first, so teardown stays scoped.
///
/// # Panics
/// Panics if `n_workers` is zero, or propagates a panic raised by `func`.
pub fn try_run_threads<I, O, E, F>(
    items: Vec<I>,
    func: F,
    n_workers: usize,
    progress: bool,
) -> Result<Vec<O>, E>
where
    I: Send,
    O: Send,
    E: Send,
    F: Fn(I) -> Result<O, E> + Sync,
{
    assert!(n_workers >= 1, "n_workers must be >= 1");
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let total = items.len();
    let workers = n_workers.min(total);
    let source = Mutex::new(items.into_iter().enumerate());
    let slots: Mutex<Vec<Option<O>>> = Mutex::new((0..total).map(|_| None).collect());
    let first_error: Mutex<Option<(usize, E)>> = Mutex::new(None);
    let stop = AtomicBool::new(false);
    let progress = Progress::new(total, progress);

    std::thread::scope(|scope| {
        for _ in 0..workers {
            scope.spawn(|| loop {
                if stop.load(Ordering::Acquire) {
                    break;
                }
                let next = source.lock().unwrap().next();
                let Some((index, item)) = next else { break };
                match func(item) {
                    Ok(output) => {
                        slots.lock().unwrap()[index] = Some(output);
                        progress.tick();
                    }
                    Err(err) => {
                        let mut earliest = first_error.lock().unwrap();
                        if earliest.as_ref().map_or(true, |(held, _)| index < *held) {
                            *earliest = Some((index, err));
                        }
                        stop.store(true, Ordering::Release);
                    }
                }
            });
        }
    });

    if let Some((_, err)) = first_error.into_inner().unwrap() {
        return Err(err);
    }
    Ok(slots
        .into_inner()
        .unwrap()
        .into_iter()
        .map(|slot| slot.expect("every index is filled once all workers join"))
        .collect())
}
