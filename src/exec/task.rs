//! # Cooperative-task-backed bounded map.
//!
//! [`run_tasks`] applies an async function to every element of a batch using
//! at most `n_workers` concurrently admitted tokio tasks. Admission is gated
//! by a counting [`Semaphore`]: a permit is acquired before an item's work
//! starts and released (by permit drop) when it completes, success or
//! failure. Acquisition order is not FIFO-guaranteed, but the gate never
//! admits more than `n_workers` tasks at once and tokio's semaphore queues
//! waiters fairly, so no task starves.
//!
//! Suspension points exist only inside the supplied function (and any retry
//! backoff wait wrapped around it); the dispatch and collection logic itself
//! never suspends arbitrarily.
//!
//! ## Rules
//! - Results come back **in input order**: every task carries its original
//!   index and outputs land in per-index slots.
//! - An empty batch spawns nothing and returns an empty vector.
//! - Dropping the returned future aborts all in-flight tasks with it
//!   ([`JoinSet`] aborts on drop), so a cancelled caller leaks no workers.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::exec::progress::Progress;

/// Applies `func` to every item with at most `n_workers` concurrently
/// admitted tasks, returning outputs in input order.
///
/// Suited to I/O-bound work: waits inside `func` suspend only that task.
/// When `progress` is true, a shared counter of completed items advances as
/// tasks finish and emits a `debug`-level trace line per item.
///
/// # Panics
/// Panics if `n_workers` is zero, or propagates a panic raised by `func`.
///
/// # Example
/// ```rust
/// use batchkit::run_tasks;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let doubled = run_tasks(vec![1u32, 2, 3], |n| async move { n * 2 }, 2, false).await;
/// assert_eq!(doubled, vec![2, 4, 6]);
/// # });
/// ```
pub async fn run_tasks<I, O, F, Fut>(
    items: Vec<I>,
    func: F,
    n_workers: usize,
    progress: bool,
) -> Vec<O>
where
    I: Send + 'static,
    O: Send + 'static,
    F: Fn(I) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = O> + Send + 'static,
{
    assert!(n_workers >= 1, "n_workers must be >= 1");
    if items.is_empty() {
        return Vec::new();
    }

    let total = items.len();
    let semaphore = Arc::new(Semaphore::new(n_workers));
    let func = Arc::new(func);
    let progress = Arc::new(Progress::new(total, progress));

    let mut set: JoinSet<(usize, O)> = JoinSet::new();
    for (index, item) in items.into_iter().enumerate() {
        let semaphore = semaphore.clone();
        let func = func.clone();
        let progress = progress.clone();
        set.spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .expect("admission semaphore is never closed");
            let output = func(item).await;
            progress.tick();
            (index, output)
        });
    }

    collect_in_order(set, total).await
}

/// Fallible variant of [`run_tasks`].
///
/// On failure the batch returns the error with the smallest input index
/// among the invocations that actually ran; a stop flag keeps not-yet-admitted
/// items from starting once a failure is observed.
///
/// # Panics
/// Panics if `n_workers` is zero, or propagates a panic raised by `func`.
pub async fn try_run_tasks<I, O, E, F, Fut>(
    items: Vec<I>,
    func: F,
    n_workers: usize,
    progress: bool,
) -> Result<Vec<O>, E>
where
    I: Send + 'static,
    O: Send + 'static,
    E: Send + 'static,
    F: Fn(I) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<O, E>> + Send + 'static,
{
    assert!(n_workers >= 1, "n_workers must be >= 1");
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let total = items.len();
    let semaphore = Arc::new(Semaphore::new(n_workers));
    let func = Arc::new(func);
    let progress = Arc::new(Progress::new(total, progress));
    let stop = Arc::new(AtomicBool::new(false));

    let mut set: JoinSet<(usize, Option<Result<O, E>>)> = JoinSet::new();
    for (index, item) in items.into_iter().enumerate() {
        let semaphore = semaphore.clone();
        let func = func.clone();
        let progress = progress.clone();
        let stop = stop.clone();
        set.spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .expect("admission semaphore is never closed");
            if stop.load(Ordering::Acquire) {
                return (index, None);
            }
            let result = func(item).await;
            match &result {
                Ok(_) => progress.tick(),
                Err(_) => stop.store(true, Ordering::Release),
            }
            (index, Some(result))
        });
    }

    let mut slots: Vec<Option<O>> = (0..total).map(|_| None).collect();
    let mut first_error: Option<(usize, E)> = None;
    while let Some(joined) = set.join_next().await {
        let (index, outcome) = unwrap_join(joined);
        match outcome {
            Some(Ok(output)) => slots[index] = Some(output),
            Some(Err(err)) => {
                if first_error.as_ref().map_or(true, |(held, _)| index < *held) {
                    first_error = Some((index, err));
                }
            }
            None => {} // skipped after stop; the batch is failing anyway
        }
    }

    if let Some((_, err)) = first_error {
        return Err(err);
    }
    Ok(slots
        .into_iter()
        .map(|slot| slot.expect("every index is filled once all tasks join"))
        .collect())
}

async fn collect_in_order<O: Send + 'static>(mut set: JoinSet<(usize, O)>, total: usize) -> Vec<O> {
    let mut slots: Vec<Option<O>> = (0..total).map(|_| None).collect();
    while let Some(joined) = set.join_next().await {
        let (index, output) = unwrap_join(joined);
        slots[index] = Some(output);
    }
    slots
        .into_iter()
        .map(|slot| slot.expect("every index is filled once all tasks join"))
        .collect()
}

/// Resurfaces worker panics on the caller; cancellation cannot occur because
/// the set is never aborted while being joined.
fn unwrap_join<T>(joined: Result<T, tokio::task::JoinError>) -> T {
    match joined {
        Ok(value) => value,
        Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
        Err(err) => unreachable!("worker task cancelled mid-join: {err}"),
    }
}
