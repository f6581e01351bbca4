//! # Concurrent Reducer

use crate::{
    concurrency::threads::resolve_worker_count,
    counting::FrequencyTable,
    errors::{WTResult, WordtallyError},
    partition::SegmentRange,
    reduce::{ReducerOptions, merge_tables, task_runner::TaskBatch},
    types::{CountType, TokenKey},
};

/// Counts segments concurrently and merges the partial tables.
///
/// One task is run per range. Each task owns a private [`FrequencyTable`]
/// and only reads the shared token slice, so counting takes no locks.
/// Merging starts only after every task has finished.
#[derive(Debug, Clone, Default)]
pub struct ConcurrentReducer {
    options: ReducerOptions,
}

impl ConcurrentReducer {
    /// Create a new reducer.
    pub fn new(options: ReducerOptions) -> Self {
        Self { options }
    }

    /// Get the reducer options.
    pub fn options(&self) -> &ReducerOptions {
        &self.options
    }

    /// Count `tokens` over `ranges` and merge the results.
    ///
    /// Every range gets its own task, but tasks share a pool of at most
    /// `min(ranges.len(), max_pool)` worker threads, where `max_pool` defaults
    /// to [`crate::concurrency::threads::est_max_parallelism`]. A larger
    /// number of ranges queues tasks on the pool; the result is unaffected.
    ///
    /// ## Arguments
    /// * `tokens` - the full token sequence; shared read-only by every task.
    /// * `ranges` - one segment per task, usually from [`crate::partition`].
    ///
    /// ## Returns
    /// The consolidated table: for each word, the sum of its occurrences
    /// within each range.
    ///
    /// ## Errors
    /// * [`WordtallyError::TaskFailure`] for the lowest-numbered task that failed,
    ///   including a word count overflowing `C` within one segment;
    ///   the partial tables of every other task are discarded.
    /// * [`WordtallyError::CountOverflow`] if merging the partial tables
    ///   overflows `C`.
    /// * [`WordtallyError::WorkerPool`] if the worker pool could not be started.
    pub fn reduce<K, C>(
        &self,
        tokens: &[K],
        ranges: &[SegmentRange],
    ) -> WTResult<FrequencyTable<K, C>>
    where
        K: TokenKey,
        C: CountType,
    {
        let batch = TaskBatch::new(tokens, ranges, self.options.cancel_check_interval());

        let results = if self.options.parallel() && ranges.len() > 1 {
            let workers = resolve_worker_count(ranges.len(), self.options.max_pool());
            log::debug!(
                "reducing {} tokens over {} segments on {workers} workers",
                tokens.len(),
                ranges.len()
            );
            batch.run_parallel(workers)?
        } else {
            log::debug!(
                "reducing {} tokens over {} segments sequentially",
                tokens.len(),
                ranges.len()
            );
            batch.run_sequential()
        };

        let partials = collect_partials(results)?;
        merge_tables(partials)
    }
}

/// Unwrap per-task results, in spawn order.
///
/// A genuine task failure wins over any cancellation it caused.
fn collect_partials<K, C>(
    results: Vec<WTResult<FrequencyTable<K, C>>>
) -> WTResult<Vec<FrequencyTable<K, C>>>
where
    K: TokenKey,
    C: CountType,
{
    let mut partials = Vec::with_capacity(results.len());
    let mut cancelled: Option<WordtallyError> = None;

    for result in results {
        match result {
            Ok(table) => partials.push(table),
            Err(err @ WordtallyError::TaskFailure { .. }) => return Err(err),
            Err(err) => {
                cancelled.get_or_insert(err);
            }
        }
    }

    match cancelled {
        Some(err) => Err(err),
        None => Ok(partials),
    }
}
