//! # Task Runners
//!
//! Each runner executes one counting task per range and returns every task's
//! result, in spawn order, only after all tasks have finished.

use core::{
    any::Any,
    num::NonZeroUsize,
    sync::atomic::{AtomicBool, Ordering},
};
use std::panic::{self, AssertUnwindSafe};

use crate::{
    counting::{FrequencyTable, TaskId, count_segment_cancellable},
    errors::{WTResult, WordtallyError},
    partition::SegmentRange,
    types::{CountType, TokenKey},
};

/// Shared, read-only context for one batch of counting tasks.
pub(crate) struct TaskBatch<'a, K> {
    pub tokens: &'a [K],
    pub ranges: &'a [SegmentRange],
    pub cancel: AtomicBool,
    pub check_interval: NonZeroUsize,
}

impl<'a, K: TokenKey> TaskBatch<'a, K> {
    pub fn new(
        tokens: &'a [K],
        ranges: &'a [SegmentRange],
        check_interval: NonZeroUsize,
    ) -> Self {
        Self {
            tokens,
            ranges,
            cancel: AtomicBool::new(false),
            check_interval,
        }
    }

    /// Run a single task.
    ///
    /// Panics are caught and reported as task failures; any failure raises
    /// the batch cancellation flag.
    pub fn run_task<C: CountType>(
        &self,
        task: TaskId,
    ) -> WTResult<FrequencyTable<K, C>> {
        let range = self.ranges[task.0];

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            count_segment_cancellable(
                task,
                self.tokens,
                range,
                &self.cancel,
                self.check_interval,
            )
        }))
        .unwrap_or_else(|payload| {
            Err(WordtallyError::task_failure(
                task,
                range,
                format!("panicked: {}", panic_message(payload.as_ref())),
            ))
        });

        match &result {
            Ok(table) => log::debug!(
                "task {task} {range}: {} tokens, {} distinct words",
                range.len(),
                table.len()
            ),
            Err(err @ WordtallyError::TaskFailure { .. }) => {
                self.cancel.store(true, Ordering::Relaxed);
                log::warn!("{err}");
            }
            Err(err) => log::debug!("{err}"),
        }

        result
    }

    /// Run every task on the calling thread, in spawn order.
    pub fn run_sequential<C: CountType>(&self) -> Vec<WTResult<FrequencyTable<K, C>>> {
        (0..self.ranges.len())
            .map(|idx| self.run_task(TaskId(idx)))
            .collect()
    }

    /// Run every task on a dedicated rayon pool of `workers` threads.
    #[cfg(feature = "rayon")]
    pub fn run_parallel<C: CountType>(
        &self,
        workers: usize,
    ) -> WTResult<Vec<WTResult<FrequencyTable<K, C>>>> {
        use rayon::prelude::*;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|idx| format!("wordtally-worker-{idx}"))
            .build()
            .map_err(|err| WordtallyError::WorkerPool(err.to_string()))?;

        // `collect` is the barrier: it returns once every task has finished.
        Ok(pool.install(|| {
            (0..self.ranges.len())
                .into_par_iter()
                .with_max_len(1)
                .map(|idx| self.run_task(TaskId(idx)))
                .collect()
        }))
    }

    /// Run every task on scoped threads, at most `workers` at a time.
    #[cfg(not(feature = "rayon"))]
    pub fn run_parallel<C: CountType>(
        &self,
        workers: usize,
    ) -> WTResult<Vec<WTResult<FrequencyTable<K, C>>>> {
        let task_ids: Vec<TaskId> = (0..self.ranges.len()).map(TaskId).collect();

        let mut results = Vec::with_capacity(task_ids.len());
        for wave in task_ids.chunks(workers) {
            std::thread::scope(|scope| {
                let handles: Vec<_> = wave
                    .iter()
                    .map(|&task| {
                        std::thread::Builder::new()
                            .name(format!("wordtally-worker-{}", task.0))
                            .spawn_scoped(scope, move || self.run_task(task))
                            .map_err(|err| WordtallyError::WorkerPool(err.to_string()))
                    })
                    .collect();

                for (&task, handle) in wave.iter().zip(handles) {
                    let result = handle.and_then(|h| {
                        h.join().unwrap_or_else(|_| {
                            Err(WordtallyError::task_failure(
                                task,
                                self.ranges[task.0],
                                "worker thread panicked",
                            ))
                        })
                    });
                    results.push(result);
                }
            });
        }

        Ok(results)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn Any + Send> = Box::new("static");
        assert_eq!(panic_message(payload.as_ref()), "static");

        let payload: Box<dyn Any + Send> = Box::new("owned".to_string());
        assert_eq!(panic_message(payload.as_ref()), "owned");

        let payload: Box<dyn Any + Send> = Box::new(17_u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }

    #[test]
    fn test_failure_raises_cancel() {
        let tokens: Vec<String> = vec!["a".to_string()];
        let ranges = vec![SegmentRange::new(0, 1), SegmentRange::new(1, 4)];
        let batch = TaskBatch::new(&tokens, &ranges, NonZeroUsize::MIN);

        let ok = batch.run_task::<u32>(TaskId(0)).unwrap();
        assert_eq!(ok.get("a"), Some(1));
        assert!(!batch.cancel.load(Ordering::Relaxed));

        let err = batch.run_task::<u32>(TaskId(1)).unwrap_err();
        assert!(err.is_task_failure());
        assert!(batch.cancel.load(Ordering::Relaxed));
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let tokens: Vec<String> = "x y z x y x".split(' ').map(String::from).collect();
        let ranges = crate::partition::partition(tokens.len(), 4).unwrap();
        let batch = TaskBatch::new(&tokens, &ranges, NonZeroUsize::MIN);

        let seq: Vec<FrequencyTable<String, u32>> = batch
            .run_sequential()
            .into_iter()
            .collect::<WTResult<_>>()
            .unwrap();
        let par: Vec<FrequencyTable<String, u32>> = batch
            .run_parallel(2)
            .unwrap()
            .into_iter()
            .collect::<WTResult<_>>()
            .unwrap();

        assert_eq!(seq, par);
    }
}
