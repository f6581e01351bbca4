//! # Reducer Options

use core::num::NonZeroUsize;

use crate::reduce::ConcurrentReducer;

/// The default number of tokens a task counts between cancellation checks.
pub const DEFAULT_CANCEL_CHECK_INTERVAL: usize = 4096;

/// Options for [`ConcurrentReducer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReducerOptions {
    parallel: bool,
    max_pool: Option<NonZeroUsize>,
    cancel_check_interval: NonZeroUsize,
}

impl Default for ReducerOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            max_pool: None,
            cancel_check_interval: NonZeroUsize::new(DEFAULT_CANCEL_CHECK_INTERVAL)
                .unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl ReducerOptions {
    /// Get whether tasks run concurrently.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Set whether tasks run concurrently.
    ///
    /// When false, tasks run one after another on the calling thread;
    /// the consolidated table is the same either way.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.parallel = parallel;
    }

    /// Set whether tasks run concurrently.
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }

    /// Get the max worker pool size.
    pub fn max_pool(&self) -> Option<NonZeroUsize> {
        self.max_pool
    }

    /// Set the max worker pool size.
    ///
    /// The pool never has more workers than there are tasks.
    pub fn set_max_pool(
        &mut self,
        max_pool: NonZeroUsize,
    ) {
        self.max_pool = Some(max_pool);
    }

    /// Set the max worker pool size.
    pub fn with_max_pool(
        mut self,
        max_pool: NonZeroUsize,
    ) -> Self {
        self.set_max_pool(max_pool);
        self
    }

    /// Get the number of tokens a task counts between cancellation checks.
    pub fn cancel_check_interval(&self) -> NonZeroUsize {
        self.cancel_check_interval
    }

    /// Set the number of tokens a task counts between cancellation checks.
    pub fn set_cancel_check_interval(
        &mut self,
        interval: NonZeroUsize,
    ) {
        self.cancel_check_interval = interval;
    }

    /// Set the number of tokens a task counts between cancellation checks.
    pub fn with_cancel_check_interval(
        mut self,
        interval: NonZeroUsize,
    ) -> Self {
        self.set_cancel_check_interval(interval);
        self
    }

    /// Build a [`ConcurrentReducer`] from these options.
    pub fn init(self) -> ConcurrentReducer {
        ConcurrentReducer::new(self)
    }
}
