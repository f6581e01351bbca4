//! # Error Types

use crate::{counting::TaskId, partition::SegmentRange};

/// Errors from wordtally operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordtallyError {
    /// An argument was outside its accepted domain.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// The name of the offending argument.
        name: &'static str,

        /// Why the value was rejected.
        reason: String,
    },

    /// A counting task failed; no consolidated table was produced.
    #[error("counting task {task} failed on range {range}: {reason}")]
    TaskFailure {
        /// The spawn-order identifier of the failed task.
        task: TaskId,

        /// The segment the task was assigned.
        range: SegmentRange,

        /// What went wrong.
        reason: String,
    },

    /// A counting task stopped early because a sibling task failed.
    ///
    /// Never returned from a reduce; the sibling's failure is reported instead.
    #[error("counting task {task} was cancelled")]
    Cancelled {
        /// The spawn-order identifier of the cancelled task.
        task: TaskId,
    },

    /// A word's count no longer fits in the table's count type.
    ///
    /// Inside a counting task this is reported as a
    /// [`WordtallyError::TaskFailure`]; it is returned as-is when merging
    /// partial tables overflows.
    #[error("count overflow for word `{word}`")]
    CountOverflow {
        /// The word whose count overflowed.
        word: String,
    },

    /// The worker pool could not be started.
    #[error("worker pool error: {0}")]
    WorkerPool(String),

    /// A tokenizer pattern failed to compile.
    #[error("pattern error: {0}")]
    Pattern(String),
}

impl WordtallyError {
    /// Build an [`WordtallyError::InvalidArgument`].
    pub fn invalid_argument(
        name: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Build a [`WordtallyError::TaskFailure`].
    pub fn task_failure(
        task: TaskId,
        range: SegmentRange,
        reason: impl Into<String>,
    ) -> Self {
        Self::TaskFailure {
            task,
            range,
            reason: reason.into(),
        }
    }

    /// Build a [`WordtallyError::CountOverflow`].
    pub fn count_overflow(word: impl Into<String>) -> Self {
        Self::CountOverflow { word: word.into() }
    }

    /// Is this a [`WordtallyError::TaskFailure`]?
    pub fn is_task_failure(&self) -> bool {
        matches!(self, Self::TaskFailure { .. })
    }
}

impl From<regex::Error> for WordtallyError {
    fn from(err: regex::Error) -> Self {
        Self::Pattern(err.to_string())
    }
}

/// Result type for wordtally operations.
pub type WTResult<T> = core::result::Result<T, WordtallyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = WordtallyError::invalid_argument("segments", "must be >= 1, got 0");
        assert_eq!(
            err.to_string(),
            "invalid argument `segments`: must be >= 1, got 0"
        );
        assert!(!err.is_task_failure());

        let err = WordtallyError::task_failure(TaskId(2), SegmentRange::new(4, 6), "boom");
        assert_eq!(
            err.to_string(),
            "counting task #2 failed on range [4, 5]: boom"
        );
        assert!(err.is_task_failure());

        let err = WordtallyError::count_overflow("the");
        assert_eq!(err.to_string(), "count overflow for word `the`");
        assert!(!err.is_task_failure());
    }
}
