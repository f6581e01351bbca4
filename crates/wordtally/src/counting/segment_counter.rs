//! # Segment Counter

use core::{
    fmt,
    num::NonZeroUsize,
    sync::atomic::{AtomicBool, Ordering},
};

use crate::{
    counting::FrequencyTable,
    errors::{WTResult, WordtallyError},
    partition::SegmentRange,
    types::{CountType, TokenKey},
};

/// Spawn-order identifier of a counting task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TaskId(pub usize);

impl fmt::Display for TaskId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Count the words of one segment into a fresh table.
///
/// An empty `range` yields an empty table without touching `tokens`.
///
/// ## Errors
/// [`WordtallyError::TaskFailure`] if `range` reaches past the end of `tokens`,
/// or if a word's count overflows `C`.
pub fn count_segment<K, C>(
    task: TaskId,
    tokens: &[K],
    range: SegmentRange,
) -> WTResult<FrequencyTable<K, C>>
where
    K: TokenKey,
    C: CountType,
{
    let never = AtomicBool::new(false);
    count_segment_cancellable(task, tokens, range, &never, NonZeroUsize::MAX)
}

/// Count the words of one segment, polling `cancel` every `check_interval` tokens.
///
/// ## Errors
/// * [`WordtallyError::TaskFailure`] if `range` reaches past the end of `tokens`,
///   or if a word's count overflows `C`.
/// * [`WordtallyError::Cancelled`] if `cancel` was raised before the segment finished.
pub fn count_segment_cancellable<K, C>(
    task: TaskId,
    tokens: &[K],
    range: SegmentRange,
    cancel: &AtomicBool,
    check_interval: NonZeroUsize,
) -> WTResult<FrequencyTable<K, C>>
where
    K: TokenKey,
    C: CountType,
{
    if range.is_empty() {
        return Ok(FrequencyTable::new());
    }

    let segment = tokens.get(range.as_range()).ok_or_else(|| {
        WordtallyError::task_failure(
            task,
            range,
            format!(
                "range exceeds token sequence of length {}",
                tokens.len()
            ),
        )
    })?;

    let mut table = FrequencyTable::with_capacity(segment.len().min(1 << 16));
    for chunk in segment.chunks(check_interval.get()) {
        if cancel.load(Ordering::Relaxed) {
            return Err(WordtallyError::Cancelled { task });
        }
        for word in chunk {
            table
                .increment(word)
                .map_err(|err| WordtallyError::task_failure(task, range, err.to_string()))?;
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_task_id_display() {
        assert_eq!(TaskId(3).to_string(), "#3");
    }

    #[test]
    fn test_count_segment() {
        let tokens = tokens(&["a", "b", "a", "c", "b", "a"]);

        let table: FrequencyTable<String, u32> =
            count_segment(TaskId(0), &tokens, SegmentRange::new(1, 5)).unwrap();
        assert_eq!(table.get("a"), Some(1));
        assert_eq!(table.get("b"), Some(2));
        assert_eq!(table.get("c"), Some(1));
        assert_eq!(table.total(), Some(4));
    }

    #[test]
    fn test_empty_segment() {
        let tokens: Vec<String> = Vec::new();

        // Positioned past the end; still fine, since nothing is read.
        let table: FrequencyTable<String, u32> =
            count_segment(TaskId(4), &tokens, SegmentRange::empty_at(9)).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_out_of_bounds_segment() {
        let tokens = tokens(&["a", "b"]);

        let err = count_segment::<String, u32>(TaskId(1), &tokens, SegmentRange::new(1, 3))
            .unwrap_err();
        assert_eq!(
            err,
            WordtallyError::TaskFailure {
                task: TaskId(1),
                range: SegmentRange::new(1, 3),
                reason: "range exceeds token sequence of length 2".to_string(),
            }
        );
    }

    #[test]
    fn test_count_overflow_fails_task() {
        let tokens = vec!["a".to_string(); 300];

        let err = count_segment::<String, u8>(TaskId(3), &tokens, SegmentRange::new(0, 300))
            .unwrap_err();
        assert_eq!(
            err,
            WordtallyError::TaskFailure {
                task: TaskId(3),
                range: SegmentRange::new(0, 300),
                reason: "count overflow for word `a`".to_string(),
            }
        );

        let table: FrequencyTable<String, u16> =
            count_segment(TaskId(3), &tokens, SegmentRange::new(0, 300)).unwrap();
        assert_eq!(table.get("a"), Some(300));
    }

    #[test]
    fn test_cancelled_segment() {
        let tokens = tokens(&["a", "b", "c"]);
        let cancel = AtomicBool::new(true);

        let err = count_segment_cancellable::<String, u32>(
            TaskId(2),
            &tokens,
            SegmentRange::new(0, 3),
            &cancel,
            NonZeroUsize::new(1).unwrap(),
        )
        .unwrap_err();
        assert_eq!(err, WordtallyError::Cancelled { task: TaskId(2) });
    }
}
