//! # Table Merge

use crate::{
    counting::FrequencyTable,
    errors::WTResult,
    types::{CountType, TokenKey},
};

/// Fold partial tables, in iteration order, into one consolidated table.
///
/// Merging sums counts per word, so any ordering of `tables` yields the same result.
///
/// ## Errors
/// [`crate::WordtallyError::CountOverflow`] if a summed count no longer fits in `C`.
pub fn merge_tables<K, C, I>(tables: I) -> WTResult<FrequencyTable<K, C>>
where
    K: TokenKey,
    C: CountType,
    I: IntoIterator<Item = FrequencyTable<K, C>>,
{
    tables
        .into_iter()
        .try_fold(FrequencyTable::new(), |mut acc, table| {
            acc.merge(table)?;
            Ok(acc)
        })
}
