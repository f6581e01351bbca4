//! # Frequency Tables

use core::{borrow::Borrow, fmt::Debug};

use crate::{
    errors::{WTResult, WordtallyError},
    types::{
        CountType,
        TokenKey,
        WTHashIter,
        WTHashMap,
        hash_map_new,
        hash_map_with_capacity,
    },
};

/// A word -> count table.
///
/// Every stored count is positive. Iteration order is unspecified;
/// use [`FrequencyTable::to_sorted_vec`] when a stable order is needed.
#[derive(Clone, PartialEq, Eq)]
pub struct FrequencyTable<K, C>
where
    K: TokenKey,
    C: CountType,
{
    counts: WTHashMap<K, C>,
}

impl<K, C> Default for FrequencyTable<K, C>
where
    K: TokenKey,
    C: CountType,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> Debug for FrequencyTable<K, C>
where
    K: TokenKey,
    C: CountType,
{
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_map().entries(self.to_sorted_vec()).finish()
    }
}

impl<K, C> FrequencyTable<K, C>
where
    K: TokenKey,
    C: CountType,
{
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            counts: hash_map_new(),
        }
    }

    /// Create a new empty table with room for `capacity` distinct words.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: hash_map_with_capacity(capacity),
        }
    }

    /// The number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Look up the count for `word`.
    pub fn get(
        &self,
        word: &str,
    ) -> Option<C> {
        self.counts.get(word).copied()
    }

    /// Count one more occurrence of `word`.
    ///
    /// The key is only cloned on first occurrence.
    ///
    /// ## Errors
    /// [`WordtallyError::CountOverflow`] if the count no longer fits in `C`;
    /// the stored count is left unchanged.
    pub fn increment(
        &mut self,
        word: &K,
    ) -> WTResult<()> {
        match self.counts.get_mut(Borrow::<str>::borrow(word)) {
            Some(count) => {
                *count = count
                    .checked_add(&C::one())
                    .ok_or_else(|| WordtallyError::count_overflow(AsRef::<str>::as_ref(word)))?;
            }
            None => {
                self.counts.insert(word.clone(), C::one());
            }
        }
        Ok(())
    }

    /// Add `count` occurrences of `word`.
    ///
    /// A zero `count` is ignored.
    ///
    /// ## Errors
    /// [`WordtallyError::CountOverflow`] if the sum no longer fits in `C`;
    /// the stored count is left unchanged.
    pub fn add(
        &mut self,
        word: K,
        count: C,
    ) -> WTResult<()> {
        if count == C::zero() {
            return Ok(());
        }
        match self.counts.get_mut(Borrow::<str>::borrow(&word)) {
            Some(existing) => {
                *existing = existing
                    .checked_add(&count)
                    .ok_or_else(|| WordtallyError::count_overflow(AsRef::<str>::as_ref(&word)))?;
            }
            None => {
                self.counts.insert(word, count);
            }
        }
        Ok(())
    }

    /// Fold `other` into this table, summing counts of matching words.
    ///
    /// The result does not depend on which table is folded into which.
    ///
    /// ## Errors
    /// [`WordtallyError::CountOverflow`] if any summed count no longer fits in `C`.
    /// The table is then only partially merged and should be discarded.
    pub fn merge(
        &mut self,
        other: Self,
    ) -> WTResult<()> {
        let mut other = other;
        if other.len() > self.len() {
            core::mem::swap(self, &mut other);
        }
        for (word, count) in other.counts {
            self.add(word, count)?;
        }
        Ok(())
    }

    /// Add every `(word, count)` entry of `entries`.
    ///
    /// ## Errors
    /// [`WordtallyError::CountOverflow`] as for [`FrequencyTable::add`].
    pub fn try_extend<I>(
        &mut self,
        entries: I,
    ) -> WTResult<()>
    where
        I: IntoIterator<Item = (K, C)>,
    {
        for (word, count) in entries {
            self.add(word, count)?;
        }
        Ok(())
    }

    /// Build a table from `(word, count)` entries, summing repeated words.
    ///
    /// ## Errors
    /// [`WordtallyError::CountOverflow`] as for [`FrequencyTable::add`].
    pub fn try_from_entries<I>(entries: I) -> WTResult<Self>
    where
        I: IntoIterator<Item = (K, C)>,
    {
        let mut table = Self::new();
        table.try_extend(entries)?;
        Ok(table)
    }

    /// The sum of all counts, or `None` if it does not fit in `C`.
    pub fn total(&self) -> Option<C> {
        self.counts
            .values()
            .try_fold(C::zero(), |acc, c| acc.checked_add(c))
    }

    /// Iterate over `(word, count)` entries, in unspecified order.
    pub fn iter(&self) -> WTHashIter<'_, K, C> {
        self.counts.iter()
    }

    /// Entries sorted by descending count, then ascending word.
    pub fn to_sorted_vec(&self) -> Vec<(K, C)> {
        let mut entries: Vec<(K, C)> = self
            .counts
            .iter()
            .map(|(k, &c)| (k.clone(), c))
            .collect();
        entries.sort_by(|(ka, ca), (kb, cb)| cb.cmp(ca).then_with(|| ka.cmp(kb)));
        entries
    }
}

impl<K, C> IntoIterator for FrequencyTable<K, C>
where
    K: TokenKey,
    C: CountType,
{
    type Item = (K, C);
    type IntoIter = <WTHashMap<K, C> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

impl<'a, K, C> IntoIterator for &'a FrequencyTable<K, C>
where
    K: TokenKey,
    C: CountType,
{
    type Item = (&'a K, &'a C);
    type IntoIter = WTHashIter<'a, K, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}
