use crate::ngrams::{occurrences, OccurrenceTable};
use compact_str::CompactString;
use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Only the most frequent n-grams of the compared table take part in the distance.
pub const RANK_WINDOW: usize = 300;

/// N-grams ranked by descending frequency, 1 is the most frequent.
///
/// A table made by [`RankTable::from_occurrences`] has dense ranks `1..=len`.
/// Ties are ordered by the n-gram itself, so the same text always gives the same table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankTable(FxHashMap<CompactString, usize>);

impl RankTable {
    pub fn from_occurrences(occurrences: OccurrenceTable) -> Self {
        let mut ranks =
            FxHashMap::with_capacity_and_hasher(occurrences.len(), Default::default());
        ranks.extend(
            occurrences
                .into_iter()
                .sorted_unstable_by(|(ngram1, cnt1), (ngram2, cnt2)| {
                    cnt2.cmp(cnt1).then_with(|| ngram1.cmp(ngram2))
                })
                .enumerate()
                .map(|(i, (ngram, _))| (ngram, i + 1)),
        );

        Self(ranks)
    }

    #[inline]
    pub fn from_text(text: &str) -> Self {
        Self::from_occurrences(occurrences(text))
    }

    #[inline]
    pub fn rank(&self, ngram: &str) -> Option<usize> {
        self.0.get(ngram).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(ngram, &rank)| (ngram.as_str(), rank))
    }

    /// Count of n-grams within [`RANK_WINDOW`]
    #[inline]
    pub fn window_len(&self) -> usize {
        self.0.values().filter(|&&rank| rank <= RANK_WINDOW).count()
    }

    /// Out-of-place distance from `self` to `other`, lower is closer.
    ///
    /// Only n-grams of `self` ranked within [`RANK_WINDOW`] are counted.
    /// Each contributes its absolute rank difference, capped at `max_distance`,
    /// or `max_distance` if `other` lacks it.
    /// So the result is in `0..=max_distance * self.window_len()`.
    pub fn distance(&self, other: &RankTable, max_distance: usize) -> usize {
        self.0
            .iter()
            .filter(|(_, &rank)| rank <= RANK_WINDOW)
            .map(|(ngram, &rank)| match other.0.get(ngram) {
                Some(&other_rank) => other_rank.abs_diff(rank).min(max_distance),
                None => max_distance,
            })
            .sum()
    }
}

impl<K: Into<CompactString>> FromIterator<(K, usize)> for RankTable {
    fn from_iter<I: IntoIterator<Item = (K, usize)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(ngram, rank)| (ngram.into(), rank))
                .collect(),
        )
    }
}
