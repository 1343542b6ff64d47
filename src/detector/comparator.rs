use super::LazyRanks;
use ::std::{fmt, sync::Arc};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Confidence of a single language, in percent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DetectionResult {
    pub name: CompactString,
    pub confidence: u8,
}

/// Something that can score an unknown text against itself.
///
/// [`Profile`](crate::Profile) is the built-in implementation.
pub trait LanguageComparator: fmt::Debug + Send + Sync {
    /// `ranks` is shared by every comparator of a single detection call,
    /// the text is ranked on the first [`LazyRanks::get`] only.
    fn compare_to(&self, ranks: &LazyRanks<'_>, original_text: &str) -> DetectionResult;
}

impl<C: LanguageComparator + ?Sized> LanguageComparator for Arc<C> {
    #[inline]
    fn compare_to(&self, ranks: &LazyRanks<'_>, original_text: &str) -> DetectionResult {
        (**self).compare_to(ranks, original_text)
    }
}

impl<C: LanguageComparator + ?Sized> LanguageComparator for Box<C> {
    #[inline]
    fn compare_to(&self, ranks: &LazyRanks<'_>, original_text: &str) -> DetectionResult {
        (**self).compare_to(ranks, original_text)
    }
}

/// Maps an out-of-place distance to a percent.
///
/// `window_len` n-grams each contributed at most `max_distance`,
/// so 0 distance is 100% and the maximum possible distance is 0%.
/// Nothing to compare is 0%.
pub fn confidence(distance: usize, max_distance: usize, window_len: usize) -> u8 {
    let max_possible = max_distance * window_len;
    if max_possible == 0 {
        return 0;
    }

    let closeness = max_possible - distance.min(max_possible);
    (100 * closeness / max_possible) as u8
}
