use crate::{profile::Profile, storage::ProfilesStorage};
use ::core::cmp::Ordering;
use compact_str::CompactString;

mod builder;
mod comparator;
mod config;
mod lazy_ranks;

pub use builder::DetectorBuilder;
pub use comparator::{confidence, DetectionResult, LanguageComparator};
pub use config::{MinimumConfidence, DEFAULT_MINIMUM_CONFIDENCE};
pub use lazy_ranks::LazyRanks;

/// Returned by [`Detector::closest_language_or_undefined`] when no language is confident enough
pub const UNDEFINED: &str = "undefined";

/// Holds the detectable languages and picks the closest one to a text.
///
/// Languages are only appended. Registration takes `&mut self`, so it can't
/// overlap with a detection.
#[derive(Debug, Default)]
pub struct Detector {
    languages: Vec<Box<dyn LanguageComparator>>,
    minimum_confidence: MinimumConfidence,
}

impl Detector {
    /// Detector without any language
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Detector with the bundled languages of [`ProfilesStorage::bundled`]
    #[inline]
    pub fn with_default_languages() -> Self {
        Self::from_storage(&ProfilesStorage::bundled())
    }

    /// Profiles are shared with the storage, not copied
    #[inline]
    pub fn from_storage(storage: &ProfilesStorage) -> Self {
        DetectorBuilder::new().storage(storage).build()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    #[inline]
    pub fn minimum_confidence(&self) -> f32 {
        self.minimum_confidence.get()
    }

    /// Values outside of `(0.0, 1.0]` are replaced with [`DEFAULT_MINIMUM_CONFIDENCE`]
    #[inline]
    pub fn set_minimum_confidence(&mut self, minimum_confidence: f32) {
        self.minimum_confidence = MinimumConfidence::new(minimum_confidence);
    }

    /// Analyzes a training text, the language will be detectable afterwards
    pub fn add_language(&mut self, name: impl Into<CompactString>, training_text: &str) {
        self.add_profile(Profile::analyze(training_text, name));
    }

    #[inline]
    pub fn add_profile(&mut self, profile: Profile) {
        self.add_comparator(profile);
    }

    pub fn add_profiles(&mut self, profiles: impl IntoIterator<Item = Profile>) {
        for profile in profiles {
            self.add_profile(profile);
        }
    }

    #[inline]
    pub fn add_comparator(&mut self, comparator: impl LanguageComparator + 'static) {
        self.languages.push(Box::new(comparator));
    }

    /// Compares the text with every language.
    ///
    /// Result is sorted by confidence in a descending order,
    /// equal confidences keep the registration order.
    pub fn languages(&self, text: &str) -> Vec<DetectionResult> {
        let ranks = LazyRanks::new(text);
        self.compare_all(&ranks)
    }

    /// Detects the closest language of the text.
    ///
    /// If its confidence is below the minimum confidence, or there are no languages,
    /// [`None`] is returned.
    pub fn closest_language(&self, text: &str) -> Option<CompactString> {
        if self.languages.is_empty() {
            tracing::warn!("No languages configured for this detector");
            return None;
        }

        let ranks = LazyRanks::new(text);
        let closest = self.compare_all(&ranks).into_iter().next()?;
        tracing::trace!("Closest language {} {}%", closest.name, closest.confidence);

        if closest.confidence < self.minimum_confidence.as_percent() {
            return None;
        }

        Some(closest.name)
    }

    /// Same as [`Detector::closest_language`], but returns [`UNDEFINED`] instead of [`None`]
    #[inline]
    pub fn closest_language_or_undefined(&self, text: &str) -> CompactString {
        self.closest_language(text)
            .unwrap_or_else(|| UNDEFINED.into())
    }

    fn compare_all(&self, ranks: &LazyRanks<'_>) -> Vec<DetectionResult> {
        let mut results: Vec<_> = self
            .languages
            .iter()
            .map(|language| language.compare_to(ranks, ranks.text()))
            .collect();

        results.sort_by(order_by_confidence);
        results
    }
}

#[inline]
fn order_by_confidence(first: &DetectionResult, second: &DetectionResult) -> Ordering {
    second.confidence.cmp(&first.confidence)
}
