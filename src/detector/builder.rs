use super::{Detector, LanguageComparator, MinimumConfidence};
use crate::{profile::Profile, storage::ProfilesStorage};
use compact_str::CompactString;

#[derive(Debug, Default)]
pub struct DetectorBuilder {
    languages: Vec<Box<dyn LanguageComparator>>,
    minimum_confidence: MinimumConfidence,
}

impl DetectorBuilder {
    /// No languages, default minimum confidence
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn build(self) -> Detector {
        Detector {
            languages: self.languages,
            minimum_confidence: self.minimum_confidence,
        }
    }

    /// Values outside of `(0.0, 1.0]` are replaced with the default
    #[inline]
    pub fn minimum_confidence(mut self, minimum_confidence: f32) -> Self {
        self.minimum_confidence = MinimumConfidence::new(minimum_confidence);
        self
    }

    /// Analyzes a training text
    #[inline]
    pub fn language(self, name: impl Into<CompactString>, training_text: &str) -> Self {
        self.profile(Profile::analyze(training_text, name))
    }

    #[inline]
    pub fn profile(self, profile: Profile) -> Self {
        self.comparator(profile)
    }

    #[inline]
    pub fn profiles(mut self, profiles: impl IntoIterator<Item = Profile>) -> Self {
        for profile in profiles {
            self = self.profile(profile);
        }
        self
    }

    /// Adds all profiles of the storage
    #[inline]
    pub fn storage(mut self, storage: &ProfilesStorage) -> Self {
        for profile in storage.iter() {
            self = self.comparator(profile.clone());
        }
        self
    }

    #[inline]
    pub fn comparator(mut self, comparator: impl LanguageComparator + 'static) -> Self {
        self.languages.push(Box::new(comparator));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::DetectorBuilder;
    use crate::{Profile, ProfilesStorage, DEFAULT_MINIMUM_CONFIDENCE};
    use float_cmp::approx_eq;

    #[test]
    fn test_build_empty() {
        let detector = DetectorBuilder::new().build();
        assert!(detector.is_empty());
        assert!(approx_eq!(
            f32,
            detector.minimum_confidence(),
            DEFAULT_MINIMUM_CONFIDENCE,
            ulps = 2
        ));
    }

    #[test]
    fn test_build_languages() {
        let storage = ProfilesStorage::from_profiles([Profile::analyze("ab", "first")]);
        let detector = DetectorBuilder::new()
            .minimum_confidence(0.4)
            .storage(&storage)
            .language("second", "cd")
            .profiles([Profile::analyze("ef", "third"), Profile::analyze("gh", "fourth")])
            .build();

        assert_eq!(detector.len(), 4);
        assert!(approx_eq!(f32, detector.minimum_confidence(), 0.4, ulps = 2));
    }

    #[test]
    fn test_invalid_minimum_confidence() {
        let detector = DetectorBuilder::new().minimum_confidence(2.0).build();
        assert!(approx_eq!(
            f32,
            detector.minimum_confidence(),
            DEFAULT_MINIMUM_CONFIDENCE,
            ulps = 2
        ));
    }
}
