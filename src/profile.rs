use crate::{
    detector::{confidence, DetectionResult, LanguageComparator, LazyRanks},
    rank::RankTable,
};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Named rank table of a language, built once from a training text.
///
/// Serialized as `{"name": .., "profile": {ngram: rank}}`,
/// `Name` and `Profile` keys are also accepted when reading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(alias = "Name")]
    name: CompactString,
    #[serde(rename = "profile", alias = "Profile")]
    ranks: RankTable,
}

impl Profile {
    #[inline]
    pub fn new(name: impl Into<CompactString>, ranks: RankTable) -> Self {
        Self {
            name: name.into(),
            ranks,
        }
    }

    /// Builds a profile from a training text
    pub fn analyze(training_text: &str, name: impl Into<CompactString>) -> Self {
        let name = name.into();
        let ranks = RankTable::from_text(training_text);
        tracing::debug!("Analyzed profile {name}: {} ngrams", ranks.len());

        Self { name, ranks }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn ranks(&self) -> &RankTable {
        &self.ranks
    }
}

impl LanguageComparator for Profile {
    /// Distance is capped at the profile length,
    /// so an n-gram found anywhere in the profile costs less than a missing one.
    fn compare_to(&self, ranks: &LazyRanks<'_>, _original_text: &str) -> DetectionResult {
        let input = ranks.get();
        let max_distance = self.ranks.len();
        let distance = input.distance(&self.ranks, max_distance);

        DetectionResult {
            name: self.name.clone(),
            confidence: confidence(distance, max_distance, input.window_len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENGLISH: &str = include_str!("../corpus/english.txt");
    const RUSSIAN: &str = include_str!("../corpus/russian.txt");

    fn compare(profile: &Profile, text: &str) -> DetectionResult {
        profile.compare_to(&LazyRanks::new(text), text)
    }

    #[test]
    fn test_analyze() {
        let profile = Profile::analyze("ab", "tiny");
        assert_eq!(profile.name(), "tiny");
        assert_eq!(profile.ranks().len(), 9);
        assert_eq!(profile.ranks().rank("_"), Some(1));
    }

    #[test]
    fn test_self_match() {
        let profile = Profile::analyze(ENGLISH, "english");
        let result = compare(&profile, ENGLISH);
        assert_eq!(result.name, "english");
        assert_eq!(result.confidence, 100);
    }

    #[test]
    fn test_different_script() {
        let profile = Profile::analyze(ENGLISH, "english");
        assert!(compare(&profile, RUSSIAN).confidence <= 2);
    }

    #[test]
    fn test_related_text_scores_higher() {
        let profile = Profile::analyze(ENGLISH, "english");
        let english = compare(&profile, "The children walked along the river to the school");
        let french = compare(&profile, "Les enfants marchaient le long de la rivière");
        assert!(english.confidence > french.confidence);
    }

    #[test]
    fn test_empty_input() {
        let profile = Profile::analyze(ENGLISH, "english");
        assert_eq!(compare(&profile, "").confidence, 0);
    }

    #[test]
    fn test_empty_profile() {
        let profile = Profile::analyze("", "empty");
        assert!(profile.ranks().is_empty());
        assert_eq!(compare(&profile, "some text").confidence, 0);
    }

    #[test]
    fn test_deserialize_legacy_keys() {
        let profile: Profile =
            serde_json::from_str(r#"{"Name":"tiny","Profile":{"_":1,"a":2}}"#).unwrap();
        assert_eq!(profile, Profile::new("tiny", RankTable::from_iter([("_", 1), ("a", 2)])));
    }
}
