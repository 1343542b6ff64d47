//! # Language detection by character n-gram rank profiles
//!
//! Every language is a [`Profile`]: n-grams of 1 to 4 chars of a training text,
//! ranked by frequency. A text is ranked the same way and compared with every profile
//! using the out-of-place distance, which is turned into a confidence percent.
//!
//! No models or network are required, profiles are built from any training text.
//! [`ProfilesStorage::bundled`] contains a few ready to use languages.
//!
//! # Example
//! ```rust
//! use langdet::{Detector, DetectorBuilder, ProfilesStorage};
//!
//! let storage = ProfilesStorage::bundled();
//! let detector = DetectorBuilder::new()
//!     .storage(&storage)
//!     .minimum_confidence(0.7)
//!     .build();
//!
//! let closest = detector.closest_language("The quick brown fox jumps over the lazy dog");
//! assert_eq!(closest.as_deref(), Some("english"));
//!
//! // all languages, ordered by confidence
//! let results = detector.languages("Le vif renard brun sauta par-dessus le chien paresseux");
//! assert_eq!(results[0].name, "french");
//!
//! // own languages
//! let mut detector = Detector::new();
//! detector.add_language("latin", "Gallia est omnis divisa in partes tres");
//! ```

mod detector;
mod ngram_size;
mod ngrams;
mod profile;
mod rank;
mod storage;

pub use detector::{
    confidence, DetectionResult, Detector, DetectorBuilder, LanguageComparator, LazyRanks,
    MinimumConfidence, DEFAULT_MINIMUM_CONFIDENCE, UNDEFINED,
};
pub use ngram_size::NgramSize;
pub use ngrams::{occurrences, OccurrenceTable, WORD_PADDING};
pub use profile::Profile;
pub use rank::{RankTable, RANK_WINDOW};
pub use storage::{ProfilesStorage, ProfilesStorageError};

/// Maximum n-gram length, in chars
pub const NGRAM_DEPTH: usize = 4;
