use crate::ngram_size::NgramSize;
use ahash::AHashMap;
use compact_str::CompactString;
use strum::IntoEnumIterator;

/// Marks word boundaries, so `_th` and `he_` are distinct from `th` and `he`.
pub const WORD_PADDING: char = '_';

/// N-gram occurrence counts of a single text.
pub type OccurrenceTable = AHashMap<CompactString, usize>;

/// Lower-cased alphabetic words, each padded with [`WORD_PADDING`] on both sides.
///
/// Any non alphabetic char (digits, punctuation, whitespace, `_`) separates words.
pub(crate) fn padded_words(text: &str) -> impl Iterator<Item = Vec<char>> + '_ {
    text.split(|ch: char| !ch.is_alphabetic())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut buf = Vec::with_capacity(word.len() + 2);
            buf.push(WORD_PADDING);
            buf.extend(word.chars().flat_map(char::to_lowercase));
            buf.push(WORD_PADDING);
            buf
        })
}

/// Counts every n-gram of length `1..=NGRAM_DEPTH` found in the text.
///
/// Each char position of a padded word starts one n-gram of every length that fits
/// into the word, so a single position contributes to up to [`NGRAM_DEPTH`](crate::NGRAM_DEPTH)
/// distinct n-grams.
pub fn occurrences(text: &str) -> OccurrenceTable {
    let mut table = OccurrenceTable::new();

    for word in padded_words(text) {
        for start in 0..word.len() {
            for ngram_size in NgramSize::iter() {
                let Some(ngram) = word.get(start..start + ngram_size.len()) else {
                    break;
                };
                *table
                    .entry(ngram.iter().copied().collect::<CompactString>())
                    .or_default() += 1;
            }
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn table(entries: &[(&str, usize)]) -> OccurrenceTable {
        entries
            .iter()
            .map(|&(ngram, cnt)| (CompactString::from(ngram), cnt))
            .collect()
    }

    #[test]
    fn test_padded_words() {
        let words: Vec<String> = padded_words("Hello, wORLD! 42 foo_bar")
            .map(|w| w.into_iter().collect())
            .collect();
        assert_eq!(words, ["_hello_", "_world_", "_foo_", "_bar_"]);
    }

    #[test]
    fn test_occurrences_two_letters() {
        let expected = table(&[
            ("_", 2),
            ("_a", 1),
            ("_ab", 1),
            ("_ab_", 1),
            ("a", 1),
            ("ab", 1),
            ("ab_", 1),
            ("b", 1),
            ("b_", 1),
        ]);
        assert_eq!(occurrences("ab"), expected);
    }

    #[test]
    fn test_occurrences_case_insensitive() {
        assert_eq!(occurrences("Ab AB"), occurrences("ab ab"));
    }

    #[test]
    fn test_occurrences_counts_repeated_words() {
        let table = occurrences("ab ab");
        assert_eq!(table.get("_"), Some(&4));
        assert_eq!(table.get("_ab_"), Some(&2));
        assert_eq!(table.len(), 9);
    }

    #[test]
    fn test_occurrences_short_text() {
        // "_a_" is shorter than the depth, only fitting lengths are counted
        let expected = table(&[("_", 2), ("_a", 1), ("_a_", 1), ("a", 1), ("a_", 1)]);
        assert_eq!(occurrences("a"), expected);
    }

    #[test]
    fn test_occurrences_longest_ngram() {
        let table = occurrences("abcdef");
        assert!(table.keys().all(|ngram| ngram.chars().count() <= 4));
        assert!(table.contains_key("bcde"));
        assert!(!table.contains_key("abcde"));
    }

    #[rstest(text, case(""), case("   "), case("123 456"), case("?!.,;:()"), case("___"))]
    fn test_occurrences_empty(text: &str) {
        assert!(occurrences(text).is_empty());
    }

    #[test]
    fn test_occurrences_non_latin() {
        let table = occurrences("мир");
        assert_eq!(table.get("_мир"), Some(&1));
        assert_eq!(table.get("мир_"), Some(&1));
    }
}
