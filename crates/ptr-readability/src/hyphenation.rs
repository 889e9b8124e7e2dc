//! Hyphenation service used for syllable counting.
//!
//! A word's syllable count is the number of hyphenation break positions plus
//! one. [`Hyphenator`] is the seam for an external hyphenation engine;
//! [`DictionaryHyphenator`] is the built-in implementation: explicit entries
//! (built-in, then an optional user dictionary file) with a vowel-group
//! heuristic for everything else.

use std::collections::HashMap;

use camino::Utf8Path;

use crate::dictionaries::hyphenated_words::{self, parse_hyphenated};
use crate::error::ResourceError;

/// Finds syllable break positions in a word.
///
/// Implementations must be safe to share across worker threads; they are
/// loaded once and never mutated.
pub trait Hyphenator: Send + Sync {
    /// Character offsets at which the word may be hyphenated.
    fn positions(&self, word: &str) -> Vec<usize>;

    /// Number of syllables in `word`. Always at least 1.
    fn syllable_count(&self, word: &str) -> usize {
        self.positions(word).len() + 1
    }
}

/// Dictionary-backed hyphenator with a heuristic fallback.
#[derive(Debug, Clone, Default)]
pub struct DictionaryHyphenator {
    /// Entries loaded from a user dictionary; consulted before built-ins.
    custom: HashMap<String, Vec<usize>>,
}

impl DictionaryHyphenator {
    /// Hyphenator using only the built-in entries and the heuristic.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add entries from hyphenated spellings such as `choc-o-late`.
    pub fn with_entries<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in entries {
            let entry = entry.as_ref().trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            let (word, positions) = parse_hyphenated(entry);
            if word.is_empty() {
                tracing::warn!(entry, "skipping hyphenation entry with no letters");
                continue;
            }
            self.custom.insert(word, positions);
        }
        self
    }

    /// Load a user dictionary file: one hyphenated word per line.
    #[tracing::instrument(skip_all, fields(path = %path))]
    pub fn from_file(path: &Utf8Path) -> Result<Self, ResourceError> {
        let content =
            std::fs::read_to_string(path.as_std_path()).map_err(|e| ResourceError::Missing {
                resource: "hyphenation dictionary",
                path: path.to_path_buf(),
                source: e,
            })?;
        let hyphenator = Self::new().with_entries(content.lines());
        tracing::info!(
            entries = hyphenator.custom.len(),
            "hyphenation dictionary loaded"
        );
        Ok(hyphenator)
    }

    /// Number of user dictionary entries.
    pub fn custom_entries(&self) -> usize {
        self.custom.len()
    }
}

impl Hyphenator for DictionaryHyphenator {
    fn positions(&self, word: &str) -> Vec<usize> {
        let lower = word.to_lowercase();
        if let Some(positions) = self.custom.get(&lower) {
            return positions.clone();
        }
        if let Some(positions) = hyphenated_words::lookup_positions(&lower) {
            return positions.to_vec();
        }
        estimate_positions(&lower)
    }
}

const fn is_vowel(ch: char, index: usize) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u') || (ch == 'y' && index > 0)
}

/// Estimate break positions from vowel groups.
///
/// Each maximal vowel group is a syllable nucleus, except a silent final
/// `e` and an unvoiced `-ed` ending. A single consonant between nuclei
/// starts the next syllable (`ba-con`); a cluster is split after its first
/// consonant (`bas-ket`).
pub fn estimate_positions(word: &str) -> Vec<usize> {
    let chars: Vec<char> = word.chars().flat_map(char::to_lowercase).collect();

    // (start, end) of each vowel group, end exclusive.
    let mut groups: Vec<(usize, usize)> = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if is_vowel(chars[i], i) {
            let start = i;
            while i < chars.len() && is_vowel(chars[i], i) {
                i += 1;
            }
            groups.push((start, i));
        } else {
            i += 1;
        }
    }

    if groups.len() > 1 && is_silent_ending(&chars, groups[groups.len() - 1]) {
        groups.pop();
    }

    groups
        .windows(2)
        .filter_map(|pair| {
            let (_, prev_end) = pair[0];
            let (next_start, _) = pair[1];
            let cluster = next_start - prev_end;
            match cluster {
                0 => None,
                1 => Some(prev_end),
                _ => Some(prev_end + 1),
            }
        })
        .collect()
}

/// Whether the last vowel group is a silent `-e` or an unvoiced `-ed`.
fn is_silent_ending(chars: &[char], (start, end): (usize, usize)) -> bool {
    let len = chars.len();
    let single_e = end - start == 1 && chars[start] == 'e';
    if !single_e || start == 0 {
        return false;
    }
    let before = chars[start - 1];
    if end == len {
        // Syllabic -le after a consonant (ta-ble) keeps its nucleus.
        let syllabic_le = before == 'l'
            && start >= 2
            && !is_vowel(chars[start - 2], start - 2);
        return !syllabic_le && !is_vowel(before, start - 1);
    }
    // -ed is voiced after t or d (want-ed, need-ed).
    end + 1 == len && chars[end] == 'd' && !matches!(before, 't' | 'd')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_dictionary_wins_over_heuristic() {
        let h = DictionaryHyphenator::new();
        assert_eq!(h.syllable_count("area"), 3);
        assert_eq!(h.syllable_count("chocolate"), 3);
        assert_eq!(h.positions("chocolate"), vec![4, 5]);
    }

    #[test]
    fn heuristic_counts() {
        let h = DictionaryHyphenator::new();
        assert_eq!(h.syllable_count("cat"), 1);
        assert_eq!(h.syllable_count("hello"), 2);
        assert_eq!(h.syllable_count("make"), 1);
        assert_eq!(h.syllable_count("jumped"), 1);
        assert_eq!(h.syllable_count("wanted"), 2);
        assert_eq!(h.syllable_count("candle"), 2);
        assert_eq!(h.syllable_count("basket"), 2);
        assert_eq!(h.syllable_count("computer"), 3);
    }

    #[test]
    fn heuristic_positions() {
        assert_eq!(estimate_positions("bacon"), vec![2]);
        assert_eq!(estimate_positions("basket"), vec![3]);
        assert!(estimate_positions("strength").is_empty());
    }

    #[test]
    fn at_least_one_syllable() {
        let h = DictionaryHyphenator::new();
        for word in ["", "a", "e", "hmm", "1990", "n't", "'s", "y", "the"] {
            assert!(h.syllable_count(word) >= 1, "{word:?}");
        }
    }

    #[test]
    fn custom_entries_override_builtins() {
        let h = DictionaryHyphenator::new().with_entries(["# comment", "", "are-a", "zeb-ra"]);
        assert_eq!(h.syllable_count("area"), 2);
        assert_eq!(h.syllable_count("Zebra"), 2);
        assert_eq!(h.custom_entries(), 2);
    }

    #[test]
    fn from_file_missing_is_an_error() {
        let err = DictionaryHyphenator::from_file(Utf8Path::new("/nonexistent/hyph.dic"));
        assert!(matches!(err, Err(ResourceError::Missing { .. })));
    }
}
