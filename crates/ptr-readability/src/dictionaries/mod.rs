//! Dictionaries for syllable counting.
//!
//! Provides the built-in hyphenation entries consulted before the
//! vowel-group heuristic.

pub mod hyphenated_words;
