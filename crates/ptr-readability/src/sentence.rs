//! Tagged tokens, tagged sentences, and per-sentence primitives.
//!
//! Word-level primitives (counts, lengths, syllables, long words) are all
//! computed over the depunctuated sentence, so for any sentence
//! `word_count == word_lengths().len() == syllable_counts().len()`.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::{InputError, InputResult, ScoreError, ScoreResult};
use crate::hyphenation::Hyphenator;
use crate::tags::{self, PunctuationSet};
use crate::word_list::WordList;

/// A `(word, tag)` pair. Serialized as a two-element array.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct TaggedToken {
    /// Surface form.
    pub word: String,
    /// Part-of-speech tag.
    pub tag: String,
}

impl TaggedToken {
    /// Create a token.
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }

    /// Parse `word/TAG`, splitting at the last slash. The tag is kept verbatim.
    ///
    /// Returns `None` when there is no slash or either side is empty.
    pub fn parse(token: &str) -> Option<Self> {
        let (word, tag) = token.rsplit_once('/')?;
        if word.is_empty() || tag.is_empty() {
            return None;
        }
        Some(Self::new(word, tag))
    }
}

impl From<(String, String)> for TaggedToken {
    fn from((word, tag): (String, String)) -> Self {
        Self { word, tag }
    }
}

impl From<TaggedToken> for (String, String) {
    fn from(token: TaggedToken) -> Self {
        (token.word, token.tag)
    }
}

impl From<(&str, &str)> for TaggedToken {
    fn from((word, tag): (&str, &str)) -> Self {
        Self::new(word, tag)
    }
}

impl std::fmt::Display for TaggedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.word, self.tag)
    }
}

/// An ordered sequence of tagged tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaggedSentence {
    tokens: Vec<TaggedToken>,
}

impl TaggedSentence {
    /// Create a sentence from tokens.
    pub const fn new(tokens: Vec<TaggedToken>) -> Self {
        Self { tokens }
    }

    /// Parse a whitespace-separated line of `word/TAG` tokens.
    ///
    /// `line` is the one-based line number used in error messages.
    pub fn parse(text: &str, line: usize) -> InputResult<Self> {
        text.split_whitespace()
            .map(|raw| {
                TaggedToken::parse(raw).ok_or_else(|| InputError::MalformedToken {
                    line,
                    token: raw.to_string(),
                })
            })
            .collect::<InputResult<Vec<_>>>()
            .map(Self::new)
    }

    /// The sentence's tokens.
    pub fn tokens(&self) -> &[TaggedToken] {
        &self.tokens
    }

    /// Consume the sentence, returning its tokens.
    pub fn into_tokens(self) -> Vec<TaggedToken> {
        self.tokens
    }

    /// Iterate over the tags in order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.tag.as_str())
    }
}

impl Deref for TaggedSentence {
    type Target = [TaggedToken];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

impl FromIterator<TaggedToken> for TaggedSentence {
    fn from_iter<I: IntoIterator<Item = TaggedToken>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for TaggedSentence {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        iter.into_iter().map(TaggedToken::from).collect()
    }
}

impl From<Vec<TaggedToken>> for TaggedSentence {
    fn from(tokens: Vec<TaggedToken>) -> Self {
        Self::new(tokens)
    }
}

impl std::fmt::Display for TaggedSentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Copy of `sentence` without punctuation tokens, order preserved.
pub fn depunctuate(sentence: &[TaggedToken], set: PunctuationSet) -> TaggedSentence {
    sentence
        .iter()
        .filter(|t| !set.contains(&t.tag))
        .cloned()
        .collect()
}

/// Non-punctuation words of `sentence`, in order.
pub fn words(sentence: &[TaggedToken], set: PunctuationSet) -> impl Iterator<Item = &str> {
    sentence
        .iter()
        .filter(move |t| !set.contains(&t.tag))
        .map(|t| t.word.as_str())
}

/// Number of non-punctuation words.
pub fn word_count(sentence: &[TaggedToken], set: PunctuationSet) -> usize {
    words(sentence, set).count()
}

/// Length in characters of each non-punctuation word.
pub fn word_lengths(sentence: &[TaggedToken], set: PunctuationSet) -> Vec<usize> {
    words(sentence, set).map(|w| w.chars().count()).collect()
}

/// Mean word length. Fails when the sentence has no non-punctuation words.
pub fn avg_word_length(sentence: &[TaggedToken], set: PunctuationSet) -> ScoreResult<f64> {
    let lengths = word_lengths(sentence, set);
    if lengths.is_empty() {
        return Err(ScoreError::Division {
            metric: "average word length",
            sentence: None,
        });
    }
    Ok(lengths.iter().sum::<usize>() as f64 / lengths.len() as f64)
}

/// Syllable count of each non-punctuation word.
pub fn syllable_counts(
    sentence: &[TaggedToken],
    set: PunctuationSet,
    hyphenator: &dyn Hyphenator,
) -> Vec<usize> {
    words(sentence, set)
        .map(|w| hyphenator.syllable_count(w))
        .collect()
}

/// Words with exactly one syllable.
pub fn monosyllable_count(syllables: &[usize]) -> usize {
    syllables.iter().filter(|&&s| s == 1).count()
}

/// Words with three or more syllables.
pub fn polysyllable_count(syllables: &[usize]) -> usize {
    syllables.iter().filter(|&&s| s >= 3).count()
}

/// Non-punctuation words found in `list` (case-insensitive).
pub fn long_word_count(sentence: &[TaggedToken], set: PunctuationSet, list: &WordList) -> usize {
    words(sentence, set).filter(|w| list.contains(w)).count()
}

/// Rebuild readable text from tokens.
///
/// Tokens are joined by single spaces, except after opening brackets,
/// currency symbols and opening quotes, and before closing punctuation,
/// possessive endings and closing quotes.
pub fn reconstruct_text(sentence: &[TaggedToken]) -> String {
    let mut text = String::new();
    let mut previous_tag: Option<&str> = None;
    for token in sentence {
        let glued = previous_tag.is_some_and(|tag| tags::NO_SPACE_AFTER.contains(tag))
            || tags::NO_SPACE_BEFORE.contains(token.tag.as_str());
        if !glued {
            text.push(' ');
        }
        text.push_str(&token.word);
        previous_tag = Some(token.tag.as_str());
    }
    if text.starts_with(' ') {
        text.remove(0);
    }
    text
}
