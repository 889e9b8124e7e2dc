//! The corpus: an ordered sequence of tagged sentences.
//!
//! Sentence order defines the index shared by every aggregator and by the
//! parse-tree sequence. A single sentence is normalised to a one-element
//! corpus with [`Corpus::from`].

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::InputResult;
use crate::sentence::TaggedSentence;

/// Ordered, possibly empty, sequence of tagged sentences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    sentences: Vec<TaggedSentence>,
}

impl Corpus {
    /// Create a corpus from sentences.
    pub const fn new(sentences: Vec<TaggedSentence>) -> Self {
        Self { sentences }
    }

    /// Read one sentence of `word/TAG` tokens per non-empty line.
    pub fn parse_tagged(text: &str) -> InputResult<Self> {
        text.lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| TaggedSentence::parse(line, i + 1))
            .collect::<InputResult<Vec<_>>>()
            .map(Self::new)
    }

    /// Read a JSON array of sentences, each an array of `[word, tag]` pairs.
    pub fn from_json(json: &str) -> InputResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The sentences in order.
    pub fn sentences(&self) -> &[TaggedSentence] {
        &self.sentences
    }

    /// Consume the corpus, returning its sentences.
    pub fn into_sentences(self) -> Vec<TaggedSentence> {
        self.sentences
    }
}

impl Deref for Corpus {
    type Target = [TaggedSentence];

    fn deref(&self) -> &Self::Target {
        &self.sentences
    }
}

impl From<TaggedSentence> for Corpus {
    fn from(sentence: TaggedSentence) -> Self {
        Self::new(vec![sentence])
    }
}

impl From<Vec<TaggedSentence>> for Corpus {
    fn from(sentences: Vec<TaggedSentence>) -> Self {
        Self::new(sentences)
    }
}

impl FromIterator<TaggedSentence> for Corpus {
    fn from_iter<I: IntoIterator<Item = TaggedSentence>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a TaggedSentence;
    type IntoIter = std::slice::Iter<'a, TaggedSentence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sentences.iter()
    }
}
