//! Surface-text statistics and the corpus readability formulas.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ScoringOptions, map_sentences};
use crate::corpus::Corpus;
use crate::error::{ScoreError, ScoreResult};
use crate::readability;
use crate::resources::Resources;
use crate::sentence::{self, TaggedSentence};

/// Text statistics for one sentence, computed after depunctuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentenceTextStats {
    /// Word count, floored at 1.
    pub words: usize,
    /// Total characters across words.
    pub characters: usize,
    /// Characters per word.
    pub avg_word_length: f64,
    /// Syllables of each word, in order.
    pub syllables: Vec<usize>,
    /// Sum of `syllables`.
    pub total_syllables: usize,
    /// Words of exactly one syllable.
    pub monosyllables: usize,
    /// Words of three or more syllables.
    pub polysyllables: usize,
    /// Words found in the long-word list.
    pub long_words: usize,
}

impl SentenceTextStats {
    /// Compute the record for one sentence.
    pub fn compute(
        sentence: &TaggedSentence,
        resources: &Resources,
        options: &ScoringOptions,
    ) -> Self {
        let set = options.punctuation;
        let words = sentence::word_count(sentence, set).max(1);
        let characters: usize = sentence::word_lengths(sentence, set).iter().sum();
        let syllables = sentence::syllable_counts(sentence, set, resources.hyphenator());

        Self {
            words,
            characters,
            avg_word_length: characters as f64 / words as f64,
            total_syllables: syllables.iter().sum(),
            monosyllables: sentence::monosyllable_count(&syllables),
            polysyllables: sentence::polysyllable_count(&syllables),
            long_words: sentence::long_word_count(sentence, set, resources.long_words()),
            syllables,
        }
    }

    /// Metric name to value.
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("n_words", self.words as f64),
            ("n_characters", self.characters as f64),
            ("avg_word_length", self.avg_word_length),
            ("n_syllables", self.total_syllables as f64),
            ("n_monosyllables", self.monosyllables as f64),
            ("n_polysyllables", self.polysyllables as f64),
            ("n_long_words", self.long_words as f64),
        ])
    }
}

/// Corpus-level sums of the text statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextTotals {
    /// Number of sentences.
    pub sentences: usize,
    /// Total (floored) words.
    pub words: usize,
    /// Total characters.
    pub characters: usize,
    /// Total syllables.
    pub syllables: usize,
    /// Total monosyllabic words.
    pub monosyllables: usize,
    /// Total polysyllabic words.
    pub polysyllables: usize,
    /// Total long words.
    pub long_words: usize,
}

impl TextTotals {
    /// Characters per word across the corpus.
    pub fn avg_word_length(&self) -> ScoreResult<f64> {
        if self.words == 0 {
            return Err(ScoreError::Division {
                metric: "average word length",
                sentence: None,
            });
        }
        Ok(self.characters as f64 / self.words as f64)
    }

    /// SMOG grade. Requires at least 30 sentences.
    pub fn smog(&self) -> ScoreResult<f64> {
        readability::smog(self.polysyllables, self.words, self.sentences)
    }

    /// Flesch-Kincaid grade level.
    pub fn flesch_kincaid(&self) -> ScoreResult<f64> {
        readability::flesch_kincaid(self.words, self.sentences, self.syllables)
    }

    /// Dale-Chall (1961) score.
    pub fn dale_chall(&self) -> ScoreResult<f64> {
        readability::dale_chall(self.words, self.sentences, self.long_words)
    }

    /// Metric name to value.
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("n_sentences", self.sentences as f64),
            ("n_words", self.words as f64),
            ("n_characters", self.characters as f64),
            ("n_syllables", self.syllables as f64),
            ("n_monosyllables", self.monosyllables as f64),
            ("n_polysyllables", self.polysyllables as f64),
            ("n_long_words", self.long_words as f64),
        ])
    }
}

/// Text statistics over a corpus.
#[derive(Debug, Clone)]
pub struct TextStats {
    sentences: Vec<SentenceTextStats>,
}

impl TextStats {
    /// Build one record per sentence.
    ///
    /// Fails with [`ScoreError::EmptyCorpus`] for an empty corpus.
    #[tracing::instrument(skip_all, fields(sentences = corpus.len()))]
    pub fn new(
        corpus: &Corpus,
        resources: &Resources,
        options: &ScoringOptions,
    ) -> ScoreResult<Self> {
        if corpus.is_empty() {
            return Err(ScoreError::EmptyCorpus);
        }
        let sentences = map_sentences(corpus.sentences(), options, |s| {
            SentenceTextStats::compute(s, resources, options)
        })?;
        tracing::debug!("text statistics computed");
        Ok(Self { sentences })
    }

    /// Per-sentence records, in corpus order.
    pub fn sentences(&self) -> &[SentenceTextStats] {
        &self.sentences
    }

    /// The record for sentence `index`.
    pub fn sentence(&self, index: usize) -> Option<&SentenceTextStats> {
        self.sentences.get(index)
    }

    /// Number of sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Always false; construction rejects empty corpora.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Sum every metric across sentences.
    pub fn totals(&self) -> TextTotals {
        self.sentences.iter().fold(
            TextTotals {
                sentences: self.sentences.len(),
                ..TextTotals::default()
            },
            |mut acc, s| {
                acc.words += s.words;
                acc.characters += s.characters;
                acc.syllables += s.total_syllables;
                acc.monosyllables += s.monosyllables;
                acc.polysyllables += s.polysyllables;
                acc.long_words += s.long_words;
                acc
            },
        )
    }
}
