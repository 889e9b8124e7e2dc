//! Parse Tree Readability: the composite text, tag, and tree score.
//!
//! For sentence `i` with text stats `T`, tag stats `G`, and tree stats `R`:
//!
//! ```text
//! text = 15 + 10 * T.polysyllables / T.words - 15 * T.long_words / T.words
//! tag  = G.distinct_tags / (T.words - G.repeated_adverbs - G.repeated_possessives)
//! tree = 1.7 * (R.noun_phrases + R.prepositional_phrases) / R.height + 0.7 * R.height
//! ptr  = 0.4 * text + tag + 0.6 * tree
//! ```
//!
//! The corpus score is the mean of the per-sentence values.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ScoreError, ScoreResult};
use crate::stats::{SentenceTagStats, SentenceTextStats, SentenceTreeStats};

/// Sub-scores and composite for one sentence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentencePtr {
    /// Surface-text complexity.
    pub text_complexity: f64,
    /// Tag diversity relative to non-repeated words.
    pub tag_complexity: f64,
    /// Phrase density and depth.
    pub tree_complexity: f64,
    /// Weighted composite.
    pub ptr: f64,
}

impl SentencePtr {
    /// Score sentence `index` from its three records.
    pub fn compute(
        index: usize,
        text: &SentenceTextStats,
        tags: &SentenceTagStats,
        tree: &SentenceTreeStats,
    ) -> ScoreResult<Self> {
        let text_complexity = text_complexity(text);
        let tag_complexity = tag_complexity(index, text, tags)?;
        let tree_complexity = tree_complexity(index, tree)?;
        Ok(Self {
            text_complexity,
            tag_complexity,
            tree_complexity,
            ptr: 0.4f64.mul_add(text_complexity, tag_complexity) + 0.6 * tree_complexity,
        })
    }
}

/// Per-sentence PTR values and their mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PtrReport {
    /// One entry per sentence, in corpus order.
    pub sentences: Vec<SentencePtr>,
    /// Mean PTR over all sentences.
    pub score: f64,
}

/// Score a corpus from three index-aligned sequences of records.
///
/// Fails with [`ScoreError::RecordCount`] when the tag records and
/// [`ScoreError::Alignment`] when the tree records differ in length from the
/// text records, [`ScoreError::EmptyCorpus`] when they are empty, and with a
/// per-sentence [`ScoreError::Division`] or [`ScoreError::Domain`] on the
/// first degenerate sentence.
#[tracing::instrument(skip_all, fields(sentences = text.len()))]
pub fn score(
    text: &[SentenceTextStats],
    tags: &[SentenceTagStats],
    trees: &[SentenceTreeStats],
) -> ScoreResult<PtrReport> {
    if tags.len() != text.len() {
        return Err(ScoreError::RecordCount {
            records: "tag",
            expected: text.len(),
            found: tags.len(),
        });
    }
    if trees.len() != text.len() {
        return Err(ScoreError::Alignment {
            sentences: text.len(),
            trees: trees.len(),
        });
    }
    if text.is_empty() {
        return Err(ScoreError::EmptyCorpus);
    }

    let sentences = text
        .iter()
        .zip(tags)
        .zip(trees)
        .enumerate()
        .map(|(i, ((t, g), r))| SentencePtr::compute(i, t, g, r))
        .collect::<ScoreResult<Vec<_>>>()?;

    let score = sentences.iter().map(|s| s.ptr).sum::<f64>() / sentences.len() as f64;
    tracing::debug!(score, "PTR computed");
    Ok(PtrReport { sentences, score })
}

/// `15 + 10 * polysyllables / words - 15 * long_words / words`.
pub fn text_complexity(text: &SentenceTextStats) -> f64 {
    let words = text.words.max(1) as f64;
    15.0 + 10.0 * (text.polysyllables as f64 / words) - 15.0 * (text.long_words as f64 / words)
}

/// Distinct tags over words left after removing repeated runs.
pub fn tag_complexity(
    index: usize,
    text: &SentenceTextStats,
    tags: &SentenceTagStats,
) -> ScoreResult<f64> {
    let denominator =
        text.words as f64 - tags.repeated_adverbs as f64 - tags.repeated_possessives as f64;
    if denominator == 0.0 {
        return Err(ScoreError::Division {
            metric: "tag complexity",
            sentence: Some(index),
        });
    }
    if denominator < 0.0 {
        return Err(ScoreError::Domain {
            metric: "tag complexity",
            sentence: Some(index),
            denominator,
        });
    }
    Ok(tags.distinct_tags as f64 / denominator)
}

/// `1.7 * (noun_phrases + prepositional_phrases) / height + 0.7 * height`.
pub fn tree_complexity(index: usize, tree: &SentenceTreeStats) -> ScoreResult<f64> {
    if tree.height == 0 {
        return Err(ScoreError::Division {
            metric: "tree complexity",
            sentence: Some(index),
        });
    }
    let depth = tree.height as f64;
    let phrases = (tree.noun_phrases + tree.prepositional_phrases) as f64;
    Ok(1.7 * phrases / depth + 0.7 * depth)
}
