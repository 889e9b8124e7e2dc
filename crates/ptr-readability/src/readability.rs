//! Classical readability formulas over corpus-level counts.
//!
//! - SMOG: `1.0430 * sqrt(polysyllables * (30 / sentences)) + 3.1291`
//! - Flesch-Kincaid Grade Level:
//!   `0.39 * (words / sentences) + 11.8 * (syllables / words) - 15.59`
//! - Dale-Chall (1961 revision):
//!   `14.863 - 11.42 * (long_words / words) + 0.0512 * (words / sentences)`
//!
//! All three work on sums over the whole corpus, never on per-sentence
//! values, and fail with [`ScoreError::Division`] when there are no sentences
//! or no words.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ScoreError, ScoreResult};
use crate::stats::TextTotals;

/// SMOG is only defined for samples of at least this many sentences.
pub const SMOG_MIN_SENTENCES: usize = 30;

/// Corpus readability grades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// SMOG grade; absent when the corpus has fewer than 30 sentences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smog: Option<f64>,
    /// Flesch-Kincaid Grade Level.
    pub flesch_kincaid: f64,
    /// Dale-Chall score.
    pub dale_chall: f64,
    /// Number of sentences.
    pub sentences: usize,
    /// Number of words.
    pub words: usize,
    /// Total syllables.
    pub syllables: usize,
}

impl ReadabilityReport {
    /// Compute every grade from corpus totals.
    ///
    /// A corpus too short for SMOG still gets the other two grades.
    #[tracing::instrument(skip_all, fields(sentences = totals.sentences, words = totals.words))]
    pub fn from_totals(totals: &TextTotals) -> ScoreResult<Self> {
        let flesch_kincaid = totals.flesch_kincaid()?;
        let dale_chall = totals.dale_chall()?;
        let smog = match totals.smog() {
            Ok(grade) => Some(grade),
            Err(ScoreError::InsufficientData { required, found }) => {
                tracing::debug!(required, found, "corpus too short for SMOG");
                None
            }
            Err(e) => return Err(e),
        };

        tracing::debug!(flesch_kincaid, dale_chall, ?smog, "readability computed");
        Ok(Self {
            smog,
            flesch_kincaid,
            dale_chall,
            sentences: totals.sentences,
            words: totals.words,
            syllables: totals.syllables,
        })
    }
}

/// SMOG grade from the polysyllable count of a sample.
///
/// Fails with [`ScoreError::Division`] on an empty sample and with
/// [`ScoreError::InsufficientData`] below [`SMOG_MIN_SENTENCES`] sentences.
pub fn smog(polysyllables: usize, words: usize, sentences: usize) -> ScoreResult<f64> {
    require_nonzero(sentences, "SMOG grade")?;
    require_nonzero(words, "SMOG grade")?;
    if sentences < SMOG_MIN_SENTENCES {
        return Err(ScoreError::InsufficientData {
            required: SMOG_MIN_SENTENCES,
            found: sentences,
        });
    }
    let scaled = polysyllables as f64 * (30.0 / sentences as f64);
    Ok(1.0430f64.mul_add(scaled.sqrt(), 3.1291))
}

/// Flesch-Kincaid Grade Level.
pub fn flesch_kincaid(words: usize, sentences: usize, syllables: usize) -> ScoreResult<f64> {
    require_nonzero(sentences, "Flesch-Kincaid grade")?;
    require_nonzero(words, "Flesch-Kincaid grade")?;
    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;
    Ok(0.39f64.mul_add(words_per_sentence, 11.8 * syllables_per_word) - 15.59)
}

/// Dale-Chall (1961) score.
pub fn dale_chall(words: usize, sentences: usize, long_words: usize) -> ScoreResult<f64> {
    require_nonzero(sentences, "Dale-Chall score")?;
    require_nonzero(words, "Dale-Chall score")?;
    let long_ratio = long_words as f64 / words as f64;
    let words_per_sentence = words as f64 / sentences as f64;
    Ok(11.42f64.mul_add(-long_ratio, 14.863) + 0.0512 * words_per_sentence)
}

fn require_nonzero(value: usize, metric: &'static str) -> ScoreResult<()> {
    if value == 0 {
        return Err(ScoreError::Division {
            metric,
            sentence: None,
        });
    }
    Ok(())
}
