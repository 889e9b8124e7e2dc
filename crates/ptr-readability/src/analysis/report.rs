//! Report structs for corpus analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so callers
//! can emit them as JSON directly.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ptr::SentencePtr;
use crate::readability::ReadabilityReport;
use crate::stats::{
    SentenceTagStats, SentenceTextStats, SentenceTreeStats, TagTotals, TextTotals, TreeTotals,
};

/// Corpus-level results from every aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CorpusReport {
    /// Number of sentences analyzed.
    pub sentences: usize,
    /// Summed text statistics.
    pub text: TextTotals,
    /// Tag diversity and per-sentence means.
    pub tags: TagTotals,
    /// Tree statistics, when parse trees were supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<TreeTotals>,
    /// SMOG, Flesch-Kincaid, and Dale-Chall grades.
    pub readability: ReadabilityReport,
    /// Mean PTR score, when parse trees were supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ptr: Option<f64>,
}

/// Everything computed for a single sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentenceReport {
    /// Position in the corpus.
    pub index: usize,
    /// The sentence rebuilt as plain text.
    pub text: String,
    /// Text statistics.
    pub text_stats: SentenceTextStats,
    /// Tag statistics.
    pub tag_stats: SentenceTagStats,
    /// Tree statistics, when parse trees were supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree_stats: Option<SentenceTreeStats>,
    /// PTR sub-scores, when parse trees were supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ptr: Option<SentencePtr>,
}
