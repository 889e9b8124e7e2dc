//! Whole-corpus analysis.
//!
//! Runs the three aggregators over one sentence-aligned corpus and combines
//! their outputs into a [`CorpusReport`], orchestrated by [`analyze_corpus`].
//! Callers that need per-sentence records can hold a [`CorpusAnalysis`]
//! instead.

pub mod report;

pub use report::{CorpusReport, SentenceReport};

use crate::corpus::Corpus;
use crate::error::{ScoreError, ScoreResult};
use crate::ptr::{self, PtrReport};
use crate::readability::ReadabilityReport;
use crate::resources::Resources;
use crate::sentence::reconstruct_text;
use crate::stats::{self, ScoringOptions, TagStats, TextStats, TreeStats};
use crate::tree::ParseTree;

/// Analyze a corpus and, when given, its index-aligned parse trees.
///
/// Tree statistics and the PTR score are only produced when `trees` is
/// `Some`.
#[tracing::instrument(skip_all, fields(sentences = corpus.len(), with_trees = trees.is_some()))]
pub fn analyze_corpus(
    corpus: &Corpus,
    trees: Option<&[ParseTree]>,
    resources: &Resources,
    options: &ScoringOptions,
) -> ScoreResult<CorpusReport> {
    CorpusAnalysis::new(corpus, trees, resources, options)?.report()
}

/// The three aggregators built over one corpus.
#[derive(Debug, Clone)]
pub struct CorpusAnalysis {
    text: TextStats,
    tags: TagStats,
    trees: Option<TreeStats>,
}

impl CorpusAnalysis {
    /// Build every aggregator.
    ///
    /// Alignment between `corpus` and `trees` is checked before any
    /// per-sentence work is done.
    pub fn new(
        corpus: &Corpus,
        trees: Option<&[ParseTree]>,
        resources: &Resources,
        options: &ScoringOptions,
    ) -> ScoreResult<Self> {
        if corpus.is_empty() {
            return Err(ScoreError::EmptyCorpus);
        }
        stats::with_pool(options, |options| -> ScoreResult<Self> {
            let trees = trees
                .map(|trees| TreeStats::new(corpus, trees, options))
                .transpose()?;
            Ok(Self {
                text: TextStats::new(corpus, resources, options)?,
                tags: TagStats::new(corpus, options)?,
                trees,
            })
        })?
    }

    /// Text statistics.
    pub const fn text(&self) -> &TextStats {
        &self.text
    }

    /// Tag statistics.
    pub const fn tags(&self) -> &TagStats {
        &self.tags
    }

    /// Tree statistics, when trees were supplied.
    pub const fn trees(&self) -> Option<&TreeStats> {
        self.trees.as_ref()
    }

    /// PTR scores, when trees were supplied.
    pub fn ptr(&self) -> ScoreResult<Option<PtrReport>> {
        self.trees
            .as_ref()
            .map(|trees| {
                ptr::score(
                    self.text.sentences(),
                    self.tags.sentences(),
                    trees.sentences(),
                )
            })
            .transpose()
    }

    /// Corpus-level report.
    pub fn report(&self) -> ScoreResult<CorpusReport> {
        let text = self.text.totals();
        let readability = ReadabilityReport::from_totals(&text)?;
        let report = CorpusReport {
            sentences: self.text.len(),
            tags: self.tags.totals(),
            tree: self.trees.as_ref().map(TreeStats::totals),
            ptr: self.ptr()?.map(|p| p.score),
            text,
            readability,
        };
        tracing::info!(sentences = report.sentences, ptr = ?report.ptr, "corpus analyzed");
        Ok(report)
    }

    /// One report per sentence of `corpus`, which must be the corpus this
    /// analysis was built from.
    pub fn sentence_reports(&self, corpus: &Corpus) -> ScoreResult<Vec<SentenceReport>> {
        if corpus.len() != self.text.len() {
            return Err(ScoreError::RecordCount {
                records: "text",
                expected: corpus.len(),
                found: self.text.len(),
            });
        }
        let ptr = self.ptr()?;
        Ok(corpus
            .iter()
            .enumerate()
            .map(|(i, sentence)| SentenceReport {
                index: i,
                text: reconstruct_text(sentence),
                text_stats: self.text.sentences()[i].clone(),
                tag_stats: self.tags.sentences()[i],
                tree_stats: self.trees.as_ref().map(|t| t.sentences()[i]),
                ptr: ptr.as_ref().map(|p| p.sentences[i]),
            })
            .collect())
    }
}
