//! Parse-tree statistics.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ScoringOptions, map_sentences, mean};
use crate::corpus::Corpus;
use crate::error::{ScoreError, ScoreResult};
use crate::tree::ParseTree;

/// Noun phrase category.
pub const NOUN_PHRASE: &str = "NP";
/// Prepositional phrase category.
pub const PREPOSITIONAL_PHRASE: &str = "PP";
/// Subordinate clause category.
pub const SUBORDINATE_CLAUSE: &str = "SBAR";

/// Structural statistics for one parse tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SentenceTreeStats {
    /// Tree height in edges.
    pub height: usize,
    /// `NP` subtrees.
    pub noun_phrases: usize,
    /// `PP` subtrees.
    pub prepositional_phrases: usize,
    /// `SBAR` subtrees.
    pub subordinate_clauses: usize,
    /// Grammar productions, lexical ones included.
    pub productions: usize,
}

impl SentenceTreeStats {
    /// Compute the record for one tree.
    pub fn compute(tree: &ParseTree) -> Self {
        Self {
            height: tree.height(),
            noun_phrases: tree.count_category(NOUN_PHRASE),
            prepositional_phrases: tree.count_category(PREPOSITIONAL_PHRASE),
            subordinate_clauses: tree.count_category(SUBORDINATE_CLAUSE),
            productions: tree.productions().len(),
        }
    }

    /// Metric name to value.
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("depth", self.height as f64),
            ("n_noun_phrases", self.noun_phrases as f64),
            ("n_prepositional_phrases", self.prepositional_phrases as f64),
            ("n_subordinate_clauses", self.subordinate_clauses as f64),
            ("n_productions", self.productions as f64),
        ])
    }
}

/// Corpus-level tree statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TreeTotals {
    /// Number of trees.
    pub sentences: usize,
    /// Greatest tree height.
    pub max_height: usize,
    /// Mean tree height.
    pub mean_height: f64,
    /// Mean `NP` count.
    pub mean_noun_phrases: f64,
    /// Mean `PP` count.
    pub mean_prepositional_phrases: f64,
    /// Mean `SBAR` count.
    pub mean_subordinate_clauses: f64,
    /// Mean production count.
    pub mean_productions: f64,
}

impl TreeTotals {
    /// Metric name to value.
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("n_sentences", self.sentences as f64),
            ("max_depth", self.max_height as f64),
            ("mean_depth", self.mean_height),
            ("mean_noun_phrases", self.mean_noun_phrases),
            ("mean_prepositional_phrases", self.mean_prepositional_phrases),
            ("mean_subordinate_clauses", self.mean_subordinate_clauses),
            ("mean_productions", self.mean_productions),
        ])
    }
}

/// Tree statistics over a corpus and its index-aligned parse trees.
#[derive(Debug, Clone)]
pub struct TreeStats {
    sentences: Vec<SentenceTreeStats>,
}

impl TreeStats {
    /// Build one record per tree.
    ///
    /// `trees[i]` must be the parse of `corpus[i]`. Fails with
    /// [`ScoreError::Alignment`] when the lengths differ and with
    /// [`ScoreError::EmptyCorpus`] when there are no sentences.
    #[tracing::instrument(skip_all, fields(sentences = corpus.len(), trees = trees.len()))]
    pub fn new(
        corpus: &Corpus,
        trees: &[ParseTree],
        options: &ScoringOptions,
    ) -> ScoreResult<Self> {
        if corpus.len() != trees.len() {
            return Err(ScoreError::Alignment {
                sentences: corpus.len(),
                trees: trees.len(),
            });
        }
        if trees.is_empty() {
            return Err(ScoreError::EmptyCorpus);
        }
        let sentences = map_sentences(trees, options, SentenceTreeStats::compute)?;
        tracing::debug!("tree statistics computed");
        Ok(Self { sentences })
    }

    /// Per-sentence records, in corpus order.
    pub fn sentences(&self) -> &[SentenceTreeStats] {
        &self.sentences
    }

    /// Maximum height and per-tree means.
    pub fn totals(&self) -> TreeTotals {
        let records = &self.sentences;
        TreeTotals {
            sentences: records.len(),
            max_height: records.iter().map(|r| r.height).max().unwrap_or(0),
            mean_height: mean(records.iter().map(|r| r.height as f64)),
            mean_noun_phrases: mean(records.iter().map(|r| r.noun_phrases as f64)),
            mean_prepositional_phrases: mean(
                records.iter().map(|r| r.prepositional_phrases as f64),
            ),
            mean_subordinate_clauses: mean(records.iter().map(|r| r.subordinate_clauses as f64)),
            mean_productions: mean(records.iter().map(|r| r.productions as f64)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentence::TaggedSentence;

    fn corpus(n: usize) -> Corpus {
        (0..n)
            .map(|_| TaggedSentence::parse("Dogs/NNS bark/VBP ./.", 1).unwrap())
            .collect()
    }

    fn tree(text: &str) -> ParseTree {
        ParseTree::parse(text).unwrap()
    }

    #[test]
    fn misaligned_trees_fail_fast() {
        let trees = vec![tree("(S (NP (NNS Dogs)) (VP (VBP bark)) (. .))"); 9];
        let err = TreeStats::new(&corpus(10), &trees, &ScoringOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            ScoreError::Alignment {
                sentences: 10,
                trees: 9
            }
        ));
    }

    #[test]
    fn empty_corpus_is_rejected() {
        let err = TreeStats::new(&corpus(0), &[], &ScoringOptions::default()).unwrap_err();
        assert!(matches!(err, ScoreError::EmptyCorpus));
    }

    #[test]
    fn sentence_record() {
        let t = tree(
            "(S (NP (PRP I)) (VP (VBD left) (SBAR (IN because) (S (NP (PRP it)) (VP (VBD rained) (PP (IN in) (NP (NNP May))))))) (. .))",
        );
        let stats = SentenceTreeStats::compute(&t);
        assert_eq!(stats.height, 8);
        assert_eq!(stats.noun_phrases, 3);
        assert_eq!(stats.prepositional_phrases, 1);
        assert_eq!(stats.subordinate_clauses, 1);
        assert_eq!(stats.productions, 17);
    }

    #[test]
    fn totals_take_max_and_means() {
        let trees = vec![
            tree("(S (NP (NNS Dogs)) (VP (VBP bark)) (. .))"),
            tree("(S (NP (NP (NNS Dogs)) (PP (IN of) (NP (NN war)))) (VP (VBP bark)) (. .))"),
        ];
        let stats = TreeStats::new(&corpus(2), &trees, &ScoringOptions::sequential()).unwrap();
        let totals = stats.totals();

        assert_eq!(totals.max_height, 5);
        assert!((totals.mean_height - 4.0).abs() < 1e-12);
        assert!((totals.mean_noun_phrases - 2.0).abs() < 1e-12);
        assert!((totals.mean_prepositional_phrases - 0.5).abs() < 1e-12);
        assert_eq!(totals.to_map()["max_depth"], 5.0);
    }
}
