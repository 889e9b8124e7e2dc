//! Part-of-speech tag statistics.
//!
//! Computed over the raw sentence, punctuation tags included.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ScoringOptions, map_sentences, mean};
use crate::corpus::Corpus;
use crate::error::{ScoreError, ScoreResult};
use crate::sentence::{TaggedSentence, TaggedToken};
use crate::tags::{self, PERSONAL_PRONOUN, POSSESSIVE};

/// Tag statistics for one sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SentenceTagStats {
    /// Number of distinct tags.
    pub distinct_tags: usize,
    /// Personal pronoun tokens.
    pub pronouns: usize,
    /// Length of the longest possessive chain, or 0 below 2.
    pub repeated_possessives: usize,
    /// Length of the longest adverb run, or 0 below 2.
    pub repeated_adverbs: usize,
}

impl SentenceTagStats {
    /// Compute the record for one sentence.
    pub fn compute(sentence: &[TaggedToken]) -> Self {
        Self {
            distinct_tags: sentence
                .iter()
                .map(|t| t.tag.as_str())
                .collect::<HashSet<_>>()
                .len(),
            pronouns: sentence
                .iter()
                .filter(|t| t.tag == PERSONAL_PRONOUN)
                .count(),
            repeated_possessives: repeated_possessive_run(sentence),
            repeated_adverbs: repeated_adverb_run(sentence),
        }
    }

    /// Metric name to value.
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("n_pos", self.distinct_tags as f64),
            ("n_pronouns", self.pronouns as f64),
            ("n_repeated_possessives", self.repeated_possessives as f64),
            ("n_repeated_adverbs", self.repeated_adverbs as f64),
        ])
    }
}

/// Corpus-level tag statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TagTotals {
    /// Number of sentences.
    pub sentences: usize,
    /// Distinct tags seen anywhere in the corpus.
    pub distinct_tags: usize,
    /// Mean distinct tags per sentence.
    pub mean_distinct_tags: f64,
    /// Mean pronouns per sentence.
    pub mean_pronouns: f64,
    /// Mean repeated-possessive run per sentence.
    pub mean_repeated_possessives: f64,
    /// Mean repeated-adverb run per sentence.
    pub mean_repeated_adverbs: f64,
}

impl TagTotals {
    /// Metric name to value.
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("n_sentences", self.sentences as f64),
            ("n_pos", self.distinct_tags as f64),
            ("mean_pos", self.mean_distinct_tags),
            ("mean_pronouns", self.mean_pronouns),
            ("mean_repeated_possessives", self.mean_repeated_possessives),
            ("mean_repeated_adverbs", self.mean_repeated_adverbs),
        ])
    }
}

/// Tag statistics over a corpus.
#[derive(Debug, Clone)]
pub struct TagStats {
    sentences: Vec<SentenceTagStats>,
    corpus_tags: BTreeSet<String>,
}

impl TagStats {
    /// Build one record per sentence.
    ///
    /// Fails with [`ScoreError::EmptyCorpus`] for an empty corpus.
    #[tracing::instrument(skip_all, fields(sentences = corpus.len()))]
    pub fn new(corpus: &Corpus, options: &ScoringOptions) -> ScoreResult<Self> {
        if corpus.is_empty() {
            return Err(ScoreError::EmptyCorpus);
        }
        let sentences = map_sentences(corpus.sentences(), options, |s: &TaggedSentence| {
            SentenceTagStats::compute(s)
        })?;
        let corpus_tags: BTreeSet<String> = corpus
            .iter()
            .flat_map(|s| s.tags())
            .map(str::to_string)
            .collect();
        tracing::debug!(distinct_tags = corpus_tags.len(), "tag statistics computed");
        Ok(Self {
            sentences,
            corpus_tags,
        })
    }

    /// Per-sentence records, in corpus order.
    pub fn sentences(&self) -> &[SentenceTagStats] {
        &self.sentences
    }

    /// Every tag seen in the corpus, sorted.
    pub fn corpus_tags(&self) -> impl Iterator<Item = &str> {
        self.corpus_tags.iter().map(String::as_str)
    }

    /// Corpus-wide distinct tags and per-sentence means.
    pub fn totals(&self) -> TagTotals {
        let records = &self.sentences;
        TagTotals {
            sentences: records.len(),
            distinct_tags: self.corpus_tags.len(),
            mean_distinct_tags: mean(records.iter().map(|r| r.distinct_tags as f64)),
            mean_pronouns: mean(records.iter().map(|r| r.pronouns as f64)),
            mean_repeated_possessives: mean(
                records.iter().map(|r| r.repeated_possessives as f64),
            ),
            mean_repeated_adverbs: mean(records.iter().map(|r| r.repeated_adverbs as f64)),
        }
    }
}

/// Longest chain of possessive markers.
///
/// The tags are read as two interleaved views, even positions and odd
/// positions, since markers and their nouns alternate in a chain like
/// `A 's B 's C 's D`. The longest run of `POS` within either view is
/// returned when it is at least 2.
pub fn repeated_possessive_run(sentence: &[TaggedToken]) -> usize {
    let is_possessive = |t: &TaggedToken| t.tag == POSSESSIVE;
    let even = longest_run(sentence.iter().step_by(2), is_possessive);
    let odd = longest_run(sentence.iter().skip(1).step_by(2), is_possessive);
    at_least_two(even.max(odd))
}

/// Longest run of directly adjacent adverb tags, when it is at least 2.
pub fn repeated_adverb_run(sentence: &[TaggedToken]) -> usize {
    at_least_two(longest_run(sentence.iter(), |t| tags::is_adverb(&t.tag)))
}

fn longest_run<'a, I, F>(tokens: I, matches: F) -> usize
where
    I: Iterator<Item = &'a TaggedToken>,
    F: Fn(&TaggedToken) -> bool,
{
    let mut best = 0;
    let mut current = 0;
    for token in tokens {
        if matches(token) {
            current += 1;
            best = best.max(current);
        } else {
            current = 0;
        }
    }
    best
}

const fn at_least_two(run: usize) -> usize {
    if run >= 2 { run } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(text: &str) -> TaggedSentence {
        TaggedSentence::parse(text, 1).unwrap()
    }

    #[test]
    fn adverb_runs() {
        assert_eq!(
            repeated_adverb_run(&sentence("harder/RB better/RB faster/RB stronger/RB")),
            4
        );
        assert_eq!(repeated_adverb_run(&sentence("most/RBS happily/RB")), 2);
        assert_eq!(repeated_adverb_run(&sentence("likely/RB ready/JJ")), 0);
    }

    #[test]
    fn adverb_run_takes_the_longest() {
        let s = sentence("very/RB quickly/RB ran/VBD out/RP very/RB far/RB away/RB ./.");
        assert_eq!(repeated_adverb_run(&s), 4);
    }

    #[test]
    fn possessive_runs() {
        let five = sentence(
            "John/NNP 's/POS mother/NN 's/POS neighbor/NN 's/POS uncle/NN 's/POS dog/NN 's/POS Instagram/NNP account/NN",
        );
        assert_eq!(repeated_possessive_run(&five), 5);

        let two = sentence("John/NNP 's/POS dog/NN 's/POS Instagram/NNP account/NN");
        assert_eq!(repeated_possessive_run(&two), 2);

        let one = sentence("John/NNP 's/POS Instagram/NNP account/NN");
        assert_eq!(repeated_possessive_run(&one), 0);
    }

    #[test]
    fn possessive_chain_on_even_positions() {
        let s = sentence("'s/POS a/NN 's/POS b/NN 's/POS");
        assert_eq!(repeated_possessive_run(&s), 3);
    }

    #[test]
    fn sentence_record() {
        let s = sentence("He/PRP said/VBD she/PRP left/VBD very/RB quietly/RB ./.");
        let stats = SentenceTagStats::compute(&s);
        assert_eq!(stats.distinct_tags, 4);
        assert_eq!(stats.pronouns, 2);
        assert_eq!(stats.repeated_adverbs, 2);
        assert_eq!(stats.repeated_possessives, 0);
    }

    #[test]
    fn corpus_totals() {
        let corpus =
            Corpus::parse_tagged("It/PRP works/VBZ ./.\nWe/PRP saw/VBD it/PRP too/RB ./.\n")
                .unwrap();
        let stats = TagStats::new(&corpus, &ScoringOptions::default()).unwrap();
        let totals = stats.totals();

        assert_eq!(totals.sentences, 2);
        assert_eq!(totals.distinct_tags, 5);
        assert_eq!(
            stats.corpus_tags().collect::<Vec<_>>(),
            [".", "PRP", "RB", "VBD", "VBZ"]
        );
        assert!((totals.mean_pronouns - 1.5).abs() < 1e-12);
        assert!((totals.mean_distinct_tags - 3.5).abs() < 1e-12);
    }
}
