//! Wiring to the external tagger and parser.
//!
//! Tokenization, tagging, and parsing are done by outside services. Each call
//! is synchronous and may fail or time out; any failure abandons the whole
//! batch and no partial corpus is scored.

use std::sync::Arc;

use crate::analysis::{CorpusReport, analyze_corpus};
use crate::config::Config;
use crate::corpus::Corpus;
use crate::error::{CollaboratorError, ScoreResult};
use crate::resources::{Resources, SharedResource};
use crate::stats::ScoringOptions;
use crate::tree::ParseTree;

/// Splits raw text into tokenized, POS-tagged sentences.
pub trait Tagger: Send + Sync {
    /// Tag `text`, one [`TaggedSentence`](crate::sentence::TaggedSentence)
    /// per sentence.
    fn tag(&self, text: &str) -> Result<Corpus, CollaboratorError>;
}

/// Produces one constituency parse per tagged sentence.
pub trait Parser: Send + Sync {
    /// Parse every sentence; the result must be index-aligned with `corpus`.
    fn parse(&self, corpus: &Corpus) -> Result<Vec<ParseTree>, CollaboratorError>;
}

impl<F> Tagger for F
where
    F: Fn(&str) -> Result<Corpus, CollaboratorError> + Send + Sync,
{
    fn tag(&self, text: &str) -> Result<Corpus, CollaboratorError> {
        self(text)
    }
}

impl<F> Parser for F
where
    F: Fn(&Corpus) -> Result<Vec<ParseTree>, CollaboratorError> + Send + Sync,
{
    fn parse(&self, corpus: &Corpus) -> Result<Vec<ParseTree>, CollaboratorError> {
        self(corpus)
    }
}

/// Raw text in, [`CorpusReport`] out.
///
/// Shared resources are loaded from the configuration on first use. A
/// failed load is retried on the next run.
pub struct Pipeline {
    tagger: Box<dyn Tagger>,
    parser: Option<Box<dyn Parser>>,
    config: Config,
    resources: SharedResource<Resources>,
}

impl Pipeline {
    /// A pipeline that tags text but does not parse it.
    pub fn new(tagger: impl Tagger + 'static, config: Config) -> Self {
        Self {
            tagger: Box::new(tagger),
            parser: None,
            config,
            resources: SharedResource::new(),
        }
    }

    /// Also parse each sentence, enabling tree statistics and PTR.
    pub fn with_parser(mut self, parser: impl Parser + 'static) -> Self {
        self.parser = Some(Box::new(parser));
        self
    }

    /// Use already-loaded resources instead of the configured files.
    pub fn with_resources(mut self, resources: Resources) -> Self {
        self.resources = SharedResource::loaded(resources);
        self
    }

    /// The shared resources, loading them if needed.
    pub fn resources(&self) -> ScoreResult<Arc<Resources>> {
        Ok(self
            .resources
            .get_or_load(|| Resources::from_config(&self.config))?)
    }

    /// Tag, optionally parse, and analyze `text`.
    #[tracing::instrument(skip_all, fields(text_len = text.len(), parse = self.parser.is_some()))]
    pub fn run(&self, text: &str) -> ScoreResult<CorpusReport> {
        let resources = self.resources()?;
        let corpus = self.tagger.tag(text).inspect_err(|e| {
            tracing::warn!(error = %e, "tagger failed, abandoning batch");
        })?;
        self.score(&corpus, &resources)
    }

    /// Optionally parse, and analyze an already tagged corpus.
    #[tracing::instrument(skip_all, fields(sentences = corpus.len()))]
    pub fn run_corpus(&self, corpus: &Corpus) -> ScoreResult<CorpusReport> {
        let resources = self.resources()?;
        self.score(corpus, &resources)
    }

    fn score(&self, corpus: &Corpus, resources: &Resources) -> ScoreResult<CorpusReport> {
        let trees = match &self.parser {
            Some(parser) => Some(parser.parse(corpus).inspect_err(|e| {
                tracing::warn!(error = %e, "parser failed, abandoning batch");
            })?),
            None => None,
        };
        let options = ScoringOptions::from(&self.config);
        analyze_corpus(corpus, trees.as_deref(), resources, &options)
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("parser", &self.parser.is_some())
            .field("config", &self.config)
            .field("resources", &self.resources)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoreError;
    use crate::hyphenation::DictionaryHyphenator;
    use crate::word_list::WordList;

    fn line_tagger(text: &str) -> Result<Corpus, CollaboratorError> {
        Corpus::parse_tagged(text).map_err(|e| CollaboratorError::Failed {
            service: "tagger",
            message: e.to_string(),
        })
    }

    fn flat_parser(corpus: &Corpus) -> Result<Vec<ParseTree>, CollaboratorError> {
        Ok(corpus
            .iter()
            .map(|sentence| {
                let children = sentence
                    .tokens()
                    .iter()
                    .map(|t| ParseTree::node(t.tag.clone(), vec![ParseTree::leaf(t.word.clone())]))
                    .collect();
                ParseTree::node("S", vec![ParseTree::node("NP", children)])
            })
            .collect())
    }

    fn resources() -> Resources {
        Resources::new(
            Arc::new(DictionaryHyphenator::new()),
            Arc::new(WordList::from_words(["enormous"])),
        )
    }

    #[test]
    fn tags_parses_and_scores() {
        let pipeline = Pipeline::new(line_tagger, Config::default())
            .with_parser(flat_parser)
            .with_resources(resources());
        let report = pipeline
            .run("An/DT enormous/JJ dog/NN barked/VBD ./.\n")
            .unwrap();
        assert_eq!(report.sentences, 1);
        assert_eq!(report.text.long_words, 1);
        assert_eq!(report.tree.as_ref().map(|t| t.max_height), Some(3));
        assert!(report.ptr.is_some());
    }

    #[test]
    fn tagger_timeout_fails_the_batch() {
        let pipeline = Pipeline::new(
            |_: &str| -> Result<Corpus, CollaboratorError> {
                Err(CollaboratorError::Timeout { service: "tagger" })
            },
            Config::default(),
        )
        .with_resources(resources());
        let err = pipeline.run("anything").unwrap_err();
        assert!(matches!(
            err,
            ScoreError::Collaborator(CollaboratorError::Timeout { service: "tagger" })
        ));
    }

    #[test]
    fn parser_timeout_fails_the_batch() {
        let pipeline = Pipeline::new(line_tagger, Config::default())
            .with_parser(|_: &Corpus| -> Result<Vec<ParseTree>, CollaboratorError> {
                Err(CollaboratorError::Timeout { service: "parser" })
            })
            .with_resources(resources());
        assert!(matches!(
            pipeline.run("Hi/UH ./."),
            Err(ScoreError::Collaborator(CollaboratorError::Timeout { .. }))
        ));
    }

    #[test]
    fn short_parser_output_is_an_alignment_error() {
        let pipeline = Pipeline::new(line_tagger, Config::default())
            .with_parser(|corpus: &Corpus| -> Result<Vec<ParseTree>, CollaboratorError> {
                let mut trees = flat_parser(corpus)?;
                trees.pop();
                Ok(trees)
            })
            .with_resources(resources());
        let err = pipeline.run("Hi/UH ./.\nBye/UH ./.\n").unwrap_err();
        assert!(matches!(
            err,
            ScoreError::Alignment {
                sentences: 2,
                trees: 1
            }
        ));
    }

    #[test]
    fn unconfigured_word_list_is_fatal() {
        let pipeline = Pipeline::new(line_tagger, Config::default());
        assert!(matches!(
            pipeline.run("Hi/UH ./."),
            Err(ScoreError::Resource(_))
        ));
    }
}
