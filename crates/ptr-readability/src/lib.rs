//! Readability statistics over POS-tagged and parsed text.
//!
//! This crate turns a corpus of POS-tagged sentences, optionally with one
//! constituency parse per sentence, into per-sentence statistics, the
//! classical readability grades (SMOG, Flesch-Kincaid, Dale-Chall), and the
//! composite Parse Tree Readability (PTR) score. Tagging and parsing are done
//! elsewhere; see [`pipeline`] for the collaborator seams.
//!
//! # Modules
//!
//! - [`sentence`] - Tagged tokens and per-sentence primitives
//! - [`corpus`] - The sentence sequence shared by every aggregator
//! - [`tree`] - Bracketed parse trees
//! - [`stats`] - Text, tag, and tree aggregators
//! - [`readability`] - SMOG, Flesch-Kincaid, and Dale-Chall
//! - [`ptr`] - The PTR composite score
//! - [`analysis`] - Whole-corpus reports
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use ptr_readability::{ConfigLoader, Corpus, ParseTree, Resources, ScoringOptions};
//!
//! let (config, _sources) = ConfigLoader::new()
//!     .with_user_config(true)
//!     .load()
//!     .expect("Failed to load configuration");
//! let resources = Resources::from_config(&config).expect("word list");
//!
//! let corpus = Corpus::parse_tagged("The/DT cat/NN sat/VBD ./.").unwrap();
//! let trees = vec![ParseTree::parse("(S (NP (DT The) (NN cat)) (VP (VBD sat)) (. .))").unwrap()];
//!
//! let report = ptr_readability::analyze_corpus(
//!     &corpus,
//!     Some(trees.as_slice()),
//!     &resources,
//!     &ScoringOptions::from(&config),
//! )
//! .unwrap();
//! println!("PTR: {:?}", report.ptr);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod dictionaries;
pub mod error;
pub mod hyphenation;
pub mod pipeline;
pub mod ptr;
pub mod readability;
pub mod resources;
pub mod sentence;
pub mod stats;
pub mod tags;
pub mod tree;
pub mod word_list;

pub use analysis::{CorpusAnalysis, CorpusReport, SentenceReport, analyze_corpus};
pub use config::{Config, ConfigLoader, ConfigSources};
pub use corpus::Corpus;
pub use error::{
    CollaboratorError, ConfigError, ConfigResult, InputError, InputResult, ResourceError,
    ScoreError, ScoreResult,
};
pub use hyphenation::{DictionaryHyphenator, Hyphenator};
pub use pipeline::{Parser, Pipeline, Tagger};
pub use ptr::{PtrReport, SentencePtr};
pub use readability::ReadabilityReport;
pub use resources::{Resources, SharedResource};
pub use sentence::{TaggedSentence, TaggedToken};
pub use stats::ScoringOptions;
pub use tags::PunctuationSet;
pub use tree::{ParseTree, Production};
pub use word_list::WordList;
