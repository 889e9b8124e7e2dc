//! Error types for ptr-readability.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading shared, read-only resources.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// A resource file is absent or unreadable.
    #[error("failed to read {resource} from {path}: {source}")]
    Missing {
        /// Which resource was being loaded.
        resource: &'static str,
        /// The file that could not be read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// No file was configured for a required resource.
    #[error("no {resource} configured")]
    NotConfigured {
        /// Which resource is missing from the configuration.
        resource: &'static str,
    },

    /// The resource file was read but contained no entries.
    #[error("{resource} at {path} contains no entries")]
    Empty {
        /// Which resource was being loaded.
        resource: &'static str,
        /// The file that was read.
        path: Utf8PathBuf,
    },
}

/// Errors raised while parsing tagged sentences or bracketed trees.
#[derive(Error, Debug)]
pub enum InputError {
    /// A token is not of the form `word/TAG`.
    #[error("line {line}: malformed tagged token {token:?} (expected word/TAG)")]
    MalformedToken {
        /// One-based input line.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// A bracketed parse tree could not be read.
    #[error("malformed parse tree at byte {offset}: {message}")]
    MalformedTree {
        /// Byte offset into the input where reading failed.
        offset: usize,
        /// What went wrong.
        message: String,
    },

    /// JSON input could not be deserialized.
    #[error("invalid JSON corpus: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using [`InputError`].
pub type InputResult<T> = Result<T, InputError>;

/// Failures reported by an external tagger or parser.
#[derive(Error, Debug)]
pub enum CollaboratorError {
    /// The collaborator did not answer in time.
    #[error("{service} timed out")]
    Timeout {
        /// Name of the collaborator.
        service: &'static str,
    },

    /// The collaborator answered with an error.
    #[error("{service} failed: {message}")]
    Failed {
        /// Name of the collaborator.
        service: &'static str,
        /// Error reported by the collaborator.
        message: String,
    },
}

/// Errors that can occur while aggregating statistics or computing scores.
///
/// Every variant is a deterministic data-validity condition; none of them is
/// retried.
#[derive(Error, Debug)]
pub enum ScoreError {
    /// A denominator was zero.
    #[error("division by zero computing {metric}{}", sentence_suffix(.sentence))]
    Division {
        /// The metric being computed.
        metric: &'static str,
        /// Index of the offending sentence, for per-sentence metrics.
        sentence: Option<usize>,
    },

    /// A denominator was negative.
    #[error("negative denominator {denominator} computing {metric}{}", sentence_suffix(.sentence))]
    Domain {
        /// The metric being computed.
        metric: &'static str,
        /// Index of the offending sentence, for per-sentence metrics.
        sentence: Option<usize>,
        /// The value that was rejected.
        denominator: f64,
    },

    /// Too few sentences for the requested formula.
    #[error("at least {required} sentences are required, found {found}")]
    InsufficientData {
        /// Minimum number of sentences.
        required: usize,
        /// Number of sentences supplied.
        found: usize,
    },

    /// Parse trees and tagged sentences are not index-aligned.
    #[error("{sentences} tagged sentences but {trees} parse trees")]
    Alignment {
        /// Number of tagged sentences.
        sentences: usize,
        /// Number of parse trees.
        trees: usize,
    },

    /// Per-sentence records from two aggregators differ in length.
    #[error("{expected} sentences but {found} {records} records")]
    RecordCount {
        /// Which records fell out of step.
        records: &'static str,
        /// Number of sentences.
        expected: usize,
        /// Number of records found.
        found: usize,
    },

    /// No sentences were supplied.
    #[error("corpus contains no sentences")]
    EmptyCorpus,

    /// A shared resource could not be loaded.
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// An external collaborator failed; the whole batch is abandoned.
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),

    /// Collaborator output could not be read.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The dedicated worker pool could not be started.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

fn sentence_suffix(sentence: &Option<usize>) -> String {
    sentence.map_or_else(String::new, |i| format!(" (sentence {i})"))
}

/// Result type alias using [`ScoreError`].
pub type ScoreResult<T> = Result<T, ScoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_message_names_sentence() {
        let err = ScoreError::Division {
            metric: "tag complexity",
            sentence: Some(4),
        };
        assert_eq!(
            err.to_string(),
            "division by zero computing tag complexity (sentence 4)"
        );
    }

    #[test]
    fn corpus_level_division_has_no_suffix() {
        let err = ScoreError::Division {
            metric: "Flesch-Kincaid grade",
            sentence: None,
        };
        assert_eq!(
            err.to_string(),
            "division by zero computing Flesch-Kincaid grade"
        );
    }
}
