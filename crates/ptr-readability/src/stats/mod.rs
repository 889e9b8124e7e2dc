//! Per-sentence statistics aggregators.
//!
//! Each aggregator builds one immutable record per sentence at construction
//! and derives corpus-level totals on demand:
//!
//! - [`text`] - word, character, syllable, and long-word counts
//! - [`tags`] - POS diversity, pronouns, repeated possessives and adverbs
//! - [`tree`] - parse-tree height, phrase counts, and productions
//!
//! Records are computed independently per sentence, on a rayon pool when
//! [`ScoringOptions::parallel`] is set. Indexed collection keeps every record
//! at its sentence's position.

pub mod tags;
pub mod text;
pub mod tree;

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use crate::config::Config;
use crate::error::ScoreResult;
use crate::tags::PunctuationSet;

pub use tags::{SentenceTagStats, TagStats, TagTotals};
pub use text::{SentenceTextStats, TextStats, TextTotals};
pub use tree::{SentenceTreeStats, TreeStats, TreeTotals};

/// Options shared by every aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringOptions {
    /// Punctuation removed before counting words.
    pub punctuation: PunctuationSet,
    /// Compute per-sentence records in parallel.
    pub parallel: bool,
    /// Size of a dedicated worker pool. `None` uses the global pool.
    pub threads: Option<usize>,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            punctuation: PunctuationSet::Standard,
            parallel: true,
            threads: None,
        }
    }
}

impl ScoringOptions {
    /// Sequential options, mainly for tests and small inputs.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }
}

impl From<&Config> for ScoringOptions {
    fn from(config: &Config) -> Self {
        Self {
            punctuation: config.punctuation,
            parallel: config.parallel,
            threads: config.threads,
        }
    }
}

/// Run `f` on the worker pool described by `options`.
///
/// With `threads` set and parallel scoring enabled, one pool is built here and
/// `f` runs inside it with options that reuse the current pool, so nested
/// aggregators share it instead of building their own.
pub(crate) fn with_pool<R, F>(options: &ScoringOptions, f: F) -> ScoreResult<R>
where
    R: Send,
    F: FnOnce(&ScoringOptions) -> R + Send,
{
    match options.threads.filter(|_| options.parallel) {
        Some(threads) => {
            let pool = ThreadPoolBuilder::new().num_threads(threads).build()?;
            tracing::debug!(threads, "scoring pool built");
            let shared = ScoringOptions {
                threads: None,
                ..*options
            };
            Ok(pool.install(|| f(&shared)))
        }
        None => Ok(f(options)),
    }
}

/// Apply `f` to every item, returning results in input order.
pub(crate) fn map_sentences<T, R, F>(
    items: &[T],
    options: &ScoringOptions,
    f: F,
) -> ScoreResult<Vec<R>>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    if !options.parallel {
        return Ok(items.iter().map(f).collect());
    }
    with_pool(options, |_| items.par_iter().map(&f).collect::<Vec<R>>())
}

/// Mean of `values`; 0 for an empty iterator.
pub(crate) fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_map_preserves_order() {
        let items: Vec<usize> = (0..500).collect();
        let options = ScoringOptions {
            threads: Some(3),
            ..ScoringOptions::default()
        };
        let doubled = map_sentences(&items, &options, |n| n * 2).unwrap();
        assert_eq!(doubled, items.iter().map(|n| n * 2).collect::<Vec<_>>());
    }

    #[test]
    fn pool_is_built_once_and_shared() {
        let options = ScoringOptions {
            threads: Some(2),
            ..ScoringOptions::default()
        };
        let (threads, inner) =
            with_pool(&options, |inner| (rayon::current_num_threads(), *inner)).unwrap();
        assert_eq!(threads, 2);
        assert_eq!(inner.threads, None);
        assert!(inner.parallel);

        let sequential = ScoringOptions {
            threads: Some(2),
            ..ScoringOptions::sequential()
        };
        let inner = with_pool(&sequential, |inner| *inner).unwrap();
        assert_eq!(inner, sequential);
    }

    #[test]
    fn sequential_and_parallel_agree() {
        let items: Vec<usize> = (0..64).collect();
        let seq = map_sentences(&items, &ScoringOptions::sequential(), |n| n % 7).unwrap();
        let par = map_sentences(&items, &ScoringOptions::default(), |n| n % 7).unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn options_from_config() {
        let config = Config {
            punctuation: PunctuationSet::Extended,
            parallel: false,
            threads: Some(2),
            ..Config::default()
        };
        let options = ScoringOptions::from(&config);
        assert_eq!(options.punctuation, PunctuationSet::Extended);
        assert!(!options.parallel);
        assert_eq!(options.threads, Some(2));
    }

    #[test]
    fn mean_of_nothing_is_zero() {
        assert_eq!(mean(std::iter::empty()), 0.0);
        assert!((mean([1.0, 2.0, 6.0]) - 3.0).abs() < 1e-12);
    }
}
