//! Shared read-only services injected into the aggregators.
//!
//! [`Resources`] bundles the hyphenation service and the reference long-word
//! list. Both are loaded once, held behind [`Arc`], and never mutated, so a
//! single `Resources` can be shared by every worker thread.
//!
//! [`SharedResource`] provides lazy loading on first use. A failed load
//! leaves it empty and the next call tries again; a successful load is kept
//! for the lifetime of the holder.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::config::Config;
use crate::error::ResourceError;
use crate::hyphenation::{DictionaryHyphenator, Hyphenator};
use crate::word_list::WordList;

/// The hyphenation service and long-word list used while scoring.
#[derive(Clone)]
pub struct Resources {
    hyphenator: Arc<dyn Hyphenator>,
    long_words: Arc<WordList>,
}

impl Resources {
    /// Bundle already-loaded services.
    pub fn new(hyphenator: Arc<dyn Hyphenator>, long_words: Arc<WordList>) -> Self {
        Self {
            hyphenator,
            long_words,
        }
    }

    /// Load the services named by `config`.
    ///
    /// The word list is required. Without a hyphenation dictionary the
    /// built-in [`DictionaryHyphenator`] is used.
    #[tracing::instrument(skip_all)]
    pub fn from_config(config: &Config) -> Result<Self, ResourceError> {
        let path = config
            .word_list
            .as_deref()
            .ok_or(ResourceError::NotConfigured {
                resource: "word list",
            })?;
        let long_words = WordList::load(path)?;

        let hyphenator = match config.hyphenation_dictionary.as_deref() {
            Some(path) => DictionaryHyphenator::from_file(path)?,
            None => DictionaryHyphenator::new(),
        };

        Ok(Self::new(Arc::new(hyphenator), Arc::new(long_words)))
    }

    /// The hyphenation service.
    pub fn hyphenator(&self) -> &dyn Hyphenator {
        self.hyphenator.as_ref()
    }

    /// The reference long-word list.
    pub fn long_words(&self) -> &WordList {
        &self.long_words
    }
}

impl fmt::Debug for Resources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resources")
            .field("long_words", &self.long_words.len())
            .finish_non_exhaustive()
    }
}

/// A resource loaded on first use and shared afterwards.
pub struct SharedResource<T> {
    cell: OnceLock<Arc<T>>,
}

impl<T> SharedResource<T> {
    /// An empty, not yet loaded, resource.
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// A resource that is already loaded.
    pub fn loaded(value: T) -> Self {
        Self {
            cell: OnceLock::from(Arc::new(value)),
        }
    }

    /// The resource, if it has been loaded.
    pub fn get(&self) -> Option<Arc<T>> {
        self.cell.get().cloned()
    }

    /// Whether a load has succeeded.
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Return the loaded resource, running `load` if there is none yet.
    ///
    /// Errors from `load` are returned as-is and nothing is stored. If two
    /// threads race to load, both may run `load` but only one value is kept.
    pub fn get_or_load<E, F>(&self, load: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(value) = self.cell.get() {
            return Ok(Arc::clone(value));
        }
        let loaded = Arc::new(load()?);
        Ok(Arc::clone(self.cell.get_or_init(|| loaded)))
    }
}

impl<T> Default for SharedResource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SharedResource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedResource")
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
