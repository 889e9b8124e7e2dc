//! Reference long-word list.
//!
//! A static set of lowercase words loaded once from a plain-text file (one
//! word per line). Used for Dale-Chall eligibility and long-word counting.

use std::collections::HashSet;

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::ResourceError;

/// An immutable set of lowercase reference words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: HashSet<String>,
    source: Option<Utf8PathBuf>,
}

impl WordList {
    /// Build a word list from in-memory words. Entries are lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
            source: None,
        }
    }

    /// Load a word list file.
    ///
    /// Blank lines and lines starting with `#` are ignored. A missing or
    /// unreadable file, or one with no words, is an error.
    #[tracing::instrument(skip_all, fields(path = %path))]
    pub fn load(path: &Utf8Path) -> Result<Self, ResourceError> {
        let content =
            std::fs::read_to_string(path.as_std_path()).map_err(|e| ResourceError::Missing {
                resource: "word list",
                path: path.to_path_buf(),
                source: e,
            })?;

        let mut list = Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        );
        if list.is_empty() {
            return Err(ResourceError::Empty {
                resource: "word list",
                path: path.to_path_buf(),
            });
        }
        list.source = Some(path.to_path_buf());

        tracing::info!(words = list.len(), "word list loaded");
        Ok(list)
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        self.words.contains(&word.to_lowercase())
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The file this list was loaded from, if any.
    pub fn source(&self) -> Option<&Utf8Path> {
        self.source.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn membership_is_case_insensitive() {
        let list = WordList::from_words(["Nevertheless", "notwithstanding"]);
        assert!(list.contains("nevertheless"));
        assert!(list.contains("NotWithStanding"));
        assert!(!list.contains("cat"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn load_skips_comments_and_blanks() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("words.txt");
        fs::write(&path, "# reference words\n\nextraordinary\n  Consequently \n").unwrap();
        let path = Utf8PathBuf::try_from(path).unwrap();

        let list = WordList::load(&path).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.contains("consequently"));
        assert_eq!(list.source(), Some(path.as_path()));
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = WordList::load(Utf8Path::new("/nonexistent/words.txt"));
        assert!(matches!(result, Err(ResourceError::Missing { .. })));
    }

    #[test]
    fn empty_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty.txt");
        fs::write(&path, "# nothing here\n").unwrap();
        let path = Utf8PathBuf::try_from(path).unwrap();

        assert!(matches!(
            WordList::load(&path),
            Err(ResourceError::Empty { .. })
        ));
    }
}
