//! Penn-Treebank tag sets used by the aggregators.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Tag of a personal pronoun.
pub const PERSONAL_PRONOUN: &str = "PRP";

/// Tag of the possessive ending (`'s`, `'`).
pub const POSSESSIVE: &str = "POS";

/// Punctuation tags removed by [`PunctuationSet::Standard`].
pub static STANDARD_PUNCTUATION: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["(", ")", ",", "--", ".", ":"].into_iter().collect());

/// Punctuation tags removed by [`PunctuationSet::Extended`].
///
/// Adds empty elements, both quote tags, and the dollar sign.
pub static EXTENDED_PUNCTUATION: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    STANDARD_PUNCTUATION
        .iter()
        .copied()
        .chain(["-NONE-", "``", "''", "$"])
        .collect()
});

/// Adverb tags (Penn and Brown variants) counted by the adverb-run detector.
pub static ADVERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "RB", "RBR", "RBS", "RBT", "RB$", "RB+BEZ", "RB+CS", "RBR+CS", "RN", "RP",
    ]
    .into_iter()
    .collect()
});

/// Tokens with these tags are not followed by a space when rebuilding text.
pub static NO_SPACE_AFTER: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["(", "-LRB-", "$", "#", "``"].into_iter().collect());

/// Tokens with these tags are not preceded by a space when rebuilding text.
pub static NO_SPACE_BEFORE: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [")", "-RRB-", ",", ".", ":", "POS", "''"]
        .into_iter()
        .collect()
});

/// Which punctuation tags count as non-words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum PunctuationSet {
    /// Brackets, commas, dashes, periods, and colons.
    #[default]
    Standard,
    /// The standard set plus `-NONE-`, quote tags, and `$`.
    Extended,
}

impl PunctuationSet {
    /// Whether `tag` is punctuation under this set.
    pub fn contains(self, tag: &str) -> bool {
        match self {
            Self::Standard => STANDARD_PUNCTUATION.contains(tag),
            Self::Extended => EXTENDED_PUNCTUATION.contains(tag),
        }
    }

    /// Returns the set name as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Extended => "extended",
        }
    }
}

/// Whether `tag` is one of the adverb tags.
pub fn is_adverb(tag: &str) -> bool {
    ADVERBS.contains(tag)
}
