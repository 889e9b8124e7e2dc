//! Built-in hyphenation dictionary.
//!
//! Words whose break points the vowel-group heuristic gets wrong: vowel
//! hiatus (`ar-e-a`), silent medial vowels (`ev-ery`), and common long words
//! where the split point matters less than the count.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Hyphenated spellings, one break per `-`.
const ENTRIES: &[&str] = &[
    // Hiatus: adjacent vowels in separate syllables
    "ar-e-a",
    "i-de-a",
    "ra-di-o",
    "vid-e-o",
    "cre-ate",
    "cre-at-ed",
    "cre-a-tion",
    "sci-ence",
    "sci-en-tist",
    "po-em",
    "po-et",
    "qui-et",
    "di-et",
    "li-on",
    "gi-ant",
    "re-al",
    "re-al-ly",
    "re-al-i-ty",
    "pi-an-o",
    "vi-o-lin",
    "vi-o-let",
    "di-a-mond",
    "di-a-logue",
    "pa-tient",
    "go-ing",
    "do-ing",
    "see-ing",
    "be-ing",
    "ski-ing",
    "tri-al",
    "flu-id",
    "ru-in",
    "cru-el",
    "du-el",
    "fu-el",
    "li-ar",
    "o-a-sis",
    "the-a-ter",
    "the-o-ry",
    "ge-og-ra-phy",
    "ne-on",
    "me-te-or",
    "cha-os",
    "so-ci-e-ty",
    "va-ri-e-ty",
    "an-xi-e-ty",
    "pri-or-i-ty",
    "ma-jor-i-ty",
    "au-di-ence",
    "ex-pe-ri-ence",
    "ex-pe-ri-ment",
    "pe-ri-od",
    "se-ri-ous",
    "cu-ri-ous",
    "ma-te-ri-al",
    "me-di-a",
    "me-di-um",
    "stu-di-o",
    "pre-vi-ous",
    "ob-vi-ous",
    "ob-vi-ous-ly",
    "ap-pro-pri-ate",
    "im-me-di-ate",
    "im-me-di-ate-ly",
    "in-di-vid-u-al",
    "ac-tu-al",
    "ac-tu-al-ly",
    "u-su-al",
    "u-su-al-ly",
    "sit-u-a-tion",
    "e-val-u-ate",
    "grad-u-ate",
    // Silent or elided vowels
    "ev-ery",
    "ev-ery-one",
    "eve-ning",
    "fam-ily",
    "choc-o-late",
    "busi-ness",
    "dif-fer-ent",
    "sev-er-al",
    "in-ter-est",
    "in-ter-est-ing",
    "vet-er-an",
    "cam-er-a",
    "av-er-age",
    "sep-a-rate",
    "tem-per-a-ture",
    "veg-e-ta-ble",
    "com-fort-a-ble",
    "po-lice",
    "or-ange",
    "ta-ble",
    "a-ble",
    "peo-ple",
    "lit-tle",
    "sim-ple",
    "whole",
    "some-times",
    "some-one",
    "love-ly",
    "safe-ty",
    "care-ful",
    "hope-ful",
    "base-ment",
    "state-ment",
    "move-ment",
    "man-age-ment",
    "en-gage-ment",
    // Frequent polysyllables
    "an-i-mal",
    "beau-ti-ful",
    "cap-i-tal",
    "com-mu-ni-ty",
    "com-mu-ni-ca-tion",
    "de-vel-op-ment",
    "ed-u-ca-tion",
    "e-con-o-my",
    "en-vi-ron-ment",
    "gen-er-a-tion",
    "gov-ern-ment",
    "his-to-ry",
    "in-for-ma-tion",
    "in-ter-na-tion-al",
    "mu-si-cal",
    "nec-es-sar-i-ly",
    "or-gan-i-za-tion",
    "op-por-tu-ni-ty",
    "pol-i-tics",
    "po-lit-i-cal",
    "pos-si-bil-i-ty",
    "re-spon-si-bil-i-ty",
    "re-la-tion-ship",
    "tech-nol-o-gy",
    "un-for-tu-nate-ly",
    "u-ni-ver-si-ty",
    "ad-min-is-tra-tion",
    "ap-par-ent-ly",
    "def-i-nite-ly",
    "fa-mil-iar",
    "ge-ni-us",
];

/// Dictionary of built-in break positions, keyed by lowercase word.
pub static HYPHENATED_WORDS: LazyLock<HashMap<String, Vec<usize>>> = LazyLock::new(|| {
    ENTRIES
        .iter()
        .map(|entry| parse_hyphenated(entry))
        .collect()
});

/// Split a hyphenated spelling into its bare word and break positions.
///
/// Positions are character offsets into the bare word: `choc-o-late`
/// yields `("chocolate", [4, 5])`.
pub fn parse_hyphenated(entry: &str) -> (String, Vec<usize>) {
    let mut word = String::with_capacity(entry.len());
    let mut positions = Vec::new();
    let mut offset = 0;
    for ch in entry.chars() {
        if ch == '-' {
            if offset > 0 && positions.last() != Some(&offset) {
                positions.push(offset);
            }
        } else {
            word.extend(ch.to_lowercase());
            offset += 1;
        }
    }
    // A trailing hyphen is not a break.
    if positions.last() == Some(&offset) {
        positions.pop();
    }
    (word, positions)
}

/// Look up built-in break positions for a word.
pub fn lookup_positions(word: &str) -> Option<&'static [usize]> {
    HYPHENATED_WORDS
        .get(word.to_lowercase().as_str())
        .map(Vec::as_slice)
}
