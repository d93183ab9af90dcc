//! Approximate prefix search used for incremental lookup.
//!
//! Both engines store their words in (nearly) alphabetical order, so the
//! locator walks the list once and stops where the shared prefix with the
//! query starts shrinking. Unsorted input still yields a deterministic index,
//! just not necessarily the best one.

use caseless::Caseless;
use unicode_normalization::UnicodeNormalization;

/// Builds the comparison key for a word.
///
/// Applies full Unicode case folding (`ß` becomes `ss`), drops `/`, `.`, `-` and spaces, maps `&` to `a`, then applies
/// canonical composition (NFC).
pub fn normalize(word: &str) -> String {
    word.chars()
        .default_case_fold()
        .filter(|c| !matches!(c, '/' | '.' | '-' | ' '))
        .map(|c| if c == '&' { 'a' } else { c })
        .nfc()
        .collect()
}

/// Returns the index of the word that best matches `query` as a prefix.
///
/// - The first word whose key starts with the whole query key wins.
/// - Otherwise, once the common prefix length drops below that of the
///   previous word, the previous word is returned.
/// - Otherwise the last word is returned.
///
/// An empty list or a query that normalizes to nothing yields `0`, which is
/// indistinguishable from a match on the first word; check the list size.
pub fn find<'a>(words: impl IntoIterator<Item = &'a str>, query: &str) -> usize {
    let key: Vec<char> = normalize(query).chars().collect();
    if key.is_empty() {
        return 0;
    }

    let mut previous_common = 0;
    let mut last = 0;
    for (index, word) in words.into_iter().enumerate() {
        let common = common_prefix_len(&normalize(word), &key);
        if common == key.len() {
            return index;
        }
        if common < previous_common {
            return index - 1;
        }
        previous_common = common;
        last = index;
    }
    last
}

fn common_prefix_len(word: &str, key: &[char]) -> usize {
    word.chars().zip(key).take_while(|(a, b)| a == *b).count()
}
