// Overlap matching between two document indexes.
//
// Set indexes intersect. Weighted indexes pair greedily, one-to-one: an
// occurrence in the second document is consumed by at most one occurrence
// in the first, so duplicates never inflate the count.

use std::collections::{BTreeSet, HashMap};

use crate::index::DocumentIndex;

/// Count the canonical words present in both sets. Symmetric.
pub fn set_matches(first: &BTreeSet<String>, second: &BTreeSet<String>) -> usize {
    first.intersection(second).count()
}

/// The shared vocabulary itself, in lexical order.
pub fn shared_words(first: &BTreeSet<String>, second: &BTreeSet<String>) -> Vec<String> {
    first.intersection(second).cloned().collect()
}

/// Greedily pair each occurrence in `first` with a not-yet-consumed equal
/// occurrence in `second`, and count the pairs.
///
/// Consumption is tracked as a frequency count per distinct word,
/// decremented on every match; the result is the same as deleting matched
/// elements from a working copy, without mutating any input. The count
/// never exceeds min(|first|, |second|).
pub fn weighted_matches(first: &[String], second: &[String]) -> usize {
    let mut remaining: HashMap<&str, usize> = HashMap::new();
    for word in second {
        *remaining.entry(word.as_str()).or_insert(0) += 1;
    }

    let mut matches = 0;
    for word in first {
        if let Some(count) = remaining.get_mut(word.as_str()) {
            *count -= 1;
            if *count == 0 {
                remaining.remove(word.as_str());
            }
            matches += 1;
        }
    }
    matches
}

impl DocumentIndex {
    /// Match count against another index of the same representation.
    ///
    /// The pipeline always builds indexes in pairs; comparing mismatched
    /// representations is a caller bug and counts as no overlap.
    pub fn matches(&self, other: &Self) -> usize {
        match (self, other) {
            (Self::Set(a), Self::Set(b)) => set_matches(a, b),
            (Self::Weighted(a), Self::Weighted(b)) => weighted_matches(a, b),
            _ => {
                debug_assert!(false, "compared indexes of different representations");
                0
            }
        }
    }

    /// The intersected vocabulary for a pair of set indexes, lexical order.
    /// `None` for weighted indexes, where occurrences have no unique listing.
    pub fn shared_words(&self, other: &Self) -> Option<Vec<String>> {
        match (self, other) {
            (Self::Set(a), Self::Set(b)) => Some(shared_words(a, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn vec(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_set_matches_counts_intersection() {
        let a = set(&["quick", "brown", "storm"]);
        let b = set(&["quick", "brown", "calm"]);
        assert_eq!(set_matches(&a, &b), 2);
    }

    #[test]
    fn test_set_matches_symmetric() {
        let a = set(&["quick", "brown", "storm"]);
        let b = set(&["brown", "calm"]);
        assert_eq!(set_matches(&a, &b), set_matches(&b, &a));
    }

    #[test]
    fn test_set_matches_disjoint_is_zero() {
        let a = set(&["xyzzy"]);
        let b = set(&["plugh"]);
        assert_eq!(set_matches(&a, &b), 0);
    }

    #[test]
    fn test_shared_words_sorted() {
        let a = set(&["storm", "brown", "quick"]);
        let b = set(&["quick", "storm", "calm"]);
        assert_eq!(shared_words(&a, &b), vec(&["quick", "storm"]));
    }

    #[test]
    fn test_weighted_one_to_one_consumption() {
        // Three "storm" in the first document, only one in the second:
        // a single occurrence must not match more than once
        let a = vec(&["storm", "storm", "storm", "calm"]);
        let b = vec(&["storm", "calm", "calm"]);
        assert_eq!(weighted_matches(&a, &b), 2);
    }

    #[test]
    fn test_weighted_bounded_by_smaller_index() {
        let a = vec(&["wind", "wind", "wind", "wind"]);
        let b = vec(&["wind", "wind"]);
        assert_eq!(weighted_matches(&a, &b), 2);
        assert_eq!(weighted_matches(&b, &a), 2);
    }

    #[test]
    fn test_weighted_without_duplicates_reduces_to_intersection() {
        let a = vec(&["quick", "brown", "storm"]);
        let b = vec(&["brown", "quick", "calm"]);
        let as_set: BTreeSet<String> = a.iter().cloned().collect();
        let bs_set: BTreeSet<String> = b.iter().cloned().collect();
        assert_eq!(weighted_matches(&a, &b), set_matches(&as_set, &bs_set));
    }

    #[test]
    fn test_weighted_empty_inputs() {
        assert_eq!(weighted_matches(&[], &vec(&["storm"])), 0);
        assert_eq!(weighted_matches(&vec(&["storm"]), &[]), 0);
        assert_eq!(weighted_matches(&[], &[]), 0);
    }

    #[test]
    fn test_index_dispatch() {
        let a = DocumentIndex::build(["storm storm calm"], crate::index::Representation::Weighted);
        let b = DocumentIndex::build(["storm calm calm"], crate::index::Representation::Weighted);
        assert_eq!(a.matches(&b), 2);
        assert_eq!(a.shared_words(&b), None);

        let a = DocumentIndex::build(["storm storm calm"], crate::index::Representation::Set);
        let b = DocumentIndex::build(["storm calm calm"], crate::index::Representation::Set);
        assert_eq!(a.matches(&b), 2);
        assert_eq!(a.shared_words(&b), Some(vec(&["calm", "storm"])));
    }
}
