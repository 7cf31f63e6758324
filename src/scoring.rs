// Degree-of-conformity scoring.
//
// The score is the mean of the two directional recall ratios (matches
// relative to each document's own vocabulary size), expressed as a
// percentage. Averaging both directions weights the documents equally
// regardless of size disparity; this is deliberately not a Jaccard index.

/// Convert raw index sizes and a match count into a percentage.
///
/// Zero when either document is empty or nothing matches. Matches can
/// never exceed the smaller index, so each ratio stays in [0, 1] and the
/// score in [0, 100].
pub fn conformity(first_words: usize, second_words: usize, matches: usize) -> f64 {
    if first_words == 0 || second_words == 0 || matches == 0 {
        return 0.0;
    }
    let m = matches as f64;
    ((m / first_words as f64 + m / second_words as f64) / 2.0) * 100.0
}
