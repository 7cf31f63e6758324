// Static stop-word data — two hand-curated lists, English and German.
//
// Membership is the contract: both lists are reproduced verbatim from the
// curated source, lower-case and punctuation-free. The one exception is
// the English "such," entry, carried over as-is; purification strips
// commas from every word before lookup, so it can never match.

use std::collections::HashSet;
use std::sync::LazyLock;

pub static ENGLISH_STOPWORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "arent", "because", "been", "before", "being",
    "below", "between", "both", "cant", "cannot", "could", "couldnt", "didnt", "does", "doesnt",
    "doing", "dont", "down", "during", "each", "from", "further", "hadnt", "hasnt", "have",
    "havent", "having", "hed", "hell", "hes", "here", "heres", "hers", "herself", "himself",
    "hows", "into", "isnt", "itself", "lets", "more", "most", "mustnt", "myself", "once", "only",
    "other", "ought", "ours", "ourselves", "over", "same", "shant", "shed", "shell", "shes",
    "should", "shouldnt", "some", "such,", "than", "that", "thats", "their", "theirs", "them",
    "themselves", "then", "there", "theres", "these", "they", "theyd", "theyll", "theyre",
    "theyve", "this", "those", "through", "under", "until", "very", "wasnt", "well", "were",
    "weve", "werent", "what", "whats", "when", "whens", "where", "wheres", "which", "while",
    "whos", "whom", "whys", "with", "wont", "would", "wouldnt", "youd", "youll", "youre", "youve",
    "your", "yours", "yourself", "yourselves",
];

pub static GERMAN_STOPWORDS: &[&str] = &[
    "aber", "auch", "bist", "dadurch", "daher", "darum", "dass", "dein", "deine", "dessen",
    "deshalb", "dies", "dieser", "dieses", "doch", "dort", "durch", "eine", "einem", "einen",
    "einer", "eines", "euer", "eure", "hatte", "hatten", "hattest", "hattet", "hier", "hinter",
    "ihre", "jede", "jedem", "jeden", "jeder", "jedes", "jener", "jenes", "jetzt", "kann",
    "kannst", "können", "könnt", "machen", "mein", "meine", "mußt", "musst", "müssen", "müßt",
    "nach", "nachdem", "nein", "nicht", "oder", "seid", "sein", "seine", "sich", "sind", "soll",
    "sollen", "sollst", "sollt", "sonst", "soweit", "sowie", "unser", "unsere", "unter", "wann",
    "warum", "weiter", "weitere", "wenn", "werde", "werden", "werdet", "weshalb", "wieder",
    "wieso", "wird", "wirst", "woher", "wohin", "über",
];

// Loaded once, read-only for the life of the process.
static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ENGLISH_STOPWORDS
        .iter()
        .chain(GERMAN_STOPWORDS)
        .copied()
        .collect()
});

/// Exact-match test against both lists. Expects an already lower-cased word.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_both_lists() {
        assert!(is_stopword("cant"));
        assert!(is_stopword("yourselves"));
        assert!(is_stopword("über"));
        assert!(is_stopword("werden"));
        assert!(!is_stopword("quick"));
        assert!(!is_stopword(""));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        // Callers lower-case first; the data itself is all lower-case
        assert!(!is_stopword("Cant"));
        assert!(!is_stopword("ÜBER"));
    }

    #[test]
    fn test_list_sizes_match_curated_source() {
        assert_eq!(ENGLISH_STOPWORDS.len(), 115);
        assert_eq!(GERMAN_STOPWORDS.len(), 86);
    }
}
