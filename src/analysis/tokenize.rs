// Whitespace tokenization into a set of distinct lower-cased words.
//
// This is deliberately simple lexical normalization: no stemming, no
// punctuation stripping, no stop-word removal. Tokens are compared for
// exact equality after lower-casing, so "Cat" and "cat" collapse to one
// token while "cat" and "cat." stay distinct. The similarity measure built
// on top of this is set-based — token multiplicity is discarded here.

use std::collections::HashSet;

/// Extract the set of distinct normalized tokens from a document's text.
///
/// Lower-cases the whole string, splits on runs of Unicode whitespace, and
/// deduplicates. An empty or all-whitespace input yields an empty set.
pub fn tokenize(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| word.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        let tokens = tokenize("the cat sat");
        assert_eq!(tokens.len(), 3);
        assert!(tokens.contains("the"));
        assert!(tokens.contains("cat"));
        assert!(tokens.contains("sat"));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(tokenize("Hello World"), tokenize("hello world"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let tokens = tokenize("buffalo buffalo Buffalo buffalo");
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n  ").is_empty());
    }

    #[test]
    fn test_mixed_whitespace_runs() {
        let tokens = tokenize("  one\t\ttwo\nthree  \r\n four ");
        assert_eq!(tokens.len(), 4);
        assert!(tokens.contains("four"));
    }

    #[test]
    fn test_punctuation_is_kept() {
        // No punctuation stripping — "cat." is a different token than "cat"
        let tokens = tokenize("cat cat.");
        assert_eq!(tokens.len(), 2);
    }
}
