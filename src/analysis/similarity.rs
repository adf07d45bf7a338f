// Jaccard similarity between two token sets.
//
// The score is the ratio of shared tokens to total distinct tokens:
//
//   |A ∩ B| / |A ∪ B|
//
// This gives 0.0 for documents with no words in common and 1.0 for
// documents with identical vocabularies. Word order and repetition do not
// matter — only which distinct tokens appear on each side.

use std::collections::HashSet;

/// Compute the Jaccard similarity between two token sets.
///
/// Returns a score from 0.0 (disjoint) to 1.0 (identical vocabularies).
/// Two empty sets are identical by convention and score 1.0, so a pair of
/// empty documents never produces a NaN from the 0/0 division.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }

    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;

    intersection as f64 / union as f64
}
