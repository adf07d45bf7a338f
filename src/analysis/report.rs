// All-pairs similarity report.
//
// Tokenizes each document exactly once, scores every unordered pair, and
// returns the results ranked by similarity. For N documents this is O(N)
// tokenizations and O(N^2) set comparisons — tokenization is never repeated
// per pair.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::similarity::jaccard;
use super::tokenize::tokenize;
use crate::corpus::document::Document;

/// The similarity score for one unordered pair of documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityResult {
    /// Display name of the first document (earlier in input order)
    pub document_a: String,
    /// Display name of the second document
    pub document_b: String,
    /// Jaccard similarity of the two token sets, 0.0 to 1.0
    pub similarity: f64,
}

/// Score every unordered pair of documents and rank the results.
///
/// The report contains exactly N·(N−1)/2 entries — one per pair, no
/// self-pairs — sorted by similarity descending. Ties keep pair-generation
/// order (the sort is stable), so for equal scores the pair that comes
/// first in document order appears first. With fewer than two documents
/// the report is empty.
pub fn analyze(documents: &[Document]) -> Vec<SimilarityResult> {
    // Tokenize each document once up front
    let token_sets: Vec<HashSet<String>> = documents
        .iter()
        .map(|doc| tokenize(&doc.content))
        .collect();

    let mut results = Vec::new();

    for i in 0..documents.len() {
        for j in (i + 1)..documents.len() {
            results.push(SimilarityResult {
                document_a: documents[i].name.clone(),
                document_b: documents[j].name.clone(),
                similarity: jaccard(&token_sets[i], &token_sets[j]),
            });
        }
    }

    results.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    info!(
        documents = documents.len(),
        pairs = results.len(),
        "Computed pairwise similarity report"
    );

    results
}
