// Similarity analysis — tokenization, pairwise Jaccard scoring, and the
// ranked all-pairs report.

pub mod report;
pub mod severity;
pub mod similarity;
pub mod tokenize;
