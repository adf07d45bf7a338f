// Textguard: lexical plagiarism screening for plain-text files.
//
// This is the library root. The analysis module holds the pure scoring
// core; corpus and output are the ingestion and rendering layers around it.

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod output;
