// Document collection — the in-memory batch of texts under analysis.

pub mod document;
pub mod loader;

pub use document::{Corpus, Document};
