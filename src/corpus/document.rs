// Document and Corpus — the externally-owned state the analysis reads from.
//
// The scoring functions are pure; all mutable state (which documents are
// currently loaded) lives in the Corpus owned by the caller. Document ids
// come from a monotonic counter and exist only for list management — the
// scoring algorithm never looks at them.

use serde::{Deserialize, Serialize};

/// One unit of input text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Opaque identifier for list management, assigned at ingestion
    pub id: u64,
    /// Display label — usually a file name, not required unique
    pub name: String,
    /// Raw text, may be empty
    pub content: String,
}

/// An ordered collection of documents with monotonic id assignment.
#[derive(Debug, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    next_id: u64,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document and return its assigned id.
    pub fn add(&mut self, name: impl Into<String>, content: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.documents.push(Document {
            id,
            name: name.into(),
            content: content.into(),
        });
        id
    }

    /// Remove a document by id. Returns true if a document was removed.
    /// Any previously computed report is stale after this — re-run the
    /// analysis to get a fresh one.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.documents.len();
        self.documents.retain(|doc| doc.id != id);
        self.documents.len() != before
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
