use indexmap::IndexMap;
use num::Float;

use crate::analyzer::{document::DocumentRecord, lexeme::LexemeId};

/// keep document count and per-lexeme document counts
///
/// Result of the document-frequency pass. Each document contributes at
/// most 1 to a lexeme's count regardless of how often it occurs there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFrequency {
    /// number of documents scanned
    doc_num: u64,
    /// lexeme id -> number of documents containing it
    doc_freq: IndexMap<LexemeId, u64>,
}

impl DocumentFrequency {
    /// Create a new instance
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            doc_freq: IndexMap::new(),
        }
    }

    /// Count every document of the slice
    pub fn from_documents<N>(documents: &[DocumentRecord<N>]) -> Self
    where
        N: Float,
    {
        let mut df = Self::new();
        for doc in documents {
            df.add_set(doc.term_counts().keys().copied());
        }
        df
    }

    /// Add one document's distinct lexemes
    pub fn add_set<I>(&mut self, lexemes: I)
    where
        I: IntoIterator<Item = LexemeId>,
    {
        self.doc_num += 1;
        for lexeme_id in lexemes {
            *self.doc_freq.entry(lexeme_id).or_insert(0) += 1;
        }
    }

    /// Get the number of documents
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Get the document frequency of a lexeme, 0 if unseen
    #[inline]
    pub fn df(&self, lexeme_id: LexemeId) -> u64 {
        self.doc_freq.get(&lexeme_id).copied().unwrap_or(0)
    }

    /// Get the vocabulary size (number of distinct lexemes)
    #[inline]
    pub fn len(&self) -> usize {
        self.doc_freq.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.doc_freq.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LexemeId, u64)> + '_ {
        self.doc_freq.iter().map(|(&id, &n)| (id, n))
    }
}
