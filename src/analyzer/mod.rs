pub mod corpus;
pub mod document;
pub mod lexeme;
pub mod tfidf;

use std::marker::PhantomData;

use indexmap::IndexMap;
use num::Float;
use tracing::debug;

use crate::analyzer::{
    corpus::DocumentFrequency,
    document::DocumentRecord,
    lexeme::LexemeId,
    tfidf::{DefaultTfIdfEngine, TfIdfEngine},
};

/// Returned by [`CorpusAnalyzer::lookup_label`] for unresolved lexemes
pub const LABEL_NOT_AVAILABLE: &str = "N/A";

/// Corpus-wide statistics over a fixed list of documents.
///
/// `CorpusAnalyzer<N, E>` has the following generic parameters:
/// - `N`: score type (`f64` or `f32`)
/// - `E`: TF-IDF calculation engine (e.g., `DefaultTfIdfEngine`)
#[derive(Debug, Clone)]
pub struct CorpusAnalyzer<N = f64, E = DefaultTfIdfEngine>
where
    N: Float,
    E: TfIdfEngine<N>,
{
    /// the corpus, in load order
    documents: Vec<DocumentRecord<N>>,
    /// lexeme id -> representative label, first seen wins
    label_of: IndexMap<LexemeId, String>,
    _marker: PhantomData<E>,
}

impl<N, E> CorpusAnalyzer<N, E>
where
    N: Float,
    E: TfIdfEngine<N>,
{
    /// Create a new analyzer and resolve lexeme labels.
    /// An empty document list is allowed.
    pub fn new(documents: Vec<DocumentRecord<N>>) -> Self {
        let label_of = Self::resolve_labels(&documents);
        debug!(
            documents = documents.len(),
            labels = label_of.len(),
            "corpus analyzer built"
        );
        Self {
            documents,
            label_of,
            _marker: PhantomData,
        }
    }

    /// One pass in document-then-token order.
    /// An id whose first occurrence has neither lemma nor surface form stays
    /// open until a later occurrence supplies one.
    fn resolve_labels(documents: &[DocumentRecord<N>]) -> IndexMap<LexemeId, String> {
        let mut label_of = IndexMap::new();
        for doc in documents {
            for token in doc.tokens() {
                if label_of.contains_key(&token.lexeme_id) {
                    continue;
                }
                if let Some(label) = token.label() {
                    label_of.insert(token.lexeme_id, label.to_string());
                }
            }
        }
        label_of
    }

    /// Representative label for a lexeme, or [`LABEL_NOT_AVAILABLE`]
    #[inline]
    pub fn lookup_label(&self, lexeme_id: LexemeId) -> &str {
        self.label_of
            .get(&lexeme_id)
            .map(String::as_str)
            .unwrap_or(LABEL_NOT_AVAILABLE)
    }

    /// Total occurrences of every lexeme across all documents.
    /// Computed fresh on each call.
    pub fn global_frequencies(&self) -> IndexMap<LexemeId, u64> {
        let mut freq: IndexMap<LexemeId, u64> = IndexMap::new();
        for doc in &self.documents {
            for (&lexeme_id, &count) in doc.term_counts() {
                *freq.entry(lexeme_id).or_insert(0) += count;
            }
        }
        freq
    }

    /// Document frequency pass on its own
    pub fn document_frequencies(&self) -> DocumentFrequency {
        DocumentFrequency::from_documents(&self.documents)
    }

    /// Compute TF-IDF for every document, replacing any previous scores.
    ///
    /// Empty documents end with an empty score table. On an empty corpus
    /// this does nothing.
    pub fn compute_tfidf(&mut self) {
        if self.documents.is_empty() {
            return;
        }
        let df = self.document_frequencies();
        let doc_num = df.doc_num();
        debug!(doc_num, vocab = df.len(), "document frequency pass done");

        for doc in self.documents.iter_mut() {
            let total_tokens = doc.total_tokens();
            if total_tokens == 0 {
                doc.replace_scores(IndexMap::new());
                continue;
            }
            let scores: IndexMap<LexemeId, N> = doc
                .term_counts()
                .iter()
                .map(|(&lexeme_id, &count)| {
                    let tf = E::tf(count, total_tokens);
                    let idf = E::idf(doc_num, df.df(lexeme_id));
                    (lexeme_id, E::tfidf(tf, idf))
                })
                .collect();
            doc.replace_scores(scores);
        }
        debug!(doc_num, "tf-idf scoring pass done");
    }
}

/// read access
impl<N, E> CorpusAnalyzer<N, E>
where
    N: Float,
    E: TfIdfEngine<N>,
{
    #[inline]
    pub fn documents(&self) -> &[DocumentRecord<N>] {
        &self.documents
    }

    #[inline]
    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }

    /// lexeme id -> label, in first-seen order
    #[inline]
    pub fn labels(&self) -> &IndexMap<LexemeId, String> {
        &self.label_of
    }

    pub fn into_documents(self) -> Vec<DocumentRecord<N>> {
        self.documents
    }
}
