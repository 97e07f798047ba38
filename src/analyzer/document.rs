use indexmap::IndexMap;
use num::Float;

use crate::analyzer::lexeme::{LexemeId, Token};

/// DocumentRecord 構造体
/// One tokenized document.
///
/// The content facet (`identifier`, `tokens`, `term_counts`, `total_tokens`)
/// is fixed at construction. The score facet (`tfidf_scores`) is written
/// only by [`CorpusAnalyzer::compute_tfidf`](crate::CorpusAnalyzer::compute_tfidf).
///
/// # Examples
/// ```
/// use lexeme_tfidf::{DocumentRecord, Token};
/// let doc: DocumentRecord = DocumentRecord::new("a.csv", vec![
///     Token::new(1, "cat", "cat"),
///     Token::new(1, "cat", "cats"),
///     Token::new(2, "dog", "dog"),
/// ]);
/// assert_eq!(doc.total_tokens(), 3);
/// assert_eq!(doc.term_count(1), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DocumentRecord<N = f64>
where
    N: Float,
{
    identifier: String,
    tokens: Vec<Token>,
    term_counts: IndexMap<LexemeId, u64>,
    total_tokens: u64,
    tfidf_scores: IndexMap<LexemeId, N>,
}

impl<N> DocumentRecord<N>
where
    N: Float,
{
    /// Build a record and tally its term counts.
    /// An empty token list is valid and yields an empty tally.
    pub fn new(identifier: impl Into<String>, tokens: Vec<Token>) -> Self {
        let mut term_counts: IndexMap<LexemeId, u64> = IndexMap::new();
        for token in &tokens {
            *term_counts.entry(token.lexeme_id).or_insert(0) += 1;
        }
        let total_tokens = tokens.len() as u64;
        DocumentRecord {
            identifier: identifier.into(),
            tokens,
            term_counts,
            total_tokens,
            tfidf_scores: IndexMap::new(),
        }
    }

    /// Replace the whole score table.
    pub(crate) fn replace_scores(&mut self, scores: IndexMap<LexemeId, N>) {
        self.tfidf_scores = scores;
    }
}

/// read access
impl<N> DocumentRecord<N>
where
    N: Float,
{
    #[inline]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// lexeme id -> occurrences, in first-occurrence order
    #[inline]
    pub fn term_counts(&self) -> &IndexMap<LexemeId, u64> {
        &self.term_counts
    }

    #[inline]
    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    /// lexeme id -> TF-IDF, empty until the analyzer has run
    #[inline]
    pub fn tfidf_scores(&self) -> &IndexMap<LexemeId, N> {
        &self.tfidf_scores
    }

    /// Occurrences of a lexeme in this document, 0 if absent
    #[inline]
    pub fn term_count(&self, lexeme_id: LexemeId) -> u64 {
        self.term_counts.get(&lexeme_id).copied().unwrap_or(0)
    }

    /// In-document relative frequency of a lexeme.
    /// 0.0 for an empty document.
    #[inline]
    pub fn term_frequency(&self, lexeme_id: LexemeId) -> f64 {
        if self.total_tokens == 0 {
            return 0.0;
        }
        self.term_count(lexeme_id) as f64 / self.total_tokens as f64
    }

    /// Number of distinct lexemes
    #[inline]
    pub fn unique_terms(&self) -> usize {
        self.term_counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total_tokens == 0
    }
}
