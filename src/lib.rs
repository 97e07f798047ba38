//! This crate computes TF-IDF over corpora of morphologically analyzed lexemes.
pub mod analyzer;
pub mod config;
pub mod error;
pub mod loader;
pub mod report;

/// Corpus Analyzer
/// The top-level struct of this crate.
/// It holds a fixed list of documents and provides:
/// - lexeme id -> representative label resolution
/// - corpus-wide lexeme frequencies
/// - document frequencies
/// - the TF-IDF pass, which writes each document's score table
///
/// `CorpusAnalyzer<N, E>` has the following generic parameters:
/// - `N`: score type (f32, f64)
/// - `E`: TF-IDF calculation engine type (e.g., DefaultTfIdfEngine)
///
/// The result maps are unordered from the caller's point of view;
/// sorting and truncation belong to [`report`].
pub use analyzer::CorpusAnalyzer;

/// Sentinel label for lexemes that never had a lemma or surface form
pub use analyzer::LABEL_NOT_AVAILABLE;

/// Document Record
/// One tokenized document. Term counts and token total are derived at
/// construction; TF-IDF scores are filled in by `CorpusAnalyzer`.
pub use analyzer::document::DocumentRecord;

/// Token and lexeme identifier
/// Tokens come pre-analyzed; the lexeme id is the dictionary key across
/// the corpus.
pub use analyzer::lexeme::{LexemeId, Token};

/// Document Frequency
/// Document count plus, per lexeme, the number of documents containing it.
pub use analyzer::corpus::DocumentFrequency;

/// TF IDF Calculation Engine Trait
/// Plug a different TF or IDF formula into `CorpusAnalyzer<N, E>`.
/// `DefaultTfIdfEngine` computes `count / total` and `ln(N / (df + 1))`.
pub use analyzer::tfidf::{DefaultTfIdfEngine, TfIdfEngine};

/// Report
/// Sorted and truncated tables built from an analyzer, rendered as text or JSON.
pub use report::Report;
