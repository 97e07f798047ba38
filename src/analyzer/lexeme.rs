use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable lexeme identifier shared across the whole corpus
pub type LexemeId = i64;

/// One lexeme occurrence produced by the morphological analyzer.
///
/// Only `lexeme_id`, `lemma` and `surface_form` take part in computation.
/// The remaining fields are carried along for display.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Token {
    pub dictionary_source: String,
    pub sentence_boundary: String,
    /// as written in the text
    pub surface_form: String,
    /// canonical form, may be empty
    pub lemma: String,
    pub lemma_reading: String,
    pub part_of_speech: String,
    pub basic_form: String,
    pub lexeme_id: LexemeId,
}

impl Token {
    /// Build a token from the fields used in computation.
    /// Descriptive fields are left empty.
    pub fn new(lexeme_id: LexemeId, lemma: &str, surface_form: &str) -> Self {
        Token {
            lexeme_id,
            lemma: lemma.to_string(),
            surface_form: surface_form.to_string(),
            ..Default::default()
        }
    }

    /// Representative label for this occurrence:
    /// the lemma if present, otherwise the surface form
    #[inline]
    pub fn label(&self) -> Option<&str> {
        if !self.lemma.is_empty() {
            Some(self.lemma.as_str())
        } else if !self.surface_form.is_empty() {
            Some(self.surface_form.as_str())
        } else {
            None
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Lemma: {}, Surface: {}, PoS: {}",
            self.lexeme_id, self.lemma, self.surface_form, self.part_of_speech
        )
    }
}
