use csv::StringRecord;

use crate::{
    analyzer::lexeme::{LexemeId, Token},
    error::RowError,
};

/// Columns of one morphological-analysis row, in file order
pub const EXPECTED_COLUMNS: usize = 8;

const LEXEME_ID_COLUMN: usize = 7;

/// Turn one CSV record into a token.
///
/// Fields are trimmed. Columns past the eighth are ignored.
pub fn parse_row(record: &StringRecord) -> Result<Token, RowError> {
    if record.len() < EXPECTED_COLUMNS {
        return Err(RowError::TooFewColumns { found: record.len() });
    }
    let field = |i: usize| record.get(i).unwrap_or_default().trim().to_string();

    let raw_id = record.get(LEXEME_ID_COLUMN).unwrap_or_default().trim();
    let lexeme_id = raw_id.parse::<LexemeId>().map_err(|_| RowError::InvalidLexemeId {
        value: raw_id.to_string(),
    })?;

    Ok(Token {
        dictionary_source: field(0),
        sentence_boundary: field(1),
        surface_form: field(2),
        lemma: field(3),
        lemma_reading: field(4),
        part_of_speech: field(5),
        basic_form: field(6),
        lexeme_id,
    })
}
