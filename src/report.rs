//! Sorted, truncated views over analyzer results and their rendering.
//!
//! The analyzer hands out unordered maps; ordering and display caps live here.

use std::{cmp::Ordering, io::Write};

use num::Float;
use serde::Serialize;

use crate::{
    analyzer::{lexeme::LexemeId, tfidf::TfIdfEngine, CorpusAnalyzer},
    error::ReportError,
};

/// Default number of rows per table
pub const DEFAULT_DISPLAY_LIMIT: usize = 200_000;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FrequencyRow {
    pub lexeme_id: LexemeId,
    pub label: String,
    pub count: u64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScoreRow {
    pub lexeme_id: LexemeId,
    pub label: String,
    pub tf: f64,
    pub count: u64,
    pub tfidf: f64,
}

/// Rows kept after truncation plus how many were cut
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Table<R> {
    pub rows: Vec<R>,
    pub omitted: usize,
}

impl<R> Table<R> {
    fn truncated(mut rows: Vec<R>, limit: usize) -> Self {
        let omitted = rows.len().saturating_sub(limit);
        rows.truncate(limit);
        Table { rows, omitted }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DocumentTable {
    pub identifier: String,
    pub total_tokens: u64,
    #[serde(flatten)]
    pub scores: Table<ScoreRow>,
}

/// Corpus-wide occurrence counts, highest first, ties by lexeme id
pub fn global_frequency_table<N, E>(analyzer: &CorpusAnalyzer<N, E>, limit: usize) -> Table<FrequencyRow>
where
    N: Float,
    E: TfIdfEngine<N>,
{
    let mut rows: Vec<FrequencyRow> = analyzer
        .global_frequencies()
        .into_iter()
        .map(|(lexeme_id, count)| FrequencyRow {
            lexeme_id,
            label: analyzer.lookup_label(lexeme_id).to_string(),
            count,
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.lexeme_id.cmp(&b.lexeme_id)));
    Table::truncated(rows, limit)
}

/// Per-document TF-IDF, highest first, ties by lexeme id
pub fn document_score_tables<N, E>(analyzer: &CorpusAnalyzer<N, E>, limit: usize) -> Vec<DocumentTable>
where
    N: Float,
    E: TfIdfEngine<N>,
{
    analyzer
        .documents()
        .iter()
        .map(|doc| {
            let mut rows: Vec<ScoreRow> = doc
                .tfidf_scores()
                .iter()
                .map(|(&lexeme_id, score)| ScoreRow {
                    lexeme_id,
                    label: analyzer.lookup_label(lexeme_id).to_string(),
                    tf: doc.term_frequency(lexeme_id),
                    count: doc.term_count(lexeme_id),
                    tfidf: score.to_f64().unwrap_or(f64::NAN),
                })
                .collect();
            rows.sort_by(|a, b| by_score_desc(a.tfidf, b.tfidf).then_with(|| a.lexeme_id.cmp(&b.lexeme_id)));
            DocumentTable {
                identifier: doc.identifier().to_string(),
                total_tokens: doc.total_tokens(),
                scores: Table::truncated(rows, limit),
            }
        })
        .collect()
}

#[inline]
fn by_score_desc(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Everything the CLI prints
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Report {
    pub global_frequencies: Table<FrequencyRow>,
    pub documents: Vec<DocumentTable>,
}

impl Report {
    /// Build from an analyzer whose TF-IDF pass has already run
    pub fn build<N, E>(analyzer: &CorpusAnalyzer<N, E>, limit: usize) -> Self
    where
        N: Float,
        E: TfIdfEngine<N>,
    {
        Report {
            global_frequencies: global_frequency_table(analyzer, limit),
            documents: document_score_tables(analyzer, limit),
        }
    }

    pub fn render_json<W: Write>(&self, writer: &mut W) -> Result<(), ReportError> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writeln!(writer)?;
        Ok(())
    }

    pub fn render_text<W: Write>(&self, writer: &mut W) -> Result<(), ReportError> {
        self.render_global_text(writer)?;
        self.render_documents_text(writer)?;
        Ok(())
    }

    fn render_global_text<W: Write>(&self, w: &mut W) -> Result<(), ReportError> {
        let table = &self.global_frequencies;
        if table.rows.is_empty() {
            writeln!(w, "\nNo lexeme frequency data.")?;
            return Ok(());
        }
        writeln!(w, "\n--- Global lexeme frequencies ---")?;
        writeln!(w, "\nLexemeID | Lemma                | Count")?;
        writeln!(w, "------------------------------------------")?;
        for row in &table.rows {
            writeln!(w, "{:<8} | {:<20} | {}", row.lexeme_id, row.label, row.count)?;
        }
        if table.omitted > 0 {
            writeln!(w, "... ({} more)", table.omitted)?;
        }
        Ok(())
    }

    fn render_documents_text<W: Write>(&self, w: &mut W) -> Result<(), ReportError> {
        writeln!(w, "\n--- TF-IDF results ---")?;
        if self.documents.iter().all(|d| d.scores.rows.is_empty()) {
            writeln!(w, "TF-IDF scores have not been computed.")?;
            return Ok(());
        }
        for doc in &self.documents {
            writeln!(w, "\nDocument: {} (total lexemes: {})", doc.identifier, doc.total_tokens)?;
            if doc.scores.rows.is_empty() {
                writeln!(w, "  No lexemes with TF-IDF scores in this document.")?;
                continue;
            }
            writeln!(w, "  LexemeID | Lemma                |   TF   | Count | TF-IDF")?;
            writeln!(w, "  -----------------------------------------------------------")?;
            for row in &doc.scores.rows {
                writeln!(
                    w,
                    "  {:<8} | {:<20} | {:6.4} | {:5} | {:6.4}",
                    row.lexeme_id, row.label, row.tf, row.count, row.tfidf
                )?;
            }
            if doc.scores.omitted > 0 {
                writeln!(w, "  ... ({} more)", doc.scores.omitted)?;
            }
        }
        Ok(())
    }
}
