//! Builds `DocumentRecord`s from a directory of morphological-analysis CSV files.
//!
//! One file is one document. Each row after the header is one token:
//! dictionary source, sentence boundary, surface form, lemma, lemma reading,
//! part of speech, basic form, lexeme id.

pub mod row;

use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};

use csv::StringRecord;
use num::Float;
use rayon::prelude::*;
use tracing::{error, info, warn};

use crate::{
    analyzer::document::DocumentRecord,
    error::{LoadError, Result},
};

pub use row::parse_row;

/// Read one CSV file into a document.
///
/// Bad rows are logged and skipped. Returns `None` when no row survives,
/// so the file does not enter the corpus.
pub fn read_document<N>(path: &Path) -> Result<Option<DocumentRecord<N>>>
where
    N: Float,
{
    let identifier = file_name(path);
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    // rows are split on every comma; quotes are literal text
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(file);

    let mut tokens = Vec::new();
    for result in reader.byte_records() {
        let raw = result.map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let line = raw.position().map(|p| p.line()).unwrap_or(0);
        // invalid UTF-8 only spoils the affected fields, never the file
        let record = StringRecord::from_byte_record_lossy(raw);
        match parse_row(&record) {
            Ok(token) => tokens.push(token),
            Err(e) => {
                warn!(file = %identifier, line, "skipping row: {}", e);
            }
        }
    }

    if tokens.is_empty() {
        warn!(file = %identifier, "no valid lexemes, document skipped");
        return Ok(None);
    }
    info!(file = %identifier, lexemes = tokens.len(), "document loaded");
    Ok(Some(DocumentRecord::new(identifier, tokens)))
}

/// Load every `*.csv` file directly under `dir`.
///
/// Files are parsed in parallel and returned in file-name order. A file
/// that fails to read is logged and left out.
pub fn load_directory<N>(dir: &Path) -> Result<Vec<DocumentRecord<N>>>
where
    N: Float + Send,
{
    if !dir.is_dir() {
        return Err(LoadError::MissingDirectory(dir.to_path_buf()));
    }
    let files = csv_files(dir)?;
    if files.is_empty() {
        return Err(LoadError::NoCsvFiles(dir.to_path_buf()));
    }
    info!(count = files.len(), threads = rayon::current_num_threads(), "processing csv files");
    Ok(load_files(&files))
}

/// Read the given files in parallel, keeping their order.
///
/// A file that fails to read is logged and left out; the others still load.
pub fn load_files<N>(files: &[PathBuf]) -> Vec<DocumentRecord<N>>
where
    N: Float + Send,
{
    let results: Vec<(&PathBuf, Result<Option<DocumentRecord<N>>>)> = files
        .par_iter()
        .map(|path| (path, read_document(path)))
        .collect();

    let mut documents = Vec::with_capacity(results.len());
    for (path, result) in results {
        match result {
            Ok(Some(doc)) => documents.push(doc),
            Ok(None) => {}
            Err(e) => error!(file = %file_name(path), "failed to process file: {}", e),
        }
    }
    documents
}

fn csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| {
            p.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
        })
        .collect();
    files.sort();
    Ok(files)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    const HEADER: &str = "辞書,文境界,書字形,語彙素,語彙素読み,品詞,語形,語彙素ID\n";

    fn write(dir: &TempDir, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// header, a good row, a row with invalid UTF-8 in the surface form, a good row
    fn with_invalid_utf8() -> Vec<u8> {
        let mut content = format!("{HEADER}1,B,猫,猫,ネコ,名詞,ネコ,10\n").into_bytes();
        content.extend_from_slice(b"1,I,\xFF\xFE,,,\xE5\x90,,11\n");
        content.extend_from_slice("1,I,猫,猫,ネコ,名詞,ネコ,10\n".as_bytes());
        content
    }

    #[test]
    fn read_document_skips_header_and_bad_rows() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "doc.csv",
            format!(
                "{HEADER}1,B,猫,猫,ネコ,名詞,ネコ,10\n\
                 1,I,が,が,ガ,助詞\n\
                 1,I,い,居る,イル,動詞,イル,xx\n\
                 \n\
                 1,I,猫,猫,ネコ,名詞,ネコ,10\n"
            ),
        );
        let doc: DocumentRecord = read_document(&path).unwrap().unwrap();
        assert_eq!(doc.identifier(), "doc.csv");
        assert_eq!(doc.total_tokens(), 2);
        assert_eq!(doc.term_count(10), 2);
    }

    #[test]
    fn invalid_utf8_row_keeps_the_document() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "broken.csv", with_invalid_utf8());
        let doc: DocumentRecord = read_document(&path).unwrap().unwrap();
        assert_eq!(doc.total_tokens(), 3);
        assert_eq!(doc.term_count(10), 2);
        assert_eq!(doc.term_count(11), 1);
        assert_eq!(doc.tokens()[1].surface_form, "\u{FFFD}\u{FFFD}");
    }

    #[test]
    fn quotes_are_literal() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "q.csv", format!("{HEADER}1,I,\",\",\",補助記号,\",7\n"));
        let doc: DocumentRecord = read_document(&path).unwrap().unwrap();
        assert_eq!(doc.tokens()[0].surface_form, "\"");
        assert_eq!(doc.term_count(7), 1);
    }

    #[test]
    fn read_document_without_valid_rows_is_none() {
        let dir = TempDir::new().unwrap();
        let empty = write(&dir, "empty.csv", HEADER);
        let bad = write(&dir, "bad.csv", format!("{HEADER}a,b,c\n"));
        assert!(read_document::<f64>(&empty).unwrap().is_none());
        assert!(read_document::<f64>(&bad).unwrap().is_none());
    }

    #[test]
    fn load_directory_orders_by_file_name() {
        let dir = TempDir::new().unwrap();
        write(&dir, "b.csv", format!("{HEADER}1,B,犬,犬,イヌ,名詞,イヌ,2\n"));
        write(&dir, "a.csv", format!("{HEADER}1,B,猫,猫,ネコ,名詞,ネコ,1\n"));
        write(&dir, "c.CSV", format!("{HEADER}1,B,鳥,鳥,トリ,名詞,トリ,3\n"));
        write(&dir, "skip.csv", HEADER);
        write(&dir, "notes.txt", "not a csv");

        let docs: Vec<DocumentRecord> = load_directory(dir.path()).unwrap();
        let names: Vec<&str> = docs.iter().map(|d| d.identifier()).collect();
        assert_eq!(names, vec!["a.csv", "b.csv", "c.CSV"]);
    }

    #[test]
    fn unreadable_file_is_skipped_and_others_load() {
        let dir = TempDir::new().unwrap();
        let good = write(&dir, "a.csv", format!("{HEADER}1,B,猫,猫,ネコ,名詞,ネコ,1\n"));
        let broken = write(&dir, "b.csv", with_invalid_utf8());
        let missing = dir.path().join("gone.csv");

        let docs: Vec<DocumentRecord> = load_files(&[good, missing, broken]);
        let names: Vec<&str> = docs.iter().map(|d| d.identifier()).collect();
        assert_eq!(names, vec!["a.csv", "b.csv"]);
    }

    #[test]
    fn missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("does-not-exist");
        assert!(matches!(
            load_directory::<f64>(&path),
            Err(LoadError::MissingDirectory(_))
        ));
    }

    #[test]
    fn directory_without_csv_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, "readme.txt", "hello");
        assert!(matches!(
            load_directory::<f64>(dir.path()),
            Err(LoadError::NoCsvFiles(_))
        ));
    }
}
