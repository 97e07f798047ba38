use std::fs;

use lexeme_tfidf::{loader, CorpusAnalyzer, DocumentRecord, Report, LABEL_NOT_AVAILABLE};
use tempfile::TempDir;

const HEADER: &str = "辞書,文境界,書字形,語彙素,語彙素読み,品詞,語形,語彙素ID";

fn corpus_dir(files: &[(&str, &[&str])]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (file, rows) in files {
        let mut content = String::from(HEADER);
        for row in *rows {
            content.push('\n');
            content.push_str(row);
        }
        content.push('\n');
        fs::write(dir.path().join(file), content).unwrap();
    }
    dir
}

#[test]
fn load_analyze_report() {
    let dir = corpus_dir(
        &[
            (
                "a.csv",
                &[
                    "1,B,猫,猫,ネコ,名詞-普通名詞-一般,ネコ,1",
                    "1,I,犬,犬,イヌ,名詞-普通名詞-一般,イヌ,2",
                    "1,I,ねこ,猫,ネコ,名詞-普通名詞-一般,ネコ,1",
                    "broken row",
                ],
            ),
            ("b.csv", &["1,B,猫,猫,ネコ,名詞-普通名詞-一般,ネコ,1"]),
            ("c.csv", &["1,B,、,,,補助記号-読点,,3", "1,I,猫,猫,ネコ,名詞,ネコ,not-a-number"]),
            ("d.csv", &[]),
        ],
    );

    let documents: Vec<DocumentRecord> = loader::load_directory(dir.path()).unwrap();
    let names: Vec<&str> = documents.iter().map(|d| d.identifier()).collect();
    assert_eq!(names, vec!["a.csv", "b.csv", "c.csv"]);
    for doc in &documents {
        let sum: u64 = doc.term_counts().values().sum();
        assert_eq!(sum, doc.total_tokens());
    }

    let mut analyzer: CorpusAnalyzer = CorpusAnalyzer::new(documents);
    assert_eq!(analyzer.lookup_label(1), "猫");
    assert_eq!(analyzer.lookup_label(3), "、");
    assert_eq!(analyzer.lookup_label(99), LABEL_NOT_AVAILABLE);

    let global = analyzer.global_frequencies();
    assert_eq!(global[&1], 3);
    assert_eq!(global[&2], 1);
    assert_eq!(global[&3], 1);

    analyzer.compute_tfidf();
    let a = &analyzer.documents()[0];
    let expected = 2.0 / 3.0 * (3.0f64 / 3.0).ln();
    assert!((a.tfidf_scores()[&1] - expected).abs() < 1e-12);
    let expected = 1.0 / 3.0 * (3.0f64 / 2.0).ln();
    assert!((a.tfidf_scores()[&2] - expected).abs() < 1e-12);

    let report = Report::build(&analyzer, 10);
    assert_eq!(report.global_frequencies.rows[0].lexeme_id, 1);
    assert_eq!(report.documents.len(), 3);
    assert_eq!(report.documents[0].scores.rows[0].lexeme_id, 2);
}
