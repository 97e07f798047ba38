use criterion::{criterion_group, criterion_main, Criterion};
use lexeme_tfidf::{CorpusAnalyzer, DocumentRecord, LexemeId, Token};

/// tiny deterministic PRNG (xorshift32)
struct Rng(u32);

impl Rng {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }
}

fn synthetic_corpus(docs: usize, tokens_per_doc: usize, vocab: u32) -> Vec<DocumentRecord> {
    let mut rng = Rng(0x1234_5678);
    (0..docs)
        .map(|i| {
            let tokens = (0..tokens_per_doc)
                .map(|_| {
                    let id = (rng.next_u32() % vocab) as LexemeId;
                    Token::new(id, &format!("lemma{id}"), &format!("surface{id}"))
                })
                .collect();
            DocumentRecord::new(format!("doc{i}.csv"), tokens)
        })
        .collect()
}

fn analyze_benchmark(c: &mut Criterion) {
    let documents = synthetic_corpus(200, 2_000, 20_000);

    c.bench_function("build_analyzer", |b| {
        b.iter(|| CorpusAnalyzer::<f64>::new(documents.clone()))
    });

    let mut analyzer: CorpusAnalyzer = CorpusAnalyzer::new(documents.clone());
    c.bench_function("compute_tfidf", |b| b.iter(|| analyzer.compute_tfidf()));

    c.bench_function("global_frequencies", |b| b.iter(|| analyzer.global_frequencies()));
}

criterion_group!(benches, analyze_benchmark);
criterion_main!(benches);
