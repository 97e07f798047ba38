use num::Float;

/// TF-IDF calculation engine.
///
/// `CorpusAnalyzer<N, E>` calls these once per (document, lexeme) pair
/// during the scoring pass.
pub trait TfIdfEngine<N>
where
    N: Float,
{
    /// TFの計算
    ///
    /// # Arguments
    /// * `count` - occurrences of the lexeme in the document
    /// * `total_tokens` - token count of the document, never 0
    fn tf(count: u64, total_tokens: u64) -> N;

    /// IDFの計算
    ///
    /// # Arguments
    /// * `doc_num` - number of documents in the corpus, fixed for one pass
    /// * `doc_freq` - number of documents containing the lexeme
    fn idf(doc_num: u64, doc_freq: u64) -> N;

    #[inline]
    fn tfidf(tf: N, idf: N) -> N {
        tf * idf
    }
}

/// デフォルトのTF-IDFエンジン
///
/// - `tf = count / total_tokens`
/// - `idf = ln(N / (df + 1))`
///
/// The smoothed IDF goes negative once `df + 1 > N`.
/// That value is kept as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTfIdfEngine;

impl<N> TfIdfEngine<N> for DefaultTfIdfEngine
where
    N: Float,
{
    #[inline]
    fn tf(count: u64, total_tokens: u64) -> N {
        cast::<N>(count as f64 / total_tokens as f64)
    }

    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> N {
        cast::<N>((doc_num as f64 / (doc_freq as f64 + 1.0)).ln())
    }
}

/// f64 -> N; float to float casts never fail, NaN passes through
#[inline]
fn cast<N: Float>(value: f64) -> N {
    <N as num::NumCast>::from(value).unwrap_or_else(N::nan)
}
