//! Linear-scan similarity search over a [`Corpus`].
//!
//! Every query is scored against every record: O(n * d) per corpus. That is
//! fine for the few hundred records a course produces; a larger corpus would
//! need an approximate nearest-neighbour index instead.

use super::types::SearchResult;
use crate::corpus::Corpus;
use tracing::warn;

/// Computes cosine similarity between two vectors.
///
/// Returns values from -1.0 (opposite) to 1.0 (identical), with 0.0 indicating
/// orthogonal vectors. Returns 0.0 for mismatched lengths, zero magnitude, or
/// a non-finite result. Accumulates in f64 so large components do not overflow.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        warn!(
            a_len = a.len(),
            b_len = b.len(),
            "embedding dimension mismatch; returning zero similarity"
        );
        return 0.0;
    }

    let dot_product: f64 = a.iter().zip(b.iter()).map(|(&x, &y)| f64::from(x) * f64::from(y)).sum();
    let magnitude_a: f64 = a.iter().map(|&x| f64::from(x).powi(2)).sum::<f64>().sqrt();
    let magnitude_b: f64 = b.iter().map(|&x| f64::from(x).powi(2)).sum::<f64>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    let similarity = dot_product / (magnitude_a * magnitude_b);
    if similarity.is_finite() {
        similarity.clamp(-1.0, 1.0) as f32
    } else {
        0.0
    }
}

/// Returns up to `top_k` records scoring strictly above `threshold`, best first.
///
/// Equal scores keep corpus order (the sort is stable).
pub fn search(corpus: &Corpus, query_embedding: &[f32], top_k: usize, threshold: f32) -> Vec<SearchResult> {
    if corpus.is_empty() || top_k == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(usize, f32)> = corpus
        .embeddings()
        .iter()
        .map(|embedding| cosine_similarity(query_embedding, embedding))
        .enumerate()
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    scored
        .into_iter()
        .take(top_k)
        .filter(|(_, score)| *score > threshold)
        .map(|(index, score)| SearchResult {
            index,
            score,
            record: corpus.records()[index].clone(),
        })
        .collect()
}
