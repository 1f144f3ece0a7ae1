// Two-document TF-IDF vectorization.
//
// The corpus is exactly the pair being compared, so IDF has only two possible
// values: terms present on both sides get the lower weight, terms unique to one
// side the higher. Weighting matches the common "smooth IDF" convention:
//
//   idf(t) = ln((1 + n) / (1 + df(t))) + 1      (n = 2)
//   w(t, d) = count(t, d) * idf(t), then L2-normalized per document
//
// The +1 in numerator and denominator keeps df = 0 from dividing by zero.
// Every normalized token is a vocabulary term, single letters included, so a
// document with any tokens at all always has a non-zero vector.

use std::collections::BTreeMap;

use tracing::debug;

/// Sparse term weights for one document, keyed in sorted term order.
pub type TermVector = BTreeMap<String, f64>;

/// Number of documents in the corpus, always the pair being compared.
const CORPUS_SIZE: f64 = 2.0;

/// Build L2-normalized TF-IDF vectors for a pair of whitespace-delimited
/// documents.
///
/// A vector is empty only when its document has no tokens.
pub fn vectorize_pair(doc_a: &str, doc_b: &str) -> (TermVector, TermVector) {
    let counts_a = term_counts(doc_a);
    let counts_b = term_counts(doc_b);

    let vec_a = weigh(&counts_a, &counts_b);
    let vec_b = weigh(&counts_b, &counts_a);

    debug!(
        terms_a = vec_a.len(),
        terms_b = vec_b.len(),
        "Vectorized document pair"
    );

    (vec_a, vec_b)
}

/// Smoothed inverse document frequency over the two-document corpus.
pub fn smooth_idf(df: f64) -> f64 {
    ((1.0 + CORPUS_SIZE) / (1.0 + df)).ln() + 1.0
}

fn weigh(counts: &BTreeMap<&str, usize>, other: &BTreeMap<&str, usize>) -> TermVector {
    let mut vector: TermVector = counts
        .iter()
        .map(|(term, &count)| {
            let df = if other.contains_key(term) { 2.0 } else { 1.0 };
            (term.to_string(), count as f64 * smooth_idf(df))
        })
        .collect();
    l2_normalize(&mut vector);
    vector
}

fn term_counts(doc: &str) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for term in doc.split_whitespace() {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}

fn l2_normalize(vector: &mut TermVector) {
    let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > f64::EPSILON {
        for weight in vector.values_mut() {
            *weight /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_terms_weigh_less() {
        assert!((smooth_idf(2.0) - 1.0).abs() < 1e-12);
        assert!((smooth_idf(1.0) - (1.5f64.ln() + 1.0)).abs() < 1e-12);
        assert!(smooth_idf(1.0) > smooth_idf(2.0));
    }

    #[test]
    fn test_vectors_are_unit_length() {
        let (a, b) = vectorize_pair("rust rust tokio", "rust axum");
        let norm_a: f64 = a.values().map(|w| w * w).sum::<f64>().sqrt();
        let norm_b: f64 = b.values().map(|w| w * w).sum::<f64>().sqrt();
        assert!((norm_a - 1.0).abs() < 1e-12);
        assert!((norm_b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unique_term_outweighs_shared_term() {
        let (a, _) = vectorize_pair("rust tokio", "rust");
        assert!(a["tokio"] > a["rust"]);
    }

    #[test]
    fn test_single_char_tokens_are_terms() {
        let (a, b) = vectorize_pair("c r", "c");
        assert_eq!(a.keys().collect::<Vec<_>>(), vec!["c", "r"]);
        assert!(a["r"] > a["c"]);
        assert!((b["c"] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_documents() {
        let (a, b) = vectorize_pair("", "");
        assert!(a.is_empty() && b.is_empty());
    }
}
