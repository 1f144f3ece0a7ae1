// Similarity scoring: two-document TF-IDF vectors compared by cosine.

pub mod cosine;
pub mod tfidf;

use crate::text::normalize::NormalizedText;

/// Score two normalized documents against each other.
///
/// Returns a value in [0.0, 1.0]. A document with at least one token always
/// scores 1.0 against itself; documents with no tokens score 0.0 instead of
/// failing.
pub fn score(a: &NormalizedText, b: &NormalizedText) -> f64 {
    let (vec_a, vec_b) = tfidf::vectorize_pair(&a.joined(), &b.joined());
    cosine::cosine_from_weights(&vec_a, &vec_b)
}
