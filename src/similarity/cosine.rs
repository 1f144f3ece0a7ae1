// Cosine similarity over sparse term-weight maps.
//
// Both maps iterate in sorted key order, so cosine(a, b) and cosine(b, a)
// accumulate identical products in identical order and agree exactly.

use std::collections::BTreeMap;

/// Cosine similarity between two sparse weight vectors, clamped to [0.0, 1.0].
///
/// Returns 0.0 when either vector is empty or has (near) zero magnitude.
pub fn cosine_from_weights(a: &BTreeMap<String, f64>, b: &BTreeMap<String, f64>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = shorter
        .iter()
        .filter_map(|(term, wa)| longer.get(term).map(|wb| wa * wb))
        .sum();

    let mag_a = magnitude(a);
    let mag_b = magnitude(b);
    let denominator = mag_a * mag_b;

    if denominator < f64::EPSILON {
        return 0.0;
    }

    (dot / denominator).clamp(0.0, 1.0)
}

fn magnitude(v: &BTreeMap<String, f64>) -> f64 {
    v.values().map(|w| w * w).sum::<f64>().sqrt()
}
