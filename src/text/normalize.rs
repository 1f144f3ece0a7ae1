// Document normalization.
//
// Lowercase, drop everything that isn't an ASCII letter or whitespace, split on
// whitespace and remove stopwords. This is deliberately lossy: "c++" becomes
// "c" and "node.js" becomes "nodejs". Skill matching works on the raw text for
// exactly that reason.

use serde::{Deserialize, Serialize};

use super::stopwords::StopwordSet;

/// Ordered tokens of a normalized document. Duplicates are kept and original
/// relative order is preserved; every token matches `^[a-z]+$`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedText {
    tokens: Vec<String>,
}

impl NormalizedText {
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens joined back into a single space-delimited string.
    pub fn joined(&self) -> String {
        self.tokens.join(" ")
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.as_str())
    }
}

impl From<Vec<String>> for NormalizedText {
    fn from(tokens: Vec<String>) -> Self {
        Self { tokens }
    }
}

/// Normalize a raw document against the given stopword set.
///
/// Never fails; empty or symbol-only input yields an empty sequence.
pub fn normalize(text: &str, stopwords: &StopwordSet) -> NormalizedText {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();

    let tokens = cleaned
        .split_whitespace()
        .filter(|word| !stopwords.contains(word))
        .map(str::to_string)
        .collect();

    NormalizedText { tokens }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(text: &str) -> Vec<String> {
        normalize(text, &StopwordSet::nltk()).tokens().to_vec()
    }

    #[test]
    fn test_lowercases_and_strips_symbols() {
        assert_eq!(
            norm("Senior Python/SQL Engineer!!"),
            vec!["senior", "pythonsql", "engineer"]
        );
    }

    #[test]
    fn test_removes_stopwords_keeps_order_and_duplicates() {
        assert_eq!(
            norm("The data and the data pipeline"),
            vec!["data", "data", "pipeline"]
        );
    }

    #[test]
    fn test_symbol_bearing_skills_are_mangled() {
        // Known lossy case: "c++" loses its symbols and "node.js" fuses
        assert_eq!(norm("C++ and Node.js"), vec!["c", "nodejs"]);
    }

    #[test]
    fn test_digits_are_stripped() {
        assert_eq!(norm("5 years of k8s"), vec!["years", "ks"]);
    }

    #[test]
    fn test_empty_and_symbol_only_input() {
        assert!(norm("").is_empty());
        assert!(norm("   ").is_empty());
        assert!(norm("123 !!! ???").is_empty());
    }

    #[test]
    fn test_contractions_fall_through_stopwords() {
        // "don't" becomes "dont", which is not in the list
        assert_eq!(norm("don't stop"), vec!["dont", "stop"]);
    }

    #[test]
    fn test_joined() {
        let text = normalize("Rust and Go", &StopwordSet::nltk());
        assert_eq!(text.joined(), "rust go");
    }
}
