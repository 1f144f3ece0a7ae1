// Lexicon-based polarity scorer.
//
// Each sentiment-bearing word carries a fixed polarity. A word directly after
// an intensifier ("very good") is scaled up, and a word within two tokens of a
// negator ("not very good") is flipped and halved. The document polarity is
// the mean over all polar words found, so long documents don't saturate.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex_lite::Regex;

use super::traits::SentimentScorer;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]+(?:'[a-z]+)?").expect("word pattern is valid"));

/// How many tokens back a negator still applies.
const NEGATION_WINDOW: usize = 2;

/// Multiplier applied to a negated word's polarity.
const NEGATION_FACTOR: f64 = -0.5;

const NEGATORS: &[&str] = &["not", "never", "no", "without", "cannot", "hardly"];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("highly", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.4),
    ("truly", 1.2),
    ("exceptionally", 1.5),
    ("somewhat", 0.7),
    ("slightly", 0.6),
];

/// Polarity of common words in job postings and resumes.
const LEXICON: &[(&str, f64)] = &[
    // favorable
    ("excellent", 1.0),
    ("outstanding", 0.5),
    ("exceptional", 0.667),
    ("best", 1.0),
    ("great", 0.8),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("fantastic", 0.4),
    ("wonderful", 1.0),
    ("perfect", 1.0),
    ("good", 0.7),
    ("nice", 0.6),
    ("strong", 0.433),
    ("successful", 0.75),
    ("proven", 0.3),
    ("effective", 0.6),
    ("efficient", 0.3),
    ("innovative", 0.5),
    ("creative", 0.5),
    ("talented", 0.7),
    ("skilled", 0.6),
    ("experienced", 0.8),
    ("passionate", 0.4),
    ("enthusiastic", 0.5),
    ("exciting", 0.3),
    ("excited", 0.375),
    ("happy", 0.8),
    ("friendly", 0.375),
    ("collaborative", 0.3),
    ("supportive", 0.4),
    ("dynamic", 0.2),
    ("motivated", 0.4),
    ("dedicated", 0.4),
    ("reliable", 0.5),
    ("competitive", 0.2),
    ("rewarding", 0.5),
    ("flexible", 0.3),
    ("impressive", 1.0),
    ("valuable", 0.4),
    ("remarkable", 0.75),
    ("superb", 1.0),
    ("brilliant", 0.9),
    ("positive", 0.227),
    ("fun", 0.3),
    ("love", 0.5),
    ("improved", 0.4),
    ("achieved", 0.3),
    ("award", 0.5),
    // unfavorable
    ("bad", -0.7),
    ("poor", -0.4),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("worst", -1.0),
    ("weak", -0.375),
    ("difficult", -0.5),
    ("hard", -0.292),
    ("boring", -1.0),
    ("tedious", -0.5),
    ("stressful", -0.6),
    ("demanding", -0.2),
    ("limited", -0.071),
    ("negative", -0.3),
    ("failed", -0.5),
    ("failure", -0.6),
    ("wrong", -0.5),
    ("unfortunately", -0.5),
    ("problem", -0.3),
    ("problematic", -0.5),
    ("frustrating", -0.7),
    ("frustrated", -0.7),
    ("angry", -0.5),
    ("sad", -0.5),
    ("lazy", -0.25),
    ("slow", -0.3),
    ("toxic", -0.8),
    ("unreliable", -0.5),
    ("mediocre", -0.5),
    ("inadequate", -0.6),
    ("careless", -0.5),
    ("unprofessional", -0.6),
    ("unfortunate", -0.5),
    ("rejected", -0.4),
    ("hate", -0.8),
];

/// Scorer backed by a word-polarity lexicon.
pub struct LexiconScorer {
    lexicon: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
}

impl LexiconScorer {
    /// Scorer using the built-in lexicon.
    pub fn new() -> Self {
        Self::with_entries(LEXICON.iter().map(|(w, p)| (*w, *p)))
    }

    /// Scorer using caller-supplied word polarities (clamped to [-1, 1]) and
    /// the built-in intensifiers.
    pub fn with_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        Self {
            lexicon: entries
                .into_iter()
                .map(|(w, p)| (w.to_lowercase(), p.clamp(-1.0, 1.0)))
                .collect(),
            intensifiers: INTENSIFIERS
                .iter()
                .map(|(w, m)| (w.to_string(), *m))
                .collect(),
        }
    }

    /// Polarity of a single word, or None if it carries no sentiment.
    pub fn word_polarity(&self, word: &str) -> Option<f64> {
        self.lexicon.get(word).copied()
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let lower = text.to_lowercase();
        let tokens: Vec<&str> = WORD.find_iter(&lower).map(|m| m.as_str()).collect();

        let mut total = 0.0;
        let mut assessed = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(base) = self.word_polarity(token) else {
                continue;
            };

            let mut score = base;
            if i > 0 {
                if let Some(multiplier) = self.intensifiers.get(tokens[i - 1]) {
                    score *= multiplier;
                }
            }

            let window_start = i.saturating_sub(NEGATION_WINDOW);
            if tokens[window_start..i].iter().any(|t| is_negator(t)) {
                score *= NEGATION_FACTOR;
            }

            total += score.clamp(-1.0, 1.0);
            assessed += 1;
        }

        if assessed == 0 {
            0.0
        } else {
            (total / assessed as f64).clamp(-1.0, 1.0)
        }
    }
}

fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token) || token.ends_with("n't")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polarity(text: &str) -> f64 {
        LexiconScorer::new().polarity(text)
    }

    #[test]
    fn test_neutral_text() {
        assert_eq!(polarity("Python SQL React"), 0.0);
        assert_eq!(polarity(""), 0.0);
    }

    #[test]
    fn test_positive_and_negative() {
        assert!((polarity("An excellent team") - 1.0).abs() < 1e-12);
        assert!((polarity("A terrible commute") + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_mean_over_polar_words() {
        // good (0.7) and bad (-0.7) cancel out
        assert!(polarity("good pay, bad hours").abs() < 1e-12);
    }

    #[test]
    fn test_negation_flips_and_halves() {
        assert!((polarity("not good") + 0.35).abs() < 1e-12);
        assert!((polarity("isn't good") + 0.35).abs() < 1e-12);
        // negator two tokens back still applies
        assert!(polarity("never really good") < 0.0);
    }

    #[test]
    fn test_intensifier_scales_and_clamps() {
        assert!((polarity("very good") - 0.91).abs() < 1e-12);
        assert_eq!(polarity("extremely excellent"), 1.0);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(polarity("GREAT"), polarity("great"));
    }

    #[test]
    fn test_custom_lexicon() {
        let scorer = LexiconScorer::with_entries([("shiny", 2.0)]);
        assert_eq!(scorer.polarity("shiny"), 1.0);
        assert_eq!(scorer.polarity("excellent"), 0.0);
    }
}
