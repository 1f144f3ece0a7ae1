// Sentiment scorer trait, the seam for swapping polarity providers.
//
// The engine only needs "text in, polarity out". The default implementation is
// a small embedded lexicon; anything else (a hosted model, a bigger lexicon)
// can be dropped in behind this trait without touching the orchestrator.

/// Trait for scoring the polarity of a piece of text.
pub trait SentimentScorer: Send + Sync {
    /// Polarity from -1.0 (unfavorable) to 1.0 (favorable). Text with no
    /// sentiment-bearing words scores 0.0.
    fn polarity(&self, text: &str) -> f64;
}

/// Scorer that reports every text as neutral. Useful when tone analysis is
/// not wanted; divergence can never trigger with it.
pub struct NeutralScorer;

impl SentimentScorer for NeutralScorer {
    fn polarity(&self, _text: &str) -> f64 {
        0.0
    }
}
