// Sentiment analysis: per-document polarity and tone divergence.

pub mod lexicon;
pub mod traits;

use serde::{Deserialize, Serialize};

use traits::SentimentScorer;

/// Polarity gap above which the two documents are considered divergent.
pub const DEFAULT_DIVERGENCE_THRESHOLD: f64 = 0.5;

/// Polarity of both documents and whether their tones diverge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneReport {
    pub job_description: f64,
    pub resume: f64,
    /// Absolute polarity gap
    pub divergence: f64,
    /// True when `divergence` is strictly above the threshold
    pub divergent: bool,
}

/// Score both raw documents and compare their tone.
pub fn analyze(
    scorer: &dyn SentimentScorer,
    job_description_raw: &str,
    resume_raw: &str,
    threshold: f64,
) -> ToneReport {
    let job_description = bounded(scorer.polarity(job_description_raw));
    let resume = bounded(scorer.polarity(resume_raw));
    let divergence = (job_description - resume).abs();

    ToneReport {
        job_description,
        resume,
        divergence,
        divergent: divergence > threshold,
    }
}

/// Clamp a scorer's output into [-1.0, 1.0]. NaN and infinities read as neutral.
fn bounded(polarity: f64) -> f64 {
    if polarity.is_finite() {
        polarity.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}
