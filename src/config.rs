use std::env;

use anyhow::{Context, Result};

use crate::analysis::AnalyzerSettings;
use crate::keywords::DEFAULT_TOP_N;
use crate::sentiment::DEFAULT_DIVERGENCE_THRESHOLD;
use crate::text::stopwords::StopwordPreset;

/// Central configuration loaded from environment variables.
///
/// Everything has a default, so an empty environment is valid. The .env file
/// is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Keywords kept per document (FITCHECK_TOP_N, default 10)
    pub top_n: usize,
    /// Tone divergence threshold (FITCHECK_DIVERGENCE_THRESHOLD, default 0.5)
    pub divergence_threshold: f64,
    /// Stopword list to use (FITCHECK_STOPWORDS: "nltk" or "extended")
    pub stopwords: StopwordPreset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            divergence_threshold: DEFAULT_DIVERGENCE_THRESHOLD,
            stopwords: StopwordPreset::default(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup. `load` uses the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("FITCHECK_TOP_N") {
            let top_n: usize = raw
                .trim()
                .parse()
                .with_context(|| format!("FITCHECK_TOP_N must be a positive integer, got {raw:?}"))?;
            config.top_n = top_n;
        }

        if let Some(raw) = lookup("FITCHECK_DIVERGENCE_THRESHOLD") {
            let threshold: f64 = raw.trim().parse().with_context(|| {
                format!("FITCHECK_DIVERGENCE_THRESHOLD must be a number, got {raw:?}")
            })?;
            config.divergence_threshold = threshold;
        }

        if let Some(raw) = lookup("FITCHECK_STOPWORDS") {
            config.stopwords = match raw.trim().to_lowercase().as_str() {
                "" | "nltk" => StopwordPreset::Nltk,
                "extended" => StopwordPreset::Extended,
                other => anyhow::bail!(
                    "FITCHECK_STOPWORDS must be \"nltk\" or \"extended\", got {other:?}"
                ),
            };
        }

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges. Called by the loaders and again after CLI overrides.
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            anyhow::bail!("top_n must be at least 1 (FITCHECK_TOP_N / --top-n)");
        }
        if !self.divergence_threshold.is_finite() || self.divergence_threshold < 0.0 {
            anyhow::bail!(
                "divergence threshold must be a finite, non-negative number, got {}",
                self.divergence_threshold
            );
        }
        Ok(())
    }

    pub fn analyzer_settings(&self) -> AnalyzerSettings {
        AnalyzerSettings {
            top_n: self.top_n,
            divergence_threshold: self.divergence_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.top_n, 10);
        assert_eq!(config.divergence_threshold, 0.5);
        assert_eq!(config.stopwords, StopwordPreset::Nltk);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("FITCHECK_TOP_N", "25"),
            ("FITCHECK_DIVERGENCE_THRESHOLD", " 0.3 "),
            ("FITCHECK_STOPWORDS", "Extended"),
        ])
        .unwrap();
        assert_eq!(config.top_n, 25);
        assert_eq!(config.divergence_threshold, 0.3);
        assert_eq!(config.stopwords, StopwordPreset::Extended);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(load(&[("FITCHECK_TOP_N", "ten")]).is_err());
        assert!(load(&[("FITCHECK_TOP_N", "0")]).is_err());
        assert!(load(&[("FITCHECK_DIVERGENCE_THRESHOLD", "-1")]).is_err());
        assert!(load(&[("FITCHECK_DIVERGENCE_THRESHOLD", "NaN")]).is_err());
        let err = load(&[("FITCHECK_STOPWORDS", "french")]).unwrap_err();
        assert!(err.to_string().contains("FITCHECK_STOPWORDS"));
    }
}
