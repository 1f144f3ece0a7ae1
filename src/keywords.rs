// Keyword extraction: frequency-ranked top-N tokens and the gaps between two
// keyword lists.
//
// Ranking is by raw count, descending. Ties keep first-occurrence order: counts
// are accumulated in insertion order and then stably sorted.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::text::normalize::NormalizedText;

/// Default number of keywords kept per document.
pub const DEFAULT_TOP_N: usize = 10;

/// Tokens ranked by frequency, highest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordList(Vec<String>);

impl KeywordList {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.0.iter().any(|k| k == keyword)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|k| k.as_str())
    }
}

impl From<Vec<String>> for KeywordList {
    fn from(keywords: Vec<String>) -> Self {
        Self(keywords)
    }
}

/// Count each distinct token, ranked by count with ties in first-seen order.
pub fn ranked_counts(normalized: &NormalizedText) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for token in normalized.iter() {
        match index.get(token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token, counts.len());
                counts.push((token.to_string(), 1));
            }
        }
    }

    // sort_by is stable, so equal counts stay in insertion order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// The `n` most frequent tokens (fewer if the vocabulary is smaller).
pub fn top_keywords(normalized: &NormalizedText, n: usize) -> KeywordList {
    ranked_counts(normalized)
        .into_iter()
        .take(n)
        .map(|(word, _)| word)
        .collect::<Vec<_>>()
        .into()
}

/// Keywords in `jd_keywords` that are absent from `resume_keywords`.
///
/// Semantically a set difference; returned in JD rank order. Only the capped
/// keyword lists are compared, so a term outside the JD's top N is never
/// reported even if the resume lacks it.
pub fn missing(jd_keywords: &KeywordList, resume_keywords: &KeywordList) -> Vec<String> {
    let resume: HashSet<&str> = resume_keywords.iter().collect();
    let mut seen = HashSet::new();
    jd_keywords
        .iter()
        .filter(|k| !resume.contains(k) && seen.insert(*k))
        .map(str::to_string)
        .collect()
}

/// How two keyword lists split into shared and one-sided terms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordOverlap {
    pub common: Vec<String>,
    pub only_in_job_description: Vec<String>,
    pub only_in_resume: Vec<String>,
}

impl KeywordOverlap {
    pub fn between(jd_keywords: &KeywordList, resume_keywords: &KeywordList) -> Self {
        let common = jd_keywords
            .iter()
            .filter(|k| resume_keywords.contains(k))
            .map(str::to_string)
            .collect();

        Self {
            common,
            only_in_job_description: missing(jd_keywords, resume_keywords),
            only_in_resume: missing(resume_keywords, jd_keywords),
        }
    }

    pub fn total(&self) -> usize {
        self.common.len() + self.only_in_job_description.len() + self.only_in_resume.len()
    }

    /// Fraction of all distinct keywords in each bucket:
    /// (common, only in job description, only in resume). All zero when empty.
    pub fn shares(&self) -> (f64, f64, f64) {
        let total = self.total();
        if total == 0 {
            return (0.0, 0.0, 0.0);
        }
        let total = total as f64;
        (
            self.common.len() as f64 / total,
            self.only_in_job_description.len() as f64 / total,
            self.only_in_resume.len() as f64 / total,
        )
    }
}
