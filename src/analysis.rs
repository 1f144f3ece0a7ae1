// Analysis orchestrator. Runs every stage over one job description / resume
// pair and assembles the result.
//
// Data flow:
//   raw text -> normalize -> similarity + keywords
//   raw text -> skill matrix + sentiment
//
// The only failure is an empty input, checked before any work happens. All
// numeric edge cases resolve to defined defaults inside the stages.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::keywords::{self, KeywordList, KeywordOverlap, DEFAULT_TOP_N};
use crate::sentiment::lexicon::LexiconScorer;
use crate::sentiment::traits::SentimentScorer;
use crate::sentiment::{self, DEFAULT_DIVERGENCE_THRESHOLD};
use crate::similarity;
use crate::skills::{self, SkillMatrixRow, SkillVocabulary};
use crate::text::normalize::normalize;
use crate::text::stopwords::StopwordSet;

/// Which input was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    JobDescription,
    Resume,
    Both,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::JobDescription => write!(f, "job description"),
            Side::Resume => write!(f, "resume"),
            Side::Both => write!(f, "job description and resume"),
        }
    }
}

/// Errors the engine can report.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Input error: {0} is empty. Provide both a job description and a resume.")]
    EmptyInput(Side),
}

/// Tunable knobs for a single analyzer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyzerSettings {
    /// Keywords kept per document (default 10)
    pub top_n: usize,
    /// Sentiment gap above which tones are flagged as divergent (default 0.5)
    pub divergence_threshold: f64,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            divergence_threshold: DEFAULT_DIVERGENCE_THRESHOLD,
        }
    }
}

/// Complete match assessment for one job description / resume pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Cosine similarity of the TF-IDF vectors, 0.0 to 1.0
    pub similarity: f64,
    pub jd_keywords: KeywordList,
    pub resume_keywords: KeywordList,
    /// Job description keywords absent from the resume keywords, in JD rank order
    pub missing_keywords: Vec<String>,
    pub keyword_overlap: KeywordOverlap,
    pub skill_matrix: Vec<SkillMatrixRow>,
    pub jd_sentiment: f64,
    pub resume_sentiment: f64,
    pub tone_divergence_flag: bool,
}

impl AnalysisResult {
    /// Similarity as a percentage, 0.0 to 100.0.
    pub fn match_percent(&self) -> f64 {
        self.similarity * 100.0
    }

    /// Skills the job description mentions but the resume does not.
    pub fn skill_gaps(&self) -> impl Iterator<Item = &str> {
        self.skill_matrix
            .iter()
            .filter(|row| row.is_gap())
            .map(|row| row.skill.as_str())
    }
}

/// The comparison engine. Holds only immutable configuration, so one instance
/// can serve any number of analyses, including concurrently.
pub struct Analyzer {
    settings: AnalyzerSettings,
    stopwords: StopwordSet,
    skills: SkillVocabulary,
    scorer: Box<dyn SentimentScorer>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(
            AnalyzerSettings::default(),
            StopwordSet::default(),
            SkillVocabulary::default(),
            Box::new(LexiconScorer::new()),
        )
    }
}

impl Analyzer {
    pub fn new(
        settings: AnalyzerSettings,
        stopwords: StopwordSet,
        skills: SkillVocabulary,
        scorer: Box<dyn SentimentScorer>,
    ) -> Self {
        Self {
            settings,
            stopwords,
            skills,
            scorer,
        }
    }

    pub fn settings(&self) -> &AnalyzerSettings {
        &self.settings
    }

    pub fn skills(&self) -> &SkillVocabulary {
        &self.skills
    }

    /// Compare a job description against a resume.
    ///
    /// Fails only when either document is empty or whitespace-only.
    pub fn analyze(
        &self,
        job_description_raw: &str,
        resume_raw: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        validate(job_description_raw, resume_raw)?;

        let jd_normalized = normalize(job_description_raw, &self.stopwords);
        let resume_normalized = normalize(resume_raw, &self.stopwords);
        debug!(
            jd_tokens = jd_normalized.len(),
            resume_tokens = resume_normalized.len(),
            "Normalized documents"
        );

        let similarity = similarity::score(&jd_normalized, &resume_normalized);

        let jd_keywords = keywords::top_keywords(&jd_normalized, self.settings.top_n);
        let resume_keywords = keywords::top_keywords(&resume_normalized, self.settings.top_n);
        let missing_keywords = keywords::missing(&jd_keywords, &resume_keywords);
        let keyword_overlap = KeywordOverlap::between(&jd_keywords, &resume_keywords);

        let skill_matrix = skills::build(&self.skills, job_description_raw, resume_raw);

        let tone = sentiment::analyze(
            &*self.scorer,
            job_description_raw,
            resume_raw,
            self.settings.divergence_threshold,
        );

        info!(
            similarity,
            missing = missing_keywords.len(),
            skill_gaps = skill_matrix.iter().filter(|r| r.is_gap()).count(),
            tone_divergence = tone.divergence,
            "Analysis complete"
        );

        Ok(AnalysisResult {
            similarity,
            jd_keywords,
            resume_keywords,
            missing_keywords,
            keyword_overlap,
            skill_matrix,
            jd_sentiment: tone.job_description,
            resume_sentiment: tone.resume,
            tone_divergence_flag: tone.divergent,
        })
    }
}

fn validate(job_description_raw: &str, resume_raw: &str) -> Result<(), AnalysisError> {
    let jd_empty = job_description_raw.trim().is_empty();
    let resume_empty = resume_raw.trim().is_empty();
    match (jd_empty, resume_empty) {
        (true, true) => Err(AnalysisError::EmptyInput(Side::Both)),
        (true, false) => Err(AnalysisError::EmptyInput(Side::JobDescription)),
        (false, true) => Err(AnalysisError::EmptyInput(Side::Resume)),
        (false, false) => Ok(()),
    }
}
