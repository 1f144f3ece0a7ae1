// Skill matrix: presence of each known skill in both documents.
//
// Matching runs on the raw text with case-insensitive substring containment,
// since normalization would destroy "c++", "node.js" and multi-word phrases.
// Substring matching is loose on purpose: "java" also matches "javascript".

use serde::{Deserialize, Serialize};

/// The built-in skill vocabulary, in display order.
pub const DEFAULT_SKILLS: &[&str] = &[
    "python",
    "java",
    "c++",
    "javascript",
    "html",
    "css",
    "sql",
    "react",
    "angular",
    "node.js",
    "machine learning",
    "data analysis",
    "project management",
    "agile",
    "scrum",
];

/// An ordered, read-only list of lowercase skill phrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillVocabulary {
    skills: Vec<String>,
}

impl SkillVocabulary {
    /// Build a vocabulary from arbitrary phrases. Phrases are lowercased so
    /// matching stays case-insensitive; order is preserved.
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            skills: skills
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS)
    }
}

/// One skill and whether each document mentions it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMatrixRow {
    pub skill: String,
    pub in_job_description: bool,
    pub in_resume: bool,
}

impl SkillMatrixRow {
    /// Required by the job description but absent from the resume.
    pub fn is_gap(&self) -> bool {
        self.in_job_description && !self.in_resume
    }
}

/// Build one row per vocabulary entry, in vocabulary order.
pub fn build(
    vocabulary: &SkillVocabulary,
    job_description_raw: &str,
    resume_raw: &str,
) -> Vec<SkillMatrixRow> {
    let jd = job_description_raw.to_lowercase();
    let resume = resume_raw.to_lowercase();

    vocabulary
        .skills()
        .iter()
        .map(|skill| SkillMatrixRow {
            skill: skill.clone(),
            in_job_description: jd.contains(skill.as_str()),
            in_resume: resume.contains(skill.as_str()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_row_per_skill_in_order() {
        let vocab = SkillVocabulary::default();
        let rows = build(&vocab, "", "");
        assert_eq!(rows.len(), DEFAULT_SKILLS.len());
        for (row, skill) in rows.iter().zip(DEFAULT_SKILLS) {
            assert_eq!(row.skill, *skill);
            assert!(!row.in_job_description && !row.in_resume);
        }
    }

    #[test]
    fn test_symbol_and_phrase_skills_match_raw_text() {
        let vocab = SkillVocabulary::default();
        let rows = build(
            &vocab,
            "Strong C++ and Node.js; Project Management a plus",
            "node.js only",
        );
        let find = |name: &str| rows.iter().find(|r| r.skill == name).unwrap();
        assert!(find("c++").in_job_description);
        assert!(!find("c++").in_resume);
        assert!(find("node.js").in_job_description && find("node.js").in_resume);
        assert!(find("project management").in_job_description);
        assert!(find("c++").is_gap());
    }

    #[test]
    fn test_substring_containment_is_loose() {
        let vocab = SkillVocabulary::default();
        let rows = build(&vocab, "JavaScript", "");
        let java = rows.iter().find(|r| r.skill == "java").unwrap();
        assert!(java.in_job_description);
    }

    #[test]
    fn test_custom_vocabulary_is_lowercased() {
        let vocab = SkillVocabulary::new(["Rust", "Kubernetes"]);
        assert_eq!(vocab.skills(), &["rust", "kubernetes"]);
        let rows = build(&vocab, "RUST", "kubernetes");
        assert!(rows[0].in_job_description && !rows[0].in_resume);
        assert!(!rows[1].in_job_description && rows[1].in_resume);
    }
}
