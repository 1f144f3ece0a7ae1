// Colored terminal output for analysis reports.
//
// All terminal-specific formatting lives here; main.rs only decides which
// display function to call.

use colored::Colorize;

use crate::analysis::AnalysisResult;
use crate::skills::{SkillMatrixRow, SkillVocabulary};

use super::render_bar;

const BAR_WIDTH: usize = 30;

/// Display a full analysis report.
pub fn display_report(result: &AnalysisResult) {
    println!("\n{}", "=== Resume Match Score ===".bold());
    let bar = render_bar(result.similarity, BAR_WIDTH);
    println!(
        "  {} {}",
        colorize_by_score(&bar, result.similarity),
        format!("Similarity: {:.2}%", result.match_percent()).bold()
    );

    println!("\n{}", "=== Keyword Analysis ===".bold());
    println!(
        "  Top job description keywords: {}",
        join_or_none(result.jd_keywords.iter())
    );
    println!(
        "  Top resume keywords:          {}",
        join_or_none(result.resume_keywords.iter())
    );

    println!("\n{}", "=== Recommended Keywords to Add ===".bold());
    if result.missing_keywords.is_empty() {
        println!("  {}", "None. Your resume covers the top keywords.".green());
    } else {
        println!(
            "  {}",
            result.missing_keywords.join(", ").bright_yellow()
        );
    }

    println!("\n{}", "=== Keyword Comparison ===".bold());
    let overlap = &result.keyword_overlap;
    let (common, jd_only, resume_only) = overlap.shares();
    println!(
        "  {:<26} {:>3}  {:>5.1}%",
        "Common",
        overlap.common.len(),
        common * 100.0
    );
    println!(
        "  {:<26} {:>3}  {:>5.1}%",
        "Only in job description",
        overlap.only_in_job_description.len(),
        jd_only * 100.0
    );
    println!(
        "  {:<26} {:>3}  {:>5.1}%",
        "Only in resume",
        overlap.only_in_resume.len(),
        resume_only * 100.0
    );

    println!("\n{}", "=== Skills Analysis ===".bold());
    display_skill_matrix(&result.skill_matrix);

    println!("\n{}", "=== Sentiment Analysis ===".bold());
    println!("  Job description sentiment: {:.2}", result.jd_sentiment);
    println!("  Resume sentiment:          {:.2}", result.resume_sentiment);
    if result.tone_divergence_flag {
        println!(
            "  {} {}",
            "Warning:".yellow().bold(),
            "The tone of your resume significantly differs from the job description. \
             Consider adjusting your language."
                .yellow()
        );
    }
    println!();
}

/// Display the skill matrix as a two-column presence table.
pub fn display_skill_matrix(rows: &[SkillMatrixRow]) {
    println!(
        "  {:<22} {:^8} {:^8}",
        "Skill".dimmed(),
        "Job".dimmed(),
        "Resume".dimmed()
    );
    println!("  {}", "-".repeat(40).dimmed());

    for row in rows {
        let skill = if row.is_gap() {
            row.skill.bright_red().to_string()
        } else {
            row.skill.normal().to_string()
        };
        // Pad before coloring; ANSI codes throw off width formatting
        let padding = 22usize.saturating_sub(row.skill.chars().count());
        println!(
            "  {}{} {:^8} {:^8}",
            skill,
            " ".repeat(padding),
            presence_mark(row.in_job_description),
            presence_mark(row.in_resume)
        );
    }
}

/// Print the skill vocabulary, one per line.
pub fn display_skills(vocabulary: &SkillVocabulary) {
    println!(
        "\n{}",
        format!("=== Skill Vocabulary ({} skills) ===", vocabulary.len()).bold()
    );
    for (i, skill) in vocabulary.skills().iter().enumerate() {
        println!("  {:>2}. {}", i + 1, skill);
    }
}

fn presence_mark(present: bool) -> &'static str {
    if present {
        "yes"
    } else {
        "-"
    }
}

fn join_or_none<'a>(words: impl Iterator<Item = &'a str>) -> String {
    let joined = words.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "(none)".dimmed().to_string()
    } else {
        joined
    }
}

/// Color a string by match strength.
fn colorize_by_score(text: &str, score: f64) -> colored::ColoredString {
    if score >= 0.6 {
        text.bright_green()
    } else if score >= 0.3 {
        text.bright_yellow()
    } else {
        text.bright_red()
    }
}
