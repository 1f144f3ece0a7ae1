use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use fitcheck::analysis::Analyzer;
use fitcheck::config::Config;
use fitcheck::document::{DocumentSource, FileSource, InlineText};
use fitcheck::output;
use fitcheck::sentiment::lexicon::LexiconScorer;
use fitcheck::skills::SkillVocabulary;
use fitcheck::text::stopwords::StopwordSet;

/// Fitcheck: compare a job description against a resume.
///
/// Scores lexical similarity, lists the keywords your resume is missing,
/// checks a fixed set of common skills and flags mismatched tone.
#[derive(Parser)]
#[command(name = "fitcheck", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze how well a resume matches a job description
    Analyze(AnalyzeArgs),

    /// List the skills checked by the skills analysis
    Skills,
}

#[derive(Args)]
struct AnalyzeArgs {
    /// Job description file (.txt, .pdf or .docx)
    #[arg(long, conflicts_with = "jd_text", required_unless_present = "jd_text")]
    jd: Option<std::path::PathBuf>,

    /// Job description text, passed inline
    #[arg(long)]
    jd_text: Option<String>,

    /// Resume file (.txt, .pdf or .docx)
    #[arg(long, conflicts_with = "resume_text", required_unless_present = "resume_text")]
    resume: Option<std::path::PathBuf>,

    /// Resume text, passed inline
    #[arg(long)]
    resume_text: Option<String>,

    /// Number of top keywords per document (overrides FITCHECK_TOP_N)
    #[arg(long)]
    top_n: Option<usize>,

    /// Print the result as JSON instead of the terminal report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so --json output stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fitcheck=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => {
            let mut config = Config::load()?;
            if let Some(top_n) = args.top_n {
                config.top_n = top_n;
            }
            config.validate()?;

            let jd_source = pick_source(args.jd, args.jd_text);
            let resume_source = pick_source(args.resume, args.resume_text);

            info!(
                jd = %jd_source.describe(),
                resume = %resume_source.describe(),
                "Reading documents"
            );
            let job_description = jd_source.read_text()?;
            let resume = resume_source.read_text()?;

            let analyzer = Analyzer::new(
                config.analyzer_settings(),
                StopwordSet::from_preset(config.stopwords),
                SkillVocabulary::default(),
                Box::new(LexiconScorer::new()),
            );
            let result = analyzer.analyze(&job_description, &resume)?;

            if args.json {
                println!("{}", output::to_json(&result)?);
            } else {
                output::terminal::display_report(&result);
            }
        }

        Commands::Skills => {
            output::terminal::display_skills(&SkillVocabulary::default());
        }
    }

    Ok(())
}

/// Choose between a file path and inline text. clap guarantees exactly one
/// is present.
fn pick_source(path: Option<std::path::PathBuf>, text: Option<String>) -> Box<dyn DocumentSource> {
    match path {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(InlineText(text.unwrap_or_default())),
    }
}
