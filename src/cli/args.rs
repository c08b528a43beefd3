//! Command line argument parsing for the Glosa CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Glosa - categorize Spanish customer comments and score label confidence
#[derive(Parser, Debug, Clone)]
#[command(name = "glosa")]
#[command(about = "Categorize Spanish customer comments and score label confidence")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct GlosaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "FILE", env = "GLOSA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory of the learned knowledge files
    #[arg(short = 'k', long, value_name = "DIR", env = "GLOSA_KNOWLEDGE_DIR")]
    pub knowledge_dir: Option<PathBuf>,

    /// Lexicon file (JSON); the built-in Spanish lexicon when absent
    #[arg(short, long, value_name = "FILE", env = "GLOSA_LEXICON")]
    pub lexicon: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl GlosaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Assign category, subcategory and type to every comment
    Classify(ClassifyArgs),

    /// Score the confidence of existing category/type labels
    Score(ScoreArgs),

    /// Learn weights, synonyms and co-occurrences from labeled comments
    Learn(LearnArgs),

    /// Print the normalized form of a comment
    Normalize(NormalizeArgs),

    /// Classify one comment and show the evidence
    Explain(ExplainArgs),

    /// Show knowledge base statistics
    Stats(StatsArgs),

    /// Export the active lexicon as JSON
    Lexicon(LexiconArgs),
}

/// Arguments for classifying a dataset
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Input rows (JSON lines or JSON array)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file; `.json` writes an array, anything else JSON lines.
    /// Standard output when absent.
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Write the categorization summary (JSON) to this file
    #[arg(long, value_name = "FILE")]
    pub summary: Option<PathBuf>,

    /// Identifier column
    #[arg(long)]
    pub id_column: Option<String>,

    /// Comment column
    #[arg(long)]
    pub comment_column: Option<String>,
}

/// Label column overrides shared by `score` and `learn`
#[derive(clap::Args, Debug, Clone, Default)]
pub struct LabelColumns {
    /// Comment column
    #[arg(long)]
    pub comment_column: Option<String>,

    /// Category column
    #[arg(long)]
    pub category_column: Option<String>,

    /// Type column
    #[arg(long)]
    pub type_column: Option<String>,
}

/// Arguments for confidence scoring
#[derive(Parser, Debug, Clone)]
pub struct ScoreArgs {
    /// Input rows (JSON lines or JSON array)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file; standard output when absent
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Learn from the same rows before scoring them
    #[arg(long)]
    pub learn: bool,

    /// Write the confidence summary (JSON) to this file
    #[arg(long, value_name = "FILE")]
    pub summary: Option<PathBuf>,

    #[command(flatten)]
    pub columns: LabelColumns,
}

/// Arguments for a learning pass
#[derive(Parser, Debug, Clone)]
pub struct LearnArgs {
    /// Labeled input rows (JSON lines or JSON array)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[command(flatten)]
    pub columns: LabelColumns,
}

/// Arguments for normalizing text
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    /// Text to normalize
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for explaining one classification
#[derive(Parser, Debug, Clone)]
pub struct ExplainArgs {
    /// Comment to classify
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Score confidence against this category instead of the predicted one
    #[arg(long, requires = "type_id")]
    pub category: Option<String>,

    /// Score confidence against this type instead of the predicted one
    #[arg(long = "type", id = "type_id", requires = "category")]
    pub type_id: Option<String>,
}

/// Arguments for knowledge base statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Include the learned weight table
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for exporting the lexicon
#[derive(Parser, Debug, Clone)]
pub struct LexiconArgs {
    /// Output file; standard output when absent
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_classify_command() {
        let args = GlosaArgs::try_parse_from([
            "glosa",
            "classify",
            "comments.jsonl",
            "--output",
            "out.json",
            "--comment-column",
            "texto",
        ])
        .unwrap();

        if let Command::Classify(classify_args) = args.command {
            assert_eq!(classify_args.input, PathBuf::from("comments.jsonl"));
            assert_eq!(classify_args.output, Some(PathBuf::from("out.json")));
            assert_eq!(classify_args.comment_column.as_deref(), Some("texto"));
            assert!(classify_args.summary.is_none());
        } else {
            panic!("Expected Classify command");
        }
    }

    #[test]
    fn test_score_command() {
        let args = GlosaArgs::try_parse_from([
            "glosa",
            "--knowledge-dir",
            "/tmp/learning",
            "score",
            "labeled.jsonl",
            "--learn",
            "--type-column",
            "Tipo2",
        ])
        .unwrap();

        assert_eq!(args.knowledge_dir, Some(PathBuf::from("/tmp/learning")));
        if let Command::Score(score_args) = args.command {
            assert!(score_args.learn);
            assert_eq!(score_args.columns.type_column.as_deref(), Some("Tipo2"));
            assert!(score_args.columns.category_column.is_none());
        } else {
            panic!("Expected Score command");
        }
    }

    #[test]
    fn test_explain_requires_both_labels() {
        assert!(
            GlosaArgs::try_parse_from(["glosa", "explain", "mi maleta", "--category", "Equipaje"])
                .is_err()
        );

        let args = GlosaArgs::try_parse_from([
            "glosa",
            "explain",
            "mi maleta",
            "--category",
            "Equipaje",
            "--type",
            "Daño",
        ])
        .unwrap();
        if let Command::Explain(explain_args) = args.command {
            assert_eq!(explain_args.category.as_deref(), Some("Equipaje"));
            assert_eq!(explain_args.type_id.as_deref(), Some("Daño"));
        } else {
            panic!("Expected Explain command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = GlosaArgs::try_parse_from(["glosa", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = GlosaArgs::try_parse_from(["glosa", "-vv", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args = GlosaArgs::try_parse_from(["glosa", "--quiet", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args = GlosaArgs::try_parse_from(["glosa", "--format", "json", "stats"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
    }
}
