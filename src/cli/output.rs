//! Output formatting for CLI commands.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::classification::{ConfidenceDetail, Explanation};
use crate::cli::args::{GlosaArgs, OutputFormat};
use crate::error::Result;
use crate::knowledge::KnowledgeStats;
use crate::lexicon::WeightProfile;

/// Result of the `normalize` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizeResult {
    pub input: String,
    pub normalized: String,
}

impl fmt::Display for NormalizeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.normalized)
    }
}

/// Result of the `explain` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExplainResult {
    #[serde(flatten)]
    pub explanation: Explanation,
    /// The (category, type) pair the confidence was computed for.
    pub scored_label: Option<(String, String)>,
    pub confidence: Option<ConfidenceDetail>,
    /// Emotion groups present in the normalized comment.
    #[serde(default)]
    pub emotions: Vec<String>,
}

impl fmt::Display for ExplainResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let classification = &self.explanation.classification;
        writeln!(f, "Normalized: {}", self.explanation.normalized)?;
        writeln!(f, "Category:    {}", classification.category)?;
        writeln!(
            f,
            "Subcategory: {}",
            classification.subcategory.as_deref().unwrap_or("-")
        )?;
        writeln!(
            f,
            "Type:        {}",
            classification.type_.as_deref().unwrap_or("-")
        )?;
        if !self.emotions.is_empty() {
            writeln!(f, "Emotions:    {}", self.emotions.join(", "))?;
        }
        writeln!(f)?;
        writeln!(f, "Category evidence:")?;
        writeln!(f, "─────────────────")?;
        for aggregate in &self.explanation.aggregates {
            let frequency = aggregate
                .frequency_weight
                .map_or_else(|| "-".to_string(), |w| format!("{w:.1}%"));
            writeln!(
                f,
                "  {:<24} keyword {:>6.2}  context {:<5}  frequency {:>6}  total {:>6.2}",
                aggregate.category,
                aggregate.keyword,
                if aggregate.context_match { "yes" } else { "no" },
                frequency,
                aggregate.total
            )?;
        }

        if let (Some((category, type_id)), Some(detail)) = (&self.scored_label, &self.confidence) {
            writeln!(f)?;
            writeln!(f, "Confidence for {category} / {type_id}: {:.3}", detail.confidence)?;
            writeln!(
                f,
                "  keyword {:.3} × {:.2}  context {:.3} × {:.2}  type {:.3} × {:.2}",
                detail.scores.keyword,
                detail.weights.keyword,
                detail.scores.context,
                detail.weights.context,
                detail.scores.type_,
                detail.weights.type_
            )?;
        } else if let Some((category, type_id)) = &self.scored_label {
            writeln!(f)?;
            writeln!(f, "Confidence for {category} / {type_id}: 0.000 (unknown label)")?;
        }
        Ok(())
    }
}

/// Result of the `stats` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResult {
    pub knowledge_dir: PathBuf,
    #[serde(flatten)]
    pub stats: KnowledgeStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<BTreeMap<String, WeightProfile>>,
}

impl fmt::Display for StatsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Knowledge Statistics:")?;
        writeln!(f, "═════════════════════")?;
        writeln!(f, "Directory: {}", self.knowledge_dir.display())?;
        writeln!(f, "Learned weight profiles: {}", self.stats.learned_profiles)?;
        writeln!(
            f,
            "Synonyms: {} words, {} links",
            self.stats.synonym_words, self.stats.synonym_links
        )?;
        writeln!(
            f,
            "Co-occurrences: {} words, {} counts",
            self.stats.cooccurrence_words, self.stats.cooccurrence_total
        )?;
        writeln!(f, "Recorded examples: {}", self.stats.recorded_examples)?;

        if let Some(weights) = &self.weights {
            writeln!(f)?;
            writeln!(f, "Learned Weights:")?;
            writeln!(f, "───────────────")?;
            for (category, profile) in weights {
                writeln!(
                    f,
                    "  {:<24} keyword {:.2}  context {:.2}  type {:.2}",
                    category, profile.keyword, profile.context, profile.type_
                )?;
            }
        }
        Ok(())
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(result: &T, args: &GlosaArgs, pretty: bool) -> Result<()>
where
    T: Serialize + fmt::Display,
{
    match args.output_format {
        OutputFormat::Human => {
            print!("{result}");
            Ok(())
        }
        OutputFormat::Json => output_json(result, pretty),
    }
}

/// Output a value as JSON.
fn output_json<T: Serialize>(result: &T, pretty: bool) -> Result<()> {
    println!("{}", to_json(result, pretty)?);
    Ok(())
}

/// Write a value as pretty JSON to a file.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    std::fs::write(path, to_json(value, true)?)?;
    Ok(())
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
