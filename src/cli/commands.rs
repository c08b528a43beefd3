//! Command implementations for the Glosa CLI.

use std::io::Write;
use std::time::Instant;

use log::info;
use rayon::prelude::*;

use crate::analysis::normalize;
use crate::classification::{Classifier, Comment, ConfidenceCalculator};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::GlosaConfig;
use crate::dataset::{self, RowFormat, ScoreColumns};
use crate::error::Result;
use crate::knowledge::KnowledgeBase;
use crate::knowledge::store::KnowledgeStore;
use crate::learning::WeightLearner;
use crate::lexicon::Lexicon;
use crate::summary::{CategorizationSummary, ConfidenceSummary};

/// Execute a CLI command.
pub fn execute_command(args: GlosaArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    match &args.command {
        Command::Classify(classify_args) => classify(classify_args, &config, &args),
        Command::Score(score_args) => score(score_args, &config, &args),
        Command::Learn(learn_args) => learn(learn_args, &config, &args),
        Command::Normalize(normalize_args) => normalize_text(normalize_args, &config, &args),
        Command::Explain(explain_args) => explain(explain_args, &config, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &config, &args),
        Command::Lexicon(lexicon_args) => export_lexicon(lexicon_args, &config),
    }
}

/// Merge the configuration file with command line overrides.
pub fn resolve_config(args: &GlosaArgs) -> Result<GlosaConfig> {
    let mut config = match &args.config {
        Some(path) => GlosaConfig::from_file(path)?,
        None => GlosaConfig::default(),
    };
    if let Some(dir) = &args.knowledge_dir {
        config.knowledge_dir = dir.clone();
    }
    if let Some(lexicon) = &args.lexicon {
        config.lexicon = Some(lexicon.clone());
    }
    if args.pretty {
        config.pretty = true;
    }
    config.validate()?;
    Ok(config)
}

/// Lexicon, store and loaded knowledge of one run.
struct Workspace {
    lexicon: Lexicon,
    store: KnowledgeStore,
    knowledge: KnowledgeBase,
}

impl Workspace {
    fn open(config: &GlosaConfig) -> Result<Self> {
        let lexicon = config.load_lexicon()?;
        let store = config.knowledge_store();
        let knowledge = store.load();
        Ok(Self {
            lexicon,
            store,
            knowledge,
        })
    }
}

fn score_columns(config: &GlosaConfig, overrides: &LabelColumns) -> ScoreColumns {
    let defaults = &config.score_columns;
    ScoreColumns {
        comment: overrides
            .comment_column
            .clone()
            .unwrap_or_else(|| defaults.comment.clone()),
        category: overrides
            .category_column
            .clone()
            .unwrap_or_else(|| defaults.category.clone()),
        type_: overrides
            .type_column
            .clone()
            .unwrap_or_else(|| defaults.type_.clone()),
    }
}

/// Read labeled comments for scoring or learning.
fn read_labeled(
    input: &std::path::Path,
    columns: &ScoreColumns,
) -> Result<(Vec<dataset::Row>, Vec<Comment>)> {
    let rows = dataset::read_rows(input)?;
    dataset::require_columns(
        &rows,
        &[
            columns.comment.as_str(),
            columns.category.as_str(),
            columns.type_.as_str(),
        ],
    )?;
    let comments = dataset::comments_from_rows(&rows, columns);
    Ok((rows, comments))
}

/// Classify a dataset.
fn classify(args: &ClassifyArgs, config: &GlosaConfig, cli_args: &GlosaArgs) -> Result<()> {
    let mut columns = config.classify_columns.clone();
    if let Some(id) = &args.id_column {
        columns.id = id.clone();
    }
    if let Some(comment) = &args.comment_column {
        columns.comment = comment.clone();
    }

    let workspace = Workspace::open(config)?;
    let rows = dataset::read_rows(&args.input)?;
    dataset::require_columns(&rows, &[columns.id.as_str(), columns.comment.as_str()])?;

    let start_time = Instant::now();
    let texts: Vec<Option<&str>> = rows
        .iter()
        .map(|row| dataset::text_cell(row, &columns.comment))
        .collect();
    let classifier = Classifier::new(&workspace.lexicon, &workspace.knowledge);
    let results = classifier.classify_batch(&texts);
    info!(
        "Classified {} comments in {}ms",
        results.len(),
        start_time.elapsed().as_millis()
    );

    let output_rows: Vec<dataset::Row> = rows
        .iter()
        .zip(&results)
        .map(|(row, result)| dataset::classified_row(row, &columns, result))
        .collect();
    write_output_rows(args.output.as_deref(), &output_rows, config.pretty)?;

    let summary = CategorizationSummary::from_results(&results);
    if let Some(path) = &args.summary {
        write_json_file(path, &summary)?;
    }
    if args.output.is_some() && cli_args.verbosity() > 0 {
        output_result(&summary, cli_args, config.pretty)?;
    }
    Ok(())
}

/// Score the confidence of labeled rows, optionally learning from them first.
fn score(args: &ScoreArgs, config: &GlosaConfig, cli_args: &GlosaArgs) -> Result<()> {
    let columns = score_columns(config, &args.columns);
    let mut workspace = Workspace::open(config)?;
    let (rows, comments) = read_labeled(&args.input, &columns)?;

    if args.learn {
        let learner = WeightLearner::new(&workspace.lexicon);
        let report =
            learner.learn_and_persist(&workspace.store, &mut workspace.knowledge, &comments)?;
        if cli_args.verbosity() > 1 {
            eprint!("{report}");
        }
    }

    let calculator = ConfidenceCalculator::new(&workspace.lexicon, &workspace.knowledge);
    let confidences: Vec<f64> = comments
        .par_iter()
        .map(|comment| calculator.confidence(comment))
        .collect();

    let output_rows: Vec<dataset::Row> = rows
        .iter()
        .zip(&confidences)
        .map(|(row, &confidence)| dataset::scored_row(row, confidence))
        .collect();
    write_output_rows(args.output.as_deref(), &output_rows, config.pretty)?;

    let summary = ConfidenceSummary::from_scores(&comments, &confidences);
    if let Some(path) = &args.summary {
        write_json_file(path, &summary)?;
    }
    if args.output.is_some() && cli_args.verbosity() > 0 {
        output_result(&summary, cli_args, config.pretty)?;
    }
    Ok(())
}

/// Run a learning pass and persist the knowledge base.
fn learn(args: &LearnArgs, config: &GlosaConfig, cli_args: &GlosaArgs) -> Result<()> {
    let columns = score_columns(config, &args.columns);
    let mut workspace = Workspace::open(config)?;
    let (_, comments) = read_labeled(&args.input, &columns)?;

    let learner = WeightLearner::new(&workspace.lexicon);
    let report =
        learner.learn_and_persist(&workspace.store, &mut workspace.knowledge, &comments)?;

    if cli_args.verbosity() > 0 {
        output_result(&report, cli_args, config.pretty)?;
    }
    Ok(())
}

fn normalize_text(args: &NormalizeArgs, config: &GlosaConfig, cli_args: &GlosaArgs) -> Result<()> {
    let result = NormalizeResult {
        normalized: normalize(&args.text),
        input: args.text.clone(),
    };
    output_result(&result, cli_args, config.pretty)
}

/// Classify one comment and show how each category scored.
fn explain(args: &ExplainArgs, config: &GlosaConfig, cli_args: &GlosaArgs) -> Result<()> {
    let workspace = Workspace::open(config)?;
    let classifier = Classifier::new(&workspace.lexicon, &workspace.knowledge);
    let explanation = classifier.explain(&args.text);

    let scored_label = match (&args.category, &args.type_id) {
        (Some(category), Some(type_id)) => Some((category.clone(), type_id.clone())),
        _ => explanation
            .classification
            .type_
            .clone()
            .map(|type_id| (explanation.classification.category.clone(), type_id)),
    };

    let calculator = ConfidenceCalculator::new(&workspace.lexicon, &workspace.knowledge);
    let confidence = scored_label.as_ref().and_then(|(category, type_id)| {
        calculator.detail(&Comment::labeled(
            args.text.clone(),
            category.clone(),
            type_id.clone(),
        ))
    });

    let emotions = workspace
        .lexicon
        .markers()
        .emotions(&explanation.normalized)
        .into_iter()
        .map(str::to_string)
        .collect();

    let result = ExplainResult {
        explanation,
        scored_label,
        confidence,
        emotions,
    };
    output_result(&result, cli_args, config.pretty)
}

fn show_stats(args: &StatsArgs, config: &GlosaConfig, cli_args: &GlosaArgs) -> Result<()> {
    let knowledge = config.knowledge_store().load();
    let result = StatsResult {
        knowledge_dir: config.knowledge_dir.clone(),
        stats: knowledge.stats(),
        weights: args
            .detailed
            .then(|| knowledge.learned_weights().clone()),
    };
    output_result(&result, cli_args, config.pretty)
}

/// Write the built-in lexicon, or the configured lexicon file re-read, as JSON.
fn export_lexicon(args: &LexiconArgs, config: &GlosaConfig) -> Result<()> {
    let lexicon_config = match &config.lexicon {
        Some(path) => crate::lexicon::LexiconConfig::load_from_file(path)?,
        None => crate::lexicon::builtin::spanish_config(),
    };
    // Reject a configuration that would not build.
    Lexicon::from_config(lexicon_config.clone())?;

    match &args.output {
        Some(path) => lexicon_config.save_to_file(path),
        None => {
            let json = serde_json::to_string_pretty(&lexicon_config)?;
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
            Ok(())
        }
    }
}

fn write_output_rows(
    path: Option<&std::path::Path>,
    rows: &[dataset::Row],
    pretty: bool,
) -> Result<()> {
    let format = path.map_or(RowFormat::JsonLines, RowFormat::for_path);
    dataset::write_rows(path, rows, format, pretty)
}
