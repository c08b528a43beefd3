//! # Glosa
//!
//! Lexicon and regex driven categorization of Spanish customer comments.
//!
//! ## Features
//!
//! - Accent-folding text normalization
//! - Keyword, context-pattern and type scoring with negation and intensity markers
//! - Category, subcategory and type assignment with deterministic tie-breaking
//! - Confidence scoring of existing labels
//! - Incremental learning of weights, synonyms and co-occurrences

pub mod analysis;
pub mod classification;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod knowledge;
pub mod learning;
pub mod lexicon;
pub mod scoring;
pub mod summary;

pub mod prelude {
    pub use crate::classification::{Classification, Classifier, Comment, ConfidenceCalculator};
    pub use crate::error::{GlosaError, Result};
    pub use crate::knowledge::KnowledgeBase;
    pub use crate::knowledge::store::KnowledgeStore;
    pub use crate::learning::{LearningReport, WeightLearner};
    pub use crate::lexicon::Lexicon;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
