//! Serializable lexicon configuration.
//!
//! A [`LexiconConfig`] is the raw, uncompiled form of a lexicon: plain
//! strings and lists in declaration order. [`Lexicon::from_config`]
//! normalizes, compiles and validates it.
//!
//! [`Lexicon::from_config`]: crate::lexicon::Lexicon::from_config

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::MarkerSet;
use crate::error::{GlosaError, Result};
use crate::lexicon::weight::WeightProfile;

/// Raw lexicon configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Catch-all category assigned when nothing scores positively.
    pub sentinel: String,
    /// Categories in declaration order. Order breaks classification ties.
    pub categories: Vec<CategoryConfig>,
    /// Type keyword table.
    pub types: Vec<TypeConfig>,
    /// Negation, intensity and emotion markers.
    #[serde(default)]
    pub markers: MarkerSet,
    /// Stop words excluded from co-occurrence learning. `None` keeps the
    /// default Spanish list.
    #[serde(default)]
    pub stop_words: Option<Vec<String>>,
}

/// One category of the lexicon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Valid type ids, in resolution order.
    #[serde(default)]
    pub types: Vec<String>,
    /// Broader topical regex used as secondary context evidence.
    #[serde(default)]
    pub domain_pattern: Option<String>,
    /// Context patterns in resolution order.
    #[serde(default)]
    pub context_patterns: Vec<ContextPatternConfig>,
    #[serde(default)]
    pub default_weights: WeightProfile,
}

/// A regex tied to one (category, type) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextPatternConfig {
    #[serde(rename = "type")]
    pub type_id: String,
    pub pattern: String,
}

/// Keywords of one type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeConfig {
    pub id: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl LexiconConfig {
    /// Load a lexicon configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            GlosaError::lexicon(format!(
                "Failed to read lexicon file '{}': {}",
                path.display(),
                e
            ))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            GlosaError::lexicon(format!(
                "Failed to parse lexicon JSON from '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Write this configuration as pretty JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
