//! Runtime configuration.
//!
//! A [`GlosaConfig`] can be read from a JSON file; every field is optional
//! and falls back to its default. Command line flags override file values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dataset::{ClassifyColumns, ScoreColumns};
use crate::error::{GlosaError, Result};
use crate::knowledge::store::KnowledgeStore;
use crate::lexicon::Lexicon;

/// Default directory of the learned knowledge artifacts.
pub const DEFAULT_KNOWLEDGE_DIR: &str = "learning";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlosaConfig {
    /// Directory holding the learned knowledge artifacts.
    pub knowledge_dir: PathBuf,
    /// Lexicon JSON file; the built-in Spanish lexicon when absent.
    pub lexicon: Option<PathBuf>,
    pub classify_columns: ClassifyColumns,
    pub score_columns: ScoreColumns,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for GlosaConfig {
    fn default() -> Self {
        Self {
            knowledge_dir: PathBuf::from(DEFAULT_KNOWLEDGE_DIR),
            lexicon: None,
            classify_columns: ClassifyColumns::default(),
            score_columns: ScoreColumns::default(),
            pretty: false,
        }
    }
}

impl GlosaConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            GlosaError::config(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| GlosaError::config(format!("Invalid configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration as pretty JSON.
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.knowledge_dir.as_os_str().is_empty() {
            return Err(GlosaError::config("knowledge_dir must not be empty"));
        }
        let columns = [
            ("classify_columns.id", &self.classify_columns.id),
            ("classify_columns.comment", &self.classify_columns.comment),
            ("score_columns.comment", &self.score_columns.comment),
            ("score_columns.category", &self.score_columns.category),
            ("score_columns.type", &self.score_columns.type_),
        ];
        for (name, value) in columns {
            if value.trim().is_empty() {
                return Err(GlosaError::config(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }

    /// Build the configured lexicon.
    pub fn load_lexicon(&self) -> Result<Lexicon> {
        match &self.lexicon {
            Some(path) => Lexicon::load_from_file(path),
            None => Lexicon::builtin(),
        }
    }

    pub fn knowledge_store(&self) -> KnowledgeStore {
        KnowledgeStore::new(&self.knowledge_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = GlosaConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.classify_columns.comment, "comentarios");
        assert_eq!(config.score_columns.category, "Categoría");
    }

    #[test]
    fn test_partial_json() {
        let config = GlosaConfig::from_json(
            r#"{"knowledge_dir": "/tmp/k", "classify_columns": {"comment": "texto"}}"#,
        )
        .unwrap();
        assert_eq!(config.knowledge_dir, PathBuf::from("/tmp/k"));
        assert_eq!(config.classify_columns.id, "PNR");
        assert_eq!(config.classify_columns.comment, "texto");
        assert!(config.lexicon.is_none());
    }

    #[test]
    fn test_empty_column_rejected() {
        let err = GlosaConfig::from_json(r#"{"score_columns": {"type": " "}}"#).unwrap_err();
        assert!(matches!(err, GlosaError::Config(_)));
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("glosa.json");
        let config = GlosaConfig {
            pretty: true,
            ..GlosaConfig::default()
        };
        config.to_file(&path).unwrap();
        assert_eq!(GlosaConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_builtin_lexicon_by_default() {
        let lexicon = GlosaConfig::default().load_lexicon().unwrap();
        assert_eq!(lexicon.sentinel(), "Otros");
    }
}
