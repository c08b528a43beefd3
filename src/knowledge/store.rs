//! File-backed persistence for the knowledge base.
//!
//! Each artifact lives in its own pretty-printed JSON file inside one
//! directory:
//!
//! | File | Content |
//! |---|---|
//! | `category_weights.json` | category → `{keyword, context, type}` |
//! | `synonyms.json` | word → list of words |
//! | `cooccurrences.json` | word → {category: count} |
//! | `category_frequencies.json` | category → labeled example count |
//!
//! Loading never fails: a missing file is an empty artifact and an
//! unreadable or malformed one is logged and treated as empty. Saving
//! rewrites every file through a temporary file and a rename.
//!
//! There is no locking. Two processes saving into the same directory race
//! and the last writer wins.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{GlosaError, Result};
use crate::knowledge::KnowledgeBase;

pub const WEIGHTS_FILE: &str = "category_weights.json";
pub const SYNONYMS_FILE: &str = "synonyms.json";
pub const COOCCURRENCES_FILE: &str = "cooccurrences.json";
pub const FREQUENCIES_FILE: &str = "category_frequencies.json";

/// A directory holding the knowledge base artifacts.
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    directory: PathBuf,
}

impl KnowledgeStore {
    /// Create a store rooted at `directory`. The directory is created on
    /// first save.
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Get the full path for an artifact name.
    fn file_path(&self, name: &str) -> PathBuf {
        self.directory.join(name)
    }

    /// Load every artifact, substituting empty ones for anything missing or
    /// unreadable.
    pub fn load(&self) -> KnowledgeBase {
        let knowledge = KnowledgeBase::from_parts(
            self.load_artifact(WEIGHTS_FILE),
            self.load_artifact(SYNONYMS_FILE),
            self.load_artifact(COOCCURRENCES_FILE),
            self.load_artifact(FREQUENCIES_FILE),
        );

        // Profiles from older or hand-edited files may not sum to 1.0.
        let mut weights = knowledge.learned_weights().clone();
        weights.retain(|category, profile| {
            let valid = profile.is_valid();
            if !valid {
                warn!(
                    "Ignoring learned weights for '{}': they sum to {:.3}",
                    category,
                    profile.sum()
                );
            }
            valid
        });
        let mut knowledge = knowledge;
        knowledge.replace_weights(weights);

        let stats = knowledge.stats();
        info!(
            "Loaded knowledge from {}: {} weight profiles, {} synonym entries, {} co-occurrence words",
            self.directory.display(),
            stats.learned_profiles,
            stats.synonym_words,
            stats.cooccurrence_words
        );
        knowledge
    }

    /// Rewrite every artifact.
    pub fn save(&self, knowledge: &KnowledgeBase) -> Result<()> {
        if !self.directory.exists() {
            std::fs::create_dir_all(&self.directory).map_err(|e| {
                GlosaError::knowledge(format!(
                    "Failed to create knowledge directory '{}': {}",
                    self.directory.display(),
                    e
                ))
            })?;
        }
        if !self.directory.is_dir() {
            return Err(GlosaError::knowledge(format!(
                "Path is not a directory: {}",
                self.directory.display()
            )));
        }

        self.save_artifact(WEIGHTS_FILE, knowledge.learned_weights())?;
        self.save_artifact(SYNONYMS_FILE, knowledge.synonyms())?;
        self.save_artifact(COOCCURRENCES_FILE, knowledge.cooccurrences())?;
        self.save_artifact(FREQUENCIES_FILE, knowledge.frequencies())?;

        info!("Saved knowledge to {}", self.directory.display());
        Ok(())
    }

    fn load_artifact<T: DeserializeOwned + Default>(&self, name: &str) -> T {
        let path = self.file_path(name);
        if !path.exists() {
            debug!("{} not found, starting empty", path.display());
            return T::default();
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read {}: {}; starting empty", path.display(), e);
                return T::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to parse {}: {}; starting empty", path.display(), e);
                T::default()
            }
        }
    }

    fn save_artifact<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        let path = self.file_path(name);
        let temp_path = self.file_path(&format!("{name}.tmp"));

        let content = serde_json::to_string_pretty(value)?;
        std::fs::write(&temp_path, content).map_err(|e| {
            GlosaError::knowledge(format!("Failed to write {}: {}", temp_path.display(), e))
        })?;
        std::fs::rename(&temp_path, &path).map_err(|e| {
            GlosaError::knowledge(format!("Failed to replace {}: {}", path.display(), e))
        })?;
        Ok(())
    }
}
