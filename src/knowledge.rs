//! Learned knowledge shared by the scorers.
//!
//! The [`KnowledgeBase`] holds everything the learning pass produces:
//! per-category weight profiles, a synonym map, word/category
//! co-occurrence counts and per-category example frequencies. It is a plain
//! value. Scoring borrows it immutably, learning borrows it mutably, and
//! [`store::KnowledgeStore`] loads and saves it.
//!
//! Synonyms, co-occurrences and frequencies only ever grow. Weight profiles
//! are replaced wholesale by each learning pass.

pub mod store;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::lexicon::{Lexicon, WeightProfile};

/// word → synonym candidates.
pub type SynonymMap = BTreeMap<String, BTreeSet<String>>;

/// word → category → count.
pub type CooccurrenceMap = BTreeMap<String, BTreeMap<String, u64>>;

/// Mutable learned state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    #[serde(default)]
    weights: BTreeMap<String, WeightProfile>,
    #[serde(default)]
    synonyms: SynonymMap,
    #[serde(default)]
    cooccurrences: CooccurrenceMap,
    #[serde(default)]
    frequencies: BTreeMap<String, u64>,
}

/// Size summary of a knowledge base.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeStats {
    pub learned_profiles: usize,
    pub synonym_words: usize,
    pub synonym_links: usize,
    pub cooccurrence_words: usize,
    pub cooccurrence_total: u64,
    pub recorded_examples: u64,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a knowledge base from its persisted parts.
    pub fn from_parts(
        weights: BTreeMap<String, WeightProfile>,
        synonyms: SynonymMap,
        cooccurrences: CooccurrenceMap,
        frequencies: BTreeMap<String, u64>,
    ) -> Self {
        Self {
            weights,
            synonyms,
            cooccurrences,
            frequencies,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
            && self.synonyms.is_empty()
            && self.cooccurrences.is_empty()
            && self.frequencies.is_empty()
    }

    // Weights

    pub fn learned_weights(&self) -> &BTreeMap<String, WeightProfile> {
        &self.weights
    }

    pub fn learned_profile(&self, category: &str) -> Option<WeightProfile> {
        self.weights.get(category).copied()
    }

    /// The learned profile of `category`, else its lexicon default, else the
    /// generic `0.4 / 0.4 / 0.2` profile.
    pub fn active_weights(&self, lexicon: &Lexicon, category: &str) -> WeightProfile {
        self.learned_profile(category)
            .or_else(|| lexicon.default_weights(category))
            .unwrap_or_default()
    }

    /// Replace the whole learned weight table.
    pub fn replace_weights(&mut self, weights: BTreeMap<String, WeightProfile>) {
        self.weights = weights;
    }

    // Synonyms

    pub fn synonyms(&self) -> &SynonymMap {
        &self.synonyms
    }

    /// Synonyms recorded for `word`.
    pub fn synonyms_of(&self, word: &str) -> impl Iterator<Item = &str> {
        self.synonyms
            .get(word)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Record `synonym` as a synonym of `word`. Returns whether it was new.
    pub fn add_synonym(&mut self, word: &str, synonym: &str) -> bool {
        self.synonyms
            .entry(word.to_string())
            .or_default()
            .insert(synonym.to_string())
    }

    // Co-occurrences

    pub fn cooccurrences(&self) -> &CooccurrenceMap {
        &self.cooccurrences
    }

    /// How often `word` has been seen in comments labeled `category`.
    pub fn cooccurrence(&self, word: &str, category: &str) -> u64 {
        self.cooccurrences
            .get(word)
            .and_then(|counts| counts.get(category))
            .copied()
            .unwrap_or(0)
    }

    pub fn add_cooccurrence(&mut self, word: &str, category: &str, count: u64) {
        *self
            .cooccurrences
            .entry(word.to_string())
            .or_default()
            .entry(category.to_string())
            .or_insert(0) += count;
    }

    // Frequencies

    pub fn frequencies(&self) -> &BTreeMap<String, u64> {
        &self.frequencies
    }

    pub fn record_examples(&mut self, category: &str, count: u64) {
        *self.frequencies.entry(category.to_string()).or_insert(0) += count;
    }

    /// Share of recorded examples labeled `category`, in percent (0–100).
    ///
    /// `None` when no example of the category has been recorded.
    pub fn frequency_weight(&self, category: &str) -> Option<f64> {
        let count = *self.frequencies.get(category)?;
        let total: u64 = self.frequencies.values().sum();
        if count == 0 || total == 0 {
            return None;
        }
        Some(count as f64 / total as f64 * 100.0)
    }

    pub fn stats(&self) -> KnowledgeStats {
        KnowledgeStats {
            learned_profiles: self.weights.len(),
            synonym_words: self.synonyms.len(),
            synonym_links: self.synonyms.values().map(BTreeSet::len).sum(),
            cooccurrence_words: self.cooccurrences.len(),
            cooccurrence_total: self
                .cooccurrences
                .values()
                .flat_map(|counts| counts.values())
                .sum(),
            recorded_examples: self.frequencies.values().sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_weights_fallback() {
        let lexicon = Lexicon::builtin().unwrap();
        let mut knowledge = KnowledgeBase::new();

        assert_eq!(
            knowledge.active_weights(&lexicon, "Precios"),
            WeightProfile::new(0.6, 0.3, 0.1)
        );
        assert_eq!(
            knowledge.active_weights(&lexicon, "Desconocida"),
            WeightProfile::default()
        );

        let mut learned = BTreeMap::new();
        learned.insert("Precios".to_string(), WeightProfile::new(0.2, 0.5, 0.3));
        knowledge.replace_weights(learned);
        assert_eq!(
            knowledge.active_weights(&lexicon, "Precios"),
            WeightProfile::new(0.2, 0.5, 0.3)
        );
    }

    #[test]
    fn test_synonyms_grow() {
        let mut knowledge = KnowledgeBase::new();
        assert!(knowledge.add_synonym("maleta", "valija"));
        assert!(!knowledge.add_synonym("maleta", "valija"));
        assert!(knowledge.add_synonym("maleta", "equipaje"));
        let synonyms: Vec<&str> = knowledge.synonyms_of("maleta").collect();
        assert_eq!(synonyms, vec!["equipaje", "valija"]);
        assert_eq!(knowledge.synonyms_of("nada").count(), 0);
    }

    #[test]
    fn test_cooccurrence_counts() {
        let mut knowledge = KnowledgeBase::new();
        knowledge.add_cooccurrence("maleta", "Equipaje", 2);
        knowledge.add_cooccurrence("maleta", "Equipaje", 1);
        knowledge.add_cooccurrence("maleta", "Precios", 1);
        assert_eq!(knowledge.cooccurrence("maleta", "Equipaje"), 3);
        assert_eq!(knowledge.cooccurrence("maleta", "Seats"), 0);
        assert_eq!(knowledge.cooccurrence("asiento", "Seats"), 0);
    }

    #[test]
    fn test_frequency_weight() {
        let mut knowledge = KnowledgeBase::new();
        assert_eq!(knowledge.frequency_weight("Equipaje"), None);

        knowledge.record_examples("Equipaje", 3);
        knowledge.record_examples("Website", 1);
        assert_eq!(knowledge.frequency_weight("Equipaje"), Some(75.0));
        assert_eq!(knowledge.frequency_weight("Website"), Some(25.0));
        assert_eq!(knowledge.frequency_weight("Seats"), None);
    }

    #[test]
    fn test_stats() {
        let mut knowledge = KnowledgeBase::new();
        assert!(knowledge.is_empty());
        knowledge.add_synonym("maleta", "valija");
        knowledge.add_synonym("valija", "maleta");
        knowledge.add_cooccurrence("maleta", "Equipaje", 4);
        knowledge.record_examples("Equipaje", 2);

        let stats = knowledge.stats();
        assert_eq!(stats.synonym_words, 2);
        assert_eq!(stats.synonym_links, 2);
        assert_eq!(stats.cooccurrence_words, 1);
        assert_eq!(stats.cooccurrence_total, 4);
        assert_eq!(stats.recorded_examples, 2);
        assert_eq!(stats.learned_profiles, 0);
    }
}
