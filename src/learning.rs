//! Learning from labeled comments.
//!
//! A learning pass enriches the knowledge base in four steps, always in this
//! order:
//!
//! 1. every pair of distinct words longer than three characters that share
//!    a comment become mutual synonyms;
//! 2. every non-stop-word token longer than three characters is counted
//!    against the comment's category;
//! 3. every labeled comment counts towards its category's frequency;
//! 4. per category, the mean normalized keyword, context and type scores of
//!    its comments become the new weight profile.
//!
//! Step 4 scores comments with the knowledge produced by steps 1–3, and its
//! result replaces the whole learned weight table. Synonyms, co-occurrences
//! and frequencies are merged into what was already known.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::{WhitespaceTokenizer, normalize_opt};
use crate::classification::Comment;
use crate::error::Result;
use crate::knowledge::KnowledgeBase;
use crate::knowledge::store::KnowledgeStore;
use crate::lexicon::{Lexicon, WeightProfile};
use crate::scoring::ScoringEngine;

/// Words of this length or shorter are ignored by synonym and
/// co-occurrence learning.
pub const MIN_LEARNED_WORD_LEN: usize = 3;

/// What a learning pass did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningReport {
    pub learned_at: DateTime<Utc>,
    pub rows_total: usize,
    pub rows_used: usize,
    /// Rows without a category or labeled with the sentinel.
    pub rows_unlabeled: usize,
    /// Rows labeled with a category the lexicon does not know.
    pub rows_unknown_category: usize,
    pub new_synonym_links: usize,
    pub cooccurrence_increments: u64,
    /// The learned weight table that replaced the previous one.
    pub weights: BTreeMap<String, WeightProfile>,
}

impl fmt::Display for LearningReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Learning pass at {}", self.learned_at.to_rfc3339())?;
        writeln!(
            f,
            "Rows: {} total, {} used, {} unlabeled, {} unknown category",
            self.rows_total, self.rows_used, self.rows_unlabeled, self.rows_unknown_category
        )?;
        writeln!(f, "New synonym links: {}", self.new_synonym_links)?;
        writeln!(f, "Co-occurrence increments: {}", self.cooccurrence_increments)?;
        writeln!(f, "Learned weights:")?;
        if self.weights.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for (category, profile) in &self.weights {
            writeln!(
                f,
                "  {:<24} keyword {:.2}  context {:.2}  type {:.2}",
                category, profile.keyword, profile.context, profile.type_
            )?;
        }
        Ok(())
    }
}

/// A labeled comment that takes part in learning.
struct TrainingRow<'c> {
    text: String,
    category: &'c str,
    type_id: Option<&'c str>,
}

/// Running sums of normalized scores for one category.
#[derive(Default)]
struct ScoreMeans {
    keyword: f64,
    context: f64,
    type_: f64,
    rows: usize,
}

/// Learns weights, synonyms and co-occurrences from labeled comments.
#[derive(Debug, Clone, Copy)]
pub struct WeightLearner<'a> {
    lexicon: &'a Lexicon,
    tokenizer: WhitespaceTokenizer,
}

impl<'a> WeightLearner<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            tokenizer: WhitespaceTokenizer,
        }
    }

    /// Run one learning pass over `comments`, updating `knowledge` in place.
    pub fn learn(&self, knowledge: &mut KnowledgeBase, comments: &[Comment]) -> LearningReport {
        let mut report = LearningReport {
            learned_at: Utc::now(),
            rows_total: comments.len(),
            rows_used: 0,
            rows_unlabeled: 0,
            rows_unknown_category: 0,
            new_synonym_links: 0,
            cooccurrence_increments: 0,
            weights: BTreeMap::new(),
        };

        let rows = self.training_rows(comments, &mut report);
        report.rows_used = rows.len();

        report.new_synonym_links = self.learn_synonyms(knowledge, &rows);
        report.cooccurrence_increments = self.learn_cooccurrences(knowledge, &rows);
        for row in &rows {
            knowledge.record_examples(row.category, 1);
        }

        let weights = self.learn_weights(knowledge, &rows);
        knowledge.replace_weights(weights.clone());
        report.weights = weights;

        info!(
            "Learned from {} of {} rows: {} weight profiles, {} new synonym links",
            report.rows_used,
            report.rows_total,
            report.weights.len(),
            report.new_synonym_links
        );

        report
    }

    /// Run a learning pass and write every knowledge artifact to `store`.
    pub fn learn_and_persist(
        &self,
        store: &KnowledgeStore,
        knowledge: &mut KnowledgeBase,
        comments: &[Comment],
    ) -> Result<LearningReport> {
        let report = self.learn(knowledge, comments);
        store.save(knowledge)?;
        Ok(report)
    }

    fn training_rows<'c>(
        &self,
        comments: &'c [Comment],
        report: &mut LearningReport,
    ) -> Vec<TrainingRow<'c>> {
        let mut rows = Vec::with_capacity(comments.len());
        for comment in comments {
            let Some(category) = comment.category.as_deref() else {
                report.rows_unlabeled += 1;
                continue;
            };
            if self.lexicon.is_sentinel(category) {
                report.rows_unlabeled += 1;
                continue;
            }
            if self.lexicon.category(category).is_none() {
                warn!("Skipping row labeled with unknown category '{}'", category);
                report.rows_unknown_category += 1;
                continue;
            }
            rows.push(TrainingRow {
                text: normalize_opt(comment.text()),
                category,
                type_id: comment.type_.as_deref(),
            });
        }
        rows
    }

    fn learn_synonyms(&self, knowledge: &mut KnowledgeBase, rows: &[TrainingRow<'_>]) -> usize {
        let mut added = 0;
        for row in rows {
            let words: BTreeSet<&str> = self
                .tokenizer
                .tokenize(&row.text)
                .into_iter()
                .filter(|word| word.len() > MIN_LEARNED_WORD_LEN)
                .collect();

            for &word in &words {
                for &other in &words {
                    if word != other && knowledge.add_synonym(word, other) {
                        added += 1;
                    }
                }
            }
        }
        debug!("{} new synonym links", added);
        added
    }

    fn learn_cooccurrences(&self, knowledge: &mut KnowledgeBase, rows: &[TrainingRow<'_>]) -> u64 {
        let stop_words = self.lexicon.stop_words();
        let mut increments = 0;
        for row in rows {
            for word in self.tokenizer.tokenize(&row.text) {
                if word.len() > MIN_LEARNED_WORD_LEN && !stop_words.contains(word) {
                    knowledge.add_cooccurrence(word, row.category, 1);
                    increments += 1;
                }
            }
        }
        increments
    }

    fn learn_weights(
        &self,
        knowledge: &KnowledgeBase,
        rows: &[TrainingRow<'_>],
    ) -> BTreeMap<String, WeightProfile> {
        let engine = ScoringEngine::new(self.lexicon, knowledge);

        let mut sums: BTreeMap<&str, ScoreMeans> = BTreeMap::new();
        for row in rows {
            // A missing type has neither context pattern nor type keywords.
            let type_id = row.type_id.unwrap_or_default();
            let scores = engine.breakdown(&row.text, row.category, type_id);
            let entry = sums.entry(row.category).or_default();
            entry.keyword += scores.keyword;
            entry.context += scores.context;
            entry.type_ += scores.type_;
            entry.rows += 1;
        }

        let mut weights = BTreeMap::new();
        for (category, sum) in sums {
            let count = sum.rows as f64;
            // Negated keywords can pull the keyword mean below zero.
            let keyword = sum.keyword / count;
            let context = sum.context / count;
            let type_ = sum.type_ / count;

            match WeightProfile::normalized(keyword, context, type_) {
                Some(profile) => {
                    debug!(
                        "{}: keyword {:.2} context {:.2} type {:.2}",
                        category, profile.keyword, profile.context, profile.type_
                    );
                    weights.insert(category.to_string(), profile);
                }
                None => debug!("{}: means sum to zero or less, no learned profile", category),
            }
        }
        weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Vec<Comment> {
        vec![
            Comment::labeled("Mi maleta llegó rota", "Equipaje", "Daño"),
            Comment::labeled("La página está muy lenta", "Website", "Lentitud"),
            Comment::labeled("hola", "Otros", "General"),
            Comment::labeled("algo raro", "Inventada", "Error"),
            Comment::new("sin etiqueta"),
        ]
    }

    #[test]
    fn test_row_filtering() {
        let lexicon = Lexicon::builtin().unwrap();
        let mut knowledge = KnowledgeBase::new();
        let report = WeightLearner::new(&lexicon).learn(&mut knowledge, &dataset());

        assert_eq!(report.rows_total, 5);
        assert_eq!(report.rows_used, 2);
        assert_eq!(report.rows_unlabeled, 2);
        assert_eq!(report.rows_unknown_category, 1);
        assert_eq!(knowledge.frequencies().len(), 2);
        assert!(knowledge.learned_profile("Otros").is_none());
    }

    #[test]
    fn test_synonyms_are_mutual() {
        let lexicon = Lexicon::builtin().unwrap();
        let mut knowledge = KnowledgeBase::new();
        WeightLearner::new(&lexicon).learn(&mut knowledge, &dataset());

        // "mi" is too short; "llego", "maleta" and "rota" are kept.
        let maleta: Vec<&str> = knowledge.synonyms_of("maleta").collect();
        assert_eq!(maleta, vec!["llego", "rota"]);
        assert!(knowledge.synonyms_of("rota").any(|w| w == "maleta"));
        assert_eq!(knowledge.synonyms_of("mi").count(), 0);
    }

    #[test]
    fn test_cooccurrences_skip_stop_words() {
        let lexicon = Lexicon::builtin().unwrap();
        let mut knowledge = KnowledgeBase::new();
        let comments = vec![Comment::labeled(
            "esta maleta esta rota maleta",
            "Equipaje",
            "Daño",
        )];
        WeightLearner::new(&lexicon).learn(&mut knowledge, &comments);

        assert_eq!(knowledge.cooccurrence("maleta", "Equipaje"), 2);
        assert_eq!(knowledge.cooccurrence("rota", "Equipaje"), 1);
        assert_eq!(knowledge.cooccurrence("esta", "Equipaje"), 0);
    }

    #[test]
    fn test_learned_weights_are_valid() {
        let lexicon = Lexicon::builtin().unwrap();
        let mut knowledge = KnowledgeBase::new();
        let report = WeightLearner::new(&lexicon).learn(&mut knowledge, &dataset());

        assert!(report.weights.contains_key("Equipaje"));
        assert!(report.weights.contains_key("Website"));
        for profile in report.weights.values() {
            assert!(profile.is_valid(), "{profile:?}");
        }
        assert_eq!(knowledge.learned_weights(), &report.weights);
    }

    #[test]
    fn test_weights_are_replaced() {
        let lexicon = Lexicon::builtin().unwrap();
        let learner = WeightLearner::new(&lexicon);
        let mut knowledge = KnowledgeBase::new();
        learner.learn(&mut knowledge, &dataset());
        assert!(knowledge.learned_profile("Website").is_some());

        let only_luggage = vec![Comment::labeled("mi maleta llego rota", "Equipaje", "Daño")];
        learner.learn(&mut knowledge, &only_luggage);
        assert!(knowledge.learned_profile("Website").is_none());
        assert!(knowledge.learned_profile("Equipaje").is_some());
    }

    #[test]
    fn test_zero_evidence_gets_no_profile() {
        let lexicon = Lexicon::builtin().unwrap();
        let mut knowledge = KnowledgeBase::new();
        let comments = vec![Comment::labeled("hola", "Seats", "Tipo")];
        let report = WeightLearner::new(&lexicon).learn(&mut knowledge, &comments);
        assert!(report.weights.is_empty());
        assert_eq!(knowledge.frequencies()["Seats"], 1);
    }

    #[test]
    fn test_negated_keyword_learns_negative_weight() {
        let lexicon = Lexicon::builtin().unwrap();
        let mut knowledge = KnowledgeBase::new();
        let comments = vec![Comment::labeled(
            "no encuentro la maleta rota",
            "Equipaje",
            "Daño",
        )];
        let report = WeightLearner::new(&lexicon).learn(&mut knowledge, &comments);

        let profile = report.weights["Equipaje"];
        assert!(profile.keyword < 0.0, "{profile:?}");
        assert!(profile.context > 0.0);
        assert!(profile.type_ > 0.0);
        assert!(profile.is_valid());
        assert_eq!(knowledge.learned_profile("Equipaje"), Some(profile));
    }

    #[test]
    fn test_report_display() {
        let lexicon = Lexicon::builtin().unwrap();
        let mut knowledge = KnowledgeBase::new();
        let report = WeightLearner::new(&lexicon).learn(&mut knowledge, &dataset());
        let text = report.to_string();
        assert!(text.contains("2 used"));
        assert!(text.contains("Equipaje"));
    }
}
