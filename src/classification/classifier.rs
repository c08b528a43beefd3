//! Category, subcategory and type assignment.

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::{TokenSet, normalize, normalize_opt};
use crate::classification::Classification;
use crate::knowledge::KnowledgeBase;
use crate::lexicon::{Category, Lexicon};
use crate::scoring::ScoringEngine;

/// Flat bonus when any context pattern of a category matches.
pub const CONTEXT_MATCH_BONUS: f64 = 2.0;

/// Evidence gathered for one category while classifying a comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAggregate {
    pub category: String,
    /// Raw keyword score.
    pub keyword: f64,
    /// Whether any context pattern of the category matched.
    pub context_match: bool,
    /// Learned frequency weight in percent, when the category has one.
    pub frequency_weight: Option<f64>,
    pub total: f64,
}

/// A classification together with the evidence that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub normalized: String,
    pub classification: Classification,
    /// Aggregates of every scored category, in declaration order.
    pub aggregates: Vec<CategoryAggregate>,
}

/// Assigns a category, subcategory and type to comments.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    engine: ScoringEngine<'a>,
}

impl<'a> Classifier<'a> {
    pub fn new(lexicon: &'a Lexicon, knowledge: &'a KnowledgeBase) -> Self {
        Self {
            engine: ScoringEngine::new(lexicon, knowledge),
        }
    }

    /// Classify a raw comment.
    pub fn classify(&self, text: &str) -> Classification {
        self.classify_normalized(&normalize(text))
    }

    /// Classify a possibly missing comment. A missing comment gets the
    /// sentinel category.
    pub fn classify_opt(&self, text: Option<&str>) -> Classification {
        self.classify_normalized(&normalize_opt(text))
    }

    /// Classify many comments in parallel, keeping input order.
    pub fn classify_batch<S>(&self, texts: &[Option<S>]) -> Vec<Classification>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| {
                let text: Option<&str> = text.as_ref().map(|s| s.as_ref());
                self.classify_opt(text)
            })
            .collect()
    }

    /// Classify a comment and keep the per-category evidence.
    pub fn explain(&self, text: &str) -> Explanation {
        let normalized = normalize(text);
        let aggregates = self.aggregates(&normalized);
        let classification = self.decide(&normalized, &aggregates);
        Explanation {
            normalized,
            classification,
            aggregates,
        }
    }

    /// Aggregate scores of every non-sentinel category for normalized text.
    pub fn aggregates(&self, normalized: &str) -> Vec<CategoryAggregate> {
        let lexicon = self.engine.lexicon();
        let knowledge = self.engine.knowledge();

        lexicon
            .scored_categories()
            .map(|category| {
                let keyword = self.engine.keyword_raw(normalized, &category.id);
                let context_match = category.any_context_match(normalized);
                let frequency_weight = knowledge.frequency_weight(&category.id);

                let mut total = keyword;
                if context_match {
                    total += CONTEXT_MATCH_BONUS;
                }
                if let Some(weight) = frequency_weight {
                    total *= 1.0 + weight / 100.0;
                }

                CategoryAggregate {
                    category: category.id.clone(),
                    keyword,
                    context_match,
                    frequency_weight,
                    total,
                }
            })
            .collect()
    }

    fn classify_normalized(&self, normalized: &str) -> Classification {
        let aggregates = self.aggregates(normalized);
        self.decide(normalized, &aggregates)
    }

    fn decide(&self, normalized: &str, aggregates: &[CategoryAggregate]) -> Classification {
        let lexicon = self.engine.lexicon();

        let Some(winner) = best_positive(aggregates, None) else {
            debug!("No category evidence for '{}'", normalized);
            return Classification::sentinel(lexicon.sentinel());
        };
        let subcategory =
            best_positive(aggregates, Some(winner)).map(|i| aggregates[i].category.clone());

        let category = &aggregates[winner].category;
        let type_ = lexicon
            .category(category)
            .and_then(|category| resolve_type(lexicon, category, normalized));

        debug!(
            "'{}' -> {} ({:.2}), subcategory {:?}, type {:?}",
            normalized, category, aggregates[winner].total, subcategory, type_
        );

        Classification {
            category: category.clone(),
            subcategory,
            type_,
        }
    }
}

/// Index of the strictly highest positive total, skipping `exclude`. Earlier
/// entries win ties.
fn best_positive(aggregates: &[CategoryAggregate], exclude: Option<usize>) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, aggregate) in aggregates.iter().enumerate() {
        if Some(i) == exclude || aggregate.total <= 0.0 {
            continue;
        }
        match best {
            Some(b) if aggregates[b].total >= aggregate.total => {}
            _ => best = Some(i),
        }
    }
    best
}

/// First matching context pattern, else first valid type with a keyword
/// present as a token.
fn resolve_type(lexicon: &Lexicon, category: &Category, normalized: &str) -> Option<String> {
    if let Some(pattern) = category
        .context_patterns
        .iter()
        .find(|pattern| pattern.regex.is_match(normalized))
    {
        return Some(pattern.type_id.clone());
    }

    let tokens = TokenSet::new(normalized);
    category
        .types
        .iter()
        .find(|type_id| {
            lexicon.type_def(type_id).is_some_and(|type_def| {
                type_def.keywords.iter().any(|keyword| tokens.contains(keyword))
            })
        })
        .cloned()
}
