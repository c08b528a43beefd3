//! Keyword, context and type scorers.
//!
//! All scorers work on normalized text. Each one produces an unbounded raw
//! value and a normalized value; the normalized values feed the confidence
//! calculation and the weight learner, the raw keyword value feeds the
//! classifier.

pub mod context;
pub mod keyword;
pub mod type_score;

use serde::{Deserialize, Serialize};

use crate::analysis::WhitespaceTokenizer;
use crate::knowledge::KnowledgeBase;
use crate::lexicon::Lexicon;

pub use context::CONTEXT_CEILING;

/// The three normalized scores of one (text, category, type) triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub keyword: f64,
    pub context: f64,
    #[serde(rename = "type")]
    pub type_: f64,
}

/// Scores text against a lexicon, enriched by learned knowledge.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine<'a> {
    lexicon: &'a Lexicon,
    knowledge: &'a KnowledgeBase,
    tokenizer: WhitespaceTokenizer,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(lexicon: &'a Lexicon, knowledge: &'a KnowledgeBase) -> Self {
        Self {
            lexicon,
            knowledge,
            tokenizer: WhitespaceTokenizer,
        }
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    pub fn knowledge(&self) -> &'a KnowledgeBase {
        self.knowledge
    }

    /// Raw keyword score. 0 for an unknown category.
    pub fn keyword_raw(&self, text: &str, category: &str) -> f64 {
        let Some(category) = self.lexicon.category(category) else {
            return 0.0;
        };
        let tokens = self.tokenizer.token_set(text);
        keyword::raw_score(
            text,
            &tokens,
            category,
            self.lexicon.markers(),
            self.knowledge,
        )
    }

    /// Keyword score normalized by `keywords × 2.5`.
    pub fn keyword_score(&self, text: &str, category: &str) -> f64 {
        let Some(keyword_count) = self.lexicon.category(category).map(|c| c.keywords.len())
        else {
            return 0.0;
        };
        keyword::normalize(self.keyword_raw(text, category), keyword_count)
    }

    /// Raw context score for a (category, type) pair.
    pub fn context_raw(&self, text: &str, category: &str, type_id: &str) -> f64 {
        match self.lexicon.category(category) {
            Some(category) => context::raw_score(text, category, type_id, self.lexicon.markers()),
            None => 0.0,
        }
    }

    /// Context score divided by [`CONTEXT_CEILING`].
    pub fn context_score(&self, text: &str, category: &str, type_id: &str) -> f64 {
        self.context_raw(text, category, type_id) / CONTEXT_CEILING
    }

    /// Raw type score.
    pub fn type_raw(&self, text: &str, type_id: &str) -> f64 {
        let Some(type_def) = self.lexicon.type_def(type_id) else {
            return 0.0;
        };
        let tokens = self.tokenizer.token_set(text);
        type_score::raw_score(&tokens, type_def, self.knowledge)
    }

    /// Type score normalized by `keywords × 1.5`.
    pub fn type_score(&self, text: &str, type_id: &str) -> f64 {
        let Some(type_def) = self.lexicon.type_def(type_id) else {
            return 0.0;
        };
        type_score::normalize(self.type_raw(text, type_id), type_def.keywords.len())
    }

    /// All three normalized scores for a labeled pair.
    pub fn breakdown(&self, text: &str, category: &str, type_id: &str) -> ScoreBreakdown {
        ScoreBreakdown {
            keyword: self.keyword_score(text, category),
            context: self.context_score(text, category, type_id),
            type_: self.type_score(text, type_id),
        }
    }
}
