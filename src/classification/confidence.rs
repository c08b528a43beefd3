//! Confidence of an existing (category, type) label.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::normalize_opt;
use crate::classification::Comment;
use crate::knowledge::KnowledgeBase;
use crate::lexicon::{Lexicon, WeightProfile};
use crate::scoring::{ScoreBreakdown, ScoringEngine};

/// Factor applied to the weighted score before clamping.
pub const AMPLIFICATION: f64 = 2.0;

/// How a confidence value was computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceDetail {
    pub scores: ScoreBreakdown,
    pub weights: WeightProfile,
    pub confidence: f64,
}

/// Rates labeled comments.
#[derive(Debug, Clone, Copy)]
pub struct ConfidenceCalculator<'a> {
    engine: ScoringEngine<'a>,
}

impl<'a> ConfidenceCalculator<'a> {
    pub fn new(lexicon: &'a Lexicon, knowledge: &'a KnowledgeBase) -> Self {
        Self {
            engine: ScoringEngine::new(lexicon, knowledge),
        }
    }

    /// Confidence in `[0, 1]` that the comment's label is right.
    ///
    /// 0.0 when the category or type is missing or the category is unknown.
    /// An unknown type scores no context or type evidence.
    pub fn confidence(&self, comment: &Comment) -> f64 {
        self.detail(comment).map_or(0.0, |detail| detail.confidence)
    }

    /// Scores, weights and confidence of a labeled comment, or `None` when
    /// the label is missing or names an unknown category.
    pub fn detail(&self, comment: &Comment) -> Option<ConfidenceDetail> {
        let (Some(category), Some(type_id)) =
            (comment.category.as_deref(), comment.type_.as_deref())
        else {
            return None;
        };

        let lexicon = self.engine.lexicon();
        if lexicon.category(category).is_none() {
            warn!("Unknown category '{}', confidence is 0", category);
            return None;
        }
        if lexicon.type_def(type_id).is_none() {
            debug!("Unknown type '{}', only keyword evidence counts", type_id);
        }

        let text = normalize_opt(comment.text());
        let scores = self.engine.breakdown(&text, category, type_id);
        let weights = self.engine.knowledge().active_weights(lexicon, category);

        let weighted = weights.blend(scores.keyword, scores.context, scores.type_);
        let confidence = (weighted * AMPLIFICATION).clamp(0.0, 1.0);

        debug!(
            "{}/{} scores {:.3}/{:.3}/{:.3} -> {:.3}",
            category, type_id, scores.keyword, scores.context, scores.type_, confidence
        );

        Some(ConfidenceDetail {
            scores,
            weights,
            confidence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confidence(comment: &Comment) -> f64 {
        let lexicon = Lexicon::builtin().unwrap();
        let knowledge = KnowledgeBase::new();
        ConfidenceCalculator::new(&lexicon, &knowledge).confidence(comment)
    }

    #[test]
    fn test_labeled_comment() {
        let value = confidence(&Comment::labeled(
            "la pagina esta muy lenta y se pega todo el tiempo",
            "Website",
            "Lentitud",
        ));
        assert!(value > 0.0);
        assert!(value <= 1.0);
    }

    #[test]
    fn test_missing_labels() {
        assert_eq!(confidence(&Comment::new("mi maleta llego rota")), 0.0);
        assert_eq!(
            confidence(&Comment::new("mi maleta llego rota").with_category("Equipaje")),
            0.0
        );
    }

    #[test]
    fn test_unknown_category() {
        assert_eq!(
            confidence(&Comment::labeled("mi maleta", "Maletas", "Daño")),
            0.0
        );
    }

    #[test]
    fn test_unknown_type_keeps_keyword_evidence() {
        let lexicon = Lexicon::builtin().unwrap();
        let knowledge = KnowledgeBase::new();
        let calculator = ConfidenceCalculator::new(&lexicon, &knowledge);
        let detail = calculator
            .detail(&Comment::labeled(
                "mi maleta equipaje llego tarde",
                "Equipaje",
                "Retraso",
            ))
            .unwrap();

        // Two of seven keywords hit as whole tokens: 5.0 / 17.5.
        assert!((detail.scores.keyword - 5.0 / 17.5).abs() < 1e-9);
        assert_eq!(detail.scores.context, 0.0);
        assert_eq!(detail.scores.type_, 0.0);
        assert!((detail.confidence - 0.4 * (5.0 / 17.5) * 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_scores_clamp_to_zero() {
        // Every keyword hit is negated and nothing else matches.
        let value = confidence(&Comment::labeled("no hay maleta", "Equipaje", "Permitido"));
        assert_eq!(value, 0.0);
    }

    #[test]
    fn test_missing_text() {
        let comment = Comment {
            text: None,
            category: Some("Equipaje".to_string()),
            type_: Some("Daño".to_string()),
        };
        assert_eq!(confidence(&comment), 0.0);
    }

    #[test]
    fn test_detail_uses_default_weights() {
        let lexicon = Lexicon::builtin().unwrap();
        let knowledge = KnowledgeBase::new();
        let calculator = ConfidenceCalculator::new(&lexicon, &knowledge);
        let detail = calculator
            .detail(&Comment::labeled("mi maleta llego rota", "Equipaje", "Daño"))
            .unwrap();
        assert_eq!(detail.weights, WeightProfile::new(0.4, 0.4, 0.2));
        assert_eq!(detail.scores.context, 3.5 / 4.0);
        assert!(detail.confidence > 0.5);
    }
}
