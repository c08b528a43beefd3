//! Keyword evidence for a category.

use log::trace;

use crate::analysis::{MarkerDetector, TokenSet};
use crate::knowledge::KnowledgeBase;
use crate::lexicon::Category;

/// Base score of a keyword found as a substring.
pub const SUBSTRING_HIT: f64 = 1.5;
/// Bonus when the keyword is also a whole token.
pub const EXACT_TOKEN_BONUS: f64 = 1.0;
/// Bonus when an intensity marker precedes the keyword.
pub const INTENSITY_BONUS: f64 = 0.5;
/// Bonus per learned synonym of the keyword found in the text.
pub const SYNONYM_BONUS: f64 = 0.3;
/// Penalty for a negated keyword.
pub const NEGATION_PENALTY: f64 = -1.0;
/// Ceiling on the co-occurrence bonus.
pub const MAX_COOCCURRENCE_BONUS: f64 = 0.5;
/// Per-keyword ceiling used for normalization.
pub const KEYWORD_CEILING: f64 = 2.5;

/// Sum the evidence of every keyword of `category` found in `text`.
pub fn raw_score(
    text: &str,
    tokens: &TokenSet<'_>,
    category: &Category,
    markers: &MarkerDetector,
    knowledge: &KnowledgeBase,
) -> f64 {
    let mut score = 0.0;

    for keyword in &category.keywords {
        if !text.contains(keyword.as_str()) {
            continue;
        }

        if markers.has_negation(text, keyword) {
            trace!("'{}' negated for {}", keyword, category.id);
            score += NEGATION_PENALTY;
            continue;
        }

        score += SUBSTRING_HIT;
        if tokens.contains(keyword) {
            score += EXACT_TOKEN_BONUS;
        }
        if markers.has_intensity(text, keyword) {
            score += INTENSITY_BONUS;
        }

        let synonym_hits = knowledge
            .synonyms_of(keyword)
            .filter(|synonym| text.contains(synonym))
            .count();
        score += SYNONYM_BONUS * synonym_hits as f64;

        let count = knowledge.cooccurrence(keyword, &category.id);
        if count > 0 {
            score += (0.1 * count as f64).min(MAX_COOCCURRENCE_BONUS);
        }
    }

    score
}

/// Divide a raw score by the best a keyword list of `keyword_count` entries
/// can reach without learned bonuses.
pub fn normalize(raw: f64, keyword_count: usize) -> f64 {
    if keyword_count == 0 {
        return 0.0;
    }
    raw / (keyword_count as f64 * KEYWORD_CEILING)
}
