//! Type keyword evidence.

use crate::analysis::TokenSet;
use crate::knowledge::KnowledgeBase;
use crate::lexicon::TypeDef;

/// Score per type keyword found as a token.
pub const TOKEN_HIT: f64 = 1.0;
/// Bonus per token hit beyond the first.
pub const MULTI_HIT_BONUS: f64 = 0.5;
/// Bonus per learned synonym found as a token.
pub const SYNONYM_BONUS: f64 = 0.3;
/// Per-keyword ceiling used for normalization.
pub const TYPE_CEILING: f64 = 1.5;

/// Raw type score. Only whole tokens count, so multi-word type keywords
/// never contribute.
pub fn raw_score(tokens: &TokenSet<'_>, type_def: &TypeDef, knowledge: &KnowledgeBase) -> f64 {
    let hits = type_def
        .keywords
        .iter()
        .filter(|keyword| tokens.contains(keyword))
        .count();

    let mut score = TOKEN_HIT * hits as f64;
    if hits > 1 {
        score += MULTI_HIT_BONUS * (hits - 1) as f64;
    }

    for keyword in &type_def.keywords {
        let synonym_hits = knowledge
            .synonyms_of(keyword)
            .filter(|synonym| tokens.contains(synonym))
            .count();
        score += SYNONYM_BONUS * synonym_hits as f64;
    }

    score
}

pub fn normalize(raw: f64, keyword_count: usize) -> f64 {
    if keyword_count == 0 {
        return 0.0;
    }
    raw / (keyword_count as f64 * TYPE_CEILING)
}
