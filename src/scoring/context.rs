//! Context-pattern evidence for a (category, type) pair.

use crate::analysis::MarkerDetector;
use crate::lexicon::Category;

/// Score of the first context pattern match.
pub const PATTERN_HIT: f64 = 3.0;
/// Bonus per additional pattern match.
pub const EXTRA_MATCH_BONUS: f64 = 0.5;
/// Bonus per domain pattern match.
pub const DOMAIN_MATCH_BONUS: f64 = 0.5;
/// Flat bonus when any emotion term is present.
pub const EMOTION_BONUS: f64 = 0.5;
/// Fixed divisor applied to raw context scores.
pub const CONTEXT_CEILING: f64 = 4.0;

/// Raw context score. 0 when the category has no pattern for `type_id`.
pub fn raw_score(text: &str, category: &Category, type_id: &str, markers: &MarkerDetector) -> f64 {
    let Some(pattern) = category.context_pattern(type_id) else {
        return 0.0;
    };

    let mut score = 0.0;

    let matches = pattern.find_iter(text).count();
    if matches > 0 {
        score += PATTERN_HIT + EXTRA_MATCH_BONUS * (matches - 1) as f64;
    }

    if let Some(domain) = &category.domain {
        score += DOMAIN_MATCH_BONUS * domain.find_iter(text).count() as f64;
    }

    if markers.has_emotion(text) {
        score += EMOTION_BONUS;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;

    fn score(text: &str, category: &str, type_id: &str) -> f64 {
        let lexicon = Lexicon::builtin().unwrap();
        raw_score(
            text,
            lexicon.category(category).unwrap(),
            type_id,
            lexicon.markers(),
        )
    }

    #[test]
    fn test_no_pattern_for_pair() {
        // Datos_Pasajero has no context patterns at all.
        assert_eq!(score("datos del pasajero", "Datos_Pasajero", "Error"), 0.0);
        // Website has no pattern for Usabilidad.
        assert_eq!(score("pagina lenta", "Website", "Usabilidad"), 0.0);
    }

    #[test]
    fn test_repeated_matches() {
        // "muy lenta" and "se pega", plus one domain match on "pagina".
        assert_eq!(
            score("la pagina esta muy lenta y se pega todo el tiempo", "Website", "Lentitud"),
            4.0
        );
    }

    #[test]
    fn test_domain_and_emotion_without_pattern_match() {
        // The Daño pattern does not match; "maleta" hits the domain and
        // "frustrado" is an emotion term.
        assert_eq!(score("mi maleta y yo frustrado", "Equipaje", "Daño"), 1.0);
    }

    #[test]
    fn test_pattern_match() {
        // "mi maleta" is a domain hit; "rota" is the Daño match.
        assert_eq!(score("mi maleta llego rota", "Equipaje", "Daño"), 3.5);
    }
}
