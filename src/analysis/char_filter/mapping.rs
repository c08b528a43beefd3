use std::collections::HashMap;

use super::CharFilter;

/// The five accented Spanish vowels and their unaccented form.
const SPANISH_ACCENT_TABLE: &[(char, char)] =
    &[('á', 'a'), ('é', 'e'), ('í', 'i'), ('ó', 'o'), ('ú', 'u')];

/// A char filter that replaces single characters through a fixed table.
///
/// Characters without an entry are copied unchanged.
#[derive(Debug, Clone)]
pub struct MappingCharFilter {
    mapping: HashMap<char, char>,
}

impl MappingCharFilter {
    pub fn new(mapping: HashMap<char, char>) -> Self {
        Self { mapping }
    }

    /// Mapping that strips the acute accent from the five Spanish vowels.
    ///
    /// Only lowercase vowels are listed; the filter is meant to run after
    /// lower-casing. `ñ` and `ü` are deliberately absent.
    pub fn spanish_accents() -> Self {
        Self::new(SPANISH_ACCENT_TABLE.iter().copied().collect())
    }
}

impl CharFilter for MappingCharFilter {
    fn filter(&self, input: &str) -> String {
        input
            .chars()
            .map(|c| self.mapping.get(&c).copied().unwrap_or(c))
            .collect()
    }

    fn name(&self) -> &'static str {
        "mapping"
    }
}
