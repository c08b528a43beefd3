//! Comment normalization.
//!
//! Every comment, keyword and marker is compared in a canonical form:
//! lowercase, the five accented vowels unaccented, anything outside `a-z`
//! turned into a space, whitespace runs collapsed and the ends trimmed.
//!
//! # Examples
//!
//! ```
//! use glosa::analysis::normalize;
//!
//! assert_eq!(normalize("¡La PÁGINA está   muy lenta!"), "la pagina esta muy lenta");
//! assert_eq!(normalize("mi maleta llegó dañada"), "mi maleta llego da ada");
//! ```

use std::sync::LazyLock;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::char_filter::mapping::MappingCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::error::Result;

/// Characters that survive normalization, besides whitespace.
const NON_ALPHABET_PATTERN: &str = r"[^a-z\s]";
const WHITESPACE_RUN_PATTERN: &str = r"\s+";

static SPANISH_NORMALIZER: LazyLock<TextNormalizer> = LazyLock::new(|| {
    TextNormalizer::spanish().expect("built-in normalizer patterns are valid regexes")
});

/// Normalize a comment with the shared Spanish normalizer.
///
/// Total and idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    SPANISH_NORMALIZER.normalize(text)
}

/// Normalize an optional comment; a missing comment normalizes to `""`.
pub fn normalize_opt(text: Option<&str>) -> String {
    SPANISH_NORMALIZER.normalize_opt(text)
}

/// An ordered pipeline of char filters followed by a trim.
pub struct TextNormalizer {
    filters: Vec<Box<dyn CharFilter>>,
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer")
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl TextNormalizer {
    /// Create a normalizer from an explicit filter chain.
    pub fn new(filters: Vec<Box<dyn CharFilter>>) -> Self {
        Self { filters }
    }

    /// The canonical Spanish comment normalizer.
    pub fn spanish() -> Result<Self> {
        Ok(Self::new(vec![
            Box::new(LowercaseCharFilter::new()),
            Box::new(MappingCharFilter::spanish_accents()),
            Box::new(PatternReplaceCharFilter::new(NON_ALPHABET_PATTERN, " ")?),
            Box::new(PatternReplaceCharFilter::new(WHITESPACE_RUN_PATTERN, " ")?),
        ]))
    }

    /// Run every filter in order and trim the result.
    pub fn normalize(&self, text: &str) -> String {
        let filtered = self
            .filters
            .iter()
            .fold(text.to_string(), |acc, filter| filter.filter(&acc));
        filtered.trim().to_string()
    }

    /// Normalize an optional comment; `None` yields the empty string.
    pub fn normalize_opt(&self, text: Option<&str>) -> String {
        text.map(|t| self.normalize(t)).unwrap_or_default()
    }

    /// Names of the filters in application order.
    pub fn filter_names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name()).collect()
    }
}
