//! Lowercase char filter implementation.

use super::CharFilter;

/// A char filter that converts the whole input to lowercase.
///
/// ASCII input takes the fast path; everything else goes through
/// Unicode-aware lowercasing so accented capitals (`Á`) become their
/// lowercase accented form (`á`) before accent mapping runs.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        if input.is_ascii() {
            input.to_ascii_lowercase()
        } else {
            input.to_lowercase()
        }
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
