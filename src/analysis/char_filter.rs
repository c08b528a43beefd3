//! Char filter implementations for text normalization.
//!
//! This module provides filters that pre-process a comment before it is
//! split into tokens. The [`TextNormalizer`](crate::analysis::TextNormalizer)
//! chains them into the canonical comment form.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Unicode lower-casing
//! - [`mapping::MappingCharFilter`] - Character mapping replacement
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//!
//! # Examples
//!
//! ```
//! use glosa::analysis::char_filter::CharFilter;
//! use glosa::analysis::char_filter::mapping::MappingCharFilter;
//!
//! let filter = MappingCharFilter::spanish_accents();
//! assert_eq!(filter.filter("canción"), "cancion");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text and return the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod mapping;
pub mod pattern_replace;
