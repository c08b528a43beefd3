//! Text analysis module for Glosa.
//!
//! This module provides the text handling the scorers build on: comment
//! normalization through a char filter pipeline, whitespace tokenization,
//! Spanish stop words and negation/intensity/emotion marker detection.

pub mod char_filter;
pub mod marker;
pub mod normalizer;
pub mod stop;
pub mod tokenizer;

pub use marker::{EmotionGroup, MarkerDetector, MarkerSet};
pub use normalizer::{TextNormalizer, normalize, normalize_opt};
pub use stop::StopWords;
pub use tokenizer::{TokenSet, WhitespaceTokenizer};
