//! Static category/type lexicon.
//!
//! A [`Lexicon`] is built once from a [`LexiconConfig`] (the built-in
//! Spanish lexicon or a JSON file) and never changes afterwards. Keywords
//! are normalized and deduplicated, regexes compiled and the configuration
//! validated at build time, so scoring never fails.
//!
//! # Examples
//!
//! ```
//! use glosa::lexicon::Lexicon;
//!
//! let lexicon = Lexicon::builtin().unwrap();
//! assert_eq!(lexicon.sentinel(), "Otros");
//! let website = lexicon.category("Website").unwrap();
//! assert!(website.has_type("Lentitud"));
//! assert!(website.context_pattern("Lentitud").is_some());
//! ```

pub mod builtin;
pub mod config;
pub mod weight;

use std::collections::{HashMap, HashSet};
use std::path::Path;

use log::debug;
use regex::Regex;

use crate::analysis::{EmotionGroup, MarkerDetector, MarkerSet, StopWords, TextNormalizer};
use crate::error::{GlosaError, Result};

pub use builtin::SENTINEL_CATEGORY;
pub use config::{CategoryConfig, ContextPatternConfig, LexiconConfig, TypeConfig};
pub use weight::WeightProfile;

/// A compiled context pattern for one (category, type) pair.
#[derive(Debug, Clone)]
pub struct ContextPattern {
    pub type_id: String,
    pub regex: Regex,
}

/// A category with its compiled patterns.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub types: Vec<String>,
    pub domain: Option<Regex>,
    pub context_patterns: Vec<ContextPattern>,
    pub default_weights: WeightProfile,
}

impl Category {
    pub fn has_type(&self, type_id: &str) -> bool {
        self.types.iter().any(|t| t == type_id)
    }

    /// The context pattern configured for `type_id`, if any.
    pub fn context_pattern(&self, type_id: &str) -> Option<&Regex> {
        self.context_patterns
            .iter()
            .find(|p| p.type_id == type_id)
            .map(|p| &p.regex)
    }

    /// Whether any of the category's context patterns matches `text`.
    pub fn any_context_match(&self, text: &str) -> bool {
        self.context_patterns.iter().any(|p| p.regex.is_match(text))
    }
}

/// Keywords of a type.
#[derive(Debug, Clone)]
pub struct TypeDef {
    pub id: String,
    pub keywords: Vec<String>,
}

/// The static lexicon consulted by the scorers.
#[derive(Debug, Clone)]
pub struct Lexicon {
    categories: Vec<Category>,
    category_index: HashMap<String, usize>,
    types: HashMap<String, TypeDef>,
    sentinel: String,
    markers: MarkerDetector,
    stop_words: StopWords,
}

impl Lexicon {
    /// The built-in Spanish airline lexicon.
    pub fn builtin() -> Result<Self> {
        Self::from_config(builtin::spanish_config())
    }

    /// Load, compile and validate a lexicon JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_config(LexiconConfig::load_from_file(path)?)
    }

    /// Compile and validate a raw configuration.
    pub fn from_config(config: LexiconConfig) -> Result<Self> {
        let normalizer = TextNormalizer::spanish()?;

        let mut types = HashMap::new();
        for type_config in config.types {
            if types.contains_key(&type_config.id) {
                return Err(GlosaError::lexicon(format!(
                    "Type '{}' is defined twice",
                    type_config.id
                )));
            }
            let keywords = normalize_keywords(&normalizer, &type_config.keywords);
            types.insert(
                type_config.id.clone(),
                TypeDef {
                    id: type_config.id,
                    keywords,
                },
            );
        }

        let mut categories = Vec::with_capacity(config.categories.len());
        let mut category_index = HashMap::new();
        for category_config in config.categories {
            let category = compile_category(&normalizer, category_config, &types)?;
            if category_index
                .insert(category.id.clone(), categories.len())
                .is_some()
            {
                return Err(GlosaError::lexicon(format!(
                    "Category '{}' is defined twice",
                    category.id
                )));
            }
            categories.push(category);
        }

        if !category_index.contains_key(&config.sentinel) {
            return Err(GlosaError::lexicon(format!(
                "Sentinel category '{}' is not declared",
                config.sentinel
            )));
        }

        let markers = MarkerDetector::new(&normalize_markers(&normalizer, &config.markers))?;
        let stop_words = match config.stop_words {
            Some(words) => StopWords::from_words(
                words
                    .iter()
                    .map(|w| normalizer.normalize(w))
                    .filter(|w| !w.is_empty()),
            ),
            None => StopWords::spanish(),
        };

        debug!(
            "Lexicon built with {} categories and {} types",
            categories.len(),
            types.len()
        );

        Ok(Self {
            categories,
            category_index,
            types,
            sentinel: config.sentinel,
            markers,
            stop_words,
        })
    }

    /// All categories in declaration order, sentinel included.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Categories that can win classification, in declaration order.
    pub fn scored_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| c.id != self.sentinel)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.category_index.get(id).map(|&i| &self.categories[i])
    }

    /// Declaration position of a category.
    pub fn category_position(&self, id: &str) -> Option<usize> {
        self.category_index.get(id).copied()
    }

    pub fn type_def(&self, id: &str) -> Option<&TypeDef> {
        self.types.get(id)
    }


    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    pub fn is_sentinel(&self, category: &str) -> bool {
        category == self.sentinel
    }

    pub fn markers(&self) -> &MarkerDetector {
        &self.markers
    }


    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// The static default weight profile of a category.
    pub fn default_weights(&self, category: &str) -> Option<WeightProfile> {
        self.category(category).map(|c| c.default_weights)
    }
}

fn compile_category(
    normalizer: &TextNormalizer,
    config: CategoryConfig,
    types: &HashMap<String, TypeDef>,
) -> Result<Category> {
    let id = config.id;

    for type_id in &config.types {
        if !types.contains_key(type_id) {
            return Err(GlosaError::lexicon(format!(
                "Category '{id}' references undefined type '{type_id}'"
            )));
        }
    }

    if !(config.default_weights.is_valid() && config.default_weights.is_non_negative()) {
        return Err(GlosaError::lexicon(format!(
            "Default weights of '{}' must be non-negative and sum to 1.0, got {:.3}",
            id,
            config.default_weights.sum()
        )));
    }

    let domain = config
        .domain_pattern
        .as_deref()
        .map(|pattern| compile_pattern(&id, "domain", pattern))
        .transpose()?;

    let mut context_patterns: Vec<ContextPattern> = Vec::new();
    for pattern in config.context_patterns {
        if !config.types.contains(&pattern.type_id) {
            return Err(GlosaError::lexicon(format!(
                "Context pattern of '{}' targets type '{}' which is not valid for the category",
                id, pattern.type_id
            )));
        }
        if context_patterns.iter().any(|p| p.type_id == pattern.type_id) {
            return Err(GlosaError::lexicon(format!(
                "Category '{}' defines two context patterns for type '{}'",
                id, pattern.type_id
            )));
        }
        let regex = compile_pattern(&id, &pattern.type_id, &pattern.pattern)?;
        context_patterns.push(ContextPattern {
            type_id: pattern.type_id,
            regex,
        });
    }

    Ok(Category {
        keywords: normalize_keywords(normalizer, &config.keywords),
        id,
        description: config.description,
        types: config.types,
        domain,
        context_patterns,
        default_weights: config.default_weights,
    })
}

/// Normalize every marker term like a comment, dropping terms that
/// normalize to nothing.
fn normalize_markers(normalizer: &TextNormalizer, markers: &MarkerSet) -> MarkerSet {
    let normalize_all = |terms: &[String]| -> Vec<String> {
        terms
            .iter()
            .map(|term| normalizer.normalize(term))
            .filter(|term| !term.is_empty())
            .collect()
    };
    MarkerSet {
        negation: normalize_all(&markers.negation),
        intensity: normalize_all(&markers.intensity),
        emotion: markers
            .emotion
            .iter()
            .map(|group| EmotionGroup {
                name: group.name.clone(),
                terms: normalize_all(&group.terms),
            })
            .collect(),
    }
}

fn compile_pattern(category: &str, label: &str, pattern: &str) -> Result<Regex> {
    let regex = Regex::new(pattern).map_err(|e| {
        GlosaError::lexicon(format!(
            "Invalid {label} pattern for category '{category}': {e}"
        ))
    })?;
    // A pattern that matches the empty string would match every comment.
    if regex.is_match("") {
        return Err(GlosaError::lexicon(format!(
            "The {label} pattern for category '{category}' matches the empty string"
        )));
    }
    Ok(regex)
}

/// Normalize keywords, dropping empties and later duplicates.
fn normalize_keywords(normalizer: &TextNormalizer, keywords: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    keywords
        .iter()
        .map(|k| normalizer.normalize(k))
        .filter(|k| !k.is_empty())
        .filter(|k| seen.insert(k.clone()))
        .collect()
}
