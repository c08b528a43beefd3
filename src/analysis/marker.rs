//! Negation, intensity and emotion markers.
//!
//! Negation and intensity are looked up in the text *before* the first
//! occurrence of a keyword. The scan covers the whole prefix, not just the
//! words adjacent to the keyword, and a marker only needs to be followed by
//! whitespace: `bueno ` therefore counts as the negation `no `. Callers rely
//! on these exact semantics, false positives included.
//!
//! # Examples
//!
//! ```
//! use glosa::analysis::MarkerDetector;
//!
//! let markers = MarkerDetector::spanish().unwrap();
//! assert!(markers.has_negation("no me gusta el error", "error"));
//! assert!(!markers.has_negation("tengo un error", "error"));
//! assert!(markers.has_intensity("es muy lento", "lento"));
//! assert!(markers.has_emotion("estoy muy frustrado"));
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;

const NEGATION_MARKERS: &[&str] = &[
    "no", "nunca", "jamas", "ningun", "ninguna", "ningunos", "ningunas", "ni", "tampoco", "sin",
    "nada de",
];

const INTENSITY_MARKERS: &[&str] = &[
    "muy",
    "demasiado",
    "extremadamente",
    "super",
    "ultra",
    "hiper",
    "maximo",
    "total",
    "completamente",
    "absolutamente",
];

const EMOTION_MARKERS: &[(&str, &[&str])] = &[
    (
        "enojo",
        &[
            "enojado", "enojada", "enfadado", "enfadada", "molesto", "molesta", "irritado",
            "irritada", "frustrado", "frustrada",
        ],
    ),
    (
        "alegria",
        &[
            "feliz", "contento", "contenta", "satisfecho", "satisfecha", "alegre", "encantado",
            "encantada",
        ],
    ),
    (
        "tristeza",
        &[
            "triste", "decepcionado", "decepcionada", "desilusionado", "desilusionada",
            "deprimido", "deprimida",
        ],
    ),
    (
        "sorpresa",
        &[
            "sorprendido", "sorprendida", "asombrado", "asombrada", "impresionado",
            "impresionada", "increible",
        ],
    ),
    (
        "preocupacion",
        &[
            "preocupado", "preocupada", "ansioso", "ansiosa", "nervioso", "nerviosa", "inquieto",
            "inquieta",
        ],
    ),
];

/// A named group of emotion terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionGroup {
    pub name: String,
    pub terms: Vec<String>,
}

/// The global marker word lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSet {
    pub negation: Vec<String>,
    pub intensity: Vec<String>,
    pub emotion: Vec<EmotionGroup>,
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self::spanish()
    }
}

impl MarkerSet {
    /// The built-in Spanish marker lists.
    pub fn spanish() -> Self {
        let to_strings = |words: &[&str]| words.iter().map(|w| w.to_string()).collect();
        Self {
            negation: to_strings(NEGATION_MARKERS),
            intensity: to_strings(INTENSITY_MARKERS),
            emotion: EMOTION_MARKERS
                .iter()
                .map(|(name, terms)| EmotionGroup {
                    name: name.to_string(),
                    terms: to_strings(terms),
                })
                .collect(),
        }
    }
}

/// Compiled marker matchers.
#[derive(Debug, Clone)]
pub struct MarkerDetector {
    negation: Option<Regex>,
    intensity: Option<Regex>,
    emotion: Vec<(String, Regex)>,
    any_emotion: Option<Regex>,
}

impl MarkerDetector {
    /// Compile the matchers of a marker set.
    ///
    /// Empty lists compile to matchers that never fire.
    pub fn new(markers: &MarkerSet) -> Result<Self> {
        let emotion = markers
            .emotion
            .iter()
            .filter_map(|group| {
                alternation(&group.terms, "").map(|r| r.map(|regex| (group.name.clone(), regex)))
            })
            .collect::<Result<Vec<_>>>()?;

        let all_emotion_terms: Vec<String> = markers
            .emotion
            .iter()
            .flat_map(|group| group.terms.iter().cloned())
            .collect();

        Ok(Self {
            negation: alternation(&markers.negation, r"\s+").transpose()?,
            intensity: alternation(&markers.intensity, r"\s+").transpose()?,
            emotion,
            any_emotion: alternation(&all_emotion_terms, "").transpose()?,
        })
    }

    /// Matchers for the built-in Spanish markers.
    pub fn spanish() -> Result<Self> {
        Self::new(&MarkerSet::spanish())
    }

    /// Whether a negation marker occurs before the first occurrence of `keyword`.
    pub fn has_negation(&self, text: &str, keyword: &str) -> bool {
        Self::marker_before(self.negation.as_ref(), text, keyword)
    }

    /// Whether an intensity marker occurs before the first occurrence of `keyword`.
    pub fn has_intensity(&self, text: &str, keyword: &str) -> bool {
        Self::marker_before(self.intensity.as_ref(), text, keyword)
    }

    /// Whether any emotion term occurs anywhere in `text`.
    pub fn has_emotion(&self, text: &str) -> bool {
        self.any_emotion
            .as_ref()
            .is_some_and(|regex| regex.is_match(text))
    }

    /// Names of the emotion groups present in `text`, in declared order.
    pub fn emotions<'a>(&'a self, text: &str) -> Vec<&'a str> {
        self.emotion
            .iter()
            .filter(|(_, regex)| regex.is_match(text))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    fn marker_before(regex: Option<&Regex>, text: &str, keyword: &str) -> bool {
        let Some(regex) = regex else {
            return false;
        };
        match prefix_before(text, keyword) {
            Some(prefix) => regex.is_match(prefix),
            None => false,
        }
    }
}

/// The part of `text` before the first occurrence of `keyword`.
pub fn prefix_before<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    text.find(keyword).map(|pos| &text[..pos])
}

/// Build `(?:m1<suffix>|m2<suffix>|...)`, with inner spaces of multi-word
/// markers matching any whitespace run. `None` when `words` is empty.
fn alternation(words: &[String], suffix: &str) -> Option<Result<Regex>> {
    let branches: Vec<String> = words
        .iter()
        .filter(|w| !w.trim().is_empty())
        .map(|w| {
            let escaped: Vec<String> = w.split_whitespace().map(regex::escape).collect();
            format!("{}{}", escaped.join(r"\s+"), suffix)
        })
        .collect();

    if branches.is_empty() {
        return None;
    }

    Some(Regex::new(&format!("(?:{})", branches.join("|"))).map_err(Into::into))
}
