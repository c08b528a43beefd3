//! Comment classification and confidence scoring.
//!
//! [`Classifier`] picks a category, subcategory and type for a raw comment.
//! [`ConfidenceCalculator`] rates how well an existing (category, type)
//! label fits a comment. Both borrow a [`Lexicon`] and a
//! [`KnowledgeBase`] and hold no mutable state, so they can be shared across
//! threads.
//!
//! # Examples
//!
//! ```
//! use glosa::classification::{Classifier, Comment, ConfidenceCalculator};
//! use glosa::knowledge::KnowledgeBase;
//! use glosa::lexicon::Lexicon;
//!
//! let lexicon = Lexicon::builtin().unwrap();
//! let knowledge = KnowledgeBase::new();
//!
//! let classifier = Classifier::new(&lexicon, &knowledge);
//! let result = classifier.classify("mi maleta llego rota y dañada");
//! assert_eq!(result.category, "Equipaje");
//! assert_eq!(result.type_.as_deref(), Some("Daño"));
//!
//! let calculator = ConfidenceCalculator::new(&lexicon, &knowledge);
//! let comment = Comment::labeled("mi maleta llego rota", "Equipaje", "Daño");
//! assert!(calculator.confidence(&comment) > 0.0);
//! ```
//!
//! [`Lexicon`]: crate::lexicon::Lexicon
//! [`KnowledgeBase`]: crate::knowledge::KnowledgeBase

pub mod classifier;
pub mod confidence;

use serde::{Deserialize, Serialize};

pub use classifier::{CategoryAggregate, Classifier, Explanation};
pub use confidence::{AMPLIFICATION, ConfidenceCalculator, ConfidenceDetail};

/// The outcome of classifying one comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: String,
    pub subcategory: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
}

impl Classification {
    /// The catch-all result for comments without positive evidence.
    pub fn sentinel(category: &str) -> Self {
        Self {
            category: category.to_string(),
            subcategory: None,
            type_: None,
        }
    }
}

/// A comment with an optional label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub text: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
}

impl Comment {
    /// An unlabeled comment.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// A comment labeled with a category and a type.
    pub fn labeled<S, C, T>(text: S, category: C, type_: T) -> Self
    where
        S: Into<String>,
        C: Into<String>,
        T: Into<String>,
    {
        Self {
            text: Some(text.into()),
            category: Some(category.into()),
            type_: Some(type_.into()),
        }
    }

    pub fn with_category<C: Into<String>>(mut self, category: C) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_serializes_type_key() {
        let classification = Classification {
            category: "Website".to_string(),
            subcategory: None,
            type_: Some("Lentitud".to_string()),
        };
        let json = serde_json::to_value(&classification).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"category": "Website", "subcategory": null, "type": "Lentitud"})
        );
    }

    #[test]
    fn test_comment_builders() {
        let comment = Comment::new("hola").with_category("Otros");
        assert_eq!(comment.text(), Some("hola"));
        assert_eq!(comment.category.as_deref(), Some("Otros"));
        assert!(comment.type_.is_none());
    }
}
