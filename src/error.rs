//! Error types for the Glosa library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`GlosaError`] enum.
//!
//! # Examples
//!
//! ```
//! use glosa::error::{GlosaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(GlosaError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Glosa operations.
#[derive(Error, Debug)]
pub enum GlosaError {
    /// I/O errors (knowledge files, row files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Regular expression compilation errors
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Lexicon configuration errors (invalid patterns, undefined types, bad weights)
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Knowledge base persistence errors
    #[error("Knowledge error: {0}")]
    Knowledge(String),

    /// Input/output row errors
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Required input columns are absent
    #[error("Missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with GlosaError.
pub type Result<T> = std::result::Result<T, GlosaError>;

impl GlosaError {
    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        GlosaError::Lexicon(msg.into())
    }

    /// Create a new knowledge error.
    pub fn knowledge<S: Into<String>>(msg: S) -> Self {
        GlosaError::Knowledge(msg.into())
    }

    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        GlosaError::Dataset(msg.into())
    }

    /// Create a missing columns error.
    pub fn missing_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GlosaError::MissingColumns {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        GlosaError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        GlosaError::InvalidArgument(msg.into())
    }
}
