//! Error types for the gazetteer library.
//!
//! All errors are represented by the [`GazetteerError`] enum. Failure to
//! resolve a place name is never an error; it is reported as an absent
//! feature in the resolution result. Errors here cover the abnormal paths
//! only, chiefly a dataset that cannot be loaded.
//!
//! # Examples
//!
//! ```
//! use gazetteer::error::{GazetteerError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(GazetteerError::dataset("feature dump is truncated"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for gazetteer operations.
#[derive(Error, Debug)]
pub enum GazetteerError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dataset-related errors (loading, malformed feature collections)
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with GazetteerError.
pub type Result<T> = std::result::Result<T, GazetteerError>;

impl GazetteerError {
    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        GazetteerError::Dataset(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        GazetteerError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        GazetteerError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
