//! Spelling correction for place name tokens.
//!
//! This module powers typo tolerance in name resolution: a frequency table
//! accumulated from the indexed corpus, and an edit-distance corrector that
//! ranks candidate spellings by how often they occur in that corpus.

pub mod corrector;
pub mod frequency;

// Re-export commonly used types
pub use corrector::*;
pub use frequency::*;
