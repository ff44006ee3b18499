//! Text analysis for place names.
//!
//! This module turns raw, user-typed or dataset-supplied names into their
//! canonical form: lowercased, stripped to ASCII letters and digits,
//! whitespace-collapsed, with street-type abbreviations expanded token by
//! token. Both index construction and query handling go through the same
//! pipeline so the two sides always agree on spelling.

pub mod abbrev;
pub mod normalize;

// Re-export commonly used items
pub use abbrev::*;
pub use normalize::*;
