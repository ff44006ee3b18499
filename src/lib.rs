//! # Gazetteer
//!
//! A typo-tolerant place name resolver for map datasets.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Canonical name normalization with abbreviation expansion
//! - Statistical spelling correction ranked by corpus frequency
//! - Exact, fuzzy, and token-overlap lookup tiers
//! - Single-pass index construction over any feature collection

pub mod analysis;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod resolver;
pub mod spelling;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
