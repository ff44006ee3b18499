//! Command line interface for the gazetteer binary.

pub mod args;
pub mod commands;
pub mod output;
