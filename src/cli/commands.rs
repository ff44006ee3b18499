//! Command implementations for the gazetteer CLI.

use crate::cli::args::{Command, GazetteerArgs, ResolveArgs, StatsArgs};
use crate::cli::output::{DatasetStats, ResolveOutcome, output_result};
use crate::dataset::JsonDataset;
use crate::error::Result;
use crate::resolver::Resolver;

/// Execute a CLI command.
pub fn execute_command(args: GazetteerArgs) -> Result<()> {
    match &args.command {
        Command::Resolve(resolve_args) => resolve_place(resolve_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Resolve a place name against a dataset.
fn resolve_place(args: ResolveArgs, cli_args: &GazetteerArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading dataset from: {}", args.dataset.display());
    }

    let features = JsonDataset::load(&args.dataset)?;
    let resolver = Resolver::from_features(features);

    let query = args.name.join(" ");
    let resolution = resolver.resolve(&query);

    let outcome = ResolveOutcome {
        query,
        resolved_name: resolution.name.clone(),
        feature_id: resolution.feature.map(|feature| feature.id.0),
        matched: resolution.feature.is_some(),
    };

    let message = match resolution.feature {
        Some(feature) => format!("{}: feature {}", resolution.name, feature.id),
        None => format!("Placename not found: {}", resolution.name),
    };
    output_result(&message, &outcome, cli_args)
}

/// Show dataset and index statistics.
fn show_stats(args: StatsArgs, cli_args: &GazetteerArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading dataset from: {}", args.dataset.display());
    }

    let features = JsonDataset::load(&args.dataset)?;
    let feature_count = features.len();
    let resolver = Resolver::from_features(features);

    let stats = DatasetStats {
        features: feature_count,
        indexed_places: resolver.place_count(),
        distinct_tokens: resolver.frequencies().len(),
        total_token_count: resolver.frequencies().total(),
    };

    let message = format!(
        "{} features, {} indexed places, {} distinct tokens",
        stats.features, stats.indexed_places, stats.distinct_tokens
    );
    output_result(&message, &stats, cli_args)
}
