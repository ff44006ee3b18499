//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{GazetteerArgs, OutputFormat};
use crate::error::Result;

/// Result structure for a resolution.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResolveOutcome {
    pub query: String,
    pub resolved_name: String,
    pub feature_id: Option<u64>,
    pub matched: bool,
}

/// Result structure for dataset statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct DatasetStats {
    pub features: usize,
    pub indexed_places: usize,
    pub distinct_tokens: usize,
    pub total_token_count: u64,
}

/// Print a command result in the configured output format.
///
/// Human output prints the preformatted message (unless quiet); JSON output
/// serializes the result structure instead.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &GazetteerArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("{message}");
            }
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{json}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_outcome_serialization() {
        let outcome = ResolveOutcome {
            query: "main st".to_string(),
            resolved_name: "main street".to_string(),
            feature_id: Some(1),
            matched: true,
        };

        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"resolved_name\":\"main street\""));
        assert!(json.contains("\"feature_id\":1"));
        assert!(json.contains("\"matched\":true"));
    }

    #[test]
    fn test_stats_serialization() {
        let stats = DatasetStats {
            features: 3,
            indexed_places: 2,
            distinct_tokens: 4,
            total_token_count: 4,
        };

        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"indexed_places\":2"));
        assert!(json.contains("\"distinct_tokens\":4"));
    }
}
