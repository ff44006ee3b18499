//! Map dataset plumbing: features and the JSON loader.
//!
//! The resolver only needs an iterable collection of features, each carrying
//! an identifier and an optional name. Parsing a real map format is the
//! dataset provider's job; [`JsonDataset`] covers the common case of a
//! pre-extracted JSON feature dump.

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Identifier of a map feature (OSM-style numeric id).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct FeatureId(pub u64);

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named map feature.
///
/// Geometry is deliberately absent: the resolver treats features as opaque
/// references and never inspects anything beyond the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Feature identifier, unique within a dataset.
    pub id: FeatureId,
    /// Display name, if the feature has one.
    pub name: Option<String>,
}

impl Feature {
    /// Create a named feature.
    pub fn named<S: Into<String>>(id: u64, name: S) -> Self {
        Feature {
            id: FeatureId(id),
            name: Some(name.into()),
        }
    }

    /// Create a feature without a name.
    pub fn unnamed(id: u64) -> Self {
        Feature {
            id: FeatureId(id),
            name: None,
        }
    }
}

/// Loader for JSON feature dumps: a top-level array of features.
pub struct JsonDataset;

impl JsonDataset {
    /// Load all features from a JSON file.
    ///
    /// Fails loudly on I/O or parse errors so a broken dataset never reaches
    /// index construction.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Feature>> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let features = serde_json::from_reader(reader)?;
        Ok(features)
    }
}
