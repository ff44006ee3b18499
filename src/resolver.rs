//! Place index construction and name resolution.
//!
//! A [`Resolver`] is built once from a dataset's features and is immutable
//! afterward: every query method takes `&self` and touches no internal
//! mutable state, so a resolver can be shared freely across threads.
//!
//! Resolution runs in tiers. An exact lookup of the canonical name comes
//! first, then one fuzzy pass that corrects every token against the corpus,
//! then a token-overlap scan over all indexed names. An unresolved name is a
//! normal outcome reported by an absent feature, never an error.

use ahash::{AHashMap, AHashSet};

use crate::analysis::normalize::canonicalize;
use crate::dataset::{Feature, FeatureId};
use crate::spelling::corrector::SpellingCorrector;
use crate::spelling::frequency::FrequencyTable;

/// Outcome of a resolution attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// The name the query resolved to: canonical, possibly corrected, or the
    /// best partial match.
    pub name: String,
    /// The matched feature, if any.
    pub feature: Option<&'a Feature>,
}

/// Canonical name -> feature id index with deterministic iteration order.
///
/// Iteration follows the first-insertion order of each canonical name,
/// which makes partial-match tie-breaking reproducible. Re-inserting an
/// existing name overwrites the id but keeps the original position.
#[derive(Debug, Clone, Default)]
struct PlaceIndex {
    ids: AHashMap<String, FeatureId>,
    order: Vec<String>,
}

impl PlaceIndex {
    fn insert(&mut self, name: String, id: FeatureId) {
        if self.ids.insert(name.clone(), id).is_none() {
            self.order.push(name);
        }
    }

    fn get(&self, name: &str) -> Option<FeatureId> {
        self.ids.get(name).copied()
    }

    fn iter(&self) -> impl Iterator<Item = (&str, FeatureId)> {
        self.order
            .iter()
            .filter_map(|name| self.ids.get(name).map(|id| (name.as_str(), *id)))
    }

    fn len(&self) -> usize {
        self.ids.len()
    }
}

/// Resolves free-text place names against a fixed set of named features.
#[derive(Debug, Clone)]
pub struct Resolver {
    features: AHashMap<FeatureId, Feature>,
    index: PlaceIndex,
    corrector: SpellingCorrector,
}

impl Resolver {
    /// Build the place index and token frequency table in one pass.
    ///
    /// Features without a name, or whose name normalizes to the empty
    /// string, contribute nothing. When two features share a canonical name
    /// the later one wins the index entry.
    pub fn from_features<I>(features: I) -> Self
    where
        I: IntoIterator<Item = Feature>,
    {
        let mut frequencies = FrequencyTable::new();
        let mut index = PlaceIndex::default();
        let mut by_id = AHashMap::new();

        for feature in features {
            let canonical = match feature.name.as_deref() {
                Some(name) => canonicalize(name),
                None => continue,
            };
            if canonical.is_empty() {
                continue;
            }
            frequencies.increment_all(canonical.split(' '));
            index.insert(canonical, feature.id);
            by_id.insert(feature.id, feature);
        }

        Resolver {
            features: by_id,
            index,
            corrector: SpellingCorrector::new(frequencies),
        }
    }

    /// Number of indexed canonical names.
    pub fn place_count(&self) -> usize {
        self.index.len()
    }

    /// The token frequency table accumulated at construction.
    pub fn frequencies(&self) -> &FrequencyTable {
        self.corrector.frequencies()
    }

    /// Look up a feature by id.
    pub fn feature(&self, id: FeatureId) -> Option<&Feature> {
        self.features.get(&id)
    }

    /// Exact lookup of a name, with an optional single fuzzy pass.
    ///
    /// Returns the canonical (possibly corrected) form of the query together
    /// with the matching feature id, if any. The fuzzy pass corrects every
    /// token once and retries the exact lookup as an explicit second stage;
    /// it never repeats.
    pub fn lookup(&self, raw_name: &str, fuzzy: bool) -> (String, Option<FeatureId>) {
        let canonical = canonicalize(raw_name);
        if let Some(id) = self.index.get(&canonical) {
            return (canonical, Some(id));
        }
        if !fuzzy {
            return (canonical, None);
        }

        let corrected = canonical
            .split_whitespace()
            .map(|token| self.corrector.correct(token))
            .collect::<Vec<_>>()
            .join(" ");
        let id = self.index.get(&corrected);
        (corrected, id)
    }

    /// Fallback lookup by maximal token overlap.
    ///
    /// Every indexed name is scored by the size of its token-set
    /// intersection with the query. Only a strictly higher score displaces
    /// the running best, so equal scores keep the earliest-indexed name.
    /// With no overlapping tokens at all the input comes back unchanged and
    /// unmatched.
    pub fn lookup_partial(&self, raw_name: &str) -> (String, Option<FeatureId>) {
        let canonical = canonicalize(raw_name);
        let query_tokens: AHashSet<&str> = canonical.split_whitespace().collect();

        let mut best: Option<(&str, FeatureId)> = None;
        let mut best_score = 0;
        for (place, id) in self.index.iter() {
            let place_tokens: AHashSet<&str> = place.split(' ').collect();
            let score = place_tokens.intersection(&query_tokens).count();
            if score > best_score {
                best = Some((place, id));
                best_score = score;
            }
        }

        match best {
            Some((place, id)) => (place.to_string(), Some(id)),
            None => (raw_name.to_string(), None),
        }
    }

    /// Resolve a free-text name to its best-matching feature.
    ///
    /// Exact and fuzzy lookup run first; on a miss the partial fallback runs
    /// over the name the first stage produced, not the raw input.
    pub fn resolve(&self, raw_name: &str) -> Resolution<'_> {
        let (name, id) = self.lookup(raw_name, true);
        if let Some(id) = id {
            return Resolution {
                feature: self.features.get(&id),
                name,
            };
        }

        let (partial_name, partial_id) = self.lookup_partial(&name);
        if let Some(id) = partial_id {
            return Resolution {
                feature: self.features.get(&id),
                name: partial_name,
            };
        }

        Resolution {
            name,
            feature: None,
        }
    }
}
