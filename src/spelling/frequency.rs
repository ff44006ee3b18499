//! Token frequency table backing spelling correction.

use ahash::AHashMap;

/// A token -> occurrence count table with optional add-one smoothing.
///
/// With smoothing enabled (the default), an unseen token reports a count of
/// 1 instead of 0, so candidate ranking never treats an unseen-but-plausible
/// spelling as impossible. Counts only ever increase; there is no removal.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: AHashMap<String, u64>,
    smoothing: bool,
}

impl FrequencyTable {
    /// Create an empty table with smoothing enabled.
    pub fn new() -> Self {
        Self::with_smoothing(true)
    }

    /// Create an empty table with the given smoothing mode.
    pub fn with_smoothing(smoothing: bool) -> Self {
        FrequencyTable {
            counts: AHashMap::new(),
            smoothing,
        }
    }

    /// Record one occurrence of a token.
    pub fn increment(&mut self, token: &str) {
        *self.counts.entry(token.to_string()).or_insert(0) += 1;
    }

    /// Record one occurrence of every token in the sequence, in order.
    pub fn increment_all<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.increment(token.as_ref());
        }
    }

    /// Whether the token has ever been recorded.
    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// The recorded count, or the smoothing default for unseen tokens.
    pub fn count(&self, token: &str) -> u64 {
        match self.counts.get(token) {
            Some(&count) => count,
            None if self.smoothing => 1,
            None => 0,
        }
    }

    /// Number of distinct tokens recorded.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if no token has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all recorded counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}
