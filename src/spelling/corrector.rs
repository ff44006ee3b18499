//! Edit-distance candidate generation and frequency-ranked correction.

use ahash::AHashSet;

use crate::spelling::frequency::FrequencyTable;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Single-token spelling corrector backed by a frequency table.
///
/// Candidates are tiered by edit distance: the token itself if known, then
/// known tokens one edit away, then known tokens two edits away, and finally
/// the token unchanged. Within the first non-empty tier the candidate with
/// the highest corpus count wins; equal counts fall back to the
/// lexicographically smallest candidate so correction is deterministic.
#[derive(Debug, Clone)]
pub struct SpellingCorrector {
    frequencies: FrequencyTable,
}

impl SpellingCorrector {
    /// Wrap a frequency table accumulated from the indexed corpus.
    pub fn new(frequencies: FrequencyTable) -> Self {
        SpellingCorrector { frequencies }
    }

    /// The backing frequency table.
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// All strings exactly one edit away from `word`.
    ///
    /// An edit is one character deletion, one adjacent transposition, one
    /// replacement with a letter of the alphabet, or one letter inserted at
    /// any position including both ends. Set semantics: duplicates collapse.
    pub fn edits1(word: &str) -> AHashSet<String> {
        let chars: Vec<char> = word.chars().collect();
        let len = chars.len();
        let mut edits = AHashSet::new();

        // Deletions
        for i in 0..len {
            let mut candidate = chars.clone();
            candidate.remove(i);
            edits.insert(candidate.into_iter().collect());
        }

        // Adjacent transpositions
        for i in 0..len.saturating_sub(1) {
            let mut candidate = chars.clone();
            candidate.swap(i, i + 1);
            edits.insert(candidate.into_iter().collect());
        }

        // Replacements
        for i in 0..len {
            for &letter in ALPHABET {
                let mut candidate = chars.clone();
                candidate[i] = letter as char;
                edits.insert(candidate.into_iter().collect());
            }
        }

        // Insertions
        for i in 0..=len {
            for &letter in ALPHABET {
                let mut candidate = chars.clone();
                candidate.insert(i, letter as char);
                edits.insert(candidate.into_iter().collect());
            }
        }

        edits
    }

    /// All known tokens exactly two edits away from `word`.
    ///
    /// The distance-2 expansion is filtered against the frequency table as
    /// it is produced, so the full quadratic candidate set is never
    /// materialized.
    pub fn known_edits2(&self, word: &str) -> AHashSet<String> {
        let mut known = AHashSet::new();
        for edit in Self::edits1(word) {
            for candidate in Self::edits1(&edit) {
                if self.frequencies.contains(&candidate) {
                    known.insert(candidate);
                }
            }
        }
        known
    }

    /// Filter candidates down to tokens present in the frequency table.
    pub fn known<I>(&self, words: I) -> AHashSet<String>
    where
        I: IntoIterator<Item = String>,
    {
        words
            .into_iter()
            .filter(|word| self.frequencies.contains(word))
            .collect()
    }

    /// Correct a single token against the indexed corpus.
    ///
    /// A token already in the corpus comes back unchanged. Otherwise the
    /// best known candidate within two edits is returned, and a token with
    /// no known candidate at all echoes back as-is.
    pub fn correct(&self, word: &str) -> String {
        let mut candidates = self.known(std::iter::once(word.to_string()));
        if candidates.is_empty() {
            candidates = self.known(Self::edits1(word));
        }
        if candidates.is_empty() {
            candidates = self.known_edits2(word);
        }

        candidates
            .into_iter()
            .max_by(|a, b| {
                self.frequencies
                    .count(a)
                    .cmp(&self.frequencies.count(b))
                    .then_with(|| b.cmp(a))
            })
            .unwrap_or_else(|| word.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(tokens: &[(&str, u64)]) -> SpellingCorrector {
        let mut table = FrequencyTable::new();
        for &(token, count) in tokens {
            for _ in 0..count {
                table.increment(token);
            }
        }
        SpellingCorrector::new(table)
    }

    #[test]
    fn test_edits1_members() {
        let edits = SpellingCorrector::edits1("at");

        // Deletions
        assert!(edits.contains("t"));
        assert!(edits.contains("a"));
        // Transposition
        assert!(edits.contains("ta"));
        // Replacements
        assert!(edits.contains("it"));
        assert!(edits.contains("ab"));
        // Insertions
        assert!(edits.contains("cat"));
        assert!(edits.contains("ant"));
        assert!(edits.contains("atx"));

        // Lots of possible single edits
        assert!(edits.len() > 50);
    }

    #[test]
    fn test_edits1_lengths() {
        let word = "street";
        for edit in SpellingCorrector::edits1(word) {
            let len = edit.chars().count();
            assert!(
                len >= word.len() - 1 && len <= word.len() + 1,
                "unexpected candidate length for {edit:?}"
            );
        }
    }

    #[test]
    fn test_known_filters_to_corpus() {
        let corrector = corpus(&[("main", 3), ("street", 5)]);
        let candidates = ["main", "street", "nowhere"]
            .into_iter()
            .map(String::from);

        let known = corrector.known(candidates);
        assert_eq!(known.len(), 2);
        assert!(known.contains("main"));
        assert!(known.contains("street"));
    }

    #[test]
    fn test_known_token_corrects_to_itself() {
        let corrector = corpus(&[("main", 1), ("street", 10)]);
        assert_eq!(corrector.correct("main"), "main");
        assert_eq!(corrector.correct("street"), "street");
    }

    #[test]
    fn test_one_edit_correction() {
        let corrector = corpus(&[("main", 2), ("street", 2)]);
        // Transposition
        assert_eq!(corrector.correct("mian"), "main");
        // Deletion
        assert_eq!(corrector.correct("sreet"), "street");
        // Insertion
        assert_eq!(corrector.correct("streets"), "street");
    }

    #[test]
    fn test_two_edit_correction() {
        let corrector = corpus(&[("avenue", 4)]);
        // Two deletions away
        assert_eq!(corrector.correct("avnu"), "avenue");
    }

    #[test]
    fn test_known_edits2_is_filtered() {
        let corrector = corpus(&[("avenue", 1)]);
        let known = corrector.known_edits2("avnu");
        assert!(known.contains("avenue"));
        // Only corpus tokens survive the expansion
        for candidate in &known {
            assert!(corrector.frequencies().contains(candidate));
        }
    }

    #[test]
    fn test_frequency_ranking_within_tier() {
        // "cat" and "bat" are both one edit from "aat"; the more frequent wins.
        let corrector = corpus(&[("cat", 10), ("bat", 2)]);
        assert_eq!(corrector.correct("aat"), "cat");
    }

    #[test]
    fn test_tie_break_is_lexicographic() {
        // Equal counts and equal distance: smallest candidate wins.
        let corrector = corpus(&[("bat", 3), ("cat", 3)]);
        assert_eq!(corrector.correct("aat"), "bat");
    }

    #[test]
    fn test_unknown_word_echoes_back() {
        let corrector = corpus(&[("main", 1)]);
        assert_eq!(corrector.correct("xylophone"), "xylophone");
    }
}
