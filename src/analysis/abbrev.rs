//! Street-type abbreviation expansion.

use ahash::AHashMap;
use lazy_static::lazy_static;

lazy_static! {
    /// Abbreviation -> expansion table. Applied to whole tokens only.
    static ref ABBREVIATIONS: AHashMap<&'static str, &'static str> = {
        let mut table = AHashMap::new();
        table.insert("rd", "road");
        table.insert("av", "avenue");
        table.insert("ave", "avenue");
        table.insert("st", "street");
        table.insert("cls", "close");
        table
    };
}

/// Expand a single token if it is a known street-type abbreviation.
///
/// Unknown tokens pass through unchanged. The table matches whole tokens,
/// never substrings, so "broadway" is unaffected by the "rd" entry.
pub fn expand_token(token: &str) -> &str {
    ABBREVIATIONS.get(token).copied().unwrap_or(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_abbreviations() {
        assert_eq!(expand_token("rd"), "road");
        assert_eq!(expand_token("av"), "avenue");
        assert_eq!(expand_token("ave"), "avenue");
        assert_eq!(expand_token("st"), "street");
        assert_eq!(expand_token("cls"), "close");
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        assert_eq!(expand_token("main"), "main");
        assert_eq!(expand_token("road"), "road");
        assert_eq!(expand_token(""), "");
    }

    #[test]
    fn test_whole_tokens_only() {
        // "broadway" contains "rd" but is not an abbreviation
        assert_eq!(expand_token("broadway"), "broadway");
        assert_eq!(expand_token("street"), "street");
    }
}
