//! Canonical place name normalization.

use crate::analysis::abbrev::expand_token;

/// Normalize a raw place name into its canonical form.
///
/// Lowercases the input, keeps only ASCII letters and digits, collapses
/// whitespace runs to single spaces with no leading or trailing space, and
/// expands street-type abbreviations on whole tokens. Punctuation is dropped
/// without inserting a separator, so "main-street" becomes "mainstreet".
///
/// The function is pure and idempotent: feeding its output back in returns
/// the same string.
///
/// # Examples
///
/// ```
/// use gazetteer::analysis::normalize::canonicalize;
///
/// assert_eq!(canonicalize("Main St."), "main street");
/// assert_eq!(canonicalize("  Oak   Ave "), "oak avenue");
/// ```
pub fn canonicalize(raw: &str) -> String {
    let mut compact = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            compact.push(ch.to_ascii_lowercase());
        } else if ch.is_whitespace() && !compact.is_empty() && !compact.ends_with(' ') {
            compact.push(' ');
        }
    }

    let mut canonical = String::with_capacity(compact.len());
    for token in compact.split_whitespace() {
        if !canonical.is_empty() {
            canonical.push(' ');
        }
        canonical.push_str(expand_token(token));
    }
    canonical
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_collapses_whitespace() {
        assert_eq!(canonicalize("Main Street"), "main street");
        assert_eq!(canonicalize("  Oak \t Avenue  "), "oak avenue");
        assert_eq!(canonicalize("UPPER CASE ROAD"), "upper case road");
    }

    #[test]
    fn test_drops_punctuation_without_separator() {
        assert_eq!(canonicalize("St. Mary's Road"), "street marys road");
        assert_eq!(canonicalize("main-street"), "mainstreet");
        assert_eq!(canonicalize("a.b.c"), "abc");
    }

    #[test]
    fn test_digits_are_kept() {
        assert_eq!(canonicalize("Route 66"), "route 66");
        assert_eq!(canonicalize("5th Avenue"), "5th avenue");
    }

    #[test]
    fn test_abbreviation_expansion_whole_tokens_only() {
        assert_eq!(canonicalize("rd"), canonicalize("road"));
        assert_eq!(canonicalize("Main St"), "main street");
        assert_eq!(canonicalize("Broadway"), "broadway");
    }

    #[test]
    fn test_idempotent() {
        let inputs = ["Main St.", "  Oak   Ave ", "broadway", "", "!!!", "Route 66"];
        for input in inputs {
            let once = canonicalize(input);
            assert_eq!(canonicalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_case_insensitive() {
        let inputs = ["Main Street", "oak ave", "ROUTE 66"];
        for input in inputs {
            assert_eq!(canonicalize(input), canonicalize(&input.to_uppercase()));
        }
    }

    #[test]
    fn test_empty_and_unmappable_input() {
        assert_eq!(canonicalize(""), "");
        assert_eq!(canonicalize("   "), "");
        assert_eq!(canonicalize("!!! ???"), "");
    }
}
