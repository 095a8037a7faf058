//! Search-term handling and pagination clamps for contact queries.
//!
//! This module lives in `core` (zero internal deps) so it can be used by
//! both the API and repository layers.

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of contacts returned by list and search queries.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

// ---------------------------------------------------------------------------
// Term handling
// ---------------------------------------------------------------------------

/// Split a raw search string into independent whitespace-separated terms.
///
/// Returns `None` if the input yields no usable terms, in which case the
/// caller should fall back to a plain unfiltered list.
///
/// # Examples
///
/// ```
/// use rolodex_core::search::split_terms;
/// assert_eq!(split_terms("john smith"), Some(vec!["john", "smith"]));
/// assert_eq!(split_terms("   "), None);
/// ```
pub fn split_terms(query: &str) -> Option<Vec<&str>> {
    let terms: Vec<&str> = query.split_whitespace().collect();

    if terms.is_empty() {
        None
    } else {
        Some(terms)
    }
}

/// Build a `%`-wrapped ILIKE pattern for a single term.
///
/// LIKE metacharacters (`%`, `_`, `\`) in the term are escaped so user
/// input always matches literally.
pub fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

// ---------------------------------------------------------------------------
// Pagination clamps
// ---------------------------------------------------------------------------

/// Clamp a user-provided limit to at least 1, using `default` when absent.
pub fn clamp_limit(limit: Option<i64>, default: i64) -> i64 {
    limit.unwrap_or(default).max(1)
}

/// Clamp a user-provided skip to non-negative.
pub fn clamp_skip(skip: Option<i64>) -> i64 {
    skip.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- split_terms ---------------------------------------------------------

    #[test]
    fn single_term() {
        assert_eq!(split_terms("john"), Some(vec!["john"]));
    }

    #[test]
    fn multiple_terms_split_on_whitespace() {
        assert_eq!(split_terms("john  smith"), Some(vec!["john", "smith"]));
    }

    #[test]
    fn leading_and_trailing_whitespace_ignored() {
        assert_eq!(split_terms("  john "), Some(vec!["john"]));
    }

    #[test]
    fn empty_returns_none() {
        assert_eq!(split_terms(""), None);
    }

    #[test]
    fn whitespace_only_returns_none() {
        assert_eq!(split_terms(" \t "), None);
    }

    // -- like_pattern --------------------------------------------------------

    #[test]
    fn pattern_wraps_in_percent() {
        assert_eq!(like_pattern("john"), "%john%");
    }

    #[test]
    fn pattern_escapes_percent() {
        assert_eq!(like_pattern("50%"), "%50\\%%");
    }

    #[test]
    fn pattern_escapes_underscore() {
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
    }

    #[test]
    fn pattern_escapes_backslash() {
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }

    // -- clamps --------------------------------------------------------------

    #[test]
    fn clamp_limit_uses_default_when_none() {
        assert_eq!(clamp_limit(None, 100), 100);
    }

    #[test]
    fn clamp_limit_floors_at_one() {
        assert_eq!(clamp_limit(Some(0), 100), 1);
        assert_eq!(clamp_limit(Some(-5), 100), 1);
    }

    #[test]
    fn clamp_limit_passes_through_valid_values() {
        assert_eq!(clamp_limit(Some(25), 100), 25);
    }

    #[test]
    fn clamp_skip_defaults_to_zero() {
        assert_eq!(clamp_skip(None), 0);
    }

    #[test]
    fn clamp_skip_floors_negative_at_zero() {
        assert_eq!(clamp_skip(Some(-3)), 0);
    }
}
