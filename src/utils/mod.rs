//! Utility functions and helpers.

pub mod http;

use url::Url;

/// Resolve a potentially relative URL against a base URL.
///
/// Unresolvable hrefs are returned as-is so that malformed markup
/// degrades to a visible broken link rather than a dropped entry.
pub fn resolve_url(base: &Url, href: &str) -> String {
    base.join(href)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string())
}

/// Derive a URL-safe slug from a display name.
///
/// Lowercases the input and collapses every run of non-alphanumeric
/// characters into a single hyphen, trimming leading/trailing hyphens.
///
/// # Examples
/// ```
/// use thrive::utils::slugify;
///
/// assert_eq!(slugify("Intro to Psychology"), "intro-to-psychology");
/// assert_eq!(slugify("CS 150 – Intro to Programming"), "cs-150-intro-to-programming");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url() {
        let base = Url::parse("https://example.edu/cps/services").unwrap();
        assert_eq!(
            resolve_url(&base, "/counseling"),
            "https://example.edu/counseling"
        );
        assert_eq!(
            resolve_url(&base, "https://other.edu/x"),
            "https://other.edu/x"
        );
    }

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Calculus I"), "calculus-i");
        assert_eq!(slugify("Intro to Psychology"), "intro-to-psychology");
    }

    #[test]
    fn test_slugify_collapses_symbol_runs() {
        assert_eq!(
            slugify("CS577-09:Principles and Techniques of Data Science"),
            "cs577-09-principles-and-techniques-of-data-science"
        );
    }

    #[test]
    fn test_slugify_trims_edges() {
        assert_eq!(slugify("  Math 101!  "), "math-101");
    }
}
