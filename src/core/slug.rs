//! URL slug derivation for catalog records
//!
//! Slugs identify records in public URLs, so derivation has to be
//! deterministic and produce only URL-safe characters

/// Derive a URL slug from a display name
///
/// Lowercases the input, collapses every run of non-alphanumeric
/// characters into a single hyphen and strips leading/trailing hyphens.
/// The result contains only `a-z`, `0-9` and `-`, and the function is
/// idempotent: `slugify(slugify(x)) == slugify(x)`.
///
/// # Examples
///
/// ```
/// use toolshed::core::slug::slugify;
///
/// assert_eq!(slugify("JSON Formatter"), "json-formatter");
/// assert_eq!(slugify("AI Essay Writer!! 2.0"), "ai-essay-writer-2-0");
/// assert_eq!(slugify("  --  "), "");
/// ```
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut gap = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if gap && !slug.is_empty() {
                slug.push('-');
            }
            gap = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            gap = true;
        }
    }

    slug
}

/// Check whether a string is already a well-formed slug
///
/// # Examples
///
/// ```
/// use toolshed::core::slug::is_valid_slug;
///
/// assert!(is_valid_slug("pdf-merger"));
/// assert!(!is_valid_slug("PDF Merger"));
/// assert!(!is_valid_slug(""));
/// ```
pub fn is_valid_slug(candidate: &str) -> bool {
    !candidate.is_empty() && slugify(candidate) == candidate
}
