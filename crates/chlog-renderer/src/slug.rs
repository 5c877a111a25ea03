//! GitHub-compatible heading slugs.

use std::collections::HashMap;

/// Convert heading text to a slug following GitHub's convention.
///
/// Lowercases the text, drops every character that is not alphanumeric,
/// `-`, `_` or a space, then turns each space into `-`. Consecutive hyphens
/// are kept, so `"a - b"` becomes `"a---b"` as it does on GitHub.
///
/// # Examples
///
/// ```
/// use chlog_renderer::slugify;
///
/// assert_eq!(slugify("Release 1.2.3"), "release-123");
/// assert_eq!(slugify("API (v2) & more"), "api-v2--more");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            '-' | '_' => Some(c),
            c if c.is_alphanumeric() => Some(c),
            _ => None,
        })
        .collect()
}

/// Generates unique slugs within a single document.
///
/// Repeated headings get a numeric suffix (`faq`, `faq-1`, `faq-2`). A suffix
/// that collides with a slug already handed out is skipped.
#[derive(Debug, Default)]
pub struct HeadingSlugger {
    prefix: String,
    occurrences: HashMap<String, usize>,
}

impl HeadingSlugger {
    /// Create a slugger that prepends `prefix` to every id it returns.
    ///
    /// The prefix does not take part in duplicate detection.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            occurrences: HashMap::new(),
        }
    }

    /// Return the unique id for a heading with the given plain text.
    pub fn slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut slug = base.clone();

        while self.occurrences.contains_key(&slug) {
            let count = self.occurrences.entry(base.clone()).or_insert(0);
            *count += 1;
            slug = format!("{base}-{count}");
        }
        self.occurrences.insert(slug.clone(), 0);

        format!("{}{slug}", self.prefix)
    }
}
