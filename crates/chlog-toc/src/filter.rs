//! Heading selection by version pattern.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::TocError;
use crate::navigation::{HeadingRecord, NavigationList};

/// Three dot-separated ASCII digit groups anywhere in the text.
pub const DEFAULT_VERSION_PATTERN: &str = r"[0-9]+\.[0-9]+\.[0-9]+";

static DEFAULT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_VERSION_PATTERN).unwrap());

static HEADING_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1, h2, h3, h4, h5, h6").unwrap());

/// Selects version headings from an HTML document.
///
/// The default filter accepts every heading level and uses
/// [`DEFAULT_VERSION_PATTERN`]. The pattern is matched as a substring, so
/// `"Release Notes for v1.2.3 (beta)"` and `"1.2.3.4"` both qualify.
#[derive(Clone, Debug)]
pub struct HeadingFilter {
    pattern: Regex,
    levels: RangeInclusive<u8>,
}

impl Default for HeadingFilter {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.clone(),
            levels: 1..=6,
        }
    }
}

impl HeadingFilter {
    /// Create a filter with the default pattern and all heading levels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the version pattern.
    ///
    /// # Errors
    ///
    /// Returns [`TocError::InvalidPattern`] if `pattern` is not a valid regex.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, TocError> {
        self.pattern = Regex::new(pattern)?;
        Ok(self)
    }

    /// Restrict the heading levels considered (inclusive).
    ///
    /// # Errors
    ///
    /// Returns [`TocError::InvalidLevels`] unless `1 <= min <= max <= 6`.
    pub fn with_levels(mut self, min: u8, max: u8) -> Result<Self, TocError> {
        if min < 1 || max > 6 || min > max {
            return Err(TocError::InvalidLevels { min, max });
        }
        self.levels = min..=max;
        Ok(self)
    }

    /// The version pattern in use.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Whether `text` contains a version number.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Extract the navigation list from an HTML document.
    ///
    /// Headings are visited in document order regardless of nesting depth.
    #[must_use]
    pub fn extract(&self, html: &str) -> NavigationList {
        let document = Html::parse_document(html);
        let mut list = NavigationList::default();
        let mut scanned = 0usize;

        for heading in document.select(&HEADING_SELECTOR) {
            scanned += 1;
            if !self.levels.contains(&heading_level(heading)) {
                continue;
            }

            let text: String = heading.text().collect();
            if !self.is_match(&text) {
                continue;
            }

            list.push(HeadingRecord {
                id: heading.value().attr("id").map(str::to_owned),
                label: trim_label(&text).to_owned(),
            });
        }

        tracing::debug!(
            scanned,
            matched = list.len(),
            "Extracted version headings"
        );
        list
    }
}

/// Extract version headings using the default filter.
///
/// See [`HeadingFilter::extract`].
#[must_use]
pub fn find_version_headings(html: &str) -> NavigationList {
    HeadingFilter::default().extract(html)
}

/// Strip surrounding whitespace and byte order marks from heading text.
fn trim_label(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Numeric level of a heading element (`h3` → 3).
fn heading_level(element: ElementRef<'_>) -> u8 {
    element
        .value()
        .name()
        .strip_prefix('h')
        .and_then(|n| n.parse().ok())
        .unwrap_or(0)
}
