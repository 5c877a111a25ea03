//! Markdown to tab content pipeline.

use std::fmt::Write;

use chlog_renderer::{ConverterOptions, MarkdownConverter};
use chlog_toc::{DEFAULT_VERSION_PATTERN, HeadingFilter, NavigationList, TocError, render_toc};

use crate::memo::Memo;

/// Error returned when a [`ChangelogTab`] cannot be built.
#[derive(Debug, thiserror::Error)]
pub enum TabError {
    /// Heading filter configuration is invalid.
    #[error("{0}")]
    Toc(#[from] TocError),
}

/// Configuration for [`ChangelogTab`].
#[derive(Clone, Debug)]
pub struct TabConfig {
    /// Markdown converter extensions.
    pub converter: ConverterOptions,
    /// Regex a heading's text must contain to be listed.
    pub version_pattern: String,
    /// Lowest heading level listed (1 = `h1`).
    pub min_level: u8,
    /// Highest heading level listed.
    pub max_level: u8,
}

impl Default for TabConfig {
    fn default() -> Self {
        Self {
            converter: ConverterOptions::default(),
            version_pattern: DEFAULT_VERSION_PATTERN.to_owned(),
            min_level: 1,
            max_level: 6,
        }
    }
}

/// Rendered changelog: page HTML plus its version navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabContent {
    /// HTML converted from the markdown.
    pub html: String,
    /// Version headings found in `html`, in document order.
    pub navigation: NavigationList,
}

impl TabContent {
    /// Whether the table of contents has any entry.
    #[must_use]
    pub fn has_navigation(&self) -> bool {
        !self.navigation.is_empty()
    }

    /// Render the tab fragment: content column plus table-of-contents aside.
    ///
    /// The aside is left out when no version heading was found.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(self.html.len() + 256);
        out.push_str(r#"<div class="changelog-tab"><div class="changelog-tab-inner">"#);
        write!(out, r#"<main class="changelog-main">{}</main>"#, self.html).unwrap();
        if self.has_navigation() {
            write!(
                out,
                r#"<aside class="changelog-aside"><nav class="changelog-toc">{}</nav></aside>"#,
                render_toc(&self.navigation)
            )
            .unwrap();
        }
        out.push_str("</div></div>");
        out
    }
}

/// Converts changelog markdown into [`TabContent`], memoizing the last result.
///
/// # Example
///
/// ```
/// use chlog_renderer::MarkdownConverter;
/// use chlog_tab::ChangelogTab;
/// use chlog_toc::HeadingFilter;
///
/// let mut tab = ChangelogTab::with_parts(MarkdownConverter::default(), HeadingFilter::default());
/// let content = tab.render("## 0.1.0\n\n## Notes");
/// assert_eq!(content.navigation.len(), 1);
/// ```
#[derive(Debug)]
pub struct ChangelogTab {
    converter: MarkdownConverter,
    filter: HeadingFilter,
    memo: Memo<TabContent>,
}

impl ChangelogTab {
    /// Build a tab from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TabError::Toc`] if the version pattern or level range is invalid.
    pub fn new(config: TabConfig) -> Result<Self, TabError> {
        let filter = HeadingFilter::new()
            .with_pattern(&config.version_pattern)?
            .with_levels(config.min_level, config.max_level)?;
        Ok(Self::with_parts(MarkdownConverter::new(config.converter), filter))
    }

    /// Build a tab from an already configured converter and filter.
    #[must_use]
    pub fn with_parts(converter: MarkdownConverter, filter: HeadingFilter) -> Self {
        Self {
            converter,
            filter,
            memo: Memo::new(),
        }
    }

    /// Render markdown, reusing the previous result if the input is unchanged.
    pub fn render(&mut self, markdown: &str) -> &TabContent {
        let converter = &self.converter;
        let filter = &self.filter;
        self.memo.get_or_insert_with(markdown, |markdown| {
            let html = converter.convert(markdown);
            let navigation = filter.extract(&html);
            tracing::info!(
                entries = navigation.len(),
                bytes = html.len(),
                "Rendered changelog tab"
            );
            TabContent { html, navigation }
        })
    }

    /// Whether rendering `markdown` would be served from the memo.
    #[must_use]
    pub fn is_cached(&self, markdown: &str) -> bool {
        self.memo.contains(markdown)
    }

    /// Memo statistics as `(hits, misses)`.
    #[must_use]
    pub fn memo_stats(&self) -> (u64, u64) {
        (self.memo.hits(), self.memo.misses())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chlog_toc::HeadingRecord;
    use pretty_assertions::assert_eq;

    const CHANGELOG: &str = "\
# Changelog

## Unreleased

## [1.1.0] - 2024-02-01

### Fixed

- Crash on empty input.

## [1.0.0] - 2024-01-01

### Added

- First release.
";

    fn tab() -> ChangelogTab {
        ChangelogTab::new(TabConfig::default()).unwrap()
    }

    #[test]
    fn test_navigation_links_match_generated_ids() {
        let mut tab = tab();
        let content = tab.render(CHANGELOG);

        assert_eq!(
            content.navigation.clone().into_inner(),
            vec![
                HeadingRecord {
                    id: Some("110---2024-02-01".to_owned()),
                    label: "[1.1.0] - 2024-02-01".to_owned(),
                },
                HeadingRecord {
                    id: Some("100---2024-01-01".to_owned()),
                    label: "[1.0.0] - 2024-01-01".to_owned(),
                },
            ]
        );
        for record in &content.navigation {
            let id = record.id.as_deref().unwrap();
            assert!(content.html.contains(&format!(r#"id="{id}""#)));
        }
    }

    #[test]
    fn test_render_is_memoized() {
        let mut tab = tab();
        let first = tab.render(CHANGELOG).clone();
        assert!(tab.is_cached(CHANGELOG));
        let second = tab.render(CHANGELOG).clone();

        assert_eq!(first, second);
        assert_eq!(tab.memo_stats(), (1, 1));
    }

    #[test]
    fn test_changed_input_recomputes() {
        let mut tab = tab();
        tab.render(CHANGELOG);
        let updated = format!("{CHANGELOG}\n## [0.9.0] - 2023-12-01\n");
        let content = tab.render(&updated);

        assert_eq!(content.navigation.len(), 3);
        assert_eq!(tab.memo_stats(), (0, 2));
        assert!(!tab.is_cached(CHANGELOG));
    }

    #[test]
    fn test_empty_markdown() {
        let mut tab = tab();
        let content = tab.render("");
        assert_eq!(content, &TabContent::default());
    }

    #[test]
    fn test_to_html_with_navigation() {
        let mut tab = tab();
        let html = tab.render("## 2.0.0\n\nBig release.").to_html();

        assert!(html.starts_with(r#"<div class="changelog-tab">"#));
        assert!(html.contains(r#"<main class="changelog-main"><h2 id="200">2.0.0</h2>"#));
        assert!(html.contains(r##"<nav class="changelog-toc"><ul><li><a href="#200">2.0.0</a></li></ul></nav>"##));
        assert!(html.ends_with("</div></div>"));
    }

    #[test]
    fn test_to_html_hides_empty_aside() {
        let mut tab = tab();
        let html = tab.render("## Notes\n\nNothing versioned.").to_html();
        assert!(!html.contains("<aside"));
        assert!(html.contains("Nothing versioned."));
    }

    #[test]
    fn test_config_levels_and_prefix() {
        let mut tab = ChangelogTab::new(TabConfig {
            converter: ConverterOptions {
                heading_id_prefix: "cl-".to_owned(),
                ..ConverterOptions::default()
            },
            min_level: 2,
            max_level: 2,
            ..TabConfig::default()
        })
        .unwrap();
        let content = tab.render("# 3.0.0\n\n## 2.0.0\n\n### 1.0.0");

        assert_eq!(content.navigation.len(), 1);
        assert_eq!(content.navigation[0].id.as_deref(), Some("cl-200"));
    }

    #[test]
    fn test_invalid_config() {
        let err = ChangelogTab::new(TabConfig {
            version_pattern: "[".to_owned(),
            ..TabConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, TabError::Toc(TocError::InvalidPattern(_))));

        let err = ChangelogTab::new(TabConfig {
            min_level: 5,
            max_level: 3,
            ..TabConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, TabError::Toc(TocError::InvalidLevels { .. })));
    }
}
