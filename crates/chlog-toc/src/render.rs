//! HTML rendering of a navigation list.

use std::fmt::Write;

use chlog_renderer::escape_html;

use crate::navigation::NavigationList;

/// Render the navigation list as a `<ul>` of in-page anchor links.
///
/// A record without an id becomes a link to `#`, which goes nowhere but keeps
/// the entry visible. An empty list renders as an empty string so callers can
/// drop the surrounding container.
///
/// # Examples
///
/// ```
/// use chlog_toc::{find_version_headings, render_toc};
///
/// let toc = find_version_headings(r#"<h2 id="v2">2.0.0</h2>"#);
/// assert_eq!(render_toc(&toc), r##"<ul><li><a href="#v2">2.0.0</a></li></ul>"##);
/// ```
#[must_use]
pub fn render_toc(list: &NavigationList) -> String {
    if list.is_empty() {
        return String::new();
    }

    let mut out = String::from("<ul>");
    for record in list {
        let href = record.href().unwrap_or_else(|| "#".to_owned());
        write!(
            out,
            r#"<li><a href="{}">{}</a></li>"#,
            escape_html(&href),
            escape_html(&record.label)
        )
        .unwrap();
    }
    out.push_str("</ul>");
    out
}
