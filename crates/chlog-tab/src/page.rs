//! Standalone HTML page around a tab.

use chlog_renderer::escape_html;

use crate::tab::TabContent;

/// Two-column layout: content on the left, table of contents on the right.
///
/// Below 960px the columns stack with the table of contents first.
const STYLESHEET: &str = r"
body { margin: 0; font-family: system-ui, sans-serif; line-height: 1.5; }
.changelog-tab { width: 100%; min-height: 100%; }
.changelog-tab-inner { display: flex; flex-direction: column; justify-content: center; gap: 2rem; }
.changelog-aside { min-width: 15rem; max-width: 21rem; order: 1; }
.changelog-toc { flex-shrink: 0; padding: 2rem 2rem 0; }
.changelog-toc ul { margin-top: 0; padding-left: 1rem; list-style: none; }
.changelog-main { padding: 0 2rem 2rem; order: 2; }
@media (min-width: 960px) {
  .changelog-tab-inner { flex-direction: row; gap: 5rem; padding: 4rem 24px; }
  .changelog-aside { order: 2; }
  .changelog-toc { position: sticky; top: 1rem; max-height: calc(100vh - 2rem); padding-top: 0; padding-right: 20px; overflow: auto; scrollbar-width: none; }
  .changelog-main { padding-top: 0; padding-right: 0; order: 1; }
}
";

/// Render a complete HTML document containing the tab.
#[must_use]
pub fn render_page(title: &str, content: &TabContent) -> String {
    let body = content.to_html();
    let mut out = String::with_capacity(body.len() + STYLESHEET.len() + 256);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str("<title>");
    out.push_str(&escape_html(title));
    out.push_str("</title>\n<style>");
    out.push_str(STYLESHEET);
    out.push_str("</style>\n</head>\n<body>\n");
    out.push_str(&body);
    out.push_str("\n</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chlog_toc::{HeadingRecord, NavigationList};

    fn content() -> TabContent {
        TabContent {
            html: r#"<h2 id="100">1.0.0</h2>"#.to_owned(),
            navigation: NavigationList::from(vec![HeadingRecord {
                id: Some("100".to_owned()),
                label: "1.0.0".to_owned(),
            }]),
        }
    }

    #[test]
    fn test_page_structure() {
        let page = render_page("Changelog", &content());
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Changelog</title>"));
        assert!(page.contains("@media (min-width: 960px)"));
        assert!(page.contains(r##"<a href="#100">1.0.0</a>"##));
        assert!(page.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_page_title_escaped() {
        let page = render_page("A & B <log>", &content());
        assert!(page.contains("<title>A &amp; B &lt;log&gt;</title>"));
    }
}
