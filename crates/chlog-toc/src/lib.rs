//! Version-heading table of contents.
//!
//! Given HTML produced by a markdown converter, this crate finds every
//! heading (`h1`..`h6`) whose text contains a three-part version number such
//! as `1.2.3` and returns them as a [`NavigationList`] of `{id, label}`
//! records in document order. Headings without a version number are dropped.
//!
//! Parsing is best effort: malformed or empty markup never fails, it only
//! yields fewer (or zero) records.
//!
//! # Example
//!
//! ```
//! use chlog_toc::find_version_headings;
//!
//! let html = r#"<h2 id="v1-0-0">Release 1.0.0</h2><h3 id="notes">Notes</h3>"#;
//! let toc = find_version_headings(html);
//!
//! assert_eq!(toc.len(), 1);
//! assert_eq!(toc[0].id.as_deref(), Some("v1-0-0"));
//! assert_eq!(toc[0].label, "Release 1.0.0");
//! ```

mod error;
mod filter;
mod navigation;
mod render;

pub use error::TocError;
pub use filter::{DEFAULT_VERSION_PATTERN, HeadingFilter, find_version_headings};
pub use navigation::{HeadingRecord, NavigationList};
pub use render::render_toc;
