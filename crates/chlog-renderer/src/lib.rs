//! Markdown to HTML conversion for changelogs.
//!
//! This crate provides a [`MarkdownConverter`] that turns markdown into HTML
//! where every heading carries a unique, deterministic `id` attribute derived
//! from its text, and where email autolinks are obfuscated with character
//! references.
//!
//! Extensions are configured per converter through [`ConverterOptions`];
//! there is no process-wide registration.
//!
//! # Example
//!
//! ```
//! use chlog_renderer::{ConverterOptions, MarkdownConverter};
//!
//! let converter = MarkdownConverter::new(ConverterOptions::default());
//! let html = converter.convert("## Release 1.2.0\n\nFixes.");
//! assert!(html.contains(r#"<h2 id="release-120">Release 1.2.0</h2>"#));
//! ```

mod converter;
mod mangle;
mod slug;
mod util;

pub use converter::{ConverterOptions, MarkdownConverter};
pub use mangle::mangle;
pub use slug::{HeadingSlugger, slugify};
pub use util::escape_html;
