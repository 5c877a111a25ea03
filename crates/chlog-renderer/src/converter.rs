//! Markdown converter with explicit extension configuration.

use pulldown_cmark::{CowStr, Event, HeadingLevel, LinkType, Options, Parser, Tag, TagEnd};

use crate::mangle::mangle;
use crate::slug::HeadingSlugger;
use crate::util::escape_html;

/// Extensions applied by a [`MarkdownConverter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConverterOptions {
    /// Enable GitHub Flavored Markdown (tables, strikethrough, task lists, alerts).
    pub gfm: bool,
    /// Assign a unique slug `id` to every heading.
    pub heading_ids: bool,
    /// Prefix prepended to every generated heading id.
    pub heading_id_prefix: String,
    /// Obfuscate email autolinks with numeric character references.
    pub mangle_emails: bool,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            gfm: true,
            heading_ids: true,
            heading_id_prefix: String::new(),
            mangle_emails: true,
        }
    }
}

/// Converts markdown to HTML.
///
/// The converter is immutable after construction: every call to
/// [`convert`](Self::convert) starts from a fresh slugger, so heading ids are
/// unique within one document and identical across repeated conversions of
/// the same input.
#[derive(Clone, Debug, Default)]
pub struct MarkdownConverter {
    options: ConverterOptions,
}

impl MarkdownConverter {
    /// Create a converter with the given extensions.
    #[must_use]
    pub fn new(options: ConverterOptions) -> Self {
        Self { options }
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.options.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }

    /// Convert markdown text to HTML.
    #[must_use]
    pub fn convert(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.parser_options());
        let mut pass = EventPass::new(&self.options);
        for event in parser {
            pass.push(event);
        }
        let (events, heading_count) = pass.finish();

        let mut html = String::with_capacity(markdown.len() + markdown.len() / 2);
        pulldown_cmark::html::push_html(&mut html, events.into_iter());

        tracing::debug!(
            headings = heading_count,
            bytes = html.len(),
            "Converted markdown"
        );
        html
    }
}

/// Heading whose events are held back until its text (and so its id) is known.
struct PendingHeading<'a> {
    level: HeadingLevel,
    id: Option<CowStr<'a>>,
    classes: Vec<CowStr<'a>>,
    attrs: Vec<(CowStr<'a>, Option<CowStr<'a>>)>,
    text: String,
    events: Vec<Event<'a>>,
}

/// Rewrites the parser's event stream before HTML serialization.
struct EventPass<'a> {
    heading_ids: bool,
    mangle_emails: bool,
    slugger: HeadingSlugger,
    output: Vec<Event<'a>>,
    heading: Option<PendingHeading<'a>>,
    in_email_link: bool,
    heading_count: usize,
}

impl<'a> EventPass<'a> {
    fn new(options: &ConverterOptions) -> Self {
        Self {
            heading_ids: options.heading_ids,
            mangle_emails: options.mangle_emails,
            slugger: HeadingSlugger::new(options.heading_id_prefix.clone()),
            output: Vec::new(),
            heading: None,
            in_email_link: false,
            heading_count: 0,
        }
    }

    fn push(&mut self, event: Event<'a>) {
        match event {
            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            }) if self.heading_ids => {
                self.heading = Some(PendingHeading {
                    level,
                    id,
                    classes,
                    attrs,
                    text: String::new(),
                    events: Vec::new(),
                });
            }
            Event::End(TagEnd::Heading(_)) if self.heading.is_some() => self.finish_heading(),
            Event::Start(Tag::Link {
                link_type: LinkType::Email,
                dest_url,
                title,
                ..
            }) if self.mangle_emails => {
                let title_attr = if title.is_empty() {
                    String::new()
                } else {
                    format!(r#" title="{}""#, escape_html(&title))
                };
                self.in_email_link = true;
                self.emit(Event::InlineHtml(
                    format!(r#"<a href="mailto:{}"{title_attr}>"#, mangle(&dest_url)).into(),
                ));
            }
            Event::End(TagEnd::Link) if self.in_email_link => {
                self.in_email_link = false;
                self.emit(Event::InlineHtml(CowStr::Borrowed("</a>")));
            }
            Event::Text(text) => {
                self.record_text(&text);
                if self.in_email_link {
                    self.emit(Event::InlineHtml(mangle(&text).into()));
                } else {
                    self.emit(Event::Text(text));
                }
            }
            Event::Code(code) => {
                self.record_text(&code);
                self.emit(Event::Code(code));
            }
            Event::End(TagEnd::Heading(_)) => {
                self.heading_count += 1;
                self.emit(event);
            }
            other => self.emit(other),
        }
    }

    fn finish_heading(&mut self) {
        let Some(pending) = self.heading.take() else {
            return;
        };
        let id = pending
            .id
            .unwrap_or_else(|| self.slugger.slug(&pending.text).into());

        self.heading_count += 1;
        self.output.push(Event::Start(Tag::Heading {
            level: pending.level,
            id: Some(id),
            classes: pending.classes,
            attrs: pending.attrs,
        }));
        self.output.extend(pending.events);
        self.output.push(Event::End(TagEnd::Heading(pending.level)));
    }

    /// Accumulate plain heading text used to derive the slug.
    fn record_text(&mut self, text: &str) {
        if let Some(heading) = &mut self.heading {
            heading.text.push_str(text);
        }
    }

    fn emit(&mut self, event: Event<'a>) {
        match &mut self.heading {
            Some(heading) => heading.events.push(event),
            None => self.output.push(event),
        }
    }

    fn finish(self) -> (Vec<Event<'a>>, usize) {
        (self.output, self.heading_count)
    }
}
