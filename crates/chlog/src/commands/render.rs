//! `chlog render` command implementation.

use std::path::PathBuf;

use chlog_config::{CliSettings, Config};
use chlog_tab::{TabContent, render_page};
use clap::Args;

use super::{ConverterArgs, SourceArgs, build_tab, read_source, write_output};
use crate::error::CliError;
use crate::output::Output;
use crate::watch::watch_file;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Page title (overrides config).
    #[arg(long)]
    title: Option<String>,

    #[command(flatten)]
    converter: ConverterArgs,

    /// Write only the tab fragment instead of a full HTML document.
    #[arg(long)]
    fragment: bool,

    /// Re-render whenever the changelog changes.
    #[arg(short, long, requires = "output")]
    watch: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the changelog cannot be read,
    /// or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            title: self.title,
            ..self.converter.settings(self.source.file)
        };
        let config = Config::load(self.source.config.as_deref(), Some(&cli_settings))?;
        let mut tab = build_tab(&config)?;

        let source = config.tab_resolved.source.as_path();
        let title = config.tab_resolved.title.as_str();
        let output_path = self.output.as_deref();

        let markdown = read_source(source)?;
        let content = tab.render(&markdown);
        if !content.has_navigation() {
            output.warning("No version headings found; table of contents omitted");
        }
        write_output(output_path, &render_html(title, content, self.fragment))?;
        if let Some(path) = output_path {
            output.success(&format!("Rendered {} to {}", source.display(), path.display()));
        }

        if self.watch {
            output.info(&format!(
                "Watching {} for changes (Ctrl-C to stop)",
                source.display()
            ));
            watch_file(source, |markdown| {
                if tab.is_cached(markdown) {
                    tracing::debug!("Changelog content unchanged, skipping render");
                    return Ok(());
                }
                let html = render_html(title, tab.render(markdown), self.fragment);
                write_output(output_path, &html)?;
                output.success(&format!("Re-rendered {}", source.display()));
                Ok(())
            })?;
        }

        Ok(())
    }
}

/// Render either the full page or only the tab fragment.
fn render_html(title: &str, content: &TabContent, fragment: bool) -> String {
    if fragment {
        content.to_html()
    } else {
        render_page(title, content)
    }
}
