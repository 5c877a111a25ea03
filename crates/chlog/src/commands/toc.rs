//! `chlog toc` command implementation.

use std::fmt::Write;

use chlog_config::Config;
use chlog_toc::{NavigationList, render_toc};
use clap::{Args, ValueEnum};

use super::{ConverterArgs, SourceArgs, build_tab, read_source, write_output};
use crate::error::CliError;
use crate::output::Output;

/// Output format for the table of contents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum TocFormat {
    /// One `label<TAB>#id` line per version.
    #[default]
    Text,
    /// JSON array of `{id, label}` records.
    Json,
    /// The `<ul>` fragment used in the rendered page.
    Html,
}

/// Arguments for the toc command.
#[derive(Args)]
pub(crate) struct TocArgs {
    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    converter: ConverterArgs,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = TocFormat::Text)]
    format: TocFormat,
}

impl TocArgs {
    /// Execute the toc command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the changelog cannot be read.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        write_output(None, &self.run()?)
    }

    /// Build the formatted table of contents.
    ///
    /// An empty list is still formatted (`[]` for JSON) so piped consumers
    /// always get valid output.
    fn run(self) -> Result<String, CliError> {
        let output = Output::new();

        let cli_settings = self.converter.settings(self.source.file);
        let config = Config::load(self.source.config.as_deref(), Some(&cli_settings))?;
        let mut tab = build_tab(&config)?;

        let markdown = read_source(&config.tab_resolved.source)?;
        let content = tab.render(&markdown);
        if !content.has_navigation() {
            output.warning("No version headings found");
        }

        format_toc(&content.navigation, self.format)
    }
}

/// Format a navigation list, always ending with a newline.
fn format_toc(list: &NavigationList, format: TocFormat) -> Result<String, CliError> {
    let mut out = match format {
        TocFormat::Text => {
            let mut out = String::new();
            for record in list {
                match record.href() {
                    Some(href) => writeln!(out, "{}\t{href}", record.label).unwrap(),
                    None => writeln!(out, "{}", record.label).unwrap(),
                }
            }
            return Ok(out);
        }
        TocFormat::Json => serde_json::to_string_pretty(list)?,
        TocFormat::Html => render_toc(list),
    };
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chlog_toc::HeadingRecord;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    fn sample() -> NavigationList {
        NavigationList::from(vec![
            HeadingRecord {
                id: Some("110".to_owned()),
                label: "1.1.0".to_owned(),
            },
            HeadingRecord {
                id: None,
                label: "1.0.0".to_owned(),
            },
        ])
    }

    #[test]
    fn test_format_text() {
        let text = format_toc(&sample(), TocFormat::Text).unwrap();
        assert_eq!(text, "1.1.0\t#110\n1.0.0\n");
    }

    #[test]
    fn test_format_json() {
        let json = format_toc(&sample(), TocFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["id"], "110");
        assert_eq!(value[0]["label"], "1.1.0");
        assert!(value[1]["id"].is_null());
    }

    #[test]
    fn test_format_html() {
        let html = format_toc(&sample(), TocFormat::Html).unwrap();
        assert_eq!(
            html,
            "<ul><li><a href=\"#110\">1.1.0</a></li><li><a href=\"#\">1.0.0</a></li></ul>\n"
        );
    }

    #[test]
    fn test_format_empty_list() {
        let empty = NavigationList::default();

        assert_eq!(format_toc(&empty, TocFormat::Text).unwrap(), "");
        assert_eq!(format_toc(&empty, TocFormat::Json).unwrap(), "[]\n");
        assert_eq!(format_toc(&empty, TocFormat::Html).unwrap(), "\n");
    }

    fn toc_args(
        dir: &Path,
        changelog: &str,
        format: TocFormat,
        id_prefix: Option<&str>,
    ) -> TocArgs {
        let source = dir.join("CHANGELOG.md");
        let config = dir.join("chlog.toml");
        std::fs::write(&source, changelog).unwrap();
        std::fs::write(&config, "").unwrap();

        TocArgs {
            source: SourceArgs {
                file: Some(source),
                config: Some(config),
            },
            converter: ConverterArgs {
                id_prefix: id_prefix.map(str::to_owned),
                no_mangle: false,
            },
            format,
        }
    }

    #[test]
    fn test_run_without_versions_prints_empty_json() {
        let dir = tempfile::tempdir().unwrap();
        let args = toc_args(
            dir.path(),
            "# Changelog\n\n## Unreleased\n",
            TocFormat::Json,
            None,
        );

        assert_eq!(args.run().unwrap(), "[]\n");
    }

    #[test]
    fn test_run_uses_id_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let args = toc_args(dir.path(), "## 1.0.0\n", TocFormat::Text, Some("v-"));

        assert_eq!(args.run().unwrap(), "1.0.0\t#v-100\n");
    }

    #[test]
    fn test_run_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let args = TocArgs {
            source: SourceArgs {
                file: Some(dir.path().join("missing.md")),
                config: Some(dir.path().join("chlog.toml")),
            },
            converter: ConverterArgs {
                id_prefix: None,
                no_mangle: false,
            },
            format: TocFormat::Text,
        };
        std::fs::write(dir.path().join("chlog.toml"), "").unwrap();

        assert!(matches!(args.run(), Err(CliError::Source { .. })));
    }
}
