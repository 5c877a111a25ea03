//! CLI command implementations.

pub(crate) mod render;
pub(crate) mod toc;

use std::io::Write;
use std::path::{Path, PathBuf};

use chlog_config::{CliSettings, Config};
use chlog_renderer::ConverterOptions;
use chlog_tab::{ChangelogTab, TabConfig};
use clap::Args;

use crate::error::CliError;

pub(crate) use render::RenderArgs;
pub(crate) use toc::TocArgs;

/// Source selection shared by all commands.
#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Changelog markdown file (overrides config; default: CHANGELOG.md).
    file: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover chlog.toml).
    #[arg(short, long, env = "CHLOG_CONFIG")]
    config: Option<PathBuf>,
}

/// Heading id and email settings shared by every command that renders markdown.
///
/// `toc` takes the same flags as `render` so the printed anchors match the
/// rendered page.
#[derive(Args)]
pub(crate) struct ConverterArgs {
    /// Prefix for generated heading ids (overrides config).
    #[arg(long)]
    id_prefix: Option<String>,

    /// Leave email addresses unobfuscated.
    #[arg(long)]
    no_mangle: bool,
}

impl ConverterArgs {
    /// CLI settings for these flags plus the source file.
    pub(crate) fn settings(self, source: Option<PathBuf>) -> CliSettings {
        CliSettings {
            source,
            heading_id_prefix: self.id_prefix,
            mangle_emails: self.no_mangle.then_some(false),
            ..CliSettings::default()
        }
    }
}

/// Build a tab from the loaded configuration.
pub(crate) fn build_tab(config: &Config) -> Result<ChangelogTab, CliError> {
    let tab_config = TabConfig {
        converter: ConverterOptions {
            gfm: config.markdown.gfm,
            heading_ids: config.markdown.heading_ids,
            heading_id_prefix: config.markdown.heading_id_prefix.clone(),
            mangle_emails: config.markdown.mangle_emails,
        },
        version_pattern: config.toc.pattern.clone(),
        min_level: config.toc.min_level,
        max_level: config.toc.max_level,
    };
    Ok(ChangelogTab::new(tab_config)?)
}

/// Read the changelog source file.
pub(crate) fn read_source(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Source {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `content` to `path`, or to stdout when no path is given.
pub(crate) fn write_output(path: Option<&Path>, content: &str) -> Result<(), CliError> {
    match path {
        Some(path) => std::fs::write(path, content)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
