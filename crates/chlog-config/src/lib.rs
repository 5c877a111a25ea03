//! Configuration management for chlog.
//!
//! Parses `chlog.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion
//! (`$VAR` or `${VAR}`). Referencing an unset variable is an error.
//!
//! Expanded fields:
//! - `tab.source`
//! - `tab.title`
//! - `markdown.heading_id_prefix`

mod expand;

use chlog_toc::DEFAULT_VERSION_PATTERN;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the changelog source file.
    pub source: Option<PathBuf>,
    /// Override the page title.
    pub title: Option<String>,
    /// Override the heading id prefix.
    pub heading_id_prefix: Option<String>,
    /// Override email mangling.
    pub mangle_emails: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "chlog.toml";

/// Default changelog file, relative to the config directory.
const DEFAULT_SOURCE: &str = "CHANGELOG.md";

/// Default page title.
const DEFAULT_TITLE: &str = "Changelog";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tab configuration (paths are relative strings from TOML).
    tab: TabConfigRaw,
    /// Markdown conversion configuration.
    pub markdown: MarkdownConfig,
    /// Table of contents configuration.
    pub toc: TocConfig,

    /// Resolved tab configuration (set after loading).
    #[serde(skip)]
    pub tab_resolved: TabSettings,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw tab configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct TabConfigRaw {
    source: Option<String>,
    title: Option<String>,
}

/// Resolved tab configuration with an absolute source path.
#[derive(Debug, Default)]
pub struct TabSettings {
    /// Changelog markdown file.
    pub source: PathBuf,
    /// Page title.
    pub title: String,
}

/// Markdown conversion configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Enable GitHub Flavored Markdown.
    pub gfm: bool,
    /// Assign slug ids to headings.
    pub heading_ids: bool,
    /// Prefix for generated heading ids.
    pub heading_id_prefix: String,
    /// Obfuscate email autolinks.
    pub mangle_emails: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            gfm: true,
            heading_ids: true,
            heading_id_prefix: String::new(),
            mangle_emails: true,
        }
    }
}

/// Table of contents configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TocConfig {
    /// Regex a heading must contain to be listed.
    pub pattern: String,
    /// Lowest heading level listed.
    pub min_level: u8,
    /// Highest heading level listed.
    pub max_level: u8,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_VERSION_PATTERN.to_owned(),
            min_level: 1,
            max_level: 6,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`tab.source`").
        field: String,
        /// Error message (e.g., "${`CHANGELOG_PATH`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `chlog.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source) = &settings.source {
            self.tab_resolved.source.clone_from(source);
        }
        if let Some(title) = &settings.title {
            self.tab_resolved.title.clone_from(title);
        }
        if let Some(prefix) = &settings.heading_id_prefix {
            self.markdown.heading_id_prefix.clone_from(prefix);
        }
        if let Some(mangle_emails) = settings.mangle_emails {
            self.markdown.mangle_emails = mangle_emails;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            tab: TabConfigRaw::default(),
            markdown: MarkdownConfig::default(),
            toc: TocConfig::default(),
            tab_resolved: TabSettings {
                source: base.join(DEFAULT_SOURCE),
                title: DEFAULT_TITLE.to_owned(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after applying CLI settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_tab()?;
        self.validate_toc()?;
        Ok(())
    }

    /// Validate tab configuration.
    fn validate_tab(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.tab_resolved.title, "tab.title")?;
        if self.tab_resolved.source.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "tab.source cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Validate table of contents configuration.
    fn validate_toc(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.toc.pattern, "toc.pattern")?;
        if let Err(e) = regex::Regex::new(&self.toc.pattern) {
            return Err(ConfigError::Validation(format!(
                "toc.pattern is not a valid regex: {e}"
            )));
        }

        let (min, max) = (self.toc.min_level, self.toc.max_level);
        if !(1..=6).contains(&min) || !(1..=6).contains(&max) {
            return Err(ConfigError::Validation(
                "toc.min_level and toc.max_level must be between 1 and 6".to_owned(),
            ));
        }
        if min > max {
            return Err(ConfigError::Validation(format!(
                "toc.min_level ({min}) cannot exceed toc.max_level ({max})"
            )));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref source) = self.tab.source {
            self.tab.source = Some(expand::expand_env(source, "tab.source")?);
        }
        if let Some(ref title) = self.tab.title {
            self.tab.title = Some(expand::expand_env(title, "tab.title")?);
        }
        self.markdown.heading_id_prefix = expand::expand_env(
            &self.markdown.heading_id_prefix,
            "markdown.heading_id_prefix",
        )?;
        Ok(())
    }

    /// Resolve the source path against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.tab_resolved = TabSettings {
            source: config_dir.join(self.tab.source.as_deref().unwrap_or(DEFAULT_SOURCE)),
            title: self
                .tab
                .title
                .clone()
                .unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
        };
    }
}
