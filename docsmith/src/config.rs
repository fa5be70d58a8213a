//! Build configuration from docsmith.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::doc::DEFAULT_DEPTH;
use crate::docs::DirectoryDoc;
use crate::engine::EngineOptions;

/// Name of the configuration file looked up in a documentation root
pub const CONFIG_FILE_NAME: &str = "docsmith.toml";

/// Output format of a build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Markdown text
    Markdown,
    /// HTML page or fragment
    Html,
}

impl Format {
    /// Guess the format from an output file extension
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("md") | Some("markdown") => Some(Format::Markdown),
            Some("html") | Some("htm") => Some(Format::Html),
            _ => None,
        }
    }

    /// Extension written when the output path has none
    pub fn extension(self) -> &'static str {
        match self {
            Format::Markdown => "md",
            Format::Html => "html",
        }
    }
}

/// Main configuration from docsmith.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Title of the root document (directory name when unset)
    pub title: Option<String>,

    /// Heading depth of the root document
    pub depth: u32,

    /// Default output file, relative to the documentation root
    pub output: Option<PathBuf>,

    /// Default output format
    pub format: Option<Format>,

    /// HTML output settings
    pub html: HtmlConfig,

    /// Source discovery settings
    pub source: SourceConfig,
}

/// HTML output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
    /// Emit a complete page instead of a fragment
    pub standalone: bool,

    /// CSS file embedded in standalone pages, relative to the documentation root
    pub stylesheet: Option<PathBuf>,
}

/// Source discovery settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// How many levels of sub-directories to include
    pub max_depth: usize,

    /// Render CSV files as tables
    pub include_tables: bool,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            title: None,
            depth: DEFAULT_DEPTH,
            output: None,
            format: None,
            html: HtmlConfig::default(),
            source: SourceConfig::default(),
        }
    }
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            standalone: true,
            stylesheet: None,
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            max_depth: crate::docs::DEFAULT_MAX_DEPTH,
            include_tables: true,
        }
    }
}

impl DocsConfig {
    /// Load configuration from a docsmith.toml file
    ///
    /// # Parameters
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(DocsConfig)` - Successfully loaded configuration
    /// * `Err(ConfigError)` - Error reading or parsing the configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `docsmith.toml` from `root`, falling back to defaults when it is absent
    pub fn load_or_default(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        if path.is_file() {
            log::info!("Loading configuration from {}", path.display());
            Self::load(&path)
        } else {
            log::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, root.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved configuration
    /// * `Err(ConfigError)` - Error serializing or writing the configuration file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;

        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Engine options, reading the stylesheet relative to `root`
    pub fn engine_options(&self, root: &Path) -> Result<EngineOptions, ConfigError> {
        let stylesheet = match &self.html.stylesheet {
            Some(relative) => {
                let path = root.join(relative);
                let css = fs::read_to_string(&path)
                    .map_err(|source| ConfigError::Io { path, source })?;
                Some(css)
            }
            None => None,
        };

        Ok(EngineOptions {
            standalone: self.html.standalone,
            stylesheet,
        })
    }

    /// Directory document configured by the `title` and `[source]` settings
    pub fn directory_doc(&self) -> DirectoryDoc {
        let doc = DirectoryDoc::new()
            .with_max_depth(self.source.max_depth)
            .with_tables(self.source.include_tables);
        match &self.title {
            Some(title) => doc.with_title(title.clone()),
            None => doc,
        }
    }
}

/// Errors that can occur when loading or saving configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error when reading or writing a file
    #[error("IO error for {path}: {source}", path = .path.display())]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Error parsing TOML
    #[error("TOML parse error in {path}: {source}", path = .path.display())]
    Parse {
        /// Configuration file
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: toml::de::Error,
    },

    /// Error serializing to TOML
    #[error("TOML serialize error: {0}")]
    Serialize(#[source] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_roundtrip() {
        let config = DocsConfig {
            title: Some("Operator Manual".to_string()),
            depth: 2,
            output: Some(PathBuf::from("build/manual.html")),
            format: Some(Format::Html),
            html: HtmlConfig {
                standalone: false,
                stylesheet: Some(PathBuf::from("theme.css")),
            },
            source: SourceConfig {
                max_depth: 3,
                include_tables: false,
            },
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: DocsConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_parse_partial_toml_uses_defaults() {
        let toml_content = r#"
title = "Handbook"
format = "markdown"

[html]
stylesheet = "style.css"
"#;

        let config: DocsConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.title.as_deref(), Some("Handbook"));
        assert_eq!(config.depth, DEFAULT_DEPTH);
        assert_eq!(config.format, Some(Format::Markdown));
        assert!(config.html.standalone);
        assert_eq!(config.html.stylesheet, Some(PathBuf::from("style.css")));
        assert!(config.source.include_tables);
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = DocsConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config, DocsConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let config = DocsConfig {
            title: Some("Saved".to_string()),
            ..DocsConfig::default()
        };

        config.save(&path).unwrap();
        assert_eq!(DocsConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "depth = \"deep\"").unwrap();
        assert!(matches!(
            DocsConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_engine_options_reads_stylesheet() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("theme.css"), "h1 { color: teal; }").unwrap();
        let mut config = DocsConfig::default();
        config.html.stylesheet = Some(PathBuf::from("theme.css"));

        let options = config.engine_options(dir.path()).unwrap();
        assert!(options.standalone);
        assert_eq!(options.stylesheet.as_deref(), Some("h1 { color: teal; }"));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            Format::from_extension(Path::new("out.htm")),
            Some(Format::Html)
        );
        assert_eq!(
            Format::from_extension(Path::new("README.md")),
            Some(Format::Markdown)
        );
        assert_eq!(Format::from_extension(Path::new("out.pdf")), None);
    }
}
