//! Error types shared by documents, engines and configuration

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while describing or rendering a document
#[derive(Error, Debug)]
pub enum DocError {
    /// Reading a source file failed
    #[error("IO error for {path}: {source}", path = .path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A CSV table could not be parsed
    #[error("CSV error in {path}: {source}", path = .path.display())]
    Csv {
        /// CSV file being parsed
        path: PathBuf,
        /// Underlying CSV error
        #[source]
        source: csv::Error,
    },

    /// Walking a documentation directory failed
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// The engine could not render a document
    #[error("Render error: {0}")]
    Render(String),

    /// Loading configuration failed
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl DocError {
    /// Wrap an IO error with the path that caused it
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DocError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, DocError>;
