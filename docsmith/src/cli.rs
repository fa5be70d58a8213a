//! Command-line interface definitions for docsmith

use clap::{Parser, Subcommand, ValueEnum};
use docsmith::config::Format;
use std::path::PathBuf;

/// Output format for the build command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// A single markdown file
    Markdown,
    /// HTML (standalone page unless --fragment is given)
    Html,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Markdown => Format::Markdown,
            OutputFormat::Html => Format::Html,
        }
    }
}

/// CLI structure for the docsmith application
#[derive(Parser)]
#[command(name = "docsmith")]
#[command(version)]
#[command(about = "Build markdown and HTML documentation from document trees", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for docsmith
#[derive(Subcommand)]
pub enum Commands {
    /// Render a documentation directory or a single markdown file
    Build {
        /// Documentation directory or markdown file (defaults to current directory)
        #[arg(value_name = "PATH", default_value = ".")]
        input: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (detected from the output extension when omitted)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Heading depth of the root document
        #[arg(long)]
        depth: Option<u32>,

        /// Emit an HTML fragment instead of a complete page
        #[arg(long)]
        fragment: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Write a default docsmith.toml
    Init {
        /// Directory to initialize (defaults to current directory)
        path: Option<PathBuf>,

        /// Documentation title
        #[arg(short, long)]
        title: Option<String>,

        /// Overwrite an existing docsmith.toml
        #[arg(short, long)]
        force: bool,
    },

    /// Print a markdown heading
    Title {
        /// Heading text
        text: String,

        /// Heading depth
        #[arg(short, long, default_value_t = 1)]
        depth: u32,
    },
}
