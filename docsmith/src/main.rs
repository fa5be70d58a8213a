//! docsmith - documentation build tool
//!
//! Renders directories of markdown files, or single files, into one
//! markdown or HTML document.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(missing_docs))]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, OutputFormat};
use docsmith::build;
use docsmith::config::{DocsConfig, Format, CONFIG_FILE_NAME};
use docsmith::markdown::{Markdown, Markdownable};
use std::path::{Path, PathBuf};

/// Main entry point for the docsmith CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            input,
            output,
            format,
            depth,
            fragment,
            verbose,
        } => {
            init_logging(verbose);
            handle_build_command(input, output, format, depth, fragment)?;
        }

        Commands::Init { path, title, force } => {
            init_logging(false);
            handle_init_command(path, title, force)?;
        }

        Commands::Title { text, depth } => {
            println!("{}", Markdown::title(text, depth).to_markdown());
        }
    }

    Ok(())
}

/// Initialize env_logger, raising the level to info when verbose
fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();
}

/// Pick the output format: flag, then output extension, then config, then markdown
fn resolve_format(
    flag: Option<OutputFormat>,
    output: Option<&Path>,
    config: &DocsConfig,
) -> Result<Format> {
    if let Some(format) = flag {
        return Ok(format.into());
    }

    if let Some(path) = output {
        if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
            return Format::from_extension(path).with_context(|| {
                format!(
                    "Unknown output format for extension '.{}'. Supported: .md, .html\nUse --format to specify explicitly.",
                    ext
                )
            });
        }
    }

    Ok(config.format.unwrap_or(Format::Markdown))
}

/// Append the format's extension to an output path that has none
fn with_default_extension(mut path: PathBuf, format: Format) -> PathBuf {
    if path.extension().is_none() {
        path.set_extension(format.extension());
    }
    path
}

/// Handle the build command
fn handle_build_command(
    input: PathBuf,
    output: Option<PathBuf>,
    format_arg: Option<OutputFormat>,
    depth: Option<u32>,
    fragment: bool,
) -> Result<()> {
    let root = build::source_root(&input).to_path_buf();
    let mut config = DocsConfig::load_or_default(&root)
        .with_context(|| format!("Failed to load configuration from {}", root.display()))?;

    if let Some(depth) = depth {
        config.depth = depth;
    }
    if fragment {
        config.html.standalone = false;
    }

    let output = output.or_else(|| config.output.as_ref().map(|p| root.join(p)));
    let format = resolve_format(format_arg, output.as_deref(), &config)?;
    let output = output.map(|path| with_default_extension(path, format));

    log::info!("Input: {}", input.display());
    log::info!("Format: {:?}", format);

    let rendered = build::render(&input, &config, format)
        .with_context(|| format!("Failed to build documentation from {}", input.display()))?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {}", parent.display()))?;
            }
            std::fs::write(&path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("✓ Successfully wrote: {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Handle the init command
fn handle_init_command(path: Option<PathBuf>, title: Option<String>, force: bool) -> Result<()> {
    let target_path = path.unwrap_or_else(|| PathBuf::from("."));

    if !target_path.exists() {
        std::fs::create_dir_all(&target_path)
            .with_context(|| format!("Failed to create directory {}", target_path.display()))?;
    }

    let config_path = target_path.join(CONFIG_FILE_NAME);
    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it",
            config_path.display()
        );
    }

    let config = DocsConfig {
        title,
        ..DocsConfig::default()
    };
    config
        .save(&config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("✓ Created {}", config_path.display());
    println!("\nNext steps:");
    println!("  1. Add markdown files next to {}", CONFIG_FILE_NAME);
    println!("  2. Run 'docsmith build -o docs.html' to render them");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_flag_overrides_extension() {
        let config = DocsConfig::default();
        let format = resolve_format(
            Some(OutputFormat::Html),
            Some(Path::new("out.md")),
            &config,
        )
        .unwrap();
        assert_eq!(format, Format::Html);
    }

    #[test]
    fn test_format_from_output_extension() {
        let config = DocsConfig {
            format: Some(Format::Markdown),
            ..DocsConfig::default()
        };
        let format = resolve_format(None, Some(Path::new("site/index.htm")), &config).unwrap();
        assert_eq!(format, Format::Html);
    }

    #[test]
    fn test_unknown_extension_is_an_error() {
        let config = DocsConfig::default();
        let err = resolve_format(None, Some(Path::new("notes.txt")), &config).unwrap_err();
        assert!(err.to_string().contains("'.txt'"));
    }

    #[test]
    fn test_config_format_without_output() {
        let config = DocsConfig {
            format: Some(Format::Html),
            ..DocsConfig::default()
        };
        assert_eq!(resolve_format(None, None, &config).unwrap(), Format::Html);

        let extensionless = resolve_format(None, Some(Path::new("build/docs")), &config).unwrap();
        assert_eq!(extensionless, Format::Html);
    }

    #[test]
    fn test_markdown_is_the_default() {
        let config = DocsConfig::default();
        assert_eq!(resolve_format(None, None, &config).unwrap(), Format::Markdown);
    }

    #[test]
    fn test_extension_added_only_when_missing() {
        assert_eq!(
            with_default_extension(PathBuf::from("build/docs"), Format::Html),
            PathBuf::from("build/docs.html")
        );
        assert_eq!(
            with_default_extension(PathBuf::from("notes.markdown"), Format::Html),
            PathBuf::from("notes.markdown")
        );
    }
}
