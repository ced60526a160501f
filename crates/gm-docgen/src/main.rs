//! Writes the search tables of the `gm` documentation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gm_docgen::{generate, Catalog, DocgenConfig};
use gm_search::SectionKind;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gm-docgen", about = "Generates the documentation search tables of gm")]
struct Cli {
    /// JSON configuration file, overridden by the other options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory receiving the search scripts
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Section to emit (repeatable): all, classes, files or functions
    #[arg(short, long = "section", value_parser = parse_section)]
    sections: Vec<SectionKind>,

    /// Prefix of every anchor, relative to the output directory
    #[arg(long)]
    html_root: Option<String>,

    /// Log debug messages
    #[arg(short, long)]
    verbose: bool,
}

fn parse_section(name: &str) -> Result<SectionKind, String> {
    SectionKind::from_name(name).ok_or_else(|| {
        let names: Vec<_> = SectionKind::ALL.iter().map(SectionKind::name).collect();
        format!("unknown section `{name}`, expected one of {}", names.join(", "))
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let mut config = match &cli.config {
        Some(file) => DocgenConfig::load(file)
            .with_context(|| format!("Failed to load configuration {}", file.display()))?,
        None => DocgenConfig::default(),
    };
    if let Some(output) = cli.output {
        config = config.with_output(output);
    }
    if !cli.sections.is_empty() {
        config = config.with_sections(cli.sections);
    }
    if let Some(html_root) = cli.html_root {
        config = config.with_html_root(html_root);
    }

    let paths = generate(&config, &Catalog::gm())
        .with_context(|| format!("Failed to write {}", config.output.display()))?;
    println!("{} files written to {}", paths.len(), config.output.display());

    Ok(())
}
