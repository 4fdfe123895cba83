//! debinfo - print the metadata of Debian binary packages

mod cli;
mod render;

use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let packages = cli
        .files
        .iter()
        .map(|path| {
            debinfo_core::parse_deb(path)
                .with_context(|| format!("Failed to read package {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(count = packages.len(), "parsed packages");

    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => render::write_text(&mut out, &packages, cli.quiet, color)?,
        OutputFormat::Json => render::write_json(&mut out, &packages)?,
    }
    out.flush()?;

    Ok(())
}
