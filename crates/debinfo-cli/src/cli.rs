use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "debinfo")]
#[command(author, version, about = "debinfo - inspect Debian package metadata")]
#[command(after_help = "Examples:\n  \
  debinfo hello_2.10-3_amd64.deb            show package metadata\n  \
  debinfo --format json pool/*.deb          emit a JSON array\n  \
  RUST_LOG=debinfo_core=trace debinfo a.deb trace every archive member")]
pub(crate) struct Cli {
    /// Package files to inspect
    #[arg(value_name = "FILE", required = true)]
    pub(crate) files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, env = "DEBINFO_FORMAT")]
    pub(crate) format: OutputFormat,

    /// Log archive walking at debug level (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub(crate) verbose: bool,

    /// Omit the per-package heading in text output
    #[arg(short, long)]
    pub(crate) quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Aligned `label  value` lines
    Text,
    /// Pretty-printed JSON
    Json,
}

impl Cli {
    /// Filter used when RUST_LOG is unset.
    pub(crate) fn default_log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
