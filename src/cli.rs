//! Command-line argument parsing for the demo harness.

use clap::Parser;
use std::path::PathBuf;

/// An interactive mention editor demo
#[derive(Parser, Debug)]
#[command(name = "mentions", version, about = "An interactive mention editor demo")]
pub struct CliArgs {
    /// Editor options file (YAML)
    #[arg(short, long, value_name = "FILE")]
    pub options: Option<PathBuf>,

    /// Candidate list file (JSON array of records)
    #[arg(short, long, value_name = "FILE")]
    pub candidates: Option<PathBuf>,

    /// Initial editor text
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,
}
