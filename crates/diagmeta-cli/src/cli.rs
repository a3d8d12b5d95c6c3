//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Diagmeta: diagnostic metadata extraction, validation, and serialization
#[derive(Parser)]
#[command(name = "diagmeta")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Process metadata source files and write both artifacts
    Generate {
        /// Root directory to scan for *__meta.json files
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Output directory (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Base name of the config-schema file
        #[arg(short, long, default_value = "diagnostics")]
        filename: String,

        /// JSON array file with the ordered standard level markers
        /// (default: <PATH>/meta_types/levels.json)
        #[arg(short, long)]
        levels: Option<PathBuf>,

        /// JSON file with CMIP6 reference records for synonym validation
        #[arg(long)]
        cmip: Option<PathBuf>,

        /// JSON file with CF standard-name records for synonym validation
        #[arg(long)]
        cf: Option<PathBuf>,
    },

    /// Check a snapshot's embedded checksum
    Verify {
        /// Path to the snapshot JSON file
        #[arg(value_name = "SNAPSHOT")]
        file: PathBuf,
    },
}
