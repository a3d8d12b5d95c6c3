//! Verify command - recompute and compare a snapshot checksum.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use diagmeta::snapshot::verify_snapshot;
use tracing::info;

pub fn run(file: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(&file)?;
    verify_snapshot(&text)?;
    info!("Checksum verified for {}", file.display());
    println!(
        "{} {}",
        "Verified".green().bold(),
        file.display().to_string().white()
    );
    Ok(())
}
