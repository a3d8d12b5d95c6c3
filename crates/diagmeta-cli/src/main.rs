//! diagmeta CLI - diagnostic metadata pipeline driver.

mod cli;
mod commands;
mod discovery;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            path,
            output,
            filename,
            levels,
            cmip,
            cf,
        } => commands::generate::run(path, output, filename, levels, cmip, cf, cli.verbose),

        Commands::Verify { file } => commands::verify::run(file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
