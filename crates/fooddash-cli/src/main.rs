//! fooddash CLI - prepare and summarize food-delivery datasets.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Inspect { file, json } => commands::inspect::run(file, json, cli.verbose),

        Commands::Prepare {
            file,
            output,
            format,
        } => commands::prepare::run(file, output, format, cli.verbose),

        Commands::Company {
            file,
            filters,
            json,
        } => commands::company::run(file, filters, json, cli.verbose),

        Commands::Couriers {
            file,
            filters,
            top,
            json,
        } => commands::couriers::run(file, filters, top, json, cli.verbose),

        Commands::Restaurants {
            file,
            filters,
            json,
        } => commands::restaurants::run(file, filters, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so JSON on stdout stays clean. `RUST_LOG` wins when set.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
