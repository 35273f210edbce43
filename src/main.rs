//! ansiart - CLI entry point

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::clean::CleanArgs;

/// Log to stderr. `ANSIART_LOG` takes a filter directive; otherwise
/// `--verbose` selects debug and the default is warnings only.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env("ANSIART_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::View {
            file,
            width,
            plain,
            fit,
        } => commands::view::handle(&file, width, plain, fit, &config),
        Commands::Clean {
            files,
            output,
            no_optimize,
            no_reset,
            dry_run,
            json,
        } => {
            let args = CleanArgs {
                output,
                no_optimize,
                no_reset,
                dry_run,
                json,
            };
            commands::clean::handle(&files, &args, &config)
        }
        Commands::Info { file, json } => commands::info::handle(&file, json, &config),
        Commands::Convert {
            file,
            to,
            output,
            width,
        } => commands::convert::handle(&file, to, &output, width, &config),
    }
}
