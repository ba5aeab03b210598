//! taxcalc-cli entry point

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use taxcalc_sdk::cli::commands::{DecodeOptions, handle_decode, handle_enums, handle_models};
use taxcalc_sdk::cli::{Cli, CliError, Commands};

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install the log subscriber")
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Decode {
            model,
            input,
            strict,
            config,
            compact,
        } => {
            let options = DecodeOptions {
                strict,
                config,
                compact,
            };
            handle_decode(&model, &input, &options)
        }
        Commands::Models { name } => handle_models(name.as_deref()),
        Commands::Enums { name } => handle_enums(name.as_deref()),
    }
}

/// Setup failures surface through anyhow; command failures map to exit codes.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    if let Err(err) = run(cli) {
        // Decode failures were already printed issue by issue
        if !matches!(err, CliError::Decode(_)) {
            eprintln!("Error: {}", err);
        }
        std::process::exit(err.exit_code());
    }
    Ok(())
}
