//! CLI module for the taxcalc-cli binary

pub mod commands;
pub mod error;
pub mod output;

pub use error::CliError;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect tax calculation API payloads
#[derive(Debug, Parser)]
#[command(name = "taxcalc-cli")]
#[command(about = "Decode and describe tax calculation API payloads")]
#[command(version)]
pub struct Cli {
    /// Log decoding steps (same as RUST_LOG=debug)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decode a JSON payload as MODEL and print it in normalized form
    Decode {
        /// Model name, e.g. TransactionModel (case-insensitive)
        model: String,

        /// Input file, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,

        /// Reject unknown enum tokens instead of dropping them
        #[arg(long)]
        strict: bool,

        /// TOML decode configuration
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// List models, or show the fields of one model
    Models { name: Option<String> },

    /// List enums, or show the members of one enum
    Enums { name: Option<String> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_decode_args() {
        let cli = Cli::parse_from([
            "taxcalc-cli",
            "decode",
            "TransactionModel",
            "payload.json",
            "--strict",
            "--compact",
        ]);
        match cli.command {
            Commands::Decode {
                model,
                input,
                strict,
                config,
                compact,
            } => {
                assert_eq!(model, "TransactionModel");
                assert_eq!(input, "payload.json");
                assert!(strict);
                assert!(compact);
                assert!(config.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_decode_reads_stdin_by_default() {
        let cli = Cli::parse_from(["taxcalc-cli", "-v", "decode", "AccountModel"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Decode { ref input, .. } if input == "-"));
    }
}
