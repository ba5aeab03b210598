//! CLI error types

use std::path::PathBuf;
use thiserror::Error;

use crate::catalog::TranscodeError;
use crate::codec::{ConfigError, DecodeError, EncodeError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Unknown model '{0}' (run `taxcalc-cli models` for the list)")]
    UnknownModel(String),

    #[error("Unknown enum '{0}' (run `taxcalc-cli enums` for the list)")]
    UnknownEnum(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl From<TranscodeError> for CliError {
    fn from(err: TranscodeError) -> Self {
        match err {
            TranscodeError::Decode(e) => CliError::Decode(e),
            TranscodeError::Encode(e) => CliError::Encode(e),
        }
    }
}

impl CliError {
    /// Process exit code, following sysexits.h where one fits
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Decode(_) => 1,
            CliError::InvalidArgument(_) | CliError::UnknownModel(_) | CliError::UnknownEnum(_) => 2,
            CliError::Encode(_) => 70,
            CliError::FileReadError(..) => 74,
            CliError::Config(_) => 78,
        }
    }
}
