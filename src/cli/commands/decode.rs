//! Decode command implementation

use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::catalog::find_model;
use crate::cli::error::CliError;
use crate::cli::output::{format_decode_error, format_warnings};
use crate::codec::{DecodeConfig, Decoded, EnumPolicy, encode, encode_pretty};

#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    /// Reject unknown enum tokens in optional fields
    pub strict: bool,
    /// TOML file with a decode configuration
    pub config: Option<PathBuf>,
    /// Print single-line JSON
    pub compact: bool,
}

impl DecodeOptions {
    fn decode_config(&self) -> Result<DecodeConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => DecodeConfig::load(path)?,
            None => DecodeConfig::default(),
        };
        if self.strict {
            config.enum_policy = EnumPolicy::Strict;
        }
        Ok(config)
    }
}

/// Load input content from file or stdin
fn load_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        Ok(content)
    } else {
        let path = Path::new(input);
        std::fs::read_to_string(path).map_err(|e| CliError::FileReadError(path.to_path_buf(), e.to_string()))
    }
}

/// Decode `content` as `model` and return the normalized JSON
pub fn run_decode(model: &str, content: &str, options: &DecodeOptions) -> Result<Decoded<Value>, CliError> {
    let entry = find_model(model).ok_or_else(|| CliError::UnknownModel(model.to_string()))?;
    let config = options.decode_config()?;
    debug!(model = entry.name, ?config, "decoding input");
    Ok(entry.transcode(content, &config)?)
}

/// Handle the decode command
pub fn handle_decode(model: &str, input: &str, options: &DecodeOptions) -> Result<(), CliError> {
    let content = load_input(input)?;

    let decoded = match run_decode(model, &content, options) {
        Ok(decoded) => decoded,
        Err(CliError::Decode(err)) => {
            eprint!("{}", format_decode_error(&err));
            return Err(CliError::Decode(err));
        }
        Err(other) => return Err(other),
    };

    let json = if options.compact {
        encode(&decoded.value)?
    } else {
        encode_pretty(&decoded.value)?
    };
    println!("{}", json);
    eprint!("{}", format_warnings(&decoded.warnings));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_run_decode_normalizes() {
        let decoded = run_decode(
            "documentstatusmodel",
            r#"{"id": 3, "status": 3, "extra": true}"#,
            &DecodeOptions::default(),
        )
        .unwrap();
        assert_eq!(decoded.value, serde_json::json!({"id": 3, "status": "Committed"}));
    }

    #[test]
    fn test_strict_flag_rejects_unknown_token() {
        let json = r#"{"id": 3, "status": "Archived"}"#;

        let lenient = run_decode("DocumentStatusModel", json, &DecodeOptions::default()).unwrap();
        assert_eq!(lenient.warnings.len(), 1);

        let strict = DecodeOptions {
            strict: true,
            ..Default::default()
        };
        let err = run_decode("DocumentStatusModel", json, &strict).unwrap_err();
        assert!(matches!(err, CliError::Decode(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_unknown_model() {
        let err = run_decode("NoSuchModel", "{}", &DecodeOptions::default()).unwrap_err();
        assert!(matches!(err, CliError::UnknownModel(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_config_file_is_applied() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "reportUnknownFields = true").unwrap();

        let options = DecodeOptions {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let decoded = run_decode("PingResultModel", r#"{"authenticated": false, "extra": 1}"#, &options).unwrap();
        assert_eq!(decoded.warnings.len(), 1);
        assert_eq!(decoded.warnings[0].path, "extra");
    }

    #[test]
    fn test_missing_input_file() {
        let err = load_input("/nonexistent/payload.json").unwrap_err();
        assert!(matches!(err, CliError::FileReadError(..)));
    }
}
