//! `models` and `enums` command implementations

use crate::catalog::{enums, find_enum, find_model, models};
use crate::cli::error::CliError;
use crate::cli::output::{format_enum_list, format_enum_members, format_model_fields, format_model_list};

/// List every model, or print one model's field table
pub fn handle_models(name: Option<&str>) -> Result<(), CliError> {
    let output = match name {
        Some(name) => {
            let entry = find_model(name).ok_or_else(|| CliError::UnknownModel(name.to_string()))?;
            format_model_fields(&entry)
        }
        None => format_model_list(&models()),
    };
    print!("{}", output);
    Ok(())
}

/// List every enum, or print one enum's members
pub fn handle_enums(name: Option<&str>) -> Result<(), CliError> {
    let output = match name {
        Some(name) => {
            let entry = find_enum(name).ok_or_else(|| CliError::UnknownEnum(name.to_string()))?;
            format_enum_members(&entry)
        }
        None => format_enum_list(&enums()),
    };
    print!("{}", output);
    Ok(())
}
