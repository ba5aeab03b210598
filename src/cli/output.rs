//! Output formatting for CLI

use crate::catalog::{EnumEntry, ModelEntry};
use crate::codec::{DecodeError, FieldIssue};

/// Warnings collected while decoding
pub fn format_warnings(warnings: &[FieldIssue]) -> String {
    if warnings.is_empty() {
        return String::new();
    }

    let mut output = format!("\n⚠️  {} warning(s):\n", warnings.len());
    for warning in warnings {
        output.push_str(&format!("  - {}\n", warning));
    }
    output
}

/// Every issue of a failed decode, one per line
pub fn format_decode_error(error: &DecodeError) -> String {
    match error {
        DecodeError::Syntax(e) => format!("\n❌ Malformed JSON: {}\n", e),
        DecodeError::Invalid { model, issues } => {
            let mut output = format!("\n❌ Invalid {} ({} issue(s)):\n", model, issues.len());
            for issue in issues {
                output.push_str(&format!("  - {}\n", issue));
            }
            output
        }
    }
}

pub fn format_model_list(models: &[ModelEntry]) -> String {
    let mut output = format!("{} model(s):\n", models.len());
    let mut area = "";
    for entry in models {
        if entry.area != area {
            area = entry.area;
            output.push_str(&format!("\n{}:\n", area));
        }
        output.push_str(&format!(
            "  {} ({} field(s), {} required)\n",
            entry.name,
            entry.fields.len(),
            entry.required_fields().count()
        ));
    }
    output
}

/// One model's field table
pub fn format_model_fields(entry: &ModelEntry) -> String {
    let mut output = format!("{} ({}):\n", entry.name, entry.area);

    let key_width = entry
        .fields
        .iter()
        .map(|f| f.wire_key.len())
        .max()
        .unwrap_or_default();

    for field in entry.fields {
        let marker = if field.required { "*" } else { " " };
        output.push_str(&format!(
            "  {} {:<width$}  {}\n",
            marker,
            field.wire_key,
            field.rust_type,
            width = key_width
        ));
    }
    output.push_str("\n* required\n");
    output
}

pub fn format_enum_list(enums: &[EnumEntry]) -> String {
    let mut output = format!("{} enum(s):\n", enums.len());
    for entry in enums {
        output.push_str(&format!("  {} ({} member(s))\n", entry.name, entry.members().len()));
    }
    output
}

pub fn format_enum_members(entry: &EnumEntry) -> String {
    let mut output = format!("{}:\n", entry.name);
    for (name, code) in entry.members() {
        output.push_str(&format!("  {:>4}  {}\n", code, name));
    }
    output
}
