//! Decode/encode error taxonomy

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// JSON type of a wire value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WireType {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl WireType {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        };
        f.write_str(name)
    }
}

/// What went wrong at one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum IssueKind {
    /// A required key is absent or `null`
    MissingRequired { model: &'static str },
    /// The JSON type does not match the declared field type
    TypeMismatch {
        expected: &'static str,
        found: WireType,
    },
    /// Right JSON type, unusable value (fractional integer, unparseable date, ...)
    InvalidValue {
        expected: &'static str,
        reason: String,
    },
    /// A name or code not in the enum's member list
    UnknownEnumToken {
        enum_name: &'static str,
        token: String,
    },
    /// A key the model does not declare (only reported on request)
    UnknownField,
    /// Nesting deeper than the configured limit
    DepthExceeded { max: usize },
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired { model } => write!(f, "missing required field of {}", model),
            Self::TypeMismatch { expected, found } => {
                write!(f, "expected {}, found {}", expected, found)
            }
            Self::InvalidValue { expected, reason } => write!(f, "invalid {}: {}", expected, reason),
            Self::UnknownEnumToken { enum_name, token } => {
                write!(f, "unknown {} token '{}'", enum_name, token)
            }
            Self::UnknownField => f.write_str("unrecognized field"),
            Self::DepthExceeded { max } => write!(f, "nesting deeper than {} levels", max),
        }
    }
}

/// One issue and the JSON path it was found at
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Dotted path with array indices, e.g. `lines[0].amount`. Empty for the document root.
    pub path: String,
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl FieldIssue {
    pub fn is_missing_required(&self) -> bool {
        matches!(self.kind, IssueKind::MissingRequired { .. })
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "<root>: {}", self.kind)
        } else {
            write!(f, "{}: {}", self.path, self.kind)
        }
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error returned when a payload cannot be decoded
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Malformed JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    #[error("Invalid {model} ({} issue(s)): {}", .issues.len(), join_issues(.issues))]
    Invalid {
        model: &'static str,
        issues: Vec<FieldIssue>,
    },
}

impl DecodeError {
    /// Every issue found, empty for syntax errors
    pub fn issues(&self) -> &[FieldIssue] {
        match self {
            Self::Syntax(_) => &[],
            Self::Invalid { issues, .. } => issues,
        }
    }

    /// The first issue recorded at `path`
    pub fn issue_at(&self, path: &str) -> Option<&FieldIssue> {
        self.issues().iter().find(|issue| issue.path == path)
    }

    /// Paths of required fields that were missing
    pub fn missing_fields(&self) -> Vec<&str> {
        self.issues()
            .iter()
            .filter(|issue| issue.is_missing_required())
            .map(|issue| issue.path.as_str())
            .collect()
    }
}

/// Error returned when a value cannot be written as JSON
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// NaN or an infinity; JSON has no form for either
    #[error("Non-finite number at '{path}'")]
    NonFinite { path: String },
}
