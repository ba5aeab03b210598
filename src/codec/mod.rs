//! JSON wire codec shared by every model and enum
//!
//! Every type in [`crate::models`] follows one contract:
//! - Decoding walks the payload once and collects every issue with its JSON path
//! - Required fields must be present; optional fields decode to `None`
//! - Encoding emits present fields only, under their declared wire keys
//! - Keys a model does not declare are ignored
//!
//! Models and enums get their implementations from the `wire_model!` and
//! `wire_enum!` macros, so the mapping tables are plain generated code.

#[macro_use]
mod macros;

mod config;
mod context;
mod enums;
mod error;
mod primitives;
mod timestamp;

#[cfg(feature = "config-file")]
pub use config::ConfigError;
pub use config::{DecodeConfig, DecodeConfigBuilder, EnumPolicy};
pub use context::{DecodeContext, ObjectReader, decode_object};
pub use enums::{UnknownEnumToken, WireEnum};
pub(crate) use enums::{deserialize_enum, enum_from_wire};
pub use error::{DecodeError, EncodeError, FieldIssue, IssueKind, WireType};
pub use timestamp::Timestamp;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// A type that can be read from a JSON value
///
/// Implementations record every problem on the [`DecodeContext`] and return
/// `None` when the value cannot be produced. They never stop at the first
/// problem inside nested structures.
pub trait FromWire: Sized {
    /// Name used for this type in issue messages (e.g. `"integer"`, `"CompanyModel"`)
    const EXPECTED: &'static str;

    fn from_wire(value: &Value, cx: &mut DecodeContext) -> Option<Self>;

    /// Path of the first number JSON cannot carry (NaN or infinite), relative to this value
    fn non_finite_path(&self) -> Option<String> {
        None
    }
}

/// How a struct field is read from its parent object
///
/// `Option<T>` is an optional slot: an absent key (or `null`) decodes to
/// `None` and `None` is never written. Every other slot type is required.
pub trait WireSlot: Sized {
    const REQUIRED: bool;

    /// Read the slot under `key`. `None` means decoding failed and an issue was recorded.
    fn read(reader: &mut ObjectReader<'_>, key: &'static str) -> Option<Self>;

    /// Whether the slot is skipped when encoding
    fn is_absent(&self) -> bool {
        false
    }

    /// [`FromWire::non_finite_path`] for the slot's value; absent slots have none
    fn non_finite_path(&self) -> Option<String>;
}

impl<T: FromWire> WireSlot for Option<T> {
    const REQUIRED: bool = false;

    fn read(reader: &mut ObjectReader<'_>, key: &'static str) -> Option<Self> {
        reader.optional(key)
    }

    fn is_absent(&self) -> bool {
        self.is_none()
    }

    fn non_finite_path(&self) -> Option<String> {
        self.as_ref().and_then(FromWire::non_finite_path)
    }
}

impl<T: FromWire> WireSlot for Vec<T> {
    const REQUIRED: bool = true;

    fn read(reader: &mut ObjectReader<'_>, key: &'static str) -> Option<Self> {
        reader.required(key)
    }

    fn non_finite_path(&self) -> Option<String> {
        <Self as FromWire>::non_finite_path(self)
    }
}

/// Static description of one model field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Rust field name
    pub name: &'static str,
    /// JSON key on the wire (case-sensitive)
    pub wire_key: &'static str,
    /// Declared Rust type, as written in the model definition
    pub rust_type: &'static str,
    /// Whether the key must be present for a decode to succeed
    pub required: bool,
}

/// A request or response body with a fixed field table
pub trait WireModel: FromWire + Serialize {
    const MODEL_NAME: &'static str;
    const FIELDS: &'static [FieldSpec];

    /// Decode a JSON document with the default configuration
    fn from_json(json: &str) -> Result<Decoded<Self>, DecodeError> {
        decode(json)
    }

    /// Decode a JSON document with an explicit configuration
    fn from_json_with(json: &str, config: &DecodeConfig) -> Result<Decoded<Self>, DecodeError> {
        decode_with(json, config)
    }

    fn to_json(&self) -> Result<String, EncodeError> {
        encode(self)
    }

    /// Look up a field by Rust name or wire key
    fn field(name: &str) -> Option<&'static FieldSpec> {
        Self::FIELDS
            .iter()
            .find(|f| f.name == name || f.wire_key == name)
    }

    fn required_fields() -> impl Iterator<Item = &'static FieldSpec> {
        Self::FIELDS.iter().filter(|f| f.required)
    }
}

/// A successfully decoded value plus the non-fatal issues seen on the way
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub value: T,
    /// Unknown enum tokens dropped in lenient mode, unknown fields when reported
    pub warnings: Vec<FieldIssue>,
}

impl<T> Decoded<T> {
    pub fn into_inner(self) -> T {
        self.value
    }

    /// True when decoding produced no warnings
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Decoded<U> {
        Decoded {
            value: f(self.value),
            warnings: self.warnings,
        }
    }
}

/// Decode a JSON document using [`DecodeConfig::default`]
pub fn decode<T: FromWire>(json: &str) -> Result<Decoded<T>, DecodeError> {
    decode_with(json, &DecodeConfig::default())
}

/// Decode a JSON document
pub fn decode_with<T: FromWire>(json: &str, config: &DecodeConfig) -> Result<Decoded<T>, DecodeError> {
    let value: Value = serde_json::from_str(json)?;
    decode_value(&value, config)
}

/// Decode an already-parsed JSON value
///
/// Returns every error found in one pass; warnings travel with the value.
pub fn decode_value<T: FromWire>(value: &Value, config: &DecodeConfig) -> Result<Decoded<T>, DecodeError> {
    debug!(model = T::EXPECTED, "decoding payload");

    let mut cx = DecodeContext::new(config.clone());
    let decoded = T::from_wire(value, &mut cx);
    let (errors, warnings) = cx.into_parts();

    match decoded {
        Some(value) if errors.is_empty() => {
            debug!(model = T::EXPECTED, warnings = warnings.len(), "payload decoded");
            Ok(Decoded { value, warnings })
        }
        _ => {
            debug!(model = T::EXPECTED, errors = errors.len(), "payload rejected");
            Err(DecodeError::Invalid {
                model: T::EXPECTED,
                issues: errors,
            })
        }
    }
}

/// Encode a value to compact JSON
pub fn encode<T: FromWire + Serialize>(value: &T) -> Result<String, EncodeError> {
    check_finite(value)?;
    Ok(serde_json::to_string(value)?)
}

/// Encode a value to indented JSON
pub fn encode_pretty<T: FromWire + Serialize>(value: &T) -> Result<String, EncodeError> {
    check_finite(value)?;
    Ok(serde_json::to_string_pretty(value)?)
}

/// Encode a value to a JSON tree
pub fn encode_value<T: FromWire + Serialize>(value: &T) -> Result<Value, EncodeError> {
    check_finite(value)?;
    Ok(serde_json::to_value(value)?)
}

/// serde_json writes NaN and infinities as `null`, which would not decode back
fn check_finite<T: FromWire>(value: &T) -> Result<(), EncodeError> {
    match value.non_finite_path() {
        Some(path) => Err(EncodeError::NonFinite { path }),
        None => Ok(()),
    }
}

/// Prefix a path relative to a child with the child's key or `[index]`
pub(crate) fn join_path(head: &str, rest: String) -> String {
    if rest.is_empty() {
        head.to_string()
    } else if rest.starts_with('[') {
        format!("{}{}", head, rest)
    } else {
        format!("{}.{}", head, rest)
    }
}
