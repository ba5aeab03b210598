//! Tax Calculation SDK - typed models for the tax calculation REST API
//!
//! Provides:
//! - Request and response bodies with their wire field tables
//! - Closed code lists that read and write their member names
//! - A JSON codec that reports every problem in a payload at once
//! - A catalog for decoding by model name at runtime

#[macro_use]
pub mod codec;

pub mod catalog;
pub mod models;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export the codec surface
pub use codec::{
    DecodeConfig, DecodeError, Decoded, EncodeError, EnumPolicy, FieldIssue, FieldSpec, FromWire,
    IssueKind, Timestamp, UnknownEnumToken, WireEnum, WireModel, decode, decode_value, decode_with,
    encode, encode_pretty, encode_value,
};
#[cfg(feature = "config-file")]
pub use codec::ConfigError;

pub use catalog::{EnumEntry, ModelEntry, TranscodeError, find_enum, find_model};

// Re-export models
pub use models::*;
