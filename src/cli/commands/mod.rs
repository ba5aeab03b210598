//! Subcommand handlers

pub mod decode;
pub mod describe;

pub use decode::{DecodeOptions, handle_decode};
pub use describe::{handle_enums, handle_models};
