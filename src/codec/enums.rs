//! Code-list support: token/code lookup and the serde bridge

use serde::de::{self, Deserializer, Visitor};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

use super::context::DecodeContext;
use super::error::IssueKind;

/// An incoming token or code that matches no member
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {enum_name} token '{token}'")]
pub struct UnknownEnumToken {
    pub enum_name: &'static str,
    pub token: String,
}

impl UnknownEnumToken {
    pub fn new(enum_name: &'static str, token: impl Into<String>) -> Self {
        Self {
            enum_name,
            token: token.into(),
        }
    }
}

/// A closed list of named integer codes
///
/// The member name is the canonical wire token; codes are stable and are
/// accepted on input as well.
pub trait WireEnum: Copy + Eq + 'static {
    const ENUM_NAME: &'static str;
    /// Every member, in declaration order
    const MEMBERS: &'static [Self];

    fn code(self) -> i32;

    /// The member name as written on the wire
    fn wire_token(self) -> &'static str;

    /// Exact, case-sensitive lookup by member name
    fn from_wire_token(token: &str) -> Result<Self, UnknownEnumToken> {
        Self::MEMBERS
            .iter()
            .copied()
            .find(|member| member.wire_token() == token)
            .ok_or_else(|| UnknownEnumToken::new(Self::ENUM_NAME, token))
    }

    fn to_wire_token(self) -> &'static str {
        self.wire_token()
    }

    fn from_code(code: i64) -> Option<Self> {
        Self::MEMBERS
            .iter()
            .copied()
            .find(|member| i64::from(member.code()) == code)
    }

    /// `(name, code)` pairs for listings
    fn table() -> Vec<(&'static str, i32)> {
        Self::MEMBERS
            .iter()
            .map(|member| (member.wire_token(), member.code()))
            .collect()
    }
}

pub(crate) fn enum_from_wire<E: WireEnum>(value: &Value, cx: &mut DecodeContext) -> Option<E> {
    match value {
        Value::String(token) => match E::from_wire_token(token) {
            Ok(member) => Some(member),
            Err(_) => {
                cx.error(IssueKind::UnknownEnumToken {
                    enum_name: E::ENUM_NAME,
                    token: token.clone(),
                });
                None
            }
        },
        Value::Number(number) if cx.config().accept_numeric_enum_codes => {
            // Fractions and out-of-range numbers are malformed, not unknown members
            let Some(code) = number.as_i64() else {
                let reason = if number.is_u64() { "is out of range" } else { "is not a whole number" };
                cx.invalid_value(E::ENUM_NAME, format!("{} {}", number, reason));
                return None;
            };
            match E::from_code(code) {
                Some(member) => Some(member),
                None => {
                    cx.error(IssueKind::UnknownEnumToken {
                        enum_name: E::ENUM_NAME,
                        token: code.to_string(),
                    });
                    None
                }
            }
        }
        other => {
            cx.type_mismatch(E::ENUM_NAME, other);
            None
        }
    }
}

struct EnumVisitor<E>(PhantomData<E>);

impl<'de, E: WireEnum> Visitor<'de> for EnumVisitor<E> {
    type Value = E;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a {} name or numeric code", E::ENUM_NAME)
    }

    fn visit_str<Er: de::Error>(self, v: &str) -> Result<E, Er> {
        E::from_wire_token(v).map_err(Er::custom)
    }

    fn visit_i64<Er: de::Error>(self, v: i64) -> Result<E, Er> {
        E::from_code(v).ok_or_else(|| Er::custom(UnknownEnumToken::new(E::ENUM_NAME, v.to_string())))
    }

    fn visit_u64<Er: de::Error>(self, v: u64) -> Result<E, Er> {
        i64::try_from(v)
            .ok()
            .and_then(E::from_code)
            .ok_or_else(|| Er::custom(UnknownEnumToken::new(E::ENUM_NAME, v.to_string())))
    }
}

/// Strict serde path: unknown names or codes are errors
pub(crate) fn deserialize_enum<'de, D, E>(deserializer: D) -> Result<E, D::Error>
where
    D: Deserializer<'de>,
    E: WireEnum,
{
    deserializer.deserialize_any(EnumVisitor(PhantomData))
}
