//! Wire decoding for scalars, arrays and free-form JSON

use serde_json::Value;

use super::context::DecodeContext;
use super::timestamp::Timestamp;
use super::{FromWire, join_path};

/// Integers are taken as written: fractions and out-of-range values are rejected, never rounded.
fn integer_from_wire<I: TryFrom<i64>>(
    value: &Value,
    cx: &mut DecodeContext,
    expected: &'static str,
) -> Option<I> {
    let Value::Number(number) = value else {
        cx.type_mismatch(expected, value);
        return None;
    };

    match number.as_i64() {
        Some(whole) => match I::try_from(whole) {
            Ok(v) => Some(v),
            Err(_) => {
                cx.invalid_value(expected, format!("{} is out of range", whole));
                None
            }
        },
        None if number.is_u64() => {
            cx.invalid_value(expected, format!("{} is out of range", number));
            None
        }
        None => {
            cx.invalid_value(expected, format!("{} is not a whole number", number));
            None
        }
    }
}

impl FromWire for i32 {
    const EXPECTED: &'static str = "integer";

    fn from_wire(value: &Value, cx: &mut DecodeContext) -> Option<Self> {
        integer_from_wire(value, cx, Self::EXPECTED)
    }
}

impl FromWire for i64 {
    const EXPECTED: &'static str = "integer";

    fn from_wire(value: &Value, cx: &mut DecodeContext) -> Option<Self> {
        integer_from_wire(value, cx, Self::EXPECTED)
    }
}

impl FromWire for f64 {
    const EXPECTED: &'static str = "number";

    fn from_wire(value: &Value, cx: &mut DecodeContext) -> Option<Self> {
        match value {
            Value::Number(number) => match number.as_f64() {
                Some(v) => Some(v),
                None => {
                    cx.invalid_value(Self::EXPECTED, format!("{} is not representable", number));
                    None
                }
            },
            other => {
                cx.type_mismatch(Self::EXPECTED, other);
                None
            }
        }
    }

    fn non_finite_path(&self) -> Option<String> {
        (!self.is_finite()).then(String::new)
    }
}

impl FromWire for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_wire(value: &Value, cx: &mut DecodeContext) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(*v),
            other => {
                cx.type_mismatch(Self::EXPECTED, other);
                None
            }
        }
    }
}

impl FromWire for String {
    const EXPECTED: &'static str = "string";

    fn from_wire(value: &Value, cx: &mut DecodeContext) -> Option<Self> {
        match value {
            Value::String(v) => Some(v.clone()),
            other => {
                cx.type_mismatch(Self::EXPECTED, other);
                None
            }
        }
    }
}

impl FromWire for Timestamp {
    const EXPECTED: &'static str = "ISO-8601 date";

    fn from_wire(value: &Value, cx: &mut DecodeContext) -> Option<Self> {
        let Value::String(text) = value else {
            cx.type_mismatch(Self::EXPECTED, value);
            return None;
        };
        match Timestamp::parse(text) {
            Ok(ts) => Some(ts),
            Err(e) => {
                cx.invalid_value(Self::EXPECTED, format!("'{}': {}", text, e));
                None
            }
        }
    }
}

/// Free-form JSON is taken verbatim
impl FromWire for Value {
    const EXPECTED: &'static str = "JSON value";

    fn from_wire(value: &Value, _cx: &mut DecodeContext) -> Option<Self> {
        Some(value.clone())
    }
}

/// Every element is decoded, so one bad element does not hide problems in the rest.
impl<T: FromWire> FromWire for Vec<T> {
    const EXPECTED: &'static str = "array";

    fn from_wire(value: &Value, cx: &mut DecodeContext) -> Option<Self> {
        let Value::Array(items) = value else {
            cx.type_mismatch(Self::EXPECTED, value);
            return None;
        };
        if !cx.descend() {
            return None;
        }

        let mut out = Vec::with_capacity(items.len());
        let mut failed = false;
        for (index, item) in items.iter().enumerate() {
            match cx.at_index(index, |cx| T::from_wire(item, cx)) {
                Some(decoded) => out.push(decoded),
                None => failed = true,
            }
        }

        cx.ascend();
        (!failed).then_some(out)
    }

    fn non_finite_path(&self) -> Option<String> {
        self.iter().enumerate().find_map(|(index, item)| {
            FromWire::non_finite_path(item).map(|rest| join_path(&format!("[{}]", index), rest))
        })
    }
}

impl_required_slot!(i32, i64, f64, bool, String, Timestamp, Value);
