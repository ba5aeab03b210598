//! Declarative macros that stamp the wire contract onto models and enums

/// Mark types as required slots: the key must be present when decoding.
macro_rules! impl_required_slot {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::codec::WireSlot for $ty {
                const REQUIRED: bool = true;

                fn read(
                    reader: &mut $crate::codec::ObjectReader<'_>,
                    key: &'static str,
                ) -> Option<Self> {
                    reader.required(key)
                }

                fn non_finite_path(&self) -> Option<String> {
                    <Self as $crate::codec::FromWire>::non_finite_path(self)
                }
            }
        )+
    };
}

/// Declare a closed code list.
///
/// Generates the enum (`#[repr(i32)]`, codes as written), its [`WireEnum`]
/// table, `Display`/`FromStr`/`TryFrom<i32>`, serde impls writing the member
/// name, and the decode hook.
///
/// [`WireEnum`]: crate::codec::WireEnum
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant = $code,
            )+
        }

        impl $crate::codec::WireEnum for $name {
            const ENUM_NAME: &'static str = stringify!($name);
            const MEMBERS: &'static [Self] = &[$(Self::$variant),+];

            fn code(self) -> i32 {
                self as i32
            }

            fn wire_token(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::codec::WireEnum::wire_token(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::codec::UnknownEnumToken;

            fn from_str(s: &str) -> Result<Self, $crate::codec::UnknownEnumToken> {
                <Self as $crate::codec::WireEnum>::from_wire_token(s)
            }
        }

        impl ::std::convert::TryFrom<i32> for $name {
            type Error = $crate::codec::UnknownEnumToken;

            fn try_from(code: i32) -> Result<Self, $crate::codec::UnknownEnumToken> {
                <Self as $crate::codec::WireEnum>::from_code(i64::from(code)).ok_or_else(|| {
                    $crate::codec::UnknownEnumToken::new(stringify!($name), code.to_string())
                })
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::codec::WireEnum::wire_token(*self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                $crate::codec::deserialize_enum(deserializer)
            }
        }

        impl $crate::codec::FromWire for $name {
            const EXPECTED: &'static str = stringify!($name);

            fn from_wire(
                value: &::serde_json::Value,
                cx: &mut $crate::codec::DecodeContext,
            ) -> Option<Self> {
                $crate::codec::enum_from_wire(value, cx)
            }
        }

        impl_required_slot!($name);
    };
}

/// Declare a request/response body.
///
/// Each field is written `pub name: Type => "wireKey"`. `Option<T>` fields
/// are optional on the wire and skipped when `None`; every other field is
/// required. Generates the struct (with `Serialize`), its [`WireModel`]
/// field table and the decode function.
///
/// [`WireModel`]: crate::codec::WireModel
macro_rules! wire_model {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                pub $field:ident : $ty:ty => $key:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(rename = $key, skip_serializing_if = "crate::codec::WireSlot::is_absent")]
                pub $field: $ty,
            )*
        }

        impl $crate::codec::WireModel for $name {
            const MODEL_NAME: &'static str = stringify!($name);
            const FIELDS: &'static [$crate::codec::FieldSpec] = &[
                $(
                    $crate::codec::FieldSpec {
                        name: stringify!($field),
                        wire_key: $key,
                        rust_type: stringify!($ty),
                        required: <$ty as $crate::codec::WireSlot>::REQUIRED,
                    },
                )*
            ];
        }

        impl $crate::codec::FromWire for $name {
            const EXPECTED: &'static str = stringify!($name);

            fn from_wire(
                value: &::serde_json::Value,
                cx: &mut $crate::codec::DecodeContext,
            ) -> Option<Self> {
                $crate::codec::decode_object(
                    value,
                    cx,
                    stringify!($name),
                    <Self as $crate::codec::WireModel>::FIELDS,
                    |reader| {
                        $(
                            let $field = <$ty as $crate::codec::WireSlot>::read(reader, $key);
                        )*
                        Some(Self {
                            $($field: $field?,)*
                        })
                    },
                )
            }

            fn non_finite_path(&self) -> Option<String> {
                $(
                    if let Some(rest) = <$ty as $crate::codec::WireSlot>::non_finite_path(&self.$field) {
                        return Some($crate::codec::join_path($key, rest));
                    }
                )*
                None
            }
        }

        impl_required_slot!($name);
    };
}
