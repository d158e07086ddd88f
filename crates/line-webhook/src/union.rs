//! Discriminated-union decoding shared by every event and sub-object type.
//!
//! Each union registers its known `type` values in [`TaggedUnion::decode_known`].
//! Anything unregistered, or registered but shaped differently than expected,
//! falls back to the union's Unknown case carrying the original JSON.

use serde::de::DeserializeOwned;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::debug;

pub(crate) trait TaggedUnion: Sized {
    /// Union name used in diagnostics.
    const NAME: &'static str;

    /// Build the variant registered for `kind`. `None` means "not decodable as
    /// a known variant".
    fn decode_known(kind: &str, raw: &Value) -> Option<Self>;

    /// Wrap an undecodable document.
    fn fallback(raw: Value) -> Self;

    fn from_value(raw: Value) -> Self {
        let decoded = raw
            .get("type")
            .and_then(Value::as_str)
            .and_then(|kind| Self::decode_known(kind, &raw));

        decoded.unwrap_or_else(|| Self::fallback(raw))
    }
}

/// Decode `raw` into a variant payload, returning `None` on shape mismatch.
pub(crate) fn decode<T: DeserializeOwned>(union: &str, kind: &str, raw: &Value) -> Option<T> {
    match T::deserialize(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("{} `{}` did not match its schema, keeping as unknown: {}", union, kind, e);
            None
        }
    }
}

/// Serialize `inner` as an object with a `type` discriminator added.
pub(crate) fn serialize_tagged<T, S>(kind: &str, inner: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    let mut value = serde_json::to_value(inner).map_err(S::Error::custom)?;
    match value.as_object_mut() {
        Some(map) => {
            map.insert("type".to_string(), Value::String(kind.to_string()));
        }
        None => return Err(S::Error::custom(format!("`{}` payload is not an object", kind))),
    }
    value.serialize(serializer)
}

/// Implements `Deserialize` for a [`TaggedUnion`]. Decoding never fails for
/// any well-formed JSON value.
macro_rules! deserialize_tagged_union {
    ($ty:ty) => {
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                Ok(<$ty as $crate::union::TaggedUnion>::from_value(raw))
            }
        }
    };
}

pub(crate) use deserialize_tagged_union;

/// Declares a string enum whose unrecognised values are kept verbatim in an
/// `Unknown(String)` variant and serialized back unchanged.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value this version does not know, as received.
            Unknown(String),
        }

        impl $name {
            /// The wire value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Unknown(other) => other.as_str(),
                }
            }

            pub fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $wire => Self::$variant, )+
                    other => Self::Unknown(other.to_string()),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(value.as_str()))
            }
        }
    };
}

pub(crate) use string_enum;
