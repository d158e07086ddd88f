//! Fallback representation for union members this version does not know.

use serde::{Serialize, Serializer};
use serde_json::Value;

/// An object whose `type` discriminator was not recognised, or whose shape
/// did not match the registered variant. The original JSON is kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownVariant {
    raw: Value,
}

impl UnknownVariant {
    pub(crate) fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// The `type` discriminator, if the object carried one.
    pub fn kind(&self) -> Option<&str> {
        self.get_str("type")
    }

    /// The original JSON document.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn into_raw(self) -> Value {
        self.raw
    }

    /// Read a top-level string field without knowing the schema.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.raw.get(field).and_then(Value::as_str)
    }
}

impl Serialize for UnknownVariant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}
