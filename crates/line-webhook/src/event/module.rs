//! Module channel attach/detach content.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use super::UnknownVariant;
use crate::union::{decode, deserialize_tagged_union, serialize_tagged, TaggedUnion};

#[derive(Debug, Clone, PartialEq)]
pub enum ModuleContent {
    Attached(AttachedModule),
    Detached(DetachedModule),
    Unknown(UnknownVariant),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachedModule {
    /// The bot the module channel was attached to.
    pub bot_id: String,
    pub scopes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetachedModule {
    pub bot_id: String,
    /// e.g. `bot_deleted`
    pub reason: String,
}

impl ModuleContent {
    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::Attached(_) => Some("attached"),
            Self::Detached(_) => Some("detached"),
            Self::Unknown(u) => u.kind(),
        }
    }

    pub fn bot_id(&self) -> Option<&str> {
        match self {
            Self::Attached(m) => Some(&m.bot_id),
            Self::Detached(m) => Some(&m.bot_id),
            Self::Unknown(u) => u.get_str("botId"),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl TaggedUnion for ModuleContent {
    const NAME: &'static str = "module";

    fn decode_known(kind: &str, raw: &Value) -> Option<Self> {
        match kind {
            "attached" => decode(Self::NAME, kind, raw).map(Self::Attached),
            "detached" => decode(Self::NAME, kind, raw).map(Self::Detached),
            _ => None,
        }
    }

    fn fallback(raw: Value) -> Self {
        Self::Unknown(UnknownVariant::new(raw))
    }
}

deserialize_tagged_union!(ModuleContent);

impl Serialize for ModuleContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Attached(m) => serialize_tagged("attached", m, serializer),
            Self::Detached(m) => serialize_tagged("detached", m, serializer),
            Self::Unknown(u) => u.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_attached_and_detached() {
        let attached: ModuleContent = serde_json::from_value(json!({
            "type": "attached",
            "botId": "U111",
            "scopes": ["message.read", "message.write"]
        }))
        .unwrap();
        let ModuleContent::Attached(module) = &attached else {
            panic!("expected attached module");
        };
        assert_eq!(module.scopes.len(), 2);

        let detached: ModuleContent = serde_json::from_value(json!({
            "type": "detached",
            "botId": "U111",
            "reason": "bot_deleted"
        }))
        .unwrap();
        assert_eq!(detached.bot_id(), Some("U111"));
        assert!(!detached.is_unknown());
    }

    #[test]
    fn test_unknown_module_type() {
        let module: ModuleContent =
            serde_json::from_value(json!({"type": "suspended", "botId": "U111"})).unwrap();
        assert!(module.is_unknown());
        assert_eq!(module.kind(), Some("suspended"));
        assert_eq!(module.bot_id(), Some("U111"));
    }
}
