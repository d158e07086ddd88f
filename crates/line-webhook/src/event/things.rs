//! LINE Things (IoT device) event content.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use super::UnknownVariant;
use crate::union::{decode, deserialize_tagged_union, serialize_tagged, TaggedUnion};

/// Content of a `things` event, keyed by `things.type`.
#[derive(Debug, Clone, PartialEq)]
pub enum ThingsContent {
    /// A user linked a device.
    Link(ThingsDevice),
    /// A user unlinked a device.
    Unlink(ThingsDevice),
    /// An automatic communication scenario finished running.
    ScenarioResult(ScenarioResultContent),
    Unknown(UnknownVariant),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThingsDevice {
    pub device_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResultContent {
    pub device_id: String,
    pub result: ScenarioResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub scenario_id: String,
    pub revision: i64,
    /// Epoch milliseconds.
    pub start_time: i64,
    pub end_time: i64,
    /// `success`, `gatt_error`, `runtime_error`, ...
    pub result_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_results: Option<Vec<ActionResult>>,
    /// Base64 payload of a BLE notification, when the scenario waited for one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ble_notification_payload: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResult {
    /// `void` or `binary`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl ThingsContent {
    /// The `type` discriminator.
    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::Link(_) => Some("link"),
            Self::Unlink(_) => Some("unlink"),
            Self::ScenarioResult(_) => Some("scenarioResult"),
            Self::Unknown(u) => u.kind(),
        }
    }

    pub fn device_id(&self) -> Option<&str> {
        match self {
            Self::Link(d) | Self::Unlink(d) => Some(&d.device_id),
            Self::ScenarioResult(s) => Some(&s.device_id),
            Self::Unknown(u) => u.get_str("deviceId"),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl TaggedUnion for ThingsContent {
    const NAME: &'static str = "things";

    fn decode_known(kind: &str, raw: &Value) -> Option<Self> {
        match kind {
            "link" => decode(Self::NAME, kind, raw).map(Self::Link),
            "unlink" => decode(Self::NAME, kind, raw).map(Self::Unlink),
            "scenarioResult" => decode(Self::NAME, kind, raw).map(Self::ScenarioResult),
            _ => None,
        }
    }

    fn fallback(raw: Value) -> Self {
        Self::Unknown(UnknownVariant::new(raw))
    }
}

deserialize_tagged_union!(ThingsContent);

impl Serialize for ThingsContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Link(d) => serialize_tagged("link", d, serializer),
            Self::Unlink(d) => serialize_tagged("unlink", d, serializer),
            Self::ScenarioResult(s) => serialize_tagged("scenarioResult", s, serializer),
            Self::Unknown(u) => u.serialize(serializer),
        }
    }
}
