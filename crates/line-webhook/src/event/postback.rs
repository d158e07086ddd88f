//! Postback payloads.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::UnknownVariant;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostbackContent {
    /// Opaque data set on the postback action.
    pub data: String,
    /// Present only when the action was a datetime picker or a rich menu switch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<PostbackParams>,
}

/// Postback parameters. The object has no discriminator; the variant is
/// chosen by which keys are present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PostbackParams {
    /// `YYYY-MM-DD`
    Date { date: String },
    /// `HH:mm`
    Time { time: String },
    /// `YYYY-MM-DDTHH:mm`
    Datetime { datetime: String },
    RichMenuSwitch {
        #[serde(rename = "newRichMenuAliasId")]
        new_rich_menu_alias_id: String,
        status: String,
    },
    Unknown(UnknownVariant),
}

impl PostbackParams {
    fn from_value(raw: Value) -> Self {
        let field = |name: &str| raw.get(name).and_then(Value::as_str).map(str::to_string);

        let params = if let Some(date) = field("date") {
            Some(Self::Date { date })
        } else if let Some(time) = field("time") {
            Some(Self::Time { time })
        } else if let Some(datetime) = field("datetime") {
            Some(Self::Datetime { datetime })
        } else if let (Some(new_rich_menu_alias_id), Some(status)) =
            (field("newRichMenuAliasId"), field("status"))
        {
            Some(Self::RichMenuSwitch { new_rich_menu_alias_id, status })
        } else {
            None
        };

        params.unwrap_or_else(|| Self::Unknown(UnknownVariant::new(raw)))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl<'de> Deserialize<'de> for PostbackParams {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}
