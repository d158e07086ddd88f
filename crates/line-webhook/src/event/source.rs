//! Event source: the user, group chat or multi-person chat an event came from.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use super::UnknownVariant;
use crate::union::{decode, deserialize_tagged_union, serialize_tagged, TaggedUnion};

#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    User(UserSource),
    Group(GroupSource),
    Room(RoomSource),
    Unknown(UnknownVariant),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSource {
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSource {
    pub group_id: String,
    /// Absent when the sender has not consented to profile sharing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSource {
    pub room_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Source {
    /// The `type` discriminator.
    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::User(_) => Some("user"),
            Self::Group(_) => Some("group"),
            Self::Room(_) => Some("room"),
            Self::Unknown(u) => u.kind(),
        }
    }

    /// The user who triggered the event, when known.
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Self::User(s) => Some(&s.user_id),
            Self::Group(s) => s.user_id.as_deref(),
            Self::Room(s) => s.user_id.as_deref(),
            Self::Unknown(_) => None,
        }
    }

    /// The id a push message should be addressed to: the group or room for
    /// chats, the user otherwise.
    pub fn sender_id(&self) -> Option<&str> {
        match self {
            Self::User(s) => Some(&s.user_id),
            Self::Group(s) => Some(&s.group_id),
            Self::Room(s) => Some(&s.room_id),
            Self::Unknown(_) => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl TaggedUnion for Source {
    const NAME: &'static str = "source";

    fn decode_known(kind: &str, raw: &Value) -> Option<Self> {
        match kind {
            "user" => decode(Self::NAME, kind, raw).map(Self::User),
            "group" => decode(Self::NAME, kind, raw).map(Self::Group),
            "room" => decode(Self::NAME, kind, raw).map(Self::Room),
            _ => None,
        }
    }

    fn fallback(raw: Value) -> Self {
        Self::Unknown(UnknownVariant::new(raw))
    }
}

deserialize_tagged_union!(Source);

impl Serialize for Source {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::User(s) => serialize_tagged("user", s, serializer),
            Self::Group(s) => serialize_tagged("group", s, serializer),
            Self::Room(s) => serialize_tagged("room", s, serializer),
            Self::Unknown(u) => u.serialize(serializer),
        }
    }
}
