//! Message content carried by `message` events.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::UnknownVariant;
use crate::union::{decode, deserialize_tagged_union, serialize_tagged, string_enum, TaggedUnion};

/// Message content, keyed by `message.type`.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageContent {
    Text(TextMessage),
    Image(ImageMessage),
    Video(VideoMessage),
    Audio(AudioMessage),
    File(FileMessage),
    Location(LocationMessage),
    Sticker(StickerMessage),
    Unknown(UnknownVariant),
}

impl MessageContent {
    /// The `type` discriminator.
    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::Text(_) => Some("text"),
            Self::Image(_) => Some("image"),
            Self::Video(_) => Some("video"),
            Self::Audio(_) => Some("audio"),
            Self::File(_) => Some("file"),
            Self::Location(_) => Some("location"),
            Self::Sticker(_) => Some("sticker"),
            Self::Unknown(u) => u.kind(),
        }
    }

    /// Message id. For unknown content this is read from the raw `id` field.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Text(m) => Some(&m.id),
            Self::Image(m) => Some(&m.id),
            Self::Video(m) => Some(&m.id),
            Self::Audio(m) => Some(&m.id),
            Self::File(m) => Some(&m.id),
            Self::Location(m) => Some(&m.id),
            Self::Sticker(m) => Some(&m.id),
            Self::Unknown(u) => u.get_str("id"),
        }
    }

    /// Token for quoting this message in a reply, on content types that support it.
    pub fn quote_token(&self) -> Option<&str> {
        match self {
            Self::Text(m) => m.quote_token.as_deref(),
            Self::Image(m) => m.quote_token.as_deref(),
            Self::Video(m) => m.quote_token.as_deref(),
            Self::Sticker(m) => m.quote_token.as_deref(),
            Self::Unknown(u) => u.get_str("quoteToken"),
            _ => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl TaggedUnion for MessageContent {
    const NAME: &'static str = "message";

    fn decode_known(kind: &str, raw: &Value) -> Option<Self> {
        match kind {
            "text" => decode(Self::NAME, kind, raw).map(Self::Text),
            "image" => decode(Self::NAME, kind, raw).map(Self::Image),
            "video" => decode(Self::NAME, kind, raw).map(Self::Video),
            "audio" => decode(Self::NAME, kind, raw).map(Self::Audio),
            "file" => decode(Self::NAME, kind, raw).map(Self::File),
            "location" => decode(Self::NAME, kind, raw).map(Self::Location),
            "sticker" => decode(Self::NAME, kind, raw).map(Self::Sticker),
            _ => None,
        }
    }

    fn fallback(raw: Value) -> Self {
        Self::Unknown(UnknownVariant::new(raw))
    }
}

deserialize_tagged_union!(MessageContent);

impl Serialize for MessageContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(m) => serialize_tagged("text", m, serializer),
            Self::Image(m) => serialize_tagged("image", m, serializer),
            Self::Video(m) => serialize_tagged("video", m, serializer),
            Self::Audio(m) => serialize_tagged("audio", m, serializer),
            Self::File(m) => serialize_tagged("file", m, serializer),
            Self::Location(m) => serialize_tagged("location", m, serializer),
            Self::Sticker(m) => serialize_tagged("sticker", m, serializer),
            Self::Unknown(u) => u.serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMessage {
    pub id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emojis: Option<Vec<Emoji>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mention: Option<Mention>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quoted_message_id: Option<String>,
}

/// A LINE emoji embedded in text. `index` and `length` are in UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Emoji {
    pub index: u32,
    pub length: u32,
    pub product_id: String,
    pub emoji_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    pub mentionees: Vec<Mentionee>,
}

/// A mention inside a text message, keyed by `type`.
#[derive(Debug, Clone, PartialEq)]
pub enum Mentionee {
    User(UserMentionee),
    All(AllMentionee),
    Unknown(UnknownVariant),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMentionee {
    pub index: u32,
    pub length: u32,
    /// Only present when the mentioned user has consented to profile sharing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_self: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllMentionee {
    pub index: u32,
    pub length: u32,
}

impl Mentionee {
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Self::User(m) => m.user_id.as_deref(),
            _ => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl TaggedUnion for Mentionee {
    const NAME: &'static str = "mentionee";

    fn decode_known(kind: &str, raw: &Value) -> Option<Self> {
        match kind {
            "user" => decode(Self::NAME, kind, raw).map(Self::User),
            "all" => decode(Self::NAME, kind, raw).map(Self::All),
            _ => None,
        }
    }

    fn fallback(raw: Value) -> Self {
        Self::Unknown(UnknownVariant::new(raw))
    }
}

deserialize_tagged_union!(Mentionee);

impl Serialize for Mentionee {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::User(m) => serialize_tagged("user", m, serializer),
            Self::All(m) => serialize_tagged("all", m, serializer),
            Self::Unknown(u) => u.serialize(serializer),
        }
    }
}

/// Where the binary content of an image, video or audio message is hosted.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentProvider {
    /// Hosted by LINE; fetch it through the content API.
    Line,
    External(ExternalContent),
    Unknown(UnknownVariant),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalContent {
    pub original_content_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_image_url: Option<String>,
}

impl ContentProvider {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl TaggedUnion for ContentProvider {
    const NAME: &'static str = "contentProvider";

    fn decode_known(kind: &str, raw: &Value) -> Option<Self> {
        match kind {
            "line" => Some(Self::Line),
            "external" => decode(Self::NAME, kind, raw).map(Self::External),
            _ => None,
        }
    }

    fn fallback(raw: Value) -> Self {
        Self::Unknown(UnknownVariant::new(raw))
    }
}

deserialize_tagged_union!(ContentProvider);

impl Serialize for ContentProvider {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Line => serialize_tagged("line", &serde_json::Map::new(), serializer),
            Self::External(c) => serialize_tagged("external", c, serializer),
            Self::Unknown(u) => u.serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMessage {
    pub id: String,
    pub content_provider: ContentProvider,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_set: Option<ImageSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_token: Option<String>,
}

/// Groups images sent together. Older clients omit `index` and `total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSet {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMessage {
    pub id: String,
    /// Length in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    pub content_provider: ContentProvider,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioMessage {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    pub content_provider: ContentProvider,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMessage {
    pub id: String,
    pub file_name: String,
    /// Size in bytes.
    pub file_size: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationMessage {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(deserialize_with = "f64_from_number_or_string")]
    pub latitude: f64,
    #[serde(deserialize_with = "f64_from_number_or_string")]
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickerMessage {
    pub id: String,
    pub package_id: String,
    pub sticker_id: String,
    pub sticker_resource_type: StickerResourceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Text entered by the user for message stickers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quoted_message_id: Option<String>,
}

string_enum! {
    pub enum StickerResourceType {
        Static => "STATIC",
        Animation => "ANIMATION",
        Sound => "SOUND",
        AnimationSound => "ANIMATION_SOUND",
        Popup => "POPUP",
        PopupSound => "POPUP_SOUND",
        Custom => "CUSTOM",
        Message => "MESSAGE",
        NameText => "NAME_TEXT",
        PerStickerText => "PER_STICKER_TEXT",
    }
}

/// Coordinates arrive as JSON numbers, but some senders emit decimal strings.
fn f64_from_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s
            .trim()
            .parse()
            .map_err(|e| D::Error::custom(format!("invalid coordinate {:?}: {}", s, e))),
    }
}
