//! Webhook event model
//!
//! Every union here (events, sources, message content, ...) decodes through a
//! fixed table of known `type` values and falls back to an `Unknown` case that
//! keeps the original JSON, so new server-side variants never fail a parse.

mod detail;
mod message;
mod module;
mod postback;
mod source;
mod things;
mod unknown;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::union::{decode, deserialize_tagged_union, serialize_tagged, string_enum, TaggedUnion};

pub use detail::{
    BeaconContent, BeaconEventType, ChatControl, FollowDetail, LinkContent, LinkResult, Members,
    PnpDelivery, UnsendDetail, VideoPlayComplete,
};
pub use message::{
    AllMentionee, AudioMessage, ContentProvider, Emoji, ExternalContent, FileMessage, ImageMessage,
    ImageSet, LocationMessage, Mention, Mentionee, MessageContent, StickerMessage,
    StickerResourceType, TextMessage, UserMentionee, VideoMessage,
};
pub use module::{AttachedModule, DetachedModule, ModuleContent};
pub use postback::{PostbackContent, PostbackParams};
pub use source::{GroupSource, RoomSource, Source, UserSource};
pub use things::{ActionResult, ScenarioResult, ScenarioResultContent, ThingsContent, ThingsDevice};
pub use unknown::UnknownVariant;

string_enum! {
    /// Channel state the event was delivered in.
    pub enum EventMode {
        Active => "active",
        /// Another module channel holds chat control; replies are not possible.
        Standby => "standby",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryContext {
    pub is_redelivery: bool,
}

/// Fields shared by every known event type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBase {
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub mode: EventMode,
    /// Absent on account-level events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    pub webhook_event_id: String,
    pub delivery_context: DeliveryContext,
}

/// Event with no fields beyond [`EventBase`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlainEvent {
    #[serde(flatten)]
    pub base: EventBase,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEvent {
    #[serde(flatten)]
    pub base: EventBase,
    /// Absent in standby mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_token: Option<String>,
    pub message: MessageContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnsendEvent {
    #[serde(flatten)]
    pub base: EventBase,
    pub unsend: UnsendDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowEvent {
    #[serde(flatten)]
    pub base: EventBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow: Option<FollowDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinEvent {
    #[serde(flatten)]
    pub base: EventBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberJoinedEvent {
    #[serde(flatten)]
    pub base: EventBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_token: Option<String>,
    pub joined: Members,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberLeftEvent {
    #[serde(flatten)]
    pub base: EventBase,
    pub left: Members,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostbackEvent {
    #[serde(flatten)]
    pub base: EventBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_token: Option<String>,
    pub postback: PostbackContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPlayCompleteEvent {
    #[serde(flatten)]
    pub base: EventBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_token: Option<String>,
    pub video_play_complete: VideoPlayComplete,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeaconEvent {
    #[serde(flatten)]
    pub base: EventBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_token: Option<String>,
    pub beacon: BeaconContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountLinkEvent {
    #[serde(flatten)]
    pub base: EventBase,
    /// Absent when linking failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_token: Option<String>,
    pub link: LinkContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThingsEvent {
    #[serde(flatten)]
    pub base: EventBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_token: Option<String>,
    pub things: ThingsContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleEvent {
    #[serde(flatten)]
    pub base: EventBase,
    pub module: ModuleContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivatedEvent {
    #[serde(flatten)]
    pub base: EventBase,
    pub chat_control: ChatControl,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PnpDeliveryCompletionEvent {
    #[serde(flatten)]
    pub base: EventBase,
    pub delivery: PnpDelivery,
}

/// An event whose `type` is not registered, or whose body did not match the
/// registered shape. Common fields are extracted where possible; the original
/// object is kept for logging and forwarding.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownEvent {
    timestamp: Option<i64>,
    mode: Option<EventMode>,
    source: Option<Source>,
    webhook_event_id: Option<String>,
    delivery_context: Option<DeliveryContext>,
    reply_token: Option<String>,
    raw: UnknownVariant,
}

impl UnknownEvent {
    fn new(raw: Value) -> Self {
        let field = |name: &str| raw.get(name).filter(|v| !v.is_null());

        Self {
            timestamp: field("timestamp").and_then(Value::as_i64),
            mode: field("mode").and_then(|v| EventMode::deserialize(v).ok()),
            source: field("source").map(|v| Source::from_value(v.clone())),
            webhook_event_id: field("webhookEventId")
                .and_then(Value::as_str)
                .map(str::to_string),
            delivery_context: field("deliveryContext")
                .and_then(|v| DeliveryContext::deserialize(v).ok()),
            reply_token: field("replyToken").and_then(Value::as_str).map(str::to_string),
            raw: UnknownVariant::new(raw),
        }
    }

    /// The literal `type` value.
    pub fn kind(&self) -> Option<&str> {
        self.raw.kind()
    }

    pub fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }

    pub fn mode(&self) -> Option<&EventMode> {
        self.mode.as_ref()
    }

    pub fn source(&self) -> Option<&Source> {
        self.source.as_ref()
    }

    pub fn webhook_event_id(&self) -> Option<&str> {
        self.webhook_event_id.as_deref()
    }

    pub fn delivery_context(&self) -> Option<DeliveryContext> {
        self.delivery_context
    }

    pub fn reply_token(&self) -> Option<&str> {
        self.reply_token.as_deref()
    }

    /// The event object exactly as received.
    pub fn raw(&self) -> &Value {
        self.raw.raw()
    }
}

impl Serialize for UnknownEvent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

/// Declares [`Event`] together with its discriminator table. Adding an event
/// type is one line here.
macro_rules! webhook_events {
    ($( $(#[$doc:meta])* $tag:literal => $variant:ident($ty:ty), )*) => {
        /// A webhook event, keyed by `type`.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Event {
            $( $(#[$doc])* $variant($ty), )*
            Unknown(UnknownEvent),
        }

        impl Event {
            /// The `type` discriminator, verbatim for unknown events.
            pub fn kind(&self) -> Option<&str> {
                match self {
                    $( Self::$variant(_) => Some($tag), )*
                    Self::Unknown(e) => e.kind(),
                }
            }

            /// Common fields, for every known event type.
            pub fn base(&self) -> Option<&EventBase> {
                match self {
                    $( Self::$variant(e) => Some(&e.base), )*
                    Self::Unknown(_) => None,
                }
            }
        }

        impl TaggedUnion for Event {
            const NAME: &'static str = "event";

            fn decode_known(kind: &str, raw: &Value) -> Option<Self> {
                match kind {
                    $( $tag => decode(Self::NAME, kind, raw).map(Self::$variant), )*
                    _ => None,
                }
            }

            fn fallback(raw: Value) -> Self {
                Self::Unknown(UnknownEvent::new(raw))
            }
        }

        impl Serialize for Event {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self {
                    $( Self::$variant(e) => serialize_tagged($tag, e, serializer), )*
                    Self::Unknown(e) => e.serialize(serializer),
                }
            }
        }
    };
}

webhook_events! {
    "message" => Message(MessageEvent),
    "unsend" => Unsend(UnsendEvent),
    "follow" => Follow(FollowEvent),
    "unfollow" => Unfollow(PlainEvent),
    "join" => Join(JoinEvent),
    "leave" => Leave(PlainEvent),
    "memberJoined" => MemberJoined(MemberJoinedEvent),
    "memberLeft" => MemberLeft(MemberLeftEvent),
    "postback" => Postback(PostbackEvent),
    "videoPlayComplete" => VideoPlayComplete(VideoPlayCompleteEvent),
    "beacon" => Beacon(BeaconEvent),
    "accountLink" => AccountLink(AccountLinkEvent),
    "things" => Things(ThingsEvent),
    "module" => Module(ModuleEvent),
    /// Chat control was handed to this module channel.
    "activated" => Activated(ActivatedEvent),
    "deactivated" => Deactivated(PlainEvent),
    "botSuspended" => BotSuspended(PlainEvent),
    "botResumed" => BotResumed(PlainEvent),
    /// Completion of a LINE notification message delivery.
    "delivery" => PnpDeliveryCompletion(PnpDeliveryCompletionEvent),
}

deserialize_tagged_union!(Event);

impl Event {
    pub fn timestamp(&self) -> Option<i64> {
        match self {
            Self::Unknown(e) => e.timestamp(),
            _ => self.base().map(|b| b.timestamp),
        }
    }

    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        self.timestamp().and_then(DateTime::from_timestamp_millis)
    }

    pub fn mode(&self) -> Option<&EventMode> {
        match self {
            Self::Unknown(e) => e.mode(),
            _ => self.base().map(|b| &b.mode),
        }
    }

    pub fn source(&self) -> Option<&Source> {
        match self {
            Self::Unknown(e) => e.source(),
            _ => self.base().and_then(|b| b.source.as_ref()),
        }
    }

    pub fn webhook_event_id(&self) -> Option<&str> {
        match self {
            Self::Unknown(e) => e.webhook_event_id(),
            _ => self.base().map(|b| b.webhook_event_id.as_str()),
        }
    }

    pub fn is_redelivery(&self) -> Option<bool> {
        match self {
            Self::Unknown(e) => e.delivery_context().map(|c| c.is_redelivery),
            _ => self.base().map(|b| b.delivery_context.is_redelivery),
        }
    }

    /// Reply token, on event types that can be replied to.
    pub fn reply_token(&self) -> Option<&str> {
        match self {
            Self::Message(e) => e.reply_token.as_deref(),
            Self::Follow(e) => e.reply_token.as_deref(),
            Self::Join(e) => e.reply_token.as_deref(),
            Self::MemberJoined(e) => e.reply_token.as_deref(),
            Self::Postback(e) => e.reply_token.as_deref(),
            Self::VideoPlayComplete(e) => e.reply_token.as_deref(),
            Self::Beacon(e) => e.reply_token.as_deref(),
            Self::AccountLink(e) => e.reply_token.as_deref(),
            Self::Things(e) => e.reply_token.as_deref(),
            Self::Unknown(e) => e.reply_token(),
            _ => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn common() -> Value {
        json!({
            "timestamp": 1462629479859i64,
            "mode": "active",
            "source": {"type": "user", "userId": "U4af4980629..."},
            "webhookEventId": "01FZ74A0TDDPYRVKNK77XKC3ZR",
            "deliveryContext": {"isRedelivery": false}
        })
    }

    fn event(kind: &str, extra: Value) -> Value {
        let mut value = common();
        let map = value.as_object_mut().unwrap();
        map.insert("type".to_string(), json!(kind));
        for (k, v) in extra.as_object().unwrap() {
            map.insert(k.clone(), v.clone());
        }
        value
    }

    fn parse(value: Value) -> Event {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_text_message_event() {
        let parsed: Event = serde_json::from_str(
            r#"{"type":"message","timestamp":12345678901234,"mode":"active","source":{"type":"user","userId":"userid"},"webhookEventId":"testwebhookeventid","deliveryContext":{"isRedelivery":false},"replyToken":"replytoken","message":{"id":"contentid","type":"text","text":"message (love)","emojis":[{"index":8,"length":6,"productId":"5ac1bfd5040ab15980c9b435","emojiId":"001"}]}}"#,
        )
        .unwrap();

        let Event::Message(message) = &parsed else {
            panic!("expected message event, got {:?}", parsed);
        };
        assert_eq!(parsed.source().unwrap().user_id(), Some("userid"));
        assert_eq!(parsed.reply_token(), Some("replytoken"));
        assert_eq!(parsed.timestamp(), Some(12345678901234));
        assert_eq!(parsed.mode(), Some(&EventMode::Active));
        assert_eq!(parsed.webhook_event_id(), Some("testwebhookeventid"));
        assert_eq!(parsed.is_redelivery(), Some(false));

        let MessageContent::Text(text) = &message.message else {
            panic!("expected text content");
        };
        assert_eq!(text.text, "message (love)");
        assert_eq!(text.emojis.as_ref().unwrap()[0].index, 8);
    }

    #[test]
    fn test_postback_event_with_date() {
        let parsed = parse(event(
            "postback",
            json!({"replyToken": "rt", "postback": {"data": "postback", "params": {"date": "2013-04-01"}}}),
        ));

        let Event::Postback(postback) = parsed else {
            panic!("expected postback event");
        };
        assert_eq!(postback.postback.data, "postback");
        assert_eq!(
            postback.postback.params,
            Some(PostbackParams::Date { date: "2013-04-01".to_string() })
        );
    }

    #[test]
    fn test_unknown_event_type() {
        let raw = event("__unknown__", json!({"replyToken": "rt", "something": {"nested": [1, 2]}}));
        let parsed = parse(raw.clone());

        assert!(parsed.is_unknown());
        assert_eq!(parsed.kind(), Some("__unknown__"));
        assert_eq!(parsed.timestamp(), Some(1462629479859));
        assert_eq!(parsed.mode(), Some(&EventMode::Active));
        assert_eq!(parsed.source().unwrap().user_id(), Some("U4af4980629..."));
        assert_eq!(parsed.reply_token(), Some("rt"));
        assert!(parsed.base().is_none());

        let Event::Unknown(unknown) = &parsed else {
            unreachable!();
        };
        assert_eq!(unknown.raw(), &raw);
        assert_eq!(serde_json::to_value(&parsed).unwrap(), raw);
    }

    #[test]
    fn test_known_type_missing_timestamp_degrades() {
        let mut raw = event("follow", json!({"replyToken": "rt"}));
        raw.as_object_mut().unwrap().remove("timestamp");
        let parsed = parse(raw);

        assert!(parsed.is_unknown());
        assert_eq!(parsed.kind(), Some("follow"));
        assert_eq!(parsed.timestamp(), None);
        assert_eq!(parsed.webhook_event_id(), Some("01FZ74A0TDDPYRVKNK77XKC3ZR"));
    }

    #[test]
    fn test_non_object_event_degrades() {
        let parsed = parse(json!("follow"));
        assert!(parsed.is_unknown());
        assert_eq!(parsed.kind(), None);
        assert_eq!(parsed.timestamp(), None);
    }

    #[test]
    fn test_unknown_message_content_keeps_event() {
        let parsed = parse(event(
            "message",
            json!({"replyToken": "rt", "message": {"id": "1", "type": "hologram"}}),
        ));
        let Event::Message(message) = parsed else {
            panic!("expected message event");
        };
        assert!(message.message.is_unknown());
        assert_eq!(message.message.id(), Some("1"));
    }

    #[test]
    fn test_standby_message_without_reply_token() {
        let mut raw = event("message", json!({"message": {"id": "1", "type": "text", "text": "hi"}}));
        raw["mode"] = json!("standby");
        let parsed = parse(raw);

        assert_eq!(parsed.mode(), Some(&EventMode::Standby));
        assert_eq!(parsed.reply_token(), None);
        assert!(!parsed.is_unknown());
    }

    #[test]
    fn test_redelivered_event() {
        let mut raw = event("unfollow", json!({}));
        raw["deliveryContext"] = json!({"isRedelivery": true});
        let parsed = parse(raw);

        assert!(matches!(parsed, Event::Unfollow(_)));
        assert_eq!(parsed.is_redelivery(), Some(true));
    }

    #[test]
    fn test_follow_event_with_unblock() {
        let parsed = parse(event("follow", json!({"replyToken": "rt", "follow": {"isUnblocked": true}})));
        let Event::Follow(follow) = parsed else {
            panic!("expected follow event");
        };
        assert_eq!(follow.follow, Some(FollowDetail { is_unblocked: true }));
    }

    #[test]
    fn test_join_leave_and_members() {
        let mut join = event("join", json!({"replyToken": "rt"}));
        join["source"] = json!({"type": "group", "groupId": "C4af4980629..."});
        let join = parse(join);
        assert!(matches!(join, Event::Join(_)));
        assert_eq!(join.source().unwrap().sender_id(), Some("C4af4980629..."));

        let leave = parse(event("leave", json!({})));
        assert!(matches!(leave, Event::Leave(_)));

        let joined = parse(event(
            "memberJoined",
            json!({
                "replyToken": "rt",
                "joined": {"members": [
                    {"type": "user", "userId": "U1"},
                    {"type": "user", "userId": "U2"}
                ]}
            }),
        ));
        let Event::MemberJoined(joined) = joined else {
            panic!("expected memberJoined event");
        };
        assert_eq!(joined.joined.members.len(), 2);
        assert_eq!(joined.joined.members[1].user_id(), Some("U2"));

        let left = parse(event("memberLeft", json!({"left": {"members": [{"type": "user", "userId": "U1"}]}})));
        let Event::MemberLeft(left) = left else {
            panic!("expected memberLeft event");
        };
        assert_eq!(left.left.members[0].user_id(), Some("U1"));
    }

    #[test]
    fn test_unsend_and_video_play_complete() {
        let unsend = parse(event("unsend", json!({"unsend": {"messageId": "325708"}})));
        let Event::Unsend(unsend) = unsend else {
            panic!("expected unsend event");
        };
        assert_eq!(unsend.unsend.message_id, "325708");

        let video = parse(event(
            "videoPlayComplete",
            json!({"replyToken": "rt", "videoPlayComplete": {"trackingId": "track-id"}}),
        ));
        assert_eq!(video.reply_token(), Some("rt"));
        let Event::VideoPlayComplete(video) = video else {
            panic!("expected videoPlayComplete event");
        };
        assert_eq!(video.video_play_complete.tracking_id, "track-id");
    }

    #[test]
    fn test_beacon_event() {
        let parsed = parse(event(
            "beacon",
            json!({"replyToken": "rt", "beacon": {"hwid": "d41d8cd98f", "type": "enter", "dm": "1234567890abcdef"}}),
        ));
        let Event::Beacon(beacon) = parsed else {
            panic!("expected beacon event");
        };
        assert_eq!(beacon.beacon.kind, BeaconEventType::Enter);
        assert_eq!(beacon.beacon.dm.as_deref(), Some("1234567890abcdef"));
    }

    #[test]
    fn test_account_link_event() {
        let parsed = parse(event(
            "accountLink",
            json!({"link": {"result": "failed", "nonce": "xxxxxxxxxxxxxxx"}}),
        ));
        assert_eq!(parsed.reply_token(), None);
        let Event::AccountLink(link) = parsed else {
            panic!("expected accountLink event");
        };
        assert_eq!(link.link.result, LinkResult::Failed);
    }

    #[test]
    fn test_things_event() {
        let parsed = parse(event(
            "things",
            json!({"replyToken": "rt", "things": {"deviceId": "t2016", "type": "link"}}),
        ));
        let Event::Things(things) = parsed else {
            panic!("expected things event");
        };
        assert_eq!(things.things.device_id(), Some("t2016"));
    }

    #[test]
    fn test_module_and_chat_control_events() {
        let mut module = event("module", json!({"module": {"type": "attached", "botId": "U1", "scopes": []}}));
        module.as_object_mut().unwrap().remove("source");
        let module = parse(module);
        assert!(module.source().is_none());
        assert!(matches!(module, Event::Module(ModuleEvent { module: ModuleContent::Attached(_), .. })));

        let activated = parse(event("activated", json!({"chatControl": {"expireAt": 1462629479860i64}})));
        let Event::Activated(activated) = activated else {
            panic!("expected activated event");
        };
        assert_eq!(activated.chat_control.expire_at, 1462629479860);

        for kind in ["deactivated", "botSuspended", "botResumed"] {
            let parsed = parse(event(kind, json!({})));
            assert!(!parsed.is_unknown(), "{} should be known", kind);
            assert_eq!(parsed.kind(), Some(kind));
        }
    }

    #[test]
    fn test_pnp_delivery_completion() {
        let parsed = parse(event("delivery", json!({"delivery": {"data": "tag-1"}})));
        let Event::PnpDeliveryCompletion(delivery) = parsed else {
            panic!("expected delivery event");
        };
        assert_eq!(delivery.delivery.data, "tag-1");
    }

    #[test]
    fn test_timestamp_utc() {
        let parsed = parse(event("unfollow", json!({})));
        let utc = parsed.timestamp_utc().unwrap();
        assert_eq!(utc.timestamp_millis(), 1462629479859);
    }

    #[test]
    fn test_known_event_serializes_back_to_wire_shape() {
        let raw = event(
            "message",
            json!({"replyToken": "rt", "message": {"id": "1", "type": "text", "text": "hi"}}),
        );
        let parsed = parse(raw.clone());
        assert_eq!(serde_json::to_value(&parsed).unwrap(), raw);
    }

    #[test]
    fn test_unrecognised_string_values_are_kept() {
        let mut raw = event(
            "beacon",
            json!({"replyToken": "rt", "beacon": {"hwid": "d41d8cd98f", "type": "leave"}}),
        );
        raw["mode"] = json!("paused");
        let parsed = parse(raw.clone());

        assert_eq!(parsed.mode(), Some(&EventMode::Unknown("paused".to_string())));
        let Event::Beacon(beacon) = &parsed else {
            panic!("expected beacon event");
        };
        assert!(beacon.beacon.kind.is_unknown());
        assert_eq!(beacon.beacon.kind.as_str(), "leave");
        assert_eq!(serde_json::to_value(&parsed).unwrap(), raw);
    }

    #[test]
    fn test_unrecognised_link_result_is_kept() {
        let raw = event(
            "accountLink",
            json!({"link": {"result": "pending", "nonce": "n"}}),
        );
        let parsed = parse(raw.clone());
        let Event::AccountLink(link) = &parsed else {
            panic!("expected accountLink event");
        };
        assert_eq!(link.link.result, LinkResult::Unknown("pending".to_string()));
        assert_eq!(link.link.result.to_string(), "pending");
        assert_eq!(serde_json::to_value(&parsed).unwrap(), raw);
    }

    #[test]
    fn test_known_string_values_round_trip() {
        assert_eq!(EventMode::from("standby"), EventMode::Standby);
        assert_eq!(BeaconEventType::from("banner").as_str(), "banner");
        assert_eq!(serde_json::to_value(LinkResult::Ok).unwrap(), json!("ok"));
        assert!(!EventMode::Active.is_unknown());
    }

    #[test]
    fn test_null_optional_fields_are_absent() {
        let parsed = parse(event(
            "postback",
            json!({"replyToken": null, "postback": {"data": "action=buy", "params": null}}),
        ));
        assert_eq!(parsed.reply_token(), None);
        let Event::Postback(postback) = parsed else {
            panic!("expected postback event");
        };
        assert_eq!(postback.postback.data, "action=buy");
        assert!(postback.postback.params.is_none());

        let parsed = parse(event(
            "message",
            json!({
                "replyToken": null,
                "message": {
                    "id": "l1",
                    "type": "location",
                    "title": null,
                    "address": null,
                    "latitude": 35.6,
                    "longitude": 139.7
                }
            }),
        ));
        assert_eq!(parsed.reply_token(), None);
        let Event::Message(message) = parsed else {
            panic!("expected message event");
        };
        let MessageContent::Location(location) = message.message else {
            panic!("expected location content");
        };
        assert!(location.title.is_none());
        assert!(location.address.is_none());
    }
}
