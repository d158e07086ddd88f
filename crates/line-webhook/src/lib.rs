//! line-webhook: LINE Messaging API の Webhook コア
//!
//! `X-Line-Signature` の検証と、Webhook イベントペイロードの型付きパースを提供します。
//! 未知のイベント種別やサブタイプはエラーにせず `Unknown` として保持します。

pub mod error;
pub mod event;
pub mod parser;
pub mod signature;

mod union;

pub use error::{Result, WebhookError};
pub use event::{
    DeliveryContext, Event, EventBase, EventMode, MessageContent, Source, ThingsContent,
    UnknownEvent, UnknownVariant,
};
pub use parser::{parse, WebhookEnvelope};
pub use signature::{compute_signature, verify};
