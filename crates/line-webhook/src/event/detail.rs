//! Small event-specific sub-objects without a discriminator of their own.

use serde::{Deserialize, Serialize};

use super::Source;
use crate::union::string_enum;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsendDetail {
    pub message_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowDetail {
    /// `true` when the user unblocked the account rather than adding it.
    pub is_unblocked: bool,
}

/// Users who joined or left a group chat or room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Members {
    pub members: Vec<Source>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPlayComplete {
    pub tracking_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconContent {
    /// Hardware id of the beacon.
    pub hwid: String,
    #[serde(rename = "type")]
    pub kind: BeaconEventType,
    /// Device message, hex encoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dm: Option<String>,
}

string_enum! {
    pub enum BeaconEventType {
        Enter => "enter",
        /// The user tapped a beacon banner.
        Banner => "banner",
        Stay => "stay",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkContent {
    pub result: LinkResult,
    pub nonce: String,
}

string_enum! {
    pub enum LinkResult {
        Ok => "ok",
        Failed => "failed",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatControl {
    /// Epoch milliseconds at which the active chat control expires.
    pub expire_at: i64,
}

/// Delivery report for a LINE notification message sent by phone number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PnpDelivery {
    /// The value given in the `X-Line-Delivery-Tag` header when sending.
    pub data: String,
}
