//! Event handler seam
//!
//! The webhook endpoint hands every parsed event to an [`EventHandler`].
//! Applications implement the trait to reply, store or forward events.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use line_webhook::event::{Event, MessageContent, ThingsContent, UnknownEvent};

use crate::error::Result;

/// Receives verified, parsed webhook events
///
/// Events arrive one at a time in delivery order. An error is logged by the
/// caller and does not stop the remaining events of the same request.
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Handle a single event addressed to `destination`
    async fn handle_event(&self, destination: &str, event: &Event) -> Result<()>;
}

/// Handler that writes a one-line summary of each event to the log
#[derive(Debug, Clone, Default)]
pub struct LoggingHandler;

impl LoggingHandler {
    pub fn new() -> Self {
        Self
    }

    /// Top-level field names of an unknown event. Values are left out since
    /// they may carry user ids or message text.
    pub fn field_names(event: &UnknownEvent) -> Vec<&str> {
        event
            .raw()
            .as_object()
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Short human-readable description of an event
    pub fn summarize(event: &Event) -> String {
        let sender = event
            .source()
            .and_then(|s| s.sender_id())
            .unwrap_or("-");

        match event {
            Event::Message(e) => match &e.message {
                MessageContent::Text(text) => {
                    format!("message/text from {}: {}", sender, text.text)
                }
                MessageContent::Location(location) => format!(
                    "message/location from {}: ({}, {})",
                    sender, location.latitude, location.longitude
                ),
                MessageContent::Sticker(sticker) => format!(
                    "message/sticker from {}: {}/{}",
                    sender, sticker.package_id, sticker.sticker_id
                ),
                content => format!(
                    "message/{} from {}",
                    content.kind().unwrap_or("?"),
                    sender
                ),
            },
            Event::Postback(e) => format!("postback from {}: {}", sender, e.postback.data),
            Event::Beacon(e) => format!("beacon {} from {}: {}", e.beacon.kind, sender, e.beacon.hwid),
            Event::Things(e) => match &e.things {
                ThingsContent::ScenarioResult(s) => format!(
                    "things/scenarioResult {} on {}: {}",
                    s.result.scenario_id, s.device_id, s.result.result_code
                ),
                things => format!(
                    "things/{} on {}",
                    things.kind().unwrap_or("?"),
                    things.device_id().unwrap_or("-")
                ),
            },
            Event::Unsend(e) => format!("unsend from {}: {}", sender, e.unsend.message_id),
            Event::Unknown(e) => format!("unknown event `{}`", e.kind().unwrap_or("<none>")),
            other => format!("{} from {}", other.kind().unwrap_or("?"), sender),
        }
    }
}

#[async_trait]
impl EventHandler for LoggingHandler {
    async fn handle_event(&self, destination: &str, event: &Event) -> Result<()> {
        let summary = Self::summarize(event);

        if event.is_unknown() {
            warn!("[{}] {}", destination, summary);
            if let Event::Unknown(unknown) = event {
                debug!("Unknown event fields: {:?}", Self::field_names(unknown));
            }
        } else if event.is_redelivery() == Some(true) {
            info!("[{}] (redelivery) {}", destination, summary);
        } else {
            info!("[{}] {}", destination, summary);
        }

        Ok(())
    }
}
