//! Webhook request body parser
//!
//! Decodes the envelope (`destination` + `events`) into typed [`Event`]s.
//! Only a body that is not a JSON object with a string `destination` and an
//! `events` array is an error; individual events never fail the parse.
//! Call [`crate::verify`] on the same bytes first.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WebhookError};
use crate::event::Event;

/// Top-level webhook request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEnvelope {
    /// User id of the bot that should receive the events.
    pub destination: String,
    /// Events in delivery order. May be empty (LINE sends an empty list when
    /// verifying the webhook URL).
    pub events: Vec<Event>,
}

impl WebhookEnvelope {
    /// Number of events that did not match a known type.
    pub fn unknown_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_unknown()).count()
    }
}

/// Parse a raw webhook body.
///
/// # Errors
///
/// [`WebhookError::MalformedPayload`] if the body is not valid JSON or does
/// not have the envelope shape.
///
/// # Examples
///
/// ```
/// let body = br#"{"destination":"U123","events":[{"type":"somethingNew","timestamp":1}]}"#;
/// let envelope = line_webhook::parse(body).unwrap();
///
/// assert_eq!(envelope.destination, "U123");
/// assert_eq!(envelope.events[0].kind(), Some("somethingNew"));
/// assert!(envelope.events[0].is_unknown());
/// ```
pub fn parse(body: &[u8]) -> Result<WebhookEnvelope> {
    serde_json::from_slice(body).map_err(WebhookError::MalformedPayload)
}
