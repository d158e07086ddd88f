//! line-gateway: LINE Webhook Gateway
//!
//! LINE Messaging API からの Webhook を受信し、署名検証・イベントのパースを行った上で
//! [`EventHandler`] に配送します。

pub mod config;
pub mod error;
pub mod handler;
pub mod webhook;

pub use config::{GatewayConfig, WebhookConfig};
pub use error::{GatewayError, Result};
pub use handler::{EventHandler, LoggingHandler};
pub use webhook::{create_webhook_router, start_webhook_server, WebhookState};
