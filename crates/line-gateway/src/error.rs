//! エラー型定義 (line-gateway)

use line_webhook::WebhookError;
use thiserror::Error;

/// line-gateway のエラー型
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Channel secret not configured")]
    ChannelSecretNotConfigured,

    #[error("Webhook error: {0}")]
    Webhook(#[from] WebhookError),

    #[error("Handler error: {0}")]
    Handler(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, GatewayError>;
