//! エラー型定義 (line-webhook)

use thiserror::Error;

/// line-webhook のエラー型
#[derive(Error, Debug)]
pub enum WebhookError {
    /// The `X-Line-Signature` header was empty or missing.
    #[error("Invalid signature: signature header is empty")]
    InvalidSignature,

    /// The top-level envelope could not be decoded.
    #[error("Malformed webhook payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, WebhookError>;
