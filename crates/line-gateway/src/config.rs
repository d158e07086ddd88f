//! Configuration management
//!
//! 設定は以下の優先順位で読み込まれます:
//! 1. 環境変数
//! 2. line-gateway.toml 設定ファイル
//! 3. デフォルト値
//!
//! 設定ファイル内では `${VAR_NAME}` 形式で環境変数を展開できます。

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::error::{GatewayError, Result};

/// Default configuration file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "line-gateway.toml";

/// Webhook server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebhookConfig {
    /// Address to bind
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Route receiving the webhook POSTs
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            path: default_path(),
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_path() -> String {
    "/webhook".to_string()
}

/// Main configuration for line-gateway
#[derive(Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Channel secret used to verify `X-Line-Signature`
    #[serde(default)]
    pub channel_secret: String,

    #[serde(default)]
    pub webhook: WebhookConfig,
}

// Keeps the channel secret out of logs.
impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("channel_secret", &"<redacted>")
            .field("webhook", &self.webhook)
            .finish()
    }
}

impl GatewayConfig {
    /// 設定ファイルから環境変数を展開する
    ///
    /// `${VAR_NAME}` 形式の文字列を環境変数の値に置換します。
    /// 環境変数が存在しない場合は空文字列になります。
    fn expand_env_vars(value: &str) -> String {
        let mut result = String::new();
        let mut chars = value.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '$' && chars.peek() == Some(&'{') {
                chars.next(); // '{' を消費

                let mut var_name = String::new();
                for c in chars.by_ref() {
                    if c == '}' {
                        break;
                    }
                    var_name.push(c);
                }

                if let Ok(env_value) = std::env::var(&var_name) {
                    result.push_str(&env_value);
                }
            } else {
                result.push(c);
            }
        }

        result
    }

    /// TOML 文字列から設定を読み込む (環境変数による上書きなし)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let expanded = Self::expand_env_vars(content);

        let toml: TomlConfig = toml::from_str(&expanded)
            .map_err(|e| GatewayError::Config(format!("Failed to parse TOML: {}", e)))?;

        let webhook = toml.webhook.unwrap_or_default();
        Ok(Self {
            channel_secret: toml.line.unwrap_or_default().channel_secret.unwrap_or_default(),
            webhook: WebhookConfig {
                bind_address: webhook.bind_address.unwrap_or_else(default_bind_address),
                port: webhook.port.unwrap_or_else(default_port),
                path: webhook.path.unwrap_or_else(default_path),
            },
        })
    }

    /// TOML 設定ファイルから設定を読み込む
    ///
    /// ファイル内の `${VAR_NAME}` は環境変数の値に置換され、
    /// その後環境変数による上書きが適用されます。
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let mut config = Self::from_toml_str(&content)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// デフォルトパスから設定を読み込む
    ///
    /// `./line-gateway.toml` があれば読み込み、なければ環境変数のみを使用します。
    pub fn load() -> Result<Self> {
        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            return Self::from_toml_file(DEFAULT_CONFIG_FILE);
        }

        Ok(Self::from_env())
    }

    /// 環境変数で設定を上書きする
    fn apply_env_overrides(&mut self) {
        if let Ok(secret) = std::env::var("LINE_CHANNEL_SECRET") {
            if !secret.is_empty() {
                self.channel_secret = secret;
            }
        }

        if let Ok(address) = std::env::var("WEBHOOK_BIND_ADDRESS") {
            if !address.is_empty() {
                self.webhook.bind_address = address;
            }
        }
        if let Ok(port) = std::env::var("WEBHOOK_PORT") {
            self.webhook.port = port_override(&port, self.webhook.port);
        }
        if let Ok(path) = std::env::var("WEBHOOK_PATH") {
            if !path.is_empty() {
                self.webhook.path = path;
            }
        }
    }

    /// Check that the configuration can serve webhooks
    pub fn validate(&self) -> Result<()> {
        if self.channel_secret.trim().is_empty() {
            return Err(GatewayError::ChannelSecretNotConfigured);
        }
        if !self.webhook.path.starts_with('/') {
            return Err(GatewayError::Config(format!(
                "Webhook path must start with '/': {}",
                self.webhook.path
            )));
        }
        Ok(())
    }

    /// `bind_address:port`
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.webhook.bind_address, self.webhook.port)
    }
}

/// `WEBHOOK_PORT` の値を解釈する。不正な値は警告して `current` を維持する。
fn port_override(value: &str, current: u16) -> u16 {
    match value.trim().parse() {
        Ok(port) => port,
        Err(e) => {
            warn!(
                "Ignoring WEBHOOK_PORT={:?} ({}), using port {}",
                value, e, current
            );
            current
        }
    }
}

// ============================================================================
// TOML 構造体定義（ファイル解析用）
// ============================================================================

#[derive(Debug, Deserialize)]
struct TomlConfig {
    /// LINE チャネル設定
    line: Option<TomlLineConfig>,
    /// Webhook サーバー設定
    webhook: Option<TomlWebhookConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct TomlLineConfig {
    /// チャネルシークレット
    channel_secret: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct TomlWebhookConfig {
    bind_address: Option<String>,
    port: Option<u16>,
    path: Option<String>,
}
