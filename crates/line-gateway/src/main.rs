//! line-gateway: LINE Webhook Gateway Main Binary
//!
//! Usage:
//!   line-gateway                    - Start the webhook server
//!   line-gateway --config <path>    - Use a specific TOML config file
//!   line-gateway --help             - Show help

use std::sync::Arc;

use line_gateway::{start_webhook_server, EventHandler, GatewayConfig, LoggingHandler};
use tracing_subscriber::EnvFilter;

/// Run mode
enum RunMode {
    /// Webhook server, optionally with an explicit config file
    Server { config_path: Option<String> },
    /// Show help
    Help,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mode = parse_args()?;

    let config_path = match mode {
        RunMode::Help => {
            print_help();
            return Ok(());
        }
        RunMode::Version => {
            println!("line-gateway {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        RunMode::Server { config_path } => config_path,
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    // Load .env file
    dotenvy::dotenv().ok();

    let config = match config_path {
        Some(path) => GatewayConfig::from_toml_file(&path),
        None => GatewayConfig::load(),
    }
    .map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    tracing::info!("Starting line-gateway...");
    tracing::debug!("Config: {:?}", config);

    let handler: Arc<dyn EventHandler> = Arc::new(LoggingHandler::new());

    start_webhook_server(&config, handler, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
        }
        tracing::info!("Shutting down...");
    })
    .await
    .map_err(|e| anyhow::anyhow!("Webhook server error: {}", e))?;

    Ok(())
}

/// Parse command line arguments
fn parse_args() -> anyhow::Result<RunMode> {
    let mut args = std::env::args().skip(1);
    let mut config_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(RunMode::Help),
            "--version" | "-v" => return Ok(RunMode::Version),
            "--config" | "-c" => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a path"))?;
                config_path = Some(path);
            }
            other => anyhow::bail!("Unknown argument: {}", other),
        }
    }

    Ok(RunMode::Server { config_path })
}

/// Print help message
fn print_help() {
    println!("line-gateway - LINE Webhook Gateway");
    println!();
    println!("Usage:");
    println!("  line-gateway                  Start the webhook server");
    println!("  line-gateway --config <path> Load settings from a TOML file");
    println!("  line-gateway --help          Show this help message");
    println!("  line-gateway --version       Show version");
    println!();
    println!("Environment Variables:");
    println!("  LINE_CHANNEL_SECRET   Channel secret (required)");
    println!("  WEBHOOK_BIND_ADDRESS  Bind address (default: 0.0.0.0)");
    println!("  WEBHOOK_PORT          Port (default: 8080)");
    println!("  WEBHOOK_PATH          Webhook route (default: /webhook)");
    println!("  RUST_LOG              Log filter (default: info)");
}
