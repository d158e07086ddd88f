//! Webhook server for LINE
//!
//! Verifies `X-Line-Signature` over the raw body, parses the events and hands
//! them to the configured [`EventHandler`].

use std::future::Future;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};
use tracing::{debug, error, info, warn};

use line_webhook::signature::SIGNATURE_HEADER;
use line_webhook::WebhookError;

use crate::config::GatewayConfig;
use crate::error::{GatewayError, Result};
use crate::handler::EventHandler;

/// Webhook server state
#[derive(Clone)]
pub struct WebhookState {
    pub channel_secret: String,
    pub handler: Arc<dyn EventHandler>,
}

/// Create webhook router
pub fn create_webhook_router(state: WebhookState, path: &str) -> Router {
    Router::new()
        .route(path, post(handle_webhook))
        .with_state(Arc::new(state))
}

/// Handle incoming webhook
async fn handle_webhook(
    State(state): State<Arc<WebhookState>>,
    headers: HeaderMap,
    body: Bytes,
) -> std::result::Result<StatusCode, StatusCode> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            warn!("Missing x-line-signature header");
            StatusCode::BAD_REQUEST
        })?;

    match line_webhook::verify(&body, &state.channel_secret, signature) {
        Ok(true) => {}
        Ok(false) => {
            warn!("Invalid signature");
            return Err(StatusCode::UNAUTHORIZED);
        }
        Err(WebhookError::InvalidSignature) => {
            warn!("Empty x-line-signature header");
            return Err(StatusCode::BAD_REQUEST);
        }
        Err(e) => {
            error!("Signature verification failed: {}", e);
            return Err(StatusCode::BAD_REQUEST);
        }
    }

    let envelope = line_webhook::parse(&body).map_err(|e| {
        error!("Failed to parse webhook body: {}", e);
        StatusCode::BAD_REQUEST
    })?;

    debug!(
        "Received {} event(s) for destination: {}",
        envelope.events.len(),
        envelope.destination
    );

    for event in &envelope.events {
        if let Err(e) = state.handler.handle_event(&envelope.destination, event).await {
            error!(
                "Error handling {} event: {}",
                event.kind().unwrap_or("untyped"),
                e
            );
            // Continue processing other events
        }
    }

    Ok(StatusCode::OK)
}

/// Start webhook server and run until `shutdown` resolves
pub async fn start_webhook_server<F>(
    config: &GatewayConfig,
    handler: Arc<dyn EventHandler>,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    config.validate()?;

    let state = WebhookState {
        channel_secret: config.channel_secret.clone(),
        handler,
    };
    let app = create_webhook_router(state, &config.webhook.path);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        "LINE webhook server listening on {}{}",
        addr, config.webhook.path
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| GatewayError::Server(e.to_string()))?;

    info!("LINE webhook server stopped");
    Ok(())
}
