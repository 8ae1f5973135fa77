//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Extension},
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use ocrspace::{OcrSpaceClient, OcrSpaceOptions};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::kernel::WebhookClient;
use crate::server::routes::{health_handler, inquiry_handler, scan_card_handler};

/// Card photos and inquiry attachments beyond this size are rejected.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub ocr: Arc<OcrSpaceClient>,
    pub webhook: Arc<WebhookClient>,
}

/// Build the Axum application router
pub fn build_app(config: &Config) -> anyhow::Result<Router> {
    let ocr_options = OcrSpaceOptions::new(config.ocr_space_api_key.clone())
        .with_language(config.ocr_language.clone());
    let ocr = Arc::new(OcrSpaceClient::new(ocr_options)?);
    let webhook = Arc::new(WebhookClient::new(config.inquiry_webhook_url.clone())?);

    let app_state = AppState { ocr, webhook };

    // CORS configuration - the browser client runs on a different origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    let app = Router::new()
        // Upload endpoints, body-limited
        .route("/api/scan-card", post(scan_card_handler))
        .route("/api/inquiry", post(inquiry_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        // Health check (no body limit concerns)
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}
