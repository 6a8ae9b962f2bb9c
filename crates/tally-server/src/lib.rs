//! Tally Web Server
//!
//! Axum-based REST API for monthly expense summaries.
//!
//! - `POST /analyze` aggregates a list of expenses by month
//! - `GET /health` reports liveness
//!
//! The service holds no state between requests. Error responses never carry
//! internal details; those are logged instead.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::{error, info};

mod handlers;

/// Maximum request body size (2 MB)
pub const MAX_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Service name reported by `/health` unless configured otherwise
pub const DEFAULT_SERVICE_NAME: &str = "tally";

/// Message returned for every unhandled failure
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Name reported by the health check
    pub service_name: String,
    /// Allowed CORS origins (empty = any origin)
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            allowed_origins: vec![],
        }
    }
}

/// Shared application state
pub struct AppState {
    pub config: ServerConfig,
}

/// Create the application router
pub fn create_router(config: ServerConfig) -> Router {
    let cors = cors_layer(&config.allowed_origins);

    let state = Arc::new(AppState { config });

    Router::new()
        .route("/analyze", post(handlers::analyze))
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        // Browser front-ends call this service from their own origin
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

/// Start the server with custom configuration
pub async fn serve_with_config(host: &str, port: u16, config: ServerConfig) -> anyhow::Result<()> {
    if config.allowed_origins.is_empty() {
        info!("CORS: any origin allowed");
    } else {
        info!("CORS: allowed origins {}", config.allowed_origins.join(", "));
    }

    let app = create_router(config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    /// Map a core error, keeping client input errors as 400s
    pub fn from_core(err: tally_core::Error) -> Self {
        match err {
            tally_core::Error::NoExpenses => Self::bad_request(&err.to_string()),
            other => other.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: INTERNAL_ERROR_MESSAGE.to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }
}
