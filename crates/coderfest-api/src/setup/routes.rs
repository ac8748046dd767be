//! Route configuration and middleware stack.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use coderfest_core::Config;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::auth::{auth_middleware, AuthState};
use crate::handlers;
use crate::state::AppState;

const DEFAULT_HTTP_CONCURRENCY_LIMIT: usize = 1024;

/// Setup all application routes.
///
/// `/health` is public; `/register` and `/registrations` require the shared
/// bearer token. The request body limit covers the payment-proof upload plus
/// multipart overhead.
pub async fn setup_routes(config: &Config, state: AppState) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(config)?;
    let auth_state = Arc::new(AuthState {
        api_key: config.api_key().to_string(),
    });

    let public_routes = Router::new().route("/health", get(handlers::health::health_check));

    let protected_routes = Router::new()
        .route("/register", post(handlers::register::register))
        .route(
            "/registrations",
            get(handlers::registrations::list_registrations),
        )
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ));

    let app = public_routes
        .merge(protected_routes)
        .layer(ConcurrencyLimitLayer::new(DEFAULT_HTTP_CONCURRENCY_LIMIT))
        .layer(RequestBodyLimitLayer::new(config.max_upload_size_bytes()))
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

/// CORS policy. No configured origins means permissive (the registration
/// form is served from arbitrary dev hosts); configured origins are parsed
/// strictly.
fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let origins = config.cors_origins();
    let cors = if origins.is_empty() || origins.contains(&"*".to_string()) {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let parsed: Result<Vec<HeaderValue>, _> = origins.iter().map(|o| o.parse()).collect();
        CorsLayer::new()
            .allow_origin(parsed.map_err(|e| anyhow::anyhow!("Invalid CORS origin: {}", e))?)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    };
    Ok(cors)
}
