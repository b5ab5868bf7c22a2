//! Router assembly: API routes, probes, CORS headers and HTTP tracing.

use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::{
    set_header::SetResponseHeaderLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::handlers;
use crate::state::AppState;

/// Build the application router with:
/// - the three practice endpoints under `/api`, each answering `OPTIONS` with 204
///   and any other unsupported verb with 405 (`HEAD` included, which `get` would
///   otherwise accept)
/// - liveness/readiness probes
/// - permissive CORS headers on every response
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/sentence/random",
            get(handlers::random_sentence)
                .head(handlers::method_not_allowed)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/answer/check",
            post(handlers::check_answer)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/sentence/report",
            post(handlers::report_sentence)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/liveness",
            get(handlers::liveness).options(handlers::preflight),
        )
        .route(
            "/api/readiness",
            get(handlers::readiness).options(handlers::preflight),
        )
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
