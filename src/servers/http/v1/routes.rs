//! HTTP server routes for version `v1`.
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{HeaderName, Request};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tower_http::propagate_header::PropagateHeaderLayer;
use tower_http::request_id::{MakeRequestUuid, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::{Level, Span};

use super::handlers::{health_check, stats};
use crate::core::Tracker;
use crate::servers::http::HTTP_STATS_LOG_TARGET;

/// It adds the routes to the router.
///
/// Every request gets an `x-request-id` header, which is copied to the
/// response and logged with the request and the response.
pub fn router(tracker: Arc<Tracker>, server_socket_addr: SocketAddr) -> Router {
    Router::new()
        // Health check
        .route("/health_check", get(health_check::handler).with_state(tracker.clone()))
        // Statistics
        .route("/stats", get(stats::handle).with_state(tracker.clone()))
        .route("/stats.json", get(stats::handle_json).with_state(tracker))
        .layer(PropagateHeaderLayer::new(HeaderName::from_static("x-request-id")))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(move |request: &Request<Body>, _span: &Span| {
                    let method = request.method().to_string();
                    let uri = request.uri().to_string();
                    let request_id = request
                        .headers()
                        .get("x-request-id")
                        .map(|v| v.to_str().unwrap_or_default())
                        .unwrap_or_default();

                    tracing::info!(
                        target: HTTP_STATS_LOG_TARGET,
                        server_socket_addr = %server_socket_addr, method = %method, uri = %uri, request_id = %request_id, "request");
                })
                .on_response(move |response: &Response, latency: Duration, _span: &Span| {
                    let status_code = response.status();
                    let request_id = response
                        .headers()
                        .get("x-request-id")
                        .map(|v| v.to_str().unwrap_or_default())
                        .unwrap_or_default();
                    let latency_ms = latency.as_millis();

                    tracing::info!(
                        target: HTTP_STATS_LOG_TARGET,
                        server_socket_addr = %server_socket_addr, latency = %latency_ms, status = %status_code, request_id = %request_id, "response");
                }),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
