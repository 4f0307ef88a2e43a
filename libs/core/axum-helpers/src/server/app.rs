use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{method_not_allowed, not_found};
use axum::{Json, Router, routing::get};
use core_config::server::ServerConfig;
use std::future::IntoFuture;
use std::io;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

/// Wraps domain routes with the cross-cutting layers every service gets.
///
/// - API routes nested under `/api`
/// - OpenAPI document at `/api-docs/openapi.json`
/// - JSON 404 and 405 fallbacks
/// - request tracing
///
/// Domain routers apply their own state before being passed in.
pub fn create_router<T>(apis: Router) -> Router
where
    T: OpenApi + 'static,
{
    let openapi = T::openapi();

    Router::new()
        .route(
            "/api-docs/openapi.json",
            get(move || {
                let doc = openapi.clone();
                async move { Json(doc) }
            }),
        )
        .nest("/api", apis)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Serves `router` until `shutdown` fires, then drains in-flight requests.
///
/// Draining is bounded by `server_config.shutdown_timeout`; past that the
/// server future is dropped and the function returns.
pub async fn create_app(
    router: Router,
    server_config: &ServerConfig,
    shutdown: ShutdownCoordinator,
) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let signal = {
        let shutdown = shutdown.clone();
        async move { shutdown.wait_for_signal().await }
    };

    let server = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(signal)
        .into_future();

    let timeout = server_config.shutdown_timeout;
    let mut stopping = shutdown.subscribe();
    let deadline = async move {
        let _ = stopping.wait_for(|stopping| *stopping).await;
        tokio::time::sleep(timeout).await;
    };

    tokio::select! {
        result = server => result.inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        }),
        _ = deadline => {
            warn!("Graceful shutdown exceeded {:?}, forcing exit", timeout);
            Ok(())
        }
    }
}
