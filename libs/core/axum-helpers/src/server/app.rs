use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::middleware::{create_cors_layer, security_headers};
use axum::{Router, middleware};
use core_config::server::{CorsOrigins, ServerConfig};
use std::future::{Future, IntoFuture};
use std::io;
use std::time::Duration;
use tokio::task::JoinHandle;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, error, info, warn};
use utoipa::OpenApi;

/// Wrap domain routers with documentation and middleware.
///
/// - OpenAPI UIs at `/swagger-ui`, `/redoc`, `/rapidoc`, `/scalar`
///   (spec at `/api-docs/openapi.json`)
/// - `apis` nested under `/api`
/// - JSON 404 fallback and 405 handler
/// - Tracing, security headers, CORS, response compression
///
/// `apis` must already have its state applied.
///
/// # Errors
/// Returns `InvalidInput` when a configured CORS origin is malformed.
pub fn create_router<T>(apis: Router, cors_origins: &CorsOrigins) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let cors_layer = create_cors_layer(cors_origins)?;
    info!(?cors_origins, "CORS configured");

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Serve `router` until SIGINT/SIGTERM, then run `cleanup` bounded by
/// `shutdown_timeout`.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::new();
    let serve_signal = coordinator.clone();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = spawn_cleanup(coordinator.clone(), shutdown_timeout, cleanup);

    let serve = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { serve_signal.wait_for_signal().await });

    serve_then_cleanup(serve, &coordinator, cleanup_handle).await
}

fn spawn_cleanup<F>(
    coordinator: ShutdownCoordinator,
    shutdown_timeout: Duration,
    cleanup: F,
) -> JoinHandle<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(async move {
        coordinator.wait_for_signal().await;

        info!(?shutdown_timeout, "Running cleanup tasks");
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("Cleanup completed"),
            Err(_) => warn!(?shutdown_timeout, "Cleanup timed out, forcing shutdown"),
        }
    })
}

async fn serve_then_cleanup<S>(
    serve: S,
    coordinator: &ShutdownCoordinator,
    cleanup_handle: JoinHandle<()>,
) -> io::Result<()>
where
    S: IntoFuture<Output = io::Result<()>>,
{
    let serve_result = serve.await;

    if let Err(e) = &serve_result {
        error!(error = ?e, "Server error");
        // The cleanup task only runs once shutdown has been signalled.
        coordinator.shutdown();
    }

    cleanup_handle.await.ok();

    serve_result
}
