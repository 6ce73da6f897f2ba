//! # Axum Helpers
//!
//! Shared HTTP plumbing for the shop services.
//!
//! - **[`server`]**: router assembly, health endpoints, graceful shutdown
//! - **[`middleware`]**: CORS and security headers
//! - **[`errors`]**: `AppError` and the JSON error body
//! - **[`extractors`]**: validated JSON bodies and field validators

pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};

pub use middleware::{create_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{ValidatedJson, not_blank};
