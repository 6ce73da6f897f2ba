use axum::http::{HeaderValue, Method};
use core_config::server::CorsOrigins;
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

const ALLOWED_METHODS: [Method; 4] = [Method::GET, Method::POST, Method::PUT, Method::DELETE];

/// CORS layer for the storefront API.
///
/// Methods GET/POST/PUT/DELETE and any request header are allowed. With
/// [`CorsOrigins::Any`] every origin is accepted, which is only suitable for
/// non-production deployments.
///
/// # Errors
/// Returns `InvalidInput` when a configured origin is not a valid header value.
pub fn create_cors_layer(origins: &CorsOrigins) -> io::Result<CorsLayer> {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::any(),
        CorsOrigins::List(list) => {
            let values = list
                .iter()
                .map(|origin| origin.parse::<HeaderValue>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| {
                    io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
                    )
                })?;
            AllowOrigin::list(values)
        }
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600)))
}
