//! HTTP handlers for Products API

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use axum_helpers::errors::responses::{DatabaseErrorResponse, NotFoundResponse};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::ProductDto;
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, get_product),
    components(
        schemas(ProductDto),
        responses(NotFoundResponse, DatabaseErrorResponse)
    ),
    tags(
        (name = "Products", description = "Product catalog (read-only)")
    )
)]
pub struct ApiDoc;

/// Products router: `GET /` and `GET /{id}`
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products))
        .route("/{id}", get(get_product))
        .with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "All products", body = Vec<ProductDto>),
        (status = 500, response = DatabaseErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<ProductDto>>> {
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductDto),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = DatabaseErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<ProductDto>> {
    let product = service.get_product(&id).await?;
    Ok(Json(product))
}
