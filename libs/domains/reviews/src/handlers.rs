//! HTTP handlers for Reviews API

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{BadRequestValidationResponse, DatabaseErrorResponse, NotFoundResponse},
    ValidatedJson,
};
use domain_products::ProductRepository;
use domain_users::UserRepository;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ReviewResult;
use crate::models::{CreateReview, ReviewDto};
use crate::repository::ReviewRepository;
use crate::service::ReviewService;

/// OpenAPI documentation for Reviews API
#[derive(OpenApi)]
#[openapi(
    paths(list_reviews, get_review, list_reviews_by_product, create_review),
    components(
        schemas(ReviewDto, CreateReview),
        responses(
            BadRequestValidationResponse,
            NotFoundResponse,
            DatabaseErrorResponse
        )
    ),
    tags(
        (name = "Reviews", description = "Product reviews")
    )
)]
pub struct ApiDoc;

type SharedService<R, P, U> = State<Arc<ReviewService<R, P, U>>>;

pub fn router<R, P, U>(service: ReviewService<R, P, U>) -> Router
where
    R: ReviewRepository + 'static,
    P: ProductRepository + 'static,
    U: UserRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_reviews))
        .route("/create", post(create_review))
        .route("/product/{product_id}", get(list_reviews_by_product))
        .route("/{id}", get(get_review))
        .with_state(shared_service)
}

/// List all reviews
#[utoipa::path(
    get,
    path = "",
    tag = "Reviews",
    responses(
        (status = 200, description = "All reviews", body = Vec<ReviewDto>),
        (status = 500, response = DatabaseErrorResponse)
    )
)]
async fn list_reviews<R, P, U>(
    State(service): SharedService<R, P, U>,
) -> ReviewResult<Json<Vec<ReviewDto>>>
where
    R: ReviewRepository,
    P: ProductRepository,
    U: UserRepository,
{
    let reviews = service.list_reviews().await?;
    Ok(Json(reviews))
}

/// Get a review by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Reviews",
    params(
        ("id" = String, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Review found", body = ReviewDto),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = DatabaseErrorResponse)
    )
)]
async fn get_review<R, P, U>(
    State(service): SharedService<R, P, U>,
    Path(id): Path<String>,
) -> ReviewResult<Json<ReviewDto>>
where
    R: ReviewRepository,
    P: ProductRepository,
    U: UserRepository,
{
    let review = service.get_review(&id).await?;
    Ok(Json(review))
}

/// List the reviews of a product
#[utoipa::path(
    get,
    path = "/product/{product_id}",
    tag = "Reviews",
    params(
        ("product_id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Reviews of the product", body = Vec<ReviewDto>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = DatabaseErrorResponse)
    )
)]
async fn list_reviews_by_product<R, P, U>(
    State(service): SharedService<R, P, U>,
    Path(product_id): Path<String>,
) -> ReviewResult<Json<Vec<ReviewDto>>>
where
    R: ReviewRepository,
    P: ProductRepository,
    U: UserRepository,
{
    let reviews = service.list_reviews_by_product(&product_id).await?;
    Ok(Json(reviews))
}

/// Create a review for an existing user and product
#[utoipa::path(
    post,
    path = "/create",
    tag = "Reviews",
    request_body = CreateReview,
    responses(
        (status = 201, description = "Review created", body = ReviewDto),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = DatabaseErrorResponse)
    )
)]
async fn create_review<R, P, U>(
    State(service): SharedService<R, P, U>,
    ValidatedJson(input): ValidatedJson<CreateReview>,
) -> ReviewResult<(StatusCode, Json<ReviewDto>)>
where
    R: ReviewRepository,
    P: ProductRepository,
    U: UserRepository,
{
    let review = service.create_review(input).await?;
    Ok((StatusCode::CREATED, Json(review)))
}
