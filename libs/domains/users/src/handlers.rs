//! HTTP handlers for Users API

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestValidationResponse, ConflictResponse, DatabaseErrorResponse,
        NotFoundResponse,
    },
    ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{CreateUser, ListItemRequest, MessageResponse, UserDto};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_users,
        get_user,
        create_user,
        add_to_cart,
        remove_from_cart,
        clear_cart,
        add_to_favorites,
        remove_from_favorites,
        clear_favorites
    ),
    components(
        schemas(UserDto, CreateUser, ListItemRequest, MessageResponse),
        responses(
            BadRequestValidationResponse,
            NotFoundResponse,
            ConflictResponse,
            DatabaseErrorResponse
        )
    ),
    tags(
        (name = "Users", description = "Users with their carts and favorites")
    )
)]
pub struct ApiDoc;

pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users))
        .route("/create", post(create_user))
        .route("/add/cart", post(add_to_cart))
        .route("/remove/cart", delete(remove_from_cart))
        .route("/add/favorite", post(add_to_favorites))
        .route("/remove/favorite", delete(remove_from_favorites))
        .route("/{id}", get(get_user))
        .route("/{id}/cart/clear", delete(clear_cart))
        .route("/{id}/favorites/clear", delete(clear_favorites))
        .with_state(shared_service)
}

/// List all users
#[utoipa::path(
    get,
    path = "",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 500, response = DatabaseErrorResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<Vec<UserDto>>> {
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = DatabaseErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> UserResult<Json<UserDto>> {
    let user = service.get_user(&id).await?;
    Ok(Json(user))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/create",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = DatabaseErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> UserResult<(StatusCode, Json<MessageResponse>)> {
    let message = service.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// Add a product to a user's cart
#[utoipa::path(
    post,
    path = "/add/cart",
    tag = "Users",
    request_body = ListItemRequest,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = DatabaseErrorResponse)
    )
)]
async fn add_to_cart<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<ListItemRequest>,
) -> UserResult<Json<UserDto>> {
    let user = service.add_to_cart(input).await?;
    Ok(Json(user))
}

/// Remove every occurrence of a product from a user's cart
#[utoipa::path(
    delete,
    path = "/remove/cart",
    tag = "Users",
    request_body = ListItemRequest,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = DatabaseErrorResponse)
    )
)]
async fn remove_from_cart<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<ListItemRequest>,
) -> UserResult<Json<UserDto>> {
    let user = service.remove_from_cart(input).await?;
    Ok(Json(user))
}

/// Empty a user's cart
#[utoipa::path(
    delete,
    path = "/{id}/cart/clear",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = DatabaseErrorResponse)
    )
)]
async fn clear_cart<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> UserResult<Json<UserDto>> {
    let user = service.clear_cart(&id).await?;
    Ok(Json(user))
}

/// Add a product to a user's favorites
#[utoipa::path(
    post,
    path = "/add/favorite",
    tag = "Users",
    request_body = ListItemRequest,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = DatabaseErrorResponse)
    )
)]
async fn add_to_favorites<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<ListItemRequest>,
) -> UserResult<Json<UserDto>> {
    let user = service.add_to_favorites(input).await?;
    Ok(Json(user))
}

/// Remove every occurrence of a product from a user's favorites
#[utoipa::path(
    delete,
    path = "/remove/favorite",
    tag = "Users",
    request_body = ListItemRequest,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = DatabaseErrorResponse)
    )
)]
async fn remove_from_favorites<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<ListItemRequest>,
) -> UserResult<Json<UserDto>> {
    let user = service.remove_from_favorites(input).await?;
    Ok(Json(user))
}

/// Empty a user's favorites
#[utoipa::path(
    delete,
    path = "/{id}/favorites/clear",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = DatabaseErrorResponse)
    )
)]
async fn clear_favorites<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> UserResult<Json<UserDto>> {
    let user = service.clear_favorites(&id).await?;
    Ok(Json(user))
}
