//! Users API routes

use axum::Router;
use domain_users::{MongoUserRepository, UserService, handlers};

use crate::state::AppState;

pub fn repository(state: &AppState) -> MongoUserRepository {
    MongoUserRepository::new(&state.db)
}

pub fn router(state: &AppState) -> Router {
    handlers::router(UserService::new(repository(state)))
}
