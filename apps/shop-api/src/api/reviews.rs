//! Reviews API routes
//!
//! The review service reads the product and user collections for its
//! existence checks.

use axum::Router;
use domain_reviews::{MongoReviewRepository, ReviewService, handlers};

use crate::state::AppState;

pub fn repository(state: &AppState) -> MongoReviewRepository {
    MongoReviewRepository::new(&state.db)
}

pub fn router(state: &AppState) -> Router {
    let service = ReviewService::new(
        repository(state),
        super::products::repository(state),
        super::users::repository(state),
    );

    handlers::router(service)
}
