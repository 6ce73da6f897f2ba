//! Reviews Domain
//!
//! Reviews reference a user and a product by id. Both must exist when the
//! review is created; nothing links the review back onto either record.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{ReviewError, ReviewResult};
pub use handlers::ApiDoc;
pub use models::{CreateReview, Review, ReviewDto};
pub use self::mongodb::MongoReviewRepository;
pub use repository::{InMemoryReviewRepository, ReviewRepository};
pub use service::ReviewService;
