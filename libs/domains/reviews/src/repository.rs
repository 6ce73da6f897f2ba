use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ReviewResult;
use crate::models::{CreateReview, Review};

/// Data access for reviews
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Insert a new review with a store-generated id
    async fn create(&self, input: CreateReview) -> ReviewResult<Review>;

    async fn get_by_id(&self, id: &str) -> ReviewResult<Option<Review>>;

    /// All reviews, oldest first
    async fn list(&self) -> ReviewResult<Vec<Review>>;

    async fn find_by_product_id(&self, product_id: &str) -> ReviewResult<Vec<Review>>;

    async fn find_by_user_id(&self, user_id: &str) -> ReviewResult<Vec<Review>>;
}

/// In-memory review store, used for tests and local development
#[derive(Debug, Default, Clone)]
pub struct InMemoryReviewRepository {
    reviews: Arc<RwLock<Vec<Review>>>,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn matching(&self, pred: impl Fn(&Review) -> bool) -> Vec<Review> {
        let reviews = self.reviews.read().await;
        reviews.iter().filter(|r| pred(r)).cloned().collect()
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn create(&self, input: CreateReview) -> ReviewResult<Review> {
        let review = Review::new(input);
        self.reviews.write().await.push(review.clone());
        tracing::info!(review_id = %review.id, "Created review");
        Ok(review)
    }

    async fn get_by_id(&self, id: &str) -> ReviewResult<Option<Review>> {
        let reviews = self.reviews.read().await;
        Ok(reviews.iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self) -> ReviewResult<Vec<Review>> {
        Ok(self.reviews.read().await.clone())
    }

    async fn find_by_product_id(&self, product_id: &str) -> ReviewResult<Vec<Review>> {
        Ok(self.matching(|r| r.product_id == product_id).await)
    }

    async fn find_by_user_id(&self, user_id: &str) -> ReviewResult<Vec<Review>> {
        Ok(self.matching(|r| r.user_id == user_id).await)
    }
}
