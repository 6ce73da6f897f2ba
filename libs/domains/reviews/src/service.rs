//! Review Service - Business logic layer

use domain_products::ProductRepository;
use domain_users::UserRepository;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ReviewError, ReviewResult};
use crate::models::{CreateReview, ReviewDto};
use crate::repository::ReviewRepository;

/// Review operations.
///
/// Holds the product and user repositories only to check that referenced
/// records exist. Creating a review does not touch either of them.
pub struct ReviewService<R, P, U>
where
    R: ReviewRepository,
    P: ProductRepository,
    U: UserRepository,
{
    repository: Arc<R>,
    products: Arc<P>,
    users: Arc<U>,
}

impl<R, P, U> Clone for ReviewService<R, P, U>
where
    R: ReviewRepository,
    P: ProductRepository,
    U: UserRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            products: Arc::clone(&self.products),
            users: Arc::clone(&self.users),
        }
    }
}

impl<R, P, U> ReviewService<R, P, U>
where
    R: ReviewRepository,
    P: ProductRepository,
    U: UserRepository,
{
    pub fn new(repository: R, products: P, users: U) -> Self {
        Self {
            repository: Arc::new(repository),
            products: Arc::new(products),
            users: Arc::new(users),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_reviews(&self) -> ReviewResult<Vec<ReviewDto>> {
        let reviews = self.repository.list().await?;
        Ok(reviews.into_iter().map(ReviewDto::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_review(&self, id: &str) -> ReviewResult<ReviewDto> {
        self.repository
            .get_by_id(id)
            .await?
            .map(ReviewDto::from)
            .ok_or_else(|| ReviewError::NotFound(id.to_string()))
    }

    /// Reviews of one product; the product itself must exist
    #[instrument(skip(self))]
    pub async fn list_reviews_by_product(&self, product_id: &str) -> ReviewResult<Vec<ReviewDto>> {
        self.ensure_product(product_id).await?;

        let reviews = self.repository.find_by_product_id(product_id).await?;
        Ok(reviews
            .into_iter()
            .map(|review| ReviewDto {
                product_id: product_id.to_string(),
                ..ReviewDto::from(review)
            })
            .collect())
    }

    /// Reviews written by one user. The user is not looked up.
    #[instrument(skip(self))]
    pub async fn reviews_by_user(&self, user_id: &str) -> ReviewResult<Vec<ReviewDto>> {
        let reviews = self.repository.find_by_user_id(user_id).await?;
        Ok(reviews.into_iter().map(ReviewDto::from).collect())
    }

    /// Create a review after checking the user, then the product
    #[instrument(skip(self, input), fields(user_id = %input.user_id, product_id = %input.product_id))]
    pub async fn create_review(&self, input: CreateReview) -> ReviewResult<ReviewDto> {
        input
            .validate()
            .map_err(|e| ReviewError::Validation(e.to_string()))?;

        if self.users.get_by_id(&input.user_id).await?.is_none() {
            return Err(ReviewError::UserNotFound(input.user_id));
        }
        self.ensure_product(&input.product_id).await?;

        let review = self.repository.create(input).await?;
        Ok(ReviewDto::from(review))
    }

    async fn ensure_product(&self, product_id: &str) -> ReviewResult<()> {
        match self.products.get_by_id(product_id).await? {
            Some(_) => Ok(()),
            None => Err(ReviewError::ProductNotFound(product_id.to_string())),
        }
    }
}
