//! MongoDB implementation of ReviewRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{FindOptions, IndexOptions},
    Collection, Database, IndexModel,
};
use tracing::instrument;

use crate::error::ReviewResult;
use crate::models::{CreateReview, Review};
use crate::repository::ReviewRepository;

/// MongoDB-backed review store
#[derive(Clone)]
pub struct MongoReviewRepository {
    collection: Collection<Review>,
}

impl MongoReviewRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, "reviews")
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Review>(collection_name);
        Self { collection }
    }

    /// Index the two reference fields used for lookups
    pub async fn init_indexes(&self) -> ReviewResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "productId": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_product_id".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "userId": 1 })
                .options(IndexOptions::builder().name("idx_user_id".to_string()).build())
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Review indexes created successfully");
        Ok(())
    }

    async fn find_sorted(&self, filter: Document) -> ReviewResult<Vec<Review>> {
        let options = FindOptions::builder().sort(doc! { "_id": 1 }).build();
        let cursor = self.collection.find(filter).with_options(options).await?;
        let reviews: Vec<Review> = cursor.try_collect().await?;
        Ok(reviews)
    }
}

#[async_trait]
impl ReviewRepository for MongoReviewRepository {
    #[instrument(skip(self, input), fields(user_id = %input.user_id, product_id = %input.product_id))]
    async fn create(&self, input: CreateReview) -> ReviewResult<Review> {
        let review = Review::new(input);

        self.collection.insert_one(&review).await?;

        tracing::info!(review_id = %review.id, "Review created successfully");
        Ok(review)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> ReviewResult<Option<Review>> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        let review = self.collection.find_one(doc! { "_id": oid }).await?;
        Ok(review)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> ReviewResult<Vec<Review>> {
        self.find_sorted(doc! {}).await
    }

    #[instrument(skip(self))]
    async fn find_by_product_id(&self, product_id: &str) -> ReviewResult<Vec<Review>> {
        self.find_sorted(doc! { "productId": product_id }).await
    }

    #[instrument(skip(self))]
    async fn find_by_user_id(&self, user_id: &str) -> ReviewResult<Vec<Review>> {
        self.find_sorted(doc! { "userId": user_id }).await
    }
}
