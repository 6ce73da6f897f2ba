//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{FindOptions, IndexOptions},
    Collection, Database, IndexModel,
};
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductFilter, UpdateProduct};
use crate::repository::ProductRepository;

/// MongoDB-backed product catalog
#[derive(Clone)]
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, "products")
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Create the secondary indexes used by catalog queries
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "category": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_category".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "price": 1 })
                .options(IndexOptions::builder().name("idx_price".to_string()).build())
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }

    /// `_id` filter for a hex id; `None` when the id cannot be an ObjectId
    fn id_filter(id: &str) -> Option<Document> {
        ObjectId::parse_str(id).ok().map(|oid| doc! { "_id": oid })
    }

    fn build_filter(filter: &ProductFilter) -> Document {
        let mut doc = doc! {};

        if let Some(ref category) = filter.category {
            doc.insert("category", category.as_str());
        }

        if let Some(ref fragment) = filter.name_contains {
            doc.insert(
                "name",
                doc! { "$regex": regex::escape(fragment), "$options": "i" },
            );
        }

        if let Some(max_price) = filter.max_price {
            doc.insert("price", doc! { "$lte": max_price });
        }

        doc
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = Product::new(input);

        self.collection.insert_one(&product).await?;

        tracing::info!(product_id = %product.id, "Product created successfully");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let Some(filter) = Self::id_filter(id) else {
            return Ok(None);
        };
        let product = self.collection.find_one(filter).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let options = FindOptions::builder().sort(doc! { "_id": 1 }).build();

        let cursor = self
            .collection
            .find(Self::build_filter(&filter))
            .with_options(options)
            .await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        Ok(products)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: &str, input: UpdateProduct) -> ProductResult<Product> {
        let not_found = || ProductError::NotFound(id.to_string());
        let filter = Self::id_filter(id).ok_or_else(not_found)?;

        let mut product = self
            .collection
            .find_one(filter.clone())
            .await?
            .ok_or_else(not_found)?;
        product.apply_update(input);

        self.collection.replace_one(filter, &product).await?;

        tracing::info!(product_id = %id, "Product updated successfully");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> ProductResult<bool> {
        let Some(filter) = Self::id_filter(id) else {
            return Ok(false);
        };
        let result = self.collection.delete_one(filter).await?;

        if result.deleted_count > 0 {
            tracing::info!(product_id = %id, "Product deleted successfully");
        }
        Ok(result.deleted_count > 0)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> ProductResult<u64> {
        let count = self.collection.count_documents(doc! {}).await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_empty() {
        let doc = MongoProductRepository::build_filter(&ProductFilter::default());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_build_filter_with_category() {
        let doc = MongoProductRepository::build_filter(&ProductFilter::by_category("gadgets"));
        assert_eq!(doc.get_str("category").unwrap(), "gadgets");
    }

    #[test]
    fn test_build_filter_escapes_name_fragment() {
        let doc = MongoProductRepository::build_filter(&ProductFilter::by_name("c++ (v2)"));
        let name = doc.get_document("name").unwrap();
        assert_eq!(name.get_str("$regex").unwrap(), r"c\+\+ \(v2\)");
        assert_eq!(name.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn test_build_filter_with_max_price() {
        let doc = MongoProductRepository::build_filter(&ProductFilter::by_max_price(20.0));
        let price = doc.get_document("price").unwrap();
        assert_eq!(price.get_f64("$lte").unwrap(), 20.0);
    }

    #[test]
    fn test_id_filter_rejects_non_object_ids() {
        assert!(MongoProductRepository::id_filter("p1").is_none());
        assert!(MongoProductRepository::id_filter("6650f1c2a4b3c2d1e0f9a8b7").is_some());
    }
}
