use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductFilter, UpdateProduct};

/// Data access for the product catalog
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product with a store-generated id
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by id; unknown or malformed ids yield `None`
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// List products matching `filter`, oldest first
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;

    async fn update(&self, id: &str, input: UpdateProduct) -> ProductResult<Product>;

    /// Delete a product; `false` when nothing was removed
    async fn delete(&self, id: &str) -> ProductResult<bool>;

    async fn count(&self) -> ProductResult<u64>;
}

/// In-memory product store, used for tests and local development
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `product` as-is, keeping its id
    pub async fn insert(&self, product: Product) -> Product {
        self.products.write().await.push(product.clone());
        product
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = self.insert(Product::new(input)).await;
        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn update(&self, id: &str, input: UpdateProduct) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        product.apply_update(input);
        Ok(product.clone())
    }

    async fn delete(&self, id: &str) -> ProductResult<bool> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() < before)
    }

    async fn count(&self) -> ProductResult<u64> {
        Ok(self.products.read().await.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, price: f64, category: &str) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            description: String::new(),
            price,
            image_url: String::new(),
            category: category.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(input("Widget", 9.99, "gadgets")).await.unwrap();

        let fetched = repo.get_by_id(&created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
        assert!(repo.get_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order_and_filters() {
        let repo = InMemoryProductRepository::new();
        repo.create(input("Widget", 9.99, "gadgets")).await.unwrap();
        repo.create(input("Lamp", 30.0, "home")).await.unwrap();
        repo.create(input("Gizmo", 4.5, "gadgets")).await.unwrap();

        let all = repo.list(ProductFilter::default()).await.unwrap();
        let names: Vec<_> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Widget", "Lamp", "Gizmo"]);

        let gadgets = repo.list(ProductFilter::by_category("gadgets")).await.unwrap();
        assert_eq!(gadgets.len(), 2);

        let cheap = repo.list(ProductFilter::by_max_price(10.0)).await.unwrap();
        assert_eq!(cheap.len(), 2);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(input("Widget", 9.99, "gadgets")).await.unwrap();

        let updated = repo
            .update(
                &created.id,
                UpdateProduct {
                    name: Some("Widget Pro".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Widget Pro");

        assert!(repo.delete(&created.id).await.unwrap());
        assert!(!repo.delete(&created.id).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let result = repo.update("missing", UpdateProduct::default()).await;
        assert!(matches!(result, Err(ProductError::NotFound(id)) if id == "missing"));
    }
}
