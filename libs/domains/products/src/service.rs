//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductDto, ProductFilter, UpdateProduct};
use crate::repository::ProductRepository;

/// Product catalog operations.
///
/// Only the read operations are exposed over HTTP; catalog maintenance
/// (create/update/delete and the filtered lookups) is used by seeding and
/// internal tooling.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All products, unfiltered
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<ProductDto>> {
        let products = self.repository.list(ProductFilter::default()).await?;
        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<ProductDto> {
        self.repository
            .get_by_id(id)
            .await?
            .map(ProductDto::from)
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: &str, input: UpdateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(ProductError::NotFound(id.to_string()))
        }
    }

    #[instrument(skip(self))]
    pub async fn products_by_category(&self, category: &str) -> ProductResult<Vec<Product>> {
        self.repository
            .list(ProductFilter::by_category(category))
            .await
    }

    /// Case-insensitive substring match on the product name
    #[instrument(skip(self))]
    pub async fn search_products_by_name(&self, fragment: &str) -> ProductResult<Vec<Product>> {
        self.repository.list(ProductFilter::by_name(fragment)).await
    }

    #[instrument(skip(self))]
    pub async fn products_by_max_price(&self, max_price: f64) -> ProductResult<Vec<Product>> {
        self.repository
            .list(ProductFilter::by_max_price(max_price))
            .await
    }

    #[instrument(skip(self))]
    pub async fn count_products(&self) -> ProductResult<u64> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            price: 9.99,
            image_url: String::new(),
            category: "gadgets".to_string(),
            reviews: vec!["r1".to_string()],
        }
    }

    #[tokio::test]
    async fn test_list_products_projects_every_product() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .with(eq(ProductFilter::default()))
            .returning(|_| Ok(vec![product("p1", "Widget"), product("p2", "Gizmo")]));

        let service = ProductService::new(mock_repo);
        let products = service.list_products().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, "p1");
        assert_eq!(products[0].reviews, vec!["r1".to_string()]);
    }

    #[tokio::test]
    async fn test_list_products_empty_store() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_list().returning(|_| Ok(vec![]));

        let service = ProductService::new(mock_repo);
        assert!(service.list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq("missing"))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.get_product("missing").await;

        assert!(matches!(result, Err(ProductError::NotFound(id)) if id == "missing"));
    }

    #[tokio::test]
    async fn test_create_product_validates_before_storing() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create().never();

        let service = ProductService::new(mock_repo);
        let result = service
            .create_product(CreateProduct {
                name: String::new(),
                description: String::new(),
                price: 1.0,
                image_url: String::new(),
                category: String::new(),
            })
            .await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_delete().returning(|_| Ok(false));

        let service = ProductService::new(mock_repo);
        assert!(matches!(
            service.delete_product("p9").await,
            Err(ProductError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_filtered_lookups_pass_the_right_filter() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .with(eq(ProductFilter::by_name("widg")))
            .times(1)
            .returning(|_| Ok(vec![product("p1", "Widget")]));
        mock_repo
            .expect_list()
            .with(eq(ProductFilter::by_max_price(10.0)))
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = ProductService::new(mock_repo);
        assert_eq!(service.search_products_by_name("widg").await.unwrap().len(), 1);
        assert!(service.products_by_max_price(10.0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_products_by_category_filters_on_category() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .with(eq(ProductFilter::by_category("gadgets")))
            .times(1)
            .returning(|_| Ok(vec![product("p1", "Widget"), product("p2", "Gizmo")]));

        let service = ProductService::new(mock_repo);
        let products = service.products_by_category("gadgets").await.unwrap();

        assert_eq!(products.len(), 2);
        assert!(products.iter().all(|p| p.category == "gadgets"));
    }

    #[tokio::test]
    async fn test_update_product_forwards_changes() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_update()
            .withf(|id, input| id == "p1" && input.price == Some(4.5) && input.name.is_none())
            .times(1)
            .returning(|id, input| {
                let mut updated = product(id, "Widget");
                updated.apply_update(input);
                Ok(updated)
            });

        let service = ProductService::new(mock_repo);
        let updated = service
            .update_product(
                "p1",
                UpdateProduct {
                    price: Some(4.5),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.price, 4.5);
        assert_eq!(updated.name, "Widget");
    }

    #[tokio::test]
    async fn test_update_product_rejects_invalid_input() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_update().never();

        let service = ProductService::new(mock_repo);
        let result = service
            .update_product(
                "p1",
                UpdateProduct {
                    price: Some(-1.0),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_update()
            .returning(|id, _| Err(ProductError::NotFound(id.to_string())));

        let service = ProductService::new(mock_repo);
        let result = service.update_product("p9", UpdateProduct::default()).await;

        assert!(matches!(result, Err(ProductError::NotFound(id)) if id == "p9"));
    }
}
