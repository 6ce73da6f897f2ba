//! Catalog seeding.
//!
//! Products have no create endpoint; an empty catalog is filled from a JSON
//! file at startup instead.

use domain_products::{CreateProduct, ProductRepository, ProductService};
use eyre::WrapErr;
use std::path::Path;
use tracing::{info, warn};

/// Read a JSON array of products
pub async fn load_catalog(path: &Path) -> eyre::Result<Vec<CreateProduct>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .wrap_err_with(|| format!("Failed to read catalog seed {}", path.display()))?;
    parse_catalog(&raw).wrap_err_with(|| format!("Invalid catalog seed {}", path.display()))
}

fn parse_catalog(raw: &str) -> serde_json::Result<Vec<CreateProduct>> {
    serde_json::from_str(raw)
}

/// Create every entry when the catalog is empty. Returns how many were created.
pub async fn seed_catalog<R: ProductRepository>(
    service: &ProductService<R>,
    entries: Vec<CreateProduct>,
) -> eyre::Result<usize> {
    let existing = service.count_products().await?;
    if existing > 0 {
        info!(existing, "Catalog already populated, skipping seed");
        return Ok(0);
    }

    let mut created = 0;
    for entry in entries {
        let name = entry.name.clone();
        match service.create_product(entry).await {
            Ok(product) => {
                info!(product_id = %product.id, "Seeded product");
                created += 1;
            }
            Err(e) => warn!(product_name = %name, error = %e, "Skipping invalid catalog entry"),
        }
    }

    info!(created, "Catalog seeded");
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_products::InMemoryProductRepository;

    const CATALOG: &str = r#"[
        {"name": "Widget", "description": "Useful", "price": 9.99, "imageUrl": "w.png", "category": "gadgets"},
        {"name": "Gizmo", "price": 19.5}
    ]"#;

    #[test]
    fn test_parse_catalog_defaults_optional_fields() {
        let entries = parse_catalog(CATALOG).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].image_url, "w.png");
        assert!(entries[1].category.is_empty());
    }

    #[test]
    fn test_parse_catalog_rejects_non_array() {
        assert!(parse_catalog(r#"{"name": "Widget"}"#).is_err());
    }

    #[tokio::test]
    async fn test_seed_empty_catalog() {
        let service = ProductService::new(InMemoryProductRepository::new());

        let created = seed_catalog(&service, parse_catalog(CATALOG).unwrap())
            .await
            .unwrap();

        assert_eq!(created, 2);
        let names: Vec<String> = service
            .list_products()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["Widget", "Gizmo"]);
    }

    #[tokio::test]
    async fn test_seed_skips_populated_catalog() {
        let service = ProductService::new(InMemoryProductRepository::new());
        seed_catalog(&service, parse_catalog(CATALOG).unwrap())
            .await
            .unwrap();

        let created = seed_catalog(&service, parse_catalog(CATALOG).unwrap())
            .await
            .unwrap();

        assert_eq!(created, 0);
        assert_eq!(service.count_products().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_seed_skips_invalid_entries() {
        let service = ProductService::new(InMemoryProductRepository::new());
        let entries = parse_catalog(
            r#"[{"name": "", "price": 1.0}, {"name": "Ok", "price": -1.0}, {"name": "Fine", "price": 0.0}]"#,
        )
        .unwrap();

        let created = seed_catalog(&service, entries).await.unwrap();

        assert_eq!(created, 1);
    }

    #[tokio::test]
    async fn test_load_catalog_missing_file() {
        let result = load_catalog(Path::new("/nonexistent/catalog.json")).await;
        assert!(result.is_err());
    }
}
