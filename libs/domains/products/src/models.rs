use mongodb::bson::{oid::ObjectId, serde_helpers::hex_string_as_object_id};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Product entity as stored in the `products` collection.
///
/// The id is generated at insert time and stored as an ObjectId; in Rust it
/// is carried as its 24-character hex form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", with = "hex_string_as_object_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub category: String,
    /// Review ids; denormalized and not maintained by review creation
    #[serde(default)]
    pub reviews: Vec<String>,
}

/// Product as returned to API callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    /// Product ID
    #[schema(example = "6650f1c2a4b3c2d1e0f9a8b7")]
    pub id: String,
    #[schema(example = "Widget")]
    pub name: String,
    pub description: String,
    #[schema(example = 9.99)]
    pub price: f64,
    pub image_url: String,
    #[schema(example = "gadgets")]
    pub category: String,
    /// IDs of reviews attached to this product
    pub reviews: Vec<String>,
}

/// Catalog entry for creating a product (seed files, back-office tooling)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub category: String,
}

/// Partial catalog update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

/// Catalog query filters. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Exact category match
    pub category: Option<String>,
    /// Case-insensitive substring of the name
    pub name_contains: Option<String>,
    /// Inclusive upper price bound
    pub max_price: Option<f64>,
}

impl Product {
    pub fn new(input: CreateProduct) -> Self {
        Self {
            id: ObjectId::new().to_hex(),
            name: input.name,
            description: input.description,
            price: input.price,
            image_url: input.image_url,
            category: input.category,
            reviews: Vec::new(),
        }
    }

    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(image_url) = update.image_url {
            self.image_url = image_url;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            image_url: product.image_url,
            category: product.category,
            reviews: product.reviews,
        }
    }
}

impl ProductFilter {
    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Default::default()
        }
    }

    pub fn by_name(fragment: impl Into<String>) -> Self {
        Self {
            name_contains: Some(fragment.into()),
            ..Default::default()
        }
    }

    pub fn by_max_price(max_price: f64) -> Self {
        Self {
            max_price: Some(max_price),
            ..Default::default()
        }
    }

    /// In-process equivalent of the MongoDB query built from this filter
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(ref category) = self.category {
            if &product.category != category {
                return false;
            }
        }
        if let Some(ref fragment) = self.name_contains {
            if !product
                .name
                .to_lowercase()
                .contains(&fragment.to_lowercase())
            {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            if product.price > max_price {
                return false;
            }
        }
        true
    }
}
