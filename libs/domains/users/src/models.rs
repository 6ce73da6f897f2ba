use axum_helpers::not_blank;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User entity as stored in the `users` collection.
///
/// Unlike products and reviews, the id is chosen by the client at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    /// Product ids; ordered, duplicates allowed
    #[serde(default)]
    pub cart: Vec<String>,
    /// Product ids; ordered, duplicates allowed
    #[serde(default)]
    pub favorites: Vec<String>,
    /// Review ids; kept on the record but never populated
    #[serde(default)]
    pub reviews: Vec<String>,
}

/// User as returned to API callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[schema(example = "u1")]
    pub id: String,
    #[schema(example = "alice@x.com")]
    pub email: String,
    pub cart: Vec<String>,
    pub favorites: Vec<String>,
}

/// Request body for registering a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "User ID is required"))]
    #[schema(example = "u1")]
    pub id: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Email is required"))]
    #[schema(example = "alice@x.com")]
    pub email: String,
}

/// Request body for cart and favorites add/remove
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListItemRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "User ID is required"))]
    #[schema(example = "u1")]
    pub user_id: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Product ID is required"))]
    #[schema(example = "p1")]
    pub product_id: String,
}

/// Plain confirmation body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "user has been created successfully")]
    pub message: String,
}

/// Which of a user's product lists an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductList {
    Cart,
    Favorites,
}

impl std::fmt::Display for ProductList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductList::Cart => write!(f, "cart"),
            ProductList::Favorites => write!(f, "favorites"),
        }
    }
}

impl User {
    /// New user with empty cart, favorites and reviews
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            cart: Vec::new(),
            favorites: Vec::new(),
            reviews: Vec::new(),
        }
    }

    pub fn list_mut(&mut self, list: ProductList) -> &mut Vec<String> {
        match list {
            ProductList::Cart => &mut self.cart,
            ProductList::Favorites => &mut self.favorites,
        }
    }

    /// Append `product_id`, keeping any existing occurrences
    pub fn add_product(&mut self, list: ProductList, product_id: &str) {
        self.list_mut(list).push(product_id.to_string());
    }

    /// Remove every occurrence of `product_id`; a no-op when absent
    pub fn remove_product(&mut self, list: ProductList, product_id: &str) {
        self.list_mut(list).retain(|id| id != product_id);
    }

    pub fn clear(&mut self, list: ProductList) {
        self.list_mut(list).clear();
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            cart: user.cart,
            favorites: user.favorites,
        }
    }
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
