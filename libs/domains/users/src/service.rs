//! User Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, ListItemRequest, MessageResponse, ProductList, User, UserDto};
use crate::repository::UserRepository;

/// Registration, lookup and cart/favorites maintenance.
///
/// List updates read the whole record, modify it and write it back, so
/// concurrent updates to the same user resolve as last write wins.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_users(&self) -> UserResult<Vec<UserDto>> {
        let users = self.repository.list().await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, id: &str) -> UserResult<UserDto> {
        self.find_user(id).await.map(UserDto::from)
    }

    #[instrument(skip(self))]
    pub async fn get_user_by_email(&self, email: &str) -> UserResult<UserDto> {
        self.repository
            .get_by_email(email)
            .await?
            .map(UserDto::from)
            .ok_or_else(|| UserError::NotFound(email.to_string()))
    }

    /// Register a user with empty cart and favorites
    #[instrument(skip(self, input), fields(user_id = %input.id))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<MessageResponse> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        if self.repository.get_by_email(&input.email).await?.is_some() {
            return Err(UserError::DuplicateEmail(input.email));
        }

        self.repository
            .create(User::new(input.id, input.email))
            .await?;

        Ok(MessageResponse::new("user has been created successfully"))
    }

    pub async fn add_to_cart(&self, input: ListItemRequest) -> UserResult<UserDto> {
        self.add_product(ProductList::Cart, input).await
    }

    pub async fn remove_from_cart(&self, input: ListItemRequest) -> UserResult<UserDto> {
        self.remove_product(ProductList::Cart, input).await
    }

    pub async fn clear_cart(&self, user_id: &str) -> UserResult<UserDto> {
        self.clear_list(ProductList::Cart, user_id).await
    }

    pub async fn add_to_favorites(&self, input: ListItemRequest) -> UserResult<UserDto> {
        self.add_product(ProductList::Favorites, input).await
    }

    pub async fn remove_from_favorites(&self, input: ListItemRequest) -> UserResult<UserDto> {
        self.remove_product(ProductList::Favorites, input).await
    }

    pub async fn clear_favorites(&self, user_id: &str) -> UserResult<UserDto> {
        self.clear_list(ProductList::Favorites, user_id).await
    }

    /// Append a product id; duplicates are kept and the product is not looked up
    #[instrument(skip(self, input), fields(user_id = %input.user_id, product_id = %input.product_id))]
    async fn add_product(&self, list: ProductList, input: ListItemRequest) -> UserResult<UserDto> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        let mut user = self.find_user(&input.user_id).await?;
        user.add_product(list, &input.product_id);
        tracing::debug!(%list, "Added product");

        self.save(user).await
    }

    #[instrument(skip(self, input), fields(user_id = %input.user_id, product_id = %input.product_id))]
    async fn remove_product(
        &self,
        list: ProductList,
        input: ListItemRequest,
    ) -> UserResult<UserDto> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        let mut user = self.find_user(&input.user_id).await?;
        user.remove_product(list, &input.product_id);
        tracing::debug!(%list, "Removed product");

        self.save(user).await
    }

    #[instrument(skip(self))]
    async fn clear_list(&self, list: ProductList, user_id: &str) -> UserResult<UserDto> {
        let mut user = self.find_user(user_id).await?;
        user.clear(list);
        tracing::debug!(%list, "Cleared list");

        self.save(user).await
    }

    async fn find_user(&self, id: &str) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    async fn save(&self, user: User) -> UserResult<UserDto> {
        self.repository.replace(user).await.map(UserDto::from)
    }
}
