//! API routes module
//!
//! Wires each domain's router onto the shared MongoDB database.

pub mod health;
pub mod products;
pub mod reviews;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .nest("/reviews", reviews::router(state))
        .nest("/users", users::router(state))
        .merge(health::router(state.clone()))
}

/// Create the secondary indexes for every collection
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    products::repository(state).init_indexes().await?;
    reviews::repository(state).init_indexes().await?;
    users::repository(state).init_indexes().await?;
    Ok(())
}
