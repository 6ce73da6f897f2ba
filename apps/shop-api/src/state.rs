//! Shared application state.

use mongodb::{Client, Database};

/// State handed to the route builders.
///
/// Cloning is cheap: the client and database share one connection pool.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub mongo_client: Client,
    pub db: Database,
}
