//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shop API",
        version = "0.1.0",
        description = "Product catalog, reviews, and users with carts and favorites",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc),
        (path = "/api/reviews", api = domain_reviews::ApiDoc),
        (path = "/api/users", api = domain_users::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Product catalog (read-only)"),
        (name = "Reviews", description = "Product reviews"),
        (name = "Users", description = "Users with their carts and favorites")
    )
)]
pub struct ApiDoc;
