use core_config::{AppInfo, FromEnv, app_info, env_optional, server::ServerConfig};
use database::mongodb::MongoConfig;
use std::path::PathBuf;

pub use core_config::Environment;

/// Application configuration, composed from the shared config pieces
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// JSON array of products loaded into an empty catalog at startup
    pub catalog_seed_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
            catalog_seed_path: env_optional("CATALOG_SEED_PATH").map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_config::CorsOrigins;

    #[test]
    fn test_from_env() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_DATABASE", Some("shop")),
                ("PORT", Some("9000")),
                ("CORS_ALLOWED_ORIGIN", Some("http://localhost:3000")),
                ("CATALOG_SEED_PATH", Some("/etc/shop/catalog.json")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.environment.is_production());
                assert_eq!(config.server.port, 9000);
                assert_eq!(config.mongodb.database(), "shop");
                assert_eq!(
                    config.server.cors_origins,
                    CorsOrigins::List(vec!["http://localhost:3000".to_string()])
                );
                assert_eq!(
                    config.catalog_seed_path,
                    Some(PathBuf::from("/etc/shop/catalog.json"))
                );
                assert_eq!(config.app.name, "shop_api");
            },
        );
    }

    #[test]
    fn test_from_env_defaults() {
        temp_env::with_vars(
            [
                ("APP_ENV", None::<&str>),
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_DATABASE", Some("shop")),
                ("PORT", None),
                ("CORS_ALLOWED_ORIGIN", None),
                ("CATALOG_SEED_PATH", Some("  ")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.environment.is_development());
                assert_eq!(config.server.port, 8080);
                assert_eq!(config.server.cors_origins, CorsOrigins::Any);
                assert!(config.catalog_seed_path.is_none());
            },
        );
    }

    #[test]
    fn test_from_env_requires_mongodb() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", None::<&str>),
                ("MONGO_URL", None),
                ("MONGODB_DATABASE", Some("shop")),
            ],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }
}
