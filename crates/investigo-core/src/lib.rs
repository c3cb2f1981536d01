pub mod app_config;
pub mod catalog;
pub mod config;

pub use app_config::{AppConfig, DEFAULT_CATALOG_URL, DEFAULT_USER_AGENT};
pub use catalog::{
    load_catalog, parse_catalog, render_sites_markdown, Catalog, DetectionStrategy, SiteTemplate,
};
pub use config::{load_app_config, load_app_config_from_env};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog file {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("catalog validation error: {0}")]
    Validation(String),
}
