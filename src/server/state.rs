//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned into each handler through Axum's
//! state extraction. Every field is cheap to clone: the database handle is a pool
//! and both services share their contents through `Arc`.

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    service::{catalog::CatalogCache, setup_code::SetupCodeService},
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// In-memory public catalog, dropped after every catalog mutation.
    pub catalog_cache: CatalogCache,

    /// One-time code granting ADMIN on registration while no admin exists.
    pub setup_code_service: SetupCodeService,

    /// Public base URL, without trailing slash.
    pub app_url: String,

    /// Directory uploaded images are written to and served from.
    pub upload_dir: String,

    /// Largest accepted upload in bytes.
    pub upload_max_bytes: usize,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        catalog_cache: CatalogCache,
        setup_code_service: SetupCodeService,
        config: &Config,
    ) -> Self {
        Self {
            db,
            catalog_cache,
            setup_code_service,
            app_url: config.app_url.clone(),
            upload_dir: config.upload_dir.clone(),
            upload_max_bytes: config.upload_max_bytes,
        }
    }
}
