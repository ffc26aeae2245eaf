//! In-memory cache of the public catalog.
//!
//! The projects section reads the whole catalog on every visit, so it is built once from
//! the database and kept until a category, product or addon mutation revalidates it.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::server::{
    data::{category::CategoryRepository, product::ProductRepository},
    error::AppError,
    model::catalog::Catalog,
};

/// Shared catalog cache. Clones share the cached value.
#[derive(Clone, Default)]
pub struct CatalogCache {
    catalog: Arc<RwLock<Option<Catalog>>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached catalog, building it from the database on a miss.
    ///
    /// The write lock is held while building so concurrent misses query the database once.
    pub async fn get(&self, db: &DatabaseConnection) -> Result<Catalog, AppError> {
        if let Some(catalog) = self.catalog.read().await.as_ref() {
            return Ok(catalog.clone());
        }

        let mut cached = self.catalog.write().await;
        if let Some(catalog) = cached.as_ref() {
            return Ok(catalog.clone());
        }

        let categories = CategoryRepository::new(db).get_all().await?;
        let products = ProductRepository::new(db).get_all(None).await?;
        let catalog = Catalog::build(categories, products);

        tracing::debug!(
            "Built catalog cache with {} categories",
            catalog.categories.len()
        );

        *cached = Some(catalog.clone());

        Ok(catalog)
    }

    /// Drops the cached catalog so the next read rebuilds it.
    pub async fn revalidate(&self) {
        *self.catalog.write().await = None;
    }

    /// Whether a catalog is currently cached.
    pub async fn is_cached(&self) -> bool {
        self.catalog.read().await.is_some()
    }
}
