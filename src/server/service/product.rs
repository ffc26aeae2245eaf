use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{
        category::CategoryRepository, product::ProductRepository,
        product_addon::ProductAddonRepository,
    },
    error::{map_unique_violation, AppError},
    model::product::{Addon, AddonParams, PaginatedProducts, Product, ProductParams},
    service::catalog::CatalogCache,
    util::pagination,
};

const ADDON_EXISTS: &str = "Product already has an addon";

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a CatalogCache,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection, catalog: &'a CatalogCache) -> Self {
        Self { db, catalog }
    }

    /// Gets products in display order, optionally for one category
    pub async fn get_all(&self, category_id: Option<i32>) -> Result<Vec<Product>, AppError> {
        Ok(ProductRepository::new(self.db).get_all(category_id).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Product, AppError> {
        ProductRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedProducts, AppError> {
        let (page, per_page) = pagination::bounded(page, per_page)?;

        let (products, total) = ProductRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        let total_pages = pagination::total_pages(total, per_page);

        Ok(PaginatedProducts {
            products,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Creates a product with its techs and optional addon
    pub async fn create(&self, params: ProductParams) -> Result<Product, AppError> {
        let params = params.validate()?;
        self.ensure_category(params.category_id).await?;

        let product = ProductRepository::new(self.db).create(params).await?;

        self.catalog.revalidate().await;

        Ok(product)
    }

    /// Replaces a product's fields, techs and addon
    pub async fn update(&self, id: i32, params: ProductParams) -> Result<Product, AppError> {
        let params = params.validate()?;
        self.ensure_category(params.category_id).await?;

        let product = ProductRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

        self.catalog.revalidate().await;

        Ok(product)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ProductRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Product not found".to_string()));
        }

        self.catalog.revalidate().await;

        Ok(())
    }

    /// Applies a new display order given as the full list of product ids
    pub async fn reorder(&self, ids: Vec<i32>) -> Result<(), AppError> {
        ProductRepository::new(self.db)
            .reorder(&ids)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotFound(msg) => AppError::NotFound(msg),
                e => e.into(),
            })?;

        self.catalog.revalidate().await;

        Ok(())
    }

    /// Adds the addon of a product; a product holds at most one
    pub async fn create_addon(&self, product_id: i32, params: AddonParams) -> Result<Addon, AppError> {
        let params = params.validate()?;
        self.ensure_product(product_id).await?;

        let repo = ProductAddonRepository::new(self.db);
        if repo.find_by_product_id(product_id).await?.is_some() {
            return Err(AppError::Conflict(ADDON_EXISTS.to_string()));
        }

        let addon = repo
            .create(product_id, params)
            .await
            .map_err(|e| map_unique_violation(e, ADDON_EXISTS))?;

        self.catalog.revalidate().await;

        Ok(addon)
    }

    pub async fn update_addon(&self, product_id: i32, params: AddonParams) -> Result<Addon, AppError> {
        let params = params.validate()?;
        self.ensure_product(product_id).await?;

        let addon = ProductAddonRepository::new(self.db)
            .update(product_id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Addon not found".to_string()))?;

        self.catalog.revalidate().await;

        Ok(addon)
    }

    pub async fn delete_addon(&self, product_id: i32) -> Result<(), AppError> {
        self.ensure_product(product_id).await?;

        if !ProductAddonRepository::new(self.db).delete(product_id).await? {
            return Err(AppError::NotFound("Addon not found".to_string()));
        }

        self.catalog.revalidate().await;

        Ok(())
    }

    async fn ensure_category(&self, category_id: i32) -> Result<(), AppError> {
        if !CategoryRepository::new(self.db).exists(category_id).await? {
            return Err(AppError::NotFound("Category not found".to_string()));
        }
        Ok(())
    }

    async fn ensure_product(&self, product_id: i32) -> Result<(), AppError> {
        if !ProductRepository::new(self.db).exists(product_id).await? {
            return Err(AppError::NotFound("Product not found".to_string()));
        }
        Ok(())
    }
}
