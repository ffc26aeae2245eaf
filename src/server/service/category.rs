use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::category::CategoryRepository,
    error::{map_unique_violation, AppError},
    model::category::{
        Category, CreateCategoryParams, PaginatedCategories, UpdateCategoryParams,
    },
    service::catalog::CatalogCache,
    util::pagination,
};

const NAME_TAKEN: &str = "A category with this name already exists";

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a CatalogCache,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection, catalog: &'a CatalogCache) -> Self {
        Self { db, catalog }
    }

    /// Gets every category in display order
    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).get_all().await?)
    }

    /// Gets paginated categories with product counts
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedCategories, AppError> {
        let (page, per_page) = pagination::bounded(page, per_page)?;

        let (categories, total) = CategoryRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        let total_pages = pagination::total_pages(total, per_page);

        Ok(PaginatedCategories {
            categories,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Creates a new category
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, AppError> {
        let params = params.validate()?;

        let category = CategoryRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| map_unique_violation(e, NAME_TAKEN))?;

        self.catalog.revalidate().await;

        Ok(category)
    }

    /// Updates a category's name and order
    pub async fn update(&self, params: UpdateCategoryParams) -> Result<Category, AppError> {
        let params = params.validate()?;

        let category = CategoryRepository::new(self.db)
            .update(params)
            .await
            .map_err(|e| map_unique_violation(e, NAME_TAKEN))?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        self.catalog.revalidate().await;

        Ok(category)
    }

    /// Deletes a category and everything in it
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CategoryRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Category not found".to_string()));
        }

        self.catalog.revalidate().await;

        Ok(())
    }

    /// Applies a new display order given as the full list of category ids
    pub async fn reorder(&self, ids: Vec<i32>) -> Result<(), AppError> {
        CategoryRepository::new(self.db)
            .reorder(&ids)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotFound(msg) => AppError::NotFound(msg),
                e => e.into(),
            })?;

        self.catalog.revalidate().await;

        Ok(())
    }
}
