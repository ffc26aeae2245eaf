//! Product factory for creating test product entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test products with customizable fields.
///
/// The category must already exist; use `helpers::create_product_with_dependencies`
/// to create both at once.
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    category_id: i32,
    name: String,
    description: String,
    image: String,
    github_url: Option<String>,
    live_url: Option<String>,
    order: i32,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Product {id}"`
    /// - description: `"Description for product {id}"`
    /// - image: `"/uploads/product-{id}.png"`
    /// - links: `None`
    /// - order: `0`
    pub fn new(db: &'a DatabaseConnection, category_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            category_id,
            name: format!("Product {}", id),
            description: format!("Description for product {}", id),
            image: format!("/uploads/product-{}.png", id),
            github_url: None,
            live_url: None,
            order: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn github_url(mut self, url: impl Into<String>) -> Self {
        self.github_url = Some(url.into());
        self
    }

    pub fn live_url(mut self, url: impl Into<String>) -> Self {
        self.live_url = Some(url.into());
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Builds and inserts the product entity into the database.
    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        entity::product::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            image: ActiveValue::Set(self.image),
            category_id: ActiveValue::Set(self.category_id),
            github_url: ActiveValue::Set(self.github_url),
            live_url: ActiveValue::Set(self.live_url),
            order: ActiveValue::Set(self.order),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a product with default values in the given category.
pub async fn create_product(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db, category_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::helpers::create_product_with_dependencies};

    #[tokio::test]
    async fn creates_product_with_category() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (category, product) = create_product_with_dependencies(db).await?;

        assert_eq!(product.category_id, category.id);
        assert!(product.github_url.is_none());

        Ok(())
    }
}
