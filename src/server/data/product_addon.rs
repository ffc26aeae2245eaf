//! Product addon data repository.
//!
//! Each product has at most one addon, enforced by a unique index on `product_id`.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::{
    data::product::insert_addon,
    model::product::{Addon, AddonParams},
};

pub struct ProductAddonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductAddonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_product_id(&self, product_id: i32) -> Result<Option<Addon>, DbErr> {
        let entity = entity::prelude::ProductAddon::find()
            .filter(entity::product_addon::Column::ProductId.eq(product_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Addon::from_entity))
    }

    /// Creates the addon of a product.
    ///
    /// Fails with a unique constraint violation if the product already has one.
    pub async fn create(&self, product_id: i32, params: AddonParams) -> Result<Addon, DbErr> {
        let entity = insert_addon(self.db, product_id, params).await?;

        Ok(Addon::from_entity(entity))
    }

    /// Updates the addon of a product.
    ///
    /// # Returns
    /// - `Ok(Some(Addon))` - Updated addon
    /// - `Ok(None)` - The product has no addon
    pub async fn update(
        &self,
        product_id: i32,
        params: AddonParams,
    ) -> Result<Option<Addon>, DbErr> {
        let Some(entity) = entity::prelude::ProductAddon::find()
            .filter(entity::product_addon::Column::ProductId.eq(product_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::product_addon::ActiveModel = entity.into();
        active.title = ActiveValue::Set(params.title);
        active.description = ActiveValue::Set(params.description);
        let entity = active.update(self.db).await?;

        Ok(Some(Addon::from_entity(entity)))
    }

    /// Removes the addon of a product.
    ///
    /// # Returns
    /// - `Ok(true)` - Addon deleted
    /// - `Ok(false)` - The product had no addon
    pub async fn delete(&self, product_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ProductAddon::delete_many()
            .filter(entity::product_addon::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
