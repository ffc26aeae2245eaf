//! Category data repository.
//!
//! Categories are listed by `order` then name. Deleting a category removes its products
//! together with their techs and addons in one transaction.

use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::model::category::{
    Category, CategoryWithCount, CreateCategoryParams, UpdateCategoryParams,
};

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new category.
    ///
    /// Fails with a unique constraint violation when the name is taken.
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, DbErr> {
        let entity = entity::category::ActiveModel {
            name: ActiveValue::Set(params.name),
            order: ActiveValue::Set(params.order),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(entity))
    }

    /// Gets every category in display order.
    pub async fn get_all(&self) -> Result<Vec<Category>, DbErr> {
        let entities = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Order)
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Category::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Category::from_entity))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Category::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a page of categories with the number of products in each.
    ///
    /// # Returns
    /// - `Ok((categories, total))` - Categories for the requested page and the total count
    /// - `Err(DbErr)` - Database error during pagination or count query
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<CategoryWithCount>, u64), DbErr> {
        let paginator = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Order)
            .order_by_asc(entity::category::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        let ids: Vec<i32> = entities.iter().map(|c| c.id).collect();
        let counts: HashMap<i32, i64> = if ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Product::find()
                .select_only()
                .column(entity::product::Column::CategoryId)
                .column_as(
                    Func::count(Expr::col(entity::product::Column::Id)),
                    "product_count",
                )
                .filter(entity::product::Column::CategoryId.is_in(ids))
                .group_by(entity::product::Column::CategoryId)
                .into_tuple::<(i32, i64)>()
                .all(self.db)
                .await?
                .into_iter()
                .collect()
        };

        let categories = entities
            .into_iter()
            .map(|entity| {
                let product_count = counts.get(&entity.id).copied().unwrap_or(0).max(0) as u64;
                CategoryWithCount {
                    category: Category::from_entity(entity),
                    product_count,
                }
            })
            .collect();

        Ok((categories, total))
    }

    /// Updates a category's name and order.
    ///
    /// # Returns
    /// - `Ok(Some(Category))` - Updated category
    /// - `Ok(None)` - No category with that id
    /// - `Err(DbErr)` - Database error, including a unique violation for a taken name
    pub async fn update(&self, params: UpdateCategoryParams) -> Result<Option<Category>, DbErr> {
        let Some(entity) = entity::prelude::Category::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::category::ActiveModel = entity.into();
        active.name = ActiveValue::Set(params.name);
        active.order = ActiveValue::Set(params.order);
        let entity = active.update(self.db).await?;

        Ok(Some(Category::from_entity(entity)))
    }

    /// Deletes a category with all of its products, techs and addons.
    ///
    /// # Returns
    /// - `Ok(true)` - Category deleted
    /// - `Ok(false)` - No category with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let product_ids: Vec<i32> = entity::prelude::Product::find()
            .select_only()
            .column(entity::product::Column::Id)
            .filter(entity::product::Column::CategoryId.eq(id))
            .into_tuple()
            .all(&txn)
            .await?;

        if !product_ids.is_empty() {
            entity::prelude::ProductTech::delete_many()
                .filter(entity::product_tech::Column::ProductId.is_in(product_ids.clone()))
                .exec(&txn)
                .await?;
            entity::prelude::ProductAddon::delete_many()
                .filter(entity::product_addon::Column::ProductId.is_in(product_ids))
                .exec(&txn)
                .await?;
            entity::prelude::Product::delete_many()
                .filter(entity::product::Column::CategoryId.eq(id))
                .exec(&txn)
                .await?;
        }

        let result = entity::prelude::Category::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            return Ok(false);
        }

        txn.commit().await?;

        Ok(true)
    }

    /// Rewrites `order` so each category takes its index in `ids`.
    ///
    /// Runs in one transaction; an unknown id rolls everything back with `RecordNotFound`.
    pub async fn reorder(&self, ids: &[i32]) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        for (position, id) in ids.iter().enumerate() {
            let result = entity::prelude::Category::update_many()
                .col_expr(entity::category::Column::Order, Expr::value(position as i32))
                .filter(entity::category::Column::Id.eq(*id))
                .exec(&txn)
                .await?;

            if result.rows_affected == 0 {
                return Err(DbErr::RecordNotFound(format!("Category {} not found", id)));
            }
        }

        txn.commit().await
    }
}
