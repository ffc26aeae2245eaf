//! Product data repository.
//!
//! Products are loaded together with their category name, techs and addon. Creating,
//! updating and deleting a product touches the tech and addon tables in the same
//! transaction as the product row.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
    TransactionTrait,
};
use std::collections::HashMap;

use crate::server::model::product::{AddonParams, Product, ProductParams};

pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a product with its techs and optional addon.
    ///
    /// # Returns
    /// - `Ok(Product)` - The created product with relations
    /// - `Err(DbErr)` - Database error; nothing is written
    pub async fn create(&self, params: ProductParams) -> Result<Product, DbErr> {
        let txn = self.db.begin().await?;

        let product = entity::product::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            image: ActiveValue::Set(params.image),
            category_id: ActiveValue::Set(params.category_id),
            github_url: ActiveValue::Set(params.github_url),
            live_url: ActiveValue::Set(params.live_url),
            order: ActiveValue::Set(params.order),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        insert_techs(&txn, product.id, params.techs).await?;

        if let Some(addon) = params.addon {
            insert_addon(&txn, product.id, addon).await?;
        }

        txn.commit().await?;

        self.find_by_id(product.id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Product {} not found after creation",
            product.id
        )))
    }

    /// Gets products in display order, optionally limited to one category.
    pub async fn get_all(&self, category_id: Option<i32>) -> Result<Vec<Product>, DbErr> {
        let mut query = ordered();
        if let Some(category_id) = category_id {
            query = query.filter(entity::product::Column::CategoryId.eq(category_id));
        }

        let entities = query.all(self.db).await?;

        load_relations(self.db, entities).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Product>, DbErr> {
        let Some(entity) = entity::prelude::Product::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(load_relations(self.db, vec![entity]).await?.pop())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Product::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a page of products in display order.
    ///
    /// # Returns
    /// - `Ok((products, total))` - Products for the requested page and the total count
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Product>, u64), DbErr> {
        let paginator = ordered().paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((load_relations(self.db, entities).await?, total))
    }

    /// Replaces a product's fields and techs. The addon is upserted when given and
    /// removed when `params.addon` is `None`.
    ///
    /// # Returns
    /// - `Ok(Some(Product))` - Updated product with relations
    /// - `Ok(None)` - No product with that id
    pub async fn update(&self, id: i32, params: ProductParams) -> Result<Option<Product>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(entity) = entity::prelude::Product::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active: entity::product::ActiveModel = entity.into();
        active.name = ActiveValue::Set(params.name);
        active.description = ActiveValue::Set(params.description);
        active.image = ActiveValue::Set(params.image);
        active.category_id = ActiveValue::Set(params.category_id);
        active.github_url = ActiveValue::Set(params.github_url);
        active.live_url = ActiveValue::Set(params.live_url);
        active.order = ActiveValue::Set(params.order);
        active.update(&txn).await?;

        entity::prelude::ProductTech::delete_many()
            .filter(entity::product_tech::Column::ProductId.eq(id))
            .exec(&txn)
            .await?;
        insert_techs(&txn, id, params.techs).await?;

        let existing_addon = entity::prelude::ProductAddon::find()
            .filter(entity::product_addon::Column::ProductId.eq(id))
            .one(&txn)
            .await?;

        match (params.addon, existing_addon) {
            (Some(addon), Some(existing)) => {
                let mut active: entity::product_addon::ActiveModel = existing.into();
                active.title = ActiveValue::Set(addon.title);
                active.description = ActiveValue::Set(addon.description);
                active.update(&txn).await?;
            }
            (Some(addon), None) => {
                insert_addon(&txn, id, addon).await?;
            }
            (None, Some(existing)) => {
                entity::prelude::ProductAddon::delete_by_id(existing.id)
                    .exec(&txn)
                    .await?;
            }
            (None, None) => {}
        }

        txn.commit().await?;

        self.find_by_id(id).await
    }

    /// Deletes a product together with its techs and addon.
    ///
    /// # Returns
    /// - `Ok(true)` - Product deleted
    /// - `Ok(false)` - No product with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::ProductTech::delete_many()
            .filter(entity::product_tech::Column::ProductId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::ProductAddon::delete_many()
            .filter(entity::product_addon::Column::ProductId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Product::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            return Ok(false);
        }

        txn.commit().await?;

        Ok(true)
    }

    /// Rewrites `order` so each product takes its index in `ids`.
    ///
    /// Runs in one transaction; an unknown id rolls everything back with `RecordNotFound`.
    pub async fn reorder(&self, ids: &[i32]) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        for (position, id) in ids.iter().enumerate() {
            let result = entity::prelude::Product::update_many()
                .col_expr(entity::product::Column::Order, Expr::value(position as i32))
                .filter(entity::product::Column::Id.eq(*id))
                .exec(&txn)
                .await?;

            if result.rows_affected == 0 {
                return Err(DbErr::RecordNotFound(format!("Product {} not found", id)));
            }
        }

        txn.commit().await
    }
}

/// Base product query in display order: `order` then id.
fn ordered() -> Select<entity::product::Entity> {
    entity::prelude::Product::find()
        .order_by_asc(entity::product::Column::Order)
        .order_by_asc(entity::product::Column::Id)
}

async fn insert_techs<C: ConnectionTrait>(
    db: &C,
    product_id: i32,
    techs: Vec<String>,
) -> Result<(), DbErr> {
    if techs.is_empty() {
        return Ok(());
    }

    let models = techs.into_iter().map(|name| entity::product_tech::ActiveModel {
        product_id: ActiveValue::Set(product_id),
        name: ActiveValue::Set(name),
        ..Default::default()
    });

    entity::prelude::ProductTech::insert_many(models)
        .exec(db)
        .await?;

    Ok(())
}

pub(super) async fn insert_addon<C: ConnectionTrait>(
    db: &C,
    product_id: i32,
    addon: AddonParams,
) -> Result<entity::product_addon::Model, DbErr> {
    entity::product_addon::ActiveModel {
        product_id: ActiveValue::Set(product_id),
        title: ActiveValue::Set(addon.title),
        description: ActiveValue::Set(addon.description),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Loads category names, techs and addons for `entities` with one query per table.
async fn load_relations<C: ConnectionTrait>(
    db: &C,
    entities: Vec<entity::product::Model>,
) -> Result<Vec<Product>, DbErr> {
    if entities.is_empty() {
        return Ok(Vec::new());
    }

    let product_ids: Vec<i32> = entities.iter().map(|p| p.id).collect();
    let category_ids: Vec<i32> = entities.iter().map(|p| p.category_id).collect();

    let category_names: HashMap<i32, String> = entity::prelude::Category::find()
        .filter(entity::category::Column::Id.is_in(category_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();

    let mut techs: HashMap<i32, Vec<entity::product_tech::Model>> = HashMap::new();
    for tech in entity::prelude::ProductTech::find()
        .filter(entity::product_tech::Column::ProductId.is_in(product_ids.clone()))
        .order_by_asc(entity::product_tech::Column::Id)
        .all(db)
        .await?
    {
        techs.entry(tech.product_id).or_default().push(tech);
    }

    let mut addons: HashMap<i32, entity::product_addon::Model> = entity::prelude::ProductAddon::find()
        .filter(entity::product_addon::Column::ProductId.is_in(product_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|a| (a.product_id, a))
        .collect();

    Ok(entities
        .into_iter()
        .map(|entity| {
            let category_name = category_names
                .get(&entity.category_id)
                .cloned()
                .unwrap_or_default();
            let product_techs = techs.remove(&entity.id).unwrap_or_default();
            let addon = addons.remove(&entity.id);
            Product::from_entity(entity, category_name, product_techs, addon)
        })
        .collect())
}
