//! Product addon factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates the addon for a product.
///
/// Fails with a unique constraint violation if the product already has one.
pub async fn create_addon(
    db: &DatabaseConnection,
    product_id: i32,
) -> Result<entity::product_addon::Model, DbErr> {
    entity::product_addon::ActiveModel {
        product_id: ActiveValue::Set(product_id),
        title: ActiveValue::Set(format!("Addon for {}", product_id)),
        description: ActiveValue::Set("Included extra".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
