//! Product tech factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a tech row with the given name for a product.
pub async fn create_tech(
    db: &DatabaseConnection,
    product_id: i32,
    name: impl Into<String>,
) -> Result<entity::product_tech::Model, DbErr> {
    entity::product_tech::ActiveModel {
        product_id: ActiveValue::Set(product_id),
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
