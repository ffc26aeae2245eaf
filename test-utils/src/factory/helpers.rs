//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a category and a product inside it, both with default values.
///
/// # Returns
/// - `Ok((category, product))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_product_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::category::Model, entity::product::Model), DbErr> {
    let category = crate::factory::category::create_category(db).await?;
    let product = crate::factory::product::create_product(db, category.id).await?;

    Ok((category, product))
}
