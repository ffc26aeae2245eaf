use super::*;
use sea_orm::SqlErr;

/// Tests that a product can hold only one addon.
///
/// Expected: first create Ok, second Err as a unique constraint violation
#[tokio::test]
async fn allows_single_addon_per_product() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, product) = factory::helpers::create_product_with_dependencies(db).await?;
    let repo = ProductAddonRepository::new(db);

    let addon = repo.create(product.id, params("Hosting")).await?;
    assert_eq!(addon.title, "Hosting");

    let result = repo.create(product.id, params("Second")).await;
    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
