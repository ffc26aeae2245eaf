use super::*;

/// Tests removing an addon.
///
/// Expected: Ok(true) once, then Ok(false)
#[tokio::test]
async fn deletes_addon() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, product) = factory::helpers::create_product_with_dependencies(db).await?;
    factory::create_addon(db, product.id).await?;

    let repo = ProductAddonRepository::new(db);

    assert!(repo.delete(product.id).await?);
    assert!(repo.find_by_product_id(product.id).await?.is_none());
    assert!(!repo.delete(product.id).await?);

    Ok(())
}
