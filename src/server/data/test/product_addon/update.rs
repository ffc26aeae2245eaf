use super::*;

/// Tests updating an existing addon and a missing one.
///
/// Expected: Ok(Some) with new title, Ok(None) when the product has no addon
#[tokio::test]
async fn updates_existing_addon_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, with_addon) = factory::helpers::create_product_with_dependencies(db).await?;
    let without_addon = factory::create_product(db, category.id).await?;
    factory::create_addon(db, with_addon.id).await?;

    let repo = ProductAddonRepository::new(db);

    let updated = repo.update(with_addon.id, params("Renamed")).await?;
    assert_eq!(updated.map(|a| a.title), Some("Renamed".to_string()));

    assert!(repo.update(without_addon.id, params("Nope")).await?.is_none());

    Ok(())
}
