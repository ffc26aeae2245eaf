use super::*;

/// Tests that updating replaces techs and upserts the addon.
///
/// Expected: Ok(Some) with new techs and an addon added where none existed
#[tokio::test]
async fn replaces_techs_and_adds_addon() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, product) = factory::helpers::create_product_with_dependencies(db).await?;
    factory::create_tech(db, product.id, "PHP").await?;

    let updated = ProductRepository::new(db)
        .update(
            product.id,
            ProductParams {
                name: "Renamed".to_string(),
                techs: vec!["Rust".to_string()],
                addon: Some(addon("Support")),
                ..params(category.id)
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.techs, vec!["Rust".to_string()]);
    assert_eq!(updated.addon.map(|a| a.title), Some("Support".to_string()));

    Ok(())
}

/// Tests that an existing addon is updated in place and removed when omitted.
///
/// Expected: Ok with addon title changed, then addon gone
#[tokio::test]
async fn updates_then_removes_addon() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, product) = factory::helpers::create_product_with_dependencies(db).await?;
    factory::create_addon(db, product.id).await?;

    let repo = ProductRepository::new(db);

    let updated = repo
        .update(
            product.id,
            ProductParams {
                addon: Some(addon("Changed")),
                ..params(category.id)
            },
        )
        .await?
        .unwrap();
    assert_eq!(updated.addon.map(|a| a.title), Some("Changed".to_string()));

    let updated = repo.update(product.id, params(category.id)).await?.unwrap();
    assert!(updated.addon.is_none());

    Ok(())
}

/// Tests updating a product that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let result = ProductRepository::new(db)
        .update(1234, params(category.id))
        .await?;

    assert!(result.is_none());

    Ok(())
}
