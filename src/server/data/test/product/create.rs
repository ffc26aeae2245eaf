use super::*;

/// Tests creating a product with techs and an addon in one call.
///
/// Expected: Ok with relations loaded in insertion order
#[tokio::test]
async fn creates_product_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::CategoryFactory::new(db)
        .name("Web")
        .build()
        .await?;

    let product = ProductRepository::new(db)
        .create(ProductParams {
            addon: Some(addon("Hosting")),
            ..params(category.id)
        })
        .await?;

    assert_eq!(product.category_name, "Web");
    assert_eq!(product.techs, vec!["Rust".to_string(), "Dioxus".to_string()]);
    assert_eq!(product.addon.map(|a| a.title), Some("Hosting".to_string()));

    Ok(())
}

/// Tests that a product without techs or addon is created cleanly.
///
/// Expected: Ok with empty techs and no addon
#[tokio::test]
async fn creates_product_without_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let product = ProductRepository::new(db)
        .create(ProductParams {
            techs: vec![],
            ..params(category.id)
        })
        .await?;

    assert!(product.techs.is_empty());
    assert!(product.addon.is_none());

    Ok(())
}
