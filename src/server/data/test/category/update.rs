use super::*;

/// Tests updating a category's name and order.
///
/// Expected: Ok(Some) with new values
#[tokio::test]
async fn updates_existing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let updated = CategoryRepository::new(db)
        .update(UpdateCategoryParams {
            id: category.id,
            name: "Renamed".to_string(),
            order: 7,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.order, 7);

    Ok(())
}

/// Tests updating a category that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CategoryRepository::new(db)
        .update(UpdateCategoryParams {
            id: 99,
            name: "Ghost".to_string(),
            order: 0,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
