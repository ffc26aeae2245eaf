use super::*;

/// Tests that each category on a page carries its product count.
///
/// Expected: Ok with counts per category, zero for empty categories
#[tokio::test]
async fn includes_product_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let web = factory::category::CategoryFactory::new(db)
        .name("Web")
        .order(0)
        .build()
        .await?;
    let empty = factory::category::CategoryFactory::new(db)
        .name("Empty")
        .order(1)
        .build()
        .await?;
    factory::create_product(db, web.id).await?;
    factory::create_product(db, web.id).await?;

    let (categories, total) = CategoryRepository::new(db).get_paginated(0, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(categories[0].category.id, web.id);
    assert_eq!(categories[0].product_count, 2);
    assert_eq!(categories[1].category.id, empty.id);
    assert_eq!(categories[1].product_count, 0);

    Ok(())
}

/// Tests that a page past the end is empty but still reports the total.
///
/// Expected: Ok with no categories and total of existing rows
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_category(db).await?;

    let (categories, total) = CategoryRepository::new(db).get_paginated(3, 10).await?;

    assert!(categories.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
