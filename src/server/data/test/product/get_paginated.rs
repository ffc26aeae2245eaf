use super::*;

/// Tests that pages are sliced from the ordered list and total counts every product.
///
/// Expected: Ok with the second page holding the remaining product
#[tokio::test]
async fn returns_requested_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    for order in 0..3 {
        factory::product::ProductFactory::new(db, category.id)
            .order(order)
            .build()
            .await?;
    }

    let repo = ProductRepository::new(db);

    let (products, total) = repo.get_paginated(0, 2).await?;
    assert_eq!(total, 3);
    assert_eq!(products.len(), 2);

    let (products, _) = repo.get_paginated(1, 2).await?;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].order, 2);

    Ok(())
}
