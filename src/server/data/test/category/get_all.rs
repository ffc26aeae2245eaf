use super::*;

/// Tests that categories are ordered by `order`, then by name.
///
/// Expected: Ok with categories in display order
#[tokio::test]
async fn returns_categories_in_display_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for (name, order) in [("Mobile", 1), ("Web", 0), ("Desktop", 1)] {
        factory::category::CategoryFactory::new(db)
            .name(name)
            .order(order)
            .build()
            .await?;
    }

    let categories = CategoryRepository::new(db).get_all().await?;

    assert_eq!(
        categories.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
        vec!["Web", "Desktop", "Mobile"]
    );

    Ok(())
}
