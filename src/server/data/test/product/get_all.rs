use super::*;

/// Tests ordering by `order` then id, and the optional category filter.
///
/// Expected: Ok with all products ordered, or only the filtered category
#[tokio::test]
async fn orders_and_filters_products() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let web = factory::create_category(db).await?;
    let cli = factory::create_category(db).await?;

    let second = factory::product::ProductFactory::new(db, web.id)
        .order(1)
        .build()
        .await?;
    let first = factory::product::ProductFactory::new(db, cli.id)
        .order(0)
        .build()
        .await?;
    let third = factory::product::ProductFactory::new(db, web.id)
        .order(1)
        .build()
        .await?;

    let repo = ProductRepository::new(db);

    let ids: Vec<i32> = repo.get_all(None).await?.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    let ids: Vec<i32> = repo.get_all(Some(web.id)).await?.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![second.id, third.id]);

    Ok(())
}
