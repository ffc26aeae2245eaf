use super::*;

/// Tests that reordering assigns list positions and rejects unknown ids.
///
/// Expected: Ok for known ids, Err(RecordNotFound) with no change otherwise
#[tokio::test]
async fn reorders_products_atomically() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let a = factory::create_product(db, category.id).await?;
    let b = factory::create_product(db, category.id).await?;

    let repo = ProductRepository::new(db);
    repo.reorder(&[b.id, a.id]).await?;

    let ids: Vec<i32> = repo.get_all(None).await?.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![b.id, a.id]);

    let result = repo.reorder(&[a.id, 777]).await;
    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    let ids: Vec<i32> = repo.get_all(None).await?.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![b.id, a.id]);

    Ok(())
}
