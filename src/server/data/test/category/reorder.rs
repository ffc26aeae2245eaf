use super::*;

/// Tests that reordering assigns each category its list index.
///
/// Expected: Ok with get_all following the new order
#[tokio::test]
async fn assigns_list_positions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_category(db).await?;
    let b = factory::create_category(db).await?;
    let c = factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    repo.reorder(&[c.id, a.id, b.id]).await?;

    let ids: Vec<i32> = repo.get_all().await?.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![c.id, a.id, b.id]);

    Ok(())
}

/// Tests that an unknown id rolls back the whole reorder.
///
/// Expected: Err(RecordNotFound) and orders unchanged
#[tokio::test]
async fn rolls_back_on_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::category::CategoryFactory::new(db).order(5).build().await?;

    let repo = CategoryRepository::new(db);
    let result = repo.reorder(&[a.id, 999]).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
    assert_eq!(repo.find_by_id(a.id).await?.unwrap().order, 5);

    Ok(())
}
