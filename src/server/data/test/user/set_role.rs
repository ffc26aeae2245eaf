use super::*;

/// Tests promoting a user to admin.
///
/// Expected: Ok with the stored role updated
#[tokio::test]
async fn updates_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    let updated = repo.set_role(user.id, Role::Admin).await?;
    assert_eq!(updated.role, Role::Admin);

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert!(stored.is_admin());

    Ok(())
}

/// Tests setting the role of a missing user.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).set_role(42, Role::Admin).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
