use super::*;

/// Tests that only `ADMIN` users are counted.
///
/// Expected: Ok with admin count and admin_exists following it
#[tokio::test]
async fn counts_only_admins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    factory::create_user(db).await?;

    assert_eq!(repo.count_admins().await?, 0);
    assert!(!repo.admin_exists().await?);

    factory::create_admin(db).await?;
    factory::create_admin(db).await?;

    assert_eq!(repo.count_admins().await?, 2);
    assert!(repo.admin_exists().await?);

    Ok(())
}
