use super::*;
use sea_orm::SqlErr;

/// Tests creating a user stores the role string and returns the domain model.
///
/// Expected: Ok with role preserved
#[tokio::test]
async fn creates_user_with_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("ada@example.com", Role::Admin)).await?;

    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.role, Role::Admin);
    assert!(user.is_admin());

    Ok(())
}

/// Tests that a second user with the same email is rejected by the unique index.
///
/// Expected: Err classified as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("ada@example.com", Role::User)).await?;

    let result = repo.create(params("ada@example.com", Role::User)).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
