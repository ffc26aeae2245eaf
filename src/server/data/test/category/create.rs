use super::*;
use sea_orm::SqlErr;

/// Tests creating a new category.
///
/// Expected: Ok with name and order stored
#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo
        .create(CreateCategoryParams {
            name: "Web apps".to_string(),
            order: 3,
        })
        .await?;

    assert_eq!(category.name, "Web apps");
    assert_eq!(category.order, 3);
    assert!(repo.exists(category.id).await?);

    Ok(())
}

/// Tests that category names are unique.
///
/// Expected: Err classified as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::CategoryFactory::new(db)
        .name("Tools")
        .build()
        .await?;

    let result = CategoryRepository::new(db)
        .create(CreateCategoryParams {
            name: "Tools".to_string(),
            order: 0,
        })
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
