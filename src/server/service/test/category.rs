use axum::http::StatusCode;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::category::{CreateCategoryParams, UpdateCategoryParams},
    service::{catalog::CatalogCache, category::CategoryService},
};

fn create(name: &str) -> CreateCategoryParams {
    CreateCategoryParams {
        name: name.to_string(),
        order: 0,
    }
}

/// Tests that invalid input is rejected before touching the database.
///
/// Expected: Err(Validation) naming `name`
#[tokio::test]
async fn rejects_blank_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = CatalogCache::new();

    let result = CategoryService::new(db, &cache).create(create("   ")).await;

    assert!(matches!(
        result,
        Err(AppError::Validation { ref field, .. }) if field == "name"
    ));

    Ok(())
}

/// Tests duplicate names on create and update.
///
/// Expected: Err with status 409 in both cases
#[tokio::test]
async fn duplicate_name_is_conflict() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = CatalogCache::new();
    let service = CategoryService::new(db, &cache);

    service.create(create("Web")).await.unwrap();
    let other = service.create(create("Mobile")).await.unwrap();

    let err = service.create(create("Web")).await.unwrap_err();
    assert_eq!(err.status_code(), StatusCode::CONFLICT);

    let err = service
        .update(UpdateCategoryParams {
            id: other.id,
            name: "Web".to_string(),
            order: 0,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    Ok(())
}

/// Tests that missing ids produce 404 for update, delete and reorder.
///
/// Expected: Err(NotFound) each time
#[tokio::test]
async fn missing_category_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = CatalogCache::new();
    let service = CategoryService::new(db, &cache);

    let existing = factory::create_category(db).await?;

    let err = service
        .update(UpdateCategoryParams {
            id: 404,
            name: "Ghost".to_string(),
            order: 0,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    assert!(matches!(service.delete(404).await, Err(AppError::NotFound(_))));
    assert!(matches!(
        service.reorder(vec![existing.id, 404]).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests pagination metadata.
///
/// Expected: total pages rounded up
#[tokio::test]
async fn computes_total_pages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = CatalogCache::new();

    for _ in 0..5 {
        factory::create_category(db).await?;
    }

    let page = CategoryService::new(db, &cache)
        .get_paginated(0, 2)
        .await
        .unwrap();

    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.categories.len(), 2);

    Ok(())
}

/// Tests that a page whose offset overflows is refused instead of queried.
///
/// Expected: Err with status 400
#[tokio::test]
async fn rejects_out_of_range_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = CatalogCache::new();

    let err = CategoryService::new(db, &cache)
        .get_paginated(u64::MAX, 10)
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

    Ok(())
}
