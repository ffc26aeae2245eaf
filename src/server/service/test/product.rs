use axum::http::StatusCode;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::product::{AddonParams, ProductParams},
    service::{catalog::CatalogCache, product::ProductService},
};

fn params(category_id: i32) -> ProductParams {
    ProductParams {
        name: "Folio".to_string(),
        description: "Portfolio site".to_string(),
        image: "/uploads/folio.png".to_string(),
        category_id,
        github_url: Some(String::new()),
        live_url: None,
        order: 0,
        techs: vec!["Rust".to_string(), "RUST".to_string()],
        addon: None,
    }
}

fn addon(title: &str) -> AddonParams {
    AddonParams {
        title: title.to_string(),
        description: "Extra".to_string(),
    }
}

/// Tests that created products are normalized before storage.
///
/// Expected: Ok with blank link dropped and techs de-duplicated
#[tokio::test]
async fn creates_normalized_product() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = CatalogCache::new();

    let category = factory::create_category(db).await?;

    let product = ProductService::new(db, &cache)
        .create(params(category.id))
        .await
        .unwrap();

    assert_eq!(product.github_url, None);
    assert_eq!(product.techs, vec!["Rust".to_string()]);

    Ok(())
}

/// Tests that an unknown category is reported as not found.
///
/// Expected: Err with status 404
#[tokio::test]
async fn unknown_category_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = CatalogCache::new();

    let err = ProductService::new(db, &cache)
        .create(params(99))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests the one-addon-per-product rule through the service.
///
/// Expected: first addon created, second is a conflict
#[tokio::test]
async fn second_addon_is_conflict() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = CatalogCache::new();
    let service = ProductService::new(db, &cache);

    let (_, product) = factory::helpers::create_product_with_dependencies(db).await?;

    service.create_addon(product.id, addon("Hosting")).await.unwrap();

    let err = service
        .create_addon(product.id, addon("Support"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), StatusCode::CONFLICT);

    let stored = service.get_by_id(product.id).await.unwrap();
    assert_eq!(stored.addon.map(|a| a.title), Some("Hosting".to_string()));

    Ok(())
}

/// Tests addon update and delete when none exists.
///
/// Expected: Err(NotFound) for both
#[tokio::test]
async fn missing_addon_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = CatalogCache::new();
    let service = ProductService::new(db, &cache);

    let (_, product) = factory::helpers::create_product_with_dependencies(db).await?;

    assert!(matches!(
        service.update_addon(product.id, addon("Nope")).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.delete_addon(product.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.create_addon(999, addon("Orphan")).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests that product mutations revalidate the catalog cache.
///
/// Expected: cache dropped after update and delete
#[tokio::test]
async fn mutations_revalidate_catalog() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = CatalogCache::new();
    let service = ProductService::new(db, &cache);

    let (category, product) = factory::helpers::create_product_with_dependencies(db).await?;

    cache.get(db).await.unwrap();
    service.update(product.id, params(category.id)).await.unwrap();
    assert!(!cache.is_cached().await);

    cache.get(db).await.unwrap();
    service.delete(product.id).await.unwrap();
    assert!(!cache.is_cached().await);

    assert!(matches!(
        service.get_by_id(product.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
