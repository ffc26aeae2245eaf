use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    model::category::CreateCategoryParams,
    service::{catalog::CatalogCache, category::CategoryService},
};

/// Tests that the catalog groups products under ordered categories.
///
/// Expected: Ok with products nested in their category
#[tokio::test]
async fn builds_grouped_catalog() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let web = factory::category::CategoryFactory::new(db)
        .name("Web")
        .order(0)
        .build()
        .await?;
    let empty = factory::category::CategoryFactory::new(db)
        .name("Empty")
        .order(1)
        .build()
        .await?;
    let product = factory::create_product(db, web.id).await?;

    let catalog = CatalogCache::new().get(db).await.unwrap();

    assert_eq!(catalog.categories.len(), 2);
    assert_eq!(catalog.categories[0].category.id, web.id);
    assert_eq!(catalog.categories[0].products[0].id, product.id);
    assert_eq!(catalog.categories[1].category.id, empty.id);
    assert!(catalog.categories[1].products.is_empty());

    Ok(())
}

/// Tests that reads are served from cache until a mutation revalidates it.
///
/// Expected: stale value while cached, fresh value after a category is created
#[tokio::test]
async fn mutation_revalidates_cache() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cache = CatalogCache::new();
    assert!(cache.get(db).await.unwrap().categories.is_empty());
    assert!(cache.is_cached().await);

    // Written behind the cache's back: still served stale
    factory::create_category(db).await?;
    assert!(cache.get(db).await.unwrap().categories.is_empty());

    CategoryService::new(db, &cache)
        .create(CreateCategoryParams {
            name: "Tools".to_string(),
            order: 0,
        })
        .await
        .unwrap();
    assert!(!cache.is_cached().await);

    assert_eq!(cache.get(db).await.unwrap().categories.len(), 2);

    Ok(())
}
