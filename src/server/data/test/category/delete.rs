use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests that deleting a category removes its products, techs and addons.
///
/// Expected: Ok(true) and no dependent rows left
#[tokio::test]
async fn deletes_category_with_products() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, product) = factory::helpers::create_product_with_dependencies(db).await?;
    factory::create_tech(db, product.id, "Rust").await?;
    factory::create_addon(db, product.id).await?;
    let other = factory::create_category(db).await?;
    factory::create_product(db, other.id).await?;

    let repo = CategoryRepository::new(db);
    assert!(repo.delete(category.id).await?);

    assert!(!repo.exists(category.id).await?);
    assert_eq!(entity::prelude::Product::find().count(db).await?, 1);
    assert_eq!(entity::prelude::ProductTech::find().count(db).await?, 0);
    assert_eq!(entity::prelude::ProductAddon::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a missing category.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!CategoryRepository::new(db).delete(5).await?);

    Ok(())
}
