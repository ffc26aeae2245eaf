use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests that deleting a product removes its techs and addon.
///
/// Expected: Ok(true) then Ok(false) on the second attempt
#[tokio::test]
async fn deletes_product_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, product) = factory::helpers::create_product_with_dependencies(db).await?;
    factory::create_tech(db, product.id, "Rust").await?;
    factory::create_addon(db, product.id).await?;

    let repo = ProductRepository::new(db);

    assert!(repo.delete(product.id).await?);
    assert!(!repo.exists(product.id).await?);
    assert_eq!(entity::prelude::ProductTech::find().count(db).await?, 0);
    assert_eq!(entity::prelude::ProductAddon::find().count(db).await?, 0);

    assert!(!repo.delete(product.id).await?);

    Ok(())
}
