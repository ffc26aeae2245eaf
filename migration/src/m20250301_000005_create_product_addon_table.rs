use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000003_create_product_table::Product;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductAddon::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductAddon::Id))
                    // One addon per product
                    .col(integer_uniq(ProductAddon::ProductId))
                    .col(string(ProductAddon::Title))
                    .col(text(ProductAddon::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_addon_product_id")
                            .from(ProductAddon::Table, ProductAddon::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductAddon::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProductAddon {
    Table,
    Id,
    ProductId,
    Title,
    Description,
}
