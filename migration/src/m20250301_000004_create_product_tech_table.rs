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
                    .table(ProductTech::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductTech::Id))
                    .col(integer(ProductTech::ProductId))
                    .col(string(ProductTech::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_tech_product_id")
                            .from(ProductTech::Table, ProductTech::ProductId)
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
            .drop_table(Table::drop().table(ProductTech::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProductTech {
    Table,
    Id,
    ProductId,
    Name,
}
