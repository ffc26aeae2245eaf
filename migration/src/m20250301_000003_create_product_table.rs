use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_category_table::Category;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(string(Product::Name))
                    .col(text(Product::Description))
                    .col(string(Product::Image))
                    .col(integer(Product::CategoryId))
                    .col(string_null(Product::GithubUrl))
                    .col(string_null(Product::LiveUrl))
                    .col(integer(Product::Order).default(0))
                    .col(timestamp_with_time_zone(Product::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_category_id")
                            .from(Product::Table, Product::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_product_category_order")
                    .table(Product::Table)
                    .col(Product::CategoryId)
                    .col(Product::Order)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Product {
    Table,
    Id,
    Name,
    Description,
    Image,
    CategoryId,
    GithubUrl,
    LiveUrl,
    Order,
    CreatedAt,
}
