pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_user_table;
mod m20250301_000002_create_category_table;
mod m20250301_000003_create_product_table;
mod m20250301_000004_create_product_tech_table;
mod m20250301_000005_create_product_addon_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_table::Migration),
            Box::new(m20250301_000002_create_category_table::Migration),
            Box::new(m20250301_000003_create_product_table::Migration),
            Box::new(m20250301_000004_create_product_tech_table::Migration),
            Box::new(m20250301_000005_create_product_addon_table::Migration),
        ]
    }
}
