use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub image: String,
    pub category_id: i32,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub order: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Category,
    #[sea_orm(has_many = "super::product_tech::Entity")]
    ProductTech,
    #[sea_orm(has_one = "super::product_addon::Entity")]
    ProductAddon,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::product_tech::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductTech.def()
    }
}

impl Related<super::product_addon::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductAddon.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
