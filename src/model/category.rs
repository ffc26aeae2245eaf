use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub order: i32,
}

/// Category row for the admin table, with the number of products it holds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CategoryListItemDto {
    pub id: i32,
    pub name: String,
    pub order: i32,
    pub product_count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PaginatedCategoriesDto {
    pub categories: Vec<CategoryListItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateCategoryDto {
    pub name: String,
    #[serde(default)]
    pub order: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateCategoryDto {
    pub name: String,
    pub order: i32,
}
