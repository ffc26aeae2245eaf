use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Single optional extra attached to a product.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AddonDto {
    pub title: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    /// Markdown source.
    pub description: String,
    pub image: String,
    pub category_id: i32,
    pub category_name: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub order: i32,
    pub techs: Vec<String>,
    pub addon: Option<AddonDto>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PaginatedProductsDto {
    pub products: Vec<ProductDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateProductDto {
    pub name: String,
    pub description: String,
    pub image: String,
    pub category_id: i32,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub techs: Vec<String>,
    #[serde(default)]
    pub addon: Option<AddonDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateProductDto {
    pub name: String,
    pub description: String,
    pub image: String,
    pub category_id: i32,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    pub order: i32,
    #[serde(default)]
    pub techs: Vec<String>,
    /// Replaces the current addon; `None` removes it.
    #[serde(default)]
    pub addon: Option<AddonDto>,
}
