use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::product::ProductDto;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CatalogCategoryDto {
    pub id: i32,
    pub name: String,
    pub products: Vec<ProductDto>,
}

/// Public projects listing: ordered categories, each with its ordered products.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CatalogDto {
    pub categories: Vec<CatalogCategoryDto>,
}
