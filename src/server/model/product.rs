//! Product domain models and parameters.
//!
//! A product belongs to one category, carries a list of technology tags and at most one
//! addon. `ProductParams` is shared by create and update because both forms submit the
//! full set of fields.

use chrono::{DateTime, Utc};

use crate::{
    model::product::{
        AddonDto, CreateProductDto, PaginatedProductsDto, ProductDto, UpdateProductDto,
    },
    server::{error::AppError, util::validate},
};

const MAX_TECHS: usize = 20;
const MAX_TECH_LENGTH: usize = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct Addon {
    pub title: String,
    pub description: String,
}

impl Addon {
    pub fn into_dto(self) -> AddonDto {
        AddonDto {
            title: self.title,
            description: self.description,
        }
    }

    pub fn from_entity(entity: entity::product_addon::Model) -> Self {
        Self {
            title: entity.title,
            description: entity.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image: String,
    pub category_id: i32,
    pub category_name: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub order: i32,
    /// Technology tags in insertion order.
    pub techs: Vec<String>,
    pub addon: Option<Addon>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            name: self.name,
            description: self.description,
            image: self.image,
            category_id: self.category_id,
            category_name: self.category_name,
            github_url: self.github_url,
            live_url: self.live_url,
            order: self.order,
            techs: self.techs,
            addon: self.addon.map(Addon::into_dto),
            created_at: self.created_at,
        }
    }

    /// Assembles a product from its row and already loaded relations.
    pub fn from_entity(
        entity: entity::product::Model,
        category_name: String,
        techs: Vec<entity::product_tech::Model>,
        addon: Option<entity::product_addon::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            image: entity.image,
            category_id: entity.category_id,
            category_name,
            github_url: entity.github_url,
            live_url: entity.live_url,
            order: entity.order,
            techs: techs.into_iter().map(|t| t.name).collect(),
            addon: addon.map(Addon::from_entity),
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedProducts {
    pub products: Vec<Product>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedProducts {
    pub fn into_dto(self) -> PaginatedProductsDto {
        PaginatedProductsDto {
            products: self.products.into_iter().map(Product::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddonParams {
    pub title: String,
    pub description: String,
}

impl AddonParams {
    pub fn from_dto(dto: AddonDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
        }
    }

    /// Field names are prefixed with `addon.` so forms can point at the nested input.
    pub fn validate(self) -> Result<Self, AppError> {
        Ok(Self {
            title: validate::text("addon.title", &self.title, 1, 100)?,
            description: validate::text("addon.description", &self.description, 1, 1000)?,
        })
    }
}

/// Product form input, used for both create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductParams {
    pub name: String,
    pub description: String,
    pub image: String,
    pub category_id: i32,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub order: i32,
    pub techs: Vec<String>,
    pub addon: Option<AddonParams>,
}

impl ProductParams {
    pub fn from_create_dto(dto: CreateProductDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            image: dto.image,
            category_id: dto.category_id,
            github_url: dto.github_url,
            live_url: dto.live_url,
            order: dto.order,
            techs: dto.techs,
            addon: dto.addon.map(AddonParams::from_dto),
        }
    }

    pub fn from_update_dto(dto: UpdateProductDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            image: dto.image,
            category_id: dto.category_id,
            github_url: dto.github_url,
            live_url: dto.live_url,
            order: dto.order,
            techs: dto.techs,
            addon: dto.addon.map(AddonParams::from_dto),
        }
    }

    /// Checks every field and returns the normalized form.
    ///
    /// Whether `category_id` exists is checked by the service against the database.
    pub fn validate(self) -> Result<Self, AppError> {
        Ok(Self {
            name: validate::text("name", &self.name, 1, 100)?,
            description: validate::text("description", &self.description, 1, 5000)?,
            image: validate::image("image", &self.image)?,
            category_id: self.category_id,
            github_url: validate::optional_http_url("github_url", self.github_url)?,
            live_url: validate::optional_http_url("live_url", self.live_url)?,
            order: validate::non_negative("order", self.order)?,
            techs: validate::tags("techs", self.techs, MAX_TECHS, MAX_TECH_LENGTH)?,
            addon: self.addon.map(AddonParams::validate).transpose()?,
        })
    }
}
