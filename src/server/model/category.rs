//! Category domain models and parameters.

use crate::{
    model::category::{
        CategoryDto, CategoryListItemDto, CreateCategoryDto, PaginatedCategoriesDto,
        UpdateCategoryDto,
    },
    server::{error::AppError, util::validate},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub order: i32,
}

impl Category {
    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            order: self.order,
        }
    }

    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            order: entity.order,
        }
    }
}

/// Category with the number of products assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWithCount {
    pub category: Category,
    pub product_count: u64,
}

impl CategoryWithCount {
    pub fn into_dto(self) -> CategoryListItemDto {
        CategoryListItemDto {
            id: self.category.id,
            name: self.category.name,
            order: self.category.order,
            product_count: self.product_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedCategories {
    pub categories: Vec<CategoryWithCount>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedCategories {
    pub fn into_dto(self) -> PaginatedCategoriesDto {
        PaginatedCategoriesDto {
            categories: self
                .categories
                .into_iter()
                .map(CategoryWithCount::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub name: String,
    pub order: i32,
}

impl CreateCategoryParams {
    pub fn from_dto(dto: CreateCategoryDto) -> Self {
        Self {
            name: dto.name,
            order: dto.order,
        }
    }

    pub fn validate(self) -> Result<Self, AppError> {
        Ok(Self {
            name: validate::text("name", &self.name, 1, 50)?,
            order: validate::non_negative("order", self.order)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCategoryParams {
    pub id: i32,
    pub name: String,
    pub order: i32,
}

impl UpdateCategoryParams {
    pub fn from_dto(id: i32, dto: UpdateCategoryDto) -> Self {
        Self {
            id,
            name: dto.name,
            order: dto.order,
        }
    }

    pub fn validate(self) -> Result<Self, AppError> {
        Ok(Self {
            id: self.id,
            name: validate::text("name", &self.name, 1, 50)?,
            order: validate::non_negative("order", self.order)?,
        })
    }
}
