use crate::{
    client::{api::helper::*, model::error::ApiError},
    model::category::{CategoryDto, CreateCategoryDto, PaginatedCategoriesDto, UpdateCategoryDto},
};

/// All categories in display order
pub async fn get_categories() -> Result<Vec<CategoryDto>, ApiError> {
    let response = send_request(get("/api/categories")).await?;
    parse_response(response).await
}

pub async fn get_paginated_categories(
    page: u64,
    entries: u64,
) -> Result<PaginatedCategoriesDto, ApiError> {
    let url = format!("/api/admin/categories?page={}&entries={}", page, entries);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn create_category(payload: CreateCategoryDto) -> Result<CategoryDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/admin/categories").body(body)).await?;
    parse_response(response).await
}

pub async fn update_category(id: i32, payload: UpdateCategoryDto) -> Result<CategoryDto, ApiError> {
    let url = format!("/api/admin/categories/{}", id);
    let body = serialize_json(&payload)?;
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_category(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/admin/categories/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}

pub async fn reorder_categories(ids: Vec<i32>) -> Result<(), ApiError> {
    let body = serialize_json(&ids)?;
    let response = send_request(put("/api/admin/categories/order").body(body)).await?;
    parse_empty_response(response).await
}
