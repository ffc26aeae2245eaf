use crate::{
    client::{api::helper::*, model::error::ApiError},
    model::product::{CreateProductDto, PaginatedProductsDto, ProductDto, UpdateProductDto},
};

/// Public product list in display order, optionally for one category
pub async fn get_products(category_id: Option<i32>) -> Result<Vec<ProductDto>, ApiError> {
    let url = match category_id {
        Some(id) => format!("/api/products?category_id={}", id),
        None => "/api/products".to_string(),
    };
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_paginated_products(
    page: u64,
    entries: u64,
) -> Result<PaginatedProductsDto, ApiError> {
    let url = format!("/api/admin/products?page={}&entries={}", page, entries);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn create_product(payload: CreateProductDto) -> Result<ProductDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/admin/products").body(body)).await?;
    parse_response(response).await
}

/// Replaces the product; an absent addon removes the stored one
pub async fn update_product(id: i32, payload: UpdateProductDto) -> Result<ProductDto, ApiError> {
    let url = format!("/api/admin/products/{}", id);
    let body = serialize_json(&payload)?;
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_product(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/admin/products/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}

pub async fn reorder_products(ids: Vec<i32>) -> Result<(), ApiError> {
    let body = serialize_json(&ids)?;
    let response = send_request(put("/api/admin/products/order").body(body)).await?;
    parse_empty_response(response).await
}
