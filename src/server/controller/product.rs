use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        product::{AddonDto, CreateProductDto, PaginatedProductsDto, ProductDto, UpdateProductDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::product::{AddonParams, ProductParams},
        service::product::ProductService,
        state::AppState,
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductFilter {
    /// Only return products of this category
    pub category_id: Option<i32>,
}

/// Get products in display order, optionally filtered by category.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = PRODUCT_TAG,
    params(ProductFilter),
    responses(
        (status = 200, description = "Products ordered by order, then id", body = Vec<ProductDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    Query(filter): Query<ProductFilter>,
) -> Result<impl IntoResponse, AppError> {
    let products = ProductService::new(&state.db, &state.catalog_cache)
        .get_all(filter.category_id)
        .await?;

    let dto: Vec<ProductDto> = products.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Get a single product with its category name, techs and addon.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "The product", body = ProductDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let product = ProductService::new(&state.db, &state.catalog_cache)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// Get a page of products for the admin table.
///
/// # Access Control
/// - `Admin` - Only admins can list products for management
#[utoipa::path(
    get,
    path = "/api/admin/products",
    tag = PRODUCT_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of products", body = PaginatedProductsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_paginated_products(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let products = ProductService::new(&state.db, &state.catalog_cache)
        .get_paginated(params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(products.into_dto())))
}

/// Create a product with its techs and optional addon.
///
/// # Access Control
/// - `Admin` - Only admins can create products
///
/// # Returns
/// - `201 Created` - The new product
/// - `400 Bad Request` - Invalid field, named in `error`
/// - `404 Not Found` - Category does not exist
#[utoipa::path(
    post,
    path = "/api/admin/products",
    tag = PRODUCT_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductDto),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let product = ProductService::new(&state.db, &state.catalog_cache)
        .create(ProductParams::from_create_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(product.into_dto())))
}

/// Replace a product's fields and techs; the addon is upserted when present and
/// removed when absent.
///
/// # Access Control
/// - `Admin` - Only admins can update products
#[utoipa::path(
    put,
    path = "/api/admin/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = ProductDto),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Product or category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let product = ProductService::new(&state.db, &state.catalog_cache)
        .update(id, ProductParams::from_update_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// Delete a product with its techs and addon.
///
/// # Access Control
/// - `Admin` - Only admins can delete products
#[utoipa::path(
    delete,
    path = "/api/admin/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ProductService::new(&state.db, &state.catalog_cache)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Reorder products; the body lists product ids in their new display order.
///
/// # Access Control
/// - `Admin` - Only admins can reorder products
#[utoipa::path(
    put,
    path = "/api/admin/products/order",
    tag = PRODUCT_TAG,
    request_body = Vec<i32>,
    responses(
        (status = 204, description = "Order applied"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Unknown product ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reorder_products(
    State(state): State<AppState>,
    session: Session,
    Json(ids): Json<Vec<i32>>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ProductService::new(&state.db, &state.catalog_cache)
        .reorder(ids)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add the addon of a product. A product holds at most one addon.
///
/// # Access Control
/// - `Admin` - Only admins can manage addons
#[utoipa::path(
    post,
    path = "/api/admin/products/{id}/addon",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = AddonDto,
    responses(
        (status = 201, description = "Addon created", body = AddonDto),
        (status = 400, description = "Invalid addon data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 409, description = "Product already has an addon", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_addon(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<AddonDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let addon = ProductService::new(&state.db, &state.catalog_cache)
        .create_addon(id, AddonParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(addon.into_dto())))
}

/// Update the addon of a product.
///
/// # Access Control
/// - `Admin` - Only admins can manage addons
#[utoipa::path(
    put,
    path = "/api/admin/products/{id}/addon",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = AddonDto,
    responses(
        (status = 200, description = "Addon updated", body = AddonDto),
        (status = 400, description = "Invalid addon data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Product or addon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_addon(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<AddonDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let addon = ProductService::new(&state.db, &state.catalog_cache)
        .update_addon(id, AddonParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(addon.into_dto())))
}

/// Remove the addon of a product.
///
/// # Access Control
/// - `Admin` - Only admins can manage addons
#[utoipa::path(
    delete,
    path = "/api/admin/products/{id}/addon",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Addon deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Product or addon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_addon(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ProductService::new(&state.db, &state.catalog_cache)
        .delete_addon(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
