use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, catalog::CatalogDto},
    server::{error::AppError, state::AppState},
};

/// Tag for grouping catalog endpoints in OpenAPI documentation
pub static CATALOG_TAG: &str = "catalog";

/// Get the public catalog: every category in display order with its products.
///
/// Served from the in-memory cache, rebuilt after any catalog mutation.
#[utoipa::path(
    get,
    path = "/api/catalog",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Categories with their products", body = CatalogDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_catalog(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let catalog = state.catalog_cache.get(&state.db).await?;

    Ok((StatusCode::OK, Json(catalog.into_dto())))
}
