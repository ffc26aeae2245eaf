use axum::{extract::DefaultBodyLimit, Router};
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, catalog, category, product, upload, user},
    state::AppState,
};

/// Room for multipart boundaries and headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(title = "Folio API", description = "Portfolio catalog and admin API"),
    tags(
        (name = "auth", description = "Registration, login and session"),
        (name = "catalog", description = "Cached public catalog"),
        (name = "category", description = "Product categories"),
        (name = "product", description = "Products and their addons"),
        (name = "upload", description = "Image uploads"),
        (name = "user", description = "User administration"),
    )
)]
struct ApiDoc;

/// Builds the JSON API, its OpenAPI document at `/api/docs` and the `/uploads` file service.
pub fn router(state: &AppState) -> Router<AppState> {
    let upload_routes = OpenApiRouter::new()
        .routes(routes!(upload::upload_image))
        .layer(DefaultBodyLimit::max(
            state.upload_max_bytes + MULTIPART_OVERHEAD_BYTES,
        ));

    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Auth
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        // Public catalog
        .routes(routes!(catalog::get_catalog))
        .routes(routes!(category::get_categories))
        .routes(routes!(product::get_products))
        .routes(routes!(product::get_product))
        // Admin categories
        .routes(routes!(
            category::get_paginated_categories,
            category::create_category
        ))
        .routes(routes!(category::reorder_categories))
        .routes(routes!(category::update_category, category::delete_category))
        // Admin products
        .routes(routes!(
            product::get_paginated_products,
            product::create_product
        ))
        .routes(routes!(product::reorder_products))
        .routes(routes!(product::update_product, product::delete_product))
        .routes(routes!(
            product::create_addon,
            product::update_addon,
            product::delete_addon
        ))
        // Admin users
        .routes(routes!(user::get_users))
        .routes(routes!(user::update_user_role))
        .routes(routes!(user::delete_user))
        .merge(upload_routes)
        .split_for_parts();

    api_router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .nest_service("/uploads", ServeDir::new(&state.upload_dir))
}
