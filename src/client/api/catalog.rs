use crate::{
    client::{api::helper::*, model::error::ApiError},
    model::catalog::CatalogDto,
};

pub async fn get_catalog() -> Result<CatalogDto, ApiError> {
    let response = send_request(get("/api/catalog")).await?;
    parse_response(response).await
}
