use crate::{
    client::{api::helper::*, model::error::ApiError},
    model::user::{LoginDto, RegisterDto, UserDto},
};

/// Fetches the logged-in user; `None` when there is no session
pub async fn get_user() -> Result<Option<UserDto>, ApiError> {
    let response = send_request(get("/api/auth/user")).await?;
    parse_response(response).await
}

pub async fn login(payload: LoginDto) -> Result<UserDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/auth/login").body(body)).await?;
    parse_response(response).await
}

pub async fn register(payload: RegisterDto) -> Result<UserDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/auth/register").body(body)).await?;
    parse_response(response).await
}
