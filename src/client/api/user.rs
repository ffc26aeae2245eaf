use crate::{
    client::{api::helper::*, model::error::ApiError},
    model::user::{PaginatedUsersDto, Role, UpdateRoleDto, UserDto},
};

pub async fn get_users(page: u64, entries: u64) -> Result<PaginatedUsersDto, ApiError> {
    let url = format!("/api/admin/users?page={}&entries={}", page, entries);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn update_user_role(id: i32, role: Role) -> Result<UserDto, ApiError> {
    let url = format!("/api/admin/users/{}/role", id);
    let body = serialize_json(&UpdateRoleDto { role })?;
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_user(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/admin/users/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
