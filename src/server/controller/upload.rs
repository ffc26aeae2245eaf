use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, upload::UploadDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::upload::UploadService,
        state::AppState,
    },
};

/// Tag for grouping upload endpoints in OpenAPI documentation
pub static UPLOAD_TAG: &str = "upload";

/// Multipart field carrying the image.
const FILE_FIELD: &str = "file";

/// Upload an image for a product.
///
/// Accepts PNG, JPEG, WebP or GIF in the multipart field `file`. The content
/// type, the file extension and the file signature must agree.
///
/// # Access Control
/// - `Admin` - Only admins can upload
///
/// # Returns
/// - `201 Created` - Public URL of the stored file
/// - `400 Bad Request` - Missing field or unsupported file
/// - `413 Payload Too Large` - File exceeds `UPLOAD_MAX_BYTES`
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = UPLOAD_TAG,
    request_body(content_type = "multipart/form-data", description = "Image in field `file`"),
    responses(
        (status = 201, description = "File stored", body = UploadDto),
        (status = 400, description = "Invalid file", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 413, description = "File too large", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_image(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = UploadService::new(&state.upload_dir, &state.app_url, state.upload_max_bytes);

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(multipart_error)?;

        let url = service
            .store(file_name.as_deref(), content_type.as_deref(), &bytes)
            .await?;

        tracing::info!("User {} uploaded {}", user.id, url);

        return Ok((StatusCode::CREATED, Json(UploadDto { url })));
    }

    Err(AppError::validation(FILE_FIELD, "No file provided"))
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("File exceeds the maximum upload size".to_string())
    } else {
        AppError::BadRequest(err.body_text())
    }
}
