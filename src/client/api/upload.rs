use reqwasm::http::{Request, RequestCredentials};
use web_sys::{wasm_bindgen::JsCast, File, FormData, HtmlInputElement};

use crate::{
    client::{
        api::{
            helper::*,
            retry::{backoff_delay, should_retry, UPLOAD_ATTEMPTS},
        },
        model::error::ApiError,
    },
    model::upload::UploadDto,
};

/// Reads the first selected file of the `<input type="file">` with the given id
pub fn selected_file(input_id: &str) -> Option<File> {
    let input = web_sys::window()?
        .document()?
        .get_element_by_id(input_id)?
        .dyn_into::<HtmlInputElement>()
        .ok()?;

    input.files()?.get(0)
}

/// Uploads an image, retrying network and server failures with exponential backoff
pub async fn upload_image(file: &File) -> Result<UploadDto, ApiError> {
    let mut attempt = 1;

    loop {
        match try_upload(file).await {
            Ok(upload) => return Ok(upload),
            Err(err) if attempt < UPLOAD_ATTEMPTS && should_retry(err.status) => {
                gloo_timers::future::sleep(backoff_delay(attempt)).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

async fn try_upload(file: &File) -> Result<UploadDto, ApiError> {
    let form = FormData::new().map_err(|_| form_error())?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| form_error())?;

    // No explicit content type: the browser adds the multipart boundary
    let request = Request::post("/api/upload")
        .credentials(RequestCredentials::Include)
        .body(form);

    let response = send_request(request).await?;
    parse_response(response).await
}

fn form_error() -> ApiError {
    ApiError {
        status: 400,
        message: "Failed to read the selected file".to_string(),
    }
}
