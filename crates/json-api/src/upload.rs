//! Image Upload Handler
//!
//! Stores product images under the uploads directory and answers with the
//! public URL they are served from.

use std::{path::Path, sync::Arc};

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::info;
use uuid::Uuid;

use crate::{extensions::*, state::State};

/// Maximum file size (5MB)
const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Supported image formats
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

/// Upload response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UploadResponse {
    /// Path the image is served from, e.g. `/uploads/<name>.png`
    pub url: String,
}

/// Lowercased extension of a supported image file name.
fn image_extension(file_name: &str) -> Option<String> {
    let ext = Path::new(file_name).extension()?.to_str()?.to_lowercase();

    SUPPORTED_FORMATS.contains(&ext.as_str()).then_some(ext)
}

/// Upload Image Handler
///
/// Accepts a multipart form with the image in the `image` field.
#[endpoint(
    tags("uploads"),
    summary = "Upload Product Image",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Image stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing, oversized or unsupported image"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Admin credentials required"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<UploadResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let file = req
        .file("image")
        .await
        .ok_or_else(|| StatusError::bad_request().brief("No image uploaded"))?;

    let ext = file
        .name()
        .and_then(image_extension)
        .ok_or_else(|| {
            StatusError::bad_request().brief(format!(
                "Unsupported image format. Supported: {}",
                SUPPORTED_FORMATS.join(", ")
            ))
        })?;

    if file.size() > MAX_FILE_SIZE {
        return Err(StatusError::bad_request().brief("Image is larger than 5MB"));
    }

    let file_name = format!("{}.{ext}", Uuid::now_v7());

    fs::create_dir_all(&state.uploads_dir)
        .await
        .or_500("failed to create uploads directory")?;

    fs::copy(file.path(), state.uploads_dir.join(&file_name))
        .await
        .or_500("failed to store uploaded image")?;

    info!(file = %file_name, size = file.size(), "image uploaded");

    Ok(Json(UploadResponse {
        url: format!("/uploads/{file_name}"),
    }))
}
