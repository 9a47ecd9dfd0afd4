use axum::{
    Json,
    body::Bytes,
    extract::{
        Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::PhotoState;
use crate::error::{AppError, Result};
use crate::photo;

/// Name of the multipart field carrying the upload
const FILE_FIELD: &str = "file";

/// Successful processing response
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub message: String,
}

struct Upload {
    filename: String,
    data: Bytes,
}

/// POST /process-photo
///
/// Expects a multipart body with a `file` part. The content is read fully but
/// only its filename ends up in the response.
pub async fn process_photo(
    State(state): State<Arc<PhotoState>>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<ProcessResponse>> {
    // A body that is not multipart at all carries no file part either.
    let mut multipart = multipart.map_err(|e| {
        tracing::debug!("Not a multipart request: {}", e);
        AppError::NoFilePart
    })?;

    let upload = read_file_part(&mut multipart).await?;
    tracing::debug!(
        "Received upload '{}' ({} bytes)",
        upload.filename,
        upload.data.len()
    );

    let elapsed = photo::run_workload(photo::MATRIX_SIZE).await?;
    state.metrics.record_processing(elapsed.as_secs_f64());

    let message = photo::format_message(&upload.filename, elapsed);
    tracing::info!("{}", message);
    Ok(Json(ProcessResponse { message }))
}

/// Finds the `file` part and reads it into memory
///
/// Only a part with a filename parameter counts as a file; a plain form
/// value named `file` is skipped.
async fn read_file_part(multipart: &mut Multipart) -> Result<Upload> {
    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_owned) else {
            continue;
        };
        if filename.is_empty() {
            return Err(AppError::NoSelectedFile);
        }
        let data = field.bytes().await.map_err(upload_error)?;
        return Ok(Upload { filename, data });
    }
    Err(AppError::NoFilePart)
}

fn upload_error(error: MultipartError) -> AppError {
    AppError::Upload(error.body_text())
}
