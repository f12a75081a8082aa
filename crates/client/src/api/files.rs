//! Product image uploads.
//!
//! New images are uploaded one request per file, fanned out in parallel and
//! joined all-or-nothing: if any upload rejects, the whole create/update
//! rejects. Nothing has been persisted to the product at that point, so no
//! rollback is needed.

use std::path::Path;

use serde::Deserialize;
use tracing::instrument;

use crate::error::{ApiError, ApiResult};

use super::ApiClient;
use super::conversions::image_url_to_api;

/// A new image file to attach to a product.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Read an upload from disk, guessing the MIME type from the extension.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map_or_else(|| "upload".to_owned(), |n| n.to_string_lossy().into_owned());
        let content_type = guess_content_type(&file_name).to_owned();

        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }
}

fn guess_content_type(file_name: &str) -> &'static str {
    match file_name.rsplit('.').next().map(str::to_ascii_lowercase) {
        Some(ext) if ext == "jpg" || ext == "jpeg" => "image/jpeg",
        Some(ext) if ext == "png" => "image/png",
        Some(ext) if ext == "webp" => "image/webp",
        Some(ext) if ext == "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}

/// Upload response from the backend. Older deployments report only the
/// `secureUrl`; the filename is recovered from it when absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    #[serde(default)]
    file_name: Option<String>,
    #[serde(default)]
    secure_url: Option<String>,
}

/// Upload several product images in parallel.
///
/// # Errors
///
/// Returns the first upload error; the whole batch is treated as failed.
pub(crate) async fn upload_product_images(
    api: &ApiClient,
    uploads: Vec<ImageUpload>,
) -> ApiResult<Vec<String>> {
    futures::future::try_join_all(
        uploads
            .into_iter()
            .map(|upload| upload_product_image(api, upload)),
    )
    .await
}

/// Upload one product image, returning the server-assigned filename.
///
/// # Errors
///
/// Returns an error if the upload fails or the response carries no
/// filename.
#[instrument(skip(api, upload), fields(file = %upload.file_name))]
pub(crate) async fn upload_product_image(
    api: &ApiClient,
    upload: ImageUpload,
) -> ApiResult<String> {
    let part = reqwest::multipart::Part::bytes(upload.bytes)
        .file_name(upload.file_name)
        .mime_str(&upload.content_type)?;
    let form = reqwest::multipart::Form::new().part("file", part);

    let response: UploadResponse = api.post_multipart("files/product", form).await?;

    response
        .file_name
        .or_else(|| response.secure_url.as_deref().map(image_url_to_api))
        .ok_or_else(|| ApiError::Data("upload response carried no filename".to_owned()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_content_type() {
        assert_eq!(guess_content_type("photo.JPG"), "image/jpeg");
        assert_eq!(guess_content_type("photo.png"), "image/png");
        assert_eq!(guess_content_type("photo.webp"), "image/webp");
        assert_eq!(guess_content_type("mystery"), "application/octet-stream");
    }

    #[test]
    fn test_upload_response_accepts_either_field() {
        let r: UploadResponse =
            serde_json::from_str(r#"{"fileName": "abc.jpg"}"#).unwrap();
        assert_eq!(r.file_name.as_deref(), Some("abc.jpg"));

        let r: UploadResponse =
            serde_json::from_str(r#"{"secureUrl": "http://host/files/product/def.jpg"}"#).unwrap();
        assert_eq!(
            r.secure_url.as_deref().map(image_url_to_api).as_deref(),
            Some("def.jpg")
        );
    }
}
