//! Client for the backend's image upload endpoint.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::error::ClientError;
use crate::http::parse_response;
use crate::traits::{ImageUploader, UploadFile};

/// Multipart field the upload endpoint reads the file from.
pub const UPLOAD_FIELD: &str = "image";

#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: Option<String>,
}

/// HTTP client for `POST {base}/api/upload`.
pub struct UploadClient {
    client: reqwest::Client,
    base_url: String,
}

impl UploadClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ImageUploader for UploadClient {
    async fn upload(&self, file: UploadFile) -> Result<String, ClientError> {
        let size = file.bytes.len();
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name.clone())
            .mime_str(&file.mime)?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .client
            .post(format!("{}/api/upload", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let body: UploadResponse = parse_response(response).await?;
        let url = body
            .url
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| ClientError::Decode("upload response has no url".into()))?;
        tracing::debug!(file = %file.file_name, size, url = %url, "Uploaded file");
        Ok(url)
    }
}
