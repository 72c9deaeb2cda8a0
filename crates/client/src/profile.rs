//! Client for the backend's create-profile endpoint.

use async_trait::async_trait;
use pawlink_core::submission::{CreateProfileResponse, ProfilePayload};

use crate::error::ClientError;
use crate::http::parse_response;
use crate::traits::ProfileCreator;

/// HTTP client for `POST {base}/api/profile`.
pub struct ProfileApi {
    client: reqwest::Client,
    base_url: String,
}

impl ProfileApi {
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
impl ProfileCreator for ProfileApi {
    /// A rejected profile normally comes back as a 4xx with
    /// `{ "success": false, "message": .. }`; that body is returned as a
    /// response rather than an error so the message reaches the form.
    async fn create_profile(
        &self,
        payload: &ProfilePayload,
    ) -> Result<CreateProfileResponse, ClientError> {
        let response = self
            .client
            .post(format!("{}/api/profile", self.base_url))
            .json(payload)
            .send()
            .await?;

        match parse_response::<CreateProfileResponse>(response).await {
            Err(ClientError::Api { status, body }) if (400..500).contains(&status) => {
                match serde_json::from_str::<CreateProfileResponse>(&body) {
                    Ok(rejected) if !rejected.success => Ok(rejected),
                    _ => Err(ClientError::Api { status, body }),
                }
            }
            other => other,
        }
    }
}
