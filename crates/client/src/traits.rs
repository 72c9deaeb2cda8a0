//! Collaborator seams. The wizard flows only see these traits; the HTTP
//! clients in [`crate::geocode`], [`crate::upload`] and [`crate::profile`]
//! are the production implementations.

use async_trait::async_trait;
use pawlink_core::address::ReverseGeocodeResponse;
use pawlink_core::submission::{CreateProfileResponse, ProfilePayload};
use pawlink_core::types::GeoPoint;

use crate::error::ClientError;

/// A file picked by the user, ready to be sent as multipart form data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    /// MIME type, e.g. `image/png`.
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        }
    }
}

/// Coordinate to free-text address lookup.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn reverse(&self, point: GeoPoint) -> Result<ReverseGeocodeResponse, ClientError>;
}

/// Stores a file and returns its public URL.
#[async_trait]
pub trait ImageUploader: Send + Sync {
    async fn upload(&self, file: UploadFile) -> Result<String, ClientError>;
}

/// Creates the profile from an assembled payload.
#[async_trait]
pub trait ProfileCreator: Send + Sync {
    async fn create_profile(
        &self,
        payload: &ProfilePayload,
    ) -> Result<CreateProfileResponse, ClientError>;
}
