//! Nominatim reverse-geocoding client.

use async_trait::async_trait;
use pawlink_core::address::ReverseGeocodeResponse;
use pawlink_core::types::GeoPoint;

use crate::error::ClientError;
use crate::http::parse_response;
use crate::traits::ReverseGeocoder;

/// Zoom level asked of Nominatim; 16 resolves to suburb/town granularity.
pub const REVERSE_ZOOM: u8 = 16;

/// HTTP client for a Nominatim server.
pub struct NominatimClient {
    client: reqwest::Client,
    base_url: String,
    user_agent: String,
}

impl NominatimClient {
    /// * `base_url` - e.g. `https://nominatim.openstreetmap.org`.
    /// * `user_agent` - identifies the application, as the usage policy requires.
    pub fn new(base_url: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, user_agent)
    }

    /// Reuse an existing [`reqwest::Client`] for connection pooling.
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            user_agent: user_agent.into(),
        }
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimClient {
    /// `GET /reverse?format=json&lat=..&lon=..&zoom=16&addressdetails=1`.
    async fn reverse(&self, point: GeoPoint) -> Result<ReverseGeocodeResponse, ClientError> {
        tracing::debug!(lat = point.lat, lng = point.lng, "Reverse geocoding");
        let response = self
            .client
            .get(format!("{}/reverse", self.base_url))
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .query(&[
                ("format", "json".to_string()),
                ("lat", point.lat.to_string()),
                ("lon", point.lng.to_string()),
                ("zoom", REVERSE_ZOOM.to_string()),
                ("addressdetails", "1".to_string()),
            ])
            .send()
            .await?;

        parse_response(response).await
    }
}
