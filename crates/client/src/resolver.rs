//! Map-pick orchestration: reverse geocode a coordinate, match it onto the
//! governorate/delegation taxonomy and write it into the wizard.
//!
//! Geocoding is best-effort. Any failure is logged and replaced by the
//! fallback location, so callers never see an error.

use pawlink_core::address::{resolve_address, ResolvedLocation};
use pawlink_core::types::GeoPoint;
use pawlink_core::wizard::Wizard;

use crate::traits::ReverseGeocoder;

pub struct AddressResolver<G> {
    geocoder: G,
}

impl<G: ReverseGeocoder> AddressResolver<G> {
    pub fn new(geocoder: G) -> Self {
        Self { geocoder }
    }

    /// Resolve `point` to a taxonomy location.
    pub async fn resolve(&self, point: GeoPoint) -> ResolvedLocation {
        match self.geocoder.reverse(point).await {
            Ok(response) => {
                if response.address.is_none() {
                    tracing::warn!(
                        lat = point.lat,
                        lng = point.lng,
                        "Reverse geocode returned no address, using fallback location",
                    );
                }
                let resolved = resolve_address(point, response.address.as_ref());
                tracing::debug!(
                    governorate = %resolved.governorate,
                    delegation = %resolved.delegation,
                    display_name = response.display_name.as_deref().unwrap_or_default(),
                    "Resolved map location",
                );
                resolved
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    lat = point.lat,
                    lng = point.lng,
                    "Reverse geocode failed, using fallback location",
                );
                ResolvedLocation::fallback(point)
            }
        }
    }

    /// Resolve `point` and write the coordinate, governorate and delegation
    /// into `wizard`.
    pub async fn resolve_into(&self, wizard: &mut Wizard, point: GeoPoint) -> ResolvedLocation {
        let resolved = self.resolve(point).await;
        wizard.apply_location(&resolved);
        resolved
    }
}
