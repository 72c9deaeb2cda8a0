//! `pawlink-geocode` -- resolve a coordinate the way the profile wizard does.
//!
//! Reverse geocodes `<lat> <lng>` through Nominatim, matches the result onto
//! the governorate/delegation taxonomy and prints the location as JSON.
//!
//! ```text
//! pawlink-geocode 36.8065 10.1815
//! ```
//!
//! # Environment variables
//!
//! | Variable              | Required | Default                               |
//! |-----------------------|----------|---------------------------------------|
//! | `NOMINATIM_URL`       | no       | `https://nominatim.openstreetmap.org` |
//! | `GEOCODER_USER_AGENT` | no       | `pawlink/<version>`                   |
//! | `RUST_LOG`            | no       | `pawlink_client=info`                 |

use anyhow::{bail, Context};
use pawlink_client::config::ClientConfig;
use pawlink_client::geocode::NominatimClient;
use pawlink_client::resolver::AddressResolver;
use pawlink_core::types::GeoPoint;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pawlink_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [lat, lng] = args.as_slice() else {
        bail!("usage: pawlink-geocode <lat> <lng>");
    };
    let lat: f64 = lat.parse().with_context(|| format!("invalid latitude '{lat}'"))?;
    let lng: f64 = lng.parse().with_context(|| format!("invalid longitude '{lng}'"))?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        bail!("coordinate out of range: {lat}, {lng}");
    }

    let config = ClientConfig::from_env()?;
    tracing::info!(
        nominatim_url = %config.nominatim_url,
        lat,
        lng,
        "Resolving location",
    );

    let resolver = AddressResolver::new(NominatimClient::new(
        config.nominatim_url,
        config.geocoder_user_agent,
    ));
    let location = resolver.resolve(GeoPoint::new(lat, lng)).await;

    println!("{}", serde_json::to_string_pretty(&location)?);
    Ok(())
}
