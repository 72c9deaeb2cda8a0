//! `pawlink-client` library crate.
//!
//! Async collaborators for the profile wizard: the reverse geocoder, the
//! image upload endpoint and the create-profile endpoint, plus the flows
//! that drive a [`pawlink_core::wizard::Wizard`] through them. The
//! `pawlink-geocode` binary lives in `main.rs`.

pub mod config;
pub mod debounce;
pub mod error;
pub mod geocode;
mod http;
pub mod profile;
pub mod resolver;
pub mod submission;
pub mod traits;
pub mod upload;
pub mod uploads;

pub use config::ClientConfig;
pub use error::ClientError;
pub use traits::{ImageUploader, ProfileCreator, ReverseGeocoder};
