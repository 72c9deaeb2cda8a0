//! Client settings read from the environment.

use std::time::Duration;

use crate::error::ClientError;

/// Default backend base URL for local development.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
/// Public OpenStreetMap Nominatim instance.
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
/// Quiet period before a listing search fires.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// Client configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the backend serving `/api/profile` and `/api/upload`.
    pub api_base_url: String,
    /// Base URL of the Nominatim server.
    pub nominatim_url: String,
    /// `User-Agent` sent to Nominatim, which rejects anonymous clients.
    pub geocoder_user_agent: String,
    /// Debounce window for listing search input.
    pub search_debounce: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            nominatim_url: DEFAULT_NOMINATIM_URL.into(),
            geocoder_user_agent: default_user_agent(),
            search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default                               |
    /// |-----------------------|---------------------------------------|
    /// | `API_BASE_URL`        | `http://localhost:3000`               |
    /// | `NOMINATIM_URL`       | `https://nominatim.openstreetmap.org` |
    /// | `GEOCODER_USER_AGENT` | `pawlink/<crate version>`             |
    /// | `SEARCH_DEBOUNCE_MS`  | `300`                                 |
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let search_debounce = match get("SEARCH_DEBOUNCE_MS") {
            Some(raw) => Duration::from_millis(raw.parse().map_err(|_| {
                ClientError::Config(format!("SEARCH_DEBOUNCE_MS must be a valid u64, got '{raw}'"))
            })?),
            None => defaults.search_debounce,
        };

        Ok(Self {
            api_base_url: get("API_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            nominatim_url: get("NOMINATIM_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.nominatim_url),
            geocoder_user_agent: get("GEOCODER_USER_AGENT").unwrap_or(defaults.geocoder_user_agent),
            search_debounce,
        })
    }
}

fn default_user_agent() -> String {
    format!("pawlink/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.search_debounce, Duration::from_millis(300));
        assert!(config.geocoder_user_agent.starts_with("pawlink/"));
    }

    #[test]
    fn overrides_and_trailing_slash() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("API_BASE_URL", "https://pawlink.tn/"),
            ("SEARCH_DEBOUNCE_MS", "150"),
            ("GEOCODER_USER_AGENT", " "),
        ]))
        .unwrap();
        assert_eq!(config.api_base_url, "https://pawlink.tn");
        assert_eq!(config.search_debounce, Duration::from_millis(150));
        assert!(config.geocoder_user_agent.starts_with("pawlink/"));
    }

    #[test]
    fn bad_debounce_is_rejected() {
        let result = ClientConfig::from_lookup(lookup(&[("SEARCH_DEBOUNCE_MS", "soon")]));
        assert_matches!(result, Err(ClientError::Config(msg)) if msg.contains("SEARCH_DEBOUNCE_MS"));
    }
}
