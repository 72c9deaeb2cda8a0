//! Reverse-geocoding heuristics.
//!
//! Maps a Nominatim `address` object onto the closed governorate/delegation
//! taxonomy. Place names coming back from OpenStreetMap are free text
//! (French, accented, sometimes misspelled), so matching works on normalized
//! keys and falls through a fixed chain of fallbacks. The result is always a
//! location drawn from the taxonomy; it is best-effort, not authoritative.
//!
//! Fallback order for the delegation, applied literally:
//! exact locality match, then cleaned `state_district`, then the first
//! delegation containing "ville", then the first delegation, then the raw
//! governorate name.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::taxonomy::{self, DEFAULT_GOVERNORATE, GOVERNORATES};
use crate::types::GeoPoint;

/// Prefix Nominatim puts in front of Tunisian governorate names.
const GOVERNORATE_PREFIX: &str = "Gouvernorat ";

static VILLE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bville\s*\d+").expect("valid regex"));
static HAMMEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bhammem\b").expect("valid regex"));
static CARDINAL_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+(nord|sud|est|ouest)$").expect("valid regex"));

// ---------------------------------------------------------------------------
// Nominatim response shape
// ---------------------------------------------------------------------------

/// The subset of a Nominatim `address` object the matcher reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NominatimAddress {
    pub state: Option<String>,
    pub state_district: Option<String>,
    pub county: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub suburb: Option<String>,
    pub municipality: Option<String>,
    pub neighbourhood: Option<String>,
}

impl NominatimAddress {
    /// Most specific locality name present, in matcher priority order.
    fn locality_name(&self) -> Option<&str> {
        [
            &self.town,
            &self.suburb,
            &self.county,
            &self.village,
            &self.city,
            &self.municipality,
            &self.neighbourhood,
        ]
        .into_iter()
        .filter_map(|v| v.as_deref())
        .find(|v| !v.trim().is_empty())
    }
}

/// Body of `GET /reverse?format=json&addressdetails=1`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReverseGeocodeResponse {
    pub display_name: Option<String>,
    pub address: Option<NominatimAddress>,
}

/// A coordinate and the taxonomy location it was matched to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedLocation {
    pub point: GeoPoint,
    pub governorate: String,
    pub delegation: String,
}

impl ResolvedLocation {
    /// Location used when geocoding fails: the default governorate and its
    /// first delegation.
    pub fn fallback(point: GeoPoint) -> Self {
        Self {
            point,
            governorate: DEFAULT_GOVERNORATE.to_string(),
            delegation: taxonomy::default_delegation().to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Lowercase, trim, and strip diacritics (NFD then drop combining marks).
pub fn normalize_name(s: &str) -> String {
    s.trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// [`normalize_name`] with spaces and hyphens removed, for delegation lookups.
fn delegation_key(s: &str) -> String {
    normalize_name(s)
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Clean a raw locality name before matching it against delegations.
pub fn clean_locality(raw: &str) -> String {
    let s = VILLE_NUMBER_RE.replace_all(raw, "");
    let s = HAMMEM_RE.replace_all(&s, "Hammam");
    let s = s.split_whitespace().collect::<Vec<_>>().join(" ");
    CARDINAL_SUFFIX_RE.replace(&s, "").trim().to_string()
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Match a Nominatim `state` value to a governorate. Equality is tried
/// first, then containment in either direction; unmatched names map to the
/// default governorate.
pub fn match_governorate(state: &str) -> &'static str {
    let stripped = state.trim().strip_prefix(GOVERNORATE_PREFIX).unwrap_or(state.trim());
    let candidate = normalize_name(stripped);
    if candidate.is_empty() {
        return DEFAULT_GOVERNORATE;
    }

    let normalized: Vec<(&'static str, String)> = GOVERNORATES
        .iter()
        .map(|g| (*g, normalize_name(g)))
        .collect();

    normalized
        .iter()
        .find(|(_, n)| *n == candidate)
        .or_else(|| {
            normalized
                .iter()
                .find(|(_, n)| candidate.contains(n.as_str()) || n.contains(candidate.as_str()))
        })
        .map(|(g, _)| *g)
        .unwrap_or(DEFAULT_GOVERNORATE)
}

/// Pick a delegation of `governorate` for the given locality and optional
/// `state_district`, following the fallback chain described at module level.
pub fn match_delegation(governorate: &str, locality: &str, state_district: Option<&str>) -> String {
    let delegations = taxonomy::delegations(governorate).unwrap_or(&[]);

    let exact = |name: &str| -> Option<&'static str> {
        let key = delegation_key(&clean_locality(name));
        if key.is_empty() {
            return None;
        }
        delegations.iter().copied().find(|d| delegation_key(d) == key)
    };

    exact(locality)
        .or_else(|| state_district.and_then(exact))
        .or_else(|| {
            delegations
                .iter()
                .copied()
                .find(|d| normalize_name(d).contains("ville"))
        })
        .or_else(|| delegations.first().copied())
        .map(str::to_string)
        .unwrap_or_else(|| governorate.to_string())
}

/// Resolve a reverse-geocoded address to a taxonomy location. A missing
/// address yields [`ResolvedLocation::fallback`].
pub fn resolve_address(point: GeoPoint, address: Option<&NominatimAddress>) -> ResolvedLocation {
    let Some(address) = address else {
        return ResolvedLocation::fallback(point);
    };

    let governorate = match_governorate(address.state.as_deref().unwrap_or_default());
    let locality = address.locality_name().unwrap_or(governorate);
    let delegation = match_delegation(governorate, locality, address.state_district.as_deref());

    ResolvedLocation {
        point,
        governorate: governorate.to_string(),
        delegation,
    }
}
