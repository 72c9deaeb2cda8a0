//! Client-side filtering and pagination for the public profile listings
//! (veterinarian and trainer directories, admin tables).

use serde::{Deserialize, Serialize};

use crate::address::normalize_name;
use crate::types::Role;

/// Default number of cards per listing page.
pub const DEFAULT_PER_PAGE: usize = 9;

/// A profile as returned by the listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub id: String,
    pub role: Role,
    pub full_name: String,
    #[serde(default)]
    pub governorate: String,
    #[serde(default)]
    pub delegation: String,
    #[serde(default)]
    pub specializations: Vec<String>,
    #[serde(default)]
    pub services: Vec<String>,
}

impl ProfileSummary {
    fn matches_search(&self, needle: &str) -> bool {
        std::iter::once(&self.full_name)
            .chain([&self.governorate, &self.delegation])
            .chain(self.specializations.iter())
            .chain(self.services.iter())
            .any(|field| normalize_name(field).contains(needle))
    }
}

/// Filters applied to a listing. Empty/`None` fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListingFilter {
    #[serde(default)]
    pub search: String,
    pub role: Option<Role>,
    pub governorate: Option<String>,
}

impl ListingFilter {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.role.is_none() && self.governorate.is_none()
    }
}

/// Profiles matching `filter`, in input order. Search is case- and
/// accent-insensitive.
pub fn filter_profiles<'a>(
    profiles: &'a [ProfileSummary],
    filter: &ListingFilter,
) -> Vec<&'a ProfileSummary> {
    let needle = normalize_name(&filter.search);
    let governorate = filter.governorate.as_deref().map(normalize_name);
    profiles
        .iter()
        .filter(|p| filter.role.map_or(true, |r| r == p.role))
        .filter(|p| {
            governorate
                .as_deref()
                .map_or(true, |g| normalize_name(&p.governorate) == g)
        })
        .filter(|p| needle.is_empty() || p.matches_search(&needle))
        .collect()
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based, clamped to `1..=total_pages`.
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    /// At least 1, even for an empty listing.
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// Slice `items` into the requested 1-based page. Out-of-range pages are
/// clamped; a `per_page` of zero falls back to [`DEFAULT_PER_PAGE`].
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = if per_page == 0 { DEFAULT_PER_PAGE } else { per_page };
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total_items);
    Page {
        items: items[start..end].to_vec(),
        page,
        per_page,
        total_items,
        total_pages,
    }
}
