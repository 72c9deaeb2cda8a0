//! Editors for the list-valued parts of a profile.
//!
//! Each editor owns its invariants (dedup keys, minimum sizes, cascades) so
//! callers cannot bypass them by poking at the underlying `Vec`.

pub mod breeds;
pub mod photos;
pub mod schedule;
pub mod service_areas;
pub mod services;
pub mod social_links;
