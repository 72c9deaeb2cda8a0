//! Pawlink core domain logic.
//!
//! Everything in this crate is pure: no network, no clock, no filesystem.
//! The profile wizard, its validators and collection editors, the payload
//! assembler, the address-matching heuristics and the listing helpers all
//! operate on in-memory values so they can be driven from any front end
//! and exercised directly in tests.

pub mod address;
pub mod collections;
pub mod error;
pub mod listing;
pub mod model;
pub mod submission;
pub mod taxonomy;
pub mod types;
pub mod validation;
pub mod wizard;
