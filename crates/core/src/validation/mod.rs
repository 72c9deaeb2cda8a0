//! Per-step form validation.
//!
//! Validators are total: they take the wizard state and return a (possibly
//! empty) [`FormErrors`], never an error or a panic. The role-specific step
//! rules live in [`pet_owner`], [`veterinarian`] and [`trainer`]; the checks
//! they share (phones, about text, schedules, services) live here.

pub mod pet_owner;
pub mod trainer;
pub mod veterinarian;

use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::collections::schedule::{OpeningHours, SessionType, TimeSlot};
use crate::collections::services::ServiceList;
use crate::model::{Locality, RoleDetails, WizardState, ABOUT_MAX_CHARS, ABOUT_MIN_CHARS};
use crate::taxonomy;

/// Tunisian 8-digit phone numbers; the first digit is an operator prefix.
/// ASCII digits only.
pub const PHONE_PATTERN: &str = r"^[234579][0-9]{7}$";

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("valid regex"));
static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("valid regex"));

/// Error key under which a failed submission's message is stored.
pub const SUBMIT_ERROR_KEY: &str = "submit";

// ---------------------------------------------------------------------------
// FormErrors
// ---------------------------------------------------------------------------

/// Field key → message, in the order fields were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    entries: Vec<(String, String)>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error. A later message for the same key replaces the
    /// earlier one but keeps its position.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();
        match self.entries.iter_mut().find(|(k, _)| *k == field) {
            Some(entry) => entry.1 = message,
            None => self.entries.push((field, message)),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == field)?;
        Some(self.entries.remove(index).1)
    }

    pub fn contains_key(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The first invalid field, which the UI scrolls to and focuses.
    pub fn first_key(&self) -> Option<&str> {
        self.entries.first().map(|(k, _)| k.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, m)| (k.as_str(), m.as_str()))
    }

    /// Merge another pass's errors into this one (used when validating all
    /// steps at submit time).
    pub fn extend(&mut self, other: FormErrors) {
        for (k, m) in other.entries {
            self.insert(k, m);
        }
    }
}

impl Serialize for FormErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, m) in &self.entries {
            map.serialize_entry(k, m)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Validate one step of the wizard for the state's role. Step numbers outside
/// the role's range produce no errors.
pub fn validate_step(step: u8, state: &WizardState) -> FormErrors {
    let mut errors = FormErrors::new();
    match &state.details {
        RoleDetails::PetOwner(d) => pet_owner::validate_step(step, state, d, &mut errors),
        RoleDetails::Veterinarian(d) => veterinarian::validate_step(step, state, d, &mut errors),
        RoleDetails::Trainer(d) => trainer::validate_step(step, state, d, &mut errors),
    }
    errors
}

/// Validate every step in order and aggregate the errors.
pub fn validate_all(state: &WizardState) -> FormErrors {
    let mut errors = FormErrors::new();
    for step in 1..=state.role().total_steps() {
        errors.extend(validate_step(step, state));
    }
    errors
}

// ---------------------------------------------------------------------------
// Shared checks
// ---------------------------------------------------------------------------

/// `true` when `phone` is a valid Tunisian number.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Step 1 of every role: profile picture, gender and about text.
pub(crate) fn check_basics(state: &WizardState, errors: &mut FormErrors) {
    require(errors, "image", &state.image, "Profile image is required");
    if state.gender.is_none() {
        errors.insert("gender", "Please select your gender");
    }
    check_about(state.about(), errors);
}

pub(crate) fn check_about(about: &str, errors: &mut FormErrors) {
    let len = about.trim().chars().count();
    if len == 0 {
        errors.insert("about", "Please tell us about yourself");
    } else if len < ABOUT_MIN_CHARS {
        errors.insert(
            "about",
            format!("About must be at least {ABOUT_MIN_CHARS} characters"),
        );
    } else if about.chars().count() > ABOUT_MAX_CHARS {
        errors.insert(
            "about",
            format!("About must not exceed {ABOUT_MAX_CHARS} characters"),
        );
    }
}

pub(crate) fn check_terms(state: &WizardState, errors: &mut FormErrors) {
    if !state.accepted_terms {
        errors.insert("acceptedTerms", "You must accept the terms and conditions");
    }
}

pub(crate) fn require(errors: &mut FormErrors, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field, message);
    }
}

pub(crate) fn require_any<T>(errors: &mut FormErrors, field: &str, values: &[T], message: &str) {
    if values.is_empty() {
        errors.insert(field, message);
    }
}

pub(crate) fn check_phones(primary: &str, secondary: &str, errors: &mut FormErrors) {
    if primary.trim().is_empty() {
        errors.insert("phone", "Phone number is required");
    } else if !is_valid_phone(primary) {
        errors.insert("phone", "Please enter a valid 8-digit Tunisian phone number");
    }
    if !secondary.is_empty() && !is_valid_phone(secondary) {
        errors.insert(
            "secondaryPhone",
            "Please enter a valid 8-digit Tunisian phone number",
        );
    }
}

/// Governorate must be known and delegation must belong to it.
pub(crate) fn check_locality(locality: &Locality, errors: &mut FormErrors) {
    if locality.governorate().trim().is_empty() {
        errors.insert("governorate", "Governorate is required");
    } else if !taxonomy::is_governorate(locality.governorate()) {
        errors.insert("governorate", "Please select a valid governorate");
    }
    if locality.delegation().trim().is_empty() {
        errors.insert("delegation", "Delegation is required");
    } else if taxonomy::is_governorate(locality.governorate())
        && !taxonomy::is_delegation_of(locality.governorate(), locality.delegation())
    {
        errors.insert(
            "delegation",
            "Delegation does not belong to the selected governorate",
        );
    }
}

pub(crate) fn check_duration(value: Option<u32>, field: &str, errors: &mut FormErrors) {
    if !matches!(value, Some(minutes) if minutes > 0) {
        errors.insert(field, "Please select an average duration");
    }
}

/// At least one populated service; every populated row needs a unique name
/// and a non-negative fee.
pub(crate) fn check_services(services: &ServiceList, errors: &mut FormErrors) {
    if services.populated().next().is_none() {
        errors.insert("services", "Please add at least one service");
        return;
    }
    let mut seen: Vec<String> = Vec::new();
    for (i, service) in services.items().iter().enumerate() {
        let name = service.service_name.trim();
        if name.is_empty() {
            if service.fee.is_some() {
                errors.insert(format!("services[{i}].serviceName"), "Service name is required");
            }
            continue;
        }
        let key = name.to_lowercase();
        if seen.contains(&key) {
            errors.insert(
                format!("services[{i}].serviceName"),
                "This service has already been added",
            );
        }
        seen.push(key);
        match service.fee {
            None => errors.insert(format!("services[{i}].fee"), "Fee is required"),
            Some(fee) if fee < 0.0 || !fee.is_finite() => {
                errors.insert(format!("services[{i}].fee"), "Fee must be a positive number")
            }
            Some(_) => {}
        }
    }
}

/// Requires an open day, then checks each open day's intervals.
pub(crate) fn check_opening_hours(hours: &OpeningHours, errors: &mut FormErrors) {
    if !hours.has_open_day() {
        errors.insert("openingHours", "Please set at least one working day");
        return;
    }
    for (day, schedule) in hours.iter() {
        let slots: &[TimeSlot] = match schedule.session {
            SessionType::Closed => continue,
            SessionType::SingleSession => &[TimeSlot::Start, TimeSlot::End],
            SessionType::DoubleSession => &TimeSlot::ALL,
        };

        let mut parsed = [None; 4];
        for (n, slot) in slots.iter().enumerate() {
            let raw = schedule.time(*slot).trim();
            let key = slot.key(day);
            if raw.is_empty() {
                let label = if matches!(slot, TimeSlot::Start | TimeSlot::Start2) {
                    "Start time is required"
                } else {
                    "End time is required"
                };
                errors.insert(key, label);
            } else {
                match NaiveTime::parse_from_str(raw, "%H:%M") {
                    Ok(t) => parsed[n] = Some(t),
                    Err(_) => errors.insert(key, "Please enter a time as HH:MM"),
                }
            }
        }

        if let (Some(start), Some(end)) = (parsed[0], parsed[1]) {
            if end <= start {
                errors.insert(TimeSlot::End.key(day), "End time must be after start time");
            }
        }
        if let (Some(start2), Some(end2)) = (parsed[2], parsed[3]) {
            if end2 <= start2 {
                errors.insert(TimeSlot::End2.key(day), "End time must be after start time");
            }
        }
        if let (Some(end), Some(start2)) = (parsed[1], parsed[2]) {
            if start2 <= end {
                errors.insert(
                    TimeSlot::Start2.key(day),
                    "Second session must start after the first one ends",
                );
            }
        }
    }
}

/// Optional URLs must be absolute http(s) links.
pub(crate) fn check_optional_url(field: &str, value: Option<&str>, errors: &mut FormErrors) {
    if let Some(url) = value {
        if !URL_RE.is_match(url.trim()) {
            errors.insert(field, "Please enter a valid URL starting with http:// or https://");
        }
    }
}
