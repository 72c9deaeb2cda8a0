//! Veterinarian wizard: five steps ending in a review.

use super::{
    check_basics, check_duration, check_locality, check_opening_hours, check_phones,
    check_services, check_terms, require, require_any, FormErrors,
};
use crate::model::{VeterinarianDetails, WizardState};

pub const STEP_PROFILE: u8 = 1;
pub const STEP_PROFESSIONAL: u8 = 2;
pub const STEP_CLINIC: u8 = 3;
pub const STEP_SERVICES: u8 = 4;
pub const STEP_REVIEW: u8 = 5;

pub fn step_label(step: u8) -> Option<&'static str> {
    match step {
        STEP_PROFILE => Some("Your Profile"),
        STEP_PROFESSIONAL => Some("Professional Information"),
        STEP_CLINIC => Some("Clinic & Opening Hours"),
        STEP_SERVICES => Some("Services & Photos"),
        STEP_REVIEW => Some("Review"),
        _ => None,
    }
}

pub(crate) fn validate_step(
    step: u8,
    state: &WizardState,
    details: &VeterinarianDetails,
    errors: &mut FormErrors,
) {
    match step {
        STEP_PROFILE => check_basics(state, errors),
        STEP_PROFESSIONAL => {
            require(errors, "title", &details.title, "Title is required");
            require_any(
                errors,
                "specializations",
                &details.specializations,
                "Please select at least one specialization",
            );
            require(
                errors,
                "diplomasAndTraining",
                &details.diplomas_and_training,
                "Please describe your diplomas and training",
            );
            require(
                errors,
                "businessCardImage",
                &details.business_card_image,
                "Business card image is required",
            );
            require_any(
                errors,
                "languagesSpoken",
                &details.languages_spoken,
                "Please select at least one language",
            );
        }
        STEP_CLINIC => {
            check_locality(&details.locality, errors);
            if details.geolocation.is_none() {
                errors.insert("geolocation", "Please pick your clinic location on the map");
            }
            check_phones(&details.phone, &details.secondary_phone, errors);
            check_opening_hours(&details.opening_hours, errors);
            check_duration(
                details.average_consultation_duration,
                "averageConsultationDuration",
                errors,
            );
        }
        STEP_SERVICES => check_services(&details.services, errors),
        STEP_REVIEW => check_terms(state, errors),
        _ => {}
    }
}
