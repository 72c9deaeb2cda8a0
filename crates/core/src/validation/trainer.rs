//! Trainer wizard: five steps ending in a review. Step 3 depends on whether
//! the trainer works from a fixed facility or travels to clients.

use super::{
    check_basics, check_duration, check_locality, check_opening_hours, check_optional_url,
    check_phones, check_services, check_terms, require, require_any, FormErrors,
};
use crate::collections::social_links::SocialPlatform;
use crate::model::{FacilityType, TrainerDetails, WizardState};

pub const STEP_PROFILE: u8 = 1;
pub const STEP_CREDENTIALS: u8 = 2;
pub const STEP_FACILITY: u8 = 3;
pub const STEP_SERVICES: u8 = 4;
pub const STEP_REVIEW: u8 = 5;

pub fn step_label(step: u8) -> Option<&'static str> {
    match step {
        STEP_PROFILE => Some("Your Profile"),
        STEP_CREDENTIALS => Some("Credentials & Breeds"),
        STEP_FACILITY => Some("Facility & Availability"),
        STEP_SERVICES => Some("Services & Links"),
        STEP_REVIEW => Some("Review"),
        _ => None,
    }
}

pub(crate) fn validate_step(
    step: u8,
    state: &WizardState,
    details: &TrainerDetails,
    errors: &mut FormErrors,
) {
    match step {
        STEP_PROFILE => check_basics(state, errors),
        STEP_CREDENTIALS => {
            require(
                errors,
                "certificationImage",
                &details.certification_image,
                "Certification image is required",
            );
            require(
                errors,
                "businessCardImage",
                &details.business_card_image,
                "Business card image is required",
            );
            require_any(
                errors,
                "breedsTrained",
                details.breeds_trained.items(),
                "Please add at least one breed you train",
            );
            require_any(
                errors,
                "languagesSpoken",
                &details.languages_spoken,
                "Please select at least one language",
            );
        }
        STEP_FACILITY => {
            match details.training_facility_type {
                FacilityType::Fixed => {
                    check_locality(&details.locality, errors);
                    if details.geolocation.is_none() {
                        errors.insert(
                            "geolocation",
                            "Please pick your training facility on the map",
                        );
                    }
                }
                FacilityType::Mobile => require_any(
                    errors,
                    "serviceAreas",
                    details.service_areas.items(),
                    "Please add at least one service area",
                ),
            }
            check_phones(&details.phone, &details.secondary_phone, errors);
            check_opening_hours(&details.opening_hours, errors);
            check_duration(
                details.average_session_duration,
                "averageSessionDuration",
                errors,
            );
        }
        STEP_SERVICES => {
            check_services(&details.services, errors);
            for platform in SocialPlatform::ALL {
                check_optional_url(
                    &format!("socialLinks.{}", platform.key()),
                    details.social_links.get(platform),
                    errors,
                );
            }
        }
        STEP_REVIEW => check_terms(state, errors),
        _ => {}
    }
}
