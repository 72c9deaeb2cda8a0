//! Pet owner wizard: two steps.

use super::{check_basics, check_locality, check_phones, check_terms, FormErrors};
use crate::model::{PetOwnerDetails, WizardState};

pub const STEP_PROFILE: u8 = 1;
pub const STEP_CONTACT: u8 = 2;

pub fn step_label(step: u8) -> Option<&'static str> {
    match step {
        STEP_PROFILE => Some("Your Profile"),
        STEP_CONTACT => Some("Address & Contact"),
        _ => None,
    }
}

pub(crate) fn validate_step(
    step: u8,
    state: &WizardState,
    details: &PetOwnerDetails,
    errors: &mut FormErrors,
) {
    match step {
        STEP_PROFILE => check_basics(state, errors),
        STEP_CONTACT => {
            check_locality(&details.address.locality, errors);
            check_phones(&details.phone, "", errors);
            check_terms(state, errors);
        }
        _ => {}
    }
}
