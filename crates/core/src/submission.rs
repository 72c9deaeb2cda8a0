//! Profile-creation payload.
//!
//! Turns a validated [`WizardState`] into the body the backend's
//! create-profile endpoint expects. Location pairs are flattened into a
//! single `address` string; everything else is forwarded as-is in camelCase.

use serde::{Deserialize, Serialize};

use crate::collections::breeds::BreedList;
use crate::collections::photos::PhotoList;
use crate::collections::schedule::OpeningHours;
use crate::collections::service_areas::ServiceAreaList;
use crate::collections::services::{Service, ServiceList};
use crate::collections::social_links::SocialLinks;
use crate::model::{
    FacilityType, PetOwnerDetails, RoleDetails, TrainerDetails, VeterinarianDetails, WizardState,
};
use crate::types::{Gender, GeoPoint, Role};

/// Body of the create-profile request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    pub role: Role,
    pub image: String,
    pub gender: Option<Gender>,
    pub about: String,
    #[serde(flatten)]
    pub details: DetailsPayload,
}

/// Role details, serialized under `petOwnerDetails`, `veterinarianDetails`
/// or `trainerDetails`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DetailsPayload {
    #[serde(rename = "petOwnerDetails")]
    PetOwner(PetOwnerPayload),
    #[serde(rename = "veterinarianDetails")]
    Veterinarian(VeterinarianPayload),
    #[serde(rename = "trainerDetails")]
    Trainer(TrainerPayload),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetOwnerPayload {
    pub address: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VeterinarianPayload {
    pub title: String,
    pub specializations: Vec<String>,
    pub diplomas_and_training: String,
    pub business_card_image: String,
    pub address: String,
    pub geolocation: Option<GeoPoint>,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_phone: Option<String>,
    pub languages_spoken: Vec<String>,
    pub services: Vec<Service>,
    pub opening_hours: OpeningHours,
    pub average_consultation_duration: Option<u32>,
    pub clinic_photos: PhotoList,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerPayload {
    pub certification_image: String,
    pub business_card_image: String,
    pub training_facility_type: FacilityType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geolocation: Option<GeoPoint>,
    pub service_areas: ServiceAreaList,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_phone: Option<String>,
    pub languages_spoken: Vec<String>,
    pub services: Vec<Service>,
    pub opening_hours: OpeningHours,
    pub breeds_trained: BreedList,
    pub average_session_duration: Option<u32>,
    pub social_links: SocialLinks,
    pub training_photos: PhotoList,
}

/// What the create-profile collaborator resolves to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateProfileResponse {
    pub success: bool,
    pub redirect_to: Option<String>,
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Build the create-profile payload from the wizard state.
pub fn assemble(state: &WizardState) -> ProfilePayload {
    let details = match &state.details {
        RoleDetails::PetOwner(d) => DetailsPayload::PetOwner(pet_owner(d)),
        RoleDetails::Veterinarian(d) => DetailsPayload::Veterinarian(veterinarian(d)),
        RoleDetails::Trainer(d) => DetailsPayload::Trainer(trainer(d)),
    };
    ProfilePayload {
        role: state.role(),
        image: state.image.clone(),
        gender: state.gender,
        about: state.about().trim().to_string(),
        details,
    }
}

fn pet_owner(d: &PetOwnerDetails) -> PetOwnerPayload {
    let mut address = d.address.locality.joined();
    let street = d.address.street.trim();
    if !street.is_empty() {
        if !address.is_empty() {
            address.push_str(", ");
        }
        address.push_str(street);
    }
    PetOwnerPayload {
        address,
        phone: d.phone.trim().to_string(),
    }
}

fn veterinarian(d: &VeterinarianDetails) -> VeterinarianPayload {
    VeterinarianPayload {
        title: d.title.trim().to_string(),
        specializations: d.specializations.clone(),
        diplomas_and_training: d.diplomas_and_training.trim().to_string(),
        business_card_image: d.business_card_image.clone(),
        address: d.locality.joined(),
        geolocation: d.geolocation,
        phone: d.phone.trim().to_string(),
        secondary_phone: optional(&d.secondary_phone),
        languages_spoken: d.languages_spoken.clone(),
        services: populated_services(&d.services),
        opening_hours: d.opening_hours.clone(),
        average_consultation_duration: d.average_consultation_duration,
        clinic_photos: d.clinic_photos.clone(),
    }
}

fn trainer(d: &TrainerDetails) -> TrainerPayload {
    let mobile = d.training_facility_type == FacilityType::Mobile;
    TrainerPayload {
        certification_image: d.certification_image.clone(),
        business_card_image: d.business_card_image.clone(),
        training_facility_type: d.training_facility_type,
        address: (!d.locality.is_empty()).then(|| d.locality.joined()),
        geolocation: d.geolocation,
        service_areas: if mobile {
            d.service_areas.clone()
        } else {
            ServiceAreaList::default()
        },
        phone: d.phone.trim().to_string(),
        secondary_phone: optional(&d.secondary_phone),
        languages_spoken: d.languages_spoken.clone(),
        services: populated_services(&d.services),
        opening_hours: d.opening_hours.clone(),
        breeds_trained: d.breeds_trained.clone(),
        average_session_duration: d.average_session_duration,
        social_links: d.social_links.clone(),
        training_photos: d.training_photos.clone(),
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Blank editor rows are not sent.
fn populated_services(services: &ServiceList) -> Vec<Service> {
    services
        .populated()
        .map(|s| Service {
            service_name: s.service_name.trim().to_string(),
            fee: s.fee,
        })
        .collect()
}
