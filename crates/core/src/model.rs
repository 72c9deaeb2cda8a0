//! Wizard form state.
//!
//! [`WizardState`] carries the fields shared by every role plus a
//! [`RoleDetails`] variant chosen once when the wizard is created. Mutations
//! that carry invariants (about truncation, governorate/delegation coupling,
//! upload targets) go through methods here instead of raw field writes.

use serde::{Deserialize, Serialize};

use crate::collections::breeds::BreedList;
use crate::collections::photos::PhotoList;
use crate::collections::schedule::OpeningHours;
use crate::collections::service_areas::ServiceAreaList;
use crate::collections::services::ServiceList;
use crate::collections::social_links::SocialLinks;
use crate::error::CoreError;
use crate::types::{Gender, GeoPoint, Role};

/// Maximum length of the `about` text, in characters.
pub const ABOUT_MAX_CHARS: usize = 500;

/// Minimum length of the `about` text, in characters.
pub const ABOUT_MIN_CHARS: usize = 10;

// ---------------------------------------------------------------------------
// Locality
// ---------------------------------------------------------------------------

/// A governorate and one of its delegations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locality {
    governorate: String,
    delegation: String,
}

impl Locality {
    pub fn new(governorate: impl Into<String>, delegation: impl Into<String>) -> Self {
        Self {
            governorate: governorate.into(),
            delegation: delegation.into(),
        }
    }

    pub fn governorate(&self) -> &str {
        &self.governorate
    }

    pub fn delegation(&self) -> &str {
        &self.delegation
    }

    /// Select a governorate. Picking a different governorate clears the
    /// delegation since delegations only make sense within their governorate.
    pub fn set_governorate(&mut self, governorate: impl Into<String>) {
        let governorate = governorate.into();
        if governorate != self.governorate {
            self.delegation.clear();
        }
        self.governorate = governorate;
    }

    pub fn set_delegation(&mut self, delegation: impl Into<String>) {
        self.delegation = delegation.into();
    }

    pub fn is_empty(&self) -> bool {
        self.governorate.is_empty() && self.delegation.is_empty()
    }

    /// `"Governorate, Delegation"`, skipping empty parts.
    pub fn joined(&self) -> String {
        [self.governorate.as_str(), self.delegation.as_str()]
            .into_iter()
            .filter(|p| !p.trim().is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// ---------------------------------------------------------------------------
// Role details
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PetOwnerAddress {
    pub locality: Locality,
    pub street: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PetOwnerDetails {
    pub address: PetOwnerAddress,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VeterinarianDetails {
    pub title: String,
    pub specializations: Vec<String>,
    pub diplomas_and_training: String,
    pub business_card_image: String,
    pub locality: Locality,
    pub geolocation: Option<GeoPoint>,
    pub phone: String,
    pub secondary_phone: String,
    pub languages_spoken: Vec<String>,
    pub services: ServiceList,
    pub opening_hours: OpeningHours,
    /// Minutes.
    pub average_consultation_duration: Option<u32>,
    pub clinic_photos: PhotoList,
}

impl VeterinarianDetails {
    pub fn remove_service(&mut self, index: usize) -> bool {
        self.services.remove(index, 0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacilityType {
    #[default]
    Fixed,
    Mobile,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainerDetails {
    pub certification_image: String,
    pub business_card_image: String,
    pub training_facility_type: FacilityType,
    pub locality: Locality,
    pub geolocation: Option<GeoPoint>,
    pub service_areas: ServiceAreaList,
    pub phone: String,
    pub secondary_phone: String,
    pub languages_spoken: Vec<String>,
    pub services: ServiceList,
    pub opening_hours: OpeningHours,
    pub breeds_trained: BreedList,
    /// Minutes.
    pub average_session_duration: Option<u32>,
    pub social_links: SocialLinks,
    pub training_photos: PhotoList,
}

impl TrainerDetails {
    /// Trainers always keep at least one service row.
    pub fn remove_service(&mut self, index: usize) -> bool {
        self.services.remove(index, 1)
    }
}

/// Role-specific part of the wizard state.
#[derive(Debug, Clone, PartialEq)]
pub enum RoleDetails {
    PetOwner(PetOwnerDetails),
    Veterinarian(VeterinarianDetails),
    Trainer(TrainerDetails),
}

impl RoleDetails {
    /// Initial details for `role`.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::PetOwner => Self::PetOwner(PetOwnerDetails::default()),
            Role::Veterinarian => Self::Veterinarian(VeterinarianDetails {
                services: ServiceList::with_blank_row(),
                ..Default::default()
            }),
            Role::Trainer => Self::Trainer(TrainerDetails {
                services: ServiceList::with_blank_row(),
                ..Default::default()
            }),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Self::PetOwner(_) => Role::PetOwner,
            Self::Veterinarian(_) => Role::Veterinarian,
            Self::Trainer(_) => Role::Trainer,
        }
    }
}

// ---------------------------------------------------------------------------
// Upload targets
// ---------------------------------------------------------------------------

/// Form fields populated by uploading a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadTarget {
    Image,
    BusinessCardImage,
    CertificationImage,
    ClinicPhotos,
    TrainingPhotos,
}

impl UploadTarget {
    /// Field key used for errors and upload flags.
    pub fn key(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::BusinessCardImage => "businessCardImage",
            Self::CertificationImage => "certificationImage",
            Self::ClinicPhotos => "clinicPhotos",
            Self::TrainingPhotos => "trainingPhotos",
        }
    }

    /// Gallery targets accept several files per selection.
    pub fn is_gallery(self) -> bool {
        matches!(self, Self::ClinicPhotos | Self::TrainingPhotos)
    }
}

// ---------------------------------------------------------------------------
// Wizard state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    pub image: String,
    pub gender: Option<Gender>,
    about: String,
    pub accepted_terms: bool,
    pub details: RoleDetails,
}

impl WizardState {
    /// Fresh state with the defaults for `role`.
    pub fn new(role: Role) -> Self {
        Self {
            image: String::new(),
            gender: None,
            about: String::new(),
            accepted_terms: false,
            details: RoleDetails::for_role(role),
        }
    }

    pub fn role(&self) -> Role {
        self.details.role()
    }

    pub fn about(&self) -> &str {
        &self.about
    }

    /// Set the about text, truncated to [`ABOUT_MAX_CHARS`] characters.
    pub fn set_about(&mut self, text: &str) {
        self.about = text.chars().take(ABOUT_MAX_CHARS).collect();
    }

    /// Mutable access to the role's governorate/delegation pair.
    pub fn locality_mut(&mut self) -> &mut Locality {
        match &mut self.details {
            RoleDetails::PetOwner(d) => &mut d.address.locality,
            RoleDetails::Veterinarian(d) => &mut d.locality,
            RoleDetails::Trainer(d) => &mut d.locality,
        }
    }

    pub fn locality(&self) -> &Locality {
        match &self.details {
            RoleDetails::PetOwner(d) => &d.address.locality,
            RoleDetails::Veterinarian(d) => &d.locality,
            RoleDetails::Trainer(d) => &d.locality,
        }
    }

    /// Record the map-picked coordinate. Pet owners have no map location, so
    /// this is a no-op for them.
    pub fn set_geolocation(&mut self, point: GeoPoint) {
        match &mut self.details {
            RoleDetails::PetOwner(_) => {}
            RoleDetails::Veterinarian(d) => d.geolocation = Some(point),
            RoleDetails::Trainer(d) => d.geolocation = Some(point),
        }
    }

    /// Write an uploaded single-image URL into `target`.
    pub fn set_uploaded_image(&mut self, target: UploadTarget, url: String) -> Result<(), CoreError> {
        let role = self.role();
        let slot = match (target, &mut self.details) {
            (UploadTarget::Image, _) => &mut self.image,
            (UploadTarget::BusinessCardImage, RoleDetails::Veterinarian(d)) => {
                &mut d.business_card_image
            }
            (UploadTarget::BusinessCardImage, RoleDetails::Trainer(d)) => &mut d.business_card_image,
            (UploadTarget::CertificationImage, RoleDetails::Trainer(d)) => {
                &mut d.certification_image
            }
            _ => return Err(target_mismatch(target, role)),
        };
        *slot = url;
        Ok(())
    }

    /// Append uploaded gallery URLs to `target`.
    pub fn append_uploaded_photos(
        &mut self,
        target: UploadTarget,
        urls: Vec<String>,
    ) -> Result<(), CoreError> {
        let role = self.role();
        match (target, &mut self.details) {
            (UploadTarget::ClinicPhotos, RoleDetails::Veterinarian(d)) => {
                d.clinic_photos.extend(urls)
            }
            (UploadTarget::TrainingPhotos, RoleDetails::Trainer(d)) => {
                d.training_photos.extend(urls)
            }
            _ => return Err(target_mismatch(target, role)),
        }
        Ok(())
    }

    /// Check that `target` exists on this role's form.
    pub fn supports_upload(&self, target: UploadTarget) -> bool {
        matches!(
            (target, &self.details),
            (UploadTarget::Image, _)
                | (UploadTarget::BusinessCardImage, RoleDetails::Veterinarian(_))
                | (UploadTarget::BusinessCardImage, RoleDetails::Trainer(_))
                | (UploadTarget::CertificationImage, RoleDetails::Trainer(_))
                | (UploadTarget::ClinicPhotos, RoleDetails::Veterinarian(_))
                | (UploadTarget::TrainingPhotos, RoleDetails::Trainer(_))
        )
    }
}

fn target_mismatch(target: UploadTarget, role: Role) -> CoreError {
    CoreError::Validation(format!(
        "Field '{}' does not exist on the {} profile",
        target.key(),
        role.as_str()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Locality
    // -----------------------------------------------------------------------

    #[test]
    fn changing_governorate_resets_delegation() {
        let mut loc = Locality::new("Tunis", "La Marsa");
        loc.set_governorate("Sfax");
        assert_eq!(loc.governorate(), "Sfax");
        assert_eq!(loc.delegation(), "");
    }

    #[test]
    fn reselecting_same_governorate_keeps_delegation() {
        let mut loc = Locality::new("Tunis", "La Marsa");
        loc.set_governorate("Tunis");
        assert_eq!(loc.delegation(), "La Marsa");
    }

    #[test]
    fn joined_skips_empty_parts() {
        assert_eq!(Locality::new("Tunis", "Carthage").joined(), "Tunis, Carthage");
        assert_eq!(Locality::new("Tunis", "").joined(), "Tunis");
        assert_eq!(Locality::default().joined(), "");
    }

    // -----------------------------------------------------------------------
    // Defaults
    // -----------------------------------------------------------------------

    #[test]
    fn defaults_per_role() {
        let owner = WizardState::new(Role::PetOwner);
        assert_eq!(owner.role(), Role::PetOwner);
        assert!(!owner.accepted_terms);

        let RoleDetails::Trainer(trainer) = WizardState::new(Role::Trainer).details else {
            panic!("expected trainer details");
        };
        assert_eq!(trainer.services.len(), 1);
        assert_eq!(trainer.training_facility_type, FacilityType::Fixed);
        assert!(!trainer.opening_hours.has_open_day());
    }

    #[test]
    fn trainer_keeps_one_service_row() {
        let RoleDetails::Trainer(mut trainer) = RoleDetails::for_role(Role::Trainer) else {
            panic!("expected trainer details");
        };
        assert!(!trainer.remove_service(0));

        let RoleDetails::Veterinarian(mut vet) = RoleDetails::for_role(Role::Veterinarian) else {
            panic!("expected veterinarian details");
        };
        assert!(vet.remove_service(0));
        assert!(vet.services.is_empty());
    }

    // -----------------------------------------------------------------------
    // About / uploads
    // -----------------------------------------------------------------------

    #[test]
    fn about_is_truncated_by_chars() {
        let mut state = WizardState::new(Role::PetOwner);
        state.set_about(&"é".repeat(600));
        assert_eq!(state.about().chars().count(), ABOUT_MAX_CHARS);
    }

    #[test]
    fn upload_targets_follow_role() {
        let mut owner = WizardState::new(Role::PetOwner);
        assert!(owner
            .set_uploaded_image(UploadTarget::Image, "/u/me.png".into())
            .is_ok());
        assert_eq!(owner.image, "/u/me.png");
        assert!(owner
            .set_uploaded_image(UploadTarget::BusinessCardImage, "/u/card.png".into())
            .is_err());
        assert!(!owner.supports_upload(UploadTarget::ClinicPhotos));

        let mut vet = WizardState::new(Role::Veterinarian);
        vet.append_uploaded_photos(UploadTarget::ClinicPhotos, vec!["/u/1.jpg".into()])
            .unwrap();
        assert!(vet
            .append_uploaded_photos(UploadTarget::TrainingPhotos, vec![])
            .is_err());
    }

    #[test]
    fn pet_owner_ignores_geolocation() {
        let mut owner = WizardState::new(Role::PetOwner);
        owner.set_geolocation(GeoPoint::new(36.8, 10.18));
        assert_eq!(owner, WizardState::new(Role::PetOwner));
    }
}
