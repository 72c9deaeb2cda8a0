use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Marketplace roles that go through the profile wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    PetOwner,
    Veterinarian,
    Trainer,
}

impl Role {
    /// Parse a role string as sent by the backend.
    pub fn from_str_api(s: &str) -> Result<Self, CoreError> {
        match s {
            "petOwner" => Ok(Self::PetOwner),
            "veterinarian" => Ok(Self::Veterinarian),
            "trainer" => Ok(Self::Trainer),
            _ => Err(CoreError::Validation(format!(
                "Invalid role '{s}'. Must be one of: petOwner, veterinarian, trainer"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PetOwner => "petOwner",
            Self::Veterinarian => "veterinarian",
            Self::Trainer => "trainer",
        }
    }

    /// Number of wizard steps for this role.
    pub fn total_steps(self) -> u8 {
        match self {
            Self::PetOwner => 2,
            Self::Veterinarian | Self::Trainer => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// A WGS84 coordinate picked on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}
