//! Governorates a mobile trainer travels to.

use serde::Serialize;

use crate::taxonomy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceArea {
    pub governorate: String,
}

/// Service areas unique by governorate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ServiceAreaList {
    items: Vec<ServiceArea>,
}

impl ServiceAreaList {
    pub fn items(&self) -> &[ServiceArea] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a governorate. Empty, unknown or already listed governorates are
    /// ignored.
    pub fn add(&mut self, governorate: &str) -> bool {
        if !taxonomy::is_governorate(governorate)
            || self.items.iter().any(|a| a.governorate == governorate)
        {
            return false;
        }
        self.items.push(ServiceArea {
            governorate: governorate.to_string(),
        });
        true
    }

    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        true
    }
}
