//! Breeds a trainer works with.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainedBreed {
    pub species: String,
    pub breed_name: String,
}

impl TrainedBreed {
    pub fn new(species: impl Into<String>, breed_name: impl Into<String>) -> Self {
        Self {
            species: species.into(),
            breed_name: breed_name.into(),
        }
    }

    fn is_complete(&self) -> bool {
        !self.species.trim().is_empty() && !self.breed_name.trim().is_empty()
    }
}

/// Breeds unique by `(species, breed_name)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BreedList {
    items: Vec<TrainedBreed>,
}

impl BreedList {
    pub fn items(&self) -> &[TrainedBreed] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a breed. Names are trimmed; incomplete or already present
    /// candidates are ignored.
    pub fn add(&mut self, breed: TrainedBreed) -> bool {
        let breed = TrainedBreed::new(breed.species.trim(), breed.breed_name.trim());
        if !breed.is_complete() || self.items.contains(&breed) {
            return false;
        }
        self.items.push(breed);
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
