//! Priced services offered by veterinarians and trainers.

use serde::Serialize;

/// One offered service and its fee in TND.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub service_name: String,
    pub fee: Option<f64>,
}

impl Service {
    pub fn new(service_name: impl Into<String>, fee: f64) -> Self {
        Self {
            service_name: service_name.into(),
            fee: Some(fee),
        }
    }

    /// A row the user has started filling in.
    pub fn is_populated(&self) -> bool {
        !self.service_name.trim().is_empty()
    }
}

/// A single-field edit applied through [`ServiceList::update`].
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceEdit {
    Name(String),
    Fee(Option<f64>),
}

/// Services keyed by name. Blank rows are allowed while editing; named rows
/// are unique (case-insensitive, surrounding whitespace ignored).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ServiceList {
    items: Vec<Service>,
}

impl ServiceList {
    pub fn new() -> Self {
        Self::default()
    }

    /// A list holding one blank row, the initial state of the services step.
    pub fn with_blank_row() -> Self {
        Self {
            items: vec![Service::default()],
        }
    }

    pub fn items(&self) -> &[Service] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entries that have a name.
    pub fn populated(&self) -> impl Iterator<Item = &Service> {
        self.items.iter().filter(|s| s.is_populated())
    }

    /// Append a service. Returns `false` (and leaves the list untouched) when
    /// a named entry with the same name already exists or the fee is negative
    /// or not finite.
    pub fn add(&mut self, service: Service) -> bool {
        if service.fee.is_some_and(|fee| fee < 0.0 || !fee.is_finite()) {
            return false;
        }
        if service.is_populated() && self.position_of(&service.service_name, None).is_some() {
            return false;
        }
        self.items.push(service);
        true
    }

    /// Edit one field of the entry at `index`.
    ///
    /// Renaming onto another entry's name and negative fees are refused.
    pub fn update(&mut self, index: usize, edit: ServiceEdit) -> bool {
        if index >= self.items.len() {
            return false;
        }
        match edit {
            ServiceEdit::Name(name) => {
                if !name.trim().is_empty() && self.position_of(&name, Some(index)).is_some() {
                    return false;
                }
                self.items[index].service_name = name;
            }
            ServiceEdit::Fee(fee) => {
                if fee.is_some_and(|f| f < 0.0 || !f.is_finite()) {
                    return false;
                }
                self.items[index].fee = fee;
            }
        }
        true
    }

    /// Remove the entry at `index` unless that would leave fewer than
    /// `floor` entries.
    pub fn remove(&mut self, index: usize, floor: usize) -> bool {
        if index >= self.items.len() || self.items.len() <= floor {
            return false;
        }
        self.items.remove(index);
        true
    }

    fn position_of(&self, name: &str, skip: Option<usize>) -> Option<usize> {
        let key = name.trim().to_lowercase();
        self.items
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != skip)
            .find(|(_, s)| s.service_name.trim().to_lowercase() == key)
            .map(|(i, _)| i)
    }
}

impl FromIterator<Service> for ServiceList {
    fn from_iter<I: IntoIterator<Item = Service>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rejects_duplicate_names() {
        let mut list = ServiceList::new();
        assert!(list.add(Service::new("Vaccination", 40.0)));
        assert!(!list.add(Service::new(" vaccination ", 50.0)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn blank_rows_are_not_deduplicated() {
        let mut list = ServiceList::with_blank_row();
        assert!(list.add(Service::default()));
        assert_eq!(list.len(), 2);
        assert_eq!(list.populated().count(), 0);
    }

    #[test]
    fn add_rejects_negative_fee() {
        let mut list = ServiceList::new();
        assert!(!list.add(Service::new("Grooming", -1.0)));
        assert!(!list.add(Service::new("Boarding", f64::NAN)));
        assert!(!list.add(Service::new("Walking", f64::INFINITY)));
        assert!(list.is_empty());
    }

    #[test]
    fn update_refuses_rename_onto_existing_entry() {
        let mut list: ServiceList = [Service::new("Checkup", 30.0), Service::new("Surgery", 200.0)]
            .into_iter()
            .collect();
        assert!(!list.update(1, ServiceEdit::Name("checkup".into())));
        assert_eq!(list.items()[1].service_name, "Surgery");
        // Renaming an entry to its own name is fine.
        assert!(list.update(0, ServiceEdit::Name("Checkup".into())));
    }

    #[test]
    fn update_fee() {
        let mut list = ServiceList::with_blank_row();
        assert!(list.update(0, ServiceEdit::Fee(Some(25.5))));
        assert_eq!(list.items()[0].fee, Some(25.5));
        assert!(!list.update(0, ServiceEdit::Fee(Some(-3.0))));
        assert!(!list.update(4, ServiceEdit::Fee(None)));
    }

    #[test]
    fn remove_honours_floor() {
        let mut list: ServiceList = [Service::new("A", 1.0), Service::new("B", 2.0)]
            .into_iter()
            .collect();
        assert!(list.remove(0, 1));
        assert!(!list.remove(0, 1));
        assert_eq!(list.len(), 1);
        assert!(list.remove(0, 0));
        assert!(list.is_empty());
    }
}
