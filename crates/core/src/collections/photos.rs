//! Clinic and training gallery URLs.

use serde::Serialize;

/// Gallery photo URLs in upload-completion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhotoList {
    urls: Vec<String>,
}

impl PhotoList {
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Append uploaded URLs, skipping blanks.
    pub fn extend<I: IntoIterator<Item = String>>(&mut self, urls: I) {
        self.urls
            .extend(urls.into_iter().filter(|u| !u.trim().is_empty()));
    }

    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.urls.len() {
            return false;
        }
        self.urls.remove(index);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_appends_and_skips_blanks() {
        let mut photos = PhotoList::default();
        photos.extend(vec!["/u/a.jpg".to_string(), "".to_string()]);
        photos.extend(vec!["/u/b.jpg".to_string()]);
        assert_eq!(photos.urls(), ["/u/a.jpg", "/u/b.jpg"]);
    }

    #[test]
    fn remove_by_index() {
        let mut photos = PhotoList::default();
        photos.extend(vec!["/u/a.jpg".to_string()]);
        assert!(!photos.remove(1));
        assert!(photos.remove(0));
        assert!(photos.is_empty());
    }
}
