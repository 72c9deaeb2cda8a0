//! Optional social profile links shown on a trainer's page.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    Facebook,
    Instagram,
    Website,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 3] = [Self::Facebook, Self::Instagram, Self::Website];

    pub fn key(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Website => "website",
        }
    }
}

/// Optional public links shown on a trainer's profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl SocialLinks {
    pub fn get(&self, platform: SocialPlatform) -> Option<&str> {
        match platform {
            SocialPlatform::Facebook => self.facebook.as_deref(),
            SocialPlatform::Instagram => self.instagram.as_deref(),
            SocialPlatform::Website => self.website.as_deref(),
        }
    }

    /// Set a link; a blank value clears it.
    pub fn set(&mut self, platform: SocialPlatform, value: &str) {
        let value = value.trim();
        let slot = match platform {
            SocialPlatform::Facebook => &mut self.facebook,
            SocialPlatform::Instagram => &mut self.instagram,
            SocialPlatform::Website => &mut self.website,
        };
        *slot = (!value.is_empty()).then(|| value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_value_clears_link() {
        let mut links = SocialLinks::default();
        links.set(SocialPlatform::Website, " https://dogs.tn ");
        assert_eq!(links.get(SocialPlatform::Website), Some("https://dogs.tn"));
        links.set(SocialPlatform::Website, "   ");
        assert_eq!(links.get(SocialPlatform::Website), None);
    }

    #[test]
    fn unset_links_are_omitted_from_json() {
        let mut links = SocialLinks::default();
        links.set(SocialPlatform::Instagram, "https://instagram.com/k9");
        let json = serde_json::to_value(&links).unwrap();
        assert_eq!(json, serde_json::json!({ "instagram": "https://instagram.com/k9" }));
    }
}
