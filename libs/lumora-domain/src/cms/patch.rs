//! Partial updates for the site configuration
//!
//! A patch carries "field: optional new value" for every updatable
//! [`SiteConfig`] field and is applied with field-by-field presence checks.
//! Unset fields keep their prior value.

use serde::{Deserialize, Serialize};

use crate::cms::entity::{Font, SiteConfig, SocialLinks};

/// A partial [`SiteConfig`] update.
///
/// Built by a settings surface and carried inside
/// [`Action::UpdateConfig`](crate::cms::Action::UpdateConfig).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socials: Option<SocialLinks>,
}

impl SiteConfigPatch {
    /// Create an empty patch (applies as a no-op).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn phone(mut self, value: impl Into<String>) -> Self {
        self.phone = Some(value.into());
        self
    }

    pub fn address(mut self, value: impl Into<String>) -> Self {
        self.address = Some(value.into());
        self
    }

    pub fn primary_color(mut self, value: impl Into<String>) -> Self {
        self.primary_color = Some(value.into());
        self
    }

    pub fn secondary_color(mut self, value: impl Into<String>) -> Self {
        self.secondary_color = Some(value.into());
        self
    }

    pub fn font(mut self, value: Font) -> Self {
        self.font = Some(value);
        self
    }

    pub fn socials(mut self, value: SocialLinks) -> Self {
        self.socials = Some(value);
        self
    }

    /// Merge the set fields into `config`, leaving the rest untouched.
    pub fn apply_to(&self, config: &mut SiteConfig) {
        if let Some(value) = &self.name {
            config.name = value.clone();
        }
        if let Some(value) = &self.description {
            config.description = value.clone();
        }
        if let Some(value) = &self.email {
            config.email = value.clone();
        }
        if let Some(value) = &self.phone {
            config.phone = value.clone();
        }
        if let Some(value) = &self.address {
            config.address = value.clone();
        }
        if let Some(value) = &self.primary_color {
            config.primary_color = value.clone();
        }
        if let Some(value) = &self.secondary_color {
            config.secondary_color = value.clone();
        }
        if let Some(value) = self.font {
            config.font = value;
        }
        if let Some(value) = &self.socials {
            config.socials = value.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cms::seed::default_config;

    #[test]
    fn test_empty_patch_is_a_no_op() {
        let mut config = default_config();
        let before = config.clone();

        SiteConfigPatch::new().apply_to(&mut config);

        assert_eq!(config, before);
    }

    #[test]
    fn test_patch_only_touches_set_fields() {
        let mut config = default_config();
        let before = config.clone();

        SiteConfigPatch::new()
            .name("Northwind Digital")
            .primary_color("#ff0000")
            .apply_to(&mut config);

        assert_eq!(config.name, "Northwind Digital");
        assert_eq!(config.primary_color, "#ff0000");
        assert_eq!(config.email, before.email);
        assert_eq!(config.secondary_color, before.secondary_color);
        assert_eq!(config.socials, before.socials);
    }

    #[test]
    fn test_full_patch_replaces_everything() {
        let mut config = default_config();

        SiteConfigPatch::new()
            .name("N")
            .description("d")
            .email("e@e.com")
            .phone("1")
            .address("a")
            .primary_color("#111111")
            .secondary_color("#222222")
            .font(Font::Mono)
            .socials(SocialLinks {
                linkedin: "l".to_string(),
                twitter: "t".to_string(),
                facebook: "f".to_string(),
                instagram: "i".to_string(),
            })
            .apply_to(&mut config);

        assert_eq!(config.name, "N");
        assert_eq!(config.font, Font::Mono);
        assert_eq!(config.socials.instagram, "i");
    }

    #[test]
    fn test_unset_fields_are_omitted_from_json() {
        let patch = SiteConfigPatch::new().primary_color("#123456");
        let json = serde_json::to_value(&patch).unwrap();

        assert_eq!(json["primaryColor"], "#123456");
        assert!(json.get("name").is_none());
    }
}
