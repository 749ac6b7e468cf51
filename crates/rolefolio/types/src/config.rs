//! Rolefolio configuration.
//!
//! Site routing, metadata limits, and analytics switches. Every section has a
//! default, so an empty config file is valid.

use serde::{Deserialize, Serialize};

use crate::error::{LensError, LensResult};

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LensConfig {
    pub site: SiteConfig,
    pub metadata: MetadataConfig,
    pub tracking: TrackingConfig,
}

impl LensConfig {
    /// Validate the configuration
    pub fn validate(&self) -> LensResult<()> {
        self.site.validate()?;
        self.metadata.validate()?;
        Ok(())
    }
}

/// Site identity and routes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    /// Absolute origin used for canonical URLs, without trailing slash
    pub base_url: String,
    pub profile_path_prefix: String,
    pub login_path: String,
    /// Image used when the subject has neither avatar nor cover image
    pub default_image: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Rolefolio".to_string(),
            base_url: "https://rolefolio.example".to_string(),
            profile_path_prefix: "/profile".to_string(),
            login_path: "/login".to_string(),
            default_image: None,
        }
    }
}

impl SiteConfig {
    /// Route of a subject's profile page, e.g. `/profile/ada`.
    pub fn profile_path(&self, username: &str) -> String {
        format!("{}/{}", self.profile_path_prefix.trim_end_matches('/'), username)
    }

    /// Absolute canonical URL of a subject's profile page.
    pub fn profile_url(&self, username: &str) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.profile_path(username)
        )
    }

    fn validate(&self) -> LensResult<()> {
        for (field, path) in [
            ("profile_path_prefix", &self.profile_path_prefix),
            ("login_path", &self.login_path),
        ] {
            if !path.starts_with('/') {
                return Err(LensError::InvalidConfiguration {
                    reason: format!("site.{field} must start with '/', got {path:?}"),
                });
            }
        }
        if self.base_url.trim().is_empty() {
            return Err(LensError::InvalidConfiguration {
                reason: "site.base_url must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Limits for derived SEO metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataConfig {
    /// Hard limit on the description length, in characters
    pub description_max_chars: usize,
    /// Length of the bio excerpt before an ellipsis is appended
    pub bio_excerpt_chars: usize,
    /// How many skills feed the title and description
    pub top_skills: usize,
    /// Terms every profile carries in its keywords
    pub base_keywords: Vec<String>,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            description_max_chars: 160,
            bio_excerpt_chars: 100,
            top_skills: 3,
            base_keywords: vec!["professional profile".to_string(), "portfolio".to_string()],
        }
    }
}

impl MetadataConfig {
    fn validate(&self) -> LensResult<()> {
        if self.description_max_chars == 0 {
            return Err(LensError::InvalidConfiguration {
                reason: "metadata.description_max_chars must be positive".to_string(),
            });
        }
        if self.bio_excerpt_chars > self.description_max_chars {
            return Err(LensError::InvalidConfiguration {
                reason: format!(
                    "metadata.bio_excerpt_chars ({}) exceeds description_max_chars ({})",
                    self.bio_excerpt_chars, self.description_max_chars
                ),
            });
        }
        Ok(())
    }
}

/// Analytics switches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    pub enabled: bool,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = LensConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.metadata.description_max_chars, 160);
        assert_eq!(config.metadata.bio_excerpt_chars, 100);
        assert!(config.tracking.enabled);
    }

    #[test]
    fn profile_routes() {
        let site = SiteConfig::default();
        assert_eq!(site.profile_path("a.b"), "/profile/a.b");
        assert_eq!(site.profile_url("a.b"), "https://rolefolio.example/profile/a.b");
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: LensConfig =
            serde_json::from_str(r#"{"site": {"name": "Hire"}, "tracking": {"enabled": false}}"#)
                .unwrap();
        assert_eq!(config.site.name, "Hire");
        assert_eq!(config.site.login_path, "/login");
        assert!(!config.tracking.enabled);
        assert_eq!(config.metadata.top_skills, 3);
    }

    #[test]
    fn relative_paths_are_rejected() {
        let mut config = LensConfig::default();
        config.site.login_path = "login".into();
        assert!(matches!(
            config.validate(),
            Err(LensError::InvalidConfiguration { reason }) if reason.contains("login_path")
        ));
    }

    #[test]
    fn excerpt_longer_than_description_is_rejected() {
        let mut config = LensConfig::default();
        config.metadata.bio_excerpt_chars = 500;
        assert!(config.validate().is_err());
    }
}
