//! Role-independent profile data: basic info and the shared sections.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::profile::RoleProfiles;

/// Role-independent identity details shown on every role's overview.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicInfo {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub organization: String,
    #[serde(default)]
    pub started_on: Option<NaiveDate>,
    /// None while the position is current
    #[serde(default)]
    pub ended_on: Option<NaiveDate>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub field_of_study: Option<String>,
    #[serde(default)]
    pub start_year: Option<i32>,
    #[serde(default)]
    pub end_year: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    #[serde(default)]
    pub issued_on: Option<NaiveDate>,
    #[serde(default)]
    pub credential_url: Option<String>,
}

/// Snapshot of one subject's profile data, as supplied by the profile store.
///
/// The core only reads it. Profile-editing flows own every mutation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileStore {
    #[serde(default)]
    pub basic_info: BasicInfo,
    #[serde(default)]
    pub role_profiles: RoleProfiles,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub portfolio: Vec<PortfolioItem>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

impl ProfileStore {
    pub fn from_json(json: &str) -> crate::LensResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::RoleKey;

    #[test]
    fn missing_sections_default_to_empty() {
        let store = ProfileStore::from_json(r#"{"basic_info": {"display_name": "Ada"}}"#).unwrap();
        assert_eq!(store.basic_info.display_name.as_deref(), Some("Ada"));
        assert!(store.role_profiles.is_empty());
        assert!(store.experience.is_empty());
        assert!(store.certifications.is_empty());
    }

    #[test]
    fn parses_full_store() {
        let json = r#"{
            "basic_info": {"display_name": "Ada", "location": "London"},
            "role_profiles": [{"role": "CANDIDATE", "is_public": true, "open_to_work": true}],
            "education": [{"institution": "Cambridge", "degree": "BSc", "end_year": 2015}],
            "experience": [{"title": "Engineer", "organization": "Acme", "started_on": "2016-01-04"}]
        }"#;
        let store = ProfileStore::from_json(json).unwrap();

        assert!(store.role_profiles.contains(RoleKey::Candidate));
        assert_eq!(store.education[0].end_year, Some(2015));
        assert_eq!(
            store.experience[0].started_on,
            NaiveDate::from_ymd_opt(2016, 1, 4)
        );
        assert!(store.experience[0].ended_on.is_none());
    }

    #[test]
    fn malformed_store_is_a_serialization_error() {
        let err = ProfileStore::from_json(r#"{"role_profiles": [{"role": "ADMIN"}]}"#).unwrap_err();
        assert!(matches!(err, crate::LensError::Serialization(_)));
    }
}
