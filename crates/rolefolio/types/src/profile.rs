//! Role profiles.
//!
//! Each role has its own attribute schema and publication flag. A subject
//! holds at most one profile per role, kept in insertion order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{LensError, LensResult};
use crate::role::RoleKey;

/// One role profile: the attribute record and publication flag for a role.
///
/// Each variant has its own fixed schema. Every variant carries `is_public`
/// and a skills list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleProfile {
    Freelancer(FreelancerProfile),
    Candidate(CandidateProfile),
    Employer(EmployerProfile),
    Client(ClientProfile),
}

impl RoleProfile {
    pub fn key(&self) -> RoleKey {
        match self {
            RoleProfile::Freelancer(_) => RoleKey::Freelancer,
            RoleProfile::Candidate(_) => RoleKey::Candidate,
            RoleProfile::Employer(_) => RoleKey::Employer,
            RoleProfile::Client(_) => RoleKey::Client,
        }
    }

    pub fn is_public(&self) -> bool {
        match self {
            RoleProfile::Freelancer(p) => p.is_public,
            RoleProfile::Candidate(p) => p.is_public,
            RoleProfile::Employer(p) => p.is_public,
            RoleProfile::Client(p) => p.is_public,
        }
    }

    pub fn skills(&self) -> &[String] {
        match self {
            RoleProfile::Freelancer(p) => &p.skills,
            RoleProfile::Candidate(p) => &p.skills,
            RoleProfile::Employer(p) => &p.skills,
            RoleProfile::Client(p) => &p.skills,
        }
    }

    /// Company details, only meaningful for employers.
    pub fn company_info(&self) -> Option<&CompanyInfo> {
        match self {
            RoleProfile::Employer(p) => p.company_info.as_ref(),
            _ => None,
        }
    }

    /// Hourly rate, only meaningful for freelancers.
    pub fn hourly_rate(&self) -> Option<&HourlyRate> {
        match self {
            RoleProfile::Freelancer(p) => p.hourly_rate.as_ref(),
            _ => None,
        }
    }

    fn set_public(&mut self, is_public: bool) {
        match self {
            RoleProfile::Freelancer(p) => p.is_public = is_public,
            RoleProfile::Candidate(p) => p.is_public = is_public,
            RoleProfile::Employer(p) => p.is_public = is_public,
            RoleProfile::Client(p) => p.is_public = is_public,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FreelancerProfile {
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub hourly_rate: Option<HourlyRate>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub desired_position: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub open_to_work: bool,
    #[serde(default)]
    pub expected_salary: Option<SalaryRange>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployerProfile {
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub company_info: Option<CompanyInfo>,
    /// Skills this employer hires for
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub open_jobs: Vec<JobPosting>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<ProjectPosting>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Freelancer rate in whole currency units per hour.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyRate {
    pub amount: u32,
    pub currency: String,
}

impl HourlyRate {
    /// Price range text, e.g. `USD 45/hour`.
    pub fn price_range(&self) -> String {
        format!("{} {}/hour", self.currency, self.amount)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
    pub currency: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub employment_type: Option<String>,
    #[serde(default)]
    pub posted_on: Option<NaiveDate>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Open,
    InProgress,
    Completed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPosting {
    pub title: String,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    /// 1 to 5
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_on: Option<NaiveDate>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub mime_type: Option<String>,
}

/// Ordered map from role key to role profile.
///
/// Iteration order is insertion order. A role without a stored profile is
/// absent, never present with empty fields. Serialized as a JSON array of
/// tagged profiles so the order survives a round trip.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RoleProfile>", into = "Vec<RoleProfile>")]
pub struct RoleProfiles {
    entries: Vec<RoleProfile>,
}

impl RoleProfiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a profile, replacing an existing one for the same role in place.
    ///
    /// Replacement keeps the original position, like a JS `Map.set`.
    pub fn insert(&mut self, profile: RoleProfile) -> Option<RoleProfile> {
        let key = profile.key();
        match self.entries.iter_mut().find(|p| p.key() == key) {
            Some(existing) => Some(std::mem::replace(existing, profile)),
            None => {
                self.entries.push(profile);
                None
            }
        }
    }

    pub fn get(&self, role: RoleKey) -> Option<&RoleProfile> {
        self.entries.iter().find(|p| p.key() == role)
    }

    pub fn contains(&self, role: RoleKey) -> bool {
        self.get(role).is_some()
    }

    /// Flip the publication flag of a stored profile. Returns false when the
    /// role has no profile.
    pub fn set_public(&mut self, role: RoleKey, is_public: bool) -> bool {
        match self.entries.iter_mut().find(|p| p.key() == role) {
            Some(profile) => {
                profile.set_public(is_public);
                true
            }
            None => false,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = RoleKey> + '_ {
        self.entries.iter().map(RoleProfile::key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RoleProfile> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<RoleProfile>> for RoleProfiles {
    type Error = LensError;

    fn try_from(profiles: Vec<RoleProfile>) -> LensResult<Self> {
        let mut map = RoleProfiles::new();
        for profile in profiles {
            let key = profile.key();
            if map.insert(profile).is_some() {
                return Err(LensError::DuplicateRole(key));
            }
        }
        Ok(map)
    }
}

impl From<RoleProfiles> for Vec<RoleProfile> {
    fn from(map: RoleProfiles) -> Self {
        map.entries
    }
}

impl<'a> IntoIterator for &'a RoleProfiles {
    type Item = &'a RoleProfile;
    type IntoIter = std::slice::Iter<'a, RoleProfile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freelancer(is_public: bool) -> RoleProfile {
        RoleProfile::Freelancer(FreelancerProfile {
            is_public,
            skills: vec!["Rust".into()],
            ..Default::default()
        })
    }

    fn client(is_public: bool) -> RoleProfile {
        RoleProfile::Client(ClientProfile {
            is_public,
            ..Default::default()
        })
    }

    #[test]
    fn insertion_order_is_iteration_order() {
        let mut map = RoleProfiles::new();
        map.insert(client(true));
        map.insert(freelancer(false));

        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec![RoleKey::Client, RoleKey::Freelancer]);
    }

    #[test]
    fn replacing_a_profile_keeps_its_position() {
        let mut map = RoleProfiles::new();
        map.insert(freelancer(false));
        map.insert(client(true));
        let previous = map.insert(freelancer(true));

        assert_eq!(previous, Some(freelancer(false)));
        assert_eq!(map.len(), 2);
        assert_eq!(map.keys().next(), Some(RoleKey::Freelancer));
        assert!(map.get(RoleKey::Freelancer).unwrap().is_public());
    }

    #[test]
    fn set_public_toggles_only_stored_roles() {
        let mut map = RoleProfiles::new();
        map.insert(client(true));

        assert!(map.set_public(RoleKey::Client, false));
        assert!(!map.get(RoleKey::Client).unwrap().is_public());
        assert!(!map.set_public(RoleKey::Employer, true));
        assert!(!map.contains(RoleKey::Employer));
    }

    #[test]
    fn deserializes_tagged_array_in_order() {
        let json = r#"[
            {"role": "CLIENT", "is_public": true, "company_name": "Acme"},
            {"role": "EMPLOYER", "skills": ["Go"]}
        ]"#;
        let map: RoleProfiles = serde_json::from_str(json).unwrap();

        assert_eq!(map.keys().collect::<Vec<_>>(), vec![RoleKey::Client, RoleKey::Employer]);
        let employer = map.get(RoleKey::Employer).unwrap();
        assert!(!employer.is_public());
        assert!(employer.company_info().is_none());
        assert_eq!(employer.skills(), ["Go".to_string()]);
    }

    #[test]
    fn duplicate_roles_are_rejected() {
        let json = r#"[{"role": "CLIENT"}, {"role": "CLIENT", "is_public": true}]"#;
        let err = serde_json::from_str::<RoleProfiles>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate role profile: CLIENT"));
    }

    #[test]
    fn role_specific_accessors() {
        let employer = RoleProfile::Employer(EmployerProfile {
            company_info: Some(CompanyInfo {
                name: "Acme".into(),
                website: None,
                industry: None,
                size: None,
                description: None,
            }),
            ..Default::default()
        });
        assert_eq!(employer.company_info().map(|c| c.name.as_str()), Some("Acme"));
        assert!(employer.hourly_rate().is_none());

        let rate = HourlyRate {
            amount: 45,
            currency: "USD".into(),
        };
        assert_eq!(rate.price_range(), "USD 45/hour");
    }
}
