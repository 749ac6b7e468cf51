//! Role and tab identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LensError;

/// A professional capacity a person can register under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleKey {
    Freelancer,
    Candidate,
    Employer,
    Client,
}

impl RoleKey {
    pub const ALL: [RoleKey; 4] = [
        RoleKey::Freelancer,
        RoleKey::Candidate,
        RoleKey::Employer,
        RoleKey::Client,
    ];

    /// Wire name, e.g. `FREELANCER`.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKey::Freelancer => "FREELANCER",
            RoleKey::Candidate => "CANDIDATE",
            RoleKey::Employer => "EMPLOYER",
            RoleKey::Client => "CLIENT",
        }
    }

    /// Display name with only the first letter upper-cased, e.g. `Freelancer`.
    pub fn capitalized(&self) -> &'static str {
        match self {
            RoleKey::Freelancer => "Freelancer",
            RoleKey::Candidate => "Candidate",
            RoleKey::Employer => "Employer",
            RoleKey::Client => "Client",
        }
    }
}

impl fmt::Display for RoleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleKey {
    type Err = LensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        RoleKey::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| LensError::UnknownRole(s.trim().to_string()))
    }
}

/// Identifier of a sub-section within a role's profile page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabId {
    Overview,
    Experience,
    Education,
    Portfolio,
    Reviews,
    Attachments,
    Jobs,
    Company,
    Projects,
}

impl TabId {
    pub const ALL: [TabId; 9] = [
        TabId::Overview,
        TabId::Experience,
        TabId::Education,
        TabId::Portfolio,
        TabId::Reviews,
        TabId::Attachments,
        TabId::Jobs,
        TabId::Company,
        TabId::Projects,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TabId::Overview => "overview",
            TabId::Experience => "experience",
            TabId::Education => "education",
            TabId::Portfolio => "portfolio",
            TabId::Reviews => "reviews",
            TabId::Attachments => "attachments",
            TabId::Jobs => "jobs",
            TabId::Company => "company",
            TabId::Projects => "projects",
        }
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TabId {
    type Err = LensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        TabId::ALL
            .into_iter()
            .find(|tab| tab.as_str() == normalized)
            .ok_or_else(|| LensError::UnknownTab(s.trim().to_string()))
    }
}
