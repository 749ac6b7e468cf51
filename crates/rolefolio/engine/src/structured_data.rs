//! schema.org `Person` record emitted as JSON-LD.

use rolefolio_types::{LensResult, RoleKey};
use serde::Serialize;

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// `jobTitle` for each role.
pub fn job_title(role: RoleKey) -> &'static str {
    match role {
        RoleKey::Freelancer => "Freelance Professional",
        RoleKey::Candidate => "Job Seeker",
        RoleKey::Employer => "Employer",
        RoleKey::Client => "Client",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSchema {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub job_title: String,
    pub knows_about: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub works_for: Option<OrganizationSchema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddressSchema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alumni_of: Vec<OrganizationSchema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
}

impl PersonSchema {
    pub fn new(name: impl Into<String>, url: impl Into<String>, role: RoleKey) -> Self {
        Self {
            context: SCHEMA_CONTEXT.to_string(),
            schema_type: "Person".to_string(),
            name: name.into(),
            url: url.into(),
            description: None,
            image: None,
            job_title: job_title(role).to_string(),
            knows_about: Vec::new(),
            works_for: None,
            price_range: None,
            address: None,
            alumni_of: Vec::new(),
            same_as: Vec::new(),
        }
    }

    /// Script body for `<script type="application/ld+json">`.
    pub fn to_json_ld(&self) -> LensResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OrganizationSchema {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl OrganizationSchema {
    pub fn organization(name: impl Into<String>, url: Option<String>) -> Self {
        Self {
            schema_type: "Organization".to_string(),
            name: name.into(),
            url,
        }
    }

    pub fn educational(name: impl Into<String>) -> Self {
        Self {
            schema_type: "EducationalOrganization".to_string(),
            name: name.into(),
            url: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddressSchema {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub address_locality: String,
}

impl PostalAddressSchema {
    pub fn locality(locality: impl Into<String>) -> Self {
        Self {
            schema_type: "PostalAddress".to_string(),
            address_locality: locality.into(),
        }
    }
}
