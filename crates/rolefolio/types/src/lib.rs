//! # rolefolio-types
//!
//! Shared vocabulary for the Rolefolio profile viewer.
//!
//! A registered person can hold several professional role profiles, each with
//! its own attribute schema and its own publication flag:
//!
//! - **Freelancer**: headline, hourly rate, reviews, attachments
//! - **Candidate**: desired position, salary expectation, attachments
//! - **Employer**: company info and open jobs
//! - **Client**: company name, posted projects, reviews
//!
//! This crate owns the data model only. Deciding which roles a viewer may see,
//! which section to render and which metadata to emit lives in
//! `rolefolio-engine`.

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod event;
pub mod profile;
pub mod role;
pub mod store;
pub mod viewer;

pub use config::{LensConfig, MetadataConfig, SiteConfig, TrackingConfig};
pub use error::{LensError, LensResult};
pub use event::ViewEvent;
pub use profile::{
    Attachment, CandidateProfile, ClientProfile, CompanyInfo, EmployerProfile, FreelancerProfile,
    HourlyRate, JobPosting, ProjectPosting, ProjectStatus, Review, RoleProfile, RoleProfiles,
    SalaryRange,
};
pub use role::{RoleKey, TabId};
pub use store::{
    BasicInfo, Certification, EducationEntry, ExperienceEntry, PortfolioItem, ProfileStore,
    SocialLink,
};
pub use viewer::{canonical_username, SessionUser, ViewerContext, ViewerRelation};
