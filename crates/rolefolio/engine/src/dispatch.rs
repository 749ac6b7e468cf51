//! SectionDispatcher: maps (active role, active tab) to a content section.
//!
//! Most tabs are role-agnostic in shape and are dispatched on the tab alone.
//! `reviews`, `attachments`, `jobs`, `company` and `projects` read a role
//! attribute instead. A missing attribute yields an explicit empty variant so
//! renderers always have a defined empty state.

use rolefolio_types::{
    Attachment, BasicInfo, CompanyInfo, EducationEntry, ExperienceEntry, JobPosting, LensError,
    LensResult, PortfolioItem, ProfileStore, ProjectPosting, Review, RoleKey, RoleProfile, TabId,
};
use serde::Serialize;

use crate::tabs::role_has_tab;

/// A list slice that is either populated or explicitly empty.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Listing<'a, T> {
    Items(&'a [T]),
    Empty,
}

impl<'a, T> Listing<'a, T> {
    pub fn from_slice(items: &'a [T]) -> Self {
        if items.is_empty() {
            Listing::Empty
        } else {
            Listing::Items(items)
        }
    }

    pub fn items(&self) -> &'a [T] {
        match self {
            Listing::Items(items) => *items,
            Listing::Empty => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty)
    }
}

/// A single record that is either present or explicitly empty.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Detail<'a, T> {
    Present(&'a T),
    Empty,
}

impl<'a, T> Detail<'a, T> {
    pub fn from_option(value: Option<&'a T>) -> Self {
        value.map_or(Detail::Empty, Detail::Present)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Detail::Empty)
    }
}

/// Which section to render and which data slice to hand it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum SectionDescriptor<'a> {
    Overview {
        basic_info: &'a BasicInfo,
        role_profile: &'a RoleProfile,
    },
    Experience {
        entries: Listing<'a, ExperienceEntry>,
    },
    Education {
        entries: Listing<'a, EducationEntry>,
    },
    Portfolio {
        items: Listing<'a, PortfolioItem>,
    },
    Reviews {
        reviews: Listing<'a, Review>,
    },
    Attachments {
        attachments: Listing<'a, Attachment>,
    },
    Jobs {
        jobs: Listing<'a, JobPosting>,
    },
    Company {
        company: Detail<'a, CompanyInfo>,
    },
    Projects {
        projects: Listing<'a, ProjectPosting>,
    },
}

impl SectionDescriptor<'_> {
    pub fn tab(&self) -> TabId {
        match self {
            SectionDescriptor::Overview { .. } => TabId::Overview,
            SectionDescriptor::Experience { .. } => TabId::Experience,
            SectionDescriptor::Education { .. } => TabId::Education,
            SectionDescriptor::Portfolio { .. } => TabId::Portfolio,
            SectionDescriptor::Reviews { .. } => TabId::Reviews,
            SectionDescriptor::Attachments { .. } => TabId::Attachments,
            SectionDescriptor::Jobs { .. } => TabId::Jobs,
            SectionDescriptor::Company { .. } => TabId::Company,
            SectionDescriptor::Projects { .. } => TabId::Projects,
        }
    }

    /// Whether the renderer should show its empty state.
    pub fn is_empty(&self) -> bool {
        match self {
            SectionDescriptor::Overview { .. } => false,
            SectionDescriptor::Experience { entries } => entries.is_empty(),
            SectionDescriptor::Education { entries } => entries.is_empty(),
            SectionDescriptor::Portfolio { items } => items.is_empty(),
            SectionDescriptor::Reviews { reviews } => reviews.is_empty(),
            SectionDescriptor::Attachments { attachments } => attachments.is_empty(),
            SectionDescriptor::Jobs { jobs } => jobs.is_empty(),
            SectionDescriptor::Company { company } => company.is_empty(),
            SectionDescriptor::Projects { projects } => projects.is_empty(),
        }
    }
}

pub struct SectionDispatcher;

impl SectionDispatcher {
    /// Resolve the section for a (role, tab) pair.
    ///
    /// Total over the tabs the role offers. Anything else means the UI offered
    /// a control the dispatcher does not know, which callers treat as fatal.
    pub fn dispatch<'a>(
        role: RoleKey,
        tab: TabId,
        store: &'a ProfileStore,
    ) -> LensResult<SectionDescriptor<'a>> {
        let profile = store
            .role_profiles
            .get(role)
            .ok_or(LensError::RoleNotInStore(role))?;
        if !role_has_tab(role, tab) {
            return Err(LensError::TabOutOfDomain { role, tab });
        }

        let section = match (tab, profile) {
            (TabId::Overview, _) => SectionDescriptor::Overview {
                basic_info: &store.basic_info,
                role_profile: profile,
            },
            (TabId::Experience, _) => SectionDescriptor::Experience {
                entries: Listing::from_slice(&store.experience),
            },
            (TabId::Education, RoleProfile::Candidate(_)) => SectionDescriptor::Education {
                entries: Listing::from_slice(&store.education),
            },
            (TabId::Portfolio, _) => SectionDescriptor::Portfolio {
                items: Listing::from_slice(&store.portfolio),
            },
            (TabId::Reviews, RoleProfile::Freelancer(p)) => SectionDescriptor::Reviews {
                reviews: Listing::from_slice(&p.reviews),
            },
            (TabId::Reviews, RoleProfile::Client(p)) => SectionDescriptor::Reviews {
                reviews: Listing::from_slice(&p.reviews),
            },
            (TabId::Attachments, RoleProfile::Freelancer(p)) => SectionDescriptor::Attachments {
                attachments: Listing::from_slice(&p.attachments),
            },
            (TabId::Attachments, RoleProfile::Candidate(p)) => SectionDescriptor::Attachments {
                attachments: Listing::from_slice(&p.attachments),
            },
            (TabId::Jobs, RoleProfile::Employer(p)) => SectionDescriptor::Jobs {
                jobs: Listing::from_slice(&p.open_jobs),
            },
            (TabId::Company, RoleProfile::Employer(p)) => SectionDescriptor::Company {
                company: Detail::from_option(p.company_info.as_ref()),
            },
            (TabId::Projects, RoleProfile::Client(p)) => SectionDescriptor::Projects {
                projects: Listing::from_slice(&p.projects),
            },
            (tab, _) => return Err(LensError::TabOutOfDomain { role, tab }),
        };
        Ok(section)
    }
}
