//! MetadataProjector: SEO inputs bound to the active role.
//!
//! The projector decides which role's data feeds the head tags: title,
//! description, keywords, preview image and the JSON-LD `Person` record.
//! Rendering the tags themselves is left to a [`HeadRenderer`].
//!
//! [`HeadRenderer`]: crate::ports::HeadRenderer

use std::sync::Arc;

use rolefolio_types::{
    BasicInfo, EducationEntry, LensConfig, MetadataConfig, RoleKey, RoleProfile, SiteConfig,
};
use serde::Serialize;
use tracing::debug;

use crate::structured_data::{OrganizationSchema, PersonSchema, PostalAddressSchema};

/// Localized role names, supplied by the translation service.
pub trait RoleLabels: Send + Sync {
    fn role_label(&self, role: RoleKey) -> String;
}

/// Built-in English labels.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnglishRoleLabels;

impl RoleLabels for EnglishRoleLabels {
    fn role_label(&self, role: RoleKey) -> String {
        match role {
            RoleKey::Freelancer => "Freelancer",
            RoleKey::Candidate => "Job Candidate",
            RoleKey::Employer => "Employer",
            RoleKey::Client => "Client",
        }
        .to_string()
    }
}

/// Search synonyms added to the keywords of each role.
pub fn role_synonyms(role: RoleKey) -> &'static [&'static str] {
    match role {
        RoleKey::Freelancer => &["freelancer", "independent contractor", "consultant", "hire"],
        RoleKey::Candidate => &["job seeker", "candidate", "open to work", "resume"],
        RoleKey::Employer => &["employer", "hiring", "jobs", "company"],
        RoleKey::Client => &["client", "projects", "outsourcing"],
    }
}

/// Everything the projector reads for one subject and role.
#[derive(Clone, Copy, Debug)]
pub struct MetadataSubject<'a> {
    pub username: &'a str,
    pub basic_info: &'a BasicInfo,
    pub role: RoleKey,
    pub role_profile: &'a RoleProfile,
    pub education: &'a [EducationEntry],
}

impl MetadataSubject<'_> {
    pub fn skills(&self) -> &[String] {
        self.role_profile.skills()
    }

    pub fn location(&self) -> Option<&str> {
        non_blank(self.basic_info.location.as_deref())
    }

    fn name(&self) -> &str {
        non_blank(self.basic_info.display_name.as_deref()).unwrap_or(self.username)
    }

    /// Inputs that invalidate a previous projection.
    pub fn key(&self) -> ProjectionKey {
        ProjectionKey {
            username: self.username.to_string(),
            basic_info: self.basic_info.clone(),
            role_profile: self.role_profile.clone(),
            education: self.education.to_vec(),
        }
    }
}

/// Memo key: a projection is recomputed only when this changes.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectionKey {
    username: String,
    basic_info: BasicInfo,
    /// Carries the role, its skills, rate and company details
    role_profile: RoleProfile,
    education: Vec<EducationEntry>,
}

/// Inputs for the external head-tag renderer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MetadataInputs {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub image_url: Option<String>,
    pub canonical_url: String,
    pub structured_data: PersonSchema,
}

pub struct MetadataProjector {
    site: SiteConfig,
    limits: MetadataConfig,
    labels: Arc<dyn RoleLabels>,
}

impl MetadataProjector {
    pub fn new(config: &LensConfig) -> Self {
        Self {
            site: config.site.clone(),
            limits: config.metadata.clone(),
            labels: Arc::new(EnglishRoleLabels),
        }
    }

    pub fn with_labels(mut self, labels: Arc<dyn RoleLabels>) -> Self {
        self.labels = labels;
        self
    }

    /// Derive every metadata input for the subject's active role.
    pub fn project(&self, subject: &MetadataSubject<'_>) -> MetadataInputs {
        let top_skills = self.top_skills(subject.skills());
        let canonical_url = self.site.profile_url(subject.username);

        let inputs = MetadataInputs {
            title: self.title(subject, &top_skills),
            description: self.description(subject, &top_skills),
            keywords: self.keywords(subject),
            image_url: self.image_url(subject.basic_info),
            structured_data: self.structured_data(subject, &canonical_url),
            canonical_url,
        };

        debug!(
            username = subject.username,
            role = %subject.role,
            title = inputs.title.as_str(),
            "Projected profile metadata"
        );
        inputs
    }

    fn top_skills<'s>(&self, skills: &'s [String]) -> Vec<&'s str> {
        skills
            .iter()
            .filter_map(|skill| non_blank(Some(skill.as_str())))
            .take(self.limits.top_skills)
            .collect()
    }

    fn title(&self, subject: &MetadataSubject<'_>, top_skills: &[&str]) -> String {
        let base = format!("{} - {}", subject.name(), subject.role.capitalized());
        if top_skills.is_empty() {
            base
        } else {
            format!("{} | {}", base, top_skills.join(", "))
        }
    }

    fn description(&self, subject: &MetadataSubject<'_>, top_skills: &[&str]) -> String {
        let mut clauses = vec![format!(
            "{} - {}",
            subject.name(),
            self.labels.role_label(subject.role)
        )];
        if let Some(location) = subject.location() {
            clauses.push(format!("Based in {location}"));
        }
        if !top_skills.is_empty() {
            clauses.push(format!("Specializes in {}", top_skills.join(", ")));
        }
        if let Some(bio) = non_blank(subject.basic_info.bio.as_deref()) {
            clauses.push(excerpt(bio, self.limits.bio_excerpt_chars));
        }

        truncate_chars(&clauses.join(". "), self.limits.description_max_chars)
    }

    fn keywords(&self, subject: &MetadataSubject<'_>) -> String {
        let candidates = self
            .limits
            .base_keywords
            .iter()
            .map(String::as_str)
            .chain(role_synonyms(subject.role).iter().copied())
            .chain(subject.skills().iter().map(String::as_str))
            .chain(subject.location());

        let mut keywords: Vec<&str> = Vec::new();
        for keyword in candidates.filter_map(|k| non_blank(Some(k))) {
            if !keywords.iter().any(|seen| seen.eq_ignore_ascii_case(keyword)) {
                keywords.push(keyword);
            }
        }
        keywords.join(", ")
    }

    fn image_url(&self, basic_info: &BasicInfo) -> Option<String> {
        non_blank(basic_info.avatar.as_deref())
            .or_else(|| non_blank(basic_info.cover_image.as_deref()))
            .map(str::to_string)
            .or_else(|| self.site.default_image.clone())
    }

    fn structured_data(&self, subject: &MetadataSubject<'_>, url: &str) -> PersonSchema {
        let mut person = PersonSchema::new(subject.name(), url, subject.role);
        person.description = non_blank(subject.basic_info.bio.as_deref()).map(str::to_string);
        person.image = self.image_url(subject.basic_info);
        person.knows_about = subject.skills().to_vec();

        if subject.role == RoleKey::Employer {
            person.works_for = subject.role_profile.company_info().map(|company| {
                OrganizationSchema::organization(company.name.clone(), company.website.clone())
            });
        }
        if subject.role == RoleKey::Freelancer {
            person.price_range = subject.role_profile.hourly_rate().map(|rate| rate.price_range());
        }
        person.address = subject.location().map(PostalAddressSchema::locality);
        person.alumni_of = subject
            .education
            .iter()
            .filter_map(|entry| non_blank(Some(entry.institution.as_str())))
            .map(OrganizationSchema::educational)
            .collect();
        person.same_as = subject
            .basic_info
            .social_links
            .iter()
            .map(|link| link.url.clone())
            .collect();
        person
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// First `max` characters of the bio, with `...` when cut.
fn excerpt(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}...", cut.trim_end())
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolefolio_types::{
        CompanyInfo, EmployerProfile, FreelancerProfile, HourlyRate, SocialLink,
    };

    fn freelancer(skills: &[&str]) -> RoleProfile {
        RoleProfile::Freelancer(FreelancerProfile {
            is_public: true,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            hourly_rate: Some(HourlyRate {
                amount: 80,
                currency: "USD".into(),
            }),
            ..Default::default()
        })
    }

    fn subject<'a>(
        basic_info: &'a BasicInfo,
        role_profile: &'a RoleProfile,
        education: &'a [EducationEntry],
    ) -> MetadataSubject<'a> {
        MetadataSubject {
            username: "ada",
            basic_info,
            role: role_profile.key(),
            role_profile,
            education,
        }
    }

    fn projector() -> MetadataProjector {
        MetadataProjector::new(&LensConfig::default())
    }

    #[test]
    fn title_uses_top_three_skills() {
        let info = BasicInfo {
            display_name: Some("Ada Lovelace".into()),
            ..Default::default()
        };
        let profile = freelancer(&["Rust", "Go", "SQL", "Kotlin"]);
        let inputs = projector().project(&subject(&info, &profile, &[]));

        assert_eq!(inputs.title, "Ada Lovelace - Freelancer | Rust, Go, SQL");
    }

    #[test]
    fn title_falls_back_to_username_and_drops_empty_skills() {
        let info = BasicInfo::default();
        let profile = freelancer(&[]);
        let inputs = projector().project(&subject(&info, &profile, &[]));

        assert_eq!(inputs.title, "ada - Freelancer");
    }

    #[test]
    fn description_clauses_and_bio_excerpt() {
        let info = BasicInfo {
            display_name: Some("Ada".into()),
            location: Some("London".into()),
            bio: Some("x".repeat(120)),
            ..Default::default()
        };
        let profile = freelancer(&["Rust"]);
        let inputs = projector().project(&subject(&info, &profile, &[]));

        assert!(inputs
            .description
            .starts_with("Ada - Freelancer. Based in London. Specializes in Rust. "));
        assert!(inputs.description.chars().count() <= 160);
        assert!(inputs.description.ends_with("..."));
    }

    #[test]
    fn description_is_hard_truncated() {
        let info = BasicInfo {
            display_name: Some("A".repeat(150)),
            location: Some("Somewhere Far Away".into()),
            ..Default::default()
        };
        let profile = freelancer(&["Rust"]);
        let inputs = projector().project(&subject(&info, &profile, &[]));

        assert_eq!(inputs.description.chars().count(), 160);
    }

    #[test]
    fn short_bio_is_not_ellipsized() {
        assert_eq!(excerpt("Builds compilers.", 100), "Builds compilers.");
        assert_eq!(excerpt("abcdef", 3), "abc...");
    }

    #[test]
    fn keywords_union_drops_blanks_and_duplicates() {
        let info = BasicInfo {
            location: Some("Berlin".into()),
            ..Default::default()
        };
        let profile = freelancer(&["Rust", "", "rust", "Consultant"]);
        let inputs = projector().project(&subject(&info, &profile, &[]));

        assert_eq!(
            inputs.keywords,
            "professional profile, portfolio, freelancer, independent contractor, consultant, \
             hire, Rust, Berlin"
        );
    }

    #[test]
    fn image_prefers_avatar_then_cover_then_default() {
        let mut config = LensConfig::default();
        config.site.default_image = Some("https://cdn.example/default.png".into());
        let projector = MetadataProjector::new(&config);

        let mut info = BasicInfo {
            cover_image: Some("cover.png".into()),
            ..Default::default()
        };
        assert_eq!(projector.image_url(&info).as_deref(), Some("cover.png"));
        info.avatar = Some("avatar.png".into());
        assert_eq!(projector.image_url(&info).as_deref(), Some("avatar.png"));
        assert_eq!(
            projector.image_url(&BasicInfo::default()).as_deref(),
            Some("https://cdn.example/default.png")
        );
    }

    #[test]
    fn freelancer_structured_data_has_price_range_and_alumni() {
        let info = BasicInfo {
            location: Some("Paris".into()),
            social_links: vec![SocialLink {
                platform: "github".into(),
                url: "https://github.com/ada".into(),
            }],
            ..Default::default()
        };
        let profile = freelancer(&["Rust"]);
        let education = vec![EducationEntry {
            institution: "Sorbonne".into(),
            degree: None,
            field_of_study: None,
            start_year: None,
            end_year: None,
        }];
        let person = projector()
            .project(&subject(&info, &profile, &education))
            .structured_data;

        assert_eq!(person.price_range.as_deref(), Some("USD 80/hour"));
        assert_eq!(person.job_title, "Freelance Professional");
        assert_eq!(person.knows_about, vec!["Rust".to_string()]);
        assert_eq!(person.address, Some(PostalAddressSchema::locality("Paris")));
        assert_eq!(person.alumni_of, vec![OrganizationSchema::educational("Sorbonne")]);
        assert_eq!(person.same_as, vec!["https://github.com/ada".to_string()]);
        assert!(person.works_for.is_none());
    }

    #[test]
    fn employer_structured_data_has_works_for_only_with_company() {
        let info = BasicInfo::default();
        let with_company = RoleProfile::Employer(EmployerProfile {
            company_info: Some(CompanyInfo {
                name: "Acme".into(),
                website: Some("https://acme.example".into()),
                industry: None,
                size: None,
                description: None,
            }),
            ..Default::default()
        });
        let person = projector()
            .project(&subject(&info, &with_company, &[]))
            .structured_data;
        assert_eq!(
            person.works_for,
            Some(OrganizationSchema::organization(
                "Acme",
                Some("https://acme.example".into())
            ))
        );
        assert!(person.price_range.is_none());
        assert!(person.address.is_none());

        let without_company = RoleProfile::Employer(EmployerProfile::default());
        let person = projector()
            .project(&subject(&info, &without_company, &[]))
            .structured_data;
        assert!(person.works_for.is_none());
    }

    #[test]
    fn custom_labels_feed_the_description() {
        struct German;
        impl RoleLabels for German {
            fn role_label(&self, _role: RoleKey) -> String {
                "Freiberufler".to_string()
            }
        }

        let info = BasicInfo::default();
        let profile = freelancer(&[]);
        let inputs = projector()
            .with_labels(Arc::new(German))
            .project(&subject(&info, &profile, &[]));
        assert_eq!(inputs.description, "ada - Freiberufler");
    }

    #[test]
    fn projection_key_tracks_role_inputs() {
        let info = BasicInfo::default();
        let a = freelancer(&["Rust"]);
        let b = freelancer(&["Go"]);
        assert_eq!(subject(&info, &a, &[]).key(), subject(&info, &a, &[]).key());
        assert_ne!(subject(&info, &a, &[]).key(), subject(&info, &b, &[]).key());
    }

    #[test]
    fn projection_key_tracks_rate_and_education() {
        let info = BasicInfo::default();
        let rated = freelancer(&["Rust"]);
        let mut unrated = rated.clone();
        if let RoleProfile::Freelancer(profile) = &mut unrated {
            profile.hourly_rate = None;
        }
        assert_ne!(
            subject(&info, &rated, &[]).key(),
            subject(&info, &unrated, &[]).key()
        );

        let school = [EducationEntry {
            institution: "Cambridge".into(),
            degree: None,
            field_of_study: None,
            start_year: None,
            end_year: None,
        }];
        assert_ne!(
            subject(&info, &rated, &[]).key(),
            subject(&info, &rated, &school).key()
        );
    }
}
