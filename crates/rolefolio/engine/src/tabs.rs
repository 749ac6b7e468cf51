//! Static tab table: one ordered tab list per role.

use rolefolio_types::{RoleKey, TabId};

const FREELANCER_TABS: &[TabId] = &[
    TabId::Overview,
    TabId::Experience,
    TabId::Portfolio,
    TabId::Reviews,
    TabId::Attachments,
];

const CANDIDATE_TABS: &[TabId] = &[
    TabId::Overview,
    TabId::Experience,
    TabId::Education,
    TabId::Portfolio,
    TabId::Attachments,
];

const EMPLOYER_TABS: &[TabId] = &[
    TabId::Overview,
    TabId::Experience,
    TabId::Jobs,
    TabId::Company,
];

const CLIENT_TABS: &[TabId] = &[
    TabId::Overview,
    TabId::Experience,
    TabId::Projects,
    TabId::Reviews,
];

/// Tabs offered for a role, in tab-bar order.
pub fn tabs_for(role: RoleKey) -> &'static [TabId] {
    match role {
        RoleKey::Freelancer => FREELANCER_TABS,
        RoleKey::Candidate => CANDIDATE_TABS,
        RoleKey::Employer => EMPLOYER_TABS,
        RoleKey::Client => CLIENT_TABS,
    }
}

/// First tab of a role. Always `overview`.
pub fn default_tab(role: RoleKey) -> TabId {
    tabs_for(role)[0]
}

pub fn role_has_tab(role: RoleKey, tab: TabId) -> bool {
    tabs_for(role).contains(&tab)
}
