//! Role visibility for a viewer.
//!
//! The owner sees every role profile. Everyone else sees the public ones,
//! in the order the store keeps them.

use rolefolio_types::{RoleKey, RoleProfiles, ViewerRelation};
use serde::Serialize;
use tracing::debug;

/// Roles a viewer may see for one subject, in store insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VisibleRoleSet(Vec<RoleKey>);

impl VisibleRoleSet {
    pub fn first(&self) -> Option<RoleKey> {
        self.0.first().copied()
    }

    pub fn contains(&self, role: RoleKey) -> bool {
        self.0.contains(&role)
    }

    pub fn as_slice(&self) -> &[RoleKey] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<RoleKey> for VisibleRoleSet {
    fn from_iter<I: IntoIterator<Item = RoleKey>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Decides which role profiles a viewer may see.
///
/// The subject always sees every role they authored. Everyone else sees only
/// the roles flagged public. Output order is the store's insertion order and
/// nothing is cached between calls.
pub struct VisibilityResolver;

impl VisibilityResolver {
    pub fn resolve(relation: ViewerRelation, profiles: &RoleProfiles) -> VisibleRoleSet {
        let visible: VisibleRoleSet = match relation {
            ViewerRelation::SelfView => profiles.keys().collect(),
            ViewerRelation::AuthenticatedOther | ViewerRelation::Anonymous => profiles
                .iter()
                .filter(|profile| profile.is_public())
                .map(|profile| profile.key())
                .collect(),
        };

        debug!(
            relation = relation.as_str(),
            stored = profiles.len(),
            visible = visible.len(),
            "Resolved visible roles"
        );
        visible
    }
}
