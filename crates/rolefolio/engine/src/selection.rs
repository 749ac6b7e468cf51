//! Active role and tab selection.

use rolefolio_types::{RoleKey, TabId};
use serde::Serialize;
use tracing::debug;

use crate::tabs::{default_tab, role_has_tab};
use crate::visibility::VisibleRoleSet;

/// Selection state for one page view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SelectionState {
    Uninitialized,
    Ready { role: RoleKey, tab: TabId },
    /// The viewer may see no roles at all
    Empty,
}

/// Why a selection request was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// No role is active yet
    NotReady,
    RoleNotVisible(RoleKey),
    TabNotInRole { role: RoleKey, tab: TabId },
}

/// Result of an explicit role or tab click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
    Changed,
    /// Already selected
    Unchanged,
    Rejected(RejectReason),
}

/// Holds the active role and tab.
///
/// Created per subject. Navigating to a different subject replaces the
/// controller instead of migrating its selection.
#[derive(Clone, Debug)]
pub struct SelectionController {
    state: SelectionState,
    visible: VisibleRoleSet,
}

impl SelectionController {
    pub fn new() -> Self {
        Self {
            state: SelectionState::Uninitialized,
            visible: VisibleRoleSet::default(),
        }
    }

    /// A controller already settled on `(role, tab)`, unchecked.
    #[cfg(test)]
    pub(crate) fn ready_at(role: RoleKey, tab: TabId) -> Self {
        Self {
            state: SelectionState::Ready { role, tab },
            visible: VisibleRoleSet::default(),
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn active_role(&self) -> Option<RoleKey> {
        match self.state {
            SelectionState::Ready { role, .. } => Some(role),
            _ => None,
        }
    }

    pub fn active_tab(&self) -> Option<TabId> {
        match self.state {
            SelectionState::Ready { tab, .. } => Some(tab),
            _ => None,
        }
    }

    /// React to a freshly resolved role set.
    ///
    /// A ready selection survives as long as its role stays visible. Otherwise
    /// the first visible role is activated on its default tab, or the
    /// controller becomes `Empty`.
    pub fn sync(&mut self, visible: &VisibleRoleSet) -> SelectionState {
        self.visible = visible.clone();

        if let SelectionState::Ready { role, .. } = self.state {
            if visible.contains(role) {
                return self.state;
            }
            debug!(role = %role, "Active role no longer visible, reinitializing selection");
        }

        self.state = match visible.first() {
            Some(first) => SelectionState::Ready {
                role: first,
                tab: default_tab(first),
            },
            None => SelectionState::Empty,
        };
        self.state
    }

    /// Activate a role. Changing role always lands on its default tab.
    pub fn select_role(&mut self, role: RoleKey) -> SelectionOutcome {
        let SelectionState::Ready { role: active, .. } = self.state else {
            return self.reject(RejectReason::NotReady);
        };
        if !self.visible.contains(role) {
            return self.reject(RejectReason::RoleNotVisible(role));
        }
        if role == active {
            return SelectionOutcome::Unchanged;
        }

        let tab = default_tab(role);
        debug!(from = %active, to = %role, tab = %tab, "Role selected");
        self.state = SelectionState::Ready { role, tab };
        SelectionOutcome::Changed
    }

    /// Activate a tab of the active role. Tabs the role does not offer are
    /// ignored.
    pub fn select_tab(&mut self, tab: TabId) -> SelectionOutcome {
        let SelectionState::Ready { role, tab: active } = self.state else {
            return self.reject(RejectReason::NotReady);
        };
        if !role_has_tab(role, tab) {
            return self.reject(RejectReason::TabNotInRole { role, tab });
        }
        if tab == active {
            return SelectionOutcome::Unchanged;
        }

        debug!(role = %role, tab = %tab, "Tab selected");
        self.state = SelectionState::Ready { role, tab };
        SelectionOutcome::Changed
    }

    fn reject(&self, reason: RejectReason) -> SelectionOutcome {
        debug!(?reason, state = ?self.state, "Ignoring selection request");
        SelectionOutcome::Rejected(reason)
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}
