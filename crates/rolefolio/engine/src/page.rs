//! ProfilePage: per-mount orchestration of the profile view.
//!
//! Route change → identity resolution → visibility → selection → section and
//! metadata → view tracking. Identity resolution is the only asynchronous
//! step. Every navigation issues a new [`IdentityTicket`], and identity
//! outcomes carrying an older ticket are discarded.

use std::sync::Arc;

use rolefolio_types::{
    LensConfig, LensError, LensResult, ProfileStore, RoleKey, SiteConfig, TabId, ViewerContext,
    ViewerRelation,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::dispatch::{SectionDescriptor, SectionDispatcher};
use crate::metadata::{MetadataInputs, MetadataProjector, MetadataSubject, ProjectionKey};
use crate::navigation::NavigationIntent;
use crate::ports::{AnalyticsSink, HeadRenderer, IdentityProvider, Navigator};
use crate::selection::{SelectionController, SelectionOutcome, SelectionState};
use crate::tabs::tabs_for;
use crate::tracker::ViewTracker;
use crate::visibility::{VisibilityResolver, VisibleRoleSet};

/// Identifies the navigation an identity resolution was started for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdentityTicket {
    generation: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleOutcome {
    Applied,
    /// The route changed while the identity was resolving
    Discarded,
}

/// The rendered state of a page with an active role.
#[derive(Clone, Debug, Serialize)]
pub struct PageView<'a> {
    pub username: &'a str,
    pub relation: ViewerRelation,
    pub visible_roles: &'a VisibleRoleSet,
    pub active_role: RoleKey,
    pub active_tab: TabId,
    pub tabs: &'static [TabId],
    pub section: SectionDescriptor<'a>,
    pub metadata: &'a MetadataInputs,
}

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PageOutcome<'a> {
    /// Identity is still resolving; render nothing and do not redirect
    Pending,
    Redirect(NavigationIntent),
    /// The viewer may see none of the subject's roles
    NotFound { username: &'a str },
    Ready(PageView<'a>),
}

/// Await the identity provider. A failed lookup settles as anonymous.
pub async fn load_identity(provider: &dyn IdentityProvider) -> ViewerContext {
    match provider.resolve_viewer().await {
        Ok(viewer) => viewer,
        Err(err) => {
            warn!(error = %err, "Identity resolution failed, continuing as anonymous");
            ViewerContext::anonymous()
        }
    }
}

pub struct ProfilePage {
    site: SiteConfig,
    projector: MetadataProjector,
    tracker: ViewTracker,
    route_username: Option<String>,
    store: Arc<ProfileStore>,
    generation: u64,
    viewer: ViewerContext,
    visible: VisibleRoleSet,
    selection: SelectionController,
    metadata: Option<(ProjectionKey, MetadataInputs)>,
}

impl ProfilePage {
    /// Mount a page. Nothing is shown until the first [`navigate`].
    ///
    /// [`navigate`]: ProfilePage::navigate
    pub fn mount(config: &LensConfig, sink: Arc<dyn AnalyticsSink>) -> Self {
        let tracker = if config.tracking.enabled {
            ViewTracker::new(sink)
        } else {
            ViewTracker::disabled(sink)
        };
        Self {
            site: config.site.clone(),
            projector: MetadataProjector::new(config),
            tracker,
            route_username: None,
            store: Arc::new(ProfileStore::default()),
            generation: 0,
            viewer: ViewerContext::loading(),
            visible: VisibleRoleSet::default(),
            selection: SelectionController::new(),
            metadata: None,
        }
    }

    pub fn with_projector(mut self, projector: MetadataProjector) -> Self {
        self.projector = projector;
        self
    }

    /// Follow a route change and start a fresh identity resolution.
    ///
    /// Usernames are case-insensitive and kept lowercase. A different subject
    /// discards the selection; the same subject keeps it.
    pub fn navigate(&mut self, username: Option<&str>, store: Arc<ProfileStore>) -> IdentityTicket {
        let username = username
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_lowercase);

        if username != self.route_username {
            debug!(
                from = self.route_username.as_deref().unwrap_or("-"),
                to = username.as_deref().unwrap_or("-"),
                "Subject changed, resetting selection"
            );
            self.selection = SelectionController::new();
            self.visible = VisibleRoleSet::default();
            self.metadata = None;
        }

        self.generation += 1;
        self.route_username = username;
        self.store = store;
        self.viewer = ViewerContext::loading();
        IdentityTicket {
            generation: self.generation,
        }
    }

    /// Apply an identity outcome if its navigation is still current.
    pub fn identity_settled(&mut self, ticket: IdentityTicket, viewer: ViewerContext) -> SettleOutcome {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "Discarding stale identity resolution"
            );
            return SettleOutcome::Discarded;
        }
        self.viewer = viewer;
        SettleOutcome::Applied
    }

    /// Swap in a newer snapshot of the same subject's data.
    pub fn refresh_store(&mut self, store: Arc<ProfileStore>) {
        self.store = store;
    }

    /// Compute what the page shows right now.
    ///
    /// Errors only when the selection points outside the dispatcher's domain,
    /// which is a programming error.
    pub fn evaluate(&mut self) -> LensResult<PageOutcome<'_>> {
        let intent =
            NavigationIntent::decide(self.route_username.as_deref(), &self.viewer, &self.site);
        if intent.is_redirect() {
            return Ok(PageOutcome::Redirect(intent));
        }

        let Some(username) = self.route_username.as_deref() else {
            return Ok(PageOutcome::Pending);
        };
        let Some(relation) = ViewerRelation::classify(username, &self.viewer) else {
            return Ok(PageOutcome::Pending);
        };

        let store: &ProfileStore = &self.store;
        self.visible = VisibilityResolver::resolve(relation, &store.role_profiles);
        let (role, tab) = match self.selection.sync(&self.visible) {
            SelectionState::Ready { role, tab } => (role, tab),
            SelectionState::Empty | SelectionState::Uninitialized => {
                return Ok(PageOutcome::NotFound { username });
            }
        };

        let section = SectionDispatcher::dispatch(role, tab, store)?;
        let role_profile = store
            .role_profiles
            .get(role)
            .ok_or(LensError::RoleNotInStore(role))?;
        self.tracker.track(username, role, relation);

        let subject = MetadataSubject {
            username,
            basic_info: &store.basic_info,
            role,
            role_profile,
            education: &store.education,
        };

        let key = subject.key();
        if self.metadata.as_ref().is_some_and(|(memo, _)| *memo != key) {
            self.metadata = None;
        }
        let projector = &self.projector;
        let (_, metadata) = self
            .metadata
            .get_or_insert_with(|| (key, projector.project(&subject)));

        Ok(PageOutcome::Ready(PageView {
            username,
            relation,
            visible_roles: &self.visible,
            active_role: role,
            active_tab: tab,
            tabs: tabs_for(role),
            section,
            metadata,
        }))
    }

    pub fn select_role(&mut self, role: RoleKey) -> SelectionOutcome {
        self.selection.select_role(role)
    }

    pub fn select_tab(&mut self, tab: TabId) -> SelectionOutcome {
        self.selection.select_tab(tab)
    }

    pub fn navigation_intent(&self) -> NavigationIntent {
        NavigationIntent::decide(self.route_username.as_deref(), &self.viewer, &self.site)
    }

    /// Decide and apply the redirect, if any.
    pub fn apply_navigation(&self, navigator: &dyn Navigator) -> NavigationIntent {
        let intent = self.navigation_intent();
        intent.apply(navigator);
        intent
    }

    /// Hand the latest projected metadata to the head renderer. Returns false
    /// when nothing has been projected yet.
    pub fn emit_metadata(&self, renderer: &dyn HeadRenderer) -> bool {
        match &self.metadata {
            Some((_, metadata)) => {
                renderer.render(metadata);
                true
            }
            None => false,
        }
    }

    pub fn selection_state(&self) -> SelectionState {
        self.selection.state()
    }

    pub fn viewer(&self) -> &ViewerContext {
        &self.viewer
    }

    pub fn route_username(&self) -> Option<&str> {
        self.route_username.as_deref()
    }
}
