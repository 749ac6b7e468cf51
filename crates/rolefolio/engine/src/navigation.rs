//! Redirect decisions for routes without a subject.
//!
//! Decided as a pure [`NavigationIntent`] first, then applied to a
//! [`Navigator`] in one side-effecting step.

use rolefolio_types::{SiteConfig, ViewerContext};
use serde::Serialize;
use tracing::info;

use crate::ports::Navigator;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum NavigationIntent {
    None,
    /// No subject and no authenticated viewer
    RedirectLogin { path: String },
    /// No subject: show the viewer's own profile, replacing history
    RedirectCanonical { path: String, replace: bool },
}

impl NavigationIntent {
    /// Decide where a route should go.
    ///
    /// A route with a username never redirects. Without one, nothing is
    /// decided until identity resolution settles.
    pub fn decide(
        route_username: Option<&str>,
        viewer: &ViewerContext,
        site: &SiteConfig,
    ) -> NavigationIntent {
        if route_username.is_some_and(|name| !name.trim().is_empty()) || viewer.is_loading {
            return NavigationIntent::None;
        }

        match (viewer.is_authenticated, viewer.canonical_username.as_deref()) {
            (true, Some(username)) => NavigationIntent::RedirectCanonical {
                path: site.profile_path(username),
                replace: true,
            },
            _ => NavigationIntent::RedirectLogin {
                path: site.login_path.clone(),
            },
        }
    }

    pub fn is_redirect(&self) -> bool {
        !matches!(self, NavigationIntent::None)
    }

    /// Hand the intent to the router.
    pub fn apply(&self, navigator: &dyn Navigator) {
        match self {
            NavigationIntent::None => {}
            NavigationIntent::RedirectLogin { path } => {
                info!(path = path.as_str(), "Redirecting unauthenticated viewer to login");
                navigator.navigate(path, false);
            }
            NavigationIntent::RedirectCanonical { path, replace } => {
                info!(path = path.as_str(), "Redirecting viewer to own profile");
                navigator.navigate(path, *replace);
            }
        }
    }
}
