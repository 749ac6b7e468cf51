//! Who is looking: session identity, canonical usernames and the viewer's
//! relation to the profile subject.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Username used when a session carries neither username metadata nor email.
pub const FALLBACK_USERNAME: &str = "user";

/// Authenticated user as reported by the session provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    /// Explicit username from session metadata, if the user registered one
    #[serde(default)]
    pub username: Option<String>,
}

impl SessionUser {
    pub fn canonical_username(&self) -> String {
        canonical_username(self.username.as_deref(), self.email.as_deref())
    }
}

/// Derive the canonical username of an authenticated identity.
///
/// Explicit username metadata wins, then the email local-part, then the
/// literal `"user"`. The result is always lowercase.
pub fn canonical_username(username: Option<&str>, email: Option<&str>) -> String {
    let explicit = username.map(str::trim).filter(|name| !name.is_empty());
    let local_part = || {
        email
            .and_then(|email| email.split('@').next())
            .map(str::trim)
            .filter(|part| !part.is_empty())
    };

    explicit
        .or_else(local_part)
        .unwrap_or(FALLBACK_USERNAME)
        .to_lowercase()
}

/// What the viewer-identity provider currently knows about the viewer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerContext {
    pub is_authenticated: bool,
    /// True until identity resolution settles
    pub is_loading: bool,
    pub canonical_username: Option<String>,
}

impl ViewerContext {
    pub fn loading() -> Self {
        Self {
            is_authenticated: false,
            is_loading: true,
            canonical_username: None,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            is_authenticated: false,
            is_loading: false,
            canonical_username: None,
        }
    }

    pub fn authenticated(canonical_username: impl Into<String>) -> Self {
        Self {
            is_authenticated: true,
            is_loading: false,
            canonical_username: Some(canonical_username.into()),
        }
    }

    /// Settled context for a session lookup result.
    pub fn from_session(user: Option<&SessionUser>) -> Self {
        match user {
            Some(user) => Self::authenticated(user.canonical_username()),
            None => Self::anonymous(),
        }
    }
}

impl Default for ViewerContext {
    fn default() -> Self {
        Self::loading()
    }
}

/// How the viewer relates to the profile subject. Derived, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewerRelation {
    /// The viewer is the subject
    #[serde(rename = "self")]
    SelfView,
    AuthenticatedOther,
    Anonymous,
}

impl ViewerRelation {
    /// Classify the viewer against a route username.
    ///
    /// Returns `None` while identity resolution is still loading. Canonical
    /// usernames are lowercase, so the route segment is compared without
    /// regard to case.
    pub fn classify(route_username: &str, viewer: &ViewerContext) -> Option<Self> {
        if viewer.is_loading {
            return None;
        }
        if !viewer.is_authenticated {
            return Some(ViewerRelation::Anonymous);
        }
        let is_self = viewer
            .canonical_username
            .as_deref()
            .is_some_and(|own| own.eq_ignore_ascii_case(route_username.trim()));
        Some(if is_self {
            ViewerRelation::SelfView
        } else {
            ViewerRelation::AuthenticatedOther
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewerRelation::SelfView => "self",
            ViewerRelation::AuthenticatedOther => "authenticated_other",
            ViewerRelation::Anonymous => "anonymous",
        }
    }
}

impl fmt::Display for ViewerRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_username_wins() {
        assert_eq!(canonical_username(Some("AdaL"), Some("a.b@x.com")), "adal");
    }

    #[test]
    fn email_local_part_is_used_without_metadata() {
        assert_eq!(canonical_username(None, Some("a.b@x.com")), "a.b");
        assert_eq!(canonical_username(Some("  "), Some("Jo.Doe@x.com")), "jo.doe");
    }

    #[test]
    fn falls_back_to_literal_user() {
        assert_eq!(canonical_username(None, None), "user");
        assert_eq!(canonical_username(None, Some("@x.com")), "user");
    }

    #[test]
    fn session_context() {
        let user = SessionUser {
            id: Uuid::new_v4(),
            email: Some("a.b@x.com".into()),
            username: None,
        };
        let ctx = ViewerContext::from_session(Some(&user));
        assert!(ctx.is_authenticated);
        assert!(!ctx.is_loading);
        assert_eq!(ctx.canonical_username.as_deref(), Some("a.b"));

        assert_eq!(ViewerContext::from_session(None), ViewerContext::anonymous());
    }

    #[test]
    fn classify_relations() {
        let me = ViewerContext::authenticated("ada");
        assert_eq!(ViewerRelation::classify("ada", &me), Some(ViewerRelation::SelfView));
        assert_eq!(ViewerRelation::classify("Ada", &me), Some(ViewerRelation::SelfView));
        assert_eq!(
            ViewerRelation::classify("grace", &me),
            Some(ViewerRelation::AuthenticatedOther)
        );
        assert_eq!(
            ViewerRelation::classify("ada", &ViewerContext::anonymous()),
            Some(ViewerRelation::Anonymous)
        );
        assert_eq!(ViewerRelation::classify("ada", &ViewerContext::loading()), None);
    }

    #[test]
    fn relation_wire_names() {
        assert_eq!(serde_json::to_string(&ViewerRelation::SelfView).unwrap(), "\"self\"");
        assert_eq!(
            serde_json::to_string(&ViewerRelation::AuthenticatedOther).unwrap(),
            "\"authenticated_other\""
        );
    }
}
