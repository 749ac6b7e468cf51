use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::role::RoleKey;
use crate::viewer::ViewerRelation;

/// A profile view, fired once per `(username, role)` for a mounted page.
///
/// Fire-and-forget: never stored locally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewEvent {
    pub username: String,
    pub role: RoleKey,
    pub viewer_type: ViewerRelation,
    pub timestamp: DateTime<Utc>,
}

impl ViewEvent {
    pub fn new(username: impl Into<String>, role: RoleKey, viewer_type: ViewerRelation) -> Self {
        Self {
            username: username.into(),
            role,
            viewer_type,
            timestamp: Utc::now(),
        }
    }

    /// Idempotency key of the event.
    pub fn key(&self) -> (&str, RoleKey) {
        (self.username.as_str(), self.role)
    }
}
