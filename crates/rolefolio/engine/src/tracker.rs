//! Profile view analytics, deduplicated per mounted page.

use std::collections::HashSet;
use std::sync::Arc;

use rolefolio_types::{RoleKey, ViewEvent, ViewerRelation};
use tracing::{debug, warn};

use crate::ports::AnalyticsSink;

/// One analytics event per `(username, role)` per mounted page.
///
/// The idempotency set lives exactly as long as the tracker, so the tracker
/// must be created on page mount and dropped on unmount. Delivery failures
/// are logged and swallowed.
pub struct ViewTracker {
    sink: Arc<dyn AnalyticsSink>,
    seen: HashSet<(String, RoleKey)>,
    enabled: bool,
}

impl ViewTracker {
    pub fn new(sink: Arc<dyn AnalyticsSink>) -> Self {
        Self {
            sink,
            seen: HashSet::new(),
            enabled: true,
        }
    }

    pub fn disabled(sink: Arc<dyn AnalyticsSink>) -> Self {
        Self {
            enabled: false,
            ..Self::new(sink)
        }
    }

    /// Observe a settled `(username, role)` pair. Returns true when an event
    /// was fired for it.
    pub fn track(&mut self, username: &str, role: RoleKey, viewer: ViewerRelation) -> bool {
        if !self.enabled {
            return false;
        }
        if !self.seen.insert((username.to_string(), role)) {
            return false;
        }

        match self.sink.send(ViewEvent::new(username, role, viewer)) {
            Ok(()) => debug!(username, role = %role, viewer = %viewer, "Profile view tracked"),
            Err(err) => warn!(
                username,
                role = %role,
                error = %err,
                "Failed to deliver profile view event"
            ),
        }
        true
    }

    pub fn has_seen(&self, username: &str, role: RoleKey) -> bool {
        self.seen.contains(&(username.to_string(), role))
    }
}
