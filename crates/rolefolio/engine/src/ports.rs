//! Seams to the collaborators around the core: identity provider, router,
//! head-tag renderer and analytics sink.
//!
//! Each trait comes with an in-memory implementation for tests and demos.

use async_trait::async_trait;
use parking_lot::Mutex;
use rolefolio_types::{SessionUser, ViewEvent, ViewerContext};
use thiserror::Error;
use tokio::sync::mpsc;

use crate::metadata::MetadataInputs;

/// Errors from the identity provider.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),

    #[error("session expired")]
    SessionExpired,
}

/// Errors from an analytics sink. Never surfaced past the view tracker.
#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("analytics channel closed")]
    Disconnected,

    #[error("analytics sink rejected event: {0}")]
    Rejected(String),
}

/// Resolves who is looking at the page.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Settled viewer context for the current session
    async fn resolve_viewer(&self) -> Result<ViewerContext, IdentityError>;
}

/// Router side of the navigation intent.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str, replace: bool);
}

/// External renderer for title, meta, Open Graph and JSON-LD tags.
pub trait HeadRenderer: Send + Sync {
    fn render(&self, metadata: &MetadataInputs);
}

/// Fire-and-forget consumer of view events.
pub trait AnalyticsSink: Send + Sync {
    fn send(&self, event: ViewEvent) -> Result<(), AnalyticsError>;
}

/// Identity provider backed by a fixed session lookup.
#[derive(Clone, Debug, Default)]
pub struct StaticIdentityProvider {
    session: Option<SessionUser>,
}

impl StaticIdentityProvider {
    pub fn new(session: Option<SessionUser>) -> Self {
        Self { session }
    }

    pub fn anonymous() -> Self {
        Self { session: None }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn resolve_viewer(&self) -> Result<ViewerContext, IdentityError> {
        Ok(ViewerContext::from_session(self.session.as_ref()))
    }
}

/// Navigator that records every navigation.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<(String, bool)>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(path, replace)` pairs in call order
    pub fn visits(&self) -> Vec<(String, bool)> {
        self.visits.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str, replace: bool) {
        self.visits.lock().push((path.to_string(), replace));
    }
}

/// Head renderer that keeps what it was given.
#[derive(Debug, Default)]
pub struct MemoryHeadRenderer {
    rendered: Mutex<Vec<MetadataInputs>>,
}

impl MemoryHeadRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rendered(&self) -> Vec<MetadataInputs> {
        self.rendered.lock().clone()
    }
}

impl HeadRenderer for MemoryHeadRenderer {
    fn render(&self, metadata: &MetadataInputs) {
        self.rendered.lock().push(metadata.clone());
    }
}

/// In-memory analytics sink for testing
#[derive(Debug, Default)]
pub struct MemoryAnalyticsSink {
    events: Mutex<Vec<ViewEvent>>,
}

impl MemoryAnalyticsSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().clone()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl AnalyticsSink for MemoryAnalyticsSink {
    fn send(&self, event: ViewEvent) -> Result<(), AnalyticsError> {
        self.events.lock().push(event);
        Ok(())
    }
}

/// Sink that hands events to an async consumer over an unbounded channel.
#[derive(Clone, Debug)]
pub struct ChannelAnalyticsSink {
    tx: mpsc::UnboundedSender<ViewEvent>,
}

impl ChannelAnalyticsSink {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ViewEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl AnalyticsSink for ChannelAnalyticsSink {
    fn send(&self, event: ViewEvent) -> Result<(), AnalyticsError> {
        self.tx.send(event).map_err(|_| AnalyticsError::Disconnected)
    }
}

/// Sink that rejects every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingAnalyticsSink;

impl AnalyticsSink for FailingAnalyticsSink {
    fn send(&self, _event: ViewEvent) -> Result<(), AnalyticsError> {
        Err(AnalyticsError::Rejected("sink offline".to_string()))
    }
}
